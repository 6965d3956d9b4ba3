use yew::prelude::*;

use crate::components::{
    footer::Footer,
    hero::{self, Hero},
};
use crate::config;
use crate::scroll::binding::ScrollBinding;
use crate::scroll::hooks::{use_scroll_bindings, use_scroll_to_top};

#[function_component(Contact)]
pub fn contact() -> Html {
    use_scroll_to_top();
    let root = use_node_ref();
    use_scroll_bindings(root.clone(), || {
        let mut bindings = hero::bindings();
        bindings.push(ScrollBinding::reveal(".contact-card"));
        bindings
    });

    html! {
        <div ref={root} class="contact-page">
            <Hero
                eyebrow={Some(AttrValue::from("Contacto"))}
                title="Cuéntanos tu idea"
                subtitle="Respondemos en menos de 24 horas laborables."
            />
            <section class="contact-section">
                <div class="contact-card">
                    <h3>{"Escríbenos"}</h3>
                    <a href={format!("mailto:{}", config::CONTACT_EMAIL)}>{config::CONTACT_EMAIL}</a>
                </div>
                <div class="contact-card">
                    <h3>{"Visítanos"}</h3>
                    <p>{"Calle Mayor 12, 2º · Valencia"}</p>
                </div>
                <div class="contact-card">
                    <h3>{"Horario"}</h3>
                    <p>{"Lunes a viernes, 9:00 – 18:00"}</p>
                </div>
            </section>
            <Footer />
            <style>
                {r#"
                    .contact-section {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                        gap: 1.5rem;
                        max-width: 1000px;
                        margin: 0 auto;
                        padding: 4rem 2rem 8rem;
                    }
                    .contact-card {
                        background: rgba(30, 30, 34, 0.8);
                        border-radius: 20px;
                        padding: 2rem;
                        color: #999;
                    }
                    .contact-card h3 {
                        color: #fff;
                    }
                    .contact-card a {
                        color: #7EB2FF;
                    }
                "#}
            </style>
        </div>
    }
}
