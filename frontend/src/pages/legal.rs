use yew::prelude::*;

use crate::components::footer::Footer;
use crate::config;
use crate::scroll::binding::ScrollBinding;
use crate::scroll::hooks::{use_scroll_bindings, use_scroll_to_top};

#[function_component(Legal)]
pub fn legal() -> Html {
    use_scroll_to_top();
    let root = use_node_ref();
    use_scroll_bindings(root.clone(), || vec![ScrollBinding::reveal(".legal-section").duration(0.5)]);

    html! {
        <div ref={root} class="legal-page">
            <h1>{"Aviso legal y privacidad"}</h1>
            <section class="legal-section">
                <h2>{"Titular"}</h2>
                <p>{"Este sitio pertenece a Estudio Norte S.L., con domicilio en Valencia."}</p>
            </section>
            <section class="legal-section">
                <h2>{"Datos personales"}</h2>
                <p>
                    {"Este sitio no recoge datos personales ni utiliza cookies de seguimiento. Si nos escribes a "}
                    {config::CONTACT_EMAIL}
                    {", usaremos tu correo solo para responderte."}
                </p>
            </section>
            <Footer />
            <style>
                {r#"
                    .legal-page {
                        max-width: 800px;
                        margin: 0 auto;
                        padding: 8rem 2rem 0;
                        color: #bbb;
                        line-height: 1.7;
                    }
                    .legal-page h1, .legal-page h2 {
                        color: #fff;
                    }
                    .legal-section {
                        margin-bottom: 2.5rem;
                    }
                "#}
            </style>
        </div>
    }
}
