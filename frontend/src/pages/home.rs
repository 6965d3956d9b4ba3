use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{
    footer::Footer,
    hero::{self, Hero},
    horizontal_strip::HorizontalStrip,
    values_grid::{self, ValuesGrid},
};
use crate::scroll::binding::ScrollBinding;
use crate::scroll::hooks::{use_scroll_bindings, use_scroll_to_top};
use crate::Route;

#[function_component(Home)]
pub fn home() -> Html {
    use_scroll_to_top();
    let root = use_node_ref();
    use_scroll_bindings(root.clone(), || {
        let mut bindings = hero::bindings();
        bindings.extend(values_grid::bindings());
        bindings.push(ScrollBinding::reveal(".cta-block").duration(1.0));
        bindings
    });

    html! {
        <div ref={root} class="home-page">
            <Hero
                eyebrow={Some(AttrValue::from("Agencia digital"))}
                title="Webs y marcas que se sienten vivas"
                subtitle="Diseñamos, desarrollamos y hacemos crecer productos digitales para negocios que quieren destacar."
                cta={Some((AttrValue::from("Hablemos"), Route::Contact))}
            />
            <ValuesGrid heading="Cómo trabajamos" />
            <HorizontalStrip heading="Proyectos recientes" />
            <section class="cta-section">
                <div class="cta-block">
                    <h2>{"¿Tienes un proyecto en mente?"}</h2>
                    <Link<Route> to={Route::Contact} classes="forward-link">
                        <button class="hero-cta">{"Empezar ahora"}</button>
                    </Link<Route>>
                </div>
            </section>
            <Footer />
            <style>
                {r#"
                    .cta-section {
                        padding: 8rem 2rem;
                        text-align: center;
                    }
                    .cta-block h2 {
                        color: #fff;
                        font-size: 2.5rem;
                        margin-bottom: 2rem;
                    }
                "#}
            </style>
        </div>
    }
}
