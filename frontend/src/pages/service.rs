use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{
    footer::Footer,
    hero::{self, Hero},
};
use crate::nav::menu::{service_label, Localized};
use crate::nav::state::Language;
use crate::scroll::hooks::{use_scroll_bindings, use_scroll_to_top};
use crate::Route;

const EYEBROW: Localized = Localized::new("Servicios", "Services");
const SUBTITLE: Localized = Localized::new(
    "Un proceso claro, entregas frecuentes y un equipo que entiende tu negocio.",
    "A clear process, frequent deliveries and a team that understands your business.",
);
const CTA: Localized = Localized::new("Pide presupuesto", "Request a quote");

#[derive(Properties, PartialEq)]
pub struct ServiceProps {
    pub slug: AttrValue,
}

#[function_component(Service)]
pub fn service(props: &ServiceProps) -> Html {
    let language = use_context::<Language>().unwrap_or_default();
    let root = use_node_ref();
    use_scroll_to_top();
    use_scroll_bindings(root.clone(), hero::bindings);

    match service_label(&props.slug, language) {
        Some(label) => html! {
            <div ref={root} class="service-page">
                <Hero
                    eyebrow={Some(AttrValue::from(EYEBROW.get(language)))}
                    title={label}
                    subtitle={SUBTITLE.get(language)}
                    cta={Some((AttrValue::from(CTA.get(language)), Route::Contact))}
                />
                <Footer />
            </div>
        },
        None => html! { <Redirect<Route> to={Route::NotFound} /> },
    }
}
