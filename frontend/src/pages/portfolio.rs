use yew::prelude::*;

use crate::components::{
    footer::Footer,
    hero::{self, Hero},
    horizontal_strip::HorizontalStrip,
};
use crate::scroll::hooks::{use_scroll_bindings, use_scroll_to_top};

#[function_component(Portfolio)]
pub fn portfolio() -> Html {
    use_scroll_to_top();
    let root = use_node_ref();
    use_scroll_bindings(root.clone(), hero::bindings);

    html! {
        <div ref={root} class="portfolio-page">
            <Hero
                eyebrow={Some(AttrValue::from("Portafolio"))}
                title="Trabajo del que estamos orgullosos"
                subtitle="Una selección de marcas, webs y apps que hemos construido con nuestros clientes."
            />
            <HorizontalStrip heading="Casos" />
            <Footer />
        </div>
    }
}
