use yew::prelude::*;

use crate::components::{
    footer::Footer,
    hero::{self, Hero},
    team_grid::{self, TeamGrid},
    values_grid::{self, ValuesGrid},
};
use crate::scroll::hooks::{use_scroll_bindings, use_scroll_to_top};

#[function_component(About)]
pub fn about() -> Html {
    use_scroll_to_top();
    let root = use_node_ref();
    use_scroll_bindings(root.clone(), || {
        let mut bindings = hero::bindings();
        bindings.extend(team_grid::bindings());
        bindings.extend(values_grid::bindings());
        bindings
    });

    html! {
        <div ref={root} class="about-page">
            <Hero
                eyebrow={Some(AttrValue::from("Nosotros"))}
                title="Un estudio pequeño con ambición grande"
                subtitle="Nacimos para acompañar a marcas locales en su salto digital, de la primera idea al lanzamiento."
            />
            <TeamGrid heading="El equipo" />
            <ValuesGrid heading="Lo que nos mueve" />
            <Footer />
        </div>
    }
}
