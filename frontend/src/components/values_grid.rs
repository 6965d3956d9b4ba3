use yew::prelude::*;

use crate::scroll::binding::ScrollBinding;

#[derive(Clone, Copy, PartialEq)]
pub struct Value {
    pub icon: &'static str,
    pub title: &'static str,
    pub body: &'static str,
}

pub const VALUES: &[Value] = &[
    Value {
        icon: "◎",
        title: "Claridad",
        body: "Diseño que se entiende a la primera, sin ruido.",
    },
    Value {
        icon: "◧",
        title: "Oficio",
        body: "Código cuidado, rápido y accesible en cada pantalla.",
    },
    Value {
        icon: "◭",
        title: "Resultados",
        body: "Medimos lo que importa y ajustamos hasta que funciona.",
    },
    Value {
        icon: "▣",
        title: "Cercanía",
        body: "Un equipo pequeño que responde y se implica.",
    },
];

pub fn bindings() -> Vec<ScrollBinding> {
    vec![
        ScrollBinding::reveal(".values-heading"),
        ScrollBinding::reveal(".value-card"),
    ]
}

#[derive(Properties, PartialEq)]
pub struct ValuesGridProps {
    pub heading: AttrValue,
    #[prop_or(VALUES)]
    pub values: &'static [Value],
}

#[function_component(ValuesGrid)]
pub fn values_grid(props: &ValuesGridProps) -> Html {
    html! {
        <section class="values-section">
            <h2 class="values-heading">{props.heading.clone()}</h2>
            <div class="values-grid">
                { for props.values.iter().map(|value| html! {
                    <div class="value-card">
                        <span class="value-icon">{value.icon}</span>
                        <h3>{value.title}</h3>
                        <p>{value.body}</p>
                    </div>
                }) }
            </div>
            <style>
                {r#"
                    .values-section {
                        padding: 6rem 2rem;
                        max-width: 1200px;
                        margin: 0 auto;
                    }
                    .values-heading {
                        color: #fff;
                        font-size: 2.5rem;
                        text-align: center;
                        margin-bottom: 3rem;
                    }
                    .values-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                        gap: 1.5rem;
                    }
                    .value-card {
                        background: rgba(30, 30, 34, 0.8);
                        border: 1px solid rgba(126, 178, 255, 0.12);
                        border-radius: 20px;
                        padding: 2rem;
                    }
                    .value-card h3 {
                        color: #fff;
                        margin: 1rem 0 0.5rem;
                    }
                    .value-card p {
                        color: #999;
                        line-height: 1.6;
                    }
                    .value-icon {
                        color: #7EB2FF;
                        font-size: 1.75rem;
                    }
                "#}
            </style>
        </section>
    }
}
