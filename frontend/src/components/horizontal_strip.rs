use yew::prelude::*;

use crate::scroll::hooks::use_pin_region;

#[derive(Clone, Copy, PartialEq)]
pub struct Project {
    pub title: &'static str,
    pub category: &'static str,
    pub accent: &'static str,
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Café Brisa",
        category: "Branding · Web",
        accent: "#d9a46d",
    },
    Project {
        title: "Clínica Alba",
        category: "Web · SEO",
        accent: "#6dd9c4",
    },
    Project {
        title: "Ruta Norte",
        category: "App móvil",
        accent: "#7EB2FF",
    },
    Project {
        title: "Taller 9",
        category: "E-commerce",
        accent: "#e07a9a",
    },
    Project {
        title: "Faro Legal",
        category: "Marketing digital",
        accent: "#b79cf0",
    },
];

#[derive(Properties, PartialEq)]
pub struct HorizontalStripProps {
    pub heading: AttrValue,
    #[prop_or(PROJECTS)]
    pub projects: &'static [Project],
}

/// Pinned section whose project strip slides sideways as the page scrolls.
#[function_component(HorizontalStrip)]
pub fn horizontal_strip(props: &HorizontalStripProps) -> Html {
    let section_ref = use_node_ref();
    let frame_ref = use_node_ref();
    let strip_ref = use_node_ref();
    let length = use_pin_region(section_ref.clone(), frame_ref.clone(), strip_ref.clone());

    html! {
        <section
            ref={section_ref}
            class="pin-section"
            style={format!("height: calc(100vh + {length:.0}px);")}
        >
            <div ref={frame_ref} class="pin-frame">
                <h2 class="pin-heading">{props.heading.clone()}</h2>
                <div ref={strip_ref} class="pin-strip">
                    { for props.projects.iter().map(|project| html! {
                        <article class="project-card" style={format!("--accent: {};", project.accent)}>
                            <span class="project-category">{project.category}</span>
                            <h3>{project.title}</h3>
                        </article>
                    }) }
                </div>
            </div>
            <style>
                {r#"
                    .pin-section {
                        position: relative;
                    }
                    .pin-frame {
                        position: absolute;
                        top: 0;
                        left: 0;
                        width: 100%;
                        height: 100vh;
                        overflow: hidden;
                        display: flex;
                        flex-direction: column;
                        justify-content: center;
                    }
                    .pin-heading {
                        color: #fff;
                        font-size: 2.5rem;
                        padding: 0 4rem;
                        margin-bottom: 2rem;
                    }
                    .pin-strip {
                        display: flex;
                        gap: 2rem;
                        padding: 0 4rem;
                        width: max-content;
                        will-change: transform;
                    }
                    .project-card {
                        width: 420px;
                        height: 52vh;
                        border-radius: 24px;
                        padding: 2rem;
                        display: flex;
                        flex-direction: column;
                        justify-content: flex-end;
                        background: linear-gradient(160deg, var(--accent), #141418 75%);
                    }
                    .project-card h3 {
                        color: #fff;
                        font-size: 1.8rem;
                        margin: 0.25rem 0 0;
                    }
                    .project-category {
                        color: rgba(255, 255, 255, 0.7);
                        font-size: 0.9rem;
                    }
                    @media (max-width: 768px) {
                        .pin-heading {
                            padding: 0 1.5rem;
                        }
                        .pin-strip {
                            padding: 0 1.5rem;
                        }
                        .project-card {
                            width: 78vw;
                        }
                    }
                "#}
            </style>
        </section>
    }
}
