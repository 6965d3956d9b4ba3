use yew::prelude::*;
use yew_router::prelude::*;

use crate::scroll::binding::{ScrollBinding, TriggerPoint};
use crate::scroll::style::Style;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub title: AttrValue,
    pub subtitle: AttrValue,
    #[prop_or_default]
    pub eyebrow: Option<AttrValue>,
    #[prop_or_default]
    pub cta: Option<(AttrValue, Route)>,
}

/// Title and subtitle rise in once; the whole block fades out as it
/// scrolls off the top.
pub fn bindings() -> Vec<ScrollBinding> {
    vec![
        ScrollBinding::reveal(".hero-title").duration(1.0),
        ScrollBinding::reveal(".hero-subtitle").duration(1.2),
        ScrollBinding::scrubbed(
            ".hero-content",
            TriggerPoint::new(0.0, 0.3),
            TriggerPoint::bottom_at(0.0),
        )
        .end_style(Style::hidden().shifted(0.0, -60.0).scaled(0.96)),
    ]
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    html! {
        <header class="hero">
            <div class="hero-background"></div>
            <div class="hero-content">
                {
                    if let Some(eyebrow) = &props.eyebrow {
                        html! { <p class="hero-eyebrow">{eyebrow.clone()}</p> }
                    } else {
                        html! {}
                    }
                }
                <h1 class="hero-title">{props.title.clone()}</h1>
                <p class="hero-subtitle">{props.subtitle.clone()}</p>
                {
                    if let Some((label, route)) = &props.cta {
                        html! {
                            <Link<Route> to={route.clone()} classes="forward-link">
                                <button class="hero-cta">{label.clone()}</button>
                            </Link<Route>>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
            <style>
                {r#"
                    .hero {
                        position: relative;
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        padding: 6rem 2rem 4rem;
                        overflow: hidden;
                    }
                    .hero-background {
                        position: absolute;
                        inset: 0;
                        background: radial-gradient(circle at 30% 20%, rgba(126, 178, 255, 0.18), transparent 60%), #0c0c0e;
                        z-index: 0;
                    }
                    .hero-content {
                        position: relative;
                        z-index: 1;
                        max-width: 820px;
                        text-align: center;
                    }
                    .hero-eyebrow {
                        color: #7EB2FF;
                        letter-spacing: 0.2em;
                        text-transform: uppercase;
                        font-size: 0.85rem;
                    }
                    .hero-title {
                        font-size: clamp(2.5rem, 6vw, 4.5rem);
                        line-height: 1.05;
                        margin: 1rem 0;
                        color: #fff;
                    }
                    .hero-subtitle {
                        color: #aaa;
                        font-size: 1.2rem;
                        line-height: 1.6;
                        margin-bottom: 2.5rem;
                    }
                    .hero-cta {
                        background: #7EB2FF;
                        color: #0c0c0e;
                        border: none;
                        border-radius: 999px;
                        padding: 1rem 2.5rem;
                        font-size: 1rem;
                        font-weight: 600;
                        cursor: pointer;
                    }
                "#}
            </style>
        </header>
    }
}
