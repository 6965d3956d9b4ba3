use yew::prelude::*;

use crate::scroll::binding::{ScrollBinding, TriggerPoint};
use crate::scroll::style::Style;

#[derive(Clone, Copy, PartialEq)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub initials: &'static str,
}

pub const TEAM: &[TeamMember] = &[
    TeamMember {
        name: "Lucía Prieto",
        role: "Dirección creativa",
        initials: "LP",
    },
    TeamMember {
        name: "Martín Vega",
        role: "Desarrollo",
        initials: "MV",
    },
    TeamMember {
        name: "Sara Ibáñez",
        role: "Estrategia digital",
        initials: "SI",
    },
    TeamMember {
        name: "Hugo Reyes",
        role: "Diseño de producto",
        initials: "HR",
    },
];

/// Cards follow the scrollbar while they enter, and rewind when scrolled
/// back up.
pub fn bindings() -> Vec<ScrollBinding> {
    vec![
        ScrollBinding::reveal(".team-heading"),
        ScrollBinding::scrubbed(".team-member", TriggerPoint::top_at(1.0), TriggerPoint::top_at(0.6))
            .start_style(Style::visible().opacity(0.2).shifted(0.0, 60.0).scaled(0.94))
            .end_style(Style::visible())
            .scrub_factor(0.4),
    ]
}

#[derive(Properties, PartialEq)]
pub struct TeamGridProps {
    pub heading: AttrValue,
    #[prop_or(TEAM)]
    pub members: &'static [TeamMember],
}

#[function_component(TeamGrid)]
pub fn team_grid(props: &TeamGridProps) -> Html {
    html! {
        <section class="team-section">
            <h2 class="team-heading">{props.heading.clone()}</h2>
            <div class="team-grid">
                { for props.members.iter().map(|member| html! {
                    <div class="team-member">
                        <div class="team-avatar">{member.initials}</div>
                        <h3>{member.name}</h3>
                        <p>{member.role}</p>
                    </div>
                }) }
            </div>
            <style>
                {r#"
                    .team-section {
                        padding: 6rem 2rem;
                        max-width: 1100px;
                        margin: 0 auto;
                    }
                    .team-heading {
                        color: #fff;
                        font-size: 2.5rem;
                        text-align: center;
                        margin-bottom: 3rem;
                    }
                    .team-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
                        gap: 2rem;
                    }
                    .team-member {
                        text-align: center;
                    }
                    .team-avatar {
                        width: 120px;
                        height: 120px;
                        margin: 0 auto 1rem;
                        border-radius: 50%;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: linear-gradient(135deg, #1e90ff, #7EB2FF);
                        color: #0c0c0e;
                        font-size: 2rem;
                        font-weight: 700;
                    }
                    .team-member h3 {
                        color: #fff;
                        margin: 0.5rem 0 0.25rem;
                    }
                    .team-member p {
                        color: #999;
                    }
                "#}
            </style>
        </section>
    }
}
