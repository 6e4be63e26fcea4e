//! Crew carousel driven by a `dotlist` of `dot` buttons.

use contracts::shared::markup::{bool_attr, display_style, tabindex_attr};
use leptos::prelude::*;

struct CrewMember {
    key: &'static str,
    role: &'static str,
    name: &'static str,
    bio: &'static str,
}

const CREW: &[CrewMember] = &[
    CrewMember {
        key: "commander",
        role: "Commander",
        name: "Douglas Hurley",
        bio: "Douglas Gerald Hurley is an American engineer, former Marine Corps pilot and former NASA astronaut.",
    },
    CrewMember {
        key: "mission-specialist",
        role: "Mission Specialist",
        name: "Mark Shuttleworth",
        bio: "Mark Richard Shuttleworth is the founder and CEO of Canonical, the company behind the Linux-based Ubuntu operating system.",
    },
    CrewMember {
        key: "pilot",
        role: "Pilot",
        name: "Victor Glover",
        bio: "Pilot on the first operational flight of the SpaceX Crew Dragon to the International Space Station.",
    },
    CrewMember {
        key: "flight-engineer",
        role: "Flight Engineer",
        name: "Anousheh Ansari",
        bio: "Anousheh Ansari is an Iranian American engineer and co-founder of Prodea Systems.",
    },
];

#[component]
pub fn CrewDots() -> impl IntoView {
    let dots = CREW
        .iter()
        .enumerate()
        .map(|(i, m)| {
            let selected = i == 0;
            view! {
                <button
                    class="crew__dot"
                    role="dot"
                    aria-selected=bool_attr(selected)
                    aria-controls=format!("{}-tab", m.key)
                    data-image=format!("{}-image", m.key)
                    tabindex=tabindex_attr(selected)
                >
                    <span class="sr-only">{m.role}</span>
                </button>
            }
        })
        .collect_view();

    let panels = CREW
        .iter()
        .enumerate()
        .map(|(i, m)| {
            let selected = i == 0;
            let hidden = !selected;
            view! {
                <article class="crew__details" id=format!("{}-tab", m.key) role="tabpanel" hidden=hidden>
                    <header>
                        <h2>{m.role}</h2>
                        <p>{m.name}</p>
                    </header>
                    <p>{m.bio}</p>
                </article>
            }
        })
        .collect_view();

    let pictures = CREW
        .iter()
        .enumerate()
        .map(|(i, m)| {
            let selected = i == 0;
            view! {
                <picture
                    id=format!("{}-image", m.key)
                    style=display_style(selected)
                >
                    <img src=format!("/assets/crew/image-{}.webp", m.key) alt=m.name />
                </picture>
            }
        })
        .collect_view();

    view! {
        <main id="crew" class="crew">
            <h1>"Meet your crew"</h1>
            <div class="crew__dots" role="dotlist" aria-label="crew member list">
                {dots}
            </div>
            {panels}
            {pictures}
        </main>
    }
}
