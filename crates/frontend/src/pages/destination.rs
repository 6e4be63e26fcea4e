//! Destination picker: a `tablist` with one panel and one picture per tab.

use contracts::shared::markup::{bool_attr, display_style, tabindex_attr};
use leptos::prelude::*;

struct Destination {
    key: &'static str,
    name: &'static str,
    description: &'static str,
    distance: &'static str,
    travel: &'static str,
}

const DESTINATIONS: &[Destination] = &[
    Destination {
        key: "moon",
        name: "Moon",
        description: "See our planet as you've never seen it before. A perfect relaxing trip away to help regain perspective and come back refreshed.",
        distance: "384,400 km",
        travel: "3 days",
    },
    Destination {
        key: "mars",
        name: "Mars",
        description: "Don't forget to pack your hiking boots. You'll need them to tackle Olympus Mons, the tallest planetary mountain in our solar system.",
        distance: "225 mil. km",
        travel: "9 months",
    },
    Destination {
        key: "europa",
        name: "Europa",
        description: "The smallest of the four Galilean moons orbiting Jupiter, Europa is a winter lover's dream.",
        distance: "628 mil. km",
        travel: "3 years",
    },
    Destination {
        key: "titan",
        name: "Titan",
        description: "The only moon known to have a dense atmosphere other than Earth, Titan is a home away from home.",
        distance: "1.6 bil. km",
        travel: "7 years",
    },
];

#[component]
pub fn DestinationTabs() -> impl IntoView {
    let pictures = DESTINATIONS
        .iter()
        .enumerate()
        .map(|(i, d)| {
            let selected = i == 0;
            view! {
                <picture
                    id=format!("{}-image", d.key)
                    style=display_style(selected)
                >
                    <img src=format!("/assets/destination/image-{}.webp", d.key) alt=d.name />
                </picture>
            }
        })
        .collect_view();

    let tabs = DESTINATIONS
        .iter()
        .enumerate()
        .map(|(i, d)| {
            let selected = i == 0;
            view! {
                <button
                    class="destination__tab"
                    role="tab"
                    aria-selected=bool_attr(selected)
                    aria-controls=format!("{}-tab", d.key)
                    data-image=format!("{}-image", d.key)
                    tabindex=tabindex_attr(selected)
                >
                    {d.name}
                </button>
            }
        })
        .collect_view();

    let panels = DESTINATIONS
        .iter()
        .enumerate()
        .map(|(i, d)| {
            let selected = i == 0;
            let hidden = !selected;
            view! {
                <article
                    class="destination__info"
                    id=format!("{}-tab", d.key)
                    role="tabpanel"
                    tabindex="0"
                    hidden=hidden
                >
                    <h2>{d.name}</h2>
                    <p>{d.description}</p>
                    <div class="destination__meta">
                        <div>
                            <h3>"Avg. distance"</h3>
                            <p>{d.distance}</p>
                        </div>
                        <div>
                            <h3>"Est. travel time"</h3>
                            <p>{d.travel}</p>
                        </div>
                    </div>
                </article>
            }
        })
        .collect_view();

    view! {
        <main id="destination" class="destination">
            <h1>"Pick your destination"</h1>
            {pictures}
            <div class="destination__tabs" role="tablist" aria-label="destination list">
                {tabs}
            </div>
            {panels}
        </main>
    }
}
