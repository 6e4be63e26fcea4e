use crate::pages::{CrewDots, DestinationTabs};
use crate::widgets::attach_all;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn App() -> impl IntoView {
    // Tab widgets work on plain DOM attributes, so they are attached once the
    // view is in the document rather than through signals.
    Effect::new(move |_| {
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(0).await;

            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            let attached = attach_all(&document);
            log::info!("tab widgets attached: {attached}");
        });
    });

    view! {
        <DestinationTabs />
        <CrewDots />
    }
}
