//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::activities::ActivitiesPage;
use crate::state::{activities::ActivitiesState, message::MessageState, session::SessionState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared state contexts. The session context starts logged out
/// on every load.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let activities = RwSignal::new(ActivitiesState::default());
    let session = RwSignal::new(SessionState::default());
    let messages = RwSignal::new(MessageState::default());

    provide_context(activities);
    provide_context(session);
    provide_context(messages);

    view! {
        <Stylesheet id="leptos" href="/pkg/activities-board.css"/>
        <Title text="School Activities"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=ActivitiesPage/>
            </Routes>
        </Router>
    }
}
