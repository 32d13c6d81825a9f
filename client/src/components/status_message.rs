//! The `#message` status line.

use leptos::prelude::*;

use crate::state::message::MessageState;

/// Shows the current status message, styled by severity; hidden when empty.
#[component]
pub fn StatusMessage() -> impl IntoView {
    let messages = expect_context::<RwSignal<MessageState>>();

    let class = move || {
        messages.with(|m| match &m.current {
            Some(msg) => msg.kind.css_class(),
            None => "hidden",
        })
    };
    let text = move || {
        messages.with(|m| m.current.as_ref().map(|msg| msg.text.clone()).unwrap_or_default())
    };

    view! {
        <div id="message" class=class role="status" aria-live="polite">
            {text}
        </div>
    }
}
