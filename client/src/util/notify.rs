//! Status-message display with auto-expiry.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every user action ends by calling [`flash`]. The expiry timer is armed per
//! message and never cancelled; [`MessageState::expire`] ignores timers whose
//! message has already been replaced.

use leptos::prelude::*;

use crate::state::message::{MessageKind, MessageState};

/// Show `text` immediately and hide it again after the message lifetime.
pub fn flash(messages: RwSignal<MessageState>, kind: MessageKind, text: impl Into<String>) {
    let text = text.into();
    let Some(id) = messages.try_update(|m| m.show(kind, text)) else {
        return;
    };

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(crate::state::message::MESSAGE_LIFETIME).await;
        messages.update(|m| {
            m.expire(id);
        });
    });

    #[cfg(not(feature = "hydrate"))]
    let _ = id;
}
