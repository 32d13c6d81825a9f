//! Blocking browser confirmation prompt for destructive actions.

/// Ask the user to confirm `prompt` with `window.confirm`.
///
/// Returns `false` when the dialog is dismissed, unavailable, or called
/// outside the browser.
pub fn confirm(prompt: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(prompt).ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = prompt;
        false
    }
}
