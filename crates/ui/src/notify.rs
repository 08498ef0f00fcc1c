//! Browser side of the feedback notifier
//!
//! `window.alert` is the blocking dialog; the click listener is a leaked
//! `Closure` that lives as long as the page.

use plotgrid_core::{Error, FeedbackNotifier, Notifier, Wiring};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, Event};

/// Shows messages with `window.alert`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlertNotifier;

impl Notifier for AlertNotifier {
    fn notify(&self, message: &str) -> plotgrid_core::Result<()> {
        let window = web_sys::window().ok_or_else(|| Error::notify_failed("no window"))?;
        window
            .alert_with_message(message)
            .map_err(|e| Error::notify_failed(format!("{e:?}")))
    }
}

/// Handle one click, logging instead of propagating since there is no caller.
pub fn handle_click<N: Notifier>(feedback: &FeedbackNotifier<N>) {
    if let Err(e) = feedback.click() {
        web_sys::console::error_1(&format!("Feedback notification failed: {e}").into());
    }
}

/// Attach `feedback` to the trigger's click event, if the trigger exists.
///
/// # Errors
///
/// Returns [`Error::AttachFailed`] when `addEventListener` throws.
pub fn wire_feedback_trigger<N>(
    trigger: Option<Element>,
    feedback: FeedbackNotifier<N>,
) -> plotgrid_core::Result<Wiring>
where
    N: Notifier + 'static,
{
    feedback.wire(trigger, |element, feedback| {
        let on_click = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
            handle_click(&feedback);
        });
        element
            .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
            .map_err(|e| Error::attach_failed(format!("{e:?}")))?;
        on_click.forget();
        Ok(())
    })
}
