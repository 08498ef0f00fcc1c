//! Feedback notifier
//!
//! A click on the page's primary action shows a fixed message through a
//! blocking dialog. The dialog itself sits behind the [`Notifier`] trait.

use std::rc::Rc;

use crate::result::Result;
use crate::wiring::Wiring;

/// Message shown on every click of the feedback trigger.
pub const DEFAULT_FEEDBACK_MESSAGE: &str = "Gracias por tu interés. En la siguiente iteración conectaremos este flujo con la red de pruebas de StarkNet.";

/// Shows a message to the user.
pub trait Notifier {
    /// # Errors
    ///
    /// Returns [`crate::Error::NotifyFailed`] when the message cannot be shown.
    fn notify(&self, message: &str) -> Result<()>;
}

impl<N: Notifier + ?Sized> Notifier for &N {
    fn notify(&self, message: &str) -> Result<()> {
        (**self).notify(message)
    }
}

impl<N: Notifier + ?Sized> Notifier for Rc<N> {
    fn notify(&self, message: &str) -> Result<()> {
        (**self).notify(message)
    }
}

/// Binds a notifier to the fixed feedback message.
#[derive(Debug, Clone)]
pub struct FeedbackNotifier<N> {
    notifier: N,
    message: String,
}

impl<N: Notifier> FeedbackNotifier<N> {
    pub fn new(notifier: N, message: impl Into<String>) -> Self {
        Self {
            notifier,
            message: message.into(),
        }
    }

    /// Notifier with [`DEFAULT_FEEDBACK_MESSAGE`].
    pub fn with_default_message(notifier: N) -> Self {
        Self::new(notifier, DEFAULT_FEEDBACK_MESSAGE)
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Handle one click: exactly one notification, nothing else.
    ///
    /// # Errors
    ///
    /// Propagates the notifier's error.
    pub fn click(&self) -> Result<()> {
        self.notifier.notify(&self.message)
    }

    /// Attach to `trigger` if it exists.
    ///
    /// `attach` receives the trigger and this notifier and is expected to
    /// call [`FeedbackNotifier::click`] from its click handler. It is not
    /// called when the trigger is absent.
    ///
    /// # Errors
    ///
    /// Propagates the error returned by `attach`.
    pub fn wire<T, F>(self, trigger: Option<T>, attach: F) -> Result<Wiring>
    where
        F: FnOnce(T, Self) -> Result<()>,
    {
        let Some(trigger) = trigger else {
            tracing::debug!("Feedback trigger absent, no handler attached");
            return Ok(Wiring::NotWired);
        };

        attach(trigger, self)?;
        tracing::info!("Feedback notifier wired");
        Ok(Wiring::Wired)
    }
}
