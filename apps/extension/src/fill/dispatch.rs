//! Trigger Dispatch — the content-script message handler.
//!
//! One-shot per message: a `fillField` action classifies the currently
//! focused element and writes the resolved value. Everything else is dropped
//! silently, and no failure here may ever reach the host page.

use tracing::debug;

use crate::fill::classify::classify;
use crate::fill::dom::FormElement;
use crate::fill::mutate::fill_element;
use crate::fill::values::AutofillValues;
use crate::messages::Message;

/// Handles one cross-context message in the content-script context.
///
/// `focused` is the active element of the host document at the time the
/// message arrives, if any. Unrecognized actions, an unfocused document, an
/// unclassified element, and a stale element handle all end the same way:
/// nothing happens and nothing is surfaced.
pub fn handle_message(
    message: &Message,
    focused: Option<&mut dyn FormElement>,
    values: &AutofillValues,
) {
    if *message != Message::FillField {
        debug!(?message, "ignoring non-fill message");
        return;
    }

    let Some(element) = focused else {
        debug!("fill requested with no focused element");
        return;
    };

    let kind = classify(
        element.id().as_deref(),
        element.name().as_deref(),
        element.placeholder().as_deref(),
    );

    let Some(kind) = kind else {
        debug!("focused element did not classify, leaving it alone");
        return;
    };

    if let Err(error) = fill_element(element, values.resolve(kind)) {
        // Swallowed: the context-menu click must never break the page.
        debug!(%error, ?kind, "fill failed");
    }
}
