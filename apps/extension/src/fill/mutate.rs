//! Autofill Mutator — writes a value into a classified element and notifies
//! the host page.

use tracing::debug;

use crate::errors::FillError;
use crate::fill::dom::{EventKind, FieldEvent, FormElement};

/// Sets the element's value, then dispatches a bubbling `change` event
/// followed by a bubbling `input` event.
///
/// Both events fire on every application, even when the value is unchanged,
/// so ancestor listeners observe each fill exactly once. A detached element
/// is reported as [`FillError::StaleElement`] and left untouched; callers at
/// the content-script boundary swallow that error.
pub fn fill_element(element: &mut dyn FormElement, value: &str) -> Result<(), FillError> {
    if !element.is_attached() {
        return Err(FillError::StaleElement);
    }

    element.set_value(value);
    element.dispatch_event(FieldEvent {
        kind: EventKind::Change,
        bubbles: true,
    });
    element.dispatch_event(FieldEvent {
        kind: EventKind::Input,
        bubbles: true,
    });

    debug!(value, "filled focused element");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fill::dom::TestElement;

    #[test]
    fn test_sets_value_and_dispatches_change_then_input() {
        let mut element = TestElement::with_id("linkedin-url");
        fill_element(&mut element, "https://example.com").unwrap();

        assert_eq!(element.value, "https://example.com");
        assert_eq!(element.events.len(), 2);
        assert_eq!(element.events[0].kind, EventKind::Change);
        assert_eq!(element.events[1].kind, EventKind::Input);
        assert!(element.events.iter().all(|e| e.bubbles));
    }

    #[test]
    fn test_refill_is_idempotent_in_content_but_renotifies() {
        let mut element = TestElement::with_id("github");
        fill_element(&mut element, "alexdmds").unwrap();
        fill_element(&mut element, "alexdmds").unwrap();

        assert_eq!(element.value, "alexdmds");
        // Two applications, two change+input pairs.
        assert_eq!(element.events.len(), 4);
        assert_eq!(element.events[2].kind, EventKind::Change);
        assert_eq!(element.events[3].kind, EventKind::Input);
    }

    #[test]
    fn test_empty_value_still_notifies() {
        let mut element = TestElement::with_id("country");
        fill_element(&mut element, "").unwrap();
        assert_eq!(element.value, "");
        assert_eq!(element.events.len(), 2);
    }

    #[test]
    fn test_stale_element_is_left_untouched() {
        let mut element = TestElement::detached("linkedin-url");
        let result = fill_element(&mut element, "value");
        assert_eq!(result, Err(FillError::StaleElement));
        assert_eq!(element.value, "");
        assert!(element.events.is_empty());
    }
}
