//! Host-page element abstraction.
//!
//! The content script only ever touches the focused input through this seam:
//! read the three identifying attributes, write the value, dispatch bubbling
//! notification events. The host DOM itself belongs to the page.

/// Notification event dispatched after a value write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Change,
    Input,
}

/// A dispatched event as observed by host-page listeners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldEvent {
    pub kind: EventKind,
    /// Always true for autofill notifications so ancestor listeners see them.
    pub bubbles: bool,
}

/// Handle to a live form input supplied by the host page.
///
/// `is_attached` reports whether the element is still part of its document;
/// mutation of a detached element must be a no-op for the implementor, and
/// callers treat it as a swallowed failure.
pub trait FormElement {
    fn id(&self) -> Option<String>;
    fn name(&self) -> Option<String>;
    fn placeholder(&self) -> Option<String>;
    fn is_attached(&self) -> bool;
    fn set_value(&mut self, value: &str);
    fn dispatch_event(&mut self, event: FieldEvent);
}

/// In-memory element used by the dev harness and tests. Records dispatched
/// events in order so notification behavior can be asserted.
#[derive(Debug, Clone, Default)]
pub struct TestElement {
    pub id: Option<String>,
    pub name: Option<String>,
    pub placeholder: Option<String>,
    pub value: String,
    pub attached: bool,
    pub events: Vec<FieldEvent>,
}

impl TestElement {
    pub fn with_id(id: &str) -> Self {
        TestElement {
            id: Some(id.to_string()),
            attached: true,
            ..Default::default()
        }
    }

    pub fn detached(id: &str) -> Self {
        TestElement {
            id: Some(id.to_string()),
            attached: false,
            ..Default::default()
        }
    }
}

impl FormElement for TestElement {
    fn id(&self) -> Option<String> {
        self.id.clone()
    }

    fn name(&self) -> Option<String> {
        self.name.clone()
    }

    fn placeholder(&self) -> Option<String> {
        self.placeholder.clone()
    }

    fn is_attached(&self) -> bool {
        self.attached
    }

    fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
    }

    fn dispatch_event(&mut self, event: FieldEvent) {
        self.events.push(event);
    }
}
