// File: crates/chart-data/src/hover.rs
// Summary: Hover-sync registry across linked chart instances, plus legend selection events.

use std::cell::RefCell;
use std::collections::BTreeSet;

/// Registry coordinating chart instances that share a hover-sync group.
///
/// Only the instance the pointer is actually over renders its tooltip;
/// linked instances stay quiet. Lives with the single-threaded rendering
/// surface, so interior mutability is enough.
#[derive(Debug, Default)]
pub struct HoverSync {
    instances: RefCell<BTreeSet<String>>,
    active: RefCell<Option<String>>,
}

impl HoverSync {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&self, id: impl Into<String>) {
        self.instances.borrow_mut().insert(id.into());
    }

    pub fn unregister(&self, id: &str) {
        self.instances.borrow_mut().remove(id);
        let mut active = self.active.borrow_mut();
        if active.as_deref() == Some(id) {
            *active = None;
        }
    }

    /// Mark `id` as the hovered instance. Unregistered ids are ignored.
    pub fn activate(&self, id: &str) {
        if self.instances.borrow().contains(id) {
            *self.active.borrow_mut() = Some(id.to_string());
        }
    }

    /// Pointer left the group; no instance renders a tooltip.
    pub fn deactivate(&self) {
        *self.active.borrow_mut() = None;
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active.borrow().as_deref() == Some(id)
    }
}

/// Read-only set of visible series fields. Owned by the host; the pipeline
/// receives it per render and never mutates it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    visible: BTreeSet<String>,
}

/// Outward notification that the user toggled a legend entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectionEvent {
    pub field: String,
    pub visible: bool,
}

impl Selection {
    pub fn from_fields<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { visible: fields.into_iter().map(Into::into).collect() }
    }

    pub fn contains(&self, field: &str) -> bool {
        self.visible.contains(field)
    }

    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    /// Pure toggle: the updated selection plus the event for the host.
    pub fn toggled(&self, field: &str) -> (Selection, SelectionEvent) {
        let mut next = self.clone();
        let visible = if next.visible.contains(field) {
            next.visible.remove(field);
            false
        } else {
            next.visible.insert(field.to_string());
            true
        };
        (next, SelectionEvent { field: field.to_string(), visible })
    }
}
