use dioxus::prelude::*;
use shared_types::FieldChange;

/// Latest value of each named demo field, shared across the gallery.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DemoValues {
    pub username: Signal<String>,
    pub email: Signal<String>,
    pub password: Signal<String>,
    pub confirm_password: Signal<String>,
    pub search_query: Signal<String>,
    pub show_password: Signal<bool>,
}

impl DemoValues {
    pub fn new() -> Self {
        Self {
            username: Signal::new(String::new()),
            email: Signal::new(String::new()),
            password: Signal::new(String::new()),
            confirm_password: Signal::new(String::new()),
            search_query: Signal::new(String::new()),
            show_password: Signal::new(false),
        }
    }
}

pub fn use_demo_values() -> DemoValues {
    use_context::<DemoValues>()
}

/// Build a change handler that stores the value into `target`.
///
/// Validity is logged, not stored; the gallery only keeps the raw text.
pub fn record_into(
    mut target: Signal<String>,
    field: &'static str,
    log_changes: bool,
) -> impl FnMut(FieldChange) + 'static {
    move |change: FieldChange| {
        if log_changes {
            tracing::info!(field, valid = change.is_valid, "demo field changed");
        }
        target.set(change.value);
    }
}

/// Change handler for fields that only log.
pub fn log_only(field: &'static str, log_changes: bool) -> impl FnMut(FieldChange) + 'static {
    move |change: FieldChange| {
        if log_changes {
            tracing::info!(field, value = %change.value, valid = change.is_valid, "demo field changed");
        }
    }
}
