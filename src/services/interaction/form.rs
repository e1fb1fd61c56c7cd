use crate::models::event::Event;

/// Values typed into the create/edit dialog
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventForm {
    pub title: String,
    pub location: String,
}

impl EventForm {
    pub fn new(title: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            location: location.into(),
        }
    }

    /// Form used by the create dialog
    pub fn blank() -> Self {
        Self::default()
    }

    /// Form prefilled from an existing event for the edit dialog
    pub fn for_event(event: &Event) -> Self {
        Self {
            title: event.title.clone(),
            location: event.location.clone().unwrap_or_default(),
        }
    }

    pub fn with_title(title: impl Into<String>) -> Self {
        Self::new(title, "")
    }
}
