use thiserror::Error;

use crate::models::event::EventId;

/// Errors returned by event store operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EventError {
    #[error("Event title cannot be empty")]
    EmptyTitle,

    #[error("Event with id {0} not found")]
    NotFound(EventId),
}

impl EventError {
    /// User-friendly error message for UI display.
    pub fn user_message(&self) -> String {
        match self {
            Self::EmptyTitle => "Please enter a title for the event".to_string(),
            Self::NotFound(_) => "That event no longer exists".to_string(),
        }
    }

    /// Whether the dialog that triggered this error should stay open.
    pub fn keeps_dialog_open(&self) -> bool {
        matches!(self, Self::EmptyTitle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(EventError::EmptyTitle.to_string(), "Event title cannot be empty");
        assert_eq!(
            EventError::NotFound(EventId(7)).to_string(),
            "Event with id 7 not found"
        );
    }

    #[test]
    fn test_error_user_messages() {
        assert!(EventError::EmptyTitle.user_message().contains("title"));
        assert!(EventError::NotFound(EventId(1))
            .user_message()
            .contains("no longer"));
    }

    #[test]
    fn test_keeps_dialog_open() {
        assert!(EventError::EmptyTitle.keeps_dialog_open());
        assert!(!EventError::NotFound(EventId(1)).keeps_dialog_open());
    }
}
