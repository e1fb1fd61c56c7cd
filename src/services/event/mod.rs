//! Calendar event service entry point.
//! Holds the session's events in memory, with mutations in `crud` and
//! filtered views in `queries`.

use crate::models::event::{Event, EventId};

pub mod crud;
mod error;
pub mod queries;

pub use error::EventError;

/// In-memory store of the session's events, kept in insertion order.
#[derive(Debug, Clone)]
pub struct EventStore {
    pub(crate) events: Vec<Event>,
    next_id: u64,
}

impl Default for EventStore {
    fn default() -> Self {
        Self::new()
    }
}

impl EventStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Retrieve an event by ID.
    pub fn get(&self, id: EventId) -> Option<&Event> {
        self.events.iter().find(|event| event.id == id)
    }

    /// Every live event in insertion order
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub(crate) fn allocate_id(&mut self) -> EventId {
        let id = EventId(self.next_id);
        self.next_id += 1;
        id
    }
}
