use super::{EventError, EventStore};
use crate::models::event::{non_empty_title, optional_location, Event, EventId, Slot};

impl EventStore {
    /// Create a new event for `slot` and append it to the store.
    pub fn create(&mut self, title: &str, location: &str, slot: Slot) -> Result<Event, EventError> {
        let title = non_empty_title(title).ok_or(EventError::EmptyTitle)?;

        let event = Event::from_slot(self.allocate_id(), title, optional_location(location), slot);
        log::info!("Created event {} '{}' at {}", event.id, event.title, event.start);

        self.events.push(event.clone());
        Ok(event)
    }

    /// Replace the title of an existing event, leaving every other field untouched.
    pub fn edit_title(&mut self, id: EventId, title: &str) -> Result<Event, EventError> {
        let title = non_empty_title(title).ok_or(EventError::EmptyTitle)?;

        let event = self
            .events
            .iter_mut()
            .find(|event| event.id == id)
            .ok_or(EventError::NotFound(id))?;

        log::info!("Renamed event {} '{}' -> '{}'", id, event.title, title);
        event.title = title;
        Ok(event.clone())
    }

    /// Delete an event by ID.
    pub fn delete(&mut self, id: EventId) -> Result<(), EventError> {
        let index = self
            .events
            .iter()
            .position(|event| event.id == id)
            .ok_or(EventError::NotFound(id))?;

        let removed = self.events.remove(index);
        log::info!("Deleted event {} '{}'", removed.id, removed.title);
        Ok(())
    }
}
