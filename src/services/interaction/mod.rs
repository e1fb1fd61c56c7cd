//! Interaction controller.
//!
//! Maps user actions onto state transitions. [`CalendarState::apply`] takes
//! the current state by value and hands back the next one together with an
//! [`Outcome`] the presentation layer can report on.

use chrono::{NaiveDate, NaiveDateTime};

use crate::models::event::{Event, EventId, Slot};
use crate::models::filter::FilterMode;
use crate::models::month::{MonthRef, NavDirection};
use crate::services::calendar_grid::{grid_cells, GridCell};
use crate::services::event::{EventError, EventStore};

mod form;

pub use form::EventForm;

/// Which dialog, if any, is open
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    Idle,
    /// Create dialog for a slot that has no event yet
    Creating(Slot),
    /// Edit/delete dialog for an existing event
    Editing(EventId),
}

/// A discrete user input
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    ClickDate(NaiveDate),
    /// Click on an event marker inside a day cell
    ClickEvent(EventId),
    Submit(EventForm),
    Cancel,
    Delete,
    Navigate(NavDirection),
    SetFilter(FilterMode),
}

/// Result of applying an action
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The action did not apply in the current state
    Unchanged,
    /// A dialog was opened, switched or closed
    SelectionChanged,
    /// Month or filter changed
    ViewChanged,
    Created(Event),
    Updated(Event),
    Deleted(EventId),
    Rejected(EventError),
}

/// Complete session state: events, open dialog and view settings
#[derive(Debug, Clone)]
pub struct CalendarState {
    store: EventStore,
    selection: Selection,
    month: MonthRef,
    filter: FilterMode,
}

impl Default for CalendarState {
    fn default() -> Self {
        Self::new(
            MonthRef::current(),
            FilterMode::default(),
        )
    }
}

impl CalendarState {
    pub fn new(month: MonthRef, filter: FilterMode) -> Self {
        Self {
            store: EventStore::new(),
            selection: Selection::Idle,
            month,
            filter,
        }
    }

    /// Replace the event store, e.g. to seed a session
    pub fn with_store(mut self, store: EventStore) -> Self {
        self.store = store;
        self
    }

    pub fn store(&self) -> &EventStore {
        &self.store
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn month(&self) -> MonthRef {
        self.month
    }

    pub fn filter(&self) -> FilterMode {
        self.filter
    }

    /// Event behind the edit dialog, if one is open
    pub fn selected_event(&self) -> Option<&Event> {
        match self.selection {
            Selection::Editing(id) => self.store.get(id),
            _ => None,
        }
    }

    /// Events visible under the active filter
    pub fn visible_events(&self, now: NaiveDateTime) -> Vec<&Event> {
        self.store.list_events(self.filter, now)
    }

    /// Grid for the displayed month
    pub fn grid(&self, today: NaiveDate) -> Vec<GridCell> {
        grid_cells(self.month, today)
    }

    /// Apply `action`, returning the next state and what happened.
    pub fn apply(self, action: Action, now: NaiveDateTime) -> (Self, Outcome) {
        log::debug!("Applying {:?} in {:?}", action, self.selection);

        let (next, outcome) = match action {
            Action::ClickDate(date) => self.click_date(date, now),
            Action::ClickEvent(id) => self.click_event(id),
            Action::Submit(form) => self.submit(&form),
            Action::Cancel => self.cancel(),
            Action::Delete => self.delete(),
            Action::Navigate(direction) => self.navigate(direction),
            Action::SetFilter(mode) => self.set_filter(mode),
        };

        log::debug!("-> {:?} ({:?})", next.selection, outcome);
        (next, outcome)
    }

    fn click_date(mut self, date: NaiveDate, now: NaiveDateTime) -> (Self, Outcome) {
        // Positional tie-break: the first match in store order wins
        let first = self
            .store
            .events_for_date(self.filter, now, date)
            .first()
            .map(|event| event.id);

        self.selection = match first {
            Some(id) => Selection::Editing(id),
            None => Selection::Creating(Slot::for_date(date)),
        };
        (self, Outcome::SelectionChanged)
    }

    fn click_event(mut self, id: EventId) -> (Self, Outcome) {
        if self.store.get(id).is_none() {
            log::warn!("Ignoring click on unknown event {}", id);
            return (self, Outcome::Unchanged);
        }

        self.selection = Selection::Editing(id);
        (self, Outcome::SelectionChanged)
    }

    fn submit(mut self, form: &EventForm) -> (Self, Outcome) {
        let selection = self.selection;
        let result = match selection {
            Selection::Idle => return (self, Outcome::Unchanged),
            Selection::Creating(slot) => self
                .store
                .create(&form.title, &form.location, slot)
                .map(Outcome::Created),
            Selection::Editing(id) => self
                .store
                .edit_title(id, &form.title)
                .map(Outcome::Updated),
        };

        match result {
            Ok(outcome) => {
                self.selection = Selection::Idle;
                (self, outcome)
            }
            Err(err) => self.reject(err),
        }
    }

    fn cancel(mut self) -> (Self, Outcome) {
        if self.selection == Selection::Idle {
            return (self, Outcome::Unchanged);
        }

        self.selection = Selection::Idle;
        (self, Outcome::SelectionChanged)
    }

    fn delete(mut self) -> (Self, Outcome) {
        let selection = self.selection;
        let Selection::Editing(id) = selection else {
            return (self, Outcome::Unchanged);
        };

        match self.store.delete(id) {
            Ok(()) => {
                self.selection = Selection::Idle;
                (self, Outcome::Deleted(id))
            }
            Err(err) => self.reject(err),
        }
    }

    fn navigate(mut self, direction: NavDirection) -> (Self, Outcome) {
        self.month = self.month.navigate(direction);
        (self, Outcome::ViewChanged)
    }

    fn set_filter(mut self, mode: FilterMode) -> (Self, Outcome) {
        if self.filter == mode {
            return (self, Outcome::Unchanged);
        }

        self.filter = mode;
        (self, Outcome::ViewChanged)
    }

    fn reject(mut self, err: EventError) -> (Self, Outcome) {
        log::debug!("Rejected in {:?}: {}", self.selection, err);
        if !err.keeps_dialog_open() {
            self.selection = Selection::Idle;
        }
        (self, Outcome::Rejected(err))
    }
}
