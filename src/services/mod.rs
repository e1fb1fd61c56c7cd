// Service module exports

pub mod calendar_grid;
pub mod event;
pub mod interaction;
pub mod settings;
