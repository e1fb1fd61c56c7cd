// Module exports for models

pub mod event;
pub mod filter;
pub mod month;
pub mod settings;
