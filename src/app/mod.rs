pub mod events;
pub mod search;
pub mod settings;
pub mod state;
