pub mod cli;
pub mod config;
pub mod effects;
pub mod events;
pub mod input_handler;
pub mod keys;
pub mod state;

pub use input_handler::Action;
pub use state::*;
