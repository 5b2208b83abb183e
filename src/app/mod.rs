pub mod events;
pub mod input_handler;
pub mod state;

pub use state::*;
