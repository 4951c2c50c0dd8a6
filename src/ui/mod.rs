// Terminal presentation adapter
// Turns typed commands into picker messages and draws the picker as text

pub mod messages;
pub mod render;

pub use messages::{update, Message};
