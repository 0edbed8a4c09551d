//! Terminal client: renders engine snapshots and turns key presses into
//! engine commands.

pub mod app;
pub mod board;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod render;
pub mod runtime;
pub mod settings;
pub mod theme;
