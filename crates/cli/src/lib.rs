//! Interactive text front end for the sweet shop inventory.
//!
//! The shell owns one [`Inventory`](sweetshop_inventory::Inventory) for the
//! lifetime of a session and is generic over its input/output streams.

pub mod config;
pub mod demo;
pub mod prompt;
pub mod render;
pub mod shell;

pub use config::ShellConfig;
pub use shell::Shell;
