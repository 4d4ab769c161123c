//! Input adapters: the command-line configuration surface and, behind the
//! `gui` feature, the windowed event loop.

pub mod cli;

#[cfg(feature = "gui")]
pub mod gui;
