//! Terminal runtime: raw-mode session guard and the demo host application.

mod demo;
pub mod terminal;

pub use demo::{DemoApp, default_tour};
pub use terminal::TerminalGuard;
