//! Ratatui rendering for the terminal host.

mod overlay;

pub use overlay::PointerOverlay;
