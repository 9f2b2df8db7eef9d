//! Onboarding flow: steps, tour files and the sequencer.

mod manager;
mod step;
pub mod tour;

#[cfg(test)]
mod tests;

pub use manager::{FlowEvent, FlowManager};
pub use step::{Step, StepError, validate_steps};
pub use tour::{Tour, TourError};
