//! Glidepath: an animated onboarding pointer and the flow that walks it
//! through a tour of on-screen elements.
//!
//! The crate is host-agnostic: tours run over any `page::Page`. The
//! `page::MemoryPage` host backs tests, and `page::TerminalPage` together
//! with `ui::PointerOverlay` renders tours in a ratatui application.

pub mod cli;
pub mod easing;
pub mod flow;
pub mod geometry;
pub mod input;
pub mod onboarding;
pub mod page;
pub mod pointer;
pub mod runtime;
pub mod scheduler;
pub mod telemetry;
pub mod ui;

pub use flow::{FlowEvent, FlowManager, Step, Tour};
pub use onboarding::{OnboardingHandle, TriggerEvent, start_onboarding};
pub use page::Page;
pub use pointer::Pointer;
pub use scheduler::{ManualScheduler, Scheduler, SystemScheduler};
