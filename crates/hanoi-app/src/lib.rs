//! Shared library module for the Hanoi app crate.
#![allow(missing_docs, clippy::missing_errors_doc, clippy::missing_panics_doc)]

use std::time::Duration;

pub use self::app::HanoiApp;

pub const HINT_DISPLAY_DURATION: Duration = Duration::from_secs(5);
pub const CONFETTI_DURATION: Duration = Duration::from_millis(2800);

pub mod action;
pub mod action_handler;
pub mod app;
pub mod persistence;
pub mod state;
pub mod timer;
pub mod ui;
pub mod version;
pub mod view_model_builder;
