//! Multi-step terminal intake form for portfolio briefs.
//!
//! The two cores are `form::navigator` (the clamped step state machine) and
//! `form::projects` (the repeatable project-block factory); `app` wires them
//! to key events and `ui` renders their state.

pub mod app;
pub mod config;
pub mod form;
pub mod logging;
pub mod submit;
pub mod ui;
