//! datepick-rs: headless date-picking widget engines.
//!
//! This crate provides two selector variants sharing one value model (a
//! single optional calendar date): a pointer-driven year/month timeline and
//! a month grid calendar. Interaction logic is pure Rust; drawing goes
//! through backend-agnostic render frames with optional cairo/GTK4 backends.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod locale;
pub mod render;
pub mod telemetry;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use api::{GridCalendar, GridConfig, SelectionEvent, TimelineConfig, TimelineSelector};
pub use error::{PickerError, PickerResult};
