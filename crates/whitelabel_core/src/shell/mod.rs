//! Presentational shell: top bar, main view, bottom bar.
//!
//! # Responsibility
//! - Render a fixed page layout whose slot content comes from the registry.
//! - Surface authoring and setup mistakes as errors instead of empty output.
//!
//! # See also
//! - `crate::extension` for the registry contract consumed here.

pub mod branded;
pub mod components;
pub mod config;
pub mod context;
pub mod element;
