//! Core of the white-label shell.
//! Owns the extension registry contract and the shell that consumes it.

pub mod extension;
pub mod logging;
pub mod shell;

pub use extension::point::{
    Cardinality, Extension, ExtensionPoint, ExtensionPointError, ExtensionPointName,
};
pub use extension::registry::{ExtensionRegistry, ExtensionRegistryError, FrozenRegistry};
pub use logging::{default_log_level, init_logging, logging_status, LoggingConfig, LoggingError};
pub use shell::branded::{create_branded_experience, BrandedExperience};
pub use shell::components::{
    bottom_bar, legal, main_view, top_bar, BottomBarItem, MainViewContent, BOTTOM_BAR_EXTENSION,
    MAIN_VIEW_CONTENT_EXTENSION,
};
pub use shell::config::{DynamicConfiguration, StaticConfiguration, SupportedLanguage};
pub use shell::context::{RenderContext, ShellError};
pub use shell::element::{Element, Renderable};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
