//! Scoped render context passed explicitly down the shell components.
//!
//! # Invariants
//! - Lookups of values never supplied fail with a diagnostic naming the
//!   missing setup step; there is no empty fallback.

use crate::extension::registry::{ExtensionRegistryError, FrozenRegistry};
use crate::shell::config::StaticConfiguration;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Borrowed handles available to components during one render pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderContext<'a> {
    registry: Option<&'a FrozenRegistry>,
    static_configuration: Option<&'a StaticConfiguration>,
}

impl<'a> RenderContext<'a> {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_registry(mut self, registry: &'a FrozenRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    pub fn with_static_configuration(mut self, configuration: &'a StaticConfiguration) -> Self {
        self.static_configuration = Some(configuration);
        self
    }

    pub fn registry(&self) -> Result<&'a FrozenRegistry, ShellError> {
        self.registry.ok_or(ShellError::MissingRegistry)
    }

    pub fn static_configuration(&self) -> Result<&'a StaticConfiguration, ShellError> {
        self.static_configuration
            .ok_or(ShellError::MissingStaticConfiguration)
    }
}

/// Errors that halt rendering of a shell slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellError {
    MissingRegistry,
    MissingStaticConfiguration,
    Registry(ExtensionRegistryError),
    Template(String),
}

impl Display for ShellError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingRegistry => write!(
                f,
                "extension registry not configured: no registry found in the render context; \
                 supply one with RenderContext::with_registry"
            ),
            Self::MissingStaticConfiguration => write!(
                f,
                "static configuration not configured: add a StaticConfiguration to the \
                 render context of the calling component"
            ),
            Self::Registry(err) => write!(f, "{err}"),
            Self::Template(message) => write!(f, "failed to render page template: {message}"),
        }
    }
}

impl Error for ShellError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Registry(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ExtensionRegistryError> for ShellError {
    fn from(err: ExtensionRegistryError) -> Self {
        Self::Registry(err)
    }
}

impl From<askama::Error> for ShellError {
    fn from(err: askama::Error) -> Self {
        Self::Template(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::{RenderContext, ShellError};
    use crate::extension::registry::ExtensionRegistry;
    use crate::shell::config::StaticConfiguration;

    #[test]
    fn empty_context_reports_missing_registry() {
        let err = RenderContext::empty()
            .registry()
            .expect_err("registry was never supplied");
        assert_eq!(err, ShellError::MissingRegistry);
        assert!(err.to_string().contains("not configured"));
    }

    #[test]
    fn empty_context_reports_missing_static_configuration() {
        let err = RenderContext::empty()
            .static_configuration()
            .expect_err("configuration was never supplied");
        assert_eq!(err, ShellError::MissingStaticConfiguration);
        assert!(err.to_string().contains("StaticConfiguration"));
    }

    #[test]
    fn supplied_values_are_returned() {
        let registry = ExtensionRegistry::new().freeze();
        let config = StaticConfiguration::new("Geb");
        let ctx = RenderContext::empty()
            .with_registry(&registry)
            .with_static_configuration(&config);

        assert!(ctx.registry().is_ok());
        assert_eq!(
            ctx.static_configuration()
                .expect("configuration")
                .application_name,
            "Geb"
        );
    }
}
