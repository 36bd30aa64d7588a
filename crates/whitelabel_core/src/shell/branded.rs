//! Branded experience: one fully populated registry bound to the shell.

use crate::extension::registry::FrozenRegistry;
use crate::shell::components::{bottom_bar, main_view, top_bar};
use crate::shell::config::DynamicConfiguration;
use crate::shell::context::{RenderContext, ShellError};
use crate::shell::element::Element;
use log::info;

/// Shell instance bound to one brand's registry.
#[derive(Debug, Clone)]
pub struct BrandedExperience {
    registry: FrozenRegistry,
}

/// Freezes `registry` and binds it to the shell.
pub fn create_branded_experience(registry: impl Into<FrozenRegistry>) -> BrandedExperience {
    BrandedExperience {
        registry: registry.into(),
    }
}

impl BrandedExperience {
    pub fn registry(&self) -> &FrozenRegistry {
        &self.registry
    }

    /// Renders the page. `outer` supplies values owned by the caller, such as
    /// the static configuration; the registry is added here.
    pub fn render(
        &self,
        outer: RenderContext<'_>,
        config: &DynamicConfiguration,
    ) -> Result<Element, ShellError> {
        let ctx = outer.with_registry(&self.registry);
        let page = Element::Page {
            lang: config.language.tag(),
            children: vec![top_bar(&ctx)?, main_view(&ctx)?, bottom_bar(&ctx)?],
        };
        info!(
            "event=render_page module=shell status=ok application={} language={}",
            ctx.static_configuration()?.application_name,
            config.language.tag()
        );
        Ok(page)
    }
}
