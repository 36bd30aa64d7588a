//! Brand bootstrap for the white-label shell.
//!
//! # Responsibility
//! - Populate one registry per brand and bind it to the shell.
//! - Build brands from code (`brands`) or from JSON manifests (`manifest`).
//! - Describe the declared extension points for `whitelabel points`.

pub mod brands;
pub mod manifest;

use anyhow::Context;
use brands::{builtin, BUILTIN_BRANDS};
use log::info;
use manifest::BrandManifest;
use serde::Serialize;
use std::path::PathBuf;
use whitelabel_core::{
    BrandedExperience, Cardinality, DynamicConfiguration, ExtensionPointName, RenderContext,
    ShellError, StaticConfiguration, BOTTOM_BAR_EXTENSION, MAIN_VIEW_CONTENT_EXTENSION,
};

/// Everything needed to render one brand.
#[derive(Debug, Clone)]
pub struct Brand {
    pub static_configuration: StaticConfiguration,
    pub dynamic_configuration: DynamicConfiguration,
    pub experience: BrandedExperience,
}

impl Brand {
    pub fn render_html(&self) -> Result<String, ShellError> {
        let ctx = RenderContext::empty()
            .with_static_configuration(&self.static_configuration);
        let page = self.experience.render(ctx, &self.dynamic_configuration)?;
        Ok(page.render_html()?)
    }
}

/// Loads the brands selected on the command line.
///
/// A manifest wins over names; no names means every built-in brand.
pub fn load_brands(names: Vec<String>, manifest: Option<PathBuf>) -> anyhow::Result<Vec<Brand>> {
    if let Some(path) = manifest {
        return Ok(vec![BrandManifest::load(&path)?.into_brand()?]);
    }

    let names = if names.is_empty() {
        BUILTIN_BRANDS.iter().map(|name| name.to_string()).collect()
    } else {
        names
    };
    let mut brands = Vec::with_capacity(names.len());
    for name in &names {
        let brand = builtin(name)
            .with_context(|| {
                format!(
                    "unknown brand `{name}`; expected one of {}",
                    BUILTIN_BRANDS.join("|")
                )
            })?
            .with_context(|| format!("failed to bootstrap brand `{name}`"))?;
        brands.push(brand);
    }
    info!(
        "event=brands_loaded module=cli status=ok count={}",
        brands.len()
    );
    Ok(brands)
}

/// One line of `whitelabel points` output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PointInfo {
    pub name: ExtensionPointName,
    pub cardinality: Cardinality,
}

impl PointInfo {
    pub fn of(name: ExtensionPointName) -> Self {
        let cardinality = match name {
            ExtensionPointName::BottomBarItem => BOTTOM_BAR_EXTENSION.cardinality(),
            ExtensionPointName::MainViewContent => MAIN_VIEW_CONTENT_EXTENSION.cardinality(),
        };
        Self { name, cardinality }
    }
}

/// Declared points, or only `filter` when a point name is given.
pub fn list_points(filter: Option<&str>) -> anyhow::Result<Vec<PointInfo>> {
    match filter {
        Some(raw) => {
            let name = raw
                .parse::<ExtensionPointName>()
                .with_context(|| format!("invalid --point `{raw}`"))?;
            Ok(vec![PointInfo::of(name)])
        }
        None => Ok(ExtensionPointName::ALL
            .into_iter()
            .map(PointInfo::of)
            .collect()),
    }
}
