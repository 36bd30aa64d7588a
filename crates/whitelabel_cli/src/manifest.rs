//! JSON brand manifests.
//!
//! # Responsibility
//! - Deserialize a brand description from JSON.
//! - Register its entries through the same points the code-defined brands use.
//!
//! # Invariants
//! - Entries are registered in file order.
//! - `main_view` is a list; cardinality is checked by the shell at render
//!   time, not here.

use crate::Brand;
use anyhow::Context;
use log::info;
use serde::{Deserialize, Serialize};
use std::path::Path;
use whitelabel_core::{
    create_branded_experience, BottomBarItem, DynamicConfiguration, Element, ExtensionRegistry,
    MainViewContent, Renderable, StaticConfiguration, SupportedLanguage, BOTTOM_BAR_EXTENSION,
    MAIN_VIEW_CONTENT_EXTENSION,
};

/// One bottom bar link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkSpec {
    pub label: String,
    #[serde(default)]
    pub href: Option<String>,
}

impl LinkSpec {
    fn into_renderable(self) -> Renderable {
        Renderable::new(move || match &self.href {
            Some(href) => Element::link_to(self.label.clone(), href.clone()),
            None => Element::link(self.label.clone()),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BrandManifest {
    pub application_name: String,
    #[serde(default)]
    pub language: SupportedLanguage,
    #[serde(default)]
    pub bottom_bar: Vec<LinkSpec>,
    #[serde(default)]
    pub main_view: Vec<MainViewContent>,
}

impl BrandManifest {
    pub fn from_json(raw: &str) -> anyhow::Result<Self> {
        let manifest: Self = serde_json::from_str(raw).context("invalid brand manifest")?;
        if manifest.application_name.trim().is_empty() {
            anyhow::bail!("brand manifest application_name must not be empty");
        }
        Ok(manifest)
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_json(&raw).with_context(|| format!("in {}", path.display()))
    }

    /// Populates a registry from this manifest and binds it to the shell.
    pub fn into_brand(self) -> anyhow::Result<Brand> {
        let mut registry = ExtensionRegistry::new();
        for link in self.bottom_bar {
            registry.register(
                BOTTOM_BAR_EXTENSION.implement_with(BottomBarItem::new(link.into_renderable())),
            )?;
        }
        for content in self.main_view {
            registry.register(MAIN_VIEW_CONTENT_EXTENSION.implement_with(content))?;
        }
        info!(
            "event=manifest_load module=cli status=ok application={} points={}",
            self.application_name,
            registry.point_names().len()
        );

        Ok(Brand {
            static_configuration: StaticConfiguration::new(self.application_name),
            dynamic_configuration: DynamicConfiguration {
                language: self.language,
            },
            experience: create_branded_experience(registry),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::BrandManifest;
    use whitelabel_core::SupportedLanguage;

    #[test]
    fn parses_minimal_manifest_with_defaults() {
        let manifest = BrandManifest::from_json(r#"{"application_name":"Ra"}"#).expect("manifest");
        assert_eq!(manifest.language, SupportedLanguage::En);
        assert!(manifest.bottom_bar.is_empty());
        assert!(manifest.main_view.is_empty());
    }

    #[test]
    fn rejects_unknown_fields_and_blank_names() {
        assert!(BrandManifest::from_json(r#"{"application_name":"Ra","sidebar":[]}"#).is_err());
        assert!(BrandManifest::from_json(r#"{"application_name":"  "}"#).is_err());
    }

    #[test]
    fn links_keep_file_order_and_targets() {
        let manifest = BrandManifest::from_json(
            r#"{
                "application_name": "Ra",
                "language": "DE",
                "bottom_bar": [
                    {"label": "Impressum", "href": "/impressum"},
                    {"label": "Kontakt"}
                ]
            }"#,
        )
        .expect("manifest");
        let html = manifest
            .into_brand()
            .expect("brand")
            .render_html()
            .expect("render");

        assert!(html.starts_with("<div class=\"page\" lang=\"de\">"));
        assert!(html.contains("<a href=\"/impressum\">Impressum</a><a>Kontakt</a><a>Legal</a>"));
        assert!(html.contains("Messier 87"));
    }
}
