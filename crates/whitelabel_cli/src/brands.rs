//! Built-in demo brands.

use crate::Brand;
use whitelabel_core::{
    create_branded_experience, BottomBarItem, DynamicConfiguration, Element, ExtensionRegistry,
    ExtensionRegistryError, MainViewContent, Renderable, StaticConfiguration,
    BOTTOM_BAR_EXTENSION, MAIN_VIEW_CONTENT_EXTENSION,
};

/// Names accepted by [`builtin`].
pub const BUILTIN_BRANDS: &[&str] = &["nut", "geb"];

fn contact() -> Element {
    Element::link("Send us a mail")
}

fn terms_of_use() -> Element {
    Element::link("Terms of Use")
}

fn privacy_policy() -> Element {
    Element::link("Privacy Policy")
}

fn bottom_bar_item(render: fn() -> Element) -> BottomBarItem {
    BottomBarItem::new(Renderable::new(render))
}

pub fn nut() -> Result<Brand, ExtensionRegistryError> {
    let mut registry = ExtensionRegistry::new();
    for render in [terms_of_use, privacy_policy, contact] {
        registry.register(BOTTOM_BAR_EXTENSION.implement_with(bottom_bar_item(render)))?;
    }
    let content = MainViewContent::new(
        "https://upload.wikimedia.org/wikipedia/commons/d/df/Nut.svg",
        "Nut - Egyptian goddess of the Sky",
        "Nut",
    );
    registry.register(MAIN_VIEW_CONTENT_EXTENSION.implement_with(content))?;

    Ok(Brand {
        static_configuration: StaticConfiguration::new("Nut"),
        dynamic_configuration: DynamicConfiguration::default(),
        experience: create_branded_experience(registry),
    })
}

pub fn geb() -> Result<Brand, ExtensionRegistryError> {
    let shows = BottomBarItem::new(Renderable::link("Geb Shows"));
    let mut registry = ExtensionRegistry::new();
    registry.register(BOTTOM_BAR_EXTENSION.implement_with(shows))?;
    registry.register(BOTTOM_BAR_EXTENSION.implement_with(bottom_bar_item(contact)))?;
    let content = MainViewContent::new(
        "https://upload.wikimedia.org/wikipedia/commons/5/53/Geb.svg",
        "Geb - Egyptian god of the Earth",
        "Geb",
    );
    registry.register(MAIN_VIEW_CONTENT_EXTENSION.implement_with(content))?;

    Ok(Brand {
        static_configuration: StaticConfiguration::new("Geb"),
        dynamic_configuration: DynamicConfiguration::default(),
        experience: create_branded_experience(registry),
    })
}

/// Looks up a built-in brand by case-insensitive name.
pub fn builtin(name: &str) -> Option<Result<Brand, ExtensionRegistryError>> {
    match name.trim().to_ascii_lowercase().as_str() {
        "nut" => Some(nut()),
        "geb" => Some(geb()),
        _ => None,
    }
}
