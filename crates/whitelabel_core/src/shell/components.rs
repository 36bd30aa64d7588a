//! Shell components and the extension points they consume.
//!
//! # Responsibility
//! - Declare the `BottomBarItem` and `MainViewContent` points.
//! - Map registry entries into their slot of the page.
//!
//! # Invariants
//! - Bottom bar items render in registration order, before `Legal`.
//! - The main view renders exactly one content payload: the registered one
//!   or the built-in default. Two or more registrations render nothing.

use crate::extension::point::{ExtensionPoint, ExtensionPointName};
use crate::shell::context::{RenderContext, ShellError};
use crate::shell::element::{Element, Renderable};
use log::debug;
use serde::{Deserialize, Serialize};

pub const DEFAULT_MAIN_VIEW_IMAGE_URL: &str =
    "https://upload.wikimedia.org/wikipedia/commons/4/4f/Black_hole_-_Messier_87_crop_max_res.jpg";
pub const DEFAULT_MAIN_VIEW_CAPTION: &str = "Messier 87";
pub const DEFAULT_MAIN_VIEW_ALT: &str = "nothing here";

/// Payload for one bottom bar entry.
#[derive(Debug, Clone)]
pub struct BottomBarItem {
    pub element: Renderable,
}

impl BottomBarItem {
    pub fn new(element: Renderable) -> Self {
        Self { element }
    }
}

/// Payload for the main image panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MainViewContent {
    pub image_url: String,
    pub caption: String,
    pub alt: String,
}

impl MainViewContent {
    pub fn new(
        image_url: impl Into<String>,
        caption: impl Into<String>,
        alt: impl Into<String>,
    ) -> Self {
        Self {
            image_url: image_url.into(),
            caption: caption.into(),
            alt: alt.into(),
        }
    }
}

impl Default for MainViewContent {
    fn default() -> Self {
        Self::new(
            DEFAULT_MAIN_VIEW_IMAGE_URL,
            DEFAULT_MAIN_VIEW_CAPTION,
            DEFAULT_MAIN_VIEW_ALT,
        )
    }
}

pub const BOTTOM_BAR_EXTENSION: ExtensionPoint<BottomBarItem> =
    ExtensionPoint::of_type(ExtensionPointName::BottomBarItem);

pub const MAIN_VIEW_CONTENT_EXTENSION: ExtensionPoint<MainViewContent> =
    ExtensionPoint::single(ExtensionPointName::MainViewContent);

/// Built-in trailing bottom bar entry.
pub fn legal() -> Element {
    Element::link("Legal")
}

pub fn top_bar(ctx: &RenderContext<'_>) -> Result<Element, ShellError> {
    let config = ctx.static_configuration()?;
    Ok(Element::Header(vec![Element::text(format!(
        "Welcome to {}",
        config.application_name
    ))]))
}

pub fn bottom_bar(ctx: &RenderContext<'_>) -> Result<Element, ShellError> {
    let registry = ctx.registry()?;
    let mut items: Vec<Element> = registry
        .extensions_for(&BOTTOM_BAR_EXTENSION)?
        .iter()
        .map(|extension| extension.element.render())
        .collect();
    debug!(
        "event=render_slot module=shell status=ok slot=bottom_bar registered={}",
        items.len()
    );
    items.push(legal());
    Ok(Element::Footer(vec![Element::Row(items)]))
}

pub fn main_view(ctx: &RenderContext<'_>) -> Result<Element, ShellError> {
    let registry = ctx.registry()?;
    let content = match registry.single_for(&MAIN_VIEW_CONTENT_EXTENSION)? {
        Some(extension) => extension.into_payload(),
        None => {
            debug!("event=render_slot module=shell status=fallback slot=main_view");
            MainViewContent::default()
        }
    };
    Ok(Element::Main(vec![Element::Column(vec![
        Element::Image {
            src: content.image_url,
            alt: content.alt,
        },
        Element::Text(content.caption),
    ])]))
}
