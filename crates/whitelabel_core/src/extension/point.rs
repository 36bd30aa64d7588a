//! Extension point declarations.
//!
//! # Responsibility
//! - Define the closed set of extension point names known to the shell.
//! - Bind one point name to one payload type at declaration time.
//! - Act as the only factory for well-formed [`Extension`] values.
//!
//! # Invariants
//! - An [`Extension<T>`] can only be built through [`ExtensionPoint::implement_with`],
//!   so its name always matches a point declared with the same payload type.
//! - Point values are immutable once constructed.

use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::marker::PhantomData;
use std::str::FromStr;

/// String id of the bottom bar slot.
pub const POINT_BOTTOM_BAR_ITEM: &str = "BottomBarItem";
/// String id of the main view slot.
pub const POINT_MAIN_VIEW_CONTENT: &str = "MainViewContent";

/// Closed set of extension point identifiers.
///
/// Adding a slot to the shell means adding a variant here first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum ExtensionPointName {
    BottomBarItem,
    MainViewContent,
}

impl ExtensionPointName {
    /// Every declared point name, in declaration order.
    pub const ALL: [ExtensionPointName; 2] = [Self::BottomBarItem, Self::MainViewContent];

    /// Stable string id used on the command line and in log events.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::BottomBarItem => POINT_BOTTOM_BAR_ITEM,
            Self::MainViewContent => POINT_MAIN_VIEW_CONTENT,
        }
    }
}

impl Display for ExtensionPointName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExtensionPointName {
    type Err = ExtensionPointError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim();
        if normalized.is_empty() {
            return Err(ExtensionPointError::EmptyName);
        }
        Self::ALL
            .into_iter()
            .find(|name| name.as_str() == normalized)
            .ok_or_else(|| ExtensionPointError::UnknownExtensionPoint(normalized.to_string()))
    }
}

/// How many registrations a consumer of a point expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Cardinality {
    /// Any number of entries, rendered in registration order.
    #[default]
    Multiple,
    /// At most one entry; more is an authoring error.
    Single,
}

/// A named slot accepting payloads of type `T`.
pub struct ExtensionPoint<T> {
    name: ExtensionPointName,
    cardinality: Cardinality,
    _payload: PhantomData<fn() -> T>,
}

impl<T> ExtensionPoint<T> {
    /// Declares a multi-valued point.
    pub const fn of_type(name: ExtensionPointName) -> Self {
        Self {
            name,
            cardinality: Cardinality::Multiple,
            _payload: PhantomData,
        }
    }

    /// Declares a point whose consumers accept at most one entry.
    pub const fn single(name: ExtensionPointName) -> Self {
        Self {
            name,
            cardinality: Cardinality::Single,
            _payload: PhantomData,
        }
    }

    pub fn name(&self) -> ExtensionPointName {
        self.name
    }

    pub fn cardinality(&self) -> Cardinality {
        self.cardinality
    }

    /// Wraps `payload` with this point's name, producing a registrable entry.
    pub fn implement_with(&self, payload: T) -> Extension<T> {
        Extension {
            point: self.name,
            payload,
        }
    }
}

// Manual impls keep `ExtensionPoint<T>` Copy and Debug for any `T`.
impl<T> Clone for ExtensionPoint<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ExtensionPoint<T> {}

impl<T> std::fmt::Debug for ExtensionPoint<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExtensionPoint")
            .field("name", &self.name)
            .field("cardinality", &self.cardinality)
            .field("payload", &std::any::type_name::<T>())
            .finish()
    }
}

/// One registered implementation for an extension point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extension<T> {
    point: ExtensionPointName,
    payload: T,
}

impl<T> Extension<T> {
    /// Point this entry was created for.
    pub fn point(&self) -> ExtensionPointName {
        self.point
    }

    pub fn payload(&self) -> &T {
        &self.payload
    }

    pub fn into_payload(self) -> T {
        self.payload
    }
}

impl<T> std::ops::Deref for Extension<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.payload
    }
}

/// Point name parse errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtensionPointError {
    EmptyName,
    UnknownExtensionPoint(String),
}

impl Display for ExtensionPointError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "extension point name must not be empty"),
            Self::UnknownExtensionPoint(value) => {
                write!(f, "extension point is not declared: {value}")
            }
        }
    }
}

impl Error for ExtensionPointError {}

#[cfg(test)]
mod tests {
    use super::{Cardinality, ExtensionPoint, ExtensionPointError, ExtensionPointName};

    #[test]
    fn implement_with_tags_payload_with_point_name() {
        let point = ExtensionPoint::<u32>::of_type(ExtensionPointName::BottomBarItem);
        let first = point.implement_with(1);
        let second = point.implement_with(2);

        assert_eq!(first.point(), ExtensionPointName::BottomBarItem);
        assert_eq!(*first.payload(), 1);
        assert_eq!(*second, 2);
    }

    #[test]
    fn single_points_carry_cardinality() {
        let point = ExtensionPoint::<&str>::single(ExtensionPointName::MainViewContent);
        assert_eq!(point.cardinality(), Cardinality::Single);
        assert_eq!(
            ExtensionPoint::<&str>::of_type(ExtensionPointName::MainViewContent).cardinality(),
            Cardinality::Multiple
        );
    }

    #[test]
    fn parses_declared_names_and_rejects_unknown() {
        assert_eq!(
            " BottomBarItem ".parse::<ExtensionPointName>(),
            Ok(ExtensionPointName::BottomBarItem)
        );
        assert_eq!(
            "SideBarItem".parse::<ExtensionPointName>(),
            Err(ExtensionPointError::UnknownExtensionPoint(
                "SideBarItem".to_string()
            ))
        );
        assert_eq!(
            "".parse::<ExtensionPointName>(),
            Err(ExtensionPointError::EmptyName)
        );
    }

    #[test]
    fn serializes_with_string_ids() {
        assert_eq!(
            serde_json::to_string(&ExtensionPointName::MainViewContent).expect("name json"),
            "\"MainViewContent\""
        );
        assert_eq!(
            serde_json::to_string(&Cardinality::Single).expect("cardinality json"),
            "\"single\""
        );
    }

    #[test]
    fn every_declared_name_round_trips_through_its_string_id() {
        for name in ExtensionPointName::ALL {
            assert_eq!(name.as_str().parse::<ExtensionPointName>(), Ok(name));
        }
    }
}
