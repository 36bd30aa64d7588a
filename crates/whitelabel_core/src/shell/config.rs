//! Brand configuration values handed to the shell.

use serde::{Deserialize, Serialize};

/// Per-brand values fixed at bootstrap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticConfiguration {
    /// Shown in the top bar greeting.
    pub application_name: String,
}

impl StaticConfiguration {
    pub fn new(application_name: impl Into<String>) -> Self {
        Self {
            application_name: application_name.into(),
        }
    }
}

/// Languages the shell can be rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SupportedLanguage {
    #[default]
    En,
    De,
}

impl SupportedLanguage {
    /// BCP 47 tag used for the page `lang` attribute.
    pub fn tag(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::De => "de",
        }
    }
}

/// Values chosen per render of a branded experience.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DynamicConfiguration {
    #[serde(default)]
    pub language: SupportedLanguage,
}
