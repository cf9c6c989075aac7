//! Colour theme selection stored alongside the board.

use super::ParseThemeError;
use serde::{Deserialize, Serialize};

/// Colour theme for the presentation layer.
///
/// The theme is a presentation preference, not board content: it is
/// persisted next to the board but never enters the undo/redo stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    /// Light surfaces with dark text.
    #[default]
    Light,
    /// Dark surfaces with light text.
    Dark,
    /// Light purple-tinted surfaces.
    Purple,
}

impl Theme {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::Purple => "purple",
        }
    }
}

impl TryFrom<&str> for Theme {
    type Error = ParseThemeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            "purple" => Ok(Self::Purple),
            _ => Err(ParseThemeError(value.to_owned())),
        }
    }
}
