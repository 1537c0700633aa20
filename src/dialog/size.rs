use std::fmt;
use std::str::FromStr;

use ratatui::layout::Constraint;
use serde::{Deserialize, Serialize};

/// Width hint for a dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DialogSize {
    Small,
    Medium,
    Large,
}

/// How the host sizes overlays.
///
/// Declared once in configuration. `Percent` scales dialogs with the
/// terminal, `Columns` gives them fixed widths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeUnits {
    #[default]
    Percent,
    Columns,
}

/// Resolves a requested size to the explicit size to draw with.
///
/// No request means small; `Medium` means no explicit size, leaving the
/// overlay at its default width.
#[must_use]
pub const fn resolve(requested: Option<DialogSize>) -> Option<DialogSize> {
    match requested {
        None => Some(DialogSize::Small),
        Some(DialogSize::Medium) => None,
        Some(size) => Some(size),
    }
}

impl SizeUnits {
    /// Horizontal constraint for a resolved size.
    #[must_use]
    pub const fn width(self, resolved: Option<DialogSize>) -> Constraint {
        match (self, resolved) {
            (Self::Percent, Some(DialogSize::Small)) => Constraint::Percentage(40),
            (Self::Percent, Some(DialogSize::Large)) => Constraint::Percentage(80),
            (Self::Percent, _) => Constraint::Percentage(60),
            (Self::Columns, Some(DialogSize::Small)) => Constraint::Length(40),
            (Self::Columns, Some(DialogSize::Large)) => Constraint::Length(100),
            (Self::Columns, _) => Constraint::Length(64),
        }
    }
}

impl FromStr for SizeUnits {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "percent" | "%" => Ok(Self::Percent),
            "columns" | "cols" => Ok(Self::Columns),
            other => Err(format!("Unknown size units: {other}")),
        }
    }
}

impl fmt::Display for SizeUnits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Percent => write!(f, "percent"),
            Self::Columns => write!(f, "columns"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve() {
        assert_eq!(resolve(None), Some(DialogSize::Small));
        assert_eq!(resolve(Some(DialogSize::Medium)), None);
        assert_eq!(resolve(Some(DialogSize::Small)), Some(DialogSize::Small));
        assert_eq!(resolve(Some(DialogSize::Large)), Some(DialogSize::Large));
    }

    #[test]
    fn test_width_per_units() {
        assert_eq!(
            SizeUnits::Percent.width(resolve(None)),
            Constraint::Percentage(40)
        );
        assert_eq!(
            SizeUnits::Columns.width(resolve(Some(DialogSize::Medium))),
            Constraint::Length(64)
        );
        assert_eq!(
            SizeUnits::Columns.width(Some(DialogSize::Large)),
            Constraint::Length(100)
        );
    }

    #[test]
    fn test_units_from_str() {
        assert_eq!("Columns".parse::<SizeUnits>(), Ok(SizeUnits::Columns));
        assert_eq!("percent".parse::<SizeUnits>(), Ok(SizeUnits::Percent));
        assert!("em".parse::<SizeUnits>().is_err());
    }
}
