//! Domain value objects.
//!
//! Pure value types: `Copy`, equality-by-value, no identity. This file's only
//! job is to define the types, their string representations, and their
//! `FromStr` parsers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── CatalogMode ──────────────────────────────────────────────────────────────

/// How user library catalogs from several repositories are looked up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogMode {
    /// Every catalog is merged into one lookup space visible to all projects,
    /// like user libraries in an IDE workspace.
    #[default]
    Fused,
    /// A project only sees the catalog of the repository it belongs to.
    Isolated,
}

impl CatalogMode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fused => "fused",
            Self::Isolated => "isolated",
        }
    }
}

impl fmt::Display for CatalogMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CatalogMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fused" | "shared" => Ok(Self::Fused),
            "isolated" | "per-repository" => Ok(Self::Isolated),
            other => Err(format!("unknown catalog mode: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_mode_defaults_to_fused() {
        assert_eq!(CatalogMode::default(), CatalogMode::Fused);
    }

    #[test]
    fn catalog_mode_parses_aliases() {
        assert_eq!("Isolated".parse::<CatalogMode>(), Ok(CatalogMode::Isolated));
        assert_eq!("shared".parse::<CatalogMode>(), Ok(CatalogMode::Fused));
        assert!("both".parse::<CatalogMode>().is_err());
    }

    #[test]
    fn catalog_mode_round_trips_through_display() {
        for mode in [CatalogMode::Fused, CatalogMode::Isolated] {
            assert_eq!(mode.to_string().parse::<CatalogMode>(), Ok(mode));
        }
    }
}
