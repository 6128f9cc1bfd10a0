//! Image categories and the variations served under each.
//!
//! | category       | variations                          |
//! |----------------|-------------------------------------|
//! | `alliances`    | `logo`                              |
//! | `corporations` | `logo` (NPC factions use this too)  |
//! | `characters`   | `portrait`                          |
//! | `types`        | `icon`, `render`, `bp`, `bpc`, `relic` |
//!
//! The URL builder does not check a variation against its category. Callers
//! wanting that check can use [`Variation::is_available_for`].

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// Top-level resource grouping of the image server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Alliances,
    Corporations,
    Characters,
    Types,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Alliances,
        Category::Corporations,
        Category::Characters,
        Category::Types,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Alliances => "alliances",
            Category::Corporations => "corporations",
            Category::Characters => "characters",
            Category::Types => "types",
        }
    }

    /// Variations the image server documents for this category
    pub fn variations(&self) -> &'static [Variation] {
        match self {
            Category::Alliances | Category::Corporations => &[Variation::Logo],
            Category::Characters => &[Variation::Portrait],
            Category::Types => &[
                Variation::Icon,
                Variation::Render,
                Variation::Blueprint,
                Variation::BlueprintCopy,
                Variation::Relic,
            ],
        }
    }
}

impl FromStr for Category {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "alliances" => Ok(Category::Alliances),
            "corporations" => Ok(Category::Corporations),
            "characters" => Ok(Category::Characters),
            "types" => Ok(Category::Types),
            _ => Err(ParseError::UnknownCategory(s.to_string())),
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for Category {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Specific rendering of an entity's image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variation {
    Portrait,
    Logo,
    Icon,
    /// Ship and structure renders.
    Render,
    #[serde(rename = "bp")]
    Blueprint,
    #[serde(rename = "bpc")]
    BlueprintCopy,
    /// Sleeper relic and salvage types.
    Relic,
}

impl Variation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Variation::Portrait => "portrait",
            Variation::Logo => "logo",
            Variation::Icon => "icon",
            Variation::Render => "render",
            Variation::Blueprint => "bp",
            Variation::BlueprintCopy => "bpc",
            Variation::Relic => "relic",
        }
    }

    pub fn is_available_for(&self, category: Category) -> bool {
        category.variations().contains(self)
    }

    /// Content-Type the image server responds with.
    /// Character portraits are JPEGs; everything else is PNG.
    pub fn content_type(&self) -> &'static str {
        match self {
            Variation::Portrait => "image/jpeg",
            _ => "image/png",
        }
    }

    pub fn file_extension(&self) -> &'static str {
        match self {
            Variation::Portrait => "jpg",
            _ => "png",
        }
    }
}

impl FromStr for Variation {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "portrait" => Ok(Variation::Portrait),
            "logo" => Ok(Variation::Logo),
            "icon" => Ok(Variation::Icon),
            "render" => Ok(Variation::Render),
            "bp" => Ok(Variation::Blueprint),
            "bpc" => Ok(Variation::BlueprintCopy),
            "relic" => Ok(Variation::Relic),
            _ => Err(ParseError::UnknownVariation(s.to_string())),
        }
    }
}

impl Display for Variation {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for Variation {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
