//! Convenience methods for each entity the image server hosts.
//!
//! Each fixes the category and variation and returns an [`ImageRequest`] at
//! the default size and tenant.

use eve_image_core::{Category, Variation};

use crate::{ImageRequest, ImageServer};

impl ImageServer {
    fn entity(&self, category: Category, id: i64, variation: Variation) -> ImageRequest<'_> {
        ImageRequest::new(self, category.as_str(), id, variation.as_str())
    }

    // Characters

    /// Character portrait (served as JPEG).
    pub fn character_portrait(&self, character_id: i64) -> ImageRequest<'_> {
        self.entity(Category::Characters, character_id, Variation::Portrait)
    }

    // Alliances

    pub fn alliance_logo(&self, alliance_id: i64) -> ImageRequest<'_> {
        self.entity(Category::Alliances, alliance_id, Variation::Logo)
    }

    // Corporations & NPC factions

    pub fn corporation_logo(&self, corporation_id: i64) -> ImageRequest<'_> {
        self.entity(Category::Corporations, corporation_id, Variation::Logo)
    }

    /// NPC faction logo. The image server files factions under `corporations`,
    /// keyed by the faction ID.
    pub fn faction_logo(&self, faction_id: i64) -> ImageRequest<'_> {
        self.entity(Category::Corporations, faction_id, Variation::Logo)
    }

    // Types

    pub fn type_icon(&self, type_id: i64) -> ImageRequest<'_> {
        self.entity(Category::Types, type_id, Variation::Icon)
    }

    /// Available for ships and some structures.
    pub fn type_render(&self, type_id: i64) -> ImageRequest<'_> {
        self.entity(Category::Types, type_id, Variation::Render)
    }

    pub fn type_blueprint(&self, type_id: i64) -> ImageRequest<'_> {
        self.entity(Category::Types, type_id, Variation::Blueprint)
    }

    pub fn type_blueprint_copy(&self, type_id: i64) -> ImageRequest<'_> {
        self.entity(Category::Types, type_id, Variation::BlueprintCopy)
    }

    /// Sleeper relic and salvage types.
    pub fn type_relic(&self, type_id: i64) -> ImageRequest<'_> {
        self.entity(Category::Types, type_id, Variation::Relic)
    }
}
