//! URL builder for the EVE Online image server.
//!
//! Renders `https://images.evetech.net/{category}/{id}/{variation}?size={size}&tenant={tenant}`
//! for characters, alliances, corporations, NPC factions and item types.
//! No request is ever made; the URLs are for a caller to fetch or embed.
//!
//! ```rust
//! use eve_image_client::{ImageServer, Tenant};
//!
//! let server = ImageServer::new();
//! assert_eq!(
//!     server.character_portrait(1338057886).build(),
//!     "https://images.evetech.net/characters/1338057886/portrait?size=128&tenant=tranquility"
//! );
//! assert_eq!(
//!     server.type_render(587).size(512).tenant(Tenant::Singularity).build(),
//!     "https://images.evetech.net/types/587/render?size=512&tenant=singularity"
//! );
//! ```

pub mod api;
pub mod query;
pub mod request;

use eve_image_core::{resolve_size, BASE_URL};

pub use eve_image_core::{Category, ParseError, Tenant, Variation, DEFAULT_SIZE, VALID_SIZES};
pub use request::ImageRequest;

/// Client for the EVE Online image server.
///
/// Holds nothing but the host to address; every method is a pure function of
/// its arguments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageServer {
    base_url: String,
}

impl Default for ImageServer {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageServer {
    /// Client for `https://images.evetech.net`.
    pub fn new() -> Self {
        Self::with_base_url(BASE_URL)
    }

    /// Client for another host serving the same URL layout (mirror, test double).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the URL of one image.
    ///
    /// `size` is replaced by [`DEFAULT_SIZE`] unless it is one of [`VALID_SIZES`].
    /// `category`, `variation` and `tenant` are not checked; the tenant is
    /// form-encoded, the others are inserted verbatim.
    pub fn build(
        &self,
        category: impl AsRef<str>,
        id: i64,
        variation: impl AsRef<str>,
        size: i64,
        tenant: impl AsRef<str>,
    ) -> String {
        let size = resolve_size(size).to_string();
        let params = query::build_query(&[("size", size.as_str()), ("tenant", tenant.as_ref())]);

        format!(
            "{}/{}/{}/{}?{}",
            self.base_url,
            category.as_ref(),
            id,
            variation.as_ref(),
            params
        )
    }

    /// Request for any category/variation pair, with default size and tenant.
    pub fn image(
        &self,
        category: impl AsRef<str>,
        id: i64,
        variation: impl AsRef<str>,
    ) -> ImageRequest<'_> {
        ImageRequest::new(self, category.as_ref(), id, variation.as_ref())
    }
}

/// [`ImageServer::build`] against the default host.
pub fn build_url(
    category: impl AsRef<str>,
    id: i64,
    variation: impl AsRef<str>,
    size: i64,
    tenant: impl AsRef<str>,
) -> String {
    ImageServer::new().build(category, id, variation, size, tenant)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_exact_url() {
        let url = build_url("characters", 1338057886, "portrait", 128, "tranquility");
        assert_eq!(
            url,
            "https://images.evetech.net/characters/1338057886/portrait?size=128&tenant=tranquility"
        );
    }

    #[test]
    fn test_build_invalid_size_falls_back() {
        for size in [999, 100, 0, -1] {
            let url = build_url("types", 587, "icon", size, "tranquility");
            assert_eq!(
                url,
                "https://images.evetech.net/types/587/icon?size=128&tenant=tranquility"
            );
        }
    }

    #[test]
    fn test_build_does_not_validate_category_or_variation() {
        let url = build_url("ships", 587, "hologram", 64, "tranquility");
        assert_eq!(
            url,
            "https://images.evetech.net/ships/587/hologram?size=64&tenant=tranquility"
        );
    }

    #[test]
    fn test_build_renders_negative_and_zero_ids() {
        assert!(build_url("types", -5, "icon", 32, "tranquility").contains("/types/-5/icon?"));
        assert!(build_url("types", 0, "icon", 32, "tranquility").contains("/types/0/icon?"));
    }

    #[test]
    fn test_build_accepts_typed_vocabulary() {
        let typed = build_url(
            Category::Types,
            11568,
            Variation::BlueprintCopy,
            256,
            Tenant::Singularity,
        );
        let raw = build_url("types", 11568, "bpc", 256, "singularity");
        assert_eq!(typed, raw);
    }

    #[test]
    fn test_unknown_tenant_passed_through_encoded() {
        let url = build_url("alliances", 1, "logo", 64, "a b/c");
        assert_eq!(
            url,
            "https://images.evetech.net/alliances/1/logo?size=64&tenant=a+b%2Fc"
        );
    }

    #[test]
    fn test_with_base_url_trims_trailing_slash() {
        let server = ImageServer::with_base_url("http://localhost:8080//");
        assert_eq!(server.base_url(), "http://localhost:8080");
        assert_eq!(
            server.build("types", 587, "icon", 64, "tranquility"),
            "http://localhost:8080/types/587/icon?size=64&tenant=tranquility"
        );
    }

    #[test]
    fn test_default_targets_image_server() {
        assert_eq!(ImageServer::default().base_url(), "https://images.evetech.net");
    }
}
