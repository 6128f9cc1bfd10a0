//! Fluent request for a single image URL.

use std::fmt::{Display, Formatter, Result as FmtResult};

use eve_image_core::{Tenant, DEFAULT_SIZE};

use crate::ImageServer;

/// One image on the image server, with size and tenant still adjustable.
///
/// Starts at [`DEFAULT_SIZE`] on [`Tenant::Tranquility`].
///
/// # Example
///
/// ```rust
/// use eve_image_client::{ImageServer, Tenant};
///
/// let url = ImageServer::new()
///     .alliance_logo(434243723)
///     .size(64)
///     .tenant(Tenant::Singularity)
///     .build();
/// assert_eq!(
///     url,
///     "https://images.evetech.net/alliances/434243723/logo?size=64&tenant=singularity"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRequest<'a> {
    server: &'a ImageServer,
    category: String,
    id: i64,
    variation: String,
    size: i64,
    tenant: String,
}

impl<'a> ImageRequest<'a> {
    pub(crate) fn new(server: &'a ImageServer, category: &str, id: i64, variation: &str) -> Self {
        Self {
            server,
            category: category.to_string(),
            id,
            variation: variation.to_string(),
            size: i64::from(DEFAULT_SIZE),
            tenant: Tenant::default().as_str().to_string(),
        }
    }

    /// Set the requested size in pixels.
    /// Sizes the server does not render fall back to the default when built.
    pub fn size(mut self, size: i64) -> Self {
        self.size = size;
        self
    }

    /// Set the tenant. Any string is accepted and used verbatim.
    pub fn tenant(mut self, tenant: impl AsRef<str>) -> Self {
        self.tenant = tenant.as_ref().to_string();
        self
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn variation(&self) -> &str {
        &self.variation
    }

    /// Render the URL
    pub fn build(&self) -> String {
        self.server.build(
            &self.category,
            self.id,
            &self.variation,
            self.size,
            &self.tenant,
        )
    }
}

impl Display for ImageRequest<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.build())
    }
}
