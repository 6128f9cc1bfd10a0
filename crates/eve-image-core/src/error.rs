//! Errors raised when parsing image server vocabulary from strings.
//!
//! URL building itself never fails; these only surface from the `FromStr`
//! implementations on [`Tenant`](crate::Tenant), [`Category`](crate::Category)
//! and [`Variation`](crate::Variation).

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Unknown tenant: {0}")]
    UnknownTenant(String),

    #[error("Unknown image category: {0}")]
    UnknownCategory(String),

    #[error("Unknown image variation: {0}")]
    UnknownVariation(String),
}
