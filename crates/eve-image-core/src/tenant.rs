use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// Server realm whose image host is addressed.
///
/// The URL builder accepts any tenant string; this enum names the two realms
/// the image server actually knows about.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tenant {
    /// The live server.
    #[default]
    Tranquility,
    /// The public test server.
    Singularity,
}

impl Tenant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tenant::Tranquility => "tranquility",
            Tenant::Singularity => "singularity",
        }
    }
}

impl FromStr for Tenant {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tranquility" => Ok(Tenant::Tranquility),
            "singularity" => Ok(Tenant::Singularity),
            _ => Err(ParseError::UnknownTenant(s.to_string())),
        }
    }
}

impl Display for Tenant {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for Tenant {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_tranquility() {
        assert_eq!(Tenant::default(), Tenant::Tranquility);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("tranquility".parse::<Tenant>(), Ok(Tenant::Tranquility));
        assert_eq!("Singularity".parse::<Tenant>(), Ok(Tenant::Singularity));
        assert_eq!(
            "serenity".parse::<Tenant>(),
            Err(ParseError::UnknownTenant("serenity".to_string()))
        );
    }

    #[test]
    fn test_display_matches_wire_value() {
        assert_eq!(Tenant::Tranquility.to_string(), "tranquility");
        assert_eq!(Tenant::Singularity.to_string(), "singularity");
    }

    #[test]
    fn test_serde_uses_wire_value() {
        let json = serde_json::to_string(&Tenant::Singularity).unwrap();
        assert_eq!(json, "\"singularity\"");

        let tenant: Tenant = serde_json::from_str("\"tranquility\"").unwrap();
        assert_eq!(tenant, Tenant::Tranquility);

        assert!(serde_json::from_str::<Tenant>("\"duality\"").is_err());
    }
}
