//! WooCommerce API version definitions.
//!
//! This module provides the [`ApiVersion`] enum for specifying which version
//! of the WooCommerce API to talk to.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// WooCommerce API version.
///
/// WooCommerce has shipped two API families:
///
/// - The legacy REST API, served under `/wc-api/vN` (WooCommerce 2.1 to 3.x).
/// - The WordPress REST API integration, served under `/wp-json/wc/vN`.
///
/// # Example
///
/// ```rust
/// use woocommerce_api::ApiVersion;
///
/// let version = ApiVersion::latest();
/// assert_eq!(version.base_path(), "/wp-json/wc/v3");
///
/// let version: ApiVersion = "wc-api/v2".parse().unwrap();
/// assert_eq!(version, ApiVersion::LegacyV2);
/// assert!(version.is_legacy());
///
/// assert_eq!(ApiVersion::V2.to_string(), "wc/v2");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ApiVersion {
    /// Legacy REST API v1 (`/wc-api/v1`).
    LegacyV1,
    /// Legacy REST API v2 (`/wc-api/v2`).
    LegacyV2,
    /// Legacy REST API v3 (`/wc-api/v3`).
    LegacyV3,
    /// WP REST API integration v1 (`/wp-json/wc/v1`).
    V1,
    /// WP REST API integration v2 (`/wp-json/wc/v2`).
    V2,
    /// WP REST API integration v3 (`/wp-json/wc/v3`).
    V3,
}

impl ApiVersion {
    /// Returns the latest API version.
    #[must_use]
    pub const fn latest() -> Self {
        Self::V3
    }

    /// Returns `true` for the legacy `/wc-api` family.
    #[must_use]
    pub const fn is_legacy(&self) -> bool {
        matches!(self, Self::LegacyV1 | Self::LegacyV2 | Self::LegacyV3)
    }

    /// Returns the path, relative to the store URL, under which this
    /// version's resources live.
    #[must_use]
    pub const fn base_path(&self) -> &'static str {
        match self {
            Self::LegacyV1 => "/wc-api/v1",
            Self::LegacyV2 => "/wc-api/v2",
            Self::LegacyV3 => "/wc-api/v3",
            Self::V1 => "/wp-json/wc/v1",
            Self::V2 => "/wp-json/wc/v2",
            Self::V3 => "/wp-json/wc/v3",
        }
    }

    const fn ordinal(self) -> u8 {
        match self {
            Self::LegacyV1 => 1,
            Self::LegacyV2 => 2,
            Self::LegacyV3 => 3,
            Self::V1 => 4,
            Self::V2 => 5,
            Self::V3 => 6,
        }
    }
}

impl PartialOrd for ApiVersion {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ApiVersion {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.ordinal().cmp(&other.ordinal())
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let version_str = match self {
            Self::LegacyV1 => "wc-api/v1",
            Self::LegacyV2 => "wc-api/v2",
            Self::LegacyV3 => "wc-api/v3",
            Self::V1 => "wc/v1",
            Self::V2 => "wc/v2",
            Self::V3 => "wc/v3",
        };
        f.write_str(version_str)
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigError;

    /// Parses `wc/v3`, `v3`, `wc-api/v2` and `legacy-v2` style strings.
    /// Surrounding slashes and a leading `wp-json/` are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().trim_matches('/').to_lowercase();
        let normalized = normalized
            .strip_prefix("wp-json/")
            .unwrap_or(&normalized);

        match normalized {
            "wc-api/v1" | "legacy-v1" => Ok(Self::LegacyV1),
            "wc-api/v2" | "legacy-v2" => Ok(Self::LegacyV2),
            "wc-api/v3" | "legacy-v3" => Ok(Self::LegacyV3),
            "wc/v1" | "v1" => Ok(Self::V1),
            "wc/v2" | "v2" => Ok(Self::V2),
            "wc/v3" | "v3" => Ok(Self::V3),
            _ => Err(ConfigError::InvalidApiVersion {
                version: s.trim().to_string(),
            }),
        }
    }
}
