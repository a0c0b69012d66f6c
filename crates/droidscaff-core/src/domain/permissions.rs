//! Permission tiers offered for `AndroidManifest.xml`.
//!
//! Every tier is a prefix of [`ALL_PERMISSIONS`], so each one is a strict
//! superset of the tier before it and keeps the same order.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// Namespace of the `android:` attributes in a manifest.
pub const ANDROID_NAMESPACE_URI: &str = "http://schemas.android.com/apk/res/android";

static ALL_PERMISSIONS: [&str; 14] = [
    "android.permission.INTERNET",
    "android.permission.ACCESS_NETWORK_STATE",
    "android.permission.ACCESS_WIFI_STATE",
    "android.permission.READ_EXTERNAL_STORAGE",
    "android.permission.CAMERA",
    "android.permission.ACCESS_FINE_LOCATION",
    "android.permission.BLUETOOTH",
    "android.permission.READ_SMS",
    "android.permission.WRITE_SETTINGS",
    "android.permission.BLUETOOTH_ADMIN",
    "android.permission.ACCESS_COARSE_LOCATION",
    "android.permission.USE_BIOMETRIC",
    "android.permission.INSTALL_PACKAGES",
    "android.permission.REQUEST_INSTALL_PACKAGES",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionTier {
    Basic,
    Beginner,
    Intermediate,
    Advanced,
}

impl PermissionTier {
    /// Menu order.
    pub const ALL: [Self; 4] = [
        Self::Basic,
        Self::Beginner,
        Self::Intermediate,
        Self::Advanced,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }

    /// Human label for menus.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Basic => "Basic",
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }

    /// 1-based position in the selection menu.
    pub const fn menu_number(&self) -> usize {
        match self {
            Self::Basic => 1,
            Self::Beginner => 2,
            Self::Intermediate => 3,
            Self::Advanced => 4,
        }
    }

    /// Parse a menu answer (`"1"`..`"4"`). Anything else is `None`.
    pub fn from_menu_choice(choice: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|tier| choice.trim() == tier.menu_number().to_string())
    }

    pub fn permissions(&self) -> &'static [&'static str] {
        let len = match self {
            Self::Basic => 4,
            Self::Beginner => 7,
            Self::Intermediate => 11,
            Self::Advanced => 14,
        };
        &ALL_PERMISSIONS[..len]
    }
}

impl fmt::Display for PermissionTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PermissionTier {
    type Err = DomainError;

    /// Accepts a tier name (any case) or its menu number.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(tier) = Self::from_menu_choice(s) {
            return Ok(tier);
        }
        match s.trim().to_ascii_lowercase().as_str() {
            "basic" => Ok(Self::Basic),
            "beginner" => Ok(Self::Beginner),
            "intermediate" => Ok(Self::Intermediate),
            "advanced" => Ok(Self::Advanced),
            _ => Err(DomainError::UnknownPermissionTier(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_sizes() {
        let sizes: Vec<_> = PermissionTier::ALL
            .iter()
            .map(|t| t.permissions().len())
            .collect();
        assert_eq!(sizes, vec![4, 7, 11, 14]);
    }

    #[test]
    fn each_tier_strictly_extends_the_previous() {
        for pair in PermissionTier::ALL.windows(2) {
            let (lower, upper) = (pair[0].permissions(), pair[1].permissions());
            assert!(upper.len() > lower.len());
            assert_eq!(&upper[..lower.len()], lower);
        }
    }

    #[test]
    fn basic_tier_contents() {
        assert_eq!(
            PermissionTier::Basic.permissions(),
            &[
                "android.permission.INTERNET",
                "android.permission.ACCESS_NETWORK_STATE",
                "android.permission.ACCESS_WIFI_STATE",
                "android.permission.READ_EXTERNAL_STORAGE",
            ]
        );
    }

    #[test]
    fn no_duplicates_within_a_tier() {
        let all = PermissionTier::Advanced.permissions();
        let unique: std::collections::HashSet<_> = all.iter().collect();
        assert_eq!(unique.len(), all.len());
    }

    #[test]
    fn menu_choice_round_trips() {
        for tier in PermissionTier::ALL {
            let choice = tier.menu_number().to_string();
            assert_eq!(PermissionTier::from_menu_choice(&choice), Some(tier));
        }
        assert_eq!(PermissionTier::from_menu_choice(" 3 "), Some(PermissionTier::Intermediate));
        assert_eq!(PermissionTier::from_menu_choice("5"), None);
        assert_eq!(PermissionTier::from_menu_choice("basic"), None);
    }

    #[test]
    fn parses_names_and_numbers() {
        assert_eq!("ADVANCED".parse::<PermissionTier>().unwrap(), PermissionTier::Advanced);
        assert_eq!("2".parse::<PermissionTier>().unwrap(), PermissionTier::Beginner);
        assert!("expert".parse::<PermissionTier>().is_err());
    }
}
