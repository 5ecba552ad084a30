//! Display assets: provider identifier to display name and logo badge.
//!
//! Lookups are case-insensitive. A provider missing from the table still
//! renders: its identifier doubles as the display name and the logo falls
//! back to [`PLACEHOLDER_LOGO`].

use std::collections::HashMap;

use crate::domain::provider_key;

/// Logo shown for providers without an entry.
pub const PLACEHOLDER_LOGO: &str = "··";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderAsset {
    pub display_name: String,
    /// Short badge rendered in front of the name.
    pub logo: String,
}

#[derive(Debug, Clone, Default)]
pub struct DisplayAssets {
    entries: HashMap<String, ProviderAsset>,
}

impl DisplayAssets {
    pub fn new() -> Self {
        Self::default()
    }

    /// The providers this tool knows out of the box.
    pub fn builtin() -> Self {
        let mut assets = Self::new();
        for (id, name, logo) in [
            ("e2b", "E2B", "E2"),
            ("daytona", "Daytona", "DT"),
            ("modal", "Modal", "MO"),
            ("codesandbox", "CodeSandbox", "CS"),
            ("vercel", "Vercel", "▲"),
            ("blaxel", "Blaxel", "BX"),
            ("runloop", "Runloop", "RL"),
            ("cloudflare", "Cloudflare", "CF"),
            ("railway", "Railway", "RW"),
            ("fly", "Fly.io", "FL"),
        ] {
            assets.insert(id, name, logo);
        }
        assets
    }

    pub fn insert(&mut self, provider: &str, display_name: impl Into<String>, logo: impl Into<String>) {
        self.entries.insert(
            provider_key(provider),
            ProviderAsset {
                display_name: display_name.into(),
                logo: logo.into(),
            },
        );
    }

    pub fn get(&self, provider: &str) -> Option<&ProviderAsset> {
        self.entries.get(&provider_key(provider))
    }

    /// Display name, or the raw identifier when unknown.
    pub fn display_name<'a>(&'a self, provider: &'a str) -> &'a str {
        match self.get(provider) {
            Some(asset) => &asset.display_name,
            None => provider,
        }
    }

    pub fn logo(&self, provider: &str) -> &str {
        match self.get(provider) {
            Some(asset) => &asset.logo,
            None => {
                tracing::debug!(provider, "no logo registered, using placeholder");
                PLACEHOLDER_LOGO
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive() {
        let assets = DisplayAssets::builtin();
        assert_eq!(assets.display_name("E2B"), "E2B");
        assert_eq!(assets.display_name("DayTona"), "Daytona");
        assert_eq!(assets.logo("MODAL"), "MO");
    }

    #[test]
    fn unknown_provider_gets_placeholder() {
        let assets = DisplayAssets::builtin();
        assert_eq!(assets.display_name("acme-sandbox"), "acme-sandbox");
        assert_eq!(assets.logo("acme-sandbox"), PLACEHOLDER_LOGO);
    }

    #[test]
    fn insert_overrides_builtin() {
        let mut assets = DisplayAssets::builtin();
        assets.insert("E2B", "E2B Cloud", "e2");
        assert_eq!(assets.display_name("e2b"), "E2B Cloud");
        assert_eq!(assets.logo("e2b"), "e2");
    }
}
