//! Character catalog.
//!
//! A closed set of characters, each with an animated asset and at least one
//! static fallback. Lookups are total: unknown keys resolve to the default.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Key identifying a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CharacterKey {
    #[default]
    Panda,
    Bear,
    Bunny,
}

impl CharacterKey {
    /// Every key in display order.
    pub const ALL: [CharacterKey; 3] =
        [CharacterKey::Panda, CharacterKey::Bear, CharacterKey::Bunny];

    /// Resolve a raw key. Absent or unrecognized keys map to the default.
    pub fn resolve(raw: Option<&str>) -> Self {
        match raw {
            Some("panda") => CharacterKey::Panda,
            Some("bear") => CharacterKey::Bear,
            Some("bunny") => CharacterKey::Bunny,
            Some(other) => {
                tracing::debug!(key = other, "unknown character key, using default");
                CharacterKey::default()
            }
            None => CharacterKey::default(),
        }
    }

    /// Wire form of the key.
    pub fn as_str(&self) -> &'static str {
        match self {
            CharacterKey::Panda => "panda",
            CharacterKey::Bear => "bear",
            CharacterKey::Bunny => "bunny",
        }
    }

    /// Catalog entry for this key.
    pub fn entry(&self) -> &'static CatalogEntry {
        match self {
            CharacterKey::Panda => &PANDA,
            CharacterKey::Bear => &BEAR,
            CharacterKey::Bunny => &BUNNY,
        }
    }
}

impl fmt::Display for CharacterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display assets for one character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    pub key: CharacterKey,
    pub name: &'static str,
    pub animation_source: Option<&'static str>,
    pub fallback_image: Option<&'static str>,
    pub fallback_emoji: &'static str,
}

static PANDA: CatalogEntry = CatalogEntry {
    key: CharacterKey::Panda,
    name: "Cute Panda",
    animation_source: Some("https://lottie.host/e1e68e5a-44a5-4a8e-8c1e-90f4f239f60f/BKqAJ58qKQ.json"),
    fallback_image: None,
    fallback_emoji: "🐼",
};

static BEAR: CatalogEntry = CatalogEntry {
    key: CharacterKey::Bear,
    name: "Teddy Bear",
    animation_source: Some("https://lottie.host/0e6c9e23-c6c5-4e0e-8d6e-0f9e8f4c5e0f/bear.json"),
    fallback_image: Some("https://images.unsplash.com/photo-1558618666-fcd25c85cd64?w=300&h=300&fit=crop"),
    fallback_emoji: "🧸",
};

static BUNNY: CatalogEntry = CatalogEntry {
    key: CharacterKey::Bunny,
    name: "Love Bunny",
    animation_source: Some("https://lottie.host/bunny-love.json"),
    fallback_image: Some("https://images.unsplash.com/photo-1585110396000-c9ffd4e4b308?w=300&h=300&fit=crop"),
    fallback_emoji: "🐰",
};

/// Look up a raw key. Never fails.
pub fn lookup(raw: Option<&str>) -> &'static CatalogEntry {
    CharacterKey::resolve(raw).entry()
}

/// All catalog entries in display order.
pub fn entries() -> impl Iterator<Item = &'static CatalogEntry> {
    CharacterKey::ALL.into_iter().map(|key| key.entry())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_keys() {
        assert_eq!(lookup(Some("panda")).name, "Cute Panda");
        assert_eq!(lookup(Some("bear")).name, "Teddy Bear");
        assert_eq!(lookup(Some("bunny")).name, "Love Bunny");
    }

    #[test]
    fn test_unknown_and_missing_keys_use_default() {
        assert_eq!(lookup(Some("dragon")).key, CharacterKey::Panda);
        assert_eq!(lookup(Some("")).key, CharacterKey::Panda);
        assert_eq!(lookup(Some("Bunny")).key, CharacterKey::Panda);
        assert_eq!(lookup(None).key, CharacterKey::Panda);
    }

    #[test]
    fn test_every_entry_has_emoji() {
        for entry in entries() {
            assert!(!entry.fallback_emoji.is_empty(), "{} has no emoji", entry.name);
            assert_eq!(entry.key.entry(), entry);
        }
    }

    #[test]
    fn test_key_roundtrip() {
        for key in CharacterKey::ALL {
            assert_eq!(CharacterKey::resolve(Some(key.as_str())), key);
            let json = serde_json::to_string(&key).unwrap();
            assert_eq!(json, format!("\"{}\"", key));
        }
    }
}
