//! Animation presenter.
//!
//! Tracks, per mount, whether the animated asset of a character has failed
//! and decides what to draw instead.

use serde::Serialize;

use crate::catalog::{CatalogEntry, CharacterKey};

/// Lifecycle of the primary asset within one mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PresenterState {
    /// Not mounted yet.
    NotAttempted,
    /// Animation is being shown.
    Showing,
    /// Animation failed or does not exist; a static fallback is shown.
    FailedFallback,
}

/// What the rendering layer should draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Rendered {
    Animation { source: &'static str },
    Image { source: &'static str, alt: &'static str },
    Emoji { glyph: &'static str },
}

/// Per-mount presenter for one character.
#[derive(Debug, Clone)]
pub struct AnimationPresenter {
    entry: &'static CatalogEntry,
    state: PresenterState,
}

impl AnimationPresenter {
    /// Create an unmounted presenter for `character`.
    pub fn new(character: CharacterKey) -> Self {
        Self {
            entry: character.entry(),
            state: PresenterState::NotAttempted,
        }
    }

    /// Create and mount in one step.
    pub fn mounted(character: CharacterKey) -> Self {
        let mut presenter = Self::new(character);
        presenter.mount();
        presenter
    }

    /// Attempt the animation if there is one. Has no effect once mounted.
    pub fn mount(&mut self) -> PresenterState {
        if self.state == PresenterState::NotAttempted {
            self.state = match self.entry.animation_source {
                Some(_) => PresenterState::Showing,
                None => PresenterState::FailedFallback,
            };
        }
        self.state
    }

    /// The rendering layer reported that the animation could not be loaded.
    pub fn on_load_error(&mut self) -> PresenterState {
        if self.state == PresenterState::Showing {
            tracing::debug!(
                character = %self.entry.key,
                "animation failed to load, showing fallback"
            );
            self.state = PresenterState::FailedFallback;
        }
        self.state
    }

    /// Current state.
    pub fn state(&self) -> PresenterState {
        self.state
    }

    /// Catalog entry being presented.
    pub fn entry(&self) -> &'static CatalogEntry {
        self.entry
    }

    /// What to draw right now.
    pub fn render(&self) -> Rendered {
        match (self.state, self.entry.animation_source) {
            (PresenterState::NotAttempted | PresenterState::Showing, Some(source)) => {
                Rendered::Animation { source }
            }
            _ => self.fallback(),
        }
    }

    /// The static fallback: image if the entry has one, otherwise its emoji.
    pub fn fallback(&self) -> Rendered {
        match self.entry.fallback_image {
            Some(source) => Rendered::Image {
                source,
                alt: self.entry.name,
            },
            None => Rendered::Emoji {
                glyph: self.entry.fallback_emoji,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mount_shows_animation() {
        for key in CharacterKey::ALL {
            let presenter = AnimationPresenter::mounted(key);
            assert_eq!(presenter.state(), PresenterState::Showing);
            assert!(matches!(presenter.render(), Rendered::Animation { .. }));
        }
    }

    #[test]
    fn test_load_error_falls_back() {
        let mut bunny = AnimationPresenter::mounted(CharacterKey::Bunny);
        assert_eq!(bunny.on_load_error(), PresenterState::FailedFallback);
        assert_eq!(
            bunny.render(),
            Rendered::Image {
                source: CharacterKey::Bunny.entry().fallback_image.unwrap(),
                alt: "Love Bunny",
            }
        );

        let mut panda = AnimationPresenter::mounted(CharacterKey::Panda);
        panda.on_load_error();
        assert_eq!(panda.render(), Rendered::Emoji { glyph: "🐼" });
    }

    #[test]
    fn test_no_reverse_transition() {
        let mut presenter = AnimationPresenter::mounted(CharacterKey::Bear);
        presenter.on_load_error();
        assert_eq!(presenter.mount(), PresenterState::FailedFallback);
        assert_eq!(presenter.on_load_error(), PresenterState::FailedFallback);
    }

    #[test]
    fn test_error_before_mount_is_ignored() {
        let mut presenter = AnimationPresenter::new(CharacterKey::Bear);
        assert_eq!(presenter.on_load_error(), PresenterState::NotAttempted);
        assert_eq!(presenter.mount(), PresenterState::Showing);
    }

    #[test]
    fn test_every_character_has_a_fallback() {
        for key in CharacterKey::ALL {
            let mut presenter = AnimationPresenter::mounted(key);
            presenter.on_load_error();
            assert!(!matches!(presenter.render(), Rendered::Animation { .. }));
        }
    }

    #[test]
    fn test_entry_without_animation_skips_to_fallback() {
        static STILL: CatalogEntry = CatalogEntry {
            key: CharacterKey::Panda,
            name: "Still Panda",
            animation_source: None,
            fallback_image: None,
            fallback_emoji: "🐼",
        };

        let mut presenter = AnimationPresenter {
            entry: &STILL,
            state: PresenterState::NotAttempted,
        };
        assert_eq!(presenter.mount(), PresenterState::FailedFallback);
        assert_eq!(presenter.render(), Rendered::Emoji { glyph: "🐼" });
    }
}
