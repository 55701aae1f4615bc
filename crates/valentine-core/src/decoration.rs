//! Floating hearts drawn behind the proposal card.

use std::ops::Range;

use rand::Rng;
use serde::Serialize;

/// Number of hearts generated per mount.
pub const HEART_COUNT: usize = 15;

/// Horizontal position, percent of the viewport width.
pub const LEFT_RANGE: Range<f32> = 0.0..100.0;
/// Size, pixels.
pub const SIZE_RANGE: Range<f32> = 12.0..32.0;
/// Animation duration, seconds.
pub const DURATION_RANGE: Range<f32> = 10.0..25.0;
/// Start delay, seconds.
pub const DELAY_RANGE: Range<f32> = 0.0..10.0;
/// Opacity.
pub const OPACITY_RANGE: Range<f32> = 0.1..0.4;

/// One decorative heart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FloatingHeart {
    pub id: usize,
    pub left: f32,
    pub size: f32,
    pub duration: f32,
    pub delay: f32,
    pub opacity: f32,
}

/// A set of hearts, drawn once per mount.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FloatingHearts {
    hearts: Vec<FloatingHeart>,
}

impl FloatingHearts {
    /// Generate a fresh set using the thread-local RNG.
    pub fn generate() -> Self {
        Self::generate_with(&mut rand::thread_rng())
    }

    /// Generate a fresh set from the given RNG.
    pub fn generate_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let hearts = (0..HEART_COUNT)
            .map(|id| FloatingHeart {
                id,
                left: rng.gen_range(LEFT_RANGE),
                size: rng.gen_range(SIZE_RANGE),
                duration: rng.gen_range(DURATION_RANGE),
                delay: rng.gen_range(DELAY_RANGE),
                opacity: rng.gen_range(OPACITY_RANGE),
            })
            .collect();

        Self { hearts }
    }

    pub fn hearts(&self) -> &[FloatingHeart] {
        &self.hearts
    }

    pub fn len(&self) -> usize {
        self.hearts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hearts.is_empty()
    }
}
