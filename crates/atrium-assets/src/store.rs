//! Per-frame artwork slots.

use image::RgbaImage;
use tracing::debug;

use crate::placeholder_art;
use crate::provider::ArtDelivery;

/// One artwork slot per frame. Every slot starts with its deterministic
/// placeholder; successful deliveries replace it, failures keep it.
#[derive(Debug, Clone)]
pub struct ArtStore {
    images: Vec<RgbaImage>,
    real: Vec<bool>,
}

impl ArtStore {
    /// Fill `count` slots with placeholders.
    #[must_use]
    pub fn new(count: usize) -> Self {
        Self {
            images: (0..count).map(placeholder_art).collect(),
            real: vec![false; count],
        }
    }

    /// Apply one delivery. Out-of-range indices are dropped; a failed
    /// load leaves the placeholder in place. Returns true when the slot
    /// now holds real art.
    pub fn apply(&mut self, delivery: ArtDelivery) -> bool {
        let Some(slot) = self.images.get_mut(delivery.index) else {
            debug!(index = delivery.index, "delivery for unknown frame dropped");
            return false;
        };
        match delivery.result {
            Ok(image) => {
                *slot = image;
                self.real[delivery.index] = true;
                true
            }
            Err(_) => false,
        }
    }

    /// The current image for a frame, if the index is in range.
    #[must_use]
    pub fn image(&self, index: usize) -> Option<&RgbaImage> {
        self.images.get(index)
    }

    /// Whether a frame shows real art rather than its placeholder.
    #[must_use]
    pub fn has_real_art(&self, index: usize) -> bool {
        self.real.get(index).copied().unwrap_or(false)
    }

    /// Number of slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// True when the store has no slots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}
