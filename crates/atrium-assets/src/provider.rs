//! The artwork provider seam.

use std::collections::VecDeque;
use std::path::PathBuf;

use image::RgbaImage;
use tracing::warn;

/// Artwork provisioning errors.
#[derive(Debug, thiserror::Error)]
pub enum ArtError {
    #[error("failed to open artwork {index}: {source}")]
    OpenError {
        index: usize,
        #[source]
        source: image::ImageError,
    },
}

/// One resolved request. A failed load still resolves, so the tracker
/// never waits on art that will not arrive.
#[derive(Debug)]
pub struct ArtDelivery {
    /// Frame index the request was made for.
    pub index: usize,
    /// The decoded image, or the error that prevented it.
    pub result: Result<RgbaImage, ArtError>,
}

/// Source of real artwork. Deliveries may arrive on any later poll and
/// in any order; callers must tolerate both.
pub trait ArtProvider {
    /// Queue a load for the given frame index.
    fn request(&mut self, index: usize);

    /// Take whatever has resolved since the last poll.
    fn poll(&mut self) -> Vec<ArtDelivery>;
}

/// Loads numbered images (`art_0.png`, `art_1.png`, ...) from a
/// directory, one per poll to spread decode cost across ticks.
#[derive(Debug)]
pub struct DirectoryProvider {
    dir: PathBuf,
    pending: VecDeque<usize>,
}

impl DirectoryProvider {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            pending: VecDeque::new(),
        }
    }
}

impl ArtProvider for DirectoryProvider {
    fn request(&mut self, index: usize) {
        self.pending.push_back(index);
    }

    fn poll(&mut self) -> Vec<ArtDelivery> {
        let Some(index) = self.pending.pop_front() else {
            return Vec::new();
        };
        let path = self.dir.join(format!("art_{index}.png"));
        let result = image::open(&path)
            .map(|img| img.into_rgba8())
            .map_err(|source| {
                warn!(index, path = %path.display(), "artwork load failed");
                ArtError::OpenError { index, source }
            });
        vec![ArtDelivery { index, result }]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::placeholder_art;

    #[test]
    fn test_directory_provider_loads_existing_art() {
        let dir = tempfile::tempdir().unwrap();
        placeholder_art(2).save(dir.path().join("art_2.png")).unwrap();

        let mut provider = DirectoryProvider::new(dir.path());
        provider.request(2);
        let deliveries = provider.poll();
        assert_eq!(deliveries.len(), 1);
        assert_eq!(deliveries[0].index, 2);
        let image = deliveries[0].result.as_ref().unwrap();
        assert_eq!(image.dimensions(), placeholder_art(2).dimensions());
    }

    #[test]
    fn test_missing_art_resolves_with_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut provider = DirectoryProvider::new(dir.path());
        provider.request(9);
        let deliveries = provider.poll();
        assert_eq!(deliveries.len(), 1);
        assert!(deliveries[0].result.is_err());
    }

    #[test]
    fn test_one_delivery_per_poll() {
        let dir = tempfile::tempdir().unwrap();
        let mut provider = DirectoryProvider::new(dir.path());
        provider.request(0);
        provider.request(1);
        assert_eq!(provider.poll().len(), 1);
        assert_eq!(provider.poll().len(), 1);
        assert!(provider.poll().is_empty());
    }
}
