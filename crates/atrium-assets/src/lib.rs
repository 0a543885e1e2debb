//! Artwork provisioning for the gallery frames.
//!
//! Every frame starts with a deterministic gradient placeholder so the
//! room is never textureless. An [`ArtProvider`] delivers real images
//! asynchronously; deliveries may arrive late, out of order, or not at
//! all, and the [`LoadTracker`] forces readiness after a timeout so the
//! experience never stalls on slow art.

pub mod placeholder;
pub mod provider;
pub mod store;
pub mod tracker;

pub use placeholder::{PLACEHOLDER_HEIGHT, PLACEHOLDER_WIDTH, placeholder_art};
pub use provider::{ArtDelivery, ArtError, ArtProvider, DirectoryProvider};
pub use store::ArtStore;
pub use tracker::LoadTracker;
