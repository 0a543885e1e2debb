//! Input edge for the Atrium simulation: winit events in, a plain scalar
//! snapshot out.
//!
//! Event handlers run asynchronously relative to the simulation tick and
//! only write independent scalar/boolean fields; the tick polls one
//! [`InputSnapshot`] at a fixed point each cycle. Hit-testing of the
//! activation glyph and of frames happens at the platform edge, which
//! then calls [`InputCollector::press_activate`] or
//! [`InputCollector::press_select`].

pub mod collector;
pub mod keyboard;
pub mod pointer;

pub use collector::{InputCollector, InputSnapshot};
pub use keyboard::MoveKeys;
pub use pointer::PointerState;
