//! Procedural structure builder.
//!
//! Generates the static room layout once (wall and ceiling blocks plus
//! the interactive frame registry) and animates it into place: blocks
//! rise from the floor on individually sampled schedules against the
//! global build-progress scalar, then the room transition scalar fades
//! the frames in once the gallery begins.

pub mod block;
pub mod frames;
pub mod room;

pub use block::{Block, BuildSchedule};
pub use frames::{Frame, FrameRegistry, WallFacing, frame_opacity};
pub use room::{Room, build_progress};
