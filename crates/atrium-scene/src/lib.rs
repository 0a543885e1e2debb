//! Scene aggregate: owns every simulation component and advances them
//! in a fixed order each tick.

pub mod scene;
pub mod tick_loop;

pub use scene::{Scene, SceneEvent, SceneSnapshot};
pub use tick_loop::{FIXED_DT, MAX_FRAME_TIME, TickLoop};
