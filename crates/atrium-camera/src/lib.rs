//! Camera rig with three mutually exclusive modes.
//!
//! Orbit circles the focal point at a distance driven by approach
//! progress, Travel runs a scripted hold-then-dolly during the room
//! build, and Follow trails the avatar through the gallery. Exactly one
//! mode drives the pose on any tick; position changes are exponentially
//! smoothed, look-at targets are not.

pub mod rig;

pub use rig::{CameraMode, CameraPose, CameraRig};
