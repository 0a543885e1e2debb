//! Player avatar: camera-relative locomotion, room and frame collision,
//! and the scripted rise into the gallery during travel.

pub mod controller;
pub mod travel;

pub use controller::CharacterController;
pub use travel::TravelRise;
