//! Coordinate conversions and a spherical orbit camera.
//!
//! `coords` maps between Cartesian, polar, cylindrical and spherical forms.
//! `camera` keeps a spherical orbit across frames and turns pointer input
//! into a new eye position. `pose` packages that for a renderer and `trace`
//! replays recorded input headlessly.

pub mod camera;
pub mod coords;
pub mod pose;
pub mod trace;

pub use camera::{FrameInput, OrbitSettings, OrbitalCameraController, OrbitalCameraState};
pub use coords::{Cylindrical, Polar, Spherical, EPSILON};
pub use pose::{CameraPose, CameraUniform};
