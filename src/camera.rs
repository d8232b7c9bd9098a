//! Orbit camera driven by pointer input in spherical coordinates.
//!
//! Scroll zooms every frame; pointer drag orbits only while the orbit button is held.
//! Rho is clamped to a distance range, phi is kept off the poles.

use glam::{Vec2, Vec3};
use std::f32::consts::FRAC_PI_4;

use crate::coords::{spherical_to_cartesian, Spherical};
use crate::pose::CameraPose;

const DEFAULT_RHO: f32 = 10.0;
const RHO_SPEED: f32 = 2.0;
const THETA_SPEED: f32 = 0.04;
const PHI_SPEED: f32 = 0.04;
const MIN_RHO: f32 = 4.0;
const MAX_RHO: f32 = 40.0;
const MIN_PHI_DEGREES: f32 = 1.0;
const MAX_PHI_DEGREES: f32 = 179.0;

/// Tunables for the orbit controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitSettings {
    /// Per-unit gain: scroll -> rho, pointer x -> theta, pointer y -> phi.
    pub speed: Spherical,
    pub rho_min: f32,
    pub rho_max: f32,
    pub phi_min: f32,
    pub phi_max: f32,
    pub initial: Spherical,
    pub target: Vec3,
    pub up: Vec3,
}

impl Default for OrbitSettings {
    fn default() -> Self {
        Self {
            speed: Spherical::new(RHO_SPEED, THETA_SPEED, PHI_SPEED),
            rho_min: MIN_RHO,
            rho_max: MAX_RHO,
            phi_min: MIN_PHI_DEGREES.to_radians(),
            phi_max: MAX_PHI_DEGREES.to_radians(),
            initial: Spherical::new(DEFAULT_RHO, FRAC_PI_4, FRAC_PI_4),
            target: Vec3::ZERO,
            up: Vec3::Y,
        }
    }
}

/// State carried from one frame to the next.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalCameraState {
    pub position: Spherical,
    pub previous_pointer: Vec2,
}

/// Host input sampled once per frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameInput {
    pub pointer: Vec2,
    pub scroll: f32,
    pub orbit_held: bool,
}

impl FrameInput {
    pub fn new(pointer: Vec2, scroll: f32, orbit_held: bool) -> Self {
        Self {
            pointer,
            scroll,
            orbit_held,
        }
    }
}

/// Orbit controller owning its spherical state.
pub struct OrbitalCameraController {
    settings: OrbitSettings,
    state: OrbitalCameraState,
}

impl OrbitalCameraController {
    pub fn new(settings: OrbitSettings) -> Self {
        Self {
            settings,
            state: initial_state(&settings),
        }
    }

    /// Default orbit: rho 10, theta and phi at 45°, pointer at the origin.
    ///
    /// The configured initial orbit is clamped into the rho and phi ranges.
    pub fn initialize(&self) -> OrbitalCameraState {
        initial_state(&self.settings)
    }

    /// Advances `state` by one frame and returns it with the new eye position.
    ///
    /// `_delta_time` is not used by the update rule yet.
    pub fn step(
        &self,
        state: OrbitalCameraState,
        input: &FrameInput,
        _delta_time: f32,
    ) -> (OrbitalCameraState, Vec3) {
        let settings = &self.settings;
        let pointer_delta = input.pointer - state.previous_pointer;
        let delta = Spherical::new(
            input.scroll * settings.speed.rho,
            pointer_delta.x * settings.speed.theta,
            pointer_delta.y * settings.speed.phi,
        );

        let mut position = state.position;
        let rho = position.rho + delta.rho;
        position.rho = rho.clamp(settings.rho_min, settings.rho_max);
        if position.rho != rho {
            log::debug!("zoom clamped to {:.2}", position.rho);
        }

        if input.orbit_held {
            position.theta += delta.theta;
            position.phi = (position.phi + delta.phi).clamp(settings.phi_min, settings.phi_max);
        }

        let next = OrbitalCameraState {
            position,
            previous_pointer: input.pointer,
        };
        let eye = settings.target + spherical_to_cartesian(position);

        log::trace!(
            "orbit rho={:.3} theta={:.3} phi={:.3} eye={:?}",
            position.rho,
            position.theta,
            position.phi,
            eye
        );
        (next, eye)
    }

    /// Runs one frame against the owned state and returns the eye position.
    pub fn update(&mut self, input: &FrameInput, delta_time: f32) -> Vec3 {
        let (state, eye) = self.step(self.state, input, delta_time);
        self.state = state;
        eye
    }

    pub fn reset(&mut self) {
        self.state = self.initialize();
    }

    pub fn state(&self) -> &OrbitalCameraState {
        &self.state
    }

    pub fn settings(&self) -> &OrbitSettings {
        &self.settings
    }

    pub fn eye_position(&self) -> Vec3 {
        self.settings.target + spherical_to_cartesian(self.state.position)
    }

    pub fn pose(&self) -> CameraPose {
        CameraPose::new(self.eye_position(), self.settings.target, self.settings.up)
    }
}

fn initial_state(settings: &OrbitSettings) -> OrbitalCameraState {
    let initial = settings.initial;
    OrbitalCameraState {
        position: Spherical {
            rho: initial.rho.clamp(settings.rho_min, settings.rho_max),
            phi: initial.phi.clamp(settings.phi_min, settings.phi_max),
            ..initial
        },
        previous_pointer: Vec2::ZERO,
    }
}

impl Default for OrbitalCameraController {
    fn default() -> Self {
        Self::new(OrbitSettings::default())
    }
}
