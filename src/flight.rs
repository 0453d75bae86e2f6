//! Flight model: the glider's state and its per-frame transition.
//!
//! The glider steers toward a target point. Each frame the angle between
//! its heading and the target produces a lift force across the velocity
//! and a drag force against it; together with gravity they are integrated
//! with semi-implicit Euler at a fixed step of one frame.

use std::f64::consts::{FRAC_PI_2, PI};

use crate::vector::{self, Vector, add, heading, magnitude, normalize, rotate, scale, subtract};

/// Per-frame gravity, tuned for 60 frames per second.
pub const GRAVITY: Vector = Vector::new(0.0, 9.8 / 60.0);
pub const LIFT_DIVISOR: f64 = 10.0;
pub const DRAG_DIVISOR: f64 = 20.0;
/// Drag coefficient at zero angle of attack.
pub const BASE_DRAG: f64 = 0.05;
/// Extra drag per radian of attack is `1 / ANGLE_DRAG_DIVISOR`.
pub const ANGLE_DRAG_DIVISOR: f64 = 20.0;
/// Attack angle (radians) where lift peaks. Lift is gone at twice this.
pub const STALL_THRESHOLD: f64 = 0.3;

/// Complete state of the glider at one instant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlightState {
    pub position: Vector,
    /// Displacement per frame.
    pub velocity: Vector,
    /// Unit vector toward the last target, or zero when the target sat on
    /// the center.
    pub direction: Vector,
    pub lift: Vector,
    pub drag: Vector,
    /// Whether the view should draw the force vectors.
    pub debug: bool,
}

impl FlightState {
    pub fn initial() -> FlightState {
        FlightState {
            position: Vector::new(50.0, 50.0),
            velocity: Vector::new(10.0, 0.0),
            direction: Vector::new(1.0, 0.0),
            lift: Vector::ZERO,
            drag: Vector::ZERO,
            debug: false,
        }
    }

    pub fn speed(&self) -> f64 {
        magnitude(self.velocity)
    }
}

impl Default for FlightState {
    fn default() -> Self {
        FlightState::initial()
    }
}

/// Where the glider is steering. `point` and `center` share a coordinate
/// frame; only their difference matters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Target {
    pub point: Vector,
    pub center: Vector,
}

impl Target {
    pub fn new(point: Vector, center: Vector) -> Target {
        Target { point, center }
    }

    /// A target already expressed relative to the center.
    pub fn relative(offset: Vector) -> Target {
        Target { point: offset, center: Vector::ZERO }
    }

    pub fn offset(&self) -> Vector {
        subtract(self.point, self.center)
    }
}

/// -1, 0 or 1. Unlike `f64::signum`, zero maps to zero.
pub fn sign(value: f64) -> f64 {
    if value == 0.0 {
        0.0
    } else if value > 0.0 {
        1.0
    } else {
        -1.0
    }
}

/// Signed angle from the steering direction to the velocity heading.
///
/// A plain difference of two `atan2` results jumps by 2π when the pair
/// straddles ±π. When the difference exceeds π the equivalent angle going
/// the other way round is used instead; exactly π stays as is.
pub fn angle_of_attack(velocity: Vector, direction: Vector) -> f64 {
    let velocity_heading = heading(velocity);
    let direction_heading = heading(direction);

    let forward = velocity_heading - direction_heading;
    let wrapped = (direction_heading + 2.0 * PI) - velocity_heading;
    if forward > PI { -wrapped } else { forward }
}

/// Tent-shaped lift response: linear up to [`STALL_THRESHOLD`], falling
/// back to zero at twice the threshold and clamped there. Carries the sign
/// of `angle`.
pub fn attack_response(angle: f64) -> f64 {
    let s = sign(angle);
    let a = angle.abs();
    if a < STALL_THRESHOLD {
        return a * s;
    }
    (STALL_THRESHOLD - (a - STALL_THRESHOLD)).max(0.0) * s
}

/// Advances the glider by one frame toward `target`.
pub fn advance(state: FlightState, target: Target) -> FlightState {
    debug_assert!(
        vector::is_finite(state.position)
            && vector::is_finite(state.velocity)
            && vector::is_finite(target.point)
            && vector::is_finite(target.center),
        "advance called with non-finite input: {:?} {:?}",
        state,
        target
    );

    let direction = normalize(target.offset());
    let perpendicular = normalize(rotate(state.velocity, -FRAC_PI_2));

    let angle = angle_of_attack(state.velocity, direction);
    let speed = magnitude(state.velocity);

    let lift = scale(perpendicular, speed * attack_response(angle) / LIFT_DIVISOR);
    let drag_coefficient = BASE_DRAG + angle.abs() / ANGLE_DRAG_DIVISOR;
    let drag = scale(normalize(state.velocity), -(drag_coefficient * speed / DRAG_DIVISOR));

    // Semi-implicit Euler: position moves by the updated velocity.
    let velocity = [GRAVITY, lift, drag].into_iter().fold(state.velocity, add);
    let position = add(state.position, velocity);

    FlightState {
        position,
        velocity,
        direction,
        lift,
        drag,
        ..state
    }
}

pub fn toggle_debug(state: FlightState) -> FlightState {
    FlightState { debug: !state.debug, ..state }
}
