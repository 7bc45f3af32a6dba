//! Frame-rate-independent animation math.
//!
//! Widgets animate scale and rotation with these two helpers instead of
//! duration-based tweens: values relax toward a target every tick and the
//! target can change at any moment (grab, hover, release).

/// Exponential approach: move `value` toward `target` by the fraction
/// `k * dt`, clamped so a large `dt` lands exactly on the target instead of
/// overshooting.
pub fn approach(value: f32, target: f32, k: f32, dt: f32) -> f32 {
    value + (target - value) * (k * dt).min(1.0)
}

/// Multiplicative decay toward zero with time constant `1/rate`.
/// `decay(v, r, a + b) == decay(decay(v, r, a), r, b)`, so the settle curve
/// is identical at any tick rate.
pub fn decay(value: f32, rate: f32, dt: f32) -> f32 {
    value * (-rate * dt).exp()
}
