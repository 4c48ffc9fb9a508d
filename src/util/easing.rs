//! Easing curves for effect transitions.
//!
//! All curves map progress in `[0, 1]` to eased progress in `[0, 1]`.

/// Easing function variants for transition curves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EasingFunction {
    /// Linear interpolation (no easing).
    Linear,
    /// Cubic ease-in-out: slow start, fast middle, slow end. This is the
    /// default curve of d3 transitions, which element moves imitate.
    #[default]
    CubicInOut,
    /// Quadratic ease-out (fast start, slow end); used for fades.
    QuadraticOut,
}

impl EasingFunction {
    /// Evaluate the curve at `t`, clamped to `[0, 1]`.
    #[inline]
    #[must_use]
    pub fn evaluate(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            EasingFunction::Linear => t,
            EasingFunction::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - u * u * u / 2.0
                }
            }
            EasingFunction::QuadraticOut => {
                let omt = 1.0 - t;
                1.0 - omt * omt
            }
        }
    }
}
