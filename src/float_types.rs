// Our Real scalar type:
#[cfg(feature = "f32")]
pub type Real = f32;
#[cfg(feature = "f64")]
pub type Real = f64;

use core::str::FromStr;
use std::sync::OnceLock;

/// Comparison tolerance, fixed on first read.
/// `POLAR_TOLERANCE` at compile time or one [`set_tolerance`] call replaces the default.
static TOLERANCE_CELL: OnceLock<Real> = OnceLock::new();

#[inline]
const fn default_tolerance() -> Real {
    #[cfg(feature = "f32")]
    {
        1e-4
    }
    #[cfg(feature = "f64")]
    {
        1e-9
    }
}

/// Comparison tolerance: 1e-9 for f64, 1e-4 for f32 unless overridden.
pub fn tolerance() -> Real {
    *TOLERANCE_CELL.get_or_init(|| {
        if let Some(environment_variable) = option_env!("POLAR_TOLERANCE") {
            if let Ok(value) = Real::from_str(environment_variable) {
                return value.max(Real::EPSILON);
            }
        }
        default_tolerance()
    })
}

/// Overrides the tolerance. Only takes effect before the first [`tolerance`] read;
/// later calls are no-ops. Clamped to at least `Real::EPSILON`.
pub fn set_tolerance(value: Real) {
    let _ = TOLERANCE_CELL.set(value.max(Real::EPSILON));
}

/// `true` when `a` and `b` differ by no more than [`tolerance`].
#[inline]
pub fn approx_eq(a: Real, b: Real) -> bool {
    (a - b).abs() <= tolerance()
}

// Pi
/// Archimedes' constant (π)
#[cfg(feature = "f32")]
pub const PI: Real = core::f32::consts::PI;
/// Archimedes' constant (π)
#[cfg(feature = "f64")]
pub const PI: Real = core::f64::consts::PI;

// Frac Pi 2
/// π/2
#[cfg(feature = "f32")]
pub const FRAC_PI_2: Real = core::f32::consts::FRAC_PI_2;
/// π/2
#[cfg(feature = "f64")]
pub const FRAC_PI_2: Real = core::f64::consts::FRAC_PI_2;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tolerance_is_at_least_machine_epsilon() {
        assert!(tolerance() >= Real::EPSILON);
    }

    #[test]
    fn approx_eq_uses_tolerance() {
        assert!(approx_eq(1.0, 1.0 + tolerance() / 2.0));
        assert!(!approx_eq(1.0, 1.0 + tolerance() * 4.0));
    }
}
