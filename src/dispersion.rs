//! Plane wave dispersion term
//!
//! The plane wave phase is `kx x + ky y - D(kx,ky) c t`; `D` is provided by a
//! [Dispersion] implementation. Any `Fn(f64, f64) -> f64` closure is a
//! dispersion term too.

use crate::{FieldError, Result};

pub trait Dispersion {
    /// Returns `D(kx,ky)`
    fn term(&self, kx: f64, ky: f64) -> Result<f64>;
}

/// Converts the wave vector components to integers without rounding or saturating
fn integer_components(kx: f64, ky: f64) -> Result<(i64, i64)> {
    let integral = |k: f64| k.is_finite() && k.fract() == 0f64;
    if !(integral(kx) && integral(ky)) {
        return Err(FieldError::NonIntegralWaveVector(kx, ky));
    }
    // i64::MAX as f64 is 2^63, itself out of range
    let in_range = |k: f64| (i64::MIN as f64..i64::MAX as f64).contains(&k);
    if !(in_range(kx) && in_range(ky)) {
        return Err(FieldError::WaveVectorOutOfRange(kx, ky));
    }
    Ok((kx as i64, ky as i64))
}

/// Bitwise XOR of the integer wave vector components: `kx ^ ky`
///
/// Components with a fractional part or outside the `i64` range are rejected.
#[derive(Debug, Default, Clone, Copy)]
pub struct XorDispersion;
impl Dispersion for XorDispersion {
    fn term(&self, kx: f64, ky: f64) -> Result<f64> {
        let (kx, ky) = integer_components(kx, ky)?;
        Ok((kx ^ ky) as f64)
    }
}

/// `kx ^ (ky + 2) ^ 2`: the bitwise reading of `kx ^ 2 + ky ^ 2` where `+`
/// binds tighter than `^`
#[derive(Debug, Default, Clone, Copy)]
pub struct PrecedenceXorDispersion;
impl Dispersion for PrecedenceXorDispersion {
    fn term(&self, kx: f64, ky: f64) -> Result<f64> {
        let (kx, ky) = integer_components(kx, ky)?;
        // in-range components are at most 2^63 - 1024, so ky + 2 cannot overflow
        Ok((kx ^ (ky + 2) ^ 2) as f64)
    }
}

/// Squared wave vector magnitude: `kx² + ky²`
#[derive(Debug, Default, Clone, Copy)]
pub struct SquaredMagnitude;
impl Dispersion for SquaredMagnitude {
    fn term(&self, kx: f64, ky: f64) -> Result<f64> {
        Ok(kx * kx + ky * ky)
    }
}

impl<F> Dispersion for F
where
    F: Fn(f64, f64) -> f64,
{
    fn term(&self, kx: f64, ky: f64) -> Result<f64> {
        Ok(self(kx, ky))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn xor() {
        assert_eq!(XorDispersion.term(1., 1.).unwrap(), 0.);
        assert_eq!(XorDispersion.term(2., 3.).unwrap(), 1.);
        assert_eq!(XorDispersion.term(-1., 0.).unwrap(), -1.);
        assert_eq!(XorDispersion.term(6., 3.).unwrap(), 5.);
    }

    #[test]
    fn xor_non_integral() {
        assert!(matches!(
            XorDispersion.term(1.5, 1.),
            Err(FieldError::NonIntegralWaveVector(..))
        ));
        assert!(XorDispersion.term(1., f64::NAN).is_err());
    }

    #[test]
    fn xor_out_of_range() {
        for (kx, ky) in [(1e19, 0.), (1e19, 2e19), (0., -1e19), (2f64.powi(63), 1.)] {
            assert!(matches!(
                XorDispersion.term(kx, ky),
                Err(FieldError::WaveVectorOutOfRange(..))
            ));
        }
        assert_eq!(
            XorDispersion.term(-(2f64.powi(63)), 0.).unwrap(),
            -(2f64.powi(63))
        );
        assert_eq!(XorDispersion.term(2f64.powi(62), 0.).unwrap(), 2f64.powi(62));
    }

    #[test]
    fn precedence_xor() {
        assert_eq!(PrecedenceXorDispersion.term(1., 1.).unwrap(), 0.);
        assert_eq!(PrecedenceXorDispersion.term(2., 3.).unwrap(), 5.);
        assert_eq!(PrecedenceXorDispersion.term(1., 2.).unwrap(), 7.);
        assert!(matches!(
            PrecedenceXorDispersion.term(0.5, 1.),
            Err(FieldError::NonIntegralWaveVector(..))
        ));
        assert!(matches!(
            PrecedenceXorDispersion.term(0., 1e19),
            Err(FieldError::WaveVectorOutOfRange(..))
        ));
    }

    #[test]
    fn squared_magnitude() {
        assert_eq!(SquaredMagnitude.term(3., 4.).unwrap(), 25.);
        assert_eq!(SquaredMagnitude.term(1.5, 0.).unwrap(), 2.25);
    }

    #[test]
    fn closure() {
        let d = |kx: f64, ky: f64| kx + ky;
        assert_eq!(d.term(1., 2.).unwrap(), 3.);
    }
}
