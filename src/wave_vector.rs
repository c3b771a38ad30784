use std::fmt;

use crate::{FieldError, Result, WaveModel};

/// Wave vector representation
///
/// The plane wave and interference models read a `(kx, ky)` pair, the
/// spherical wave model reads the radial wave number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WaveVector {
    Scalar(f64),
    Pair(f64, f64),
}
impl Default for WaveVector {
    fn default() -> Self {
        WaveVector::Pair(1f64, 1f64)
    }
}
impl WaveVector {
    /// Returns the `(kx, ky)` components or a shape mismatch error for `model`
    pub fn pair(&self, model: WaveModel) -> Result<(f64, f64)> {
        match *self {
            WaveVector::Pair(kx, ky) => Ok((kx, ky)),
            WaveVector::Scalar(_) => Err(FieldError::ShapeMismatch {
                model,
                expected: "(kx, ky) pair",
            }),
        }
    }
    /// Returns the radial wave number or a shape mismatch error for `model`
    pub fn scalar(&self, model: WaveModel) -> Result<f64> {
        match *self {
            WaveVector::Scalar(k) => Ok(k),
            WaveVector::Pair(..) => Err(FieldError::ShapeMismatch {
                model,
                expected: "scalar",
            }),
        }
    }
}
impl From<f64> for WaveVector {
    fn from(k: f64) -> Self {
        WaveVector::Scalar(k)
    }
}
impl From<(f64, f64)> for WaveVector {
    fn from((kx, ky): (f64, f64)) -> Self {
        WaveVector::Pair(kx, ky)
    }
}
impl From<[f64; 2]> for WaveVector {
    fn from(k: [f64; 2]) -> Self {
        WaveVector::Pair(k[0], k[1])
    }
}
impl fmt::Display for WaveVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WaveVector::Scalar(k) => write!(f, "{:.3}", k),
            WaveVector::Pair(kx, ky) => write!(f, "[{:.3},{:.3}]", kx, ky),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shapes() {
        let k: WaveVector = (2., 3.).into();
        assert_eq!(k.pair(WaveModel::Plane).unwrap(), (2., 3.));
        assert!(matches!(
            k.scalar(WaveModel::Spherical),
            Err(FieldError::ShapeMismatch {
                model: WaveModel::Spherical,
                ..
            })
        ));
        let k = WaveVector::from(5f64);
        assert_eq!(k.scalar(WaveModel::Spherical).unwrap(), 5.);
        assert!(k.pair(WaveModel::Interference).is_err());
    }

    #[test]
    fn display() {
        assert_eq!(WaveVector::default().to_string(), "[1.000,1.000]");
        assert_eq!(WaveVector::Scalar(0.5).to_string(), "0.500");
    }
}
