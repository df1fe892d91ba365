use serde::{Deserialize, Serialize};

use crate::error::ContentError;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurveKey {
    pub position: f32,
    pub value: f32,
}

/// Curve asset as stored on disk, before validation.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct CurveFile {
    pub(crate) keys: Vec<CurveKey>,
}

/// Piecewise-linear keyed curve.
///
/// Outside the first and last key the curve holds the end value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CurveFile")]
pub struct Curve {
    keys: Vec<CurveKey>,
}

impl TryFrom<CurveFile> for Curve {
    type Error = ContentError;

    fn try_from(file: CurveFile) -> Result<Self, Self::Error> {
        Curve::new(file.keys)
    }
}

impl Curve {
    /// Build a curve, rejecting empty, unsorted or non-finite keys.
    pub fn new(keys: Vec<CurveKey>) -> Result<Self, ContentError> {
        if keys.is_empty() {
            return Err(ContentError::InvalidCurve("curve has no keys".to_string()));
        }
        if keys
            .iter()
            .any(|k| !k.position.is_finite() || !k.value.is_finite())
        {
            return Err(ContentError::InvalidCurve(
                "curve keys must be finite".to_string(),
            ));
        }
        if keys.windows(2).any(|w| w[1].position <= w[0].position) {
            return Err(ContentError::InvalidCurve(
                "curve key positions must be strictly increasing".to_string(),
            ));
        }
        Ok(Self { keys })
    }

    /// `f(x) = x` over the menu slide domain.
    pub fn identity() -> Self {
        Self {
            keys: vec![
                CurveKey {
                    position: 0.0,
                    value: 0.0,
                },
                CurveKey {
                    position: 2.0,
                    value: 2.0,
                },
            ],
        }
    }

    pub fn keys(&self) -> &[CurveKey] {
        &self.keys
    }

    pub fn evaluate(&self, position: f32) -> f32 {
        let (Some(&first), Some(&last)) = (self.keys.first(), self.keys.last()) else {
            return position;
        };
        if position <= first.position {
            return first.value;
        }
        if position >= last.position {
            return last.value;
        }

        for w in self.keys.windows(2) {
            let (a, b) = (w[0], w[1]);
            if position <= b.position {
                let t = (position - a.position) / (b.position - a.position);
                return a.value + (b.value - a.value) * t;
            }
        }
        last.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(position: f32, value: f32) -> CurveKey {
        CurveKey { position, value }
    }

    #[test]
    fn test_identity_curve() {
        let curve = Curve::identity();
        assert_eq!(curve.evaluate(0.0), 0.0);
        assert_eq!(curve.evaluate(1.0), 1.0);
        assert_eq!(curve.evaluate(1.5), 1.5);
        assert_eq!(curve.evaluate(2.0), 2.0);
    }

    #[test]
    fn test_holds_end_values() {
        let curve = Curve::new(vec![key(0.0, 1.0), key(1.0, 3.0)]).unwrap();
        assert_eq!(curve.evaluate(-4.0), 1.0);
        assert_eq!(curve.evaluate(9.0), 3.0);
        assert_eq!(curve.evaluate(0.5), 2.0);
    }

    #[test]
    fn test_multi_segment() {
        let curve = Curve::new(vec![key(0.0, 0.0), key(1.0, 0.5), key(2.0, 2.5)]).unwrap();
        assert!((curve.evaluate(0.5) - 0.25).abs() < 1e-6);
        assert!((curve.evaluate(1.5) - 1.5).abs() < 1e-6);
    }

    #[test]
    fn test_rejects_invalid_keys() {
        assert!(Curve::new(vec![]).is_err());
        assert!(Curve::new(vec![key(1.0, 0.0), key(0.0, 1.0)]).is_err());
        assert!(Curve::new(vec![key(0.0, f32::NAN)]).is_err());
    }

    #[test]
    fn test_deserialize_validates_keys() {
        assert!(toml::from_str::<Curve>("keys = []").is_err());
        assert!(toml::from_str::<Curve>(
            "keys = [{ position = 1.0, value = 0.0 }, { position = 0.5, value = 1.0 }]"
        )
        .is_err());

        let curve: Curve = toml::from_str(
            "keys = [{ position = 0.0, value = 0.0 }, { position = 2.0, value = 4.0 }]",
        )
        .unwrap();
        assert_eq!(curve.evaluate(1.0), 2.0);
    }
}
