use super::Triangulation;
use crate::error::TriangulationError;
use crate::types::MeasurementVector;

/// Triangulation by the law of cosines.
///
/// `gamma` is the interior angle at landmark 1 between the baseline and the line of sight to the
/// robot. The fix is reconstructed from the range to landmark 1 alone.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LawOfCosines;

impl Triangulation for LawOfCosines {
    fn gamma_angle(
        &self,
        range_1: f64,
        range_2: f64,
        baseline: f64,
    ) -> Result<f64, TriangulationError> {
        if !range_1.is_finite() || !range_2.is_finite() {
            return Err(TriangulationError::NonFiniteRange { range_1, range_2 });
        }
        if range_1 < 0.0 || range_2 < 0.0 {
            return Err(TriangulationError::NegativeRange { range_1, range_2 });
        }
        if !(baseline.is_finite() && baseline > 0.0) {
            return Err(TriangulationError::NonPositiveBaseline(baseline));
        }
        if range_1 == 0.0 {
            return Err(TriangulationError::ZeroRange);
        }
        if range_1 + range_2 < baseline || (range_1 - range_2).abs() > baseline {
            return Err(TriangulationError::TriangleInequality {
                range_1,
                range_2,
                baseline,
            });
        }

        let cos_gamma = (range_1 * range_1 + baseline * baseline - range_2 * range_2)
            / (2.0 * range_1 * baseline);
        Ok(cos_gamma.max(-1.0).min(1.0).acos())
    }

    fn cartesian_fix(&self, _range_2: f64, range_1: f64, gamma: f64) -> MeasurementVector {
        let (sin_gamma, cos_gamma) = gamma.sin_cos();
        MeasurementVector::new(range_1 * cos_gamma, range_1 * sin_gamma)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASELINE: f64 = 0.34;

    fn ranges_from(x: f64, y: f64) -> (f64, f64) {
        (x.hypot(y), (x - BASELINE).hypot(y))
    }

    #[test]
    fn recovers_position_above_baseline() -> Result<(), TriangulationError> {
        let (range_1, range_2) = ranges_from(0.2, 0.5);
        let gamma = LawOfCosines.gamma_angle(range_1, range_2, BASELINE)?;
        assert!((gamma - 0.5f64.atan2(0.2)).abs() < 1e-12);

        let fix = LawOfCosines.cartesian_fix(range_2, range_1, gamma);
        assert!((fix - MeasurementVector::new(0.2, 0.5)).norm() < 1e-12);
        Ok(())
    }

    #[test]
    fn recovers_position_beyond_second_landmark() -> Result<(), TriangulationError> {
        let (range_1, range_2) = ranges_from(1.2, 0.3);
        let gamma = LawOfCosines.gamma_angle(range_1, range_2, BASELINE)?;
        let fix = LawOfCosines.cartesian_fix(range_2, range_1, gamma);
        assert!((fix - MeasurementVector::new(1.2, 0.3)).norm() < 1e-12);
        Ok(())
    }

    #[test]
    fn rejects_ranges_too_short_to_span_baseline() {
        assert_eq!(
            LawOfCosines.gamma_angle(0.1, 0.1, BASELINE),
            Err(TriangulationError::TriangleInequality {
                range_1: 0.1,
                range_2: 0.1,
                baseline: BASELINE,
            })
        );
    }

    #[test]
    fn rejects_ranges_differing_by_more_than_baseline() {
        assert!(matches!(
            LawOfCosines.gamma_angle(0.5, 0.1, BASELINE),
            Err(TriangulationError::TriangleInequality { .. })
        ));
    }

    #[test]
    fn rejects_malformed_inputs() {
        assert!(matches!(
            LawOfCosines.gamma_angle(f64::NAN, 0.3, BASELINE),
            Err(TriangulationError::NonFiniteRange { .. })
        ));
        assert!(matches!(
            LawOfCosines.gamma_angle(-0.2, 0.3, BASELINE),
            Err(TriangulationError::NegativeRange { .. })
        ));
        assert_eq!(
            LawOfCosines.gamma_angle(0.2, 0.3, 0.0),
            Err(TriangulationError::NonPositiveBaseline(0.0))
        );
        assert_eq!(
            LawOfCosines.gamma_angle(0.0, BASELINE, BASELINE),
            Err(TriangulationError::ZeroRange)
        );
    }
}
