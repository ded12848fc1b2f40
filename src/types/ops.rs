use super::{InnovationCovariance, Invertible, QuadraticForm, Symmetric, MEASUREMENT_DIM};
use nalgebra::SMatrix;

impl<const R: usize, const C: usize> QuadraticForm<SMatrix<f64, C, C>> for SMatrix<f64, R, C> {
    type Output = SMatrix<f64, R, R>;

    fn quadratic_form(&self, inner: &SMatrix<f64, C, C>) -> Self::Output {
        self * inner * self.transpose()
    }
}

impl Invertible for InnovationCovariance {
    fn numerical_rank(&self) -> usize {
        let singular_values = self.singular_values();
        let tolerance = singular_values.max() * MEASUREMENT_DIM as f64 * f64::EPSILON;
        singular_values.iter().filter(|value| **value > tolerance).count()
    }

    fn is_invertible(&self) -> bool {
        self.is_square() && self.numerical_rank() == self.nrows()
    }

    fn checked_inverse(&self) -> Option<Self> {
        if self.is_invertible() {
            self.try_inverse()
        } else {
            None
        }
    }
}

impl<const N: usize> Symmetric for SMatrix<f64, N, N> {
    fn is_symmetric(&self, relative_tolerance: f64) -> bool {
        let scale = self.amax().max(1.0);
        for row in 0..N {
            for col in (row + 1)..N {
                if (self[(row, col)] - self[(col, row)]).abs() > relative_tolerance * scale {
                    return false;
                }
            }
        }
        true
    }
}
