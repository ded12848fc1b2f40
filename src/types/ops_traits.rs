/// Computes the quadratic form `A * inner * A^T`, where `A` is the implementor.
pub trait QuadraticForm<Inner> {
    type Output;
    fn quadratic_form(&self, inner: &Inner) -> Self::Output;
}

/// Rank-checked inversion of square matrices.
///
/// A matrix is considered invertible only if it is square and has full numerical rank. The
/// numerical rank is the number of singular values above `sigma_max * max(rows, cols) * eps`.
pub trait Invertible: Sized {
    fn numerical_rank(&self) -> usize;

    fn is_invertible(&self) -> bool;

    /// Returns the inverse, or `None` if the matrix is rank deficient.
    fn checked_inverse(&self) -> Option<Self>;
}

pub trait Symmetric {
    /// Checks `|a_ij - a_ji| <= relative_tolerance * max(1, max |a|)` for all entries.
    fn is_symmetric(&self, relative_tolerance: f64) -> bool;
}
