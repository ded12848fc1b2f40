//! Fixed-size matrix types used by the filter, together with the small set of linear-algebra
//! operations the filter needs on top of `nalgebra` ( quadratic forms, rank-checked inversion
//! and symmetry checks ).

mod aliases;
mod ops;
mod ops_traits;

pub use aliases::*;
pub use ops_traits::*;
