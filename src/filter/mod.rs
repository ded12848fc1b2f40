pub mod extended_kalman;
pub mod filter_traits;
pub mod models;

pub use extended_kalman::*;
pub use filter_traits::*;
pub use models::*;
