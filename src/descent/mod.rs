//! Drivers that iteratively step a parameter vector toward a local
//! minimum of an objective.

mod batch;
pub use self::batch::BatchDescent;
pub use self::batch::BatchDescentBuilder;

mod stochastic;
pub use self::stochastic::StochasticDescent;
pub use self::stochastic::StochasticDescentBuilder;
