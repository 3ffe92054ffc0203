//! Bayesian rating updates for users and problems.
//!
//! Each entity is a Gaussian with unknown mean and unknown variance. After
//! every user/problem outcome, both sides get a new Gaussian obtained by
//! building the unnormalized posterior (`density`) and reducing it back to a
//! `(mean, variance)` pair on a fixed grid (`moments`). `adjust` composes the
//! two for both participants.

pub mod adjust;
pub mod density;
pub mod ledger;
pub mod moments;
pub mod population;
pub mod selection;

pub use adjust::{adjust_distribution, Adjustment, RatingAdjuster};
pub use density::{Density, PosteriorDensity, WinLikelihood};
pub use ledger::RatingLedger;
pub use moments::{Grid, MomentMatcher, NormalApprox};
pub use population::{new_user, problem_ladder, seed_problems, DifficultyBand};
pub use selection::ProblemSelector;
pub use skill_core::{Domain, DomainEdge, Rating, Side};
