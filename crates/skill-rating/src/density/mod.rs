//! Unnormalized posterior densities over the rating domain.

pub mod likelihood;
pub mod posterior;

pub use likelihood::WinLikelihood;
pub use posterior::PosteriorDensity;

/// A non-negative scalar function proportional to a probability density.
pub trait Density {
    fn eval(&self, x: f64) -> f64;
}

impl<F> Density for F
where
    F: Fn(f64) -> f64,
{
    fn eval(&self, x: f64) -> f64 {
        self(x)
    }
}
