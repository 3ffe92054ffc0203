//! Two-sided rating update after one user/problem outcome.
//!
//! The user is updated against the problem with the observed outcome; the
//! problem is updated against the user with the outcome inverted. The two
//! sides share nothing and may run in parallel.

use std::sync::Arc;
use std::time::Instant;

use skill_core::config::KernelSettings;
use skill_core::errors::{AdjustError, Degeneracy, RatingError};
use skill_core::events::{
    DegenerateDensityEvent, DensityCurveEvent, DomainExceededEvent, EventDispatcher,
    RatingAdjustedEvent,
};
use skill_core::{Rating, Side};

use crate::density::PosteriorDensity;
use crate::moments::{Grid, MomentMatcher, NormalApprox};

/// Result of a successful two-sided update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Adjustment {
    pub user: NormalApprox,
    pub problem: NormalApprox,
}

impl Adjustment {
    /// The new `(user, problem)` ratings, to be stored as the next priors.
    pub fn ratings(&self) -> (Rating, Rating) {
        (self.user.rating, self.problem.rating)
    }
}

/// Stateless update engine. Cheap to clone and safe to share across threads.
#[derive(Debug, Clone)]
pub struct RatingAdjuster {
    settings: KernelSettings,
    matcher: MomentMatcher,
    curve_grid: Grid,
    dispatcher: Option<Arc<EventDispatcher>>,
}

impl RatingAdjuster {
    pub fn new(settings: KernelSettings) -> Result<Self, RatingError> {
        if let Some(floor) = settings.variance_floor {
            if !floor.is_finite() || floor <= 0.0 {
                return Err(RatingError::InvalidVariance { variance: floor });
            }
        }
        Ok(Self {
            matcher: MomentMatcher::from_settings(&settings)?,
            curve_grid: Grid::new(settings.domain, settings.curve_step)?,
            settings,
            dispatcher: None,
        })
    }

    /// Attach an observer side-channel for curves and advisories.
    pub fn with_dispatcher(mut self, dispatcher: Arc<EventDispatcher>) -> Self {
        self.dispatcher = Some(dispatcher);
        self
    }

    pub fn settings(&self) -> &KernelSettings {
        &self.settings
    }

    pub fn matcher(&self) -> &MomentMatcher {
        &self.matcher
    }

    /// Update both participants after `user` attempted `problem`.
    ///
    /// Either both sides succeed or the error names the side that failed
    /// (the user side is reported when both fail).
    pub fn adjust(
        &self,
        user: &Rating,
        problem: &Rating,
        solved: bool,
    ) -> Result<Adjustment, AdjustError> {
        let started = Instant::now();
        user.validate().map_err(|e| AdjustError::new(Side::User, e))?;
        problem.validate().map_err(|e| AdjustError::new(Side::Problem, e))?;

        let user_side = || self.update_side(Side::User, user, problem, solved);
        let problem_side = || self.update_side(Side::Problem, problem, user, !solved);
        let (user_result, problem_result) = if self.settings.parallel {
            rayon::join(user_side, problem_side)
        } else {
            (user_side(), problem_side())
        };
        let adjustment = Adjustment {
            user: user_result?,
            problem: problem_result?,
        };

        tracing::debug!(
            solved,
            user_mean = adjustment.user.rating.mean,
            user_variance = adjustment.user.rating.variance,
            problem_mean = adjustment.problem.rating.mean,
            problem_variance = adjustment.problem.rating.variance,
            adjust_time_us = started.elapsed().as_micros() as u64,
            "ratings adjusted"
        );

        if let Some(dispatcher) = self.active_dispatcher() {
            dispatcher.emit_rating_adjusted(&RatingAdjustedEvent {
                solved,
                user_before: *user,
                user_after: adjustment.user.rating,
                problem_before: *problem,
                problem_after: adjustment.problem.rating,
            });
        }

        Ok(adjustment)
    }

    fn update_side(
        &self,
        side: Side,
        subject: &Rating,
        opponent: &Rating,
        won: bool,
    ) -> Result<NormalApprox, AdjustError> {
        let density = PosteriorDensity::build(subject, opponent, won)
            .map_err(|e| AdjustError::new(side, e))?;

        if let Some(dispatcher) = self.active_dispatcher() {
            dispatcher.emit_density_curve(&DensityCurveEvent {
                side,
                points: self.curve_grid.tabulate(&density),
            });
        }

        let approx = match self.matcher.approximate(&density) {
            Ok(approx) => approx,
            Err(RatingError::DegenerateDensity(
                degeneracy @ Degeneracy::ZeroVariance { mode, normalizer },
            )) => {
                let Some(floor) = self.settings.variance_floor else {
                    let source = RatingError::DegenerateDensity(degeneracy);
                    return Err(AdjustError::new(side, source));
                };
                let substituted = Rating {
                    mean: mode,
                    variance: floor,
                };
                tracing::warn!(
                    %side,
                    mode,
                    floor,
                    "posterior collapsed to zero variance; using floor"
                );
                if let Some(dispatcher) = self.active_dispatcher() {
                    dispatcher.emit_degenerate_density(&DegenerateDensityEvent {
                        side,
                        degeneracy,
                        substituted,
                    });
                }
                NormalApprox {
                    rating: substituted,
                    normalizer,
                    edge: self.settings.domain.edge_near(mode, self.settings.edge_margin),
                }
            }
            Err(e) => return Err(AdjustError::new(side, e)),
        };

        if let Some(edge) = approx.edge {
            tracing::warn!(
                %side,
                mode = approx.rating.mean,
                ?edge,
                "posterior mode at domain edge; domain may be too small"
            );
            if let Some(dispatcher) = self.active_dispatcher() {
                dispatcher.emit_domain_exceeded(&DomainExceededEvent {
                    side,
                    mode: approx.rating.mean,
                    edge,
                });
            }
        }

        tracing::debug!(
            %side,
            mode = approx.rating.mean,
            variance = approx.rating.variance,
            normalizer = approx.normalizer,
            "side updated"
        );
        Ok(approx)
    }

    fn active_dispatcher(&self) -> Option<&EventDispatcher> {
        self.dispatcher.as_deref().filter(|d| d.is_active())
    }
}

impl Default for RatingAdjuster {
    fn default() -> Self {
        Self {
            settings: KernelSettings::default(),
            matcher: MomentMatcher::default(),
            curve_grid: Grid::diagnostic(),
            dispatcher: None,
        }
    }
}

/// Update `user` and `problem` after one attempt, using default settings.
///
/// Returns the new `(user, problem)` ratings.
pub fn adjust_distribution(
    user: &Rating,
    problem: &Rating,
    solved: bool,
) -> Result<(Rating, Rating), AdjustError> {
    RatingAdjuster::default()
        .adjust(user, problem, solved)
        .map(|a| a.ratings())
}
