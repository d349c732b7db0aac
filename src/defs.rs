//! Distribution definitions
use crate::distributions::{
    Beta, Bound, Cauchy, Continuous, Exponential, Flat, Gamma, Laplace, Lognormal, Normal,
    StudentT, Uniform,
};
use crate::error::Result;
use crate::params::Param;
use serde::{Deserialize, Serialize};
use tracing::debug;

const fn one() -> f64 {
    1.0
}

/// Definition of a distribution with concrete parameters.
///
/// Missing parameters take the same defaults as the distribution constructors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ContinuousDef {
    Uniform {
        #[serde(default)]
        lower: f64,
        #[serde(default = "one")]
        upper: f64,
    },
    Flat,
    Normal {
        #[serde(default)]
        mu: f64,
        /// Precision. Exclusive with `sd`.
        tau: Option<f64>,
        /// Standard deviation. Exclusive with `tau`.
        sd: Option<f64>,
    },
    Beta {
        alpha: f64,
        beta: f64,
    },
    Exponential {
        lam: f64,
    },
    Laplace {
        mu: f64,
        b: f64,
    },
    Lognormal {
        #[serde(default)]
        mu: f64,
        #[serde(default = "one")]
        tau: f64,
    },
    StudentT {
        nu: f64,
        #[serde(default)]
        mu: f64,
        #[serde(default = "one")]
        lam: f64,
    },
    Cauchy {
        alpha: f64,
        beta: f64,
    },
    Gamma {
        alpha: f64,
        beta: f64,
    },
    /// Truncation of another distribution. Missing limits are infinite.
    Bounded {
        inner: Box<ContinuousDef>,
        lower: Option<f64>,
        upper: Option<f64>,
    },
}

impl ContinuousDef {
    /// Build the distribution with the given sample shape.
    ///
    /// # Errors
    /// If the distribution constructor rejects the parameters
    /// (for example, a normal distribution with both `tau` and `sd`).
    pub fn build(&self, shape: &[usize]) -> Result<Box<dyn Continuous>> {
        debug!(def = ?self, ?shape, "building distribution");
        let distribution: Box<dyn Continuous> = match *self {
            Self::Uniform { lower, upper } => Box::new(Uniform::new(lower, upper).with_shape(shape)),
            Self::Flat => Box::new(Flat::new().with_shape(shape)),
            Self::Normal { mu, tau, sd } => Box::new(
                Normal::new(mu, tau.map(Param::from), sd.map(Param::from))?
                    .with_shape(shape),
            ),
            Self::Beta { alpha, beta } => Box::new(Beta::new(alpha, beta).with_shape(shape)),
            Self::Exponential { lam } => Box::new(Exponential::new(lam).with_shape(shape)),
            Self::Laplace { mu, b } => Box::new(Laplace::new(mu, b).with_shape(shape)),
            Self::Lognormal { mu, tau } => Box::new(Lognormal::new(mu, tau).with_shape(shape)),
            Self::StudentT { nu, mu, lam } => {
                Box::new(StudentT::new(nu, mu, lam).with_shape(shape))
            }
            Self::Cauchy { alpha, beta } => Box::new(Cauchy::new(alpha, beta).with_shape(shape)),
            Self::Gamma { alpha, beta } => Box::new(Gamma::new(alpha, beta).with_shape(shape)),
            Self::Bounded {
                ref inner,
                lower,
                upper,
            } => {
                let bound = Bound::new(
                    lower.unwrap_or(f64::NEG_INFINITY),
                    upper.unwrap_or(f64::INFINITY),
                );
                Box::new(bound.dist(inner.build(shape)?))
            }
        };
        Ok(distribution)
    }
}
