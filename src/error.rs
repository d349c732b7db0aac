//! Error type
use thiserror::Error;

/// Error from constructing, evaluating, or sampling a distribution.
///
/// Values or parameters outside a distribution's support are not errors;
/// the log-density is negative infinity there (see [`bound`](crate::math::bound)).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DistributionError {
    #[error("cannot pass both {first} and {second}")]
    ParameterConflict {
        first: &'static str,
        second: &'static str,
    },
    #[error("{distribution} does not support {operation}")]
    Unsupported {
        distribution: &'static str,
        operation: &'static str,
    },
    #[error("invalid {distribution} parameters: {reason}")]
    InvalidParameter {
        distribution: &'static str,
        reason: String,
    },
    #[error("cannot broadcast parameter of shape {from:?} to shape {to:?}")]
    IncompatibleShape { from: Vec<usize>, to: Vec<usize> },
    #[error("no value for stochastic parameter \"{name}\"")]
    Unresolved { name: String },
    #[error("truncated sampling did not finish after {rounds} rounds")]
    Rejection { rounds: usize },
}

impl DistributionError {
    /// Wrap a parameter error reported by an elementary generator.
    pub fn invalid<E: ToString>(distribution: &'static str, err: E) -> Self {
        Self::InvalidParameter {
            distribution,
            reason: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DistributionError>;
