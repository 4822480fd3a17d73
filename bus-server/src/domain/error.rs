//! Domain error types.
//!
//! These errors represent validation failures in the domain layer. They
//! are distinct from catalog/IO errors.

use super::LineId;

/// Domain-level errors for validation and data consistency.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DomainError {
    /// A stop name does not appear on the given line
    #[error("stop {stop:?} is not on line {line}")]
    StopNotOnLine { stop: String, line: LineId },

    /// Invalid hop construction (e.g. boarding and alighting at one stop)
    #[error("invalid hop: {0}")]
    InvalidHop(&'static str),

    /// Journey has no hops
    #[error("journey must have at least one hop")]
    EmptyJourney,

    /// Consecutive hops don't share a stop
    #[error("hops at {0:?} and {1:?} do not connect")]
    HopsNotConnected(String, String),

    /// The same line appears twice in one journey
    #[error("line {0} cannot be ridden twice in one journey")]
    LineReused(LineId),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = DomainError::StopNotOnLine {
            stop: "PVS".to_string(),
            line: LineId::parse("7").unwrap(),
        };
        assert_eq!(err.to_string(), "stop \"PVS\" is not on line 7");

        let err = DomainError::InvalidHop("a ride must move");
        assert_eq!(err.to_string(), "invalid hop: a ride must move");

        let err = DomainError::EmptyJourney;
        assert_eq!(err.to_string(), "journey must have at least one hop");

        let err = DomainError::HopsNotConnected("KPT".to_string(), "Bejai".to_string());
        assert_eq!(err.to_string(), "hops at \"KPT\" and \"Bejai\" do not connect");

        let err = DomainError::LineReused(LineId::parse("3").unwrap());
        assert_eq!(
            err.to_string(),
            "line 3 cannot be ridden twice in one journey"
        );
    }
}
