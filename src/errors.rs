use thiserror::Error;

/// A constraint set that is self-contradictory or out of documented bounds.
///
/// Raised by the validator before any sampling happens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpecError {
    /// Version minimum is greater than version maximum.
    #[error("version range is inverted: min {min} > max {max}")]
    InvalidVersionRange {
        /// The requested minimum.
        min: u32,
        /// The requested maximum.
        max: u32,
    },
    /// An exact version was combined with a version range.
    #[error("exact version cannot be combined with a version range")]
    VersionExactConflict,
    /// Version minimum below 1.
    #[error("version minimum must be at least 1, got {0}")]
    InvalidVersionMin(u32),
    /// Version maximum below 1.
    #[error("version maximum must be at least 1, got {0}")]
    InvalidVersionMax(u32),
    /// Exact version below 1.
    #[error("exact version must be at least 1, got {0}")]
    InvalidVersionExact(u32),
    /// A version field above the anti-overflow ceiling of 999.
    #[error("{field} exceeds the supported maximum of 999, got {value}")]
    VersionTooHigh {
        /// Which version field violated the ceiling.
        field: &'static str,
        /// The offending value.
        value: u32,
    },
    /// Release channel outside {stable, beta, dev, canary}.
    #[error("unknown release channel `{0}`")]
    InvalidChannel(String),
    /// Architecture outside the fixed whitelist.
    #[error("unsupported architecture `{0}`")]
    InvalidArch(String),
    /// Locale that does not match `xx[-XX]` (2-5 lowercase, optional 2-5 uppercase region).
    #[error("malformed locale `{0}`")]
    InvalidLocale(String),
    /// Empty or whitespace-only tag.
    #[error("tags must be non-empty strings, got `{0}`")]
    InvalidTag(String),
    /// History window outside [1, 10000].
    #[error("history window must be between 1 and 10000, got {0}")]
    InvalidHistoryWindow(usize),
    /// Retry budget above 100.
    #[error("retry budget must not exceed 100, got {0}")]
    InvalidRetryBudget(u32),
}

/// Failures surfaced by [`generate`](crate::generate).
///
/// All variants are locally recoverable; the engine never retries internally
/// apart from the avoid-recent strategy's bounded retry-then-fallback, which
/// degrades instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UaError {
    /// The spec itself is invalid; see [`SpecError`].
    #[error(transparent)]
    InvalidSpec(#[from] SpecError),
    /// The filter chain excluded every template.
    #[error("no browser template matches the spec: {reason}")]
    NoCandidate {
        /// Which constraint combination excluded everything.
        reason: String,
    },
    /// Exact version outside the selected template's bounds.
    #[error("version {version} is outside the template bounds [{min}, {max}]")]
    VersionOutOfRange {
        /// The requested exact version.
        version: u32,
        /// The template minimum.
        min: u32,
        /// The template maximum.
        max: u32,
    },
    /// Requested range minimum below the selected template's minimum.
    #[error("requested minimum {requested} is below the template minimum {supported}")]
    VersionBelowMinimum {
        /// The effective requested minimum.
        requested: u32,
        /// The template minimum.
        supported: u32,
    },
    /// Requested range maximum above the selected template's maximum.
    #[error("requested maximum {requested} is above the template maximum {supported}")]
    VersionAboveMaximum {
        /// The effective requested maximum.
        requested: u32,
        /// The template maximum.
        supported: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spec_error_converts_into_ua_error() {
        let err: UaError = SpecError::VersionExactConflict.into();
        assert!(matches!(
            err,
            UaError::InvalidSpec(SpecError::VersionExactConflict)
        ));
    }

    #[test]
    fn messages_name_the_violation() {
        let msg = SpecError::InvalidVersionRange { min: 200, max: 100 }.to_string();
        assert!(msg.contains("200") && msg.contains("100"));

        let msg = UaError::NoCandidate {
            reason: "browser=safari os=windows".into(),
        }
        .to_string();
        assert!(msg.contains("safari"));
    }
}
