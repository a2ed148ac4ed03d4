use std::fmt;
use thiserror::Error;

/// Result alias used throughout maidenhead-rs.
pub type Result<T> = std::result::Result<T, MaidenheadError>;

/// The grammar rule a locator broke, in the order rules are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationRule {
    /// The locator is not exactly six characters long.
    Length,
    /// Position 0 is not an uppercase letter A-R.
    FirstChar,
    /// Position 1 is not an uppercase letter A-R.
    SecondChar,
    /// Position 2 is not a digit.
    ThirdChar,
    /// Position 3 is not a digit.
    FourthChar,
    /// Position 4 is not a lowercase letter a-x.
    FifthChar,
    /// Position 5 is not a lowercase letter a-x.
    SixthChar,
}

impl ValidationRule {
    /// Human readable phrase for the rule. Callers match on this text, keep it stable.
    pub fn message(&self) -> &'static str {
        match self {
            ValidationRule::Length => "must be 6 characters",
            ValidationRule::FirstChar => "first character must be A-R",
            ValidationRule::SecondChar => "second character must be A-R",
            ValidationRule::ThirdChar => "third character must be a digit",
            ValidationRule::FourthChar => "fourth character must be a digit",
            ValidationRule::FifthChar => "fifth character must be a-x",
            ValidationRule::SixthChar => "sixth character must be a-x",
        }
    }
}

impl fmt::Display for ValidationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Which locator of a two-locator query failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Local,
    Remote,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Local => f.write_str("local"),
            Side::Remote => f.write_str("remote"),
        }
    }
}

/// The sub-computation of an aggregate query, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathStep {
    ShortPathBearing,
    ShortPathDistance,
    LongPathBearing,
    LongPathDistance,
}

impl fmt::Display for PathStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PathStep::ShortPathBearing => "short path bearing",
            PathStep::ShortPathDistance => "short path distance",
            PathStep::LongPathBearing => "long path bearing",
            PathStep::LongPathDistance => "long path distance",
        };
        f.write_str(s)
    }
}

/// Error type for maidenhead-rs operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MaidenheadError {
    /// The locator does not follow the `AA99aa` grammar.
    #[error("invalid gridsquare format: {input} ({rule})")]
    InvalidGridSquare { input: String, rule: ValidationRule },

    /// One side of a two-locator query was rejected.
    #[error("invalid {side} grid square: {source}")]
    InvalidSide {
        side: Side,
        #[source]
        source: Box<MaidenheadError>,
    },

    /// A step of an aggregate query failed.
    #[error("failed to calculate {step}: {source}")]
    Calculation {
        step: PathStep,
        #[source]
        source: Box<MaidenheadError>,
    },
}

impl MaidenheadError {
    pub(crate) fn invalid(input: &str, rule: ValidationRule) -> Self {
        Self::InvalidGridSquare {
            input: input.to_string(),
            rule,
        }
    }

    pub(crate) fn on_side(self, side: Side) -> Self {
        Self::InvalidSide {
            side,
            source: Box::new(self),
        }
    }

    pub(crate) fn during(self, step: PathStep) -> Self {
        Self::Calculation {
            step,
            source: Box::new(self),
        }
    }

    /// The grammar rule behind this error, however deeply it is wrapped.
    pub fn rule(&self) -> ValidationRule {
        match self {
            Self::InvalidGridSquare { rule, .. } => *rule,
            Self::InvalidSide { source, .. } | Self::Calculation { source, .. } => source.rule(),
        }
    }

    /// The offending locator text as it reached the validator.
    pub fn input(&self) -> &str {
        match self {
            Self::InvalidGridSquare { input, .. } => input,
            Self::InvalidSide { source, .. } | Self::Calculation { source, .. } => source.input(),
        }
    }

    /// Which side of a two-locator query failed, if the error came from one.
    pub fn side(&self) -> Option<Side> {
        match self {
            Self::InvalidGridSquare { .. } => None,
            Self::InvalidSide { side, .. } => Some(*side),
            Self::Calculation { source, .. } => source.side(),
        }
    }

    /// The aggregate step that failed, if the error came from `get_location`.
    pub fn step(&self) -> Option<PathStep> {
        match self {
            Self::Calculation { step, .. } => Some(*step),
            _ => None,
        }
    }
}
