/// Error type
#[derive(Debug)]
pub enum Error {
    /// An IO error.
    Io(std::io::Error),

    /// A required collaborator (dictionary, aggregation) was not configured.
    InvalidConfiguration(&'static str),

    /// The metric name is already registered in the dictionary.
    DuplicateMetricName(String),

    /// The metric name is empty or contains unsupported characters.
    InvalidMetricName(String),

    /// The source column is empty, missing or has the wrong type.
    InvalidColumnReference {
        /// Metric that references the column
        metric: String,

        /// Referenced column
        column: String,
    },

    /// No aggregation with that name exists.
    UnknownAggregation(String),

    /// A metric definition could not be parsed.
    InvalidDefinition {
        /// 1-based line number
        line: u32,

        /// 1-based column
        column: usize,

        /// What went wrong
        reason: String,
    },
}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => {
                write!(f, "{e}")
            }
            Self::InvalidConfiguration(what) => {
                write!(f, "InvalidConfiguration: {what}")
            }
            Self::DuplicateMetricName(name) => {
                write!(f, "DuplicateMetricName: {name:?}")
            }
            Self::InvalidMetricName(name) => {
                write!(f, "InvalidMetricName: {name:?}")
            }
            Self::InvalidColumnReference { metric, column } => {
                write!(f, "InvalidColumnReference: {metric:?} -> {column:?}")
            }
            Self::UnknownAggregation(name) => {
                write!(f, "UnknownAggregation: {name:?}")
            }
            Self::InvalidDefinition {
                line,
                column,
                reason,
            } => {
                write!(f, "InvalidDefinition at {line}:{column}: {reason}")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

/// Result helper type
pub type Result<T> = std::result::Result<T, Error>;
