use std::fmt;

pub const MISSING_FIELDS_MSG: &str = "Missing routing or account number.";
pub const ROUTING_FORMAT_MSG: &str = "Routing number must be exactly 9 digits.";
pub const ACCOUNT_FORMAT_MSG: &str = "Invalid account number format (8-17 digits).";
pub const NOT_READY_MSG: &str = "Server still loading data. Try again.";
pub const UNKNOWN_ROUTING_MSG: &str = "Invalid routing number.";
pub const MALFORMED_BODY_MSG: &str = "Malformed request body.";

/// **Reasons a validation request is turned away before or instead of a lookup**
///
/// A well-formed routing number that is simply not in the table is not
/// an error; see [`crate::types::Verdict::Unknown`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ValidationError {
    /// Either number is absent or empty.
    MissingFields,
    /// The routing number isn't exactly 9 digits.
    RoutingNumberFormat,
    /// The account number isn't 8 to 17 digits.
    AccountNumberFormat,
    /// The bank table hasn't been published yet.
    NotReady,
}

impl ValidationError {
    /// The human-readable reason sent back to the caller
    pub fn message(&self) -> &'static str {
        match self {
            ValidationError::MissingFields => MISSING_FIELDS_MSG,
            ValidationError::RoutingNumberFormat => ROUTING_FORMAT_MSG,
            ValidationError::AccountNumberFormat => ACCOUNT_FORMAT_MSG,
            ValidationError::NotReady => NOT_READY_MSG,
        }
    }

    /// Whether asking again later may give a different answer
    pub fn is_transient(&self) -> bool {
        matches!(self, ValidationError::NotReady)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for ValidationError {}

/// **Failure to read the bank routing table**
#[derive(Debug)]
pub enum LoadError {
    /// The file couldn't be opened, read, or parsed as delimited rows.
    Csv(csv::Error),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Csv(err) => write!(f, "cannot read bank table: {err}"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Csv(err) => Some(err),
        }
    }
}

impl From<csv::Error> for LoadError {
    fn from(err: csv::Error) -> Self {
        LoadError::Csv(err)
    }
}
