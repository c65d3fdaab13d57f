use std::num::ParseIntError;
use thiserror::Error;

/// Internal issues indicating unexpected state & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Failure to parse id from String
    ///
    /// Seen when the session holds a user id that is not an integer. Results
    /// in a 500 Internal Server Error with a generic message returned to client.
    #[error("Failed to parse ID from String '{value}': {source}")]
    ParseStringId {
        /// The string value that failed to parse
        value: String,
        /// The underlying parse error
        #[source]
        source: ParseIntError,
    },
}
