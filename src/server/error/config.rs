use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// Check `.env.example` for the variables the service needs.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Environment variable is set but its value is unusable.
    #[error("Invalid value for environment variable {name}: {reason}")]
    InvalidEnvVar {
        /// Name of the offending variable
        name: String,
        /// Why the value was rejected
        reason: String,
    },
}
