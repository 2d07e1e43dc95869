/// Type alias for Result with anyhow::Error as the error type.
/// Infrastructure code returns this; domain calculations never fail.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
