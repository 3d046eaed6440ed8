/// Errors raised by the swipe element's directional operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeError {
    /// `show`/`hide` was called before a direction was configured.
    NoDirectionConfigured,
}

impl std::fmt::Display for SwipeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SwipeError::NoDirectionConfigured => {
                write!(f, "Swipe direction must be set before show/hide")
            }
        }
    }
}

impl std::error::Error for SwipeError {}

/// Result type for swipe operations.
pub type SwipeResult<T> = Result<T, SwipeError>;
