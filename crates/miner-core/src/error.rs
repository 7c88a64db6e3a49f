//! Mining errors.

/// Errors raised before a search begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MineError {
    /// An argument is outside its accepted range.
    #[error("invalid argument `{name}`: {value} (must be >= 0)")]
    InvalidArgument { name: &'static str, value: i64 },
}
