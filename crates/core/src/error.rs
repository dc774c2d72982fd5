/// Errors returned by the rule engine.
///
/// Business-rule fallbacks (the General Physician recommendation, the generic first-aid list, the
/// "No medicines detected" placeholder) are not errors and never surface here.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("internal rule engine fault: {0}")]
    Internal(String),
}

pub type EngineResult<T> = std::result::Result<T, EngineError>;
