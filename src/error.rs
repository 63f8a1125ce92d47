use thiserror::Error;

pub type TimelineResult<T> = Result<T, TimelineError>;

#[derive(Debug, Error)]
pub enum TimelineError {
    #[error("invalid display window: start={start}, end={end}")]
    InvalidWindow { start: i64, end: i64 },

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("invalid limits: {0}")]
    InvalidLimits(String),
}
