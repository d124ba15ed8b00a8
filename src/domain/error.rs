/// Errors raised by the simulation core and the layers above it.
/// All of them are contract violations reported straight back to the caller.
#[derive(Debug, thiserror::Error)]
pub enum LifeError {
    #[error(
        "invalid grid dimensions {width}x{height}: \
         each side must be at least 1 and the cell count must fit in usize"
    )]
    InvalidDimension { width: usize, height: usize },

    #[error("cell ({row}, {col}) is outside the {width}x{height} grid")]
    OutOfRange {
        row: usize,
        col: usize,
        width: usize,
        height: usize,
    },

    #[error(
        "{pattern_width}x{pattern_height} pattern at ({offset_row}, {offset_col}) \
         does not fit in the {width}x{height} grid"
    )]
    PatternOverflow {
        offset_row: usize,
        offset_col: usize,
        pattern_width: usize,
        pattern_height: usize,
        width: usize,
        height: usize,
    },

    #[error("invalid pattern: {reason}")]
    InvalidPattern { reason: String },

    #[error("no preset pattern named {name:?}")]
    UnknownPattern { name: String },

    #[error("invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type LifeResult<T> = std::result::Result<T, LifeError>;
