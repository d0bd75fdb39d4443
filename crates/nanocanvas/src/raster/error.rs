use std::fmt;

/// Failure signalled by a rasterizer context.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum RasterError {
    /// `restore` without a matching `save`.
    StateStackUnderflow,
    /// `save` beyond the context's state stack capacity.
    StateStackOverflow { limit: usize },
}

impl fmt::Display for RasterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StateStackUnderflow => f.write_str("restore called without a matching save"),
            Self::StateStackOverflow { limit } => {
                write!(f, "render state stack is full ({limit} states)")
            }
        }
    }
}

impl std::error::Error for RasterError {}
