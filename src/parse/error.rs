use std::fmt;

/// The input is not well-formed dice notation.
///
/// This is the only way parsing can fail. The position and message are
/// there for display; they do not distinguish kinds of failure.
#[derive(thiserror::Error, Debug, Clone, Eq, PartialEq)]
#[error("invalid dice notation at position {position}: {reason}")]
pub struct InvalidNotation {
    reason: Reason,
    position: usize,
}

impl InvalidNotation {
    pub(crate) fn new(reason: Reason, position: usize) -> Self {
        Self { reason, position }
    }

    /// Byte offset of the offending token, or the input length when the
    /// input ended too early.
    pub fn position(&self) -> usize {
        self.position
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub(crate) enum Reason {
    UnexpectedCharacter,
    MisplacedSign,
    OutOfRange { max: u32 },
    Zero,
    DuplicateField,
    MisplacedDice,
    MisplacedFudge,
    TrailingInput,
    Incomplete,
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedCharacter => f.write_str("unexpected character"),
            Self::MisplacedSign => f.write_str("a sign may only start the notation"),
            Self::OutOfRange { max } => write!(f, "value is larger than {}", max),
            Self::Zero => f.write_str("zero is not allowed"),
            Self::DuplicateField => f.write_str("number given twice for the same field"),
            Self::MisplacedDice => f.write_str("'d' or 'D' must follow the dice count"),
            Self::MisplacedFudge => f.write_str("'F' must follow 'NdX' or 'Nd' without a sign"),
            Self::TrailingInput => f.write_str("nothing may follow the end of the notation"),
            Self::Incomplete => f.write_str("notation ended too early"),
        }
    }
}
