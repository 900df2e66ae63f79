//! Errors that can occur while counting, building, encoding or decoding.

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HuffmanError {
    /// The input sequence (or the frequency table built from it) was empty.
    InvalidInput,
    /// A symbol that has no code in the table was passed to the encoder.
    UnknownSymbol { position: usize, symbol: String },
    /// The bit string ended in the middle of a code, or walked off the tree.
    MalformedEncoding {
        position: usize,
        trailing_bits: usize,
    },
    /// Text that was supposed to hold a bit string contained something other than `0` or `1`.
    InvalidBitCharacter { position: usize, got: char },
}

impl std::error::Error for HuffmanError {}

impl core::fmt::Display for HuffmanError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            HuffmanError::InvalidInput => {
                write!(f, "Input needs to contain at least one symbol")
            }
            HuffmanError::UnknownSymbol { position, symbol } => {
                write!(
                    f,
                    "Symbol {} at position {} has no code in the code table",
                    symbol, position,
                )
            }
            HuffmanError::MalformedEncoding {
                position,
                trailing_bits,
            } => {
                write!(
                    f,
                    "Bit string is malformed or truncated: {} bits starting at bit {} do not form a complete code",
                    trailing_bits, position,
                )
            }
            HuffmanError::InvalidBitCharacter { position, got } => {
                write!(
                    f,
                    "Bit strings may only contain '0' and '1', got {:?} at position {}",
                    got, position,
                )
            }
        }
    }
}
