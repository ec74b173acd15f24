/// Represents all possible errors that can occur while decoding a TSCB file.
///
/// Every variant is raised at the read or seek that detected it and returned to the
/// caller as-is. A structural error is permanent for its input, so nothing here is
/// retried or replaced by a default value.
#[derive(thiserror::Error, Debug)]
pub enum TscbError {
    /// The first four bytes of the input are not `TSCB`.
    #[error("Invalid magic: expected 'TSCB', got {} ({:?})", hex::encode(.0), String::from_utf8_lossy(.0))]
    InvalidMagic([u8; 4]),
    /// The two fixed header markers do not match the supported format.
    #[error("Unsupported TSCB version: markers 0x{marker_a:08x}, {marker_b} (expected 0x0a000000, 1)")]
    UnsupportedVersion { marker_a: i32, marker_b: i32 },
    /// A read needed more bytes than remain in the input.
    #[error("Truncated input at offset {offset}: need {needed} bytes, {available} available")]
    TruncatedInput {
        offset: u64,
        needed: u64,
        available: u64,
    },
    /// A seek target lies outside `[0, length]`.
    #[error("Seek target {target} is out of range for input of {length} bytes")]
    OutOfRange { target: i64, length: u64 },
    /// A null-terminated string ran into the end of the input.
    #[error("Unterminated string starting at offset {offset}")]
    UnterminatedString { offset: u64 },
    /// Represents an error that occurs during I/O operations on the underlying source.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// The pattern given to [`crate::decode_glob`] is not a valid glob.
    #[error("Invalid glob pattern: {0}")]
    Pattern(#[from] glob::PatternError),
}

pub type Result<T> = std::result::Result<T, TscbError>;
