//! # tscb-rs
//!
//! `tscb-rs` is a pure Rust decoder for TSCB files, the big-endian, offset-indexed
//! containers a game engine uses to describe scene and terrain-collision metadata.
//!
//! ## Features
//! - Decode a TSCB file from memory, from any seekable reader, or from disk
//! - Header validation with typed errors instead of assertions
//! - Batch decoding of every file matching a glob pattern
//! - Optional `serde` feature to serialize decoded documents
//!
//! ## Usage
//! Add to your `Cargo.toml`:
//! ```toml
//! [dependencies]
//! tscb-rs = "0.1"
//! ```
//!
//! ### Example: Decoding a File
//! ```rust,no_run
//! use tscb_rs::decode_file;
//!
//! let document = decode_file("MainField.tscb").unwrap();
//!
//! for instance in &document.first_section.instances {
//!     println!("[{}] {:?}", instance.index, instance.floats);
//! }
//! for instance in &document.second_section.instances {
//!     println!("{} ({} extra ints)", instance.file_name, instance.variable_ints.len());
//! }
//! ```

pub mod byte_cursor;
pub mod error;
mod ext;
pub mod first_section;
pub mod second_section;
pub mod tscb_document;
pub mod tscb_header;

pub use error::{Result, TscbError};
pub use first_section::{FirstSection, FirstSectionInstance, FIRST_SECTION_INSTANCE_SIZE};
pub use second_section::{SecondSection, SecondSectionInstance};
pub use tscb_document::TscbDocument;
pub use tscb_header::{TscbHeader, FORMAT_MARKER_A, FORMAT_MARKER_B, HEADER_SIZE, TSCB_MAGIC};

use byte_cursor::ByteCursor;
use glob::glob;
use std::fs::File;
use std::io::{BufReader, Cursor, Read, Seek};
use std::path::{Path, PathBuf};

/// Per-file results of [`decode_glob`].
pub type BatchResult = Vec<(PathBuf, Result<TscbDocument>)>;

/// Decodes a TSCB file held in memory.
pub fn decode(bytes: &[u8]) -> Result<TscbDocument> {
    decode_reader(Cursor::new(bytes))
}

/// Decodes a TSCB file from any seekable source.
///
/// The reader is consumed and dropped when decoding finishes, whether it succeeds or not.
pub fn decode_reader<R: Read + Seek>(reader: R) -> Result<TscbDocument> {
    let mut cursor = ByteCursor::new(reader)?;
    TscbDocument::read(&mut cursor)
}

/// Opens and decodes the TSCB file at `path`.
pub fn decode_file<P: AsRef<Path>>(path: P) -> Result<TscbDocument> {
    let path = path.as_ref();
    log::debug!("Decoding {}", path.display());
    let file = File::open(path)?;
    decode_reader(BufReader::new(file))
}

/// Decodes every file matching `pattern`.
///
/// Each file gets its own result, so one malformed file does not stop the batch. Only an
/// invalid pattern fails the whole call. Entries the glob walker cannot access are
/// skipped with a warning.
pub fn decode_glob(pattern: &str) -> Result<BatchResult> {
    let mut results = Vec::new();
    for entry in glob(pattern)? {
        let path = match entry {
            Ok(path) => path,
            Err(e) => {
                log::warn!("Skipping {}: {}", e.path().display(), e.error());
                continue;
            }
        };
        if !path.is_file() {
            continue;
        }
        let result = decode_file(&path);
        if let Err(e) = &result {
            log::warn!("Failed to decode {}: {e}", path.display());
        }
        results.push((path, result));
    }
    Ok(results)
}
