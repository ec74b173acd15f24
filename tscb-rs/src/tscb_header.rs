use crate::byte_cursor::ByteCursor;
use crate::error::{Result, TscbError};
use std::io::{Read, Seek};

/// The four character code every TSCB file starts with.
pub const TSCB_MAGIC: [u8; 4] = *b"TSCB";
/// First fixed format marker following the magic.
pub const FORMAT_MARKER_A: i32 = 0x0A00_0000;
/// Second fixed format marker following the magic.
pub const FORMAT_MARKER_B: i32 = 1;
/// Size of the file header in bytes; the first section starts here.
pub const HEADER_SIZE: u64 = 0x20;

/// Represents the fixed header at the start of a TSCB file.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TscbHeader {
    /// Byte offset of the string table. Informational only: strings are resolved
    /// through per-field offsets.
    pub string_table_offset: i32,
    pub global_float_a: f32,
    pub global_float_b: f32,
    /// Number of entries in the first section's offset table.
    pub first_section_count: u32,
    /// Number of entries in the second section's offset table.
    pub second_section_count: u32,
}

impl TscbHeader {
    /// Reads the header from the start of the input, leaving the cursor at the first
    /// section's sub-header.
    pub fn read<R: Read + Seek>(cursor: &mut ByteCursor<R>) -> Result<Self> {
        let magic = cursor.read_chars::<4>()?;
        if magic != TSCB_MAGIC {
            return Err(TscbError::InvalidMagic(magic));
        }

        let marker_a = cursor.read_i32()?;
        let marker_b = cursor.read_i32()?;
        if marker_a != FORMAT_MARKER_A || marker_b != FORMAT_MARKER_B {
            log::warn!("Unsupported TSCB markers 0x{marker_a:08x}, {marker_b}");
            return Err(TscbError::UnsupportedVersion { marker_a, marker_b });
        }

        let header = Self {
            string_table_offset: cursor.read_i32()?,
            global_float_a: cursor.read_f32()?,
            global_float_b: cursor.read_f32()?,
            first_section_count: cursor.read_u32()?,
            second_section_count: cursor.read_u32()?,
        };
        log::debug!(
            "TSCB header: {} first section instances, {} second section instances, string table at 0x{:x}",
            header.first_section_count,
            header.second_section_count,
            header.string_table_offset
        );
        Ok(header)
    }
}
