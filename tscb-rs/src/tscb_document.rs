use crate::byte_cursor::ByteCursor;
use crate::error::Result;
use crate::first_section::FirstSection;
use crate::second_section::SecondSection;
use crate::tscb_header::TscbHeader;
use std::io::{Read, Seek};

/// A fully decoded TSCB file.
///
/// Built in one pass by [`TscbDocument::read`] and never modified afterwards.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TscbDocument {
    pub header: TscbHeader,
    pub first_section: FirstSection,
    pub second_section: SecondSection,
}

impl TscbDocument {
    /// Decodes the header and both sections in order, stopping at the first error.
    ///
    /// Input left over after the second section is ignored.
    pub fn read<R: Read + Seek>(cursor: &mut ByteCursor<R>) -> Result<Self> {
        let header = TscbHeader::read(cursor)?;
        let first_section = FirstSection::read(cursor, header.first_section_count)?;
        let second_section = SecondSection::read(cursor, header.second_section_count)?;

        Ok(Self {
            header,
            first_section,
            second_section,
        })
    }
}
