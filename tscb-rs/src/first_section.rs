use crate::byte_cursor::{resolve, ByteCursor};
use crate::error::Result;
use std::fmt;
use std::io::{Read, Seek};

/// Size in bytes of one [`FirstSectionInstance`] payload.
pub const FIRST_SECTION_INSTANCE_SIZE: u64 = 20;

/// A fixed-size record of the first section.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FirstSectionInstance {
    pub index: i32,
    pub floats: [f32; 4],
}

impl FirstSectionInstance {
    fn read<R: Read + Seek>(cursor: &mut ByteCursor<R>) -> Result<Self> {
        Ok(Self {
            index: cursor.read_i32()?,
            floats: cursor.read_f32_array()?,
        })
    }
}

impl fmt::Display for FirstSectionInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.index)
    }
}

/// The first section: a small sub-header, a total size and an offset table of
/// [`FirstSectionInstance`] records.
///
/// Instances are kept in offset table order, which need not match `index` order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FirstSection {
    pub unknown_int_a: i32,
    pub unknown_int_b: i32,
    pub unknown_float: f32,
    pub unknown_int_c: i32,
    /// Byte length of the section, counted from the start of this field.
    pub total_size: i32,
    pub instances: Vec<FirstSectionInstance>,
}

impl FirstSection {
    /// Reads the section and leaves the cursor at the end given by `total_size`,
    /// regardless of where the instance payloads ended.
    pub fn read<R: Read + Seek>(cursor: &mut ByteCursor<R>, instance_count: u32) -> Result<Self> {
        let unknown_int_a = cursor.read_i32()?;
        let unknown_int_b = cursor.read_i32()?;
        let unknown_float = cursor.read_f32()?;
        let unknown_int_c = cursor.read_i32()?;

        let section_start = cursor.position();
        let total_size = cursor.read_i32()?;

        cursor.ensure(4 * u64::from(instance_count))?;
        let mut instances = Vec::with_capacity(instance_count as usize);
        for _ in 0..instance_count {
            let instance = cursor.follow_self_relative(FirstSectionInstance::read)?;
            log::trace!("First section instance {instance} {:?}", instance.floats);
            instances.push(instance);
        }

        let section_end = resolve(section_start, total_size);
        log::debug!(
            "First section: {} instances, 0x{section_start:x}..0x{section_end:x}",
            instances.len()
        );
        cursor.seek_absolute(section_end)?;

        Ok(Self {
            unknown_int_a,
            unknown_int_b,
            unknown_float,
            unknown_int_c,
            total_size,
            instances,
        })
    }
}
