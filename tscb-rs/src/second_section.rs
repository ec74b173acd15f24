use crate::byte_cursor::ByteCursor;
use crate::error::Result;
use std::io::{Read, Seek};

/// A variable-size record of the second section.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SecondSectionInstance {
    pub floats: [f32; 7],
    /// Non-zero when the record carries `variable_ints`.
    pub flag: i32,
    pub file_name: String,
    pub trailing: [i32; 3],
    /// Empty whenever `flag` is zero.
    pub variable_ints: Vec<i32>,
}

impl SecondSectionInstance {
    fn read<R: Read + Seek>(cursor: &mut ByteCursor<R>) -> Result<Self> {
        let floats = cursor.read_f32_array()?;
        let flag = cursor.read_i32()?;
        let file_name = cursor.follow_self_relative(|c| c.read_null_terminated_string())?;
        let trailing = cursor.read_i32_array()?;

        let variable_ints = if flag != 0 {
            let count = cursor.read_u32()?;
            cursor.read_i32_vec(count)?
        } else {
            Vec::new()
        };

        Ok(Self {
            floats,
            flag,
            file_name,
            trailing,
            variable_ints,
        })
    }
}

/// The second section: an offset table of [`SecondSectionInstance`] records with no
/// sub-header and no size field.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SecondSection {
    pub instances: Vec<SecondSectionInstance>,
    /// Position just past the offset table. Nothing is known to follow it.
    pub end_position: u64,
}

impl SecondSection {
    pub fn read<R: Read + Seek>(cursor: &mut ByteCursor<R>, section_count: u32) -> Result<Self> {
        let table_start = cursor.position();
        cursor.ensure(4 * u64::from(section_count))?;

        let mut instances = Vec::with_capacity(section_count as usize);
        for _ in 0..section_count {
            let instance = cursor.follow_self_relative(SecondSectionInstance::read)?;
            log::trace!(
                "Second section instance '{}' ({} variable ints)",
                instance.file_name,
                instance.variable_ints.len()
            );
            instances.push(instance);
        }

        let end_position = cursor.position();
        log::debug!(
            "Second section: {} instances, table 0x{table_start:x}..0x{end_position:x}",
            instances.len()
        );
        Ok(Self {
            instances,
            end_position,
        })
    }
}
