#![allow(dead_code)]

use byteorder::{BigEndian, WriteBytesExt};

pub struct SecondSpec {
    pub floats: [f32; 7],
    pub flag: i32,
    pub name: &'static str,
    pub trailing: [i32; 3],
    pub ints: Vec<i32>,
}

impl SecondSpec {
    pub fn new(name: &'static str, flag: i32, ints: Vec<i32>) -> Self {
        Self {
            floats: [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0],
            flag,
            name,
            trailing: [-1, 0, 1],
            ints,
        }
    }
}

/// Builds TSCB files in the usual layout: header, first section sub-header, first offset
/// table, first payloads, padding, second offset table, second payloads.
pub struct TscbBuilder {
    pub magic: [u8; 4],
    pub marker_a: i32,
    pub marker_b: i32,
    pub first: Vec<(i32, [f32; 4])>,
    pub first_padding: usize,
    pub second: Vec<SecondSpec>,
}

impl TscbBuilder {
    pub fn new() -> Self {
        Self {
            magic: *b"TSCB",
            marker_a: 0x0A00_0000,
            marker_b: 1,
            first: Vec::new(),
            first_padding: 0,
            second: Vec::new(),
        }
    }

    pub fn first(mut self, index: i32, floats: [f32; 4]) -> Self {
        self.first.push((index, floats));
        self
    }

    pub fn second(mut self, spec: SecondSpec) -> Self {
        self.second.push(spec);
        self
    }

    pub fn padding(mut self, bytes: usize) -> Self {
        self.first_padding = bytes;
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let mut out = Vec::new();
        out.extend_from_slice(&self.magic);
        out.write_i32::<BigEndian>(self.marker_a).unwrap();
        out.write_i32::<BigEndian>(self.marker_b).unwrap();
        out.write_i32::<BigEndian>(0).unwrap();
        out.write_f32::<BigEndian>(0.5).unwrap();
        out.write_f32::<BigEndian>(1.5).unwrap();
        out.write_u32::<BigEndian>(self.first.len() as u32).unwrap();
        out.write_u32::<BigEndian>(self.second.len() as u32).unwrap();

        // first section sub-header
        out.write_i32::<BigEndian>(11).unwrap();
        out.write_i32::<BigEndian>(22).unwrap();
        out.write_f32::<BigEndian>(33.0).unwrap();
        out.write_i32::<BigEndian>(44).unwrap();

        let n = self.first.len();
        let total_size = 4 + 4 * n + 20 * n + self.first_padding;
        out.write_i32::<BigEndian>(total_size as i32).unwrap();
        let table = out.len();
        let payloads = table + 4 * n;
        for i in 0..n {
            let field = table + 4 * i;
            let target = payloads + 20 * i;
            out.write_i32::<BigEndian>((target - field) as i32).unwrap();
        }
        for (index, floats) in &self.first {
            out.write_i32::<BigEndian>(*index).unwrap();
            for f in floats {
                out.write_f32::<BigEndian>(*f).unwrap();
            }
        }
        out.resize(out.len() + self.first_padding, 0xEE);

        let table = out.len();
        out.resize(table + 4 * self.second.len(), 0);
        for (i, spec) in self.second.iter().enumerate() {
            let field = table + 4 * i;
            let target = out.len();
            out[field..field + 4].copy_from_slice(&((target - field) as i32).to_be_bytes());
            write_second_instance(&mut out, spec);
        }
        out
    }
}

/// Appends one second section payload with its file name stored right after it.
pub fn write_second_instance(out: &mut Vec<u8>, spec: &SecondSpec) {
    for f in spec.floats {
        out.write_f32::<BigEndian>(f).unwrap();
    }
    out.write_i32::<BigEndian>(spec.flag).unwrap();
    let name_field = out.len();
    out.write_i32::<BigEndian>(0).unwrap();
    for v in spec.trailing {
        out.write_i32::<BigEndian>(v).unwrap();
    }
    if spec.flag != 0 {
        out.write_u32::<BigEndian>(spec.ints.len() as u32).unwrap();
        for v in &spec.ints {
            out.write_i32::<BigEndian>(*v).unwrap();
        }
    }
    let name_pos = out.len();
    out.extend_from_slice(spec.name.as_bytes());
    out.push(0);
    out[name_field..name_field + 4].copy_from_slice(&((name_pos - name_field) as i32).to_be_bytes());
}
