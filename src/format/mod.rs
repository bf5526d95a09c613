pub mod chunk;
pub mod coll;
pub mod joint;
pub mod mat;
pub mod mesh;
pub mod model;
pub mod txtr;

use std::string::FromUtf8Error;

use binrw::binrw;

#[binrw]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Vector2i {
    pub x: u32,
    pub y: u32,
}

#[binrw]
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vector2f {
    pub x: f32,
    pub y: f32,
}

#[binrw]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Vector3i {
    pub x: u32,
    pub y: u32,
    pub z: u32,
}

#[binrw]
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vector3f {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// 8-bit RGBA colour.
#[binrw]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// 16-bit RGBA colour, used by the TEV colour registers.
#[binrw]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ShortColour {
    pub r: u16,
    pub g: u16,
    pub b: u16,
    pub a: u16,
}

/// Length-prefixed string as stored in the joint name table.
#[binrw]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FixedName {
    #[bw(try_calc = text.len().try_into())]
    pub size: u32,
    #[br(count = size)]
    pub text: Vec<u8>,
}

impl FixedName {
    pub fn from_string(name: &str) -> Self {
        #[allow(clippy::needless_update)]
        Self { text: name.as_bytes().to_vec(), ..Default::default() }
    }

    pub fn into_string(self) -> Result<String, FromUtf8Error> { String::from_utf8(self.text) }
}
