use binrw::binrw;

/// A raw texture image. The pixel data length is whatever the file declares;
/// it is transported as-is and never validated against width/height/format.
#[binrw]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Texture {
    pub width: u16,
    pub height: u16,
    pub format: u32,
    pub unk: u32,
    #[bw(try_calc = image_data.len().try_into())]
    pub data_size: u32,
    #[br(count = data_size)]
    pub image_data: Vec<u8>,
}

/// Sampling state for one texture.
#[binrw]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TextureAttributes {
    pub index: u16,
    pub tiling_mode: u16,
    pub unk1: u16,
    pub unk2: f32,
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use binrw::{BinReaderExt, BinWriterExt};

    use super::*;

    #[test]
    fn texture_data_length_is_declared_not_computed() {
        // 2x2 RGBA would be 16 bytes, but the declared size wins.
        let mut data = Vec::new();
        data.extend_from_slice(&2u16.to_be_bytes());
        data.extend_from_slice(&2u16.to_be_bytes());
        data.extend_from_slice(&6u32.to_be_bytes());
        data.extend_from_slice(&0u32.to_be_bytes());
        data.extend_from_slice(&3u32.to_be_bytes());
        data.extend_from_slice(&[0xAA, 0xBB, 0xCC]);

        let tex: Texture = Cursor::new(&data).read_be().unwrap();
        assert_eq!(tex.width, 2);
        assert_eq!(tex.height, 2);
        assert_eq!(tex.format, 6);
        assert_eq!(tex.image_data, vec![0xAA, 0xBB, 0xCC]);

        let mut out = Cursor::new(Vec::new());
        out.write_be(&tex).unwrap();
        assert_eq!(out.into_inner(), data);
    }
}
