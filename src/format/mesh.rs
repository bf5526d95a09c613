use binrw::binrw;

/// The display list flag word, split into its four byte fields. Only the
/// cull mode byte has confirmed meaning to the consumer; the other three are
/// opaque and carried bit-for-bit.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct DisplayListFlags {
    pub unk1: u8,
    pub unk2: u8,
    pub unk3: u8,
    pub cull_mode: u8,
}

impl DisplayListFlags {
    #[inline]
    pub fn from_u32(value: u32) -> Self {
        Self {
            unk1: (value >> 24) as u8,
            unk2: (value >> 16) as u8,
            unk3: (value >> 8) as u8,
            cull_mode: value as u8,
        }
    }

    #[inline]
    pub fn as_u32(&self) -> u32 {
        ((self.unk1 as u32) << 24)
            | ((self.unk2 as u32) << 16)
            | ((self.unk3 as u32) << 8)
            | (self.cull_mode as u32)
    }
}

/// An opaque GPU command buffer. The command bytes are never interpreted;
/// their length is declared by the file and they start on a DMA-aligned
/// offset (zero padding in between).
#[binrw]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DisplayList {
    #[br(map = DisplayListFlags::from_u32)]
    #[bw(map = |f| f.as_u32())]
    pub flags: DisplayListFlags,
    pub unk1: u32,
    #[bw(try_calc = data.len().try_into())]
    pub cmd_size: u32,
    #[brw(align_before = 0x20)]
    #[br(count = cmd_size)]
    pub data: Vec<u8>,
}

#[binrw]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MeshPacket {
    #[bw(try_calc = indices.len().try_into())]
    pub index_count: u32,
    #[br(count = index_count)]
    pub indices: Vec<u16>,
    #[bw(try_calc = display_lists.len().try_into())]
    pub display_list_count: u32,
    #[br(count = display_list_count)]
    pub display_lists: Vec<DisplayList>,
}

/// Drawable geometry bound to one joint. The vertex descriptor is a bitmask
/// naming which vertex attribute arrays the display lists reference.
#[binrw]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Mesh {
    pub bone_index: u32,
    pub vtx_descriptor: u32,
    #[bw(try_calc = packets.len().try_into())]
    pub packet_count: u32,
    #[br(count = packet_count)]
    pub packets: Vec<MeshPacket>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_word_decomposes_and_recomposes() {
        let flags = DisplayListFlags::from_u32(0xAABBCC02);
        assert_eq!(flags.unk1, 0xAA);
        assert_eq!(flags.unk2, 0xBB);
        assert_eq!(flags.unk3, 0xCC);
        assert_eq!(flags.cull_mode, 0x02);
        assert_eq!(flags.as_u32(), 0xAABBCC02);
    }
}
