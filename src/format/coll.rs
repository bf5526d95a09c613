use binrw::binrw;

use crate::format::{Vector3f, Vector3i};

/// Broad-phase plane used by the engine's collision tests.
#[binrw]
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Plane {
    pub position: Vector3f,
    pub diameter: f32,
}

#[binrw]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct BaseRoomInfo {
    pub unk1: u32,
}

/// One collision triangle. Whether the indices point into the main vertex
/// table or a separate one is unconfirmed, so they are carried raw without
/// cross-validation.
#[binrw]
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct BaseCollTriInfo {
    pub map_code: u32,
    pub indices: Vector3i,
    pub unk2: u16,
    pub unk3: u16,
    pub unk4: u16,
    pub unk5: u16,
    pub plane: Plane,
}

/// The collision chunk payload: room infos then triangles, each sequence
/// count-prefixed.
#[binrw]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CollTriInfo {
    #[bw(try_calc = room_info.len().try_into())]
    pub room_count: u32,
    #[br(count = room_count)]
    pub room_info: Vec<BaseRoomInfo>,
    #[bw(try_calc = coll_info.len().try_into())]
    pub tri_count: u32,
    #[br(count = tri_count)]
    pub coll_info: Vec<BaseCollTriInfo>,
}
