//! Material subsystem: material records, keyed colour/parameter animation,
//! lighting and pixel-engine state, and the TEV combiner environment.
//!
//! Record names follow the engine's own naming where it is known; fields with
//! unconfirmed semantics are numbered `unk*` and carried verbatim.

use binrw::binrw;

use crate::format::{Colour, ShortColour, Vector3f};

/// Material flag: the record carries the PVW parameter block.
pub const MATERIAL_USE_PVW: u32 = 0x01;

/// A single keyframe sample with an 8-bit index.
#[binrw]
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct KeyInfoU8 {
    pub unk1: u8,
    pub unk2: f32,
    pub unk3: f32,
}

/// A single keyframe sample with a float time.
#[binrw]
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct KeyInfoF32 {
    pub unk1: f32,
    pub unk2: f32,
    pub unk3: f32,
}

/// A single keyframe sample with a 16-bit signed value.
#[binrw]
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct KeyInfoS10 {
    pub unk1: i16,
    pub unk2: f32,
    pub unk3: f32,
}

#[binrw]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PciUnk1 {
    pub unk1: i32,
    pub unk2: KeyInfoU8,
    pub unk3: KeyInfoU8,
    pub unk4: KeyInfoU8,
}

#[binrw]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PciUnk2 {
    pub unk1: i32,
    pub unk2: KeyInfoU8,
}

/// Polygon colour plus two tracks of animated parameters.
#[binrw]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PolygonColourInfo {
    pub diffuse_colour: Colour,
    pub unk2: i32,
    pub unk3: f32,
    #[bw(try_calc = unk4.len().try_into())]
    pub unk4_count: u32,
    #[br(count = unk4_count)]
    pub unk4: Vec<PciUnk1>,
    #[bw(try_calc = unk5.len().try_into())]
    pub unk5_count: u32,
    #[br(count = unk5_count)]
    pub unk5: Vec<PciUnk2>,
}

#[binrw]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LightingInfo {
    pub unk1: u32,
    pub unk2: f32,
}

/// Pixel-engine (blend/z) parameters.
#[binrw]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PeInfo {
    pub unk1: i32,
    pub unk2: i32,
    pub unk3: i32,
    pub unk4: i32,
}

#[binrw]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TexGenData {
    pub unk1: u8,
    pub unk2: u8,
    pub unk3: u8,
    pub unk4: u8,
}

#[binrw]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TxdUnk1 {
    pub unk1: i32,
    pub unk2: KeyInfoF32,
    pub unk3: KeyInfoF32,
    pub unk4: KeyInfoF32,
}

#[binrw]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TextureData {
    pub unk1: i32,
    pub unk2: i16,
    pub unk3: i16,
    pub unk4: u8,
    pub unk5: u8,
    pub unk6: u8,
    pub unk7: u8,
    pub unk8: u32,
    pub unk9: i32,
    pub unk10: f32,
    pub unk11: f32,
    pub unk12: f32,
    pub unk13: f32,
    pub unk14: f32,
    pub unk15: f32,
    pub unk16: f32,
    pub unk17: f32,
    #[bw(try_calc = unk18.len().try_into())]
    pub unk18_count: u32,
    #[br(count = unk18_count)]
    pub unk18: Vec<TxdUnk1>,
    #[bw(try_calc = unk19.len().try_into())]
    pub unk19_count: u32,
    #[br(count = unk19_count)]
    pub unk19: Vec<TxdUnk1>,
    #[bw(try_calc = unk20.len().try_into())]
    pub unk20_count: u32,
    #[br(count = unk20_count)]
    pub unk20: Vec<TxdUnk1>,
}

#[binrw]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TextureInfo {
    pub unk1: i32,
    pub unk2: Vector3f,
    #[bw(try_calc = tex_gens.len().try_into())]
    pub tex_gen_count: u32,
    #[br(count = tex_gen_count)]
    pub tex_gens: Vec<TexGenData>,
    #[bw(try_calc = tex_data.len().try_into())]
    pub tex_data_count: u32,
    #[br(count = tex_data_count)]
    pub tex_data: Vec<TextureData>,
}

/// Parameter block present when [`MATERIAL_USE_PVW`] is set on the material.
#[binrw]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PvwParams {
    pub unk: u32,
    pub colour_info: PolygonColourInfo,
    pub lighting_info: LightingInfo,
    pub pe_info: PeInfo,
    pub tex_info: TextureInfo,
}

#[binrw]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Material {
    pub flags: u32,
    pub unk1: u32,
    pub colour: Colour,
    #[br(if(flags & MATERIAL_USE_PVW != 0))]
    pub pvw: Option<PvwParams>,
}

#[binrw]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TcrUnk1 {
    pub unk1: i32,
    pub unk2: KeyInfoS10,
    pub unk3: KeyInfoS10,
    pub unk4: KeyInfoS10,
}

#[binrw]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TcrUnk2 {
    pub unk1: i32,
    pub unk2: KeyInfoS10,
}

/// TEV colour register: a base value plus two animated key tracks.
#[binrw]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TevColReg {
    pub reg: ShortColour,
    pub unk2: i32,
    pub unk3: f32,
    #[bw(try_calc = unk4.len().try_into())]
    pub unk4_count: u32,
    #[br(count = unk4_count)]
    pub unk4: Vec<TcrUnk1>,
    #[bw(try_calc = unk5.len().try_into())]
    pub unk5_count: u32,
    #[br(count = unk5_count)]
    pub unk5: Vec<TcrUnk2>,
}

#[binrw]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct PvwCombiner {
    pub unk1: u8,
    pub unk2: u8,
    pub unk3: u8,
    pub unk4: u8,
    pub unk5: u8,
    pub unk6: u8,
    pub unk7: u8,
    pub unk8: u8,
    pub unk9: u8,
    pub unk10: u8,
    pub unk11: u8,
    pub unk12: u8,
}

#[binrw]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TevStage {
    pub unk1: u8,
    pub unk2: u8,
    pub unk3: u8,
    pub unk4: u8,
    pub unk5: u8,
    pub unk6: u8,
    pub unk7: PvwCombiner,
    pub unk8: PvwCombiner,
}

/// Full TEV environment: three colour registers (probably RGB), four constant
/// colours and the combiner stage list.
#[binrw]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TevInfo {
    pub unk1: TevColReg,
    pub unk2: TevColReg,
    pub unk3: TevColReg,
    pub unk4: Colour,
    pub unk5: Colour,
    pub unk6: Colour,
    pub unk7: Colour,
    #[bw(try_calc = stages.len().try_into())]
    pub stage_count: u32,
    #[br(count = stage_count)]
    pub stages: Vec<TevStage>,
}

/// The materials chunk payload: materials followed by TEV environments, each
/// sequence count-prefixed.
#[binrw]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MaterialContainer {
    #[bw(try_calc = materials.len().try_into())]
    pub material_count: u32,
    #[br(count = material_count)]
    pub materials: Vec<Material>,
    #[bw(try_calc = tex_environments.len().try_into())]
    pub tev_count: u32,
    #[br(count = tev_count)]
    pub tex_environments: Vec<TevInfo>,
}
