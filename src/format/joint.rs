use binrw::binrw;

use crate::format::Vector3f;

/// Parent index marking a joint with no parent.
pub const NO_PARENT: i32 = -1;

/// One entry of the vertex-to-matrix index table.
#[binrw]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct VtxMatrix {
    pub index: u16,
}

/// Multi-bone skinning record: parallel joint-matrix indices and weights.
/// Equal length and weights summing to 1.0 are the consumer's concern, not
/// enforced here.
#[binrw]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Envelope {
    #[bw(try_calc = indices.len().try_into())]
    pub index_count: u32,
    #[br(count = index_count)]
    pub indices: Vec<u16>,
    #[bw(try_calc = weights.len().try_into())]
    pub weight_count: u32,
    #[br(count = weight_count)]
    pub weights: Vec<f32>,
}

/// Binds a joint to drawable geometry by material and mesh index.
#[binrw]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct JointMatPoly {
    pub mat_idx: i16,
    pub mesh_idx: i16,
}

#[binrw]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Joint {
    pub parent_idx: i32,
    pub flags: u32,
    pub bounds_min: Vector3f,
    pub bounds_max: Vector3f,
    pub volume_radius: f32,
    pub scale: Vector3f,
    pub rotation: Vector3f,
    pub position: Vector3f,
    #[bw(try_calc = mat_polys.len().try_into())]
    pub mat_poly_count: u32,
    #[br(count = mat_poly_count)]
    pub mat_polys: Vec<JointMatPoly>,
}
