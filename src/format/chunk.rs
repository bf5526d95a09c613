use strum::{Display, EnumIter, FromRepr};

/// Display list command payloads are aligned to a GPU DMA boundary within
/// the stream; the padding is zero-filled on write. The boundary is taken
/// from the known format template and should be re-confirmed against any
/// sample that fails to round trip.
pub const DISPLAY_LIST_ALIGN: u64 = 0x20;

/// Known chunk kinds of the supported format revision, by opcode.
///
/// The opcode is a diagnostic aid only: the container decodes chunks in a
/// fixed order rather than dispatching on opcodes found in the stream.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Display, EnumIter, FromRepr)]
#[repr(u32)]
pub enum ChunkKind {
    #[strum(serialize = "Header")]
    Header = 0x00,
    #[strum(serialize = "Vertex Positions")]
    VertexPosition = 0x10,
    #[strum(serialize = "Vertex Normals")]
    VertexNormal = 0x11,
    #[strum(serialize = "Vertex Normal/Binormal/Tangent Descriptors")]
    VertexNbt = 0x12,
    #[strum(serialize = "Vertex Colours")]
    VertexColour = 0x13,
    #[strum(serialize = "Texture Coordinate 0")]
    TexCoord0 = 0x18,
    #[strum(serialize = "Texture Coordinate 1")]
    TexCoord1 = 0x19,
    #[strum(serialize = "Texture Coordinate 2")]
    TexCoord2 = 0x1A,
    #[strum(serialize = "Texture Coordinate 3")]
    TexCoord3 = 0x1B,
    #[strum(serialize = "Texture Coordinate 4")]
    TexCoord4 = 0x1C,
    #[strum(serialize = "Texture Coordinate 5")]
    TexCoord5 = 0x1D,
    #[strum(serialize = "Texture Coordinate 6")]
    TexCoord6 = 0x1E,
    #[strum(serialize = "Texture Coordinate 7")]
    TexCoord7 = 0x1F,
    #[strum(serialize = "Textures")]
    Texture = 0x20,
    #[strum(serialize = "Texture Attributes")]
    TextureAttribute = 0x22,
    #[strum(serialize = "Materials")]
    Material = 0x30,
    #[strum(serialize = "Vertex Matrix")]
    VertexMatrix = 0x40,
    #[strum(serialize = "Matrix Envelope")]
    MatrixEnvelope = 0x41,
    #[strum(serialize = "Mesh")]
    Mesh = 0x50,
    #[strum(serialize = "Joints")]
    Joint = 0x60,
    #[strum(serialize = "Joint Names")]
    JointName = 0x61,
    #[strum(serialize = "Collision Prism")]
    CollisionPrism = 0x100,
    #[strum(serialize = "End Of File")]
    EndOfFile = 0xFFFF,
}

impl ChunkKind {
    /// Diagnostic name lookup; unknown opcodes have no name.
    pub fn from_opcode(opcode: u32) -> Option<Self> { Self::from_repr(opcode) }
}
