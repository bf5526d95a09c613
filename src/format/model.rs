use std::{
    fs,
    io::{Cursor, Read, Seek, Write},
    path::Path,
};

use binrw::{binrw, BinReaderExt, BinWriterExt};

use crate::{
    error::Error,
    format::{
        chunk::ChunkKind,
        coll::CollTriInfo,
        joint::{Envelope, Joint, VtxMatrix, NO_PARENT},
        mat::MaterialContainer,
        mesh::Mesh,
        txtr::{Texture, TextureAttributes},
        Colour, FixedName, Vector2f, Vector3f,
    },
    util::file::map_file,
    Result,
};

/// Header flag: the file carries a vertex NBT chunk.
pub const FLAG_USE_NBT: u32 = 0x01;

#[binrw]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DateStamp {
    pub year: u16,
    pub month: u8,
    pub day: u8,
}

impl Default for DateStamp {
    fn default() -> Self { Self { year: 2021, month: 9, day: 18 } }
}

#[binrw]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Header {
    pub date: DateStamp,
    pub flags: u32,
}

/// Per-vertex normal/binormal/tangent basis, present when [`FLAG_USE_NBT`]
/// is set in the header.
#[binrw]
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Nbt {
    pub normal: Vector3f,
    pub binormal: Vector3f,
    pub tangent: Vector3f,
}

macro_rules! read_chunk {
    ($reader:expr, $ty:ty, $kind:expr) => {{
        let count = $reader.read_be::<u32>()?;
        log::debug!("{}: {} entries", $kind, count);
        let mut items: Vec<$ty> = Vec::new();
        for _ in 0..count {
            items.push($reader.read_be::<$ty>()?);
        }
        items
    }};
}

macro_rules! write_chunk {
    ($writer:expr, $items:expr, $kind:expr) => {{
        log::debug!("{}: {} entries", $kind, $items.len());
        $writer.write_be(&chunk_count($items.len())?).map_err(Error::Encode)?;
        for item in $items.iter() {
            $writer.write_be(item).map_err(Error::Encode)?;
        }
    }};
}

/// Chunk counts are 32-bit on disk; larger collections cannot be encoded.
fn chunk_count(len: usize) -> Result<u32> {
    u32::try_from(len).map_err(|_| Error::CountOverflow(len))
}

/// An entire MOD file in memory.
///
/// Collections are stored in chunk order. Anything after the last recognized
/// chunk lands in `eof_bytes` so a read/write cycle stays byte-exact.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mod {
    pub header: Header,
    pub vertices: Vec<Vector3f>,
    pub vertex_normals: Vec<Vector3f>,
    pub vertex_nbt: Vec<Nbt>,
    pub vertex_colours: Vec<Colour>,
    pub texcoords: [Vec<Vector2f>; 8],
    pub textures: Vec<Texture>,
    pub texture_attributes: Vec<TextureAttributes>,
    pub materials: MaterialContainer,
    pub vtx_matrices: Vec<VtxMatrix>,
    pub envelopes: Vec<Envelope>,
    pub meshes: Vec<Mesh>,
    pub joints: Vec<Joint>,
    pub joint_names: Vec<String>,
    pub coll_tris: CollTriInfo,
    pub eof_bytes: Vec<u8>,
}

impl Mod {
    /// Decodes a complete file from a big-endian stream positioned at
    /// offset 0. Any failure is fatal; no partial model is returned.
    pub fn read<R: Read + Seek>(reader: &mut R) -> Result<Self> {
        let header: Header = reader.read_be()?;
        log::debug!(
            "{}: {:04}-{:02}-{:02}, flags {:#x}",
            ChunkKind::Header,
            header.date.year,
            header.date.month,
            header.date.day,
            header.flags
        );

        let vertices = read_chunk!(reader, Vector3f, ChunkKind::VertexPosition);
        let vertex_normals = read_chunk!(reader, Vector3f, ChunkKind::VertexNormal);
        let vertex_nbt = if header.flags & FLAG_USE_NBT != 0 {
            read_chunk!(reader, Nbt, ChunkKind::VertexNbt)
        } else {
            Vec::new()
        };
        let vertex_colours = read_chunk!(reader, Colour, ChunkKind::VertexColour);

        let mut texcoords: [Vec<Vector2f>; 8] = Default::default();
        for (channel, coords) in texcoords.iter_mut().enumerate() {
            let count = reader.read_be::<u32>()?;
            log::debug!("Texture Coordinate {}: {} entries", channel, count);
            for _ in 0..count {
                coords.push(reader.read_be()?);
            }
        }

        let textures = read_chunk!(reader, Texture, ChunkKind::Texture);
        let texture_attributes =
            read_chunk!(reader, TextureAttributes, ChunkKind::TextureAttribute);

        let materials: MaterialContainer = reader.read_be()?;
        log::debug!(
            "{}: {} materials, {} TEV environments",
            ChunkKind::Material,
            materials.materials.len(),
            materials.tex_environments.len()
        );

        let vtx_matrices = read_chunk!(reader, VtxMatrix, ChunkKind::VertexMatrix);
        let envelopes = read_chunk!(reader, Envelope, ChunkKind::MatrixEnvelope);
        let meshes = read_chunk!(reader, Mesh, ChunkKind::Mesh);

        let joints = read_chunk!(reader, Joint, ChunkKind::Joint);
        validate_joints(&joints)?;

        let names = read_chunk!(reader, FixedName, ChunkKind::JointName);
        let mut joint_names = Vec::with_capacity(names.len());
        for name in names {
            joint_names.push(name.into_string()?);
        }

        let coll_tris: CollTriInfo = reader.read_be()?;
        log::debug!(
            "{}: {} rooms, {} triangles",
            ChunkKind::CollisionPrism,
            coll_tris.room_info.len(),
            coll_tris.coll_info.len()
        );

        let mut eof_bytes = Vec::new();
        reader.read_to_end(&mut eof_bytes)?;
        log::debug!("{}: {} trailing bytes", ChunkKind::EndOfFile, eof_bytes.len());

        Ok(Self {
            header,
            vertices,
            vertex_normals,
            vertex_nbt,
            vertex_colours,
            texcoords,
            textures,
            texture_attributes,
            materials,
            vtx_matrices,
            envelopes,
            meshes,
            joints,
            joint_names,
            coll_tris,
            eof_bytes,
        })
    }

    /// Encodes the model in the same fixed chunk order, counts before
    /// elements, then the preserved tail.
    pub fn write<W: Write + Seek>(&self, writer: &mut W) -> Result<()> {
        writer.write_be(&self.header).map_err(Error::Encode)?;

        write_chunk!(writer, &self.vertices, ChunkKind::VertexPosition);
        write_chunk!(writer, &self.vertex_normals, ChunkKind::VertexNormal);
        if self.header.flags & FLAG_USE_NBT != 0 {
            write_chunk!(writer, &self.vertex_nbt, ChunkKind::VertexNbt);
        }
        write_chunk!(writer, &self.vertex_colours, ChunkKind::VertexColour);

        for (channel, coords) in self.texcoords.iter().enumerate() {
            log::debug!("Texture Coordinate {}: {} entries", channel, coords.len());
            writer.write_be(&chunk_count(coords.len())?).map_err(Error::Encode)?;
            for coord in coords {
                writer.write_be(coord).map_err(Error::Encode)?;
            }
        }

        write_chunk!(writer, &self.textures, ChunkKind::Texture);
        write_chunk!(writer, &self.texture_attributes, ChunkKind::TextureAttribute);
        writer.write_be(&self.materials).map_err(Error::Encode)?;
        write_chunk!(writer, &self.vtx_matrices, ChunkKind::VertexMatrix);
        write_chunk!(writer, &self.envelopes, ChunkKind::MatrixEnvelope);
        write_chunk!(writer, &self.meshes, ChunkKind::Mesh);
        write_chunk!(writer, &self.joints, ChunkKind::Joint);

        log::debug!("{}: {} entries", ChunkKind::JointName, self.joint_names.len());
        writer.write_be(&chunk_count(self.joint_names.len())?).map_err(Error::Encode)?;
        for name in &self.joint_names {
            writer.write_be(&FixedName::from_string(name)).map_err(Error::Encode)?;
        }

        writer.write_be(&self.coll_tris).map_err(Error::Encode)?;
        writer.write_all(&self.eof_bytes)?;
        Ok(())
    }

    /// Reads a file from disk.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let map = map_file(path)?;
        Self::read(&mut Cursor::new(&map[..]))
    }

    /// Encodes the model and writes it to disk in one operation.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut out = Cursor::new(Vec::new());
        self.write(&mut out)?;
        fs::write(path, out.into_inner())?;
        Ok(())
    }

    /// Returns the model to its default-constructed state.
    pub fn reset(&mut self) { *self = Self::default(); }
}

/// Joints must form a forest: a parent is either the sentinel or an earlier
/// joint, never the joint itself or a later one.
fn validate_joints(joints: &[Joint]) -> Result<()> {
    for (idx, joint) in joints.iter().enumerate() {
        let parent = joint.parent_idx;
        if parent == NO_PARENT {
            continue;
        }
        if parent < 0 || parent as usize >= idx {
            return Err(Error::InvalidJointParent { joint: idx, parent });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chunk_counts_are_range_checked() {
        assert_eq!(chunk_count(3).unwrap(), 3);
        assert_eq!(chunk_count(u32::MAX as usize).unwrap(), u32::MAX);
        assert!(matches!(chunk_count(u32::MAX as usize + 1), Err(Error::CountOverflow(_))));
    }
}
