use std::{fs::File, path::Path};

use memmap2::{Mmap, MmapOptions};

use crate::Result;

/// Opens a memory mapped file for reading.
pub fn map_file<P: AsRef<Path>>(path: P) -> Result<Mmap> {
    let file = File::open(path)?;
    let map = unsafe { MmapOptions::new().map(&file) }?;
    Ok(map)
}
