//! Core types for volume decoding.

use std::collections::BTreeMap;

use serde::Serialize;
use thiserror::Error;

/// Error types for volume decoding and slice encoding.
#[derive(Debug, Error)]
pub enum VolumeError {
    /// Fewer bytes than a NIfTI-1 header.
    #[error("File too short for a NIfTI-1 header: {0} bytes")]
    Truncated(usize),

    /// `sizeof_hdr` is not 348 in either byte order.
    #[error("Not a NIfTI-1 file: header size {0}")]
    InvalidHeader(u32),

    /// Gzip stream could not be inflated.
    #[error("Gzip decompression failed: {0}")]
    Decompress(#[from] std::io::Error),

    /// `dim[0]` outside 1-7, or a spatial dimension of zero.
    #[error("Invalid dimensions: {0:?}")]
    InvalidDimensions(Vec<i16>),

    /// Only 16-bit integer voxels are decoded.
    #[error("Unsupported voxel type: datatype {datatype}, {bitpix} bits per voxel")]
    UnsupportedDatatype { datatype: i16, bitpix: i16 },

    /// Voxel data ends before the volume does.
    #[error("Voxel data truncated: expected {expected} bytes, got {actual}")]
    TruncatedVolume { expected: usize, actual: usize },

    /// PNG encoding of a slice failed.
    #[error("PNG encoding failed: {0}")]
    EncodingFailed(String),
}

/// Byte order of a NIfTI file, detected from `sizeof_hdr`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endianness {
    Little,
    Big,
}

/// The NIfTI-1 header fields needed to read the voxel data.
#[derive(Debug, Clone, PartialEq)]
pub struct NiftiHeader {
    pub endianness: Endianness,
    /// `dim[1..=dim[0]]`
    pub dimensions: Vec<u16>,
    pub datatype: i16,
    pub bitpix: i16,
    /// Byte offset of the first voxel.
    pub vox_offset: usize,
}

impl NiftiHeader {
    /// Size of dimension `axis` (0 = x), 1 if the volume has fewer axes.
    pub fn dim(&self, axis: usize) -> usize {
        self.dimensions.get(axis).map_or(1, |&d| d as usize)
    }
}

/// A decoded volume with voxels scaled to 8-bit grayscale.
#[derive(Debug, Clone)]
pub struct NiftiVolume {
    pub header: NiftiHeader,
    /// One byte per voxel, x fastest, then y, then z.
    pub voxels: Vec<u8>,
}

impl NiftiVolume {
    pub fn width(&self) -> u32 {
        self.header.dim(0) as u32
    }

    pub fn height(&self) -> u32 {
        self.header.dim(1) as u32
    }

    /// Number of axial slices.
    pub fn depth(&self) -> u32 {
        self.header.dim(2) as u32
    }

    /// Grayscale pixels of slice `z`, or `None` past the last slice.
    pub fn slice(&self, z: u32) -> Option<&[u8]> {
        let len = self.width() as usize * self.height() as usize;
        let start = z as usize * len;
        self.voxels.get(start..start + len)
    }
}

/// Slices of a volume as base64 PNGs, ready for the viewer.
///
/// `metadata` holds `{"image": {"dims": "[x, y, z]"}}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageData {
    pub metadata: BTreeMap<String, BTreeMap<String, String>>,
    pub slices: Vec<String>,
}
