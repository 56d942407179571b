//! Scan volumes for the slice viewer.
//!
//! This module provides functionality for:
//! - Decoding NIfTI-1 volumes (`.nii` and `.nii.gz`) with 16-bit voxels
//! - Windowing voxels into 8-bit grayscale
//! - Encoding slices as base64 PNGs for display
//!
//! # Architecture
//!
//! Decoding runs on the client through the WASM bindings. All operations are
//! synchronous and single-threaded.
//!
//! # Examples
//!
//! ```ignore
//! use explorer_core::volume::{build_image_data, decode_nifti};
//!
//! let bytes = std::fs::read("scan.nii.gz").unwrap();
//! let volume = decode_nifti(&bytes).unwrap();
//! let data = build_image_data(&volume).unwrap();
//! println!("{} slices", data.slices.len());
//! ```

mod nifti;
mod slices;
mod types;

pub use nifti::{decode_nifti, is_gzip, parse_header, scale_to_u8, NIFTI1_HEADER_SIZE};
pub use slices::{build_image_data, encode_slice_png};
pub use types::{Endianness, ImageData, NiftiHeader, NiftiVolume, VolumeError};
