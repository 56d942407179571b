//! NIfTI-1 volume decoding.
//!
//! Reads `.nii` and gzipped `.nii.gz` files holding 16-bit integer voxels and
//! windows them into 8-bit grayscale between the volume's own minimum and
//! maximum. Both byte orders are supported; the order is detected from the
//! `sizeof_hdr` field.
//!
//! Only the first three axes are read. For a 4D series that is the first
//! time point.

use std::borrow::Cow;
use std::io::Read;

use flate2::read::GzDecoder;

use super::types::{Endianness, NiftiHeader, NiftiVolume, VolumeError};

/// Size of a NIfTI-1 header in bytes.
pub const NIFTI1_HEADER_SIZE: usize = 348;

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

// Header field offsets
const DIM_OFFSET: usize = 40;
const DATATYPE_OFFSET: usize = 70;
const BITPIX_OFFSET: usize = 72;
const VOX_OFFSET_OFFSET: usize = 108;

/// NIfTI datatype codes for the supported voxel types.
const DT_INT16: i16 = 4;
const DT_UINT16: i16 = 512;

/// Decode a NIfTI-1 file, gzipped or not.
///
/// # Example
///
/// ```ignore
/// use explorer_core::volume::decode_nifti;
///
/// let bytes = std::fs::read("IXI002-Guys-0828-T1.nii.gz").unwrap();
/// let volume = decode_nifti(&bytes).unwrap();
/// println!("{}x{}x{}", volume.width(), volume.height(), volume.depth());
/// ```
pub fn decode_nifti(bytes: &[u8]) -> Result<NiftiVolume, VolumeError> {
    let data: Cow<[u8]> = if is_gzip(bytes) {
        Cow::Owned(unpack_gz(bytes)?)
    } else {
        Cow::Borrowed(bytes)
    };

    let header = parse_header(&data)?;
    let voxels = decode_voxels(&data, &header)?;
    Ok(NiftiVolume { header, voxels })
}

/// Check for the gzip magic bytes.
pub fn is_gzip(bytes: &[u8]) -> bool {
    bytes.starts_with(&GZIP_MAGIC)
}

fn unpack_gz(bytes: &[u8]) -> Result<Vec<u8>, VolumeError> {
    let mut unpacked = Vec::new();
    GzDecoder::new(bytes).read_to_end(&mut unpacked)?;
    Ok(unpacked)
}

/// Reads fixed-offset fields in the file's byte order.
///
/// Callers guarantee the buffer holds a full header.
struct HeaderReader<'a> {
    bytes: &'a [u8],
    endianness: Endianness,
}

impl HeaderReader<'_> {
    fn i16(&self, offset: usize) -> i16 {
        let raw = [self.bytes[offset], self.bytes[offset + 1]];
        match self.endianness {
            Endianness::Little => i16::from_le_bytes(raw),
            Endianness::Big => i16::from_be_bytes(raw),
        }
    }

    fn f32(&self, offset: usize) -> f32 {
        let raw = [
            self.bytes[offset],
            self.bytes[offset + 1],
            self.bytes[offset + 2],
            self.bytes[offset + 3],
        ];
        match self.endianness {
            Endianness::Little => f32::from_le_bytes(raw),
            Endianness::Big => f32::from_be_bytes(raw),
        }
    }
}

/// Parse the header of an uncompressed NIfTI-1 file.
pub fn parse_header(bytes: &[u8]) -> Result<NiftiHeader, VolumeError> {
    if bytes.len() < NIFTI1_HEADER_SIZE {
        return Err(VolumeError::Truncated(bytes.len()));
    }

    let sizeof_hdr = [bytes[0], bytes[1], bytes[2], bytes[3]];
    let endianness = if u32::from_le_bytes(sizeof_hdr) as usize == NIFTI1_HEADER_SIZE {
        Endianness::Little
    } else if u32::from_be_bytes(sizeof_hdr) as usize == NIFTI1_HEADER_SIZE {
        Endianness::Big
    } else {
        return Err(VolumeError::InvalidHeader(u32::from_le_bytes(sizeof_hdr)));
    };

    let reader = HeaderReader { bytes, endianness };

    let raw_dims: Vec<i16> = (0..8).map(|i| reader.i16(DIM_OFFSET + 2 * i)).collect();
    let ndim = raw_dims[0];
    if !(1..=7).contains(&ndim) || raw_dims[1..=ndim as usize].iter().any(|&d| d < 1) {
        return Err(VolumeError::InvalidDimensions(raw_dims));
    }
    let dimensions = raw_dims[1..=ndim as usize]
        .iter()
        .map(|&d| d as u16)
        .collect();

    // A NaN or negative offset falls back to the end of the header
    let vox_offset = reader.f32(VOX_OFFSET_OFFSET).max(NIFTI1_HEADER_SIZE as f32) as usize;

    Ok(NiftiHeader {
        endianness,
        dimensions,
        datatype: reader.i16(DATATYPE_OFFSET),
        bitpix: reader.i16(BITPIX_OFFSET),
        vox_offset,
    })
}

fn decode_voxels(data: &[u8], header: &NiftiHeader) -> Result<Vec<u8>, VolumeError> {
    let signed = match (header.datatype, header.bitpix) {
        (DT_INT16, 16) => true,
        (DT_UINT16, 16) => false,
        (datatype, bitpix) => {
            return Err(VolumeError::UnsupportedDatatype { datatype, bitpix });
        }
    };

    let expected = header
        .dim(0)
        .checked_mul(header.dim(1))
        .and_then(|n| n.checked_mul(header.dim(2)))
        .and_then(|n| n.checked_mul(2))
        .ok_or_else(|| {
            VolumeError::InvalidDimensions(header.dimensions.iter().map(|&d| d as i16).collect())
        })?;

    let raw = data
        .get(header.vox_offset..)
        .and_then(|rest| rest.get(..expected))
        .ok_or(VolumeError::TruncatedVolume {
            expected,
            actual: data.len().saturating_sub(header.vox_offset),
        })?;

    let values: Vec<i32> = raw
        .chunks_exact(2)
        .map(|pair| {
            let pair = [pair[0], pair[1]];
            match (header.endianness, signed) {
                (Endianness::Little, true) => i32::from(i16::from_le_bytes(pair)),
                (Endianness::Little, false) => i32::from(u16::from_le_bytes(pair)),
                (Endianness::Big, true) => i32::from(i16::from_be_bytes(pair)),
                (Endianness::Big, false) => i32::from(u16::from_be_bytes(pair)),
            }
        })
        .collect();

    Ok(scale_to_u8(&values))
}

/// Window values linearly so the minimum maps to 0 and the maximum to 255.
///
/// A flat volume maps to all zeros.
pub fn scale_to_u8(values: &[i32]) -> Vec<u8> {
    let (min, max) = values
        .iter()
        .fold((i32::MAX, i32::MIN), |(lo, hi), &v| (lo.min(v), hi.max(v)));

    if max <= min {
        return vec![0; values.len()];
    }

    let range = (max - min) as f32;
    values
        .iter()
        .map(|&v| ((v - min) as f32 / range * 255.0).round() as u8)
        .collect()
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;

    /// Build a little-endian int16 NIfTI-1 file with the voxels right after
    /// the header and 4 extension bytes.
    pub(crate) fn nifti_bytes(dims: &[i16], voxels: &[i16]) -> Vec<u8> {
        let mut bytes = vec![0u8; 352];
        bytes[0..4].copy_from_slice(&348i32.to_le_bytes());
        bytes[40..42].copy_from_slice(&(dims.len() as i16).to_le_bytes());
        for (i, d) in dims.iter().enumerate() {
            bytes[42 + 2 * i..44 + 2 * i].copy_from_slice(&d.to_le_bytes());
        }
        bytes[70..72].copy_from_slice(&DT_INT16.to_le_bytes());
        bytes[72..74].copy_from_slice(&16i16.to_le_bytes());
        bytes[108..112].copy_from_slice(&352f32.to_le_bytes());
        for v in voxels {
            bytes.extend_from_slice(&v.to_le_bytes());
        }
        bytes
    }

    fn gzip(bytes: &[u8]) -> Vec<u8> {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(bytes).unwrap();
        encoder.finish().unwrap()
    }

    #[test]
    fn test_parse_header() {
        let bytes = nifti_bytes(&[4, 3, 2], &[0; 24]);
        let header = parse_header(&bytes).unwrap();
        assert_eq!(header.endianness, Endianness::Little);
        assert_eq!(header.dimensions, vec![4, 3, 2]);
        assert_eq!(header.datatype, DT_INT16);
        assert_eq!(header.bitpix, 16);
        assert_eq!(header.vox_offset, 352);
    }

    #[test]
    fn test_decode_scales_to_full_range() {
        let bytes = nifti_bytes(&[2, 2, 1], &[100, 200, 300, 500]);
        let volume = decode_nifti(&bytes).unwrap();
        assert_eq!(volume.voxels, vec![0, 64, 128, 255]);
    }

    #[test]
    fn test_decode_signed_values() {
        let bytes = nifti_bytes(&[3, 1, 1], &[-1000, 0, 1000]);
        let volume = decode_nifti(&bytes).unwrap();
        assert_eq!(volume.voxels, vec![0, 128, 255]);
    }

    #[test]
    fn test_flat_volume_is_black() {
        let bytes = nifti_bytes(&[2, 2, 2], &[7; 8]);
        let volume = decode_nifti(&bytes).unwrap();
        assert_eq!(volume.voxels, vec![0; 8]);
    }

    #[test]
    fn test_decode_gzipped() {
        let raw = nifti_bytes(&[2, 1, 2], &[0, 10, 20, 30]);
        let packed = gzip(&raw);
        assert!(is_gzip(&packed));
        assert!(!is_gzip(&raw));

        let volume = decode_nifti(&packed).unwrap();
        assert_eq!(volume.voxels, decode_nifti(&raw).unwrap().voxels);
    }

    #[test]
    fn test_decode_big_endian() {
        let mut bytes = vec![0u8; 352];
        bytes[0..4].copy_from_slice(&348i32.to_be_bytes());
        bytes[40..42].copy_from_slice(&3i16.to_be_bytes());
        bytes[42..44].copy_from_slice(&2i16.to_be_bytes());
        bytes[44..46].copy_from_slice(&1i16.to_be_bytes());
        bytes[46..48].copy_from_slice(&1i16.to_be_bytes());
        bytes[70..72].copy_from_slice(&DT_UINT16.to_be_bytes());
        bytes[72..74].copy_from_slice(&16i16.to_be_bytes());
        bytes[108..112].copy_from_slice(&352f32.to_be_bytes());
        bytes.extend_from_slice(&0u16.to_be_bytes());
        bytes.extend_from_slice(&60000u16.to_be_bytes());

        let volume = decode_nifti(&bytes).unwrap();
        assert_eq!(volume.header.endianness, Endianness::Big);
        assert_eq!(volume.voxels, vec![0, 255]);
    }

    #[test]
    fn test_trailing_bytes_are_ignored() {
        let mut bytes = nifti_bytes(&[2, 1, 1], &[0, 100]);
        bytes.extend_from_slice(&[0xAB; 6]);
        let volume = decode_nifti(&bytes).unwrap();
        assert_eq!(volume.voxels, vec![0, 255]);
    }

    #[test]
    fn test_four_dimensional_reads_first_volume() {
        let bytes = nifti_bytes(&[2, 1, 1, 2], &[0, 50, 999, 999]);
        let volume = decode_nifti(&bytes).unwrap();
        assert_eq!(volume.voxels, vec![0, 255]);
    }

    #[test]
    fn test_too_short() {
        let result = decode_nifti(&[0u8; 100]);
        assert!(matches!(result, Err(VolumeError::Truncated(100))));
    }

    #[test]
    fn test_not_nifti() {
        let result = decode_nifti(&[0u8; 400]);
        assert!(matches!(result, Err(VolumeError::InvalidHeader(0))));
    }

    #[test]
    fn test_corrupt_gzip() {
        let result = decode_nifti(&[0x1f, 0x8b, 0x00, 0x01, 0x02]);
        assert!(matches!(result, Err(VolumeError::Decompress(_))));
    }

    #[test]
    fn test_invalid_dimensions() {
        let bytes = nifti_bytes(&[2, 0, 1], &[]);
        let result = decode_nifti(&bytes);
        assert!(matches!(result, Err(VolumeError::InvalidDimensions(_))));

        let mut bytes = nifti_bytes(&[1], &[0]);
        bytes[40..42].copy_from_slice(&8i16.to_le_bytes());
        assert!(matches!(
            decode_nifti(&bytes),
            Err(VolumeError::InvalidDimensions(_))
        ));
    }

    #[test]
    fn test_unsupported_datatype() {
        let mut bytes = nifti_bytes(&[1, 1, 1], &[0]);
        // float32
        bytes[70..72].copy_from_slice(&16i16.to_le_bytes());
        bytes[72..74].copy_from_slice(&32i16.to_le_bytes());
        let result = decode_nifti(&bytes);
        assert!(matches!(
            result,
            Err(VolumeError::UnsupportedDatatype {
                datatype: 16,
                bitpix: 32
            })
        ));
    }

    #[test]
    fn test_truncated_volume() {
        let bytes = nifti_bytes(&[2, 2, 2], &[1, 2, 3]);
        let result = decode_nifti(&bytes);
        assert!(matches!(
            result,
            Err(VolumeError::TruncatedVolume {
                expected: 16,
                actual: 6
            })
        ));
    }

    #[test]
    fn test_slice_access() {
        let bytes = nifti_bytes(&[2, 1, 2], &[0, 10, 20, 30]);
        let volume = decode_nifti(&bytes).unwrap();
        assert_eq!(volume.width(), 2);
        assert_eq!(volume.height(), 1);
        assert_eq!(volume.depth(), 2);
        assert_eq!(volume.slice(1), Some(&volume.voxels[2..4]));
        assert_eq!(volume.slice(2), None);
    }
}
