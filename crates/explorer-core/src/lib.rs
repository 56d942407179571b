//! Explorer Core - helpers for the cohort image explorer
//!
//! This crate holds the logic behind the image review frontend:
//! quarter-turn rotation of the viewer, the Basic Authentication header for
//! the image server, picking the approved images out of the review grid, and
//! decoding NIfTI scan volumes into displayable slices.
//!
//! Everything here is pure and synchronous. The `explorer-wasm` crate exposes
//! it to JavaScript.

pub mod approval;
pub mod auth;
pub mod rotation;
pub mod volume;

pub use approval::{approved_file_names, get_approved_images, ImageRecord, SelectionFlag};
pub use auth::{get_auth_header, parse_basic_auth, AuthError, AuthHeader, Credentials};
pub use rotation::{
    rotate_class_left, rotate_class_right, rotate_left, rotate_right, Rotation,
    RotationParseError,
};
pub use volume::{build_image_data, decode_nifti, ImageData, NiftiVolume, VolumeError};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reexports() {
        assert_eq!(rotate_right("0"), "90");
        assert_eq!(get_auth_header("user", "pass").value(), "Basic dXNlcjpwYXNz");
        assert!(get_approved_images(&[ImageRecord::new("a.png", "false")]).is_empty());
    }
}
