//! Internal validation helpers shared by the matting and pipeline modules.

use crate::error::MatteError;

/// Validates that an image has non-zero dimensions.
pub fn validate_non_empty_image(width: u32, height: u32) -> Result<(), MatteError> {
    if width == 0 || height == 0 {
        Err(MatteError::EmptyImage { width, height })
    } else {
        Ok(())
    }
}

/// Validates that a raw interleaved buffer holds exactly
/// `width * height * channels` samples, returning that expected length.
pub fn validate_buffer_len(
    len: usize,
    width: u32,
    height: u32,
    channels: usize,
) -> Result<usize, MatteError> {
    let expected = width as usize * height as usize * channels;
    if len == expected {
        Ok(expected)
    } else {
        Err(MatteError::BufferSizeMismatch {
            expected,
            actual: len,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_non_empty_image() {
        assert!(validate_non_empty_image(100, 100).is_ok());
        assert!(validate_non_empty_image(1, 1).is_ok());
        assert!(validate_non_empty_image(0, 100).is_err());
        assert!(validate_non_empty_image(100, 0).is_err());
        assert!(validate_non_empty_image(0, 0).is_err());
    }

    #[test]
    fn test_validate_buffer_len() {
        assert_eq!(validate_buffer_len(16, 2, 2, 4).unwrap(), 16);
        assert_eq!(validate_buffer_len(0, 0, 5, 4).unwrap(), 0);
        assert!(validate_buffer_len(15, 2, 2, 4).is_err());
        assert!(validate_buffer_len(17, 2, 2, 4).is_err());
    }
}
