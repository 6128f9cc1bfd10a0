use crate::constants::{DEFAULT_SIZE, VALID_SIZES};

/// Whether the image server renders `size` pixels.
pub fn is_valid_size(size: i64) -> bool {
    VALID_SIZES.iter().any(|&valid| i64::from(valid) == size)
}

/// Resolve a requested size to one the image server renders.
///
/// Unsupported sizes are replaced by [`DEFAULT_SIZE`]; this never fails.
pub fn resolve_size(size: i64) -> u32 {
    match u32::try_from(size) {
        Ok(valid) if VALID_SIZES.contains(&valid) => valid,
        _ => {
            tracing::debug!(
                requested = size,
                fallback = DEFAULT_SIZE,
                "Unsupported image size, using default"
            );
            DEFAULT_SIZE
        }
    }
}
