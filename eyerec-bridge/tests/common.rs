//! Shared helpers for the session integration tests.

use ndarray::{Array2, Array3};

/// Initialize test logging (safe to call from every test).
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A grayscale frame buffer of the given dimensions.
pub fn gray_buffer(height: usize, width: usize) -> Array2<u8> {
    Array2::zeros((height, width))
}

/// A BGR color frame buffer of the given dimensions.
pub fn bgr_buffer(height: usize, width: usize) -> Array3<u8> {
    Array3::zeros((height, width, 3))
}
