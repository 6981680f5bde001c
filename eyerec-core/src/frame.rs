//! Borrowed image frame views handed to the engine.
//!
//! A caller buffer arrives as a dynamic-rank `ndarray` view and is
//! canonicalized without copying: rank 2 is grayscale, rank 3 with a last
//! dimension of 3 is color in the engine's expected BGR channel order.
//! Anything else is rejected with the offending shape attached.

use ndarray::{ArrayView2, ArrayView3, ArrayViewD, Ix2, Ix3};
use thiserror::Error;

/// Error raised when a caller buffer cannot be interpreted as a frame.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FrameError {
    /// Buffer rank or channel count does not describe a frame.
    #[error("invalid image shape {shape:?}: expected HxW grayscale or HxWx3 color")]
    InvalidImageShape {
        /// The shape as received, for diagnostics.
        shape: Vec<usize>,
    },
}

/// Read-only view of one frame, valid only for the call that built it.
///
/// The pixel data is borrowed from the caller; no ownership transfer and
/// no copy takes place. Stride conversion, if any layout requires it, is
/// the engine's concern.
#[derive(Debug, Clone)]
pub enum ImageFrame<'a> {
    /// Single-channel grayscale, indexed `[row, col]`.
    Gray(ArrayView2<'a, u8>),
    /// Three-channel BGR color, indexed `[row, col, channel]`.
    Bgr(ArrayView3<'a, u8>),
}

impl<'a> ImageFrame<'a> {
    /// Canonicalize a dynamic-rank buffer view into a frame.
    ///
    /// Accepts rank-2 arrays (grayscale) and rank-3 arrays whose last
    /// dimension is exactly 3 (BGR color). Every other shape, including
    /// zero-sized width or height, fails with
    /// [`FrameError::InvalidImageShape`].
    pub fn from_dyn(view: ArrayViewD<'a, u8>) -> Result<Self, FrameError> {
        let shape = view.shape().to_vec();
        if shape.len() == 2 {
            match view.into_dimensionality::<Ix2>() {
                Ok(gray) => Self::from_gray(gray),
                Err(_) => Err(FrameError::InvalidImageShape { shape }),
            }
        } else if shape.len() == 3 && shape[2] == 3 {
            match view.into_dimensionality::<Ix3>() {
                Ok(bgr) => Self::from_bgr(bgr),
                Err(_) => Err(FrameError::InvalidImageShape { shape }),
            }
        } else {
            Err(FrameError::InvalidImageShape { shape })
        }
    }

    /// Wrap an already-typed grayscale view.
    pub fn from_gray(view: ArrayView2<'a, u8>) -> Result<Self, FrameError> {
        let (height, width) = view.dim();
        if height == 0 || width == 0 {
            return Err(FrameError::InvalidImageShape {
                shape: vec![height, width],
            });
        }
        Ok(Self::Gray(view))
    }

    /// Wrap an already-typed BGR color view.
    pub fn from_bgr(view: ArrayView3<'a, u8>) -> Result<Self, FrameError> {
        let (height, width, channels) = view.dim();
        if height == 0 || width == 0 || channels != 3 {
            return Err(FrameError::InvalidImageShape {
                shape: vec![height, width, channels],
            });
        }
        Ok(Self::Bgr(view))
    }

    /// Frame width in pixels.
    pub fn width(&self) -> usize {
        match self {
            Self::Gray(view) => view.dim().1,
            Self::Bgr(view) => view.dim().1,
        }
    }

    /// Frame height in pixels.
    pub fn height(&self) -> usize {
        match self {
            Self::Gray(view) => view.dim().0,
            Self::Bgr(view) => view.dim().0,
        }
    }

    /// Channel count: 1 for grayscale, 3 for color.
    pub fn channels(&self) -> usize {
        match self {
            Self::Gray(_) => 1,
            Self::Bgr(_) => 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{Array1, Array2, Array3};

    #[test]
    fn rank_2_buffer_is_grayscale() {
        let buffer = Array2::<u8>::zeros((480, 640));
        let frame = ImageFrame::from_dyn(buffer.view().into_dyn()).unwrap();
        assert_eq!(frame.width(), 640);
        assert_eq!(frame.height(), 480);
        assert_eq!(frame.channels(), 1);
    }

    #[test]
    fn rank_3_buffer_with_three_channels_is_color() {
        let buffer = Array3::<u8>::zeros((480, 640, 3));
        let frame = ImageFrame::from_dyn(buffer.view().into_dyn()).unwrap();
        assert_eq!(frame.width(), 640);
        assert_eq!(frame.height(), 480);
        assert_eq!(frame.channels(), 3);
    }

    #[test]
    fn rank_1_buffer_is_rejected() {
        let buffer = Array1::<u8>::zeros(640);
        let err = ImageFrame::from_dyn(buffer.view().into_dyn()).unwrap_err();
        assert_eq!(err, FrameError::InvalidImageShape { shape: vec![640] });
    }

    #[test]
    fn rank_3_buffer_with_four_channels_is_rejected() {
        let buffer = Array3::<u8>::zeros((480, 640, 4));
        let err = ImageFrame::from_dyn(buffer.view().into_dyn()).unwrap_err();
        assert_eq!(
            err,
            FrameError::InvalidImageShape {
                shape: vec![480, 640, 4]
            }
        );
    }

    #[test]
    fn rank_4_buffer_is_rejected() {
        let buffer = ndarray::Array4::<u8>::zeros((2, 480, 640, 3));
        assert!(ImageFrame::from_dyn(buffer.view().into_dyn()).is_err());
    }

    #[test]
    fn zero_sized_frame_is_rejected() {
        let buffer = Array2::<u8>::zeros((0, 640));
        assert!(ImageFrame::from_dyn(buffer.view().into_dyn()).is_err());

        let buffer = Array2::<u8>::zeros((480, 0));
        assert!(ImageFrame::from_gray(buffer.view()).is_err());
    }

    #[test]
    fn non_standard_layout_still_adapts() {
        // A transposed view has reversed strides but a valid shape.
        let buffer = Array2::<u8>::zeros((640, 480));
        let transposed = buffer.t();
        let frame = ImageFrame::from_dyn(transposed.into_dyn()).unwrap();
        assert_eq!(frame.width(), 640);
        assert_eq!(frame.height(), 480);
    }
}
