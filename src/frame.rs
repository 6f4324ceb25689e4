//! Planar camera frame samples
//!
//! Provides access to YUV 4:2:0 planar pixel data as delivered by camera
//! pipelines: three planes (luma Y, chroma U, chroma V), each with its own
//! byte buffer, pixel stride and row stride. Chroma planes are subsampled
//! at half resolution relative to luma, so chroma indices use halved
//! strides and coordinates.
//!
//! Buffers must be positioned for reading from the start; callers reusing
//! buffers must rewind them before constructing a [`FrameSample`].

use log::trace;
use serde::{Deserialize, Serialize};

use crate::constants::yuv::CHROMA_OFFSET;
use crate::error::{AnalysisError, Result};

/// One channel's data within a planar frame
#[derive(Debug, Clone, Copy)]
pub struct Plane<'a> {
    /// Raw channel bytes
    pub data: &'a [u8],
    /// Bytes between horizontally adjacent samples
    pub pixel_stride: usize,
    /// Bytes between rows
    pub row_stride: usize,
}

impl<'a> Plane<'a> {
    /// Create a plane over a byte buffer
    pub fn new(data: &'a [u8], pixel_stride: usize, row_stride: usize) -> Self {
        Self {
            data,
            pixel_stride,
            row_stride,
        }
    }

    fn validate(&self, name: &str) -> Result<()> {
        if self.data.is_empty() {
            return Err(AnalysisError::invalid_sample(format!(
                "{} plane buffer is empty",
                name
            )));
        }
        if self.pixel_stride == 0 || self.row_stride == 0 {
            return Err(AnalysisError::invalid_sample(format!(
                "{} plane has zero stride (pixel: {}, row: {})",
                name, self.pixel_stride, self.row_stride
            )));
        }
        Ok(())
    }

    fn byte_at(&self, index: usize, name: &str) -> Result<u8> {
        self.data.get(index).copied().ok_or_else(|| {
            AnalysisError::invalid_sample(format!(
                "{} plane index {} out of bounds (buffer length {})",
                name,
                index,
                self.data.len()
            ))
        })
    }
}

/// Which point of the frame is sampled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SamplePoint {
    /// True frame center, `(height / 2, width / 2)`
    #[default]
    Center,
    /// Bug-compatible legacy arithmetic using the raw `(height, width)`
    /// coordinates with built-in `/2` (luma) and `/4` (chroma) divisors.
    /// Agrees with [`SamplePoint::Center`] on the luma plane for even
    /// dimensions and unit pixel stride.
    FrameBounds,
}

/// A single YUV sample with chroma centered around zero
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YuvSample {
    /// Luma in [0, 255]
    pub y: i32,
    /// Blue-difference chroma in [-128, 127]
    pub u: i32,
    /// Red-difference chroma in [-128, 127]
    pub v: i32,
}

/// A planar YUV 4:2:0 frame exposed for single-pixel sampling
#[derive(Debug, Clone, Copy)]
pub struct FrameSample<'a> {
    width: usize,
    height: usize,
    luma: Plane<'a>,
    chroma_u: Plane<'a>,
    chroma_v: Plane<'a>,
}

impl<'a> FrameSample<'a> {
    /// Create a frame sample from its three planes
    ///
    /// # Arguments
    ///
    /// * `width`, `height` - frame dimensions in luma pixels
    /// * `luma`, `chroma_u`, `chroma_v` - the Y, U and V planes
    ///
    /// # Errors
    ///
    /// Returns `InvalidSample` if the dimensions are zero or any plane has
    /// an empty buffer or a zero stride.
    pub fn new(
        width: usize,
        height: usize,
        luma: Plane<'a>,
        chroma_u: Plane<'a>,
        chroma_v: Plane<'a>,
    ) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(AnalysisError::invalid_sample(format!(
                "frame dimensions must be nonzero (got {}x{})",
                width, height
            )));
        }
        luma.validate("luma")?;
        chroma_u.validate("chroma U")?;
        chroma_v.validate("chroma V")?;
        Ok(Self {
            width,
            height,
            luma,
            chroma_u,
            chroma_v,
        })
    }

    /// Create a frame sample from a slice of planes in Y, U, V order
    ///
    /// Extra planes beyond the first three are ignored.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSample` if fewer than three planes are given, or if
    /// any of the first three fails validation.
    pub fn from_planes(width: usize, height: usize, planes: &[Plane<'a>]) -> Result<Self> {
        if planes.len() < 3 {
            return Err(AnalysisError::invalid_sample(format!(
                "expected 3 planes (Y, U, V), got {}",
                planes.len()
            )));
        }
        Self::new(width, height, planes[0], planes[1], planes[2])
    }

    /// Frame width in luma pixels
    pub fn width(&self) -> usize {
        self.width
    }

    /// Frame height in luma pixels
    pub fn height(&self) -> usize {
        self.height
    }

    /// Read the YUV sample at the configured sample point
    ///
    /// Luma is masked to [0, 255]; chroma bytes are centered by
    /// subtracting the storage offset of 128.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSample` if a computed index falls outside a
    /// plane's buffer.
    pub fn sample(&self, point: SamplePoint) -> Result<YuvSample> {
        let (y_index, u_index, v_index) = match point {
            SamplePoint::Center => {
                let row = self.height / 2;
                let col = self.width / 2;
                (
                    row * self.luma.row_stride + col * self.luma.pixel_stride,
                    (row / 2) * self.chroma_u.row_stride + (col / 2) * self.chroma_u.pixel_stride,
                    (row / 2) * self.chroma_v.row_stride + (col / 2) * self.chroma_v.pixel_stride,
                )
            }
            SamplePoint::FrameBounds => (
                (self.height * self.luma.row_stride + self.width * self.luma.pixel_stride) / 2,
                (self.height * self.chroma_u.row_stride + self.width * self.chroma_u.pixel_stride)
                    / 4,
                (self.height * self.chroma_v.row_stride + self.width * self.chroma_v.pixel_stride)
                    / 4,
            ),
        };

        let y = self.luma.byte_at(y_index, "luma")? as i32;
        let u = self.chroma_u.byte_at(u_index, "chroma U")? as i32 - CHROMA_OFFSET;
        let v = self.chroma_v.byte_at(v_index, "chroma V")? as i32 - CHROMA_OFFSET;

        trace!(
            "sampled y={} u={} v={} at indices ({}, {}, {})",
            y, u, v, y_index, u_index, v_index
        );

        Ok(YuvSample { y, u, v })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 8x8 frame with uniform planes: luma 8x8, chroma 4x4 (4:2:0)
    fn uniform_planes(y: u8, u: u8, v: u8) -> (Vec<u8>, Vec<u8>, Vec<u8>) {
        (vec![y; 64], vec![u; 16], vec![v; 16])
    }

    #[test]
    fn test_sample_center_uniform() {
        let (y_buf, u_buf, v_buf) = uniform_planes(128, 128, 128);
        let frame = FrameSample::new(
            8,
            8,
            Plane::new(&y_buf, 1, 8),
            Plane::new(&u_buf, 1, 4),
            Plane::new(&v_buf, 1, 4),
        )
        .unwrap();

        let sample = frame.sample(SamplePoint::Center).unwrap();
        assert_eq!(sample, YuvSample { y: 128, u: 0, v: 0 });
    }

    #[test]
    fn test_sample_chroma_centering() {
        let (y_buf, u_buf, v_buf) = uniform_planes(76, 84, 255);
        let frame = FrameSample::new(
            8,
            8,
            Plane::new(&y_buf, 1, 8),
            Plane::new(&u_buf, 1, 4),
            Plane::new(&v_buf, 1, 4),
        )
        .unwrap();

        let sample = frame.sample(SamplePoint::Center).unwrap();
        assert_eq!(sample.y, 76);
        assert_eq!(sample.u, 84 - 128);
        assert_eq!(sample.v, 255 - 128);
    }

    #[test]
    fn test_center_and_frame_bounds_agree_on_luma_for_even_dims() {
        // Unit pixel stride, even dims: (h*row + w)/2 == (h/2)*row + w/2
        // only when row stride matches width; use 8x8 with row stride 8.
        let mut y_buf = vec![0u8; 64];
        y_buf[36] = 200; // center of an 8x8 plane
        let u_buf = vec![128u8; 16];
        let v_buf = vec![128u8; 16];
        let frame = FrameSample::new(
            8,
            8,
            Plane::new(&y_buf, 1, 8),
            Plane::new(&u_buf, 1, 4),
            Plane::new(&v_buf, 1, 4),
        )
        .unwrap();

        let center = frame.sample(SamplePoint::Center).unwrap();
        let legacy = frame.sample(SamplePoint::FrameBounds).unwrap();
        assert_eq!(center.y, 200);
        assert_eq!(legacy.y, 200);
    }

    #[test]
    fn test_interleaved_chroma_stride() {
        // NV-style semi-planar chroma: pixel stride 2, row stride 8.
        let y_buf = vec![100u8; 64];
        let uv_buf = vec![128u8; 32];
        let frame = FrameSample::new(
            8,
            8,
            Plane::new(&y_buf, 1, 8),
            Plane::new(&uv_buf, 2, 8),
            Plane::new(&uv_buf[1..], 2, 8),
        )
        .unwrap();

        let sample = frame.sample(SamplePoint::Center).unwrap();
        assert_eq!(sample, YuvSample { y: 100, u: 0, v: 0 });
    }

    #[test]
    fn test_rejects_zero_dimensions() {
        let buf = vec![0u8; 16];
        let plane = Plane::new(&buf, 1, 4);
        assert!(FrameSample::new(0, 4, plane, plane, plane).is_err());
        assert!(FrameSample::new(4, 0, plane, plane, plane).is_err());
    }

    #[test]
    fn test_rejects_zero_stride() {
        let buf = vec![0u8; 16];
        let good = Plane::new(&buf, 1, 4);
        let bad = Plane::new(&buf, 0, 4);
        let err = FrameSample::new(4, 4, good, bad, good).unwrap_err();
        assert!(err.to_string().contains("zero stride"));
    }

    #[test]
    fn test_rejects_empty_buffer() {
        let buf = vec![0u8; 16];
        let empty: Vec<u8> = vec![];
        let good = Plane::new(&buf, 1, 4);
        let bad = Plane::new(&empty, 1, 4);
        assert!(FrameSample::new(4, 4, bad, good, good).is_err());
    }

    #[test]
    fn test_rejects_too_few_planes() {
        let buf = vec![0u8; 16];
        let plane = Plane::new(&buf, 1, 4);
        let err = FrameSample::from_planes(4, 4, &[plane, plane]).unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidSample { .. }));
    }

    #[test]
    fn test_out_of_bounds_index_is_an_error() {
        // Luma buffer too small for the center index of a 16x16 frame.
        let y_buf = vec![0u8; 8];
        let c_buf = vec![128u8; 64];
        let frame = FrameSample::new(
            16,
            16,
            Plane::new(&y_buf, 1, 16),
            Plane::new(&c_buf, 1, 8),
            Plane::new(&c_buf, 1, 8),
        )
        .unwrap();

        let err = frame.sample(SamplePoint::Center).unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidSample { .. }));
        assert!(err.to_string().contains("out of bounds"));
    }
}
