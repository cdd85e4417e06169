//! Affine interval remapping and the [-1, 1] -> byte color map.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Remap failure: the input interval has zero width, so no affine map exists.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RemapError {
    DegenerateInterval { start: f64 },
}

impl Display for RemapError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DegenerateInterval { start } => write!(
                f,
                "input interval [{start}, {start}] has zero width; no affine map exists"
            ),
        }
    }
}

impl Error for RemapError {}

/// Map `val` through the unique affine function sending
/// `in_start -> out_start` and `in_end -> out_end`.
///
/// Values outside `[in_start, in_end]` extrapolate linearly; no clamping.
pub fn remap(
    val: f64,
    in_start: f64,
    in_end: f64,
    out_start: f64,
    out_end: f64,
) -> Result<f64, RemapError> {
    if in_start == in_end {
        return Err(RemapError::DegenerateInterval { start: in_start });
    }
    Ok(affine(val, in_start, in_end, out_start, out_end))
}

#[inline]
fn affine(val: f64, in_start: f64, in_end: f64, out_start: f64, out_end: f64) -> f64 {
    out_start + (val - in_start) * (out_start - out_end) / (in_start - in_end)
}

/// Map an evaluation result in `[-1, 1]` to a color byte in `[0, 255]`.
///
/// Truncates toward zero rather than rounding, so `0.5` maps to `191`,
/// not `192`. Inputs outside `[-1, 1]` are the caller's bug; the operator
/// set is closed over `[-1, 1]` so evaluator outputs never exceed it.
pub fn color_map(val: f64) -> u8 {
    // The fixed [-1, 1] input interval is never degenerate.
    affine(val, -1.0, 1.0, 0.0, 255.0) as u8
}
