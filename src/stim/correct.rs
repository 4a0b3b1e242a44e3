//! In-place correction of a sample window across all channels.
//!
//! - `Linear`: per channel, straight line between the anchors at `i0 - 1`
//!   and `i1`; the anchors themselves are left unchanged.
//!   `x[k] = left + (right - left) · (k - i0 + 1) / (i1 - i0 + 1)`
//! - `Window`: every sample in `[i0, i1)` set to exactly `0.0`.
use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use ndarray::{s, ArrayViewMut2};

use crate::error::{Result, StimError};
use crate::stim::window::SampleWindow;

/// How samples inside the artifact window are replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CorrectionMode {
    /// Linear interpolation between the samples bordering the window.
    #[default]
    Linear,
    /// Zero-fill.
    Window,
}

impl CorrectionMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            CorrectionMode::Linear => "linear",
            CorrectionMode::Window => "window",
        }
    }
}

impl fmt::Display for CorrectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CorrectionMode {
    type Err = StimError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "linear" => Ok(CorrectionMode::Linear),
            "window" => Ok(CorrectionMode::Window),
            _ => Err(StimError::UnknownMode(s.to_string())),
        }
    }
}

/// Validate `window` against an array with `n_times` columns.
///
/// Returns the window as a `usize` range. Empty windows pass regardless of
/// mode (they are no-ops); non-empty `Linear` windows need both anchors.
pub fn check_window(window: SampleWindow, n_times: usize, mode: CorrectionMode) -> Result<Range<usize>> {
    let range = window.to_range(n_times)?;
    if range.is_empty() {
        return Ok(range);
    }
    if mode == CorrectionMode::Linear && (range.start == 0 || range.end >= n_times) {
        return Err(StimError::MissingAnchor {
            i0: range.start,
            i1: range.end,
            n_times,
        });
    }
    Ok(range)
}

/// Correct `data[:, i0..i1]` in place.
///
/// `data` is `[C, T]`. Nothing is written if validation fails.
pub fn correct_window_inplace(
    mut data: ArrayViewMut2<'_, f64>,
    window: SampleWindow,
    mode: CorrectionMode,
) -> Result<()> {
    let range = check_window(window, data.ncols(), mode)?;
    if range.is_empty() {
        return Ok(());
    }
    let (i0, i1) = (range.start, range.end);

    match mode {
        CorrectionMode::Window => {
            data.slice_mut(s![.., i0..i1]).fill(0.0);
        }
        CorrectionMode::Linear => {
            let denom = (i1 - i0 + 1) as f64;
            for mut row in data.rows_mut() {
                let left = row[i0 - 1];
                let right = row[i1];
                let step = (right - left) / denom;
                for k in i0..i1 {
                    row[k] = left + step * (k - i0 + 1) as f64;
                }
            }
        }
    }
    Ok(())
}
