//! Seconds → sample-index window mapping.
//!
//! `i = trunc(t · sfreq) + zero`, where `trunc` rounds toward zero on the
//! scaled float *before* the integer offset is added. This matches the
//! `int(t * sfreq)` convention used when marking stimulus windows in MNE.
//!
//! Truncation is load-bearing at edges: `0.29 s · 100 Hz` evaluates to
//! `28.999…` and maps to sample 28, not 29. A positive `tmin` therefore
//! can start a window one sample early, a negative `tmin` one sample late.
use std::ops::Range;

use crate::error::{Result, StimError};

/// Half-open sample window `[i0, i1)` on an array's local axis.
///
/// Indices are signed because a window mapped near the start of a
/// recording may begin before sample 0; [`SampleWindow::to_range`] rejects
/// such windows instead of clamping them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleWindow {
    pub i0: i64,
    pub i1: i64,
}

impl SampleWindow {
    pub fn new(i0: i64, i1: i64) -> Self {
        Self { i0, i1 }
    }

    /// Number of samples covered (0 for degenerate windows).
    pub fn len(&self) -> usize {
        self.i1.saturating_sub(self.i0).max(0) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.i1 <= self.i0
    }

    /// Convert to a `usize` range, requiring `0 <= i0 <= i1 <= n_times`.
    pub fn to_range(&self, n_times: usize) -> Result<Range<usize>> {
        let n = n_times as i64;
        if self.i0 < 0 || self.i1 > n || self.i0 > self.i1 {
            return Err(StimError::InvalidWindow(format!(
                "sample window [{}, {}) is outside [0, {n_times})",
                self.i0, self.i1
            )));
        }
        Ok(self.i0 as usize..self.i1 as usize)
    }
}

/// Reject non-finite or non-positive sampling rates.
pub fn check_sfreq(sfreq: f64) -> Result<()> {
    if sfreq.is_finite() && sfreq > 0.0 {
        Ok(())
    } else {
        Err(StimError::InvalidSamplingRate(sfreq))
    }
}

/// Reject `tmin >= tmax` and non-finite bounds.
pub fn check_times(tmin: f64, tmax: f64) -> Result<()> {
    if !tmin.is_finite() || !tmax.is_finite() {
        return Err(StimError::InvalidWindow(format!(
            "window bounds must be finite, got tmin={tmin} tmax={tmax}"
        )));
    }
    if tmin >= tmax {
        return Err(StimError::InvalidWindow(format!(
            "tmin ({tmin}) must be < tmax ({tmax})"
        )));
    }
    Ok(())
}

/// Map `[tmin, tmax)` seconds around time zero to a sample window.
///
/// `zero` is the local sample index that corresponds to `t = 0`
/// (onset sample minus `first_samp` for continuous data, the negated
/// segment offset for epochs). The result is not bounds-checked; see
/// [`SampleWindow::to_range`].
pub fn map_window(tmin: f64, tmax: f64, sfreq: f64, zero: i64) -> Result<SampleWindow> {
    check_sfreq(sfreq)?;
    check_times(tmin, tmax)?;
    let at = |t: f64| -> Result<i64> {
        scaled_samples(t * sfreq)?.checked_add(zero).ok_or_else(|| {
            StimError::InvalidWindow(format!(
                "t={t} s at {sfreq} Hz from sample {zero} overflows the sample index"
            ))
        })
    };
    Ok(SampleWindow { i0: at(tmin)?, i1: at(tmax)? })
}

/// Truncate a scaled time to a sample count, rejecting values that do not
/// fit in `i64`.
pub(crate) fn scaled_samples(x: f64) -> Result<i64> {
    // i64::MIN as f64 is exact (-2^63); i64::MAX as f64 rounds up to 2^63.
    if x.is_finite() && x >= i64::MIN as f64 && x < i64::MAX as f64 {
        Ok(x as i64)
    } else {
        Err(StimError::InvalidWindow(format!(
            "{x} samples is outside the representable sample range"
        )))
    }
}

/// Sample offset of the first column of a segment starting at `seg_tmin`
/// seconds relative to its onset: `ceil(sfreq · seg_tmin)`.
///
/// Negative for segments that start before the onset; its negation is the
/// local index of time zero.
pub fn segment_zero_offset(sfreq: f64, seg_tmin: f64) -> Result<i64> {
    check_sfreq(sfreq)?;
    if !seg_tmin.is_finite() {
        return Err(StimError::InvalidWindow(format!(
            "segment start must be finite, got {seg_tmin}"
        )));
    }
    scaled_samples((sfreq * seg_tmin).ceil())
}
