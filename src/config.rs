//! Correction configuration.
//!
//! [`StimConfig`] holds every tunable parameter of the artifact fixer.
//! The [`Default`] implementation matches the reference defaults
//! (`tmin = 0`, `tmax = 10 ms`, linear interpolation).

use crate::error::Result;
use crate::stim::correct::CorrectionMode;
use crate::stim::window::check_times;

/// Parameters for [`fix_stim_artifact`](crate::fix_stim_artifact) and its
/// shape-specific variants.
///
/// # Examples
///
/// ```
/// use stimfix::{CorrectionMode, StimConfig};
///
/// // Zero out 20 ms either side of each stimulus.
/// let cfg = StimConfig::new(-0.02, 0.02, CorrectionMode::Window);
/// assert!(cfg.validate().is_ok());
///
/// // Defaults: [0, 10 ms), linear.
/// let cfg = StimConfig::default();
/// assert_eq!(cfg.mode, CorrectionMode::Linear);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StimConfig {
    /// Start of the artifact window in seconds, relative to the onset.
    ///
    /// Negative values reach before the stimulus.
    ///
    /// Default: `0.0` s.
    pub tmin: f64,

    /// End of the artifact window in seconds (exclusive), relative to the
    /// onset.  Must be strictly greater than [`tmin`](Self::tmin).
    ///
    /// Both bounds are converted to samples with `trunc(t · sfreq)`, so a
    /// window shorter than one sample period collapses to nothing.
    ///
    /// Default: `0.01` s.
    pub tmax: f64,

    /// How the samples inside the window are replaced.
    ///
    /// [`CorrectionMode::Linear`] needs one untouched sample on each side of
    /// the window; [`CorrectionMode::Window`] zero-fills and works right up
    /// to the array edges.
    ///
    /// Default: [`CorrectionMode::Linear`].
    pub mode: CorrectionMode,
}

impl Default for StimConfig {
    fn default() -> Self {
        Self {
            tmin: 0.0,
            tmax: 0.01,
            mode: CorrectionMode::Linear,
        }
    }
}

impl StimConfig {
    pub fn new(tmin: f64, tmax: f64, mode: CorrectionMode) -> Self {
        Self { tmin, tmax, mode }
    }

    pub fn with_mode(mut self, mode: CorrectionMode) -> Self {
        self.mode = mode;
        self
    }

    /// Check that the time window is finite and `tmin < tmax`.
    pub fn validate(&self) -> Result<()> {
        check_times(self.tmin, self.tmax)
    }
}
