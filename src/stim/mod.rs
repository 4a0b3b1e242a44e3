//! Stimulation artifact correction.
//!
//! - [`window`]: seconds → sample window, `trunc(t · sfreq) + zero`.
//! - [`correct`]: in-place linear interpolation or zero-fill of a window.
//! - [`apply`]: per-onset (continuous) or per-segment (epochs/evoked)
//!   application with all-or-nothing validation.

pub mod apply;
pub mod correct;
pub mod window;

pub use apply::{fix_stim_artifact, fix_stim_artifact_epochs, fix_stim_artifact_evoked, fix_stim_artifact_raw};
pub use correct::{check_window, correct_window_inplace, CorrectionMode};
pub use window::{check_sfreq, check_times, map_window, segment_zero_offset, SampleWindow};
