//! # stimfix — stimulation artifact correction in pure Rust
//!
//! Electrical stimulation leaves a short, large-amplitude artifact in
//! EEG/MEG/EMG recordings at every stimulus onset. `stimfix` replaces a
//! window of samples around each onset with either a straight line between
//! the bordering samples or zeros, matching the behaviour of MNE-Python's
//! `fix_stim_artifact`.
//!
//! ## Overview
//!
//! ```text
//! (tmin, tmax) s ──┐
//!   sfreq, zero ───┴─ stim::window::map_window()   → [i0, i1) samples
//!                                    │
//! Raw + EventTable ─ stim::apply ────┤   one window per matching onset
//! Epochs / Evoked  ─ stim::apply ────┤   one shared window, every segment
//!                                    │
//!                    stim::correct::correct_window_inplace()
//!                      ├─ linear : x[i0-1] ─────── x[i1]
//!                      └─ window : 0 0 0 0 0 0 0 0
//! ```
//!
//! Detection, filtering, baseline correction, file I/O, channel picking and
//! epoching are left to the caller: pass only the channels to correct as
//! rows of the array.
//!
//! ## Quick start
//!
//! ```
//! use stimfix::{fix_stim_artifact_raw, CorrectionMode, Event, EventTable, Raw, StimConfig};
//! use ndarray::Array2;
//!
//! // 4 channels, 10 s at 600 Hz, recording starts at global sample 6000.
//! let data = Array2::from_shape_fn((4, 6000), |(c, t)| (t as f64 * 0.01).sin() + c as f64);
//! let mut raw = Raw::new(data, 600.0, 6000).unwrap();
//! let events = EventTable::new(vec![Event::new(7200, 0, 1), Event::new(9000, 0, 1)]);
//!
//! // Interpolate across ±20 ms of every event with code 1.
//! let cfg = StimConfig::new(-0.02, 0.02, CorrectionMode::Linear);
//! let n = fix_stim_artifact_raw(&mut raw, &events, 1, &cfg).unwrap();
//! assert_eq!(n, 2);
//! ```
//!
//! Segmented data needs no events, time zero is each segment's onset:
//!
//! ```
//! use stimfix::{fix_stim_artifact_epochs, CorrectionMode, Epochs, StimConfig};
//! use ndarray::{s, Array3};
//!
//! // 10 epochs × 3 channels, -0.2 … 0.5 s at 600 Hz.
//! let mut epochs = Epochs::new(Array3::ones((10, 3, 421)), 600.0, -0.2).unwrap();
//! let cfg = StimConfig::new(0.2, 0.4, CorrectionMode::Window);
//! fix_stim_artifact_epochs(&mut epochs, &cfg).unwrap();
//! assert!(epochs.data.slice(s![.., .., 240..360]).iter().all(|&v| v == 0.0));
//! ```
//!
//! ## Ownership
//!
//! Every entry point corrects the caller's array **in place** through a
//! `&mut` borrow. Clone first to keep the uncorrected data.
//!
//! ## Errors
//!
//! Each call either corrects every window or returns a [`StimError`] without
//! having written anything. An `event_id` that matches no event is not an
//! error: the data is left unchanged and a `log` warning is emitted.

pub mod config;
pub mod error;
pub mod events;
pub mod recording;
pub mod stim;

// ── Crate-root re-exports ─────────────────────────────────────────────────

// config
pub use config::StimConfig;

// error
pub use error::{Result, StimError};

// events
pub use events::{Event, EventTable};

// recording — data shape adapters
pub use recording::{Epochs, Evoked, Raw, Recording};

// stim — mapper, corrector, applier
pub use stim::{
    check_window, correct_window_inplace, map_window, segment_zero_offset,
    CorrectionMode, SampleWindow,
    fix_stim_artifact, fix_stim_artifact_epochs, fix_stim_artifact_evoked, fix_stim_artifact_raw,
};
