//! Thin adapters around the three data shapes that carry stimulus artifacts.
//!
//! Each adapter only knows how to present "an array with a sampling rate and
//! a time-zero convention"; reading, epoching and averaging happen upstream.
use ndarray::{Array2, Array3};

use crate::error::{Result, StimError};
use crate::stim::window::{check_sfreq, scaled_samples, segment_zero_offset};

/// Continuous recording, `[C, T]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Raw {
    pub data: Array2<f64>,
    /// Sampling rate (Hz).
    pub sfreq: f64,
    /// Global sample index of column 0.
    pub first_samp: i64,
}

impl Raw {
    pub fn new(data: Array2<f64>, sfreq: f64, first_samp: i64) -> Result<Self> {
        check_sfreq(sfreq)?;
        Ok(Self { data, sfreq, first_samp })
    }

    pub fn n_channels(&self) -> usize {
        self.data.nrows()
    }

    pub fn n_times(&self) -> usize {
        self.data.ncols()
    }

    /// Local column of a global sample index (may be out of range).
    pub fn local_index(&self, sample: i64) -> Result<i64> {
        sample.checked_sub(self.first_samp).ok_or_else(|| {
            StimError::InvalidWindow(format!(
                "event sample {sample} is unreachable from first_samp {}",
                self.first_samp
            ))
        })
    }
}

/// Segmented trials sharing one geometry, `[E, C, T]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Epochs {
    pub data: Array3<f64>,
    pub sfreq: f64,
    /// Time of column 0 relative to each trial's onset (s), e.g. `-0.2`.
    pub tmin: f64,
}

impl Epochs {
    pub fn new(data: Array3<f64>, sfreq: f64, tmin: f64) -> Result<Self> {
        check_sfreq(sfreq)?;
        Ok(Self { data, sfreq, tmin })
    }

    pub fn n_epochs(&self) -> usize {
        self.data.dim().0
    }

    pub fn n_times(&self) -> usize {
        self.data.dim().2
    }

    /// Sample offset of column 0 from time zero: `ceil(sfreq · tmin)`.
    pub fn first(&self) -> Result<i64> {
        segment_zero_offset(self.sfreq, self.tmin)
    }
}

/// Average of trials, `[C, T]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Evoked {
    pub data: Array2<f64>,
    pub sfreq: f64,
    /// Sample offset of column 0 from time zero (negative when the average
    /// includes a pre-stimulus baseline).
    pub first: i64,
}

impl Evoked {
    pub fn new(data: Array2<f64>, sfreq: f64, first: i64) -> Result<Self> {
        check_sfreq(sfreq)?;
        Ok(Self { data, sfreq, first })
    }

    /// Build with `first = round(tmin · sfreq)`.
    pub fn from_tmin(data: Array2<f64>, sfreq: f64, tmin: f64) -> Result<Self> {
        check_sfreq(sfreq)?;
        let first = scaled_samples((tmin * sfreq).round())?;
        Ok(Self { data, sfreq, first })
    }

    pub fn n_times(&self) -> usize {
        self.data.ncols()
    }
}

/// Closed set of correctable data shapes.
#[derive(Debug, Clone, PartialEq)]
pub enum Recording {
    Raw(Raw),
    Epochs(Epochs),
    Evoked(Evoked),
}

impl Recording {
    pub fn sfreq(&self) -> f64 {
        match self {
            Recording::Raw(r) => r.sfreq,
            Recording::Epochs(e) => e.sfreq,
            Recording::Evoked(e) => e.sfreq,
        }
    }

    pub fn n_times(&self) -> usize {
        match self {
            Recording::Raw(r) => r.n_times(),
            Recording::Epochs(e) => e.n_times(),
            Recording::Evoked(e) => e.n_times(),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Recording::Raw(_) => "raw",
            Recording::Epochs(_) => "epochs",
            Recording::Evoked(_) => "evoked",
        }
    }
}

impl From<Raw> for Recording {
    fn from(r: Raw) -> Self {
        Recording::Raw(r)
    }
}

impl From<Epochs> for Recording {
    fn from(e: Epochs) -> Self {
        Recording::Epochs(e)
    }
}

impl From<Evoked> for Recording {
    fn from(e: Evoked) -> Self {
        Recording::Evoked(e)
    }
}
