//! Apply window correction across a recording's event structure.
//!
//! - Continuous data: one window per event whose code matches `event_id`,
//!   applied in ascending onset order. Overlapping windows are corrected
//!   sequentially, so a later window sees the earlier one's output.
//! - Epochs / evoked: time zero is each segment's onset, so a single window
//!   is mapped once and applied to every segment.
//!
//! Every window is validated before the first write; on `Err` the data is
//! exactly as it was passed in.
use log::{debug, trace, warn};

use crate::config::StimConfig;
use crate::error::{Result, StimError};
use crate::events::EventTable;
use crate::recording::{Epochs, Evoked, Raw, Recording};
use crate::stim::correct::{check_window, correct_window_inplace};
use crate::stim::window::{check_sfreq, map_window, SampleWindow};

/// Correct the window `[cfg.tmin, cfg.tmax)` around every event with
/// `code == event_id`, in place.
///
/// Returns the number of onsets corrected. No matching events is not an
/// error: the recording is left unchanged, a warning is logged and `0` is
/// returned.
///
/// # Errors
///
/// * [`StimError::InvalidWindow`] if the configured window is inverted or
///   any onset's window falls outside the recording.
/// * [`StimError::MissingAnchor`] for linear mode when a window touches
///   the first or last sample.
pub fn fix_stim_artifact_raw(
    raw: &mut Raw,
    events: &EventTable,
    event_id: i32,
    cfg: &StimConfig,
) -> Result<usize> {
    cfg.validate()?;
    check_sfreq(raw.sfreq)?;

    let onsets = events.onsets(event_id);
    if onsets.is_empty() {
        warn!(
            "no events with code {event_id} among {} events; recording left unchanged",
            events.len()
        );
        return Ok(0);
    }

    let n_times = raw.n_times();
    let windows = onsets
        .iter()
        .map(|&sample| -> Result<SampleWindow> {
            let w = raw
                .local_index(sample)
                .and_then(|zero| map_window(cfg.tmin, cfg.tmax, raw.sfreq, zero))
                .and_then(|w| check_window(w, n_times, cfg.mode).map(|_| w))
                .map_err(|e| annotate(e, sample))?;
            Ok(w)
        })
        .collect::<Result<Vec<SampleWindow>>>()?;

    debug!(
        "raw [{} ch × {n_times}] @ {} Hz: {} onsets of event {event_id}, {} samples each, mode={}",
        raw.n_channels(),
        raw.sfreq,
        windows.len(),
        windows[0].len(),
        cfg.mode
    );

    for (w, sample) in windows.iter().zip(&onsets) {
        trace!("onset {sample}: correcting [{}, {})", w.i0, w.i1);
        correct_window_inplace(raw.data.view_mut(), *w, cfg.mode)?;
    }
    Ok(windows.len())
}

/// Correct the same window in every epoch, in place. Returns the number of
/// epochs corrected.
pub fn fix_stim_artifact_epochs(epochs: &mut Epochs, cfg: &StimConfig) -> Result<usize> {
    cfg.validate()?;
    let first = epochs.first()?;
    let w = map_window(cfg.tmin, cfg.tmax, epochs.sfreq, time_zero(first)?)?;
    check_window(w, epochs.n_times(), cfg.mode)?;

    debug!(
        "epochs [{:?}] @ {} Hz, first={first}: window [{}, {}), mode={}",
        epochs.data.dim(),
        epochs.sfreq,
        w.i0,
        w.i1,
        cfg.mode
    );

    let mut n = 0;
    for (e, epoch) in epochs.data.outer_iter_mut().enumerate() {
        trace!("epoch {e}");
        correct_window_inplace(epoch, w, cfg.mode)?;
        n += 1;
    }
    Ok(n)
}

/// Correct an averaged response in place. Always returns `1`.
pub fn fix_stim_artifact_evoked(evoked: &mut Evoked, cfg: &StimConfig) -> Result<usize> {
    cfg.validate()?;
    let w = map_window(cfg.tmin, cfg.tmax, evoked.sfreq, time_zero(evoked.first)?)?;
    check_window(w, evoked.n_times(), cfg.mode)?;

    debug!(
        "evoked [{:?}] @ {} Hz, first={}: window [{}, {}), mode={}",
        evoked.data.dim(),
        evoked.sfreq,
        evoked.first,
        w.i0,
        w.i1,
        cfg.mode
    );

    correct_window_inplace(evoked.data.view_mut(), w, cfg.mode)?;
    Ok(1)
}

/// Dispatch on the recording shape.
///
/// `events` is required for [`Recording::Raw`] and ignored for segmented
/// data, whose onsets are implicit.
pub fn fix_stim_artifact(
    rec: &mut Recording,
    events: Option<(&EventTable, i32)>,
    cfg: &StimConfig,
) -> Result<usize> {
    debug!(
        "fix_stim_artifact: {} [{} samples @ {} Hz]",
        rec.kind(),
        rec.n_times(),
        rec.sfreq()
    );
    match rec {
        Recording::Raw(raw) => {
            let (events, event_id) = events.ok_or_else(|| {
                StimError::InvalidEvents("continuous data needs an event table and event id".into())
            })?;
            fix_stim_artifact_raw(raw, events, event_id, cfg)
        }
        Recording::Epochs(epochs) => {
            if events.is_some() {
                debug!("events ignored for epochs; onsets are at time zero");
            }
            fix_stim_artifact_epochs(epochs, cfg)
        }
        Recording::Evoked(evoked) => {
            if events.is_some() {
                debug!("events ignored for evoked; onset is at time zero");
            }
            fix_stim_artifact_evoked(evoked, cfg)
        }
    }
}

/// Local index of time zero for a segment whose column 0 sits at `first`.
fn time_zero(first: i64) -> Result<i64> {
    first.checked_neg().ok_or_else(|| {
        StimError::InvalidWindow(format!("segment offset {first} has no time-zero column"))
    })
}

fn annotate(err: StimError, sample: i64) -> StimError {
    match err {
        StimError::InvalidWindow(msg) => {
            StimError::InvalidWindow(format!("event at sample {sample}: {msg}"))
        }
        other => other,
    }
}
