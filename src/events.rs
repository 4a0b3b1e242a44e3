//! Stimulus event table.
//!
//! Events live on the same global sample clock as
//! [`Raw::first_samp`](crate::recording::Raw::first_samp), in the
//! conventional three-column layout `(sample, previous_code, code)`.
use ndarray::Array2;

use crate::error::{Result, StimError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Event {
    /// Sample index on the global clock.
    pub sample: i64,
    pub previous_code: i32,
    pub code: i32,
}

impl Event {
    pub fn new(sample: i64, previous_code: i32, code: i32) -> Self {
        Self { sample, previous_code, code }
    }
}

/// Ordered, read-only sequence of [`Event`]s.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventTable {
    events: Vec<Event>,
}

impl EventTable {
    pub fn new(events: Vec<Event>) -> Self {
        Self { events }
    }

    /// Build from an `[N, 3]` integer array of `(sample, previous, code)` rows.
    pub fn from_array(arr: &Array2<i64>) -> Result<Self> {
        if arr.ncols() != 3 {
            return Err(StimError::InvalidEvents(format!(
                "expected an [N, 3] events array, got shape {:?}",
                arr.dim()
            )));
        }
        let mut events = Vec::with_capacity(arr.nrows());
        for row in arr.rows() {
            let code = |v: i64| {
                i32::try_from(v).map_err(|_| {
                    StimError::InvalidEvents(format!("event code {v} does not fit in i32"))
                })
            };
            events.push(Event::new(row[0], code(row[1])?, code(row[2])?));
        }
        Ok(Self { events })
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Event> {
        self.events.iter()
    }

    /// Global sample indices of every event with `code == event_id`,
    /// ascending (stable for duplicate samples).
    pub fn onsets(&self, event_id: i32) -> Vec<i64> {
        let mut samples: Vec<i64> = self
            .events
            .iter()
            .filter(|e| e.code == event_id)
            .map(|e| e.sample)
            .collect();
        samples.sort();
        samples
    }
}

impl From<Vec<Event>> for EventTable {
    fn from(events: Vec<Event>) -> Self {
        Self::new(events)
    }
}
