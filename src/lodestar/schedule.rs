use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// Scheduled run of the training job.
///
/// These are illustrative placeholders, there is no real grid data behind them.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
pub struct ScheduleBlock {
    pub start: &'static str,
    pub end: &'static str,
}

const CHUNKED: [ScheduleBlock; 3] = [
    ScheduleBlock { start: "Jan 15, 02:00", end: "Jan 15, 08:00" },
    ScheduleBlock { start: "Jan 16, 12:00", end: "Jan 16, 18:00" },
    ScheduleBlock { start: "Jan 17, 12:00", end: "Jan 17, 18:00" },
];

const CONTINUOUS: [ScheduleBlock; 1] =
    [ScheduleBlock { start: "Jan 15, 00:00", end: "Jan 17, 23:59" }];

/// Sample schedule: a few low-carbon windows for a chunkable job, one continuous run otherwise.
pub const fn sample_blocks(can_chunk: bool) -> &'static [ScheduleBlock] {
    if can_chunk { &CHUNKED } else { &CONTINUOUS }
}

/// Dates between which the job must run.
#[must_use]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct JobWindow {
    pub earliest_start: NaiveDate,
    pub deadline: NaiveDate,
}

impl JobWindow {
    /// From today till the end of the current month.
    pub fn rest_of_month(today: NaiveDate) -> Option<Self> {
        let deadline = today.with_day(1)?.checked_add_months(Months::new(1))?.pred_opt()?;
        Some(Self { earliest_start: today, deadline })
    }
}
