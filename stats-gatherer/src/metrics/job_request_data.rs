use super::shared::{
    present,
    WithRaw,
};
use chrono::{
    DateTime,
    TimeDelta,
    Utc,
};
use serde::{
    Deserialize,
    Serialize,
};
use serde_json::Value;
use std::fmt::Write as _;
use tracing::warn;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Owner {
    #[serde(default)]
    pub name: Option<String>,
}

/// Job request as returned by `pools/{id}/jobrequests`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRequest {
    #[serde(default)]
    pub queue_time: Option<String>,
    /// Outer `Some` when the key is present at all.
    #[serde(default, deserialize_with = "present")]
    pub assign_time: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub result: Option<Value>,
    #[serde(default)]
    pub owner: Option<Owner>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum JobState {
    Queued,
    Running,
    Completed,
}

impl JobState {
    fn phrase(&self) -> &'static str {
        match self {
            JobState::Queued => "in the queue for",
            JobState::Running => "running for",
            JobState::Completed => "completed",
        }
    }
}

impl JobRequest {
    pub fn state(&self) -> JobState {
        match (&self.assign_time, &self.result) {
            (None, _) => JobState::Queued,
            (Some(_), None) => JobState::Running,
            (Some(_), Some(_)) => JobState::Completed,
        }
    }

    /// The timestamp the elapsed time of the current state is measured from.
    pub fn state_since(&self) -> Option<&str> {
        match self.state() {
            JobState::Queued => self.queue_time.as_deref(),
            JobState::Running => self.assign_time.as_ref().and_then(|t| t.as_deref()),
            JobState::Completed => None,
        }
    }

    pub fn owner_name(&self) -> &str {
        self.owner
            .as_ref()
            .and_then(|owner| owner.name.as_deref())
            .unwrap_or("unknown")
    }
}

/// Parses an RFC 3339 timestamp. Missing or malformed values are logged and
/// fall back to the Unix epoch so that an elapsed time is still reported.
pub fn parse_timestamp(raw: Option<&str>) -> DateTime<Utc> {
    match raw.map(DateTime::parse_from_rfc3339) {
        Some(Ok(time)) => time.with_timezone(&Utc),
        Some(Err(err)) => {
            warn!(timestamp = raw, %err, "unparseable job request timestamp");
            DateTime::<Utc>::UNIX_EPOCH
        }
        None => {
            warn!("job request has no timestamp for its current state");
            DateTime::<Utc>::UNIX_EPOCH
        }
    }
}

pub fn format_elapsed(elapsed: TimeDelta) -> String {
    let magnitude = elapsed.abs().to_std().unwrap_or_default();
    let formatted = humantime::format_duration(magnitude);
    if elapsed < TimeDelta::zero() {
        format!("-{formatted}")
    } else {
        formatted.to_string()
    }
}

/// A queued or running job request worth a line in the pool log.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildDetail {
    pub owner: String,
    pub state: JobState,
    pub elapsed_seconds: i64,
    #[serde(skip)]
    pub elapsed: TimeDelta,
    pub record: Value,
}

impl BuildDetail {
    pub fn to_log_line(&self) -> String {
        format!(
            "Build: {} - {} {}. Full build data: {}\n",
            self.owner,
            self.state.phrase(),
            format_elapsed(self.elapsed),
            self.record
        )
    }
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildStats {
    pub builds_in_the_queue: u64,
    pub builds_running: u64,
    pub details: Vec<BuildDetail>,
}

impl BuildStats {
    /// Classifies every request, measuring elapsed times against `now`.
    pub fn tally<'a>(requests: impl IntoIterator<Item = &'a WithRaw<JobRequest>>, now: DateTime<Utc>) -> Self {
        let mut stats = Self::default();

        for WithRaw { record, raw } in requests {
            let state = record.state();
            match state {
                JobState::Queued => stats.builds_in_the_queue += 1,
                JobState::Running => stats.builds_running += 1,
                JobState::Completed => continue,
            }

            let elapsed = now - parse_timestamp(record.state_since());
            stats.details.push(BuildDetail {
                owner: record.owner_name().to_string(),
                state,
                elapsed_seconds: elapsed.num_seconds(),
                elapsed,
                record: raw.clone(),
            });
        }

        stats
    }

    /// Detail lines followed by the queue summary. Running builds are
    /// tallied but not summarised here.
    pub fn to_log_lines(&self) -> String {
        let mut output: String = self.details.iter().map(BuildDetail::to_log_line).collect();
        let _ = writeln!(output, "Builds in the queue: {}", self.builds_in_the_queue);
        output
    }
}
