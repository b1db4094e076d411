//! Hooks for tracing the filter engine's decisions.
//!
//! The engine reports every pattern test, keep/drop decision and severity
//! classification to a [`DecisionObserver`]. `--debug` installs [`LogObserver`],
//! everything else runs with [`SilentObserver`].

use super::pattern::Pattern;
use super::status::Status;

/// Which filter list a pattern test belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterList {
    NameInclude,
    OutputInclude,
    NameExclude,
    OutputExclude,
    PerfInclude,
    PerfExclude,
}

impl FilterList {
    pub fn as_str(self) -> &'static str {
        match self {
            FilterList::NameInclude => "include-name",
            FilterList::OutputInclude => "include-output",
            FilterList::NameExclude => "exclude-name",
            FilterList::OutputExclude => "exclude-output",
            FilterList::PerfInclude => "include-perf",
            FilterList::PerfExclude => "exclude-perf",
        }
    }
}

pub trait DecisionObserver {
    fn pattern_tested(&self, _list: FilterList, _pattern: &Pattern, _value: &str, _matched: bool) {}

    fn keep_decided(&self, _title: &str, _included: bool, _excluded: bool) {}

    fn classified(&self, _title: &str, _state_label: &str, _status: Status) {}

    fn perf_decided(&self, _title: &str, _included: bool, _excluded: bool) {}
}

/// Observer that ignores every event
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentObserver;

impl DecisionObserver for SilentObserver {}

/// Observer that forwards every event to `log::debug!`
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl DecisionObserver for LogObserver {
    fn pattern_tested(&self, list: FilterList, pattern: &Pattern, value: &str, matched: bool) {
        log::debug!(
            "{} {} '{}' against '{}': {}",
            list.as_str(),
            pattern.kind().as_str(),
            pattern.as_str(),
            value,
            if matched { "match" } else { "no match" }
        );
    }

    fn keep_decided(&self, title: &str, included: bool, excluded: bool) {
        let verdict = if included && !excluded { "kept" } else { "dropped" };
        log::debug!(
            "service '{}' {} (included={}, excluded={})",
            title,
            verdict,
            included,
            excluded
        );
    }

    fn classified(&self, title: &str, state_label: &str, status: Status) {
        log::debug!(
            "service '{}' state '{}' -> {} ({})",
            title,
            state_label,
            status,
            status.code()
        );
    }

    fn perf_decided(&self, title: &str, included: bool, excluded: bool) {
        log::debug!(
            "perfdata for '{}': included={}, excluded={}",
            title,
            included,
            excluded
        );
    }
}
