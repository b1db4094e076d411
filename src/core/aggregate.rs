//! Counts services by severity and collects verbose and perfdata lines.

use super::filter::FilterSet;
use super::observer::DecisionObserver;
use super::status::Status;
use super::table::{ServiceRecord, ServiceTable};
use crate::error::{CheckError, Result};

#[derive(Debug, Clone, Copy, Default)]
pub struct AggregateOptions {
    /// Collect one detail line per kept service
    pub verbose: bool,
    /// Append plugin output to detail lines
    pub detail: bool,
    /// Collect per-service perfdata fragments
    pub collect_perf: bool,
}

/// Result of one pass over a service table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Aggregate {
    pub total: usize,
    pub ok: usize,
    pub warning: usize,
    pub critical: usize,
    pub unknown: usize,
    pub critical_details: Vec<String>,
    pub warning_details: Vec<String>,
    pub unknown_details: Vec<String>,
    pub ok_details: Vec<String>,
    pub perf_details: Vec<String>,
}

impl Aggregate {
    /// Worst status present, critical before warning before unknown
    pub fn status(&self) -> Status {
        if self.critical > 0 {
            Status::Critical
        } else if self.warning > 0 {
            Status::Warning
        } else if self.unknown > 0 {
            Status::Unknown
        } else {
            Status::Ok
        }
    }

    pub fn count(&self, status: Status) -> usize {
        match status {
            Status::Ok => self.ok,
            Status::Warning => self.warning,
            Status::Critical => self.critical,
            Status::Unknown => self.unknown,
        }
    }

    /// Detail lines in severity order: critical, warning, unknown, ok
    pub fn details(&self) -> impl Iterator<Item = &String> {
        self.critical_details
            .iter()
            .chain(&self.warning_details)
            .chain(&self.unknown_details)
            .chain(&self.ok_details)
    }

    fn record(&mut self, status: Status, detail: Option<String>) {
        self.total += 1;
        let (counter, bucket) = match status {
            Status::Ok => (&mut self.ok, &mut self.ok_details),
            Status::Warning => (&mut self.warning, &mut self.warning_details),
            Status::Critical => (&mut self.critical, &mut self.critical_details),
            Status::Unknown => (&mut self.unknown, &mut self.unknown_details),
        };
        *counter += 1;
        if let Some(line) = detail {
            bucket.push(line);
        }
    }
}

/// Walk the table in row order and aggregate every service the filters keep.
///
/// Returns [`CheckError::NoData`] when no service survives.
pub fn aggregate(
    table: &ServiceTable,
    filters: &FilterSet,
    options: AggregateOptions,
    observer: &dyn DecisionObserver,
) -> Result<Aggregate> {
    let mut result = Aggregate::default();

    for service in table.records() {
        if service.title.is_empty() {
            continue;
        }
        if !filters.keeps(&service.title, &service.output, observer) {
            continue;
        }

        let status = service.status();
        observer.classified(&service.title, &service.state_label, status);

        let detail = options
            .verbose
            .then(|| detail_line(&service, status, options.detail));
        result.record(status, detail);

        if options.collect_perf && filters.keeps_perf(&service.title, observer) {
            result.perf_details.push(perf_fragment(&service, status));
        }
    }

    if result.total == 0 {
        return Err(CheckError::NoData);
    }
    Ok(result)
}

fn detail_line(service: &ServiceRecord, status: Status, with_output: bool) -> String {
    if with_output && !service.output.is_empty() {
        format!("{}: {} - {}", status.label(), service.title, service.output)
    } else {
        format!("{}: {}", status.label(), service.title)
    }
}

fn perf_fragment(service: &ServiceRecord, status: Status) -> String {
    let mut fragment = format!("{}={}", service.title, status.code());
    for (key, value) in [
        ("state_age", &service.state_age),
        ("check_age", &service.check_age),
        ("perfometer", &service.perfometer),
    ] {
        if !value.is_empty() {
            fragment.push_str(&format!(";{}={}", key, value));
        }
    }
    fragment
}
