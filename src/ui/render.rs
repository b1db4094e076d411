//! Nagios plugin output: one status line, optional detail lines.

use crate::core::aggregate::Aggregate;
use crate::core::status::Status;

#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Print only the perfdata and always exit OK
    pub perfdata_only: bool,
    /// Append per-service perfdata fragments
    pub include_perf: bool,
    /// Print detail lines after the status line
    pub verbose: bool,
    /// Shown in parentheses in the status line, e.g. `web01 via view.py`
    pub source_label: String,
}

/// Finished plugin output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub status: Status,
    pub status_line: String,
    pub details: Vec<String>,
}

impl Rendered {
    pub fn exit_code(&self) -> i32 {
        self.status.code()
    }

    /// Status line followed by the detail lines, newline separated
    pub fn text(&self) -> String {
        let mut text = self.status_line.clone();
        for line in &self.details {
            text.push('\n');
            text.push_str(line);
        }
        text
    }
}

/// `total=T ok=O warning=W critical=C unknown=U`
pub fn basic_perfdata(aggregate: &Aggregate) -> String {
    format!(
        "total={} ok={} warning={} critical={} unknown={}",
        aggregate.total, aggregate.ok, aggregate.warning, aggregate.critical, aggregate.unknown
    )
}

pub fn perfdata(aggregate: &Aggregate, include_perf: bool) -> String {
    let basic = basic_perfdata(aggregate);
    if include_perf && !aggregate.perf_details.is_empty() {
        format!("{} {}", basic, aggregate.perf_details.join(" "))
    } else {
        basic
    }
}

pub fn render(aggregate: &Aggregate, options: &RenderOptions) -> Rendered {
    let perf = perfdata(aggregate, options.include_perf);

    if options.perfdata_only {
        return Rendered {
            status: Status::Ok,
            status_line: perf,
            details: Vec::new(),
        };
    }

    let status = aggregate.status();
    let status_line = match status {
        Status::Ok => format!(
            "{} - All {} services OK ({}) | {}",
            status.label(),
            aggregate.total,
            options.source_label,
            perf
        ),
        _ => format!(
            "{} - {} {} services ({}) | {}",
            status.label(),
            aggregate.count(status),
            status.word(),
            options.source_label,
            perf
        ),
    };

    let details = if options.verbose {
        aggregate.details().cloned().collect()
    } else {
        Vec::new()
    };

    Rendered {
        status,
        status_line,
        details,
    }
}

/// Output for a run where no source delivered usable data
pub fn render_failure(host: &str, reason: &str, preview: Option<&str>) -> Rendered {
    let details = match preview {
        Some(preview) if !preview.is_empty() => vec![format!("Last response: {}", preview)],
        _ => Vec::new(),
    };
    Rendered {
        status: Status::Unknown,
        status_line: format!(
            "{} - No service data for host '{}': {}",
            Status::Unknown.label(),
            host,
            reason
        ),
        details,
    }
}

/// Output for errors raised before anything was fetched
pub fn render_error(message: &str) -> Rendered {
    Rendered {
        status: Status::Unknown,
        status_line: format!("{} - {}", Status::Unknown.label(), message),
        details: Vec::new(),
    }
}
