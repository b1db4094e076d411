//! Nagios plugin states and their exit codes.

use std::fmt;

/// Severity of a single service, and of the plugin result as a whole.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ok,
    Warning,
    Critical,
    Unknown,
}

impl Status {
    /// Map a Check_MK `service_state` label to a status.
    ///
    /// `OK`, `WARN`/`WARNING` and `CRIT`/`CRITICAL` are recognised, everything
    /// else (`UNKN`, `PEND`, garbage) is `Unknown`.
    pub fn from_state_label(label: &str) -> Self {
        match label.trim() {
            "OK" => Status::Ok,
            "WARN" | "WARNING" => Status::Warning,
            "CRIT" | "CRITICAL" => Status::Critical,
            _ => Status::Unknown,
        }
    }

    /// Standard Nagios exit code
    pub fn code(self) -> i32 {
        match self {
            Status::Ok => 0,
            Status::Warning => 1,
            Status::Critical => 2,
            Status::Unknown => 3,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Status::Ok => "OK",
            Status::Warning => "WARNING",
            Status::Critical => "CRITICAL",
            Status::Unknown => "UNKNOWN",
        }
    }

    /// Bracketed label used in status and detail lines, e.g. `[WARNING]`
    pub fn label(self) -> String {
        format!("[{}]", self.name())
    }

    /// Lower-case word used in the summary sentence
    pub fn word(self) -> &'static str {
        match self {
            Status::Ok => "ok",
            Status::Warning => "warning",
            Status::Critical => "critical",
            Status::Unknown => "unknown",
        }
    }

    /// Terminate the process with this status' exit code
    pub fn exit(self) -> ! {
        std::process::exit(self.code())
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
