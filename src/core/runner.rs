//! Primary-then-fallback retrieval feeding the aggregation engine.

use super::aggregate::{aggregate, Aggregate, AggregateOptions};
use super::filter::FilterSet;
use super::observer::DecisionObserver;
use super::table::ServiceTable;
use crate::api::ServiceSource;
use crate::error::{CheckError, Result};

/// Maximum number of characters of a failed response shown to the user
pub const PREVIEW_CHARS: usize = 200;

/// Aggregate produced by the first source that delivered usable data
#[derive(Debug, Clone)]
pub struct Collected {
    pub aggregate: Aggregate,
    pub source_label: String,
}

/// Try each source in order until one yields at least one kept service.
///
/// Transport, layout and no-data failures move on to the next source. When
/// every source fails the result is [`CheckError::AllSourcesFailed`] carrying
/// the last failure and a preview of the last body received.
pub fn collect(
    sources: &[Box<dyn ServiceSource>],
    host: &str,
    filters: &FilterSet,
    options: AggregateOptions,
    observer: &dyn DecisionObserver,
) -> Result<Collected> {
    let mut last_error = None;
    let mut last_body: Option<String> = None;

    for source in sources {
        log::info!("querying {} for host '{}'", source.label(), host);

        let attempt = source.fetch(host).and_then(|body| {
            let parsed = ServiceTable::from_json_str(&body);
            last_body = Some(body);
            let table = parsed?;
            if table.is_empty() {
                log::debug!("{}: table has no service rows", source.label());
            } else {
                log::debug!("{}: {} service rows", source.label(), table.len());
            }
            aggregate(&table, filters, options, observer)
        });

        match attempt {
            Ok(result) => {
                return Ok(Collected {
                    aggregate: result,
                    source_label: source.label().to_string(),
                })
            }
            Err(e) if e.is_recoverable() => {
                log::warn!("{} failed: {}", source.label(), e);
                last_error = Some(e);
            }
            Err(e) => return Err(e),
        }
    }

    let reason = match last_error {
        Some(e) => e.to_string(),
        None => "no API source configured".to_string(),
    };
    Err(CheckError::AllSourcesFailed {
        reason,
        preview: last_body.map(|body| preview(&body)),
    })
}

/// First [`PREVIEW_CHARS`] characters of a body on one line
pub fn preview(body: &str) -> String {
    let flat: String = body
        .trim()
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect();
    if flat.chars().count() <= PREVIEW_CHARS {
        flat
    } else {
        let cut: String = flat.chars().take(PREVIEW_CHARS).collect();
        format!("{}...", cut)
    }
}
