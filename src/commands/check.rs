use anyhow::{Context, Result};

use crate::api::{self, ServiceSource};
use crate::cli::CheckArgs;
use crate::core::aggregate::AggregateOptions;
use crate::core::config::{Config, ConnectionSettings};
use crate::core::filter::FilterSet;
use crate::core::observer::{DecisionObserver, LogObserver, SilentObserver};
use crate::core::runner;
use crate::error::CheckError;
use crate::ui::{render, render_error, render_failure, RenderOptions, Rendered};

/// Run the check against the configured site and produce the plugin output.
///
/// Never fails: every error is turned into an UNKNOWN result.
pub fn execute(args: &CheckArgs) -> Rendered {
    let prepared = prepare(args);
    match prepared {
        Ok((settings, filters)) => match api::default_sources(&settings) {
            Ok(sources) => run(args, &sources, &filters),
            Err(e) => render_error(&e.to_string()),
        },
        Err(e) => render_error(&format!("{:#}", e)),
    }
}

fn prepare(args: &CheckArgs) -> Result<(ConnectionSettings, FilterSet)> {
    if args.host.is_empty() {
        return Err(CheckError::usage("--host must not be empty").into());
    }

    let filters = FilterSet::from_spec(&args.filters)?;

    let config = Config::load(args.config_path.as_deref())
        .context("Failed to load configuration")?;
    let settings = ConnectionSettings::resolve(config, args.connection.clone())?;
    log::debug!("connection settings: {:?}", settings);

    Ok((settings, filters))
}

/// Run the check against explicit sources, primary first
pub fn run(args: &CheckArgs, sources: &[Box<dyn ServiceSource>], filters: &FilterSet) -> Rendered {
    let observer: &dyn DecisionObserver = if args.debug {
        &LogObserver
    } else {
        &SilentObserver
    };

    let options = AggregateOptions {
        verbose: args.verbose,
        detail: args.detail,
        collect_perf: args.perfdata || args.perfdata_only,
    };

    match runner::collect(sources, &args.host, filters, options, observer) {
        Ok(collected) => render(
            &collected.aggregate,
            &RenderOptions {
                perfdata_only: args.perfdata_only,
                include_perf: args.perfdata || args.perfdata_only,
                verbose: args.verbose,
                source_label: format!("{} via {}", args.host, collected.source_label),
            },
        ),
        Err(CheckError::AllSourcesFailed { reason, preview }) => {
            render_failure(&args.host, &reason, preview.as_deref())
        }
        Err(e) => render_error(&e.to_string()),
    }
}
