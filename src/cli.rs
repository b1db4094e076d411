use clap::{Arg, ArgAction, ArgMatches, Command};
use std::path::PathBuf;

use crate::core::config::ConnectionOverrides;
use crate::core::filter::FilterSpec;

const AFTER_HELP: &str = "\
Patterns:
    Pattern lists are comma separated. A pattern written as /.../ is a regular
    expression searched anywhere in the value, anything else is a case-sensitive
    shell glob (* and ?) matched against the whole value.

    Include patterns are applied first, then exclude patterns. A service is
    included if its name or its output matches an include pattern; it is then
    dropped if its name or its output matches an exclude pattern.

Examples:
    check_cmk_services -H web01 -S https://monitor.example.com/mysite -t TOKEN
    check_cmk_services -H web01 -u automation -s SECRET -v -D --exclude-name 'Filesystem /boot'
    check_cmk_services -H db01 -P --include-perf '/^Oracle/'";

pub fn build_cli() -> Command {
    Command::new("check_cmk_services")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Report the aggregated service states of a Check_MK host")
        .after_help(AFTER_HELP)
        .arg(
            Arg::new("host")
                .short('H')
                .long("host")
                .value_name("HOST")
                .help("Host name as known to Check_MK")
                .required(true),
        )
        .arg(
            Arg::new("site-url")
                .short('S')
                .long("site-url")
                .value_name("URL")
                .help("Site URL, e.g. https://monitor.example.com/mysite"),
        )
        .arg(
            Arg::new("token")
                .short('t')
                .long("token")
                .value_name("TOKEN")
                .help("API token sent as bearer credentials"),
        )
        .arg(
            Arg::new("user")
                .short('u')
                .long("user")
                .value_name("USER")
                .help("Automation user name"),
        )
        .arg(
            Arg::new("secret")
                .short('s')
                .long("secret")
                .value_name("SECRET")
                .help("Automation user secret"),
        )
        .arg(
            Arg::new("insecure")
                .short('k')
                .long("insecure")
                .help("Do not verify the site's TLS certificate")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("timeout")
                .short('T')
                .long("timeout")
                .value_name("SECONDS")
                .help("Timeout of each API request [default: 10]")
                .value_parser(clap::value_parser!(u64)),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("JSON file with site_url, token, user, secret, insecure, timeout_secs")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("List every service below the status line")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("detail")
                .short('D')
                .long("detail")
                .help("Add the plugin output to each listed service (with --verbose)")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("debug")
                .short('d')
                .long("debug")
                .help("Trace requests and filter decisions on stderr")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("perfdata")
                .short('p')
                .long("perfdata")
                .help("Add per-service performance data")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("perfdata-only")
                .short('P')
                .long("perfdata-only")
                .help("Print only performance data, including per-service data, and always exit OK")
                .action(ArgAction::SetTrue),
        )
        .arg(pattern_arg("include-name", "Only count services whose name matches"))
        .arg(pattern_arg("exclude-name", "Do not count services whose name matches"))
        .arg(pattern_arg("include-output", "Only count services whose output matches"))
        .arg(pattern_arg("exclude-output", "Do not count services whose output matches"))
        .arg(pattern_arg("include-perf", "Only add perfdata for services whose name matches"))
        .arg(pattern_arg("exclude-perf", "Do not add perfdata for services whose name matches"))
}

fn pattern_arg(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name)
        .long(name)
        .value_name("PATTERNS")
        .help(help)
}

/// Everything a check run needs from the command line
#[derive(Debug, Clone, Default)]
pub struct CheckArgs {
    pub host: String,
    pub config_path: Option<PathBuf>,
    pub connection: ConnectionOverrides,
    pub verbose: bool,
    pub detail: bool,
    pub debug: bool,
    pub perfdata: bool,
    pub perfdata_only: bool,
    pub filters: FilterSpec,
}

impl CheckArgs {
    pub fn from_matches(matches: &ArgMatches) -> Self {
        let text = |name: &str| matches.get_one::<String>(name).cloned();

        Self {
            host: text("host").unwrap_or_default().trim().to_string(),
            config_path: matches.get_one::<PathBuf>("config").cloned(),
            connection: ConnectionOverrides {
                site_url: text("site-url"),
                token: text("token"),
                user: text("user"),
                secret: text("secret"),
                insecure: matches.get_flag("insecure"),
                timeout_secs: matches.get_one::<u64>("timeout").copied(),
            },
            verbose: matches.get_flag("verbose"),
            detail: matches.get_flag("detail"),
            debug: matches.get_flag("debug"),
            perfdata: matches.get_flag("perfdata"),
            perfdata_only: matches.get_flag("perfdata-only"),
            filters: FilterSpec {
                include_name: text("include-name"),
                exclude_name: text("exclude-name"),
                include_output: text("include-output"),
                exclude_output: text("exclude-output"),
                include_perf: text("include-perf"),
                exclude_perf: text("exclude-perf"),
            },
        }
    }
}
