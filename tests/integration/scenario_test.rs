use check_cmk_services::api::ServiceSource;
use check_cmk_services::cli::CheckArgs;
use check_cmk_services::commands::check::run;
use check_cmk_services::core::filter::{FilterSet, FilterSpec};
use check_cmk_services::{CheckError, Result, Status};

const SSH_AND_LOAD: &str = r#"[
    ["service_description", "service_state", "svc_plugin_output"],
    ["SSH", "OK", "SSH OK"],
    ["Load", "WARN", "15min load high"]
]"#;

const CPU_AND_MEMORY: &str = r#"[
    ["service_description", "service_state"],
    ["CPU load", "OK"],
    ["Memory", "OK"]
]"#;

struct StaticSource {
    label: &'static str,
    body: Option<&'static str>,
}

impl ServiceSource for StaticSource {
    fn label(&self) -> &str {
        self.label
    }

    fn fetch(&self, _host: &str) -> Result<String> {
        self.body
            .map(str::to_string)
            .ok_or_else(|| CheckError::fetch("connection refused"))
    }
}

fn sources(primary: Option<&'static str>, fallback: Option<&'static str>) -> Vec<Box<dyn ServiceSource>> {
    vec![
        Box::new(StaticSource {
            label: "view.py",
            body: primary,
        }),
        Box::new(StaticSource {
            label: "view.py legacy",
            body: fallback,
        }),
    ]
}

fn args(filters: FilterSpec) -> CheckArgs {
    CheckArgs {
        host: "web01".into(),
        filters,
        ..Default::default()
    }
}

fn filter_set(args: &CheckArgs) -> FilterSet {
    FilterSet::from_spec(&args.filters).unwrap()
}

#[test]
fn test_warning_with_verbose_detail() {
    let args = CheckArgs {
        verbose: true,
        detail: true,
        ..args(FilterSpec::default())
    };
    let rendered = run(&args, &sources(Some(SSH_AND_LOAD), None), &filter_set(&args));

    assert_eq!(rendered.status, Status::Warning);
    assert_eq!(rendered.exit_code(), 1);
    assert_eq!(
        rendered.status_line,
        "[WARNING] - 1 warning services (web01 via view.py) | total=2 ok=1 warning=1 critical=0 unknown=0"
    );
    assert_eq!(
        rendered.details,
        vec!["[WARNING]: Load - 15min load high", "[OK]: SSH - SSH OK"]
    );
}

#[test]
fn test_name_exclude_drops_from_counts() {
    let args = args(FilterSpec {
        exclude_name: Some("SSH".into()),
        ..Default::default()
    });
    let rendered = run(&args, &sources(Some(SSH_AND_LOAD), None), &filter_set(&args));

    assert_eq!(
        rendered.status_line,
        "[WARNING] - 1 warning services (web01 via view.py) | total=1 ok=0 warning=1 critical=0 unknown=0"
    );
}

#[test]
fn test_no_match_anywhere_is_unknown() {
    let args = args(FilterSpec {
        include_name: Some("/^CPU/".into()),
        ..Default::default()
    });
    let rendered = run(
        &args,
        &sources(Some(SSH_AND_LOAD), Some(SSH_AND_LOAD)),
        &filter_set(&args),
    );

    assert_eq!(rendered.status, Status::Unknown);
    assert_eq!(rendered.exit_code(), 3);
    assert_eq!(
        rendered.status_line,
        "[UNKNOWN] - No service data for host 'web01': No services matched the given filters"
    );
    assert_eq!(rendered.details.len(), 1);
    assert!(rendered.details[0].starts_with("Last response: ["));
}

#[test]
fn test_perfdata_only_keeps_title_spaces() {
    let args = CheckArgs {
        perfdata_only: true,
        ..args(FilterSpec {
            include_perf: Some("CPU*".into()),
            ..Default::default()
        })
    };
    let rendered = run(&args, &sources(Some(CPU_AND_MEMORY), None), &filter_set(&args));

    assert_eq!(rendered.exit_code(), 0);
    assert_eq!(
        rendered.text(),
        "total=2 ok=2 warning=0 critical=0 unknown=0 CPU load=0"
    );
}

#[test]
fn test_perfdata_only_exits_ok_on_critical() {
    const CRITICAL: &str = r#"[
        ["service_description", "service_state"],
        ["Disk", "CRIT"]
    ]"#;
    let args = CheckArgs {
        perfdata_only: true,
        ..args(FilterSpec::default())
    };
    let rendered = run(&args, &sources(Some(CRITICAL), None), &filter_set(&args));

    assert_eq!(rendered.exit_code(), 0);
    assert_eq!(rendered.text(), "total=1 ok=0 warning=0 critical=1 unknown=0 Disk=2");
}

#[test]
fn test_perf_exclude_does_not_affect_counts_or_details() {
    let args = CheckArgs {
        verbose: true,
        perfdata: true,
        ..args(FilterSpec {
            exclude_perf: Some("SSH".into()),
            ..Default::default()
        })
    };
    let rendered = run(&args, &sources(Some(SSH_AND_LOAD), None), &filter_set(&args));

    assert!(rendered.status_line.ends_with("unknown=0 Load=1"));
    assert_eq!(rendered.details, vec!["[WARNING]: Load", "[OK]: SSH"]);
}

#[test]
fn test_fallback_label_in_status_line() {
    let args = args(FilterSpec::default());
    let rendered = run(&args, &sources(None, Some(CPU_AND_MEMORY)), &filter_set(&args));

    assert_eq!(
        rendered.status_line,
        "[OK] - All 2 services OK (web01 via view.py legacy) | total=2 ok=2 warning=0 critical=0 unknown=0"
    );
}

#[test]
fn test_both_sources_unreachable() {
    let args = args(FilterSpec::default());
    let rendered = run(&args, &sources(None, None), &filter_set(&args));

    assert_eq!(rendered.exit_code(), 3);
    assert_eq!(
        rendered.status_line,
        "[UNKNOWN] - No service data for host 'web01': Fetch failed: connection refused"
    );
    assert!(rendered.details.is_empty());
}
