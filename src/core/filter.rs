//! Include/exclude decisions for services and their perfdata.

use super::observer::{DecisionObserver, FilterList, SilentObserver};
use super::pattern::Pattern;
use crate::error::Result;

/// Pattern lists deciding which services are counted and which end up in perfdata.
///
/// Empty include lists include everything, empty exclude lists exclude nothing.
#[derive(Debug, Clone, Default)]
pub struct FilterSet {
    pub name_includes: Vec<Pattern>,
    pub output_includes: Vec<Pattern>,
    pub name_excludes: Vec<Pattern>,
    pub output_excludes: Vec<Pattern>,
    pub perf_includes: Vec<Pattern>,
    pub perf_excludes: Vec<Pattern>,
}

/// The six comma-separated pattern lists as given on the command line
#[derive(Debug, Clone, Default)]
pub struct FilterSpec {
    pub include_name: Option<String>,
    pub exclude_name: Option<String>,
    pub include_output: Option<String>,
    pub exclude_output: Option<String>,
    pub include_perf: Option<String>,
    pub exclude_perf: Option<String>,
}

impl FilterSet {
    pub fn from_spec(spec: &FilterSpec) -> Result<Self> {
        fn list(raw: &Option<String>) -> Result<Vec<Pattern>> {
            match raw {
                Some(raw) => Pattern::parse_list(raw),
                None => Ok(Vec::new()),
            }
        }

        Ok(Self {
            name_includes: list(&spec.include_name)?,
            output_includes: list(&spec.include_output)?,
            name_excludes: list(&spec.exclude_name)?,
            output_excludes: list(&spec.exclude_output)?,
            perf_includes: list(&spec.include_perf)?,
            perf_excludes: list(&spec.exclude_perf)?,
        })
    }

    pub fn is_included(&self, title: &str, output: &str) -> bool {
        self.is_included_observed(title, output, &SilentObserver)
    }

    pub fn is_excluded(&self, title: &str, output: &str) -> bool {
        self.is_excluded_observed(title, output, &SilentObserver)
    }

    pub fn is_perf_included(&self, title: &str) -> bool {
        self.is_perf_included_observed(title, &SilentObserver)
    }

    pub fn is_perf_excluded(&self, title: &str) -> bool {
        self.is_perf_excluded_observed(title, &SilentObserver)
    }

    pub fn is_included_observed(
        &self,
        title: &str,
        output: &str,
        observer: &dyn DecisionObserver,
    ) -> bool {
        if self.name_includes.is_empty() && self.output_includes.is_empty() {
            return true;
        }
        any_match(&self.name_includes, FilterList::NameInclude, title, observer)
            || any_match(&self.output_includes, FilterList::OutputInclude, output, observer)
    }

    pub fn is_excluded_observed(
        &self,
        title: &str,
        output: &str,
        observer: &dyn DecisionObserver,
    ) -> bool {
        any_match(&self.name_excludes, FilterList::NameExclude, title, observer)
            || any_match(&self.output_excludes, FilterList::OutputExclude, output, observer)
    }

    pub fn is_perf_included_observed(&self, title: &str, observer: &dyn DecisionObserver) -> bool {
        self.perf_includes.is_empty()
            || any_match(&self.perf_includes, FilterList::PerfInclude, title, observer)
    }

    pub fn is_perf_excluded_observed(&self, title: &str, observer: &dyn DecisionObserver) -> bool {
        any_match(&self.perf_excludes, FilterList::PerfExclude, title, observer)
    }

    /// Whether a service is counted, include first then exclude
    pub fn keeps(&self, title: &str, output: &str, observer: &dyn DecisionObserver) -> bool {
        let included = self.is_included_observed(title, output, observer);
        let excluded = included && self.is_excluded_observed(title, output, observer);
        observer.keep_decided(title, included, excluded);
        included && !excluded
    }

    /// Whether a kept service contributes a perfdata fragment
    pub fn keeps_perf(&self, title: &str, observer: &dyn DecisionObserver) -> bool {
        let included = self.is_perf_included_observed(title, observer);
        let excluded = included && self.is_perf_excluded_observed(title, observer);
        observer.perf_decided(title, included, excluded);
        included && !excluded
    }
}

fn any_match(
    patterns: &[Pattern],
    list: FilterList,
    value: &str,
    observer: &dyn DecisionObserver,
) -> bool {
    patterns.iter().any(|pattern| {
        let matched = pattern.matches(value);
        observer.pattern_tested(list, pattern, value, matched);
        matched
    })
}
