//! # Catalog Validation
//!
//! Walks a parsed [`Catalog`] and checks every semantic invariant, producing
//! an ordered [`ValidationReport`] of findings. Each finding carries a
//! severity, the JSON Pointer of the offending value, and a message.
//!
//! ## Severity Policy
//!
//! - **Error**: the catalog must be rejected. Malformed URLs and dates,
//!   non-positive GPS times, duplicate names, unit-constraint violations,
//!   negative display precision, non-finite numbers.
//! - **Warning**: non-standard but accepted. Unrecognized parameter names,
//!   detectors, and link content types; unconventional event names;
//!   schema-version drift; zero preferred PE sets; empty PE parameter
//!   lists; contradictory bound flags.
//!
//! The walk never fails fast: all findings for the whole document are
//! collected in one pass, in document order, so a submitter fixes every
//! problem in one iteration. Validation never mutates its input.

use std::collections::HashSet;
use std::fmt;

use gwcat_core::vocabulary::{
    classify_pe_parameter, classify_search_parameter, classify_unit, is_recognized_content_type,
    is_recognized_detector, NameStatus, UnitStatus,
};
use gwcat_core::{Catalog, Event, Link, ParameterSet, ParameterValue, SearchResult, SCHEMA_VERSION};
use once_cell::sync::Lazy;
use regex::Regex;

/// `GWyymmdd` or `GWyymmdd_hhmmss`.
static EVENT_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^GW\d{6}(_\d{6})?$").expect("event name pattern compiles"));

static RELEASE_DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("release date pattern compiles"));

/// Severity of a validation finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Schema-violating; the catalog must be rejected.
    Error,
    /// Non-standard but accepted.
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => f.write_str("error"),
            Severity::Warning => f.write_str("warning"),
        }
    }
}

/// A single validation finding with structured context.
#[derive(Debug, Clone)]
pub struct Finding {
    /// Severity of the finding.
    pub severity: Severity,
    /// JSON Pointer to the offending value in the document.
    pub path: String,
    /// Human-readable description of the problem.
    pub message: String,
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.severity, self.path, self.message)
    }
}

/// Ordered collection of findings for one validation pass.
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    findings: Vec<Finding>,
}

impl ValidationReport {
    /// All findings, in document order.
    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    /// Error-level findings only.
    pub fn errors(&self) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(|f| f.severity == Severity::Error)
    }

    /// Warning-level findings only.
    pub fn warnings(&self) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(|f| f.severity == Severity::Warning)
    }

    /// Number of error-level findings.
    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    /// Number of warning-level findings.
    pub fn warning_count(&self) -> usize {
        self.warnings().count()
    }

    /// True if the catalog passed: warnings allowed, errors not.
    pub fn is_valid(&self) -> bool {
        self.error_count() == 0
    }

    /// True if there are no findings at all.
    pub fn is_empty(&self) -> bool {
        self.findings.is_empty()
    }

    /// Consumes self and returns the inner Vec.
    pub fn into_inner(self) -> Vec<Finding> {
        self.findings
    }

    fn error(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.findings.push(Finding {
            severity: Severity::Error,
            path: path.into(),
            message: message.into(),
        });
    }

    fn warning(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.findings.push(Finding {
            severity: Severity::Warning,
            path: path.into(),
            message: message.into(),
        });
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, finding) in self.findings.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{finding}")?;
        }
        Ok(())
    }
}

/// Validate a catalog, collecting every finding in one pass.
pub fn validate(catalog: &Catalog) -> ValidationReport {
    let mut report = ValidationReport::default();
    check_root(catalog, &mut report);

    let mut seen_names: HashSet<&str> = HashSet::new();
    for (i, event) in catalog.events.iter().enumerate() {
        check_event(event, &format!("/events/{i}"), &mut seen_names, &mut report);
    }
    report
}

/// Parse a raw JSON value and validate it in one step.
///
/// Structural failures abort with a [`SchemaError`](gwcat_core::SchemaError)
/// before any semantic check runs.
pub fn validate_value(
    value: &serde_json::Value,
) -> Result<ValidationReport, gwcat_core::SchemaError> {
    let catalog = crate::parse::parse_value(value)?;
    Ok(validate(&catalog))
}

fn check_root(catalog: &Catalog, report: &mut ValidationReport) {
    if catalog.schema_version.is_empty() {
        report.error("/schema_version", "schema_version must be present and non-empty");
    } else if catalog.schema_version != SCHEMA_VERSION {
        report.warning(
            "/schema_version",
            format!(
                "schema_version `{}` differs from the current version `{SCHEMA_VERSION}`",
                catalog.schema_version
            ),
        );
    }

    check_url(&catalog.doi, "/doi", report);

    if !RELEASE_DATE_RE.is_match(&catalog.release_date) {
        report.error(
            "/release_date",
            format!("release_date `{}` is not in YYYY-MM-DD format", catalog.release_date),
        );
    } else if chrono::NaiveDate::parse_from_str(&catalog.release_date, "%Y-%m-%d").is_err() {
        report.error(
            "/release_date",
            format!("release_date `{}` is not a real calendar date", catalog.release_date),
        );
    }

    if catalog.events.is_empty() {
        report.error("/events", "catalog must contain at least one event");
    }
}

fn check_event<'a>(
    event: &'a Event,
    path: &str,
    seen_names: &mut HashSet<&'a str>,
    report: &mut ValidationReport,
) {
    if !EVENT_NAME_RE.is_match(&event.event_name) {
        report.warning(
            format!("{path}/event_name"),
            format!(
                "event name `{}` does not follow the GWyymmdd_hhmmss convention",
                event.event_name
            ),
        );
    }
    if !seen_names.insert(&event.event_name) {
        report.error(
            format!("{path}/event_name"),
            format!("duplicate event name `{}`", event.event_name),
        );
    }

    if !(event.gps > 0.0) {
        report.error(format!("{path}/gps"), format!("gps must be positive, got {}", event.gps));
    }

    for (i, detector) in event.detectors.iter().enumerate() {
        if detector.is_empty() {
            report.error(
                format!("{path}/detectors/{i}"),
                "detector name must be a non-empty string",
            );
        } else if !is_recognized_detector(detector) {
            report.warning(
                format!("{path}/detectors/{i}"),
                format!("unrecognized detector short name `{detector}`"),
            );
        }
    }

    for (i, result) in event.search.iter().enumerate() {
        check_search_result(result, &format!("{path}/search/{i}"), report);
    }

    let preferred = event.pe_sets.iter().filter(|p| p.is_preferred).count();
    if preferred > 1 {
        report.error(
            format!("{path}/pe_sets"),
            format!("{preferred} parameter sets are marked preferred; at most one is allowed"),
        );
    } else if preferred == 0 && !event.pe_sets.is_empty() {
        report.warning(format!("{path}/pe_sets"), "no parameter set is marked preferred");
    }

    for (i, pe_set) in event.pe_sets.iter().enumerate() {
        check_pe_set(pe_set, &format!("{path}/pe_sets/{i}"), report);
    }
}

fn check_search_result(result: &SearchResult, path: &str, report: &mut ValidationReport) {
    if result.pipeline_name.is_empty() {
        report.error(format!("{path}/pipeline_name"), "pipeline_name must be non-empty");
    }
    check_unique_parameter_names(&result.parameters, path, report);
    for (i, parameter) in result.parameters.iter().enumerate() {
        check_parameter(parameter, &format!("{path}/parameters/{i}"), Vocabulary::Search, report);
    }
}

fn check_pe_set(pe_set: &ParameterSet, path: &str, report: &mut ValidationReport) {
    if let Some(data_url) = &pe_set.data_url {
        check_url(data_url, &format!("{path}/data_url"), report);
    }
    if pe_set.parameters.is_empty() {
        report.warning(format!("{path}/parameters"), "parameter set has an empty parameter list");
    }
    check_unique_parameter_names(&pe_set.parameters, path, report);
    for (i, parameter) in pe_set.parameters.iter().enumerate() {
        check_parameter(
            parameter,
            &format!("{path}/parameters/{i}"),
            Vocabulary::ParameterEstimation,
            report,
        );
    }
    for (i, link) in pe_set.links.iter().enumerate() {
        check_link(link, &format!("{path}/links/{i}"), report);
    }
}

#[derive(Clone, Copy)]
enum Vocabulary {
    Search,
    ParameterEstimation,
}

fn check_parameter(
    parameter: &ParameterValue,
    path: &str,
    vocabulary: Vocabulary,
    report: &mut ValidationReport,
) {
    let name = parameter.parameter_name.as_str();
    let status = match vocabulary {
        Vocabulary::Search => classify_search_parameter(name),
        Vocabulary::ParameterEstimation => classify_pe_parameter(name),
    };
    if status == NameStatus::Unrecognized {
        report.warning(
            format!("{path}/parameter_name"),
            format!("unrecognized parameter name `{name}`"),
        );
    }

    if !parameter.median.is_finite() {
        report.error(format!("{path}/median"), "median must be a finite number");
    }
    for (key, value) in [("upper_95", parameter.upper_95), ("lower_05", parameter.lower_05)] {
        if let Some(v) = value {
            if !v.is_finite() {
                report.error(format!("{path}/{key}"), "error bar must be a finite number");
            } else if v < 0.0 {
                report.error(
                    format!("{path}/{key}"),
                    format!("error bar must be non-negative, got {v}"),
                );
            }
        }
    }

    if parameter.is_upper_bound && parameter.is_lower_bound {
        report.warning(path, "is_upper_bound and is_lower_bound are both set");
    }

    if parameter.decimal_places < 0 {
        report.error(
            format!("{path}/decimal_places"),
            format!("decimal_places must be >= 0, got {}", parameter.decimal_places),
        );
    }

    if let UnitStatus::Mismatch { allowed } = classify_unit(name, parameter.unit.as_deref()) {
        let got = parameter.unit.as_deref().unwrap_or("none");
        report.error(
            format!("{path}/unit"),
            format!("parameter `{name}` requires unit to be one of {allowed:?}, got `{got}`"),
        );
    }
}

fn check_link(link: &Link, path: &str, report: &mut ValidationReport) {
    check_url(&link.url, &format!("{path}/url"), report);
    if !is_recognized_content_type(&link.content_type) {
        report.warning(
            format!("{path}/content_type"),
            format!("unrecognized content type `{}`", link.content_type),
        );
    }
}

fn check_unique_parameter_names(
    parameters: &[ParameterValue],
    path: &str,
    report: &mut ValidationReport,
) {
    let mut seen: HashSet<&str> = HashSet::new();
    for (i, parameter) in parameters.iter().enumerate() {
        if !seen.insert(&parameter.parameter_name) {
            report.error(
                format!("{path}/parameters/{i}/parameter_name"),
                format!("duplicate parameter name `{}`", parameter.parameter_name),
            );
        }
    }
}

fn check_url(candidate: &str, path: &str, report: &mut ValidationReport) {
    if let Err(e) = url::Url::parse(candidate) {
        report.error(path, format!("`{candidate}` is not a valid URL: {e}"));
    }
}
