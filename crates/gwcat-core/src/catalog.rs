//! # Catalog Records — Typed Data Model
//!
//! Defines the record tree for a community catalog submission:
//!
//! ```text
//! Catalog
//! └── Event (one or more)
//!     ├── SearchResult (zero or more) ── ParameterValue*
//!     └── ParameterSet (zero or more) ── ParameterValue*, Link*
//! ```
//!
//! Ownership is a strict tree: the `Catalog` owns its `Event`s, each event
//! owns its search results and PE sets, and those own their parameter values
//! and links. No sharing, no back-pointers — validation only ever walks
//! root-to-leaf.
//!
//! All records are immutable value aggregates: construct once (from JSON,
//! programmatically, or via [`ParameterSet::from_samples`]), never mutate.
//! An "edit" is a reconstruction.
//!
//! ## Serialization
//!
//! Records derive `Serialize` with fields declared in canonical schema
//! order, so `serde_json` output is deterministic. Optional fields at their
//! default (absent strings, `false` flags, empty link lists) are omitted.
//! Deserialization is hand-rolled in `gwcat-schema` with explicit per-field
//! presence checks; it maps absence back to these defaults, so the typed
//! graph round-trips exactly.

use serde::Serialize;

fn is_false(v: &bool) -> bool {
    !*v
}

/// Root record of a catalog submission.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Catalog {
    /// Version of the schema this document was written against.
    pub schema_version: String,
    /// Name of the catalog.
    pub catalog_name: String,
    /// Free-text description of the catalog.
    pub catalog_description: String,
    /// Full URL of the publication DOI for this catalog.
    pub doi: String,
    /// Public release date, `YYYY-MM-DD`.
    pub release_date: String,
    /// Events in the catalog. Must be non-empty; event names must be unique.
    pub events: Vec<Event>,
}

impl Catalog {
    /// Look up an event by name.
    pub fn event(&self, event_name: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.event_name == event_name)
    }
}

/// One detection, with its search significances and parameter estimations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Event {
    /// Event name, conventionally `GWyymmdd_hhmmss`. Freeform names are
    /// tolerated (the validator downgrades mismatches to a warning).
    pub event_name: String,
    /// GPS time of the detection, in seconds. Geocenter times preferred.
    pub gps: f64,
    /// Optional user notes shown on the event detail view.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_description: Option<String>,
    /// Associated GraceDB superevent ID, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gracedb_id: Option<String>,
    /// Detectors whose strain data is publicly released for this event.
    /// May be empty for groups without detector access.
    pub detectors: Vec<String>,
    /// Per-pipeline search significances. May be empty.
    pub search: Vec<SearchResult>,
    /// Parameter-estimation result sets. May be empty; at most one may be
    /// marked preferred.
    pub pe_sets: Vec<ParameterSet>,
}

impl Event {
    /// Returns the PE set marked preferred, if exactly one exists.
    pub fn preferred_pe_set(&self) -> Option<&ParameterSet> {
        let mut preferred = self.pe_sets.iter().filter(|p| p.is_preferred);
        let first = preferred.next()?;
        match preferred.next() {
            Some(_) => None,
            None => Some(first),
        }
    }
}

/// Significance summary produced by one search pipeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult {
    /// Name of the search pipeline (e.g., `pycbc`).
    pub pipeline_name: String,
    /// Significance statistics: `far`, `p_astro`, `snr`, etc.
    /// Parameter names must be unique within this result.
    pub parameters: Vec<ParameterValue>,
}

/// Summary of a single parameter-estimation run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParameterSet {
    /// Name of the PE pipeline or configuration that produced this set.
    pub pe_set_name: String,
    /// Waveform approximant used for this set.
    pub waveform_family: String,
    /// URL of the source data for this analysis, typically a posterior
    /// sample file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_url: Option<String>,
    /// Marks this set as the one shown on the event list view.
    #[serde(skip_serializing_if = "is_false")]
    pub is_preferred: bool,
    /// Estimated parameters: `mass_1_source`, `chirp_mass`, etc.
    /// Parameter names must be unique within this set.
    pub parameters: Vec<ParameterValue>,
    /// Links to external resources (skymaps, documentation).
    /// For posterior samples, use `data_url` instead.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<Link>,
}

/// Measurement summary for a single parameter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParameterValue {
    /// Parameter name, checked against the recognized vocabularies.
    pub parameter_name: String,
    /// Point estimate, usually the posterior median.
    pub median: f64,
    /// Size of the upper error bar of the credible region. Non-negative.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upper_95: Option<f64>,
    /// Size of the lower error bar of the credible region. Non-negative.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lower_05: Option<f64>,
    /// True if the value is an upper bound; displayed with a `<` sign.
    #[serde(skip_serializing_if = "is_false")]
    pub is_upper_bound: bool,
    /// True if the value is a lower bound; displayed with a `>` sign.
    #[serde(skip_serializing_if = "is_false")]
    pub is_lower_bound: bool,
    /// Number of decimal places to display. Must be >= 0.
    pub decimal_places: i32,
    /// Physical unit of the value. `None` means dimensionless.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

/// Link to an external resource such as a skymap or documentation page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Link {
    /// URL of the resource.
    pub url: String,
    /// Resource type: `posterior_samples`, `skymap`, `documentation`, or a
    /// custom value (which the validator flags with a warning).
    pub content_type: String,
    /// Brief description of the resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
