//! # Deterministic Catalog Serialization
//!
//! Renders the typed record tree back to the canonical JSON representation.
//! Key order follows the schema's documented order (the records declare
//! their fields in that order and `serde_json` preserves it), arrays keep
//! input order, and optional fields at their default are omitted. Parsing
//! the output reproduces the original record tree field for field.

use std::path::Path;

use gwcat_core::{Catalog, SchemaError};
use serde_json::Value;

/// Convert a catalog to its canonical JSON value.
///
/// Non-finite floats have no JSON representation and render as `null`;
/// the validator reports them as errors before a catalog gets this far.
pub fn to_value(catalog: &Catalog) -> Result<Value, SchemaError> {
    Ok(serde_json::to_value(catalog)?)
}

/// Render a catalog as pretty-printed canonical JSON.
pub fn to_string_pretty(catalog: &Catalog) -> Result<String, SchemaError> {
    Ok(serde_json::to_string_pretty(catalog)?)
}

/// Write a catalog to a UTF-8 JSON file, pretty-printed.
pub fn write_file(catalog: &Catalog, path: &Path) -> Result<(), SchemaError> {
    let rendered = to_string_pretty(catalog)?;
    std::fs::write(path, rendered)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use gwcat_core::{Event, ParameterValue};

    fn catalog() -> Catalog {
        Catalog {
            schema_version: "0.1.0".to_string(),
            catalog_name: "demo".to_string(),
            catalog_description: "a demo catalog".to_string(),
            doi: "https://doi.org/10.0/demo".to_string(),
            release_date: "2026-01-15".to_string(),
            events: vec![Event {
                event_name: "GW250114_120000".to_string(),
                gps: 1_420_804_818.0,
                event_description: None,
                gracedb_id: None,
                detectors: vec!["H1".to_string()],
                search: vec![],
                pe_sets: vec![],
            }],
        }
    }

    #[test]
    fn test_top_level_key_order() {
        let value = to_value(&catalog()).unwrap();
        let keys: Vec<&str> = value.as_object().unwrap().keys().map(|k| k.as_str()).collect();
        assert_eq!(
            keys,
            ["schema_version", "catalog_name", "catalog_description", "doi", "release_date", "events"]
        );
    }

    #[test]
    fn test_defaults_omitted() {
        let value = to_value(&catalog()).unwrap();
        let event = &value["events"][0];
        assert!(event.get("event_description").is_none());
        assert!(event.get("gracedb_id").is_none());
    }

    #[test]
    fn test_serialization_is_deterministic() {
        let a = to_string_pretty(&catalog()).unwrap();
        let b = to_string_pretty(&catalog()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_parameter_key_order() {
        let mut c = catalog();
        c.events[0].pe_sets.push(gwcat_core::ParameterSet {
            pe_set_name: "combined".to_string(),
            waveform_family: "IMRPhenomXPHM".to_string(),
            data_url: None,
            is_preferred: true,
            parameters: vec![ParameterValue {
                parameter_name: "mass_1_source".to_string(),
                median: 10.0,
                upper_95: Some(0.3),
                lower_05: Some(0.2),
                is_upper_bound: false,
                is_lower_bound: false,
                decimal_places: 1,
                unit: Some("Msun".to_string()),
            }],
            links: vec![],
        });
        let value = to_value(&c).unwrap();
        let param = &value["events"][0]["pe_sets"][0]["parameters"][0];
        let keys: Vec<&str> = param.as_object().unwrap().keys().map(|k| k.as_str()).collect();
        assert_eq!(
            keys,
            ["parameter_name", "median", "upper_95", "lower_05", "decimal_places", "unit"]
        );
    }

    #[test]
    fn test_write_file_round_trips() {
        let dir = std::env::temp_dir();
        let path = dir.join("gwcat_serialize_test.json");
        write_file(&catalog(), &path).unwrap();
        let raw = std::fs::read_to_string(&path).unwrap();
        let parsed = crate::parse::parse_str(&raw).unwrap();
        assert_eq!(parsed, catalog());
        let _ = std::fs::remove_file(&path);
    }
}
