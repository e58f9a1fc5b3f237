//! # Tolerant Catalog Parsing
//!
//! Converts a raw `serde_json::Value` into the typed record tree with
//! explicit per-field presence and type checks. Every [`SchemaError`]
//! carries the JSON Pointer of the offending key.
//!
//! ## Forward Compatibility
//!
//! Unknown keys anywhere in the document are ignored, never rejected, so
//! documents written against newer schema versions still parse. Absent
//! optional keys map to their documented defaults (`is_preferred` → false,
//! `links` → empty, etc.). A missing *required* key or a value of the wrong
//! primitive type is fatal: parsing aborts before validation runs.

use gwcat_core::{Catalog, Event, Link, ParameterSet, ParameterValue, SchemaError, SearchResult};
use serde_json::{Map, Value};

/// Parse a catalog from a JSON string.
pub fn parse_str(input: &str) -> Result<Catalog, SchemaError> {
    let value: Value = serde_json::from_str(input)?;
    parse_value(&value)
}

/// Parse a catalog from JSON bytes.
pub fn parse_slice(input: &[u8]) -> Result<Catalog, SchemaError> {
    let value: Value = serde_json::from_slice(input)?;
    parse_value(&value)
}

/// Parse a catalog from an already-parsed JSON value.
pub fn parse_value(value: &Value) -> Result<Catalog, SchemaError> {
    let map = as_object(value, "")?;
    let events = req_records(map, "", "events", parse_event)?;
    Ok(Catalog {
        schema_version: opt_string(map, "", "schema_version")?.unwrap_or_default(),
        catalog_name: req_string(map, "", "catalog_name")?,
        catalog_description: req_string(map, "", "catalog_description")?,
        doi: req_string(map, "", "doi")?,
        release_date: req_string(map, "", "release_date")?,
        events,
    })
}

fn parse_event(value: &Value, path: &str) -> Result<Event, SchemaError> {
    let map = as_object(value, path)?;
    Ok(Event {
        event_name: req_string(map, path, "event_name")?,
        gps: req_f64(map, path, "gps")?,
        event_description: opt_string(map, path, "event_description")?,
        gracedb_id: opt_string(map, path, "gracedb_id")?,
        detectors: opt_string_array(map, path, "detectors")?,
        search: opt_records(map, path, "search", parse_search_result)?,
        pe_sets: opt_records(map, path, "pe_sets", parse_pe_set)?,
    })
}

fn parse_search_result(value: &Value, path: &str) -> Result<SearchResult, SchemaError> {
    let map = as_object(value, path)?;
    Ok(SearchResult {
        pipeline_name: req_string(map, path, "pipeline_name")?,
        parameters: req_records(map, path, "parameters", parse_parameter)?,
    })
}

fn parse_pe_set(value: &Value, path: &str) -> Result<ParameterSet, SchemaError> {
    let map = as_object(value, path)?;
    Ok(ParameterSet {
        pe_set_name: req_string(map, path, "pe_set_name")?,
        waveform_family: req_string(map, path, "waveform_family")?,
        data_url: opt_string(map, path, "data_url")?,
        is_preferred: opt_bool(map, path, "is_preferred")?,
        parameters: req_records(map, path, "parameters", parse_parameter)?,
        links: opt_records(map, path, "links", parse_link)?,
    })
}

fn parse_parameter(value: &Value, path: &str) -> Result<ParameterValue, SchemaError> {
    let map = as_object(value, path)?;
    Ok(ParameterValue {
        parameter_name: req_string(map, path, "parameter_name")?,
        median: req_f64(map, path, "median")?,
        upper_95: opt_f64(map, path, "upper_95")?,
        lower_05: opt_f64(map, path, "lower_05")?,
        is_upper_bound: opt_bool(map, path, "is_upper_bound")?,
        is_lower_bound: opt_bool(map, path, "is_lower_bound")?,
        decimal_places: req_i32(map, path, "decimal_places")?,
        unit: opt_string(map, path, "unit")?,
    })
}

fn parse_link(value: &Value, path: &str) -> Result<Link, SchemaError> {
    let map = as_object(value, path)?;
    Ok(Link {
        url: req_string(map, path, "url")?,
        content_type: req_string(map, path, "content_type")?,
        description: opt_string(map, path, "description")?,
    })
}

// ---- field extraction helpers ----

fn at(path: &str) -> String {
    if path.is_empty() {
        "(root)".to_string()
    } else {
        path.to_string()
    }
}

fn child(path: &str, key: &str) -> String {
    format!("{path}/{key}")
}

fn as_object<'a>(value: &'a Value, path: &str) -> Result<&'a Map<String, Value>, SchemaError> {
    value.as_object().ok_or_else(|| SchemaError::TypeMismatch {
        path: at(path),
        expected: "a JSON object",
    })
}

fn require<'a>(
    map: &'a Map<String, Value>,
    path: &str,
    key: &'static str,
) -> Result<&'a Value, SchemaError> {
    map.get(key).ok_or_else(|| SchemaError::MissingKey { path: at(path), key })
}

fn req_string(
    map: &Map<String, Value>,
    path: &str,
    key: &'static str,
) -> Result<String, SchemaError> {
    require(map, path, key)?
        .as_str()
        .map(str::to_owned)
        .ok_or_else(|| SchemaError::TypeMismatch {
            path: child(path, key),
            expected: "a string",
        })
}

fn opt_string(
    map: &Map<String, Value>,
    path: &str,
    key: &'static str,
) -> Result<Option<String>, SchemaError> {
    match map.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(SchemaError::TypeMismatch {
            path: child(path, key),
            expected: "a string or null",
        }),
    }
}

fn req_f64(map: &Map<String, Value>, path: &str, key: &'static str) -> Result<f64, SchemaError> {
    require(map, path, key)?
        .as_f64()
        .ok_or_else(|| SchemaError::TypeMismatch {
            path: child(path, key),
            expected: "a number",
        })
}

fn opt_f64(
    map: &Map<String, Value>,
    path: &str,
    key: &'static str,
) -> Result<Option<f64>, SchemaError> {
    match map.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(v) => v.as_f64().map(Some).ok_or_else(|| SchemaError::TypeMismatch {
            path: child(path, key),
            expected: "a number or null",
        }),
    }
}

fn req_i32(map: &Map<String, Value>, path: &str, key: &'static str) -> Result<i32, SchemaError> {
    let mismatch = || SchemaError::TypeMismatch {
        path: child(path, key),
        expected: "an integer",
    };
    let value = require(map, path, key)?.as_i64().ok_or_else(mismatch)?;
    i32::try_from(value).map_err(|_| mismatch())
}

fn opt_bool(map: &Map<String, Value>, path: &str, key: &'static str) -> Result<bool, SchemaError> {
    match map.get(key) {
        None | Some(Value::Null) => Ok(false),
        Some(Value::Bool(b)) => Ok(*b),
        Some(_) => Err(SchemaError::TypeMismatch {
            path: child(path, key),
            expected: "a boolean",
        }),
    }
}

fn opt_string_array(
    map: &Map<String, Value>,
    path: &str,
    key: &'static str,
) -> Result<Vec<String>, SchemaError> {
    let items = match map.get(key) {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(Value::Array(items)) => items,
        Some(_) => {
            return Err(SchemaError::TypeMismatch {
                path: child(path, key),
                expected: "an array of strings",
            })
        }
    };
    items
        .iter()
        .enumerate()
        .map(|(i, v)| {
            v.as_str().map(str::to_owned).ok_or_else(|| SchemaError::TypeMismatch {
                path: format!("{path}/{key}/{i}"),
                expected: "a string",
            })
        })
        .collect()
}

fn req_records<T>(
    map: &Map<String, Value>,
    path: &str,
    key: &'static str,
    parse_one: fn(&Value, &str) -> Result<T, SchemaError>,
) -> Result<Vec<T>, SchemaError> {
    let value = require(map, path, key)?;
    parse_records(value, &child(path, key), parse_one)
}

fn opt_records<T>(
    map: &Map<String, Value>,
    path: &str,
    key: &'static str,
    parse_one: fn(&Value, &str) -> Result<T, SchemaError>,
) -> Result<Vec<T>, SchemaError> {
    match map.get(key) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(value) => parse_records(value, &child(path, key), parse_one),
    }
}

fn parse_records<T>(
    value: &Value,
    path: &str,
    parse_one: fn(&Value, &str) -> Result<T, SchemaError>,
) -> Result<Vec<T>, SchemaError> {
    let items = value.as_array().ok_or_else(|| SchemaError::TypeMismatch {
        path: at(path),
        expected: "an array",
    })?;
    items
        .iter()
        .enumerate()
        .map(|(i, item)| parse_one(item, &format!("{path}/{i}")))
        .collect()
}
