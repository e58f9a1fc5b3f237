//! Property test: any in-memory catalog survives serialize → parse intact,
//! field for field, after accounting for default omission.

use gwcat_core::{Catalog, Event, Link, ParameterSet, ParameterValue, SearchResult};
use proptest::collection::vec;
use proptest::option;
use proptest::prelude::*;

fn parameter_value() -> impl Strategy<Value = ParameterValue> {
    (
        "[a-z_]{1,12}",
        -1.0e6..1.0e6f64,
        option::of(0.0..100.0f64),
        option::of(0.0..100.0f64),
        any::<bool>(),
        any::<bool>(),
        0..6i32,
        option::of("[A-Za-z/_]{1,6}"),
    )
        .prop_map(
            |(parameter_name, median, upper_95, lower_05, is_upper_bound, is_lower_bound, decimal_places, unit)| {
                ParameterValue {
                    parameter_name,
                    median,
                    upper_95,
                    lower_05,
                    is_upper_bound,
                    is_lower_bound,
                    decimal_places,
                    unit,
                }
            },
        )
}

fn link() -> impl Strategy<Value = Link> {
    ("[a-z]{3,8}", "[a-z_]{3,12}", option::of("[a-z ]{1,20}")).prop_map(
        |(slug, content_type, description)| Link {
            url: format!("https://example.org/{slug}"),
            content_type,
            description,
        },
    )
}

fn search_result() -> impl Strategy<Value = SearchResult> {
    ("[a-z]{1,8}", vec(parameter_value(), 0..4))
        .prop_map(|(pipeline_name, parameters)| SearchResult { pipeline_name, parameters })
}

fn pe_set() -> impl Strategy<Value = ParameterSet> {
    (
        "[a-z]{1,10}",
        "[A-Za-z0-9]{1,12}",
        option::of("[a-z]{3,8}".prop_map(|s| format!("https://zenodo.org/{s}"))),
        any::<bool>(),
        vec(parameter_value(), 0..4),
        vec(link(), 0..3),
    )
        .prop_map(
            |(pe_set_name, waveform_family, data_url, is_preferred, parameters, links)| {
                ParameterSet {
                    pe_set_name,
                    waveform_family,
                    data_url,
                    is_preferred,
                    parameters,
                    links,
                }
            },
        )
}

fn event() -> impl Strategy<Value = Event> {
    (
        "GW[0-9]{6}_[0-9]{6}",
        1.0..2.0e9f64,
        option::of("[a-z ]{1,30}"),
        option::of("S[0-9]{6}[a-z]{2}"),
        vec("[A-Z][0-9]", 0..4),
        vec(search_result(), 0..3),
        vec(pe_set(), 0..3),
    )
        .prop_map(
            |(event_name, gps, event_description, gracedb_id, detectors, search, pe_sets)| Event {
                event_name,
                gps,
                event_description,
                gracedb_id,
                detectors,
                search,
                pe_sets,
            },
        )
}

fn catalog() -> impl Strategy<Value = Catalog> {
    (
        "[0-9]\\.[0-9]\\.[0-9]",
        "[A-Za-z-]{1,16}",
        "[a-z ]{1,40}",
        "[a-z0-9]{4,10}".prop_map(|s| format!("https://doi.org/10.7935/{s}")),
        "20[0-9]{2}-(0[1-9]|1[0-2])-(0[1-9]|1[0-9]|2[0-8])",
        vec(event(), 1..4),
    )
        .prop_map(
            |(schema_version, catalog_name, catalog_description, doi, release_date, events)| {
                Catalog {
                    schema_version,
                    catalog_name,
                    catalog_description,
                    doi,
                    release_date,
                    events,
                }
            },
        )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn serialize_then_parse_is_identity(original in catalog()) {
        let rendered = gwcat_schema::to_value(&original).unwrap();
        let reparsed = gwcat_schema::parse_value(&rendered).unwrap();
        prop_assert_eq!(original, reparsed);
    }

    #[test]
    fn pretty_rendering_also_round_trips(original in catalog()) {
        let rendered = gwcat_schema::to_string_pretty(&original).unwrap();
        let reparsed = gwcat_schema::parse_str(&rendered).unwrap();
        prop_assert_eq!(original, reparsed);
    }
}
