//! # Controlled Vocabularies
//!
//! Static tables of recognized parameter names, physical units, detector
//! short names, and link content types. Lookup is case-sensitive exact
//! match against immutable tables.
//!
//! The classification functions return tri-state results rather than
//! booleans: a name is either recognized, or unrecognized-but-allowed
//! (the validator downgrades it to a warning so community submissions can
//! carry custom statistics), while a unit that conflicts with a fixed-unit
//! constraint is forbidden outright — downstream consumers rely on fixed
//! units for the constrained parameters, so a mismatch is a hard error.

/// Recognized parameter-estimation parameter names, with descriptions.
pub const RECOGNIZED_PE_PARAMETERS: &[(&str, &str)] = &[
    ("chirp_mass", "Detector-frame chirp mass of the binary"),
    ("chirp_mass_source", "Source-frame chirp mass of the binary"),
    ("chi_eff", "Effective inspiral spin"),
    ("far", "False-alarm rate of the candidate"),
    ("final_mass_source", "Source-frame mass of the remnant object"),
    ("luminosity_distance", "Luminosity distance to the source"),
    ("mass_1_source", "Source-frame mass of the heavier component"),
    ("mass_2_source", "Source-frame mass of the lighter component"),
    ("network_matched_filter_snr", "Network matched-filter signal-to-noise ratio"),
    ("p_astro", "Probability of astrophysical origin"),
    ("redshift", "Cosmological redshift of the source"),
    ("total_mass_source", "Source-frame total mass of the binary"),
];

/// Recognized search-pipeline parameter names, with descriptions.
pub const RECOGNIZED_SEARCH_PARAMETERS: &[(&str, &str)] = &[
    ("far", "False-alarm rate of the candidate"),
    ("network_matched_filter_snr", "Network matched-filter signal-to-noise ratio"),
    ("p_astro", "Probability of astrophysical origin"),
    ("pastro", "Probability of astrophysical origin (legacy spelling)"),
    ("snr", "Signal-to-noise ratio reported by the pipeline"),
];

/// Recognized link content types.
pub const RECOGNIZED_CONTENT_TYPES: &[&str] = &["posterior_samples", "skymap", "documentation"];

/// Recognized detector short names.
pub const RECOGNIZED_DETECTORS: &[&str] = &["H1", "L1", "V1", "K1", "G1"];

/// Accepted spellings for solar-mass units.
pub const MASS_UNITS: &[&str] = &["Msun", "M_sun", "solMass"];

const LUMINOSITY_DISTANCE_UNITS: &[&str] = &["Mpc"];
const FAR_UNITS: &[&str] = &["1/year"];

/// Returns the fixed-unit constraint for a parameter, if it has one.
///
/// Parameters without an entry here are dimensionless or free-unit; their
/// `unit` field is not checked.
pub fn unit_constraint(parameter_name: &str) -> Option<&'static [&'static str]> {
    match parameter_name {
        "chirp_mass" | "chirp_mass_source" | "mass_1_source" | "mass_2_source"
        | "total_mass_source" | "final_mass_source" => Some(MASS_UNITS),
        "luminosity_distance" => Some(LUMINOSITY_DISTANCE_UNITS),
        "far" => Some(FAR_UNITS),
        _ => None,
    }
}

/// Classification of a name against a controlled vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameStatus {
    /// The name appears in the vocabulary.
    Recognized,
    /// The name is unknown. Allowed, but the validator emits a warning.
    Unrecognized,
}

/// Classification of a unit against the per-parameter constraint table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitStatus {
    /// The parameter has a fixed-unit constraint and the unit satisfies it.
    Allowed,
    /// The parameter has no fixed-unit constraint; any unit (or none) is fine.
    Unconstrained,
    /// The parameter has a fixed-unit constraint and the unit violates it.
    /// This is a hard validation error.
    Mismatch {
        /// The units the constraint allows.
        allowed: &'static [&'static str],
    },
}

/// Classify a parameter name against the PE vocabulary.
pub fn classify_pe_parameter(name: &str) -> NameStatus {
    classify(RECOGNIZED_PE_PARAMETERS, name)
}

/// Classify a parameter name against the search vocabulary.
pub fn classify_search_parameter(name: &str) -> NameStatus {
    classify(RECOGNIZED_SEARCH_PARAMETERS, name)
}

fn classify(table: &[(&str, &str)], name: &str) -> NameStatus {
    if table.iter().any(|(n, _)| *n == name) {
        NameStatus::Recognized
    } else {
        NameStatus::Unrecognized
    }
}

/// Classify a parameter's unit against [`unit_constraint`].
///
/// An absent unit means dimensionless, which violates any fixed-unit
/// constraint the parameter carries.
pub fn classify_unit(parameter_name: &str, unit: Option<&str>) -> UnitStatus {
    match unit_constraint(parameter_name) {
        None => UnitStatus::Unconstrained,
        Some(allowed) => match unit {
            Some(u) if allowed.contains(&u) => UnitStatus::Allowed,
            _ => UnitStatus::Mismatch { allowed },
        },
    }
}

/// Returns true if `name` is a recognized detector short name.
pub fn is_recognized_detector(name: &str) -> bool {
    RECOGNIZED_DETECTORS.contains(&name)
}

/// Returns true if `content_type` is a recognized link content type.
pub fn is_recognized_content_type(content_type: &str) -> bool {
    RECOGNIZED_CONTENT_TYPES.contains(&content_type)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pe_vocabulary_recognizes_known_names() {
        assert_eq!(classify_pe_parameter("mass_1_source"), NameStatus::Recognized);
        assert_eq!(classify_pe_parameter("redshift"), NameStatus::Recognized);
    }

    #[test]
    fn test_pe_vocabulary_includes_significance_statistics() {
        // PE sets may republish the search significances alongside the
        // posterior-derived parameters.
        assert_eq!(classify_pe_parameter("far"), NameStatus::Recognized);
        assert_eq!(classify_pe_parameter("p_astro"), NameStatus::Recognized);
    }

    #[test]
    fn test_pe_vocabulary_is_case_sensitive() {
        assert_eq!(classify_pe_parameter("Mass_1_Source"), NameStatus::Unrecognized);
    }

    #[test]
    fn test_unknown_name_is_allowed_not_forbidden() {
        assert_eq!(classify_pe_parameter("my_custom_stat"), NameStatus::Unrecognized);
        // Unknown names carry no unit constraint either.
        assert_eq!(classify_unit("my_custom_stat", Some("furlong")), UnitStatus::Unconstrained);
    }

    #[test]
    fn test_search_vocabulary() {
        assert_eq!(classify_search_parameter("far"), NameStatus::Recognized);
        assert_eq!(classify_search_parameter("p_astro"), NameStatus::Recognized);
        assert_eq!(classify_search_parameter("chirp_mass"), NameStatus::Unrecognized);
    }

    #[test]
    fn test_mass_units_accept_all_spellings() {
        for unit in MASS_UNITS {
            assert_eq!(classify_unit("chirp_mass", Some(unit)), UnitStatus::Allowed);
        }
    }

    #[test]
    fn test_luminosity_distance_requires_mpc() {
        assert_eq!(classify_unit("luminosity_distance", Some("Mpc")), UnitStatus::Allowed);
        assert!(matches!(
            classify_unit("luminosity_distance", Some("lightyear")),
            UnitStatus::Mismatch { .. }
        ));
    }

    #[test]
    fn test_constrained_parameter_rejects_missing_unit() {
        assert!(matches!(classify_unit("far", None), UnitStatus::Mismatch { allowed } if allowed == FAR_UNITS));
    }

    #[test]
    fn test_dimensionless_parameter_accepts_absent_unit() {
        assert_eq!(classify_unit("chi_eff", None), UnitStatus::Unconstrained);
        assert_eq!(classify_unit("redshift", None), UnitStatus::Unconstrained);
    }

    #[test]
    fn test_detector_and_content_type_tables() {
        assert!(is_recognized_detector("H1"));
        assert!(!is_recognized_detector("X9"));
        assert!(is_recognized_content_type("skymap"));
        assert!(!is_recognized_content_type("spreadsheet"));
    }
}
