//! SDG dashboard presets
//!
//! The four linguistic values follow the colour bands of the Sustainable
//! Development Report dashboards (green, yellow, orange, red), ordered from
//! best to worst.

use crate::domain::{FloatDomain, DEFAULT_STEPS};
use crate::membership::MembershipFunction;
use crate::variable::FuzzyVariable;

/// Green band
pub const SDG_ACHIEVED: &str = "SDG achieved";
/// Yellow band
pub const CHALLENGES_REMAIN: &str = "Challenges remain";
/// Orange band
pub const SIGNIFICANT_CHALLENGES_REMAIN: &str = "Significant challenges remain";
/// Red band
pub const MAJOR_CHALLENGES_REMAIN: &str = "Major challenges remain";

/// Name of the standard output variable
pub const COMPLIANCE_DEGREE: &str = "compliance_degree";

/// Linguistic values in best-to-worst order
pub const LABELS: [&str; 4] = [
    SDG_ACHIEVED,
    CHALLENGES_REMAIN,
    SIGNIFICANT_CHALLENGES_REMAIN,
    MAJOR_CHALLENGES_REMAIN,
];

/// A variable over `domain` carrying the four dashboard bands
pub fn banded(domain: FloatDomain) -> FuzzyVariable {
    FuzzyVariable::new(domain)
        .with_value(SDG_ACHIEVED, MembershipFunction::S { a: 75.0, b: 85.0 })
        .with_value(
            CHALLENGES_REMAIN,
            MembershipFunction::Bell {
                a: 15.0,
                b: 15.0,
                c: 65.0,
            },
        )
        .with_value(
            SIGNIFICANT_CHALLENGES_REMAIN,
            MembershipFunction::Bell {
                a: 15.0,
                b: 15.0,
                c: 35.0,
            },
        )
        .with_value(MAJOR_CHALLENGES_REMAIN, MembershipFunction::Z { a: 15.0, b: 25.0 })
}

/// The compliance degree output: a 0-100 score sampled at 1000 points
pub fn compliance_degree() -> FuzzyVariable {
    banded(FloatDomain::new(COMPLIANCE_DEGREE, 0.0, 100.0, DEFAULT_STEPS))
}

/// A 0-100 indicator score using the same four bands as the output
pub fn indicator(name: impl Into<String>) -> FuzzyVariable {
    banded(FloatDomain::new(name, 0.0, 100.0, DEFAULT_STEPS))
}
