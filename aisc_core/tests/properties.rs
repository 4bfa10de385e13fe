//! Property tests for limit ratios, classification and the compression curve.

use proptest::prelude::*;

use aisc_core::criteria::{Criteria, SafetyFactor, SafetyFactorType};
use aisc_core::equations::compression::{
    critical_stress_elastic, critical_stress_inelastic, elastic_buckling_stress, inelastic_slenderness_limit,
};
use aisc_core::equations::local_buckling::{
    flange_axial_limit_built_up, flange_axial_limit_rolled, flange_flexural_compact_limit,
    flange_flexural_slender_limit_built_up, flange_flexural_slender_limit_rolled, web_axial_limit,
    web_flexural_compact_limit, web_flexural_slender_limit, KC_MAX, KC_MIN,
};
use aisc_core::section::{
    AreaProperties, AxialSlenderness, DoublySymmetricIAreaProperties, DoublySymmetricIDimensions,
    FlexuralSlenderness,
};
use aisc_core::units::{Quantity, KILONEWTON, MILLIMETER};

/// Built-up limits are taken at a kc inside its allowed range
const KC: f64 = 0.5 * (KC_MIN + KC_MAX);

fn limits(e: f64, fy: f64) -> [f64; 8] {
    [
        flange_axial_limit_rolled(e, fy),
        web_axial_limit(e, fy),
        flange_flexural_compact_limit(e, fy),
        flange_flexural_slender_limit_rolled(e, fy),
        web_flexural_compact_limit(e, fy),
        web_flexural_slender_limit(e, fy),
        flange_axial_limit_built_up(e, fy, KC),
        flange_flexural_slender_limit_built_up(e, fy, KC),
    ]
}

proptest! {
    #[test]
    fn limits_decrease_with_yield_stress(e in 150_000.0..220_000.0f64, fy in 200.0..500.0f64, dfy in 1.0..200.0f64) {
        let low = limits(e, fy);
        let high = limits(e, fy + dfy);
        for (a, b) in low.iter().zip(high.iter()) {
            prop_assert!(b < a);
        }
    }

    #[test]
    fn limits_increase_with_modulus(e in 150_000.0..220_000.0f64, de in 1.0..50_000.0f64, fy in 200.0..500.0f64) {
        let low = limits(e, fy);
        let high = limits(e + de, fy);
        for (a, b) in low.iter().zip(high.iter()) {
            prop_assert!(b > a);
        }
    }

    #[test]
    fn flexural_classes_partition(ratio in 0.0..100.0f64, lp in 1.0..50.0f64, span in 0.1..50.0f64) {
        let lr = lp + span;
        let class = FlexuralSlenderness::classify(ratio, lp, lr);
        let expected = if ratio < lp {
            FlexuralSlenderness::Compact
        } else if ratio < lr {
            FlexuralSlenderness::NonCompact
        } else {
            FlexuralSlenderness::Slender
        };
        prop_assert_eq!(class, expected);
    }

    #[test]
    fn limit_itself_is_the_more_severe_class(lp in 1.0..50.0f64, span in 0.1..50.0f64) {
        let lr = lp + span;
        prop_assert_eq!(FlexuralSlenderness::classify(lp, lp, lr), FlexuralSlenderness::NonCompact);
        prop_assert_eq!(FlexuralSlenderness::classify(lr, lp, lr), FlexuralSlenderness::Slender);
        prop_assert_eq!(AxialSlenderness::classify(lp, lp), AxialSlenderness::Slender);
    }

    #[test]
    fn derived_area_is_flanges_plus_web(
        bf in 50.0..400.0f64,
        tf in 4.0..30.0f64,
        tw_frac in 0.05..0.5f64,
        extra in 10.0..800.0f64,
    ) {
        let tw = bf * tw_frac;
        let d = 2.0 * tf + extra;
        let mm = |v: f64| Quantity::new(v, MILLIMETER);
        let dims = DoublySymmetricIDimensions::new(mm(bf), mm(tf), mm(tw), mm(d), None).unwrap();
        let props = DoublySymmetricIAreaProperties::new(dims);
        let expected = props.web_area().value() + 2.0 * props.flange_area().value();
        prop_assert!((props.area().value() - expected).abs() <= 1e-12 * expected);
    }

    #[test]
    fn critical_stress_continuous_at_threshold(e in 150e9..220e9f64, fy in 200e6..500e6f64) {
        let lambda = inelastic_slenderness_limit(e, fy);
        let fe = elastic_buckling_stress(e, lambda);
        let inelastic = critical_stress_inelastic(fy, fe);
        let elastic = critical_stress_elastic(fe);
        prop_assert!((inelastic - elastic).abs() / elastic < 2e-3);
    }

    #[test]
    fn criteria_compare_by_ratio_only(demand in 1.0..1_000.0f64, scale in 0.1..10.0f64) {
        let make = |calc: f64, limit: f64| {
            let sf = SafetyFactor::new(Quantity::new(limit, KILONEWTON), 1.67, SafetyFactorType::Asd).unwrap();
            Criteria::new(Quantity::new(calc, KILONEWTON), sf).unwrap()
        };
        let a = make(demand, 2.0 * demand);
        let b = make(demand * scale, 2.0 * demand * scale);
        prop_assert!((a.ratio() - b.ratio()).abs() < 1e-9);
        let c = make(demand, 3.0 * demand);
        prop_assert!(c > a);
    }
}
