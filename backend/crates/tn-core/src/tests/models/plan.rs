use crate::Plan;

use std::str::FromStr;

#[test]
fn test_plan_round_trips_through_db_string() {
    for plan in [Plan::Free, Plan::Pro] {
        assert_eq!(Plan::from_str(plan.as_str()).unwrap(), plan);
    }
}

#[test]
fn test_plan_from_str_accepts_legacy_uppercase() {
    assert_eq!(Plan::from_str("FREE").unwrap(), Plan::Free);
    assert_eq!(Plan::from_str("PRO").unwrap(), Plan::Pro);
    assert!(Plan::from_str("enterprise").is_err());
}

#[test]
fn test_only_pro_is_quota_exempt() {
    assert!(Plan::Pro.is_quota_exempt());
    assert!(!Plan::Free.is_quota_exempt());
    assert_eq!(Plan::default(), Plan::Free);
}
