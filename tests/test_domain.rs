use pincode_distance_api::application::resolve_distance::dto::{DistanceReport, DistanceSource};
use pincode_distance_api::domain::distance::entity::PincodeDistance;
use pincode_distance_api::domain::distance::fallback::synthetic_route;
use pincode_distance_api::domain::distance::value_objects::Pincode;
use pincode_distance_api::domain::shared::duration::format_duration;

fn entity(from: &str, to: &str, distance_km: f64, duration_seconds: i64) -> PincodeDistance {
    PincodeDistance {
        id: 1,
        from_pincode: from.to_string(),
        to_pincode: to.to_string(),
        distance_in_meters: distance_km * 1000.0,
        distance_in_km: distance_km,
        duration_in_seconds: duration_seconds,
        duration_text: format_duration(duration_seconds),
        route_overview_polyline: "openroute_polyline".to_string(),
        full_route_json: "{}".to_string(),
        created_at: chrono::Utc::now(),
        updated_at: chrono::Utc::now(),
    }
}

#[test]
fn pincode_accepts_six_digit_codes() {
    assert!(Pincode::new("141106".to_string()).is_ok());
    assert!(Pincode::new("110001".to_string()).is_ok());
}

#[test]
fn pincode_rejects_wrong_length_or_non_digits() {
    assert!(Pincode::new("14110".to_string()).is_err());
    assert!(Pincode::new("1411066".to_string()).is_err());
    assert!(Pincode::new("14110a".to_string()).is_err());
    assert!(Pincode::new("".to_string()).is_err());
}

#[test]
fn success_report_serializes_with_camel_case_keys() {
    let report = DistanceReport::from_entity(
        &entity("141106", "110060", 250.5, 15030),
        DistanceSource::Fallback,
    );
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["fromPincode"], "141106");
    assert_eq!(json["toPincode"], "110060");
    assert_eq!(json["distanceInKm"], 250.5);
    assert_eq!(json["distanceText"], "250.50 km");
    assert_eq!(json["durationInSeconds"], 15030);
    assert_eq!(json["durationText"], "4 hours 10 mins");
    assert_eq!(json["routePolyline"], "openroute_polyline");
    assert_eq!(json["source"], "FALLBACK");
    assert_eq!(json["message"], "Success");
}

#[test]
fn source_tags_serialize_screaming_snake() {
    let external = DistanceReport::from_entity(
        &entity("141106", "110060", 12.345, 600),
        DistanceSource::ExternalApi,
    );
    let json = serde_json::to_value(&external).unwrap();
    assert_eq!(json["source"], "EXTERNAL_API");
}

#[test]
fn rejected_report_omits_all_distance_fields() {
    let report = DistanceReport::rejected("abc", "", "Invalid pincode: abc");
    let json = serde_json::to_value(&report).unwrap();
    let object = json.as_object().unwrap();

    assert_eq!(json["fromPincode"], "abc");
    assert_eq!(json["message"], "Invalid pincode: abc");
    assert!(!object.contains_key("distanceInKm"));
    assert!(!object.contains_key("durationInSeconds"));
    assert!(!object.contains_key("routePolyline"));
    assert!(!object.contains_key("source"));
}

#[test]
fn synthetic_estimates_are_stable_across_invocations() {
    // The generator only looks at the pair, so repeated calls stand in for
    // separate processes with a cleared cache.
    for _ in 0..3 {
        let route = synthetic_route("560001", "600113");
        assert_eq!(route, synthetic_route("560001", "600113"));
        assert!(route.distance_km >= 10.0);
        assert!(route.duration_seconds >= 1800);
    }
}

#[test]
fn pinned_pairs_are_reproduced_verbatim() {
    assert_eq!(synthetic_route("141106", "110060").distance_km, 250.5);
    assert_eq!(synthetic_route("141106", "560023").distance_km, 1850.3);
    assert_eq!(synthetic_route("110001", "400001").distance_km, 1400.2);
}

#[test]
fn duration_formatter_matches_the_expected_shape() {
    assert_eq!(format_duration(5400), "1 hours 30 mins");
    assert_eq!(format_duration(-5400), "-1 hours 30 mins");
}
