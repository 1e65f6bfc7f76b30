//! Tests for trip domain models, mostly the wire shapes stored
//! documents depend on.

use crate::trips::{Destination, DestinationKind, NewTrip, Trip, TripStatus, TripUpdate};

#[test]
fn test_trip_status_serializes_lowercase() {
    assert_eq!(
        serde_json::to_string(&TripStatus::Planning).unwrap(),
        "\"planning\""
    );
    assert_eq!(
        serde_json::to_string(&TripStatus::Confirmed).unwrap(),
        "\"confirmed\""
    );
}

#[test]
fn test_trip_status_default_is_planning() {
    assert_eq!(TripStatus::default(), TripStatus::Planning);
}

#[test]
fn test_only_confirmed_counts_as_confirmed() {
    assert!(TripStatus::Confirmed.is_confirmed());
    assert!(!TripStatus::Planning.is_confirmed());
    assert!(!TripStatus::Active.is_confirmed());
    assert!(!TripStatus::Completed.is_confirmed());
}

#[test]
fn test_destination_kind_round_trips_as_type_field() {
    let destination = Destination {
        id: "p1".to_string(),
        name: "Central Park".to_string(),
        lat: 40.7829,
        lng: -73.9654,
        kind: DestinationKind::Attraction,
        address: None,
        notes: Some("Walk the Mall".to_string()),
        rating: Some(4.8),
        estimated_cost: Some(0.0),
        photos: None,
    };

    let json = serde_json::to_value(&destination).unwrap();
    assert_eq!(json["type"], "attraction");
    assert_eq!(json["estimatedCost"], 0.0);
    assert!(json.get("kind").is_none());

    let parsed: Destination = serde_json::from_value(json).unwrap();
    assert_eq!(parsed, destination);
}

#[test]
fn test_destination_kind_defaults_to_other() {
    let parsed: Destination = serde_json::from_str(
        r#"{"id":"x","name":"Somewhere","lat":1.0,"lng":2.0}"#,
    )
    .unwrap();
    assert_eq!(parsed.kind, DestinationKind::Other);
}

#[test]
fn test_trip_with_absent_destinations_defaults_empty() {
    let parsed: Trip = serde_json::from_str(
        r#"{"id":"t1","title":"Sparse trip","status":"confirmed"}"#,
    )
    .unwrap();
    assert!(parsed.destinations.is_empty());
    assert_eq!(parsed.status, TripStatus::Confirmed);
    assert_eq!(parsed.budget, "");
}

#[test]
fn test_new_trip_has_no_id_on_the_wire() {
    let new_trip = NewTrip {
        title: "Road trip".to_string(),
        ..NewTrip::default()
    };
    let json = serde_json::to_value(&new_trip).unwrap();
    assert!(json.get("id").is_none());
}

#[test]
fn test_trip_update_field_paths_follow_set_fields() {
    let update = TripUpdate {
        title: Some("New title".to_string()),
        budget: Some("₪9,000".to_string()),
        ..TripUpdate::default()
    };
    assert_eq!(update.field_paths(), vec!["title", "budget"]);
    assert!(!update.is_empty());
    assert!(TripUpdate::default().is_empty());
}
