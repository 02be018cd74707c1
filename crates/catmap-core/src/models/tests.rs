use super::*;
use crate::geo::GeoPoint;
use chrono::{NaiveDate, Utc};
use uuid::Uuid;

#[test]
fn role_roundtrips() {
    assert_eq!("Admin".parse::<Role>().expect("valid role"), Role::Admin);
    assert_eq!(Role::Admin.as_str(), "Admin");
    assert_eq!("User".parse::<Role>().expect("valid role"), Role::User);
    assert_eq!(Role::User.as_str(), "User");
    assert!(Role::Admin.is_admin());
    assert!(!Role::User.is_admin());
}

#[test]
fn role_parse_invalid() {
    assert!("admin".parse::<Role>().is_err());
    assert!("superuser".parse::<Role>().is_err());
    assert!("".parse::<Role>().is_err());
}

#[test]
fn role_serde_matches_wire_spelling() {
    assert_eq!(
        serde_json::to_string(&Role::Admin).expect("serialize"),
        "\"Admin\""
    );
    let parsed: Role = serde_json::from_str("\"User\"").expect("deserialize");
    assert_eq!(parsed, Role::User);
}

#[test]
fn cat_serializes_nested_location() {
    let now = Utc::now();
    let cat = Cat {
        id: Uuid::now_v7(),
        name: "Siiri".to_string(),
        weight: 4.2,
        birthdate: NaiveDate::from_ymd_opt(2019, 5, 1).expect("valid date"),
        filename: None,
        location: GeoPoint { lat: 60.1, lng: 24.9 },
        owner_id: Uuid::now_v7(),
        created_at: now,
        updated_at: now,
    };
    let value = serde_json::to_value(&cat).expect("serialize");
    assert_eq!(value["location"]["lat"], 60.1);
    assert_eq!(value["location"]["lng"], 24.9);
    assert_eq!(value["birthdate"], "2019-05-01");
}

#[test]
fn owner_summary_from_user_copies_display_fields() {
    let now = Utc::now();
    let user = User {
        id: Uuid::now_v7(),
        user_name: "matti".to_string(),
        email: "matti@example.com".to_string(),
        password_hash: "hash".to_string(),
        role: Role::User,
        created_at: now,
        updated_at: now,
    };
    let summary = OwnerSummary::from(&user);
    assert_eq!(summary.id, user.id);
    assert_eq!(summary.user_name, "matti");
    assert_eq!(summary.email, "matti@example.com");
}

#[test]
fn changes_emptiness() {
    assert!(CatChanges::default().is_empty());
    assert!(UserChanges::default().is_empty());
    let changes = CatChanges {
        weight: Some(5.0),
        ..CatChanges::default()
    };
    assert!(!changes.is_empty());
}
