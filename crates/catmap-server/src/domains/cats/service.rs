use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use catmap_core::{
    authorize, AccessDenied, Action, BoundingBox, Cat, CatChanges, GeoPoint, Identity,
    OwnerSummary,
};

use crate::app::AppState;
use crate::domains::errors::ServiceError;
use crate::infra::metrics;

pub struct CatDraft {
    pub name: String,
    pub weight: f64,
    pub birthdate: String,
    pub filename: Option<String>,
    pub location: Option<GeoPoint>,
    pub owner_id: Option<Uuid>,
}

#[derive(Default)]
pub struct CatPatch {
    pub name: Option<String>,
    pub weight: Option<f64>,
    pub birthdate: Option<String>,
    pub filename: Option<String>,
    pub location: Option<GeoPoint>,
    pub owner_id: Option<Uuid>,
}

/// Cat plus its owner's display data, when the owner still exists.
pub struct CatDetail {
    pub cat: Cat,
    pub owner: Option<OwnerSummary>,
}

fn validated_name(name: &str) -> Result<String, ServiceError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ServiceError::BadRequest("name_required"));
    }
    Ok(trimmed.to_string())
}

fn validated_weight(weight: f64) -> Result<f64, ServiceError> {
    if !weight.is_finite() || weight <= 0.0 {
        return Err(ServiceError::BadRequest("weight_invalid"));
    }
    Ok(weight)
}

fn parsed_birthdate(value: &str) -> Result<NaiveDate, ServiceError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| ServiceError::BadRequest("birthdate_invalid"))
}

fn deny(resource: &'static str, action: Action, denied: AccessDenied) -> ServiceError {
    metrics::forbidden_access(resource);
    tracing::warn!(
        event = "forbidden",
        action = action.as_str(),
        resource = resource,
        reason = denied.code(),
        "Access denied"
    );
    denied.into()
}

pub async fn create_cat(
    state: &AppState,
    identity: &Identity,
    draft: CatDraft,
) -> Result<Cat, ServiceError> {
    let name = validated_name(&draft.name)?;
    let weight = validated_weight(draft.weight)?;
    let birthdate = parsed_birthdate(&draft.birthdate)?;

    // Creating on someone else's behalf is owner assignment, which the
    // gate reserves for Admin.
    let owner_id = match draft.owner_id {
        Some(owner_id) if owner_id != identity.user_id => {
            if let Err(denied) = authorize(identity, None, Action::AdminOverride) {
                return Err(deny("cats", Action::AdminOverride, denied));
            }
            if state.users.find_by_id(owner_id).await?.is_none() {
                return Err(ServiceError::BadRequest("owner_not_found"));
            }
            owner_id
        }
        _ => identity.user_id,
    };

    let now = Utc::now();
    let cat = Cat {
        id: Uuid::now_v7(),
        name,
        weight,
        birthdate,
        filename: draft.filename,
        location: draft.location.unwrap_or(GeoPoint::ORIGIN),
        owner_id,
        created_at: now,
        updated_at: now,
    };
    let cat = state.cats.create(cat).await?;
    metrics::cat_created();
    tracing::info!(
        event = "cat_created",
        cat_id = %cat.id,
        owner_id = %cat.owner_id,
        "Cat created"
    );
    Ok(cat)
}

pub async fn get_cat(state: &AppState, id: Uuid) -> Result<Cat, ServiceError> {
    match state.cats.find_by_id(id).await? {
        Some(cat) => Ok(cat),
        None => Err(ServiceError::NotFound),
    }
}

/// Detail read: the cat plus its owner joined on demand.
pub async fn get_cat_detail(state: &AppState, id: Uuid) -> Result<CatDetail, ServiceError> {
    let cat = get_cat(state, id).await?;
    let owner = resolve_owner(state, cat.owner_id).await?;
    Ok(CatDetail { cat, owner })
}

/// On-demand owner join. A deleted owner is not an error; the cat simply
/// renders without owner details.
pub async fn resolve_owner(
    state: &AppState,
    owner_id: Uuid,
) -> Result<Option<OwnerSummary>, ServiceError> {
    Ok(state
        .users
        .find_by_id(owner_id)
        .await?
        .map(|user| OwnerSummary::from(&user)))
}

pub async fn list_cats(state: &AppState) -> Result<Vec<Cat>, ServiceError> {
    Ok(state.cats.list_all().await?)
}

pub async fn list_cats_by_owner(
    state: &AppState,
    owner_id: Uuid,
) -> Result<Vec<Cat>, ServiceError> {
    Ok(state.cats.list_by_owner(owner_id).await?)
}

pub async fn list_my_cats(state: &AppState, identity: &Identity) -> Result<Vec<Cat>, ServiceError> {
    list_cats_by_owner(state, identity.user_id).await
}

pub async fn list_cats_within(
    state: &AppState,
    area: BoundingBox,
) -> Result<Vec<Cat>, ServiceError> {
    Ok(state.cats.list_within(area).await?)
}

pub async fn update_cat(
    state: &AppState,
    identity: &Identity,
    id: Uuid,
    patch: CatPatch,
) -> Result<Cat, ServiceError> {
    let cat = match state.cats.find_by_id(id).await? {
        Some(cat) => cat,
        // Absence surfaces before any ownership verdict.
        None => return Err(ServiceError::NotFound),
    };
    if let Err(denied) = authorize(identity, Some(cat.owner_id), Action::Update) {
        return Err(deny("cats", Action::Update, denied));
    }

    let changes = changes_from_patch(state, identity, patch).await?;
    match state.cats.update_by_id(id, changes).await? {
        Some(cat) => {
            tracing::info!(event = "cat_updated", cat_id = %cat.id, "Cat updated");
            Ok(cat)
        }
        // A delete won the race after the load above.
        None => Err(ServiceError::NotFound),
    }
}

pub async fn delete_cat(
    state: &AppState,
    identity: &Identity,
    id: Uuid,
) -> Result<Cat, ServiceError> {
    let cat = match state.cats.find_by_id(id).await? {
        Some(cat) => cat,
        None => return Err(ServiceError::NotFound),
    };
    if let Err(denied) = authorize(identity, Some(cat.owner_id), Action::Delete) {
        return Err(deny("cats", Action::Delete, denied));
    }

    match state.cats.delete_by_id(id).await? {
        Some(cat) => {
            tracing::info!(event = "cat_deleted", cat_id = %cat.id, "Cat deleted");
            Ok(cat)
        }
        None => Err(ServiceError::NotFound),
    }
}

/// Privileged update. The role gate runs before any store access, so a
/// non-admin probing this path learns nothing about the record.
pub async fn admin_update_cat(
    state: &AppState,
    identity: &Identity,
    id: Uuid,
    patch: CatPatch,
) -> Result<Cat, ServiceError> {
    if let Err(denied) = authorize(identity, None, Action::AdminOverride) {
        return Err(deny("cats/admin", Action::AdminOverride, denied));
    }

    let changes = changes_from_patch(state, identity, patch).await?;
    match state.cats.update_by_id(id, changes).await? {
        Some(cat) => {
            tracing::info!(event = "cat_updated", cat_id = %cat.id, admin = true, "Cat updated");
            Ok(cat)
        }
        None => Err(ServiceError::NotFound),
    }
}

pub async fn admin_delete_cat(
    state: &AppState,
    identity: &Identity,
    id: Uuid,
) -> Result<Cat, ServiceError> {
    if let Err(denied) = authorize(identity, None, Action::AdminOverride) {
        return Err(deny("cats/admin", Action::AdminOverride, denied));
    }

    match state.cats.delete_by_id(id).await? {
        Some(cat) => {
            tracing::info!(event = "cat_deleted", cat_id = %cat.id, admin = true, "Cat deleted");
            Ok(cat)
        }
        None => Err(ServiceError::NotFound),
    }
}

/// Validates the patch and converts it to column changes. The owner field
/// is honored only for Admin callers; for everyone else it is silently
/// dropped rather than rejected.
async fn changes_from_patch(
    state: &AppState,
    identity: &Identity,
    patch: CatPatch,
) -> Result<CatChanges, ServiceError> {
    let mut changes = CatChanges::default();
    if let Some(name) = patch.name {
        changes.name = Some(validated_name(&name)?);
    }
    if let Some(weight) = patch.weight {
        changes.weight = Some(validated_weight(weight)?);
    }
    if let Some(birthdate) = patch.birthdate {
        changes.birthdate = Some(parsed_birthdate(&birthdate)?);
    }
    if let Some(filename) = patch.filename {
        changes.filename = Some(filename);
    }
    if let Some(location) = patch.location {
        changes.location = Some(location);
    }
    if let Some(owner_id) = patch.owner_id {
        if identity.is_admin() {
            if state.users.find_by_id(owner_id).await?.is_none() {
                return Err(ServiceError::BadRequest("owner_not_found"));
            }
            changes.owner_id = Some(owner_id);
        }
    }
    Ok(changes)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn name_is_trimmed_and_required() {
        assert_eq!(validated_name("  Whiskers ").expect("valid"), "Whiskers");
        assert!(matches!(
            validated_name("   "),
            Err(ServiceError::BadRequest("name_required"))
        ));
        assert!(matches!(
            validated_name(""),
            Err(ServiceError::BadRequest("name_required"))
        ));
    }

    #[test]
    fn weight_must_be_positive_and_finite() {
        for weight in [0.0, -1.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(
                matches!(
                    validated_weight(weight),
                    Err(ServiceError::BadRequest("weight_invalid"))
                ),
                "{weight}"
            );
        }
    }

    #[test]
    fn birthdate_must_be_a_calendar_date() {
        assert!(parsed_birthdate(" 2020-02-29 ").is_ok());
        for value in ["yesterday", "2020-13-01", "2021-02-29", "01-01-2020", ""] {
            assert!(
                matches!(
                    parsed_birthdate(value),
                    Err(ServiceError::BadRequest("birthdate_invalid"))
                ),
                "{value}"
            );
        }
    }

    proptest! {
        #[test]
        fn any_calendar_date_roundtrips(
            year in 1900i32..2100,
            month in 1u32..=12,
            day in 1u32..=28,
        ) {
            let date = NaiveDate::from_ymd_opt(year, month, day).expect("valid date");
            let parsed = parsed_birthdate(&date.format("%Y-%m-%d").to_string()).expect("parse");
            prop_assert_eq!(parsed, date);
        }

        #[test]
        fn positive_finite_weights_pass(weight in 0.01f64..10_000.0) {
            prop_assert_eq!(validated_weight(weight).expect("valid"), weight);
        }
    }
}
