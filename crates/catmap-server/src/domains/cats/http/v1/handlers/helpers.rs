use catmap_core::{Cat, OwnerSummary};

use crate::domains::cats::service::CatPatch;

use super::super::types::{CatResponse, OwnerResponse, UpdateCatRequest};

pub(crate) fn cat_response(cat: Cat) -> CatResponse {
    cat_response_with_owner(cat, None)
}

pub(crate) fn cat_response_with_owner(cat: Cat, owner: Option<OwnerSummary>) -> CatResponse {
    CatResponse {
        id: cat.id.to_string(),
        name: cat.name,
        weight: cat.weight,
        birthdate: cat.birthdate.to_string(),
        filename: cat.filename,
        location: cat.location,
        owner_id: cat.owner_id.to_string(),
        owner: owner.map(|owner| OwnerResponse {
            id: owner.id.to_string(),
            user_name: owner.user_name,
            email: owner.email,
        }),
        created_at: cat.created_at.to_rfc3339(),
        updated_at: cat.updated_at.to_rfc3339(),
    }
}

pub(crate) fn patch_from_request(payload: UpdateCatRequest) -> CatPatch {
    CatPatch {
        name: payload.name,
        weight: payload.weight,
        birthdate: payload.birthdate,
        filename: payload.filename,
        location: payload.location,
        owner_id: payload.owner_id,
    }
}
