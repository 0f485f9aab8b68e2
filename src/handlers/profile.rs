use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::profile::{ProfileUpdate, ProfileView};
use crate::domain::user::CurrentUser;
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    pub full_name: String,
    pub phone: String,
    pub address: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub user_id: Uuid,
    pub name: Option<String>,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub created_at: String,
    pub updated_at: Option<String>,
}

impl From<ProfileView> for ProfileResponse {
    fn from(view: ProfileView) -> Self {
        Self {
            user_id: view.user_id,
            name: view.name,
            email: view.email,
            phone: view.phone,
            address: view.address,
            created_at: view.created_at.to_rfc3339(),
            updated_at: view.updated_at.map(|t| t.to_rfc3339()),
        }
    }
}

/// GET /api/profile
///
/// Returns the caller's profile, creating an empty one on first access.
#[utoipa::path(
    get,
    path = "/api/profile",
    responses(
        (status = 200, description = "The caller's profile", body = ProfileResponse),
        (status = 401, description = "Missing or invalid token"),
    ),
    tag = "profile"
)]
pub async fn get_profile(
    state: web::Data<AppState>,
    user: CurrentUser,
) -> Result<HttpResponse, AppError> {
    let state = state.into_inner();
    let view = web::block(move || state.profiles.get_my_profile(&user))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(ProfileResponse::from(view)))
}

/// PUT /api/profile
///
/// Overwrites the contact fields. Unlike GET, this does not auto-create:
/// updating a profile that was never fetched is a 404.
#[utoipa::path(
    put,
    path = "/api/profile",
    request_body = UpdateProfileRequest,
    responses(
        (status = 200, description = "The updated profile", body = ProfileResponse),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "No profile exists yet"),
    ),
    tag = "profile"
)]
pub async fn update_profile(
    state: web::Data<AppState>,
    user: CurrentUser,
    body: web::Json<UpdateProfileRequest>,
) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();
    let state = state.into_inner();

    let update = ProfileUpdate {
        full_name: body.full_name,
        phone: body.phone,
        address: body.address,
    };
    let view = web::block(move || state.profiles.update_profile(&user, update))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(ProfileResponse::from(view)))
}
