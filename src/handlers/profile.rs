use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, web};
use sea_orm::DatabaseConnection;

use crate::auth::middleware::AuthenticatedUser;
use crate::db::portfolio as portfolio_db;
use crate::db::users as user_db;
use crate::errors::ApiError;
use crate::handlers::request_base_url;
use crate::mappers;
use crate::models::users::{self, ProfileResponse, UpdateProfile};
use crate::uploads;

fn to_profile_response(user: &users::Model, base_url: &str) -> ProfileResponse {
    ProfileResponse {
        id: user.id.clone(),
        email: user.email.clone(),
        name: user.name.clone(),
        role: user.role.clone(),
        bio: user.bio.clone(),
        facebook: user.facebook.clone(),
        instagram: user.instagram.clone(),
        behance: user.behance.clone(),
        github: user.github.clone(),
        user_img: mappers::prefixed_image_url(&user.user_img, Some(base_url)),
        user_title: user.user_title.clone(),
        phone_number: user.phone_number.clone(),
        cv_url: user.cv_url.clone(),
    }
}

/// GET /api/profile — the authenticated caller's profile.
pub async fn get_profile(req: HttpRequest, user: AuthenticatedUser) -> HttpResponse {
    let base_url = request_base_url(&req);
    HttpResponse::Ok().json(to_profile_response(&user.0, &base_url))
}

/// PUT /api/profile — patch the caller's profile; password changes require
/// the current password.
pub async fn update_profile(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    body: web::Json<UpdateProfile>,
) -> Result<HttpResponse, ApiError> {
    user_db::update_profile(db.get_ref(), &user.0.id, body.into_inner()).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Profile updated successfully",
    })))
}

/// POST /api/profile/upload-image — replace the caller's profile image.
pub async fn upload_image(
    req: HttpRequest,
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    payload: Multipart,
) -> Result<HttpResponse, ApiError> {
    let (filename, data) = uploads::read_image_field(payload).await?;
    let image_path = uploads::store_image(&filename, &data).await?;

    // Persist the new path before unlinking the old file: if the update
    // fails, the stored row must still point at a file that exists.
    user_db::set_user_img(db.get_ref(), &user.0.id, image_path.clone()).await?;
    if !user.0.user_img.is_empty() {
        uploads::remove_image(&user.0.user_img).await;
    }

    let base_url = request_base_url(&req);
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "user_img": format!("{base_url}{image_path}"),
    })))
}

/// GET /api/profile/all — all profiles (public).
pub async fn get_all_profiles(
    req: HttpRequest,
    db: web::Data<DatabaseConnection>,
) -> Result<HttpResponse, ApiError> {
    let base_url = request_base_url(&req);
    let users = user_db::get_all_users(db.get_ref()).await?;
    tracing::info!("Returning {} profiles", users.len());

    let profiles: Vec<_> = users
        .iter()
        .map(|user| to_profile_response(user, &base_url))
        .collect();

    Ok(HttpResponse::Ok().json(serde_json::json!({ "profiles": profiles })))
}

/// GET /api/profile/{id} — one profile plus the portfolios the user
/// collaborates on (public).
pub async fn get_profile_by_id(
    req: HttpRequest,
    db: web::Data<DatabaseConnection>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();

    let user = user_db::get_user_by_id(db.get_ref(), &id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("User {id} not found")))?;

    let portfolios = portfolio_db::get_by_collaborator(db.get_ref(), &id).await?;

    let base_url = request_base_url(&req);
    let portfolios: Vec<_> = portfolios
        .iter()
        .map(|details| mappers::to_portfolio_response(details, Some(&base_url)))
        .collect();

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "profile": to_profile_response(&user, &base_url),
        "portfolios": portfolios,
    })))
}
