use actix_web::{HttpRequest, HttpResponse, web};
use sea_orm::DatabaseConnection;

use crate::auth::jwt;
use crate::auth::middleware::JwtSecret;
use crate::db::users as user_db;
use crate::errors::ApiError;
use crate::handlers::request_base_url;
use crate::mappers;
use crate::models::users::{LoginUser, RegisterUser, UserResponse};

/// GET /api/account/health — liveness probe.
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "Healthy",
        "timestamp": chrono::Utc::now(),
        "service": "Horus API",
        "version": "1.0.0",
    }))
}

/// POST /api/account/register — create an account and issue a bearer token.
pub async fn register(
    db: web::Data<DatabaseConnection>,
    secret: web::Data<JwtSecret>,
    body: web::Json<RegisterUser>,
) -> Result<HttpResponse, ApiError> {
    let input = body.into_inner();
    tracing::info!("Registering user with email {}", input.email);

    let user = user_db::create_user(db.get_ref(), input).await?;
    let token = jwt::create_token(&user, &secret.0).map_err(ApiError::Validation)?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "User registered successfully",
        "user": UserResponse::from(user),
        "token": token,
    })))
}

/// POST /api/account/login — verify credentials and issue a bearer token.
///
/// The response is identical for an unknown email and a wrong password.
pub async fn login(
    db: web::Data<DatabaseConnection>,
    secret: web::Data<JwtSecret>,
    body: web::Json<LoginUser>,
) -> Result<HttpResponse, ApiError> {
    let input = body.into_inner();

    let user = user_db::get_user_by_email(db.get_ref(), &input.email)
        .await?
        .filter(|user| user_db::verify_password(user, &input.password))
        .ok_or_else(|| ApiError::Unauthorized("Invalid email or password".to_string()))?;

    tracing::info!("User {} logged in", user.id);
    let token = jwt::create_token(&user, &secret.0).map_err(ApiError::Validation)?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Login successful",
        "user": UserResponse::from(user),
        "token": token,
    })))
}

/// GET /api/account/users — directory of all users, with absolute profile
/// image URLs, for collaborator picking.
pub async fn get_all_users(
    req: HttpRequest,
    db: web::Data<DatabaseConnection>,
) -> Result<HttpResponse, ApiError> {
    let base_url = request_base_url(&req);
    let users = user_db::get_all_users(db.get_ref()).await?;

    let data: Vec<_> = users
        .iter()
        .map(|user| mappers::to_collaborator_response(user, Some(&base_url)))
        .collect();

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "data": data,
    })))
}
