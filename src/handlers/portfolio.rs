use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, web};
use sea_orm::DatabaseConnection;

use crate::auth::middleware::AuthenticatedUser;
use crate::db::portfolio as portfolio_db;
use crate::errors::ApiError;
use crate::handlers::request_base_url;
use crate::mappers;
use crate::models::portfolio::{CreatePortfolio, UpdatePortfolio};
use crate::uploads;

/// POST /api/portfolios — create a portfolio (requires authentication).
///
/// The caller is always linked as the first collaborator; `user_ids` may add
/// more. The response carries relative image paths (no base URL).
pub async fn create_portfolio(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    body: web::Json<CreatePortfolio>,
) -> Result<HttpResponse, ApiError> {
    let details = portfolio_db::insert_portfolio(db.get_ref(), &user.0.id, body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(mappers::to_portfolio_response(&details, None)))
}

/// GET /api/portfolios/all — every portfolio with images and collaborators
/// (public).
pub async fn get_all_portfolios(
    req: HttpRequest,
    db: web::Data<DatabaseConnection>,
) -> Result<HttpResponse, ApiError> {
    let portfolios = portfolio_db::get_all_with_details(db.get_ref()).await?;

    let base_url = request_base_url(&req);
    let data: Vec<_> = portfolios
        .iter()
        .map(|details| mappers::to_portfolio_response(details, Some(&base_url)))
        .collect();

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "data": data,
    })))
}

/// GET /api/portfolios/my-projects — the caller's portfolios (requires
/// authentication).
pub async fn get_my_portfolios(
    req: HttpRequest,
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
) -> Result<HttpResponse, ApiError> {
    let portfolios = portfolio_db::get_by_collaborator(db.get_ref(), &user.0.id).await?;
    tracing::info!("Found {} portfolios for user {}", portfolios.len(), user.0.id);

    let base_url = request_base_url(&req);
    let data: Vec<_> = portfolios
        .iter()
        .map(|details| mappers::to_portfolio_response(details, Some(&base_url)))
        .collect();

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "data": data,
    })))
}

/// GET /api/portfolios/{id} — a single portfolio aggregate (public).
pub async fn get_portfolio(
    req: HttpRequest,
    db: web::Data<DatabaseConnection>,
    path: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();

    let details = portfolio_db::get_by_id_with_details(db.get_ref(), id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Portfolio {id} not found")))?;

    let base_url = request_base_url(&req);
    Ok(HttpResponse::Ok().json(mappers::to_portfolio_response(&details, Some(&base_url))))
}

/// PUT /api/portfolios/{id} — patch fields; a present `user_ids` list
/// replaces the collaborator set wholesale (requires authentication).
pub async fn update_portfolio(
    req: HttpRequest,
    _user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<i32>,
    body: web::Json<UpdatePortfolio>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let details = portfolio_db::update_portfolio(db.get_ref(), id, body.into_inner()).await?;

    let base_url = request_base_url(&req);
    Ok(HttpResponse::Ok().json(mappers::to_portfolio_response(&details, Some(&base_url))))
}

/// DELETE /api/portfolios/{id} — delete the portfolio with its images and
/// links (requires authentication).
pub async fn delete_portfolio(
    _user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    portfolio_db::delete_portfolio(db.get_ref(), id).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// POST /api/portfolios/{id}/images — upload an image for a portfolio
/// (requires authentication, multipart form data).
pub async fn add_portfolio_image(
    _user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<i32>,
    payload: Multipart,
) -> Result<HttpResponse, ApiError> {
    let portfolio_id = path.into_inner();

    // The portfolio must exist before we accept a file for it.
    portfolio_db::get_by_id_with_details(db.get_ref(), portfolio_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Portfolio {portfolio_id} not found")))?;

    let (filename, data) = uploads::read_image_field(payload).await?;
    let image_url = uploads::store_image(&filename, &data).await?;

    let image = portfolio_db::insert_image(db.get_ref(), portfolio_id, image_url).await?;
    tracing::info!("Added image {} to portfolio {portfolio_id}", image.id);

    Ok(HttpResponse::Ok().json(mappers::to_image_response(&image)))
}

/// GET /api/portfolios/{id}/images — the image records for a portfolio
/// (public).
pub async fn get_portfolio_images(
    db: web::Data<DatabaseConnection>,
    path: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let portfolio_id = path.into_inner();
    let images = portfolio_db::get_images(db.get_ref(), portfolio_id).await?;

    let data: Vec<_> = images.iter().map(mappers::to_image_response).collect();
    Ok(HttpResponse::Ok().json(data))
}
