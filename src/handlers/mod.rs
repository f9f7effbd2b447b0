pub mod account;
pub mod portfolio;
pub mod profile;

use actix_web::{HttpRequest, web};

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    // ── Account routes (register/login are public) ──
    cfg.service(
        web::scope("/account")
            .route("/health", web::get().to(account::health))
            .route("/register", web::post().to(account::register))
            .route("/login", web::post().to(account::login))
            .route("/users", web::get().to(account::get_all_users)),
    );

    // ── Profile routes ──
    cfg.service(
        web::scope("/profile")
            .route("", web::get().to(profile::get_profile))
            .route("", web::put().to(profile::update_profile))
            .route("/upload-image", web::post().to(profile::upload_image))
            .route("/all", web::get().to(profile::get_all_profiles))
            .route("/{id}", web::get().to(profile::get_profile_by_id)),
    );

    // ── Portfolio routes (reads are public, writes require a valid JWT) ──
    cfg.service(
        web::scope("/portfolios")
            .route("", web::post().to(portfolio::create_portfolio))
            .route("/all", web::get().to(portfolio::get_all_portfolios))
            .route("/my-projects", web::get().to(portfolio::get_my_portfolios))
            .route("/{id}", web::get().to(portfolio::get_portfolio))
            .route("/{id}", web::put().to(portfolio::update_portfolio))
            .route("/{id}", web::delete().to(portfolio::delete_portfolio))
            .route("/{id}/images", web::post().to(portfolio::add_portfolio_image))
            .route("/{id}/images", web::get().to(portfolio::get_portfolio_images)),
    );
}

/// `scheme://host` of the current request, for composing absolute image URLs.
/// Never stored; presentation only.
pub fn request_base_url(req: &HttpRequest) -> String {
    let info = req.connection_info();
    format!("{}://{}", info.scheme(), info.host())
}
