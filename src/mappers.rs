//! Pure mapping from persisted aggregates to API response shapes.
//!
//! Nothing here touches the database or the request: the base URL is an
//! explicit argument so the same aggregate always maps to the same output.

use crate::models::portfolio::{
    CollaboratorResponse, PortfolioDetails, PortfolioImageResponse, PortfolioResponse,
};
use crate::models::{portfolio_image, users};

/// Map a portfolio aggregate to its response shape.
///
/// Image URLs pass through unchanged (they are stored relative). Collaborator
/// links whose user row has been deleted are silently omitted.
pub fn to_portfolio_response(
    details: &PortfolioDetails,
    base_url: Option<&str>,
) -> PortfolioResponse {
    let p = &details.portfolio;

    PortfolioResponse {
        id: p.id,
        name: p.name.clone(),
        description: p.description.clone(),
        created_at: p.created_at,
        status: p.status,
        portfolio_date: p.portfolio_date,
        portfolio_link: p.portfolio_link.clone(),
        behance_link: p.behance_link.clone(),
        youtube_link: p.youtube_link.clone(),
        github_link: p.github_link.clone(),
        kind: p.kind.clone(),
        portfolio_images: details.images.iter().map(to_image_response).collect(),
        users: details
            .collaborators
            .iter()
            .filter_map(|(_, user)| user.as_ref())
            .map(|user| to_collaborator_response(user, base_url))
            .collect(),
    }
}

pub fn to_image_response(image: &portfolio_image::Model) -> PortfolioImageResponse {
    PortfolioImageResponse {
        id: image.id,
        image_url: image.image_url.clone(),
    }
}

/// Map a collaborator's user row. The profile image is prefixed with the
/// base URL only when one is supplied and the stored path is non-empty.
pub fn to_collaborator_response(
    user: &users::Model,
    base_url: Option<&str>,
) -> CollaboratorResponse {
    CollaboratorResponse {
        id: user.id.clone(),
        user_name: user.user_name.clone(),
        name: user.name.clone(),
        role: user.role.clone(),
        user_img: prefixed_image_url(&user.user_img, base_url),
        user_title: user.user_title.clone(),
        phone_number: user.phone_number.clone(),
        cv_url: user.cv_url.clone(),
    }
}

/// Absolute profile-image URL when possible, stored value otherwise.
pub fn prefixed_image_url(stored: &str, base_url: Option<&str>) -> String {
    match base_url {
        Some(base) if !stored.is_empty() => format!("{base}{stored}"),
        _ => stored.to_string(),
    }
}
