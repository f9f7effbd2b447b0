//! Tests for the presentation mapper: pure aggregate-to-response mapping.
//!
//! Run with: `cargo test --test mapper_test`
use chrono::{TimeZone, Utc};

use horus_backend::mappers::{prefixed_image_url, to_portfolio_response};
use horus_backend::models::portfolio::{Model as Portfolio, PortfolioDetails};
use horus_backend::models::portfolio_image::Model as PortfolioImage;
use horus_backend::models::user_portfolio::Model as UserPortfolio;
use horus_backend::models::users::{Model as User, Roles};

fn test_portfolio(id: i32) -> Portfolio {
    Portfolio {
        id,
        name: "Brand identity".to_string(),
        description: "Logo and style guide".to_string(),
        created_at: Utc.with_ymd_and_hms(2024, 1, 10, 12, 0, 0).unwrap(),
        status: true,
        portfolio_date: Utc.with_ymd_and_hms(2024, 3, 15, 10, 0, 0).unwrap(),
        portfolio_link: "https://example.com/work".to_string(),
        behance_link: String::new(),
        youtube_link: String::new(),
        github_link: String::new(),
        kind: "branding".to_string(),
    }
}

fn test_user(id: &str, user_img: &str) -> User {
    User {
        id: id.to_string(),
        email: format!("{id}@example.com"),
        user_name: format!("{id}@example.com"),
        name: "Test User".to_string(),
        role: Roles::Designer,
        password_hash: "$argon2id$fake".to_string(),
        bio: String::new(),
        facebook: String::new(),
        instagram: String::new(),
        behance: String::new(),
        github: String::new(),
        user_img: user_img.to_string(),
        user_title: "Senior Designer".to_string(),
        phone_number: "555-0100".to_string(),
        cv_url: "/files/cv.pdf".to_string(),
        created_at: Utc.with_ymd_and_hms(2023, 6, 1, 0, 0, 0).unwrap(),
    }
}

fn link(user_id: &str, portfolio_id: i32) -> UserPortfolio {
    UserPortfolio {
        user_id: user_id.to_string(),
        portfolio_id,
    }
}

#[test]
fn test_scalars_copied_verbatim_and_images_unchanged() {
    let details = PortfolioDetails {
        portfolio: test_portfolio(7),
        images: vec![
            PortfolioImage {
                id: 1,
                image_url: "/images/a.png".to_string(),
                portfolio_id: 7,
            },
            PortfolioImage {
                id: 2,
                image_url: "/images/b.jpg".to_string(),
                portfolio_id: 7,
            },
        ],
        collaborators: vec![],
    };

    let response = to_portfolio_response(&details, Some("https://api.example.com"));

    assert_eq!(response.id, 7);
    assert_eq!(response.name, "Brand identity");
    assert_eq!(response.kind, "branding");
    assert_eq!(
        response.portfolio_date,
        Utc.with_ymd_and_hms(2024, 3, 15, 10, 0, 0).unwrap()
    );
    // Stored image URLs pass through untouched, base URL or not.
    let urls: Vec<_> = response
        .portfolio_images
        .iter()
        .map(|i| i.image_url.as_str())
        .collect();
    assert_eq!(urls, vec!["/images/a.png", "/images/b.jpg"]);
}

#[test]
fn test_profile_image_prefixed_only_with_base_url_and_nonempty_path() {
    assert_eq!(
        prefixed_image_url("/images/x.png", Some("https://api.example.com")),
        "https://api.example.com/images/x.png"
    );
    assert_eq!(prefixed_image_url("/images/x.png", None), "/images/x.png");
    assert_eq!(prefixed_image_url("", Some("https://api.example.com")), "");
}

#[test]
fn test_collaborators_mapped_with_details() {
    let details = PortfolioDetails {
        portfolio: test_portfolio(3),
        images: vec![],
        collaborators: vec![(link("u1", 3), Some(test_user("u1", "/images/u1.png")))],
    };

    let response = to_portfolio_response(&details, Some("https://api.example.com"));

    assert_eq!(response.users.len(), 1);
    let user = &response.users[0];
    assert_eq!(user.id, "u1");
    assert_eq!(user.user_img, "https://api.example.com/images/u1.png");
    assert_eq!(user.user_title, "Senior Designer");
    assert_eq!(user.phone_number, "555-0100");
    assert_eq!(user.cv_url, "/files/cv.pdf");
}

#[test]
fn test_dangling_collaborator_links_are_omitted() {
    // A link whose user row was deleted must not fail the mapping.
    let details = PortfolioDetails {
        portfolio: test_portfolio(5),
        images: vec![],
        collaborators: vec![
            (link("gone", 5), None),
            (link("u2", 5), Some(test_user("u2", ""))),
        ],
    };

    let response = to_portfolio_response(&details, Some("https://api.example.com"));

    assert_eq!(response.users.len(), 1);
    assert_eq!(response.users[0].id, "u2");
    // Empty stored path stays empty even with a base URL.
    assert_eq!(response.users[0].user_img, "");
}

#[test]
fn test_mapper_is_deterministic() {
    let details = PortfolioDetails {
        portfolio: test_portfolio(9),
        images: vec![PortfolioImage {
            id: 4,
            image_url: "/images/c.gif".to_string(),
            portfolio_id: 9,
        }],
        collaborators: vec![(link("u3", 9), Some(test_user("u3", "/images/u3.jpg")))],
    };

    let first = to_portfolio_response(&details, Some("https://api.example.com"));
    let second = to_portfolio_response(&details, Some("https://api.example.com"));
    assert_eq!(first, second);
}
