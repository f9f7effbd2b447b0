use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// SeaORM entity for the `portfolios` table.
///
/// `portfolio_date` is always stored as UTC; the write path normalizes
/// whatever the client sent (see `db::portfolio::parse_date_as_utc`).
/// `kind` is a free-text tag serialized as `"type"` for API compatibility.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "portfolios")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub created_at: DateTimeUtc,
    pub status: bool,
    pub portfolio_date: DateTimeUtc,
    pub portfolio_link: String,
    pub behance_link: String,
    pub youtube_link: String,
    pub github_link: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::portfolio_image::Entity")]
    PortfolioImages,
    #[sea_orm(has_many = "super::user_portfolio::Entity")]
    UserPortfolios,
}

impl Related<super::portfolio_image::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PortfolioImages.def()
    }
}

impl Related<super::user_portfolio::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserPortfolios.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// The portfolio aggregate: one portfolio row plus its owned image rows and
/// its collaborator links. Links whose user row has since been deleted are
/// carried as `None` and filtered out by the presentation mapper.
#[derive(Debug, Clone)]
pub struct PortfolioDetails {
    pub portfolio: Model,
    pub images: Vec<super::portfolio_image::Model>,
    pub collaborators: Vec<(super::user_portfolio::Model, Option<super::users::Model>)>,
}

// ── DTOs ──

/// Used by the `POST /api/portfolios` endpoint. `portfolio_date` arrives as a
/// raw string from the frontend date picker; parsing is lenient by design.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePortfolio {
    pub title: Option<String>,
    pub description: Option<String>,
    pub portfolio_link: Option<String>,
    pub behance_link: Option<String>,
    pub youtube_link: Option<String>,
    pub github_link: Option<String>,
    pub portfolio_date: Option<String>,
    pub status: Option<bool>,
    pub user_ids: Option<Vec<String>>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

/// Used by the `PUT /api/portfolios/{id}` endpoint. Omitted fields are left
/// unchanged. `user_ids` is special: when present (even empty) it wholly
/// replaces the collaborator link set.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePortfolio {
    pub title: Option<String>,
    pub description: Option<String>,
    pub portfolio_link: Option<String>,
    pub behance_link: Option<String>,
    pub youtube_link: Option<String>,
    pub github_link: Option<String>,
    pub portfolio_date: Option<String>,
    pub status: Option<bool>,
    pub user_ids: Option<Vec<String>>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

// ── Response shapes (built by `mappers`) ──

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortfolioResponse {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub created_at: DateTimeUtc,
    pub status: bool,
    pub portfolio_date: DateTimeUtc,
    pub portfolio_link: String,
    pub behance_link: String,
    pub youtube_link: String,
    pub github_link: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub portfolio_images: Vec<PortfolioImageResponse>,
    pub users: Vec<CollaboratorResponse>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortfolioImageResponse {
    pub id: i32,
    pub image_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CollaboratorResponse {
    pub id: String,
    pub user_name: String,
    pub name: String,
    pub role: super::users::Roles,
    pub user_img: String,
    pub user_title: String,
    pub phone_number: String,
    pub cv_url: String,
}
