use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// The `Roles` enum maps to a Postgres TEXT column stored as lowercase strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum Roles {
    #[sea_orm(string_value = "developer")]
    Developer,
    #[sea_orm(string_value = "designer")]
    Designer,
    #[sea_orm(string_value = "marketing")]
    Marketing,
    #[sea_orm(string_value = "motion_graphic")]
    MotionGraphic,
}

/// SeaORM entity for the `users` table.
///
/// Ids are string-form UUIDs assigned at registration. `user_img` holds a
/// relative path under `/images`; absolute URLs are composed at response time.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    #[sea_orm(unique)]
    pub email: String,
    pub user_name: String,
    pub name: String,
    pub role: Roles,
    #[serde(skip_serializing)]
    pub password_hash: String,
    #[sea_orm(column_type = "Text")]
    pub bio: String,
    pub facebook: String,
    pub instagram: String,
    pub behance: String,
    pub github: String,
    pub user_img: String,
    pub user_title: String,
    pub phone_number: String,
    pub cv_url: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::user_portfolio::Entity")]
    UserPortfolios,
}

impl Related<super::user_portfolio::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserPortfolios.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs (not stored in DB, used for request bodies) ──

/// Used by the `POST /api/account/register` endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterUser {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Roles,
}

/// Used by the `POST /api/account/login` endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginUser {
    pub email: String,
    pub password: String,
}

/// Used by the `PUT /api/profile` endpoint. Omitted fields are left unchanged;
/// a password change requires `current_password` alongside `new_password`.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProfile {
    pub name: Option<String>,
    pub email: Option<String>,
    pub bio: Option<String>,
    pub facebook: Option<String>,
    pub instagram: Option<String>,
    pub behance: Option<String>,
    pub github: Option<String>,
    pub user_title: Option<String>,
    pub phone_number: Option<String>,
    pub cv_url: Option<String>,
    pub current_password: Option<String>,
    pub new_password: Option<String>,
}

/// A safe user representation for API responses (never leaks the hash).
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub user_name: String,
    pub name: String,
    pub role: Roles,
    pub user_title: String,
    pub phone_number: String,
    pub cv_url: String,
    pub created_at: DateTimeUtc,
}

impl From<Model> for UserResponse {
    fn from(m: Model) -> Self {
        Self {
            id: m.id,
            email: m.email,
            user_name: m.user_name,
            name: m.name,
            role: m.role,
            user_title: m.user_title,
            phone_number: m.phone_number,
            cv_url: m.cv_url,
            created_at: m.created_at,
        }
    }
}

/// Full profile representation. `user_img` is the absolute URL when the
/// handler had a base URL to prefix with, otherwise the stored relative path.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileResponse {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: Roles,
    pub bio: String,
    pub facebook: String,
    pub instagram: String,
    pub behance: String,
    pub github: String,
    pub user_img: String,
    pub user_title: String,
    pub phone_number: String,
    pub cv_url: String,
}
