use sea_orm::*;
use uuid::Uuid;

use crate::auth::password;
use crate::errors::ApiError;
use crate::models::users::{self, RegisterUser, UpdateProfile};

/// Create a new user account with an argon2-hashed password.
///
/// Rejects a duplicate email before touching the unique index so the caller
/// gets a validation error rather than a bare database error.
pub async fn create_user(
    db: &DatabaseConnection,
    input: RegisterUser,
) -> Result<users::Model, ApiError> {
    if get_user_by_email(db, &input.email).await?.is_some() {
        return Err(ApiError::Validation(format!(
            "Email {} is already registered",
            input.email
        )));
    }

    let new_user = users::ActiveModel {
        id: Set(Uuid::new_v4().to_string()),
        email: Set(input.email.clone()),
        user_name: Set(input.email),
        name: Set(input.name),
        role: Set(input.role),
        password_hash: Set(password::hash_password(&input.password)?),
        bio: Set(String::new()),
        facebook: Set(String::new()),
        instagram: Set(String::new()),
        behance: Set(String::new()),
        github: Set(String::new()),
        user_img: Set(String::new()),
        user_title: Set(String::new()),
        phone_number: Set(String::new()),
        cv_url: Set(String::new()),
        created_at: Set(chrono::Utc::now()),
    };

    Ok(new_user.insert(db).await?)
}

/// Fetch all users.
pub async fn get_all_users(db: &DatabaseConnection) -> Result<Vec<users::Model>, DbErr> {
    users::Entity::find().all(db).await
}

/// Fetch a single user by ID.
pub async fn get_user_by_id(
    db: &DatabaseConnection,
    id: &str,
) -> Result<Option<users::Model>, DbErr> {
    users::Entity::find_by_id(id).one(db).await
}

/// Fetch a single user by email.
pub async fn get_user_by_email(
    db: &DatabaseConnection,
    email: &str,
) -> Result<Option<users::Model>, DbErr> {
    users::Entity::find()
        .filter(users::Column::Email.eq(email))
        .one(db)
        .await
}

/// Check a candidate password against the stored hash.
pub fn verify_password(user: &users::Model, candidate: &str) -> bool {
    password::verify_password(candidate, &user.password_hash)
}

/// Update a user's profile. Omitted fields are left unchanged; a password
/// change is only applied after the current password verifies.
pub async fn update_profile(
    db: &DatabaseConnection,
    id: &str,
    input: UpdateProfile,
) -> Result<users::Model, ApiError> {
    let user = get_user_by_id(db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("User {id} not found")))?;

    let new_hash = match input.new_password.as_deref().filter(|p| !p.is_empty()) {
        Some(new_password) => {
            let current = input
                .current_password
                .as_deref()
                .filter(|p| !p.is_empty())
                .ok_or_else(|| {
                    ApiError::Validation(
                        "Current password is required to change password".to_string(),
                    )
                })?;
            if !verify_password(&user, current) {
                return Err(ApiError::Validation(
                    "Current password is incorrect".to_string(),
                ));
            }
            Some(password::hash_password(new_password)?)
        }
        None => None,
    };

    let mut active: users::ActiveModel = user.into();

    if let Some(hash) = new_hash {
        active.password_hash = Set(hash);
    }

    if let Some(name) = input.name.filter(|s| !s.trim().is_empty()) {
        active.name = Set(name);
    }
    if let Some(email) = input.email.filter(|s| !s.trim().is_empty()) {
        active.user_name = Set(email.clone());
        active.email = Set(email);
    }
    if let Some(bio) = input.bio {
        active.bio = Set(bio);
    }
    if let Some(facebook) = input.facebook {
        active.facebook = Set(facebook);
    }
    if let Some(instagram) = input.instagram {
        active.instagram = Set(instagram);
    }
    if let Some(behance) = input.behance {
        active.behance = Set(behance);
    }
    if let Some(github) = input.github {
        active.github = Set(github);
    }
    if let Some(user_title) = input.user_title {
        active.user_title = Set(user_title);
    }
    if let Some(phone_number) = input.phone_number.filter(|s| !s.trim().is_empty()) {
        active.phone_number = Set(phone_number);
    }
    if let Some(cv_url) = input.cv_url {
        active.cv_url = Set(cv_url);
    }

    Ok(active.update(db).await?)
}

/// Replace a user's profile image path.
pub async fn set_user_img(
    db: &DatabaseConnection,
    id: &str,
    image_path: String,
) -> Result<users::Model, ApiError> {
    let user = get_user_by_id(db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("User {id} not found")))?;

    let mut active: users::ActiveModel = user.into();
    active.user_img = Set(image_path);

    Ok(active.update(db).await?)
}
