use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use sea_orm::*;

use crate::errors::ApiError;
use crate::models::portfolio::{self, CreatePortfolio, PortfolioDetails, UpdatePortfolio};
use crate::models::{portfolio_image, user_portfolio, users};

/// Leniently parse a client-supplied date string, reinterpreting the parsed
/// wall-clock fields as UTC.
///
/// Any timezone offset present in the input is discarded, not converted:
/// `2024-03-15T10:00:00+05:00` comes back as `2024-03-15T10:00:00Z`. Returns
/// `None` for empty or unparsable input; the caller decides the fallback
/// (create uses "now", update leaves the stored value untouched).
pub fn parse_date_as_utc(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local().and_utc());
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date.and_hms_opt(0, 0, 0)?.and_utc());
    }

    None
}

/// Collaborator ids to link at create time: the creator first, then every
/// supplied id that is non-empty and not the creator. Duplicates within the
/// supplied list are kept as-is; the unique key rejects them at insert.
pub fn collaborator_ids(creator_id: &str, extra: &[String]) -> Vec<String> {
    let mut ids = vec![creator_id.to_string()];
    for id in extra {
        if !id.is_empty() && id != creator_id {
            ids.push(id.clone());
        }
    }
    ids
}

/// Link ids for a wholesale replacement at update time: every non-empty
/// supplied id, nothing else. The original creator is not re-added unless
/// the caller included them.
pub fn replacement_link_ids(user_ids: &[String]) -> Vec<String> {
    user_ids.iter().filter(|id| !id.is_empty()).cloned().collect()
}

/// Insert a new portfolio and its collaborator links in one transaction,
/// then reload the full aggregate.
pub async fn insert_portfolio(
    db: &DatabaseConnection,
    creator_id: &str,
    input: CreatePortfolio,
) -> Result<PortfolioDetails, ApiError> {
    // Empty or unparsable dates silently fall back to "now".
    let portfolio_date = input
        .portfolio_date
        .as_deref()
        .and_then(parse_date_as_utc)
        .unwrap_or_else(Utc::now);

    let txn = db.begin().await?;

    let new_portfolio = portfolio::ActiveModel {
        name: Set(input.title.unwrap_or_default()),
        description: Set(input.description.unwrap_or_default()),
        created_at: Set(Utc::now()),
        status: Set(input.status.unwrap_or(true)),
        portfolio_date: Set(portfolio_date),
        portfolio_link: Set(input.portfolio_link.unwrap_or_default()),
        behance_link: Set(input.behance_link.unwrap_or_default()),
        youtube_link: Set(input.youtube_link.unwrap_or_default()),
        github_link: Set(input.github_link.unwrap_or_default()),
        kind: Set(input.kind.unwrap_or_default()),
        ..Default::default()
    };
    let inserted = new_portfolio.insert(&txn).await?;

    let links = collaborator_ids(creator_id, input.user_ids.as_deref().unwrap_or(&[]))
        .into_iter()
        .map(|user_id| user_portfolio::ActiveModel {
            user_id: Set(user_id),
            portfolio_id: Set(inserted.id),
        });
    user_portfolio::Entity::insert_many(links).exec(&txn).await?;

    txn.commit().await?;

    tracing::info!("Created portfolio {} for user {creator_id}", inserted.id);

    get_by_id_with_details(db, inserted.id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Portfolio {} not found", inserted.id)))
}

/// Patch an existing portfolio. When `user_ids` is present the collaborator
/// link set is replaced wholesale (delete-then-insert) in the same
/// transaction as the field patch.
pub async fn update_portfolio(
    db: &DatabaseConnection,
    id: i32,
    input: UpdatePortfolio,
) -> Result<PortfolioDetails, ApiError> {
    let txn = db.begin().await?;

    let existing = portfolio::Entity::find_by_id(id)
        .one(&txn)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Portfolio {id} not found")))?;

    let mut active: portfolio::ActiveModel = existing.into();

    if let Some(title) = input.title {
        active.name = Set(title);
    }
    if let Some(description) = input.description {
        active.description = Set(description);
    }
    if let Some(portfolio_link) = input.portfolio_link {
        active.portfolio_link = Set(portfolio_link);
    }
    if let Some(behance_link) = input.behance_link {
        active.behance_link = Set(behance_link);
    }
    if let Some(youtube_link) = input.youtube_link {
        active.youtube_link = Set(youtube_link);
    }
    if let Some(github_link) = input.github_link {
        active.github_link = Set(github_link);
    }
    // Unlike create, an unparsable date leaves the stored value untouched.
    if let Some(parsed) = input.portfolio_date.as_deref().and_then(parse_date_as_utc) {
        active.portfolio_date = Set(parsed);
    }
    if let Some(status) = input.status {
        active.status = Set(status);
    }
    if let Some(kind) = input.kind {
        active.kind = Set(kind);
    }

    // A concurrent delete between the load and this update surfaces as
    // RecordNotUpdated; report it as the portfolio being gone.
    active
        .update(&txn)
        .await
        .map_err(|e| missing_row_as_not_found(e, id))?;

    if let Some(user_ids) = &input.user_ids {
        user_portfolio::Entity::delete_many()
            .filter(user_portfolio::Column::PortfolioId.eq(id))
            .exec(&txn)
            .await?;

        let links: Vec<_> = replacement_link_ids(user_ids)
            .into_iter()
            .map(|user_id| user_portfolio::ActiveModel {
                user_id: Set(user_id),
                portfolio_id: Set(id),
            })
            .collect();
        if !links.is_empty() {
            user_portfolio::Entity::insert_many(links).exec(&txn).await?;
        }
    }

    txn.commit().await?;

    get_by_id_with_details(db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Portfolio {id} not found")))
}

/// Delete a portfolio with its image rows and collaborator links in one
/// transaction.
pub async fn delete_portfolio(db: &DatabaseConnection, id: i32) -> Result<(), ApiError> {
    let existing = portfolio::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Portfolio {id} not found")))?;

    let txn = db.begin().await?;

    portfolio_image::Entity::delete_many()
        .filter(portfolio_image::Column::PortfolioId.eq(id))
        .exec(&txn)
        .await?;
    user_portfolio::Entity::delete_many()
        .filter(user_portfolio::Column::PortfolioId.eq(id))
        .exec(&txn)
        .await?;
    existing.delete(&txn).await?;

    txn.commit().await?;

    tracing::info!("Deleted portfolio {id}");
    Ok(())
}

/// Fetch a single aggregate by portfolio id.
pub async fn get_by_id_with_details(
    db: &DatabaseConnection,
    id: i32,
) -> Result<Option<PortfolioDetails>, DbErr> {
    let Some(p) = portfolio::Entity::find_by_id(id).one(db).await? else {
        return Ok(None);
    };
    Ok(Some(load_details(db, p).await?))
}

/// Fetch every aggregate.
pub async fn get_all_with_details(
    db: &DatabaseConnection,
) -> Result<Vec<PortfolioDetails>, DbErr> {
    let rows = portfolio::Entity::find().all(db).await?;
    let mut out = Vec::with_capacity(rows.len());
    for p in rows {
        out.push(load_details(db, p).await?);
    }
    Ok(out)
}

/// Fetch the aggregates a user is linked to as a collaborator.
pub async fn get_by_collaborator(
    db: &DatabaseConnection,
    user_id: &str,
) -> Result<Vec<PortfolioDetails>, DbErr> {
    let links = user_portfolio::Entity::find()
        .filter(user_portfolio::Column::UserId.eq(user_id))
        .all(db)
        .await?;

    let mut out = Vec::with_capacity(links.len());
    for link in links {
        if let Some(details) = get_by_id_with_details(db, link.portfolio_id).await? {
            out.push(details);
        }
    }
    Ok(out)
}

/// Record an uploaded image's relative URL against a portfolio.
///
/// The file itself must already be on disk; a row is never written for a
/// file that failed to store.
pub async fn insert_image(
    db: &DatabaseConnection,
    portfolio_id: i32,
    image_url: String,
) -> Result<portfolio_image::Model, ApiError> {
    let new_image = portfolio_image::ActiveModel {
        image_url: Set(image_url),
        portfolio_id: Set(portfolio_id),
        ..Default::default()
    };
    Ok(new_image.insert(db).await?)
}

/// Fetch the image rows for a portfolio.
pub async fn get_images(
    db: &DatabaseConnection,
    portfolio_id: i32,
) -> Result<Vec<portfolio_image::Model>, DbErr> {
    portfolio_image::Entity::find()
        .filter(portfolio_image::Column::PortfolioId.eq(portfolio_id))
        .all(db)
        .await
}

fn missing_row_as_not_found(err: DbErr, id: i32) -> ApiError {
    match err {
        DbErr::RecordNotUpdated => ApiError::NotFound(format!("Portfolio {id} not found")),
        other => other.into(),
    }
}

async fn load_details(
    db: &DatabaseConnection,
    p: portfolio::Model,
) -> Result<PortfolioDetails, DbErr> {
    let images = portfolio_image::Entity::find()
        .filter(portfolio_image::Column::PortfolioId.eq(p.id))
        .all(db)
        .await?;

    // Links keep their Option<users::Model>; dangling references are the
    // presentation mapper's problem, not a load failure.
    let collaborators = user_portfolio::Entity::find()
        .filter(user_portfolio::Column::PortfolioId.eq(p.id))
        .find_also_related(users::Entity)
        .all(db)
        .await?;

    Ok(PortfolioDetails {
        portfolio: p,
        images,
        collaborators,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vanished_row_maps_to_not_found() {
        let err = missing_row_as_not_found(DbErr::RecordNotUpdated, 42);
        assert!(matches!(err, ApiError::NotFound(_)));
        assert!(err.to_string().contains("42"));
    }

    #[test]
    fn test_other_database_errors_pass_through() {
        let err = missing_row_as_not_found(DbErr::Custom("connection lost".to_string()), 42);
        assert!(matches!(err, ApiError::Database(_)));
    }
}
