//! Restaurant Repository

use super::{RepoError, RepoResult};
use shared::models::{Restaurant, RestaurantCreate, RestaurantUpdate};
use sqlx::SqlitePool;

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Restaurant>> {
    let restaurants = sqlx::query_as::<_, Restaurant>(
        "SELECT id, name, slug, phone, email, address, service_charge_pct, gst_no, languages, is_active, created_at, updated_at FROM restaurant ORDER BY id",
    )
    .fetch_all(pool)
    .await?;
    Ok(restaurants)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Restaurant>> {
    let restaurant = sqlx::query_as::<_, Restaurant>(
        "SELECT id, name, slug, phone, email, address, service_charge_pct, gst_no, languages, is_active, created_at, updated_at FROM restaurant WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(restaurant)
}

pub async fn find_by_slug(pool: &SqlitePool, slug: &str) -> RepoResult<Option<Restaurant>> {
    let restaurant = sqlx::query_as::<_, Restaurant>(
        "SELECT id, name, slug, phone, email, address, service_charge_pct, gst_no, languages, is_active, created_at, updated_at FROM restaurant WHERE slug = ? LIMIT 1",
    )
    .bind(slug.to_string())
    .fetch_optional(pool)
    .await?;
    Ok(restaurant)
}

/// Check whether a restaurant row exists (cheaper than fetching it)
pub async fn exists(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM restaurant WHERE id = ?")
        .bind(id)
        .fetch_one(pool)
        .await?;
    Ok(count > 0)
}

pub async fn create(pool: &SqlitePool, data: RestaurantCreate) -> RepoResult<Restaurant> {
    // Duplicate pre-check for a friendly message; the UNIQUE constraint on
    // slug still backstops concurrent creates (mapped to Duplicate by From)
    if find_by_slug(pool, &data.slug).await?.is_some() {
        return Err(RepoError::Duplicate(format!(
            "Restaurant slug '{}' already exists",
            data.slug
        )));
    }

    let now = shared::util::now_millis();
    let languages_json = match &data.languages {
        Some(codes) => Some(
            serde_json::to_string(codes)
                .map_err(|e| RepoError::Validation(format!("Invalid languages: {e}")))?,
        ),
        None => None,
    };

    let id: i64 = sqlx::query_scalar(
        "INSERT INTO restaurant (name, slug, phone, email, address, service_charge_pct, gst_no, languages, is_active, created_at, updated_at) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, 1, ?9, ?9) RETURNING id",
    )
    .bind(data.name)
    .bind(data.slug)
    .bind(data.phone)
    .bind(data.email)
    .bind(data.address)
    .bind(data.service_charge_pct.unwrap_or(0.0))
    .bind(data.gst_no)
    .bind(languages_json)
    .bind(now)
    .fetch_one(pool)
    .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create restaurant".into()))
}

pub async fn update(pool: &SqlitePool, id: i64, data: RestaurantUpdate) -> RepoResult<Restaurant> {
    let existing = find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Restaurant {id} not found")))?;

    // Slug stays globally unique across active and inactive restaurants
    if let Some(slug) = &data.slug
        && *slug != existing.slug
        && find_by_slug(pool, slug).await?.is_some()
    {
        return Err(RepoError::Duplicate(format!(
            "Restaurant slug '{slug}' already exists"
        )));
    }

    let now = shared::util::now_millis();
    let languages_json = match &data.languages {
        Some(codes) => Some(
            serde_json::to_string(codes)
                .map_err(|e| RepoError::Validation(format!("Invalid languages: {e}")))?,
        ),
        None => None,
    };

    sqlx::query(
        "UPDATE restaurant SET \
            name = COALESCE(?1, name), \
            slug = COALESCE(?2, slug), \
            phone = COALESCE(?3, phone), \
            email = COALESCE(?4, email), \
            address = COALESCE(?5, address), \
            service_charge_pct = COALESCE(?6, service_charge_pct), \
            gst_no = COALESCE(?7, gst_no), \
            languages = COALESCE(?8, languages), \
            is_active = COALESCE(?9, is_active), \
            updated_at = ?10 \
         WHERE id = ?11",
    )
    .bind(data.name)
    .bind(data.slug)
    .bind(data.phone)
    .bind(data.email)
    .bind(data.address)
    .bind(data.service_charge_pct)
    .bind(data.gst_no)
    .bind(languages_json)
    .bind(data.is_active)
    .bind(now)
    .bind(id)
    .execute(pool)
    .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Restaurant {id} not found")))
}

/// Hard delete a restaurant; its tables go with it (ON DELETE CASCADE),
/// atomically within the single DELETE statement.
pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM restaurant WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Restaurant {id} not found")));
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::{dining_table, test_pool};
    use shared::models::DiningTableCreate;

    fn minimal_create(name: &str, slug: &str) -> RestaurantCreate {
        RestaurantCreate {
            name: name.to_string(),
            slug: slug.to_string(),
            phone: None,
            email: None,
            address: None,
            service_charge_pct: None,
            gst_no: None,
            languages: None,
        }
    }

    #[tokio::test]
    async fn test_create_applies_defaults() {
        let pool = test_pool().await;
        let r = create(&pool, minimal_create("Cafe X", "cafe-x")).await.unwrap();

        assert!(r.id > 0);
        assert!(r.is_active);
        assert_eq!(r.service_charge_pct, 0.0);
        assert_eq!(r.languages, None);
        assert!(r.created_at > 0);
        assert_eq!(r.created_at, r.updated_at);

        let fetched = find_by_id(&pool, r.id).await.unwrap().unwrap();
        assert_eq!(fetched.slug, "cafe-x");
        assert!(fetched.is_active);
    }

    #[tokio::test]
    async fn test_create_preserves_fields() {
        let pool = test_pool().await;
        let data = RestaurantCreate {
            name: "Golden Wok".to_string(),
            slug: "golden-wok".to_string(),
            phone: Some("+34 600 000 000".to_string()),
            email: Some("info@goldenwok.example".to_string()),
            address: Some("Calle Mayor 1".to_string()),
            service_charge_pct: Some(12.5),
            gst_no: Some("GST-42".to_string()),
            languages: Some(vec!["es".to_string(), "zh".to_string(), "en".to_string()]),
        };
        let r = create(&pool, data).await.unwrap();

        assert_eq!(r.service_charge_pct, 12.5);
        // Language order survives the JSON round trip
        assert_eq!(
            r.languages,
            Some(vec!["es".to_string(), "zh".to_string(), "en".to_string()])
        );

        let by_slug = find_by_slug(&pool, "golden-wok").await.unwrap().unwrap();
        assert_eq!(by_slug.id, r.id);
    }

    #[tokio::test]
    async fn test_create_duplicate_slug_conflicts() {
        let pool = test_pool().await;
        create(&pool, minimal_create("First", "cafe-x")).await.unwrap();

        let err = create(&pool, minimal_create("Second", "cafe-x"))
            .await
            .unwrap_err();
        assert!(matches!(err, RepoError::Duplicate(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn test_slug_unique_even_when_inactive() {
        let pool = test_pool().await;
        let r = create(&pool, minimal_create("First", "cafe-x")).await.unwrap();

        // Deactivate, then try to reuse the slug
        update(
            &pool,
            r.id,
            RestaurantUpdate {
                is_active: Some(false),
                ..Default::default()
            },
        )
        .await
        .unwrap();

        let err = create(&pool, minimal_create("Second", "cafe-x"))
            .await
            .unwrap_err();
        assert!(matches!(err, RepoError::Duplicate(_)));
    }

    #[tokio::test]
    async fn test_unique_constraint_maps_to_duplicate() {
        // Bypass the pre-check: a raw duplicate insert (the concurrent-create
        // race) must still come back as Duplicate
        let pool = test_pool().await;
        create(&pool, minimal_create("First", "cafe-x")).await.unwrap();

        let err: RepoError = sqlx::query(
            "INSERT INTO restaurant (name, slug, created_at, updated_at) VALUES ('Racer', 'cafe-x', 1, 1)",
        )
        .execute(&pool)
        .await
        .unwrap_err()
        .into();
        assert!(matches!(err, RepoError::Duplicate(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn test_update_partial() {
        let pool = test_pool().await;
        let r = create(&pool, minimal_create("Cafe X", "cafe-x")).await.unwrap();

        let updated = update(
            &pool,
            r.id,
            RestaurantUpdate {
                phone: Some("+34 600 111 222".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

        assert_eq!(updated.phone.as_deref(), Some("+34 600 111 222"));
        // Untouched fields survive
        assert_eq!(updated.name, "Cafe X");
        assert_eq!(updated.slug, "cafe-x");
        assert!(updated.updated_at >= r.updated_at);
    }

    #[tokio::test]
    async fn test_update_slug_conflict() {
        let pool = test_pool().await;
        create(&pool, minimal_create("First", "cafe-x")).await.unwrap();
        let second = create(&pool, minimal_create("Second", "cafe-y")).await.unwrap();

        let err = update(
            &pool,
            second.id,
            RestaurantUpdate {
                slug: Some("cafe-x".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, RepoError::Duplicate(_)));
    }

    #[tokio::test]
    async fn test_update_same_slug_is_noop_conflict_wise() {
        let pool = test_pool().await;
        let r = create(&pool, minimal_create("Cafe X", "cafe-x")).await.unwrap();

        // Re-submitting the current slug must not trip the duplicate check
        let updated = update(
            &pool,
            r.id,
            RestaurantUpdate {
                slug: Some("cafe-x".to_string()),
                name: Some("Cafe X Renamed".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        assert_eq!(updated.name, "Cafe X Renamed");
    }

    #[tokio::test]
    async fn test_update_not_found() {
        let pool = test_pool().await;
        let err = update(&pool, 999, RestaurantUpdate::default())
            .await
            .unwrap_err();
        assert!(matches!(err, RepoError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_not_found() {
        let pool = test_pool().await;
        let err = delete(&pool, 999).await.unwrap_err();
        assert!(matches!(err, RepoError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_cascades_to_tables() {
        let pool = test_pool().await;
        let r = create(&pool, minimal_create("Cafe X", "cafe-x")).await.unwrap();

        for code in ["F0T1", "F0T2", "F1T1"] {
            dining_table::create(
                &pool,
                r.id,
                DiningTableCreate {
                    table_code: code.to_string(),
                    floor_name: None,
                    status: None,
                    max_seats: None,
                },
            )
            .await
            .unwrap();
        }

        delete(&pool, r.id).await.unwrap();

        assert!(find_by_id(&pool, r.id).await.unwrap().is_none());
        let orphans: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM dining_table WHERE restaurant_id = ?")
                .bind(r.id)
                .fetch_one(&pool)
                .await
                .unwrap();
        assert_eq!(orphans, 0, "cascade must leave no tables behind");
    }
}
