//! Database service lifecycle: data survives a close/reopen cycle and
//! migrations are idempotent across restarts.

use onboard_server::db::repository::restaurant;
use onboard_server::db::DbService;
use shared::models::RestaurantCreate;

#[tokio::test]
async fn test_data_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("onboard.db");
    let db_path = db_path.to_str().unwrap();

    {
        let db = DbService::new(db_path).await.unwrap();
        restaurant::create(
            &db.pool,
            RestaurantCreate {
                name: "Cafe X".to_string(),
                slug: "cafe-x".to_string(),
                phone: None,
                email: None,
                address: None,
                service_charge_pct: None,
                gst_no: None,
                languages: Some(vec!["en".to_string(), "es".to_string()]),
            },
        )
        .await
        .unwrap();
        db.pool.close().await;
    }

    // Reopen: migrations re-run as a no-op, data is still there
    let db = DbService::new(db_path).await.unwrap();
    let found = restaurant::find_by_slug(&db.pool, "cafe-x")
        .await
        .unwrap()
        .expect("restaurant persisted across reopen");
    assert_eq!(found.name, "Cafe X");
    assert_eq!(
        found.languages,
        Some(vec!["en".to_string(), "es".to_string()])
    );
    db.pool.close().await;
}
