//! Wine Delete Cascade Tests
//!
//! Deleting a wine and unpairing its cheeses is one unit:
//! - Every former referrer ends with `wine_id = null`
//! - Unrelated cheeses keep their pairing
//! - A missing wine changes nothing
//! - Cheese writes racing the delete never leave a dangling reference

use pairings::model::{NewCheese, NewWine};
use pairings::store::{Database, Repository, StoreConfig, StoreError};
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn wine(name: &str) -> NewWine {
    NewWine {
        name: name.to_string(),
        description: "dry".to_string(),
        country: "France".to_string(),
        colour: "red".to_string(),
    }
}

fn cheese(name: &str, wine_id: i64) -> NewCheese {
    NewCheese {
        name: name.to_string(),
        description: Some("soft".to_string()),
        country: "France".to_string(),
        milk_type: "cow".to_string(),
        wine_id,
    }
}

async fn memory_db() -> Database {
    Database::open(&StoreConfig::in_memory()).await.unwrap()
}

// =============================================================================
// Cascade Tests
// =============================================================================

#[tokio::test]
async fn test_delete_unlinks_every_referrer() {
    let db = memory_db().await;
    let wines = db.wines();
    let cheeses = db.cheeses();

    let merlot = wines.create(&wine("Merlot")).await.unwrap();
    let rioja = wines.create(&wine("Rioja")).await.unwrap();

    let brie = cheeses.create(&cheese("Brie", merlot.id)).await.unwrap();
    let camembert = cheeses.create(&cheese("Camembert", merlot.id)).await.unwrap();
    let manchego = cheeses.create(&cheese("Manchego", rioja.id)).await.unwrap();

    let deleted = wines.delete(merlot.id).await.unwrap();
    assert_eq!(deleted, Some(merlot.clone()));

    for id in [brie.id, camembert.id] {
        let unpaired = cheeses.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(unpaired.wine_id, None);
    }

    let untouched = cheeses.get_by_id(manchego.id).await.unwrap().unwrap();
    assert_eq!(untouched.wine_id, Some(rioja.id));

    assert!(cheeses
        .list()
        .await
        .unwrap()
        .iter()
        .all(|c| c.wine_id != Some(merlot.id)));
    assert_eq!(wines.list().await.unwrap(), vec![rioja]);
}

#[tokio::test]
async fn test_delete_without_referrers() {
    let db = memory_db().await;
    let wines = db.wines();

    let merlot = wines.create(&wine("Merlot")).await.unwrap();
    let id = merlot.id;
    assert_eq!(wines.delete(id).await.unwrap(), Some(merlot));
    assert_eq!(wines.get_by_id(id).await.unwrap(), None);
}

#[tokio::test]
async fn test_delete_missing_wine_changes_nothing() {
    let db = memory_db().await;
    let wines = db.wines();
    let cheeses = db.cheeses();

    let merlot = wines.create(&wine("Merlot")).await.unwrap();
    let brie = cheeses.create(&cheese("Brie", merlot.id)).await.unwrap();

    assert_eq!(wines.delete(merlot.id + 100).await.unwrap(), None);
    assert_eq!(cheeses.get_by_id(brie.id).await.unwrap(), Some(brie));
    assert_eq!(wines.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_pairing_with_deleted_wine_rejected() {
    let db = memory_db().await;
    let wines = db.wines();
    let cheeses = db.cheeses();

    let merlot = wines.create(&wine("Merlot")).await.unwrap();
    wines.delete(merlot.id).await.unwrap();

    let err = cheeses.create(&cheese("Brie", merlot.id)).await.unwrap_err();
    assert!(matches!(err, StoreError::ForeignKeyViolation));
}

#[tokio::test]
async fn test_repairing_existing_cheese_to_missing_wine_rejected() {
    let db = memory_db().await;
    let wines = db.wines();
    let cheeses = db.cheeses();

    let merlot = wines.create(&wine("Merlot")).await.unwrap();
    let brie = cheeses.create(&cheese("Brie", merlot.id)).await.unwrap();

    let err = cheeses
        .update(brie.id, &cheese("Brie", merlot.id + 1))
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::ForeignKeyViolation));
    assert_eq!(cheeses.get_by_id(brie.id).await.unwrap(), Some(brie));
}

// =============================================================================
// Concurrency Tests
// =============================================================================

/// Cheese inserts race a wine delete on a pooled file database. Each insert
/// either lands before the delete (and is unpaired) or fails the foreign key.
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_pairing_never_dangles() {
    let tmp = TempDir::new().unwrap();
    let config = StoreConfig {
        max_connections: 4,
        ..StoreConfig::with_url(format!("sqlite://{}", tmp.path().join("race.db").display()))
    };
    let db = Database::open(&config).await.unwrap();

    let merlot_id = db.wines().create(&wine("Merlot")).await.unwrap().id;

    let mut inserts = Vec::new();
    for i in 0..16 {
        let cheeses = db.cheeses();
        inserts.push(tokio::spawn(async move {
            cheeses.create(&cheese(&format!("Cheese {}", i), merlot_id)).await
        }));
    }

    let wines = db.wines();
    let delete = tokio::spawn(async move { wines.delete(merlot_id).await });

    for insert in inserts {
        match insert.await.unwrap() {
            Ok(_) | Err(StoreError::ForeignKeyViolation) => {}
            Err(other) => panic!("unexpected store error: {}", other),
        }
    }
    assert!(delete.await.unwrap().unwrap().is_some());

    assert!(db
        .cheeses()
        .list()
        .await
        .unwrap()
        .iter()
        .all(|c| c.wine_id.is_none()));

    db.close().await;
}
