use chrono::{Duration, Utc};
use sea_orm::{ActiveModelTrait, Set};

use titledb::entity::{arm9, cia, tdsx};
use titledb::error::CatalogError;
use titledb::{ingest, repository};

use crate::common::{self, arm9_input, cia_input, setup, tdsx_input};

#[tokio::test]
async fn supersede_leaves_exactly_one_active_cia() {
    let db = setup().await;
    let e = common::create_entry(&db, "Launcher", None).await;
    let v1 = ingest::supersede_cia(&db, cia_input(Some(e.id), None, "https://example.com/1.cia"))
        .await
        .unwrap();
    let v2 = ingest::supersede_cia(&db, cia_input(Some(e.id), None, "https://example.com/2.cia"))
        .await
        .unwrap();

    let active = repository::active_cia_for_entry(&db, e.id).await.unwrap();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].id, v2.id);

    let old = repository::find::<cia::Entity, _>(&db, v1.id).await.unwrap();
    assert!(!old.active);
    assert!(old.updated_at >= v1.updated_at);
}

#[tokio::test]
async fn supersede_repairs_two_active_rows() {
    let db = setup().await;
    let e = common::create_entry(&db, "Launcher", None).await;
    for url in ["https://example.com/1.cia", "https://example.com/2.cia"] {
        repository::create_cia(&db, cia_input(Some(e.id), None, url))
            .await
            .unwrap();
    }
    assert_eq!(repository::active_cia_for_entry(&db, e.id).await.unwrap().len(), 2);

    ingest::supersede_cia(&db, cia_input(Some(e.id), None, "https://example.com/3.cia"))
        .await
        .unwrap();
    assert_eq!(repository::active_cia_for_entry(&db, e.id).await.unwrap().len(), 1);
}

#[tokio::test]
async fn supersede_only_touches_the_same_entry() {
    let db = setup().await;
    let a = common::create_entry(&db, "A", None).await;
    let b = common::create_entry(&db, "B", None).await;
    ingest::supersede_tdsx(&db, tdsx_input(Some(a.id), None, None, "https://example.com/a.3dsx"))
        .await
        .unwrap();
    ingest::supersede_tdsx(&db, tdsx_input(Some(b.id), None, None, "https://example.com/b.3dsx"))
        .await
        .unwrap();

    assert_eq!(repository::active_tdsx_for_entry(&db, a.id).await.unwrap().len(), 1);
    assert_eq!(repository::active_tdsx_for_entry(&db, b.id).await.unwrap().len(), 1);
    assert_eq!(
        repository::list_active::<tdsx::Entity, _>(&db).await.unwrap().len(),
        2
    );
}

#[tokio::test]
async fn supersede_without_entry_just_inserts() {
    let db = setup().await;
    ingest::supersede_arm9(&db, arm9_input(None, None, "https://example.com/1.bin"))
        .await
        .unwrap();
    ingest::supersede_arm9(&db, arm9_input(None, None, "https://example.com/2.bin"))
        .await
        .unwrap();

    assert_eq!(
        repository::list_active::<arm9::Entity, _>(&db).await.unwrap().len(),
        2
    );
}

#[tokio::test]
async fn invalid_version_is_rejected_and_old_row_stays_active() {
    let db = setup().await;
    let e = common::create_entry(&db, "Launcher", None).await;
    let v1 = ingest::supersede_cia(&db, cia_input(Some(e.id), None, "https://example.com/1.cia"))
        .await
        .unwrap();

    let err = ingest::supersede_cia(&db, cia_input(Some(e.id), None, "nope"))
        .await
        .unwrap_err();
    assert!(matches!(err, CatalogError::Validation(_)));

    let active = repository::active_cia_for_entry(&db, e.id).await.unwrap();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].id, v1.id);
}

#[tokio::test]
async fn retired_row_keeps_a_future_updated_at() {
    let db = setup().await;
    let e = common::create_entry(&db, "Launcher", None).await;
    let v1 = ingest::supersede_cia(&db, cia_input(Some(e.id), None, "https://example.com/1.cia"))
        .await
        .unwrap();

    let ahead = Utc::now() + Duration::hours(1);
    let mut row: cia::ActiveModel = v1.clone().into();
    row.updated_at = Set(ahead);
    row.update(&db).await.unwrap();

    ingest::supersede_cia(&db, cia_input(Some(e.id), None, "https://example.com/2.cia"))
        .await
        .unwrap();

    let old = repository::find::<cia::Entity, _>(&db, v1.id).await.unwrap();
    assert!(!old.active);
    assert!(old.updated_at >= ahead, "updated_at moved backwards");
}
