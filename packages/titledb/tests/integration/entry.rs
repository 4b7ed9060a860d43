use serde_json::{Value, json};

use titledb::entity::{category, entry};
use titledb::error::CatalogError;
use titledb::models::category::CategorySchema;
use titledb::models::entry::{EntryInput, EntrySchema};
use titledb::{render, repository};

use crate::common::{self, arm9_input, cia_input, keys, setup, tdsx_input};

mod flat_views {
    use super::*;

    #[tokio::test]
    async fn entry_load_then_dump_reproduces_input() {
        let db = setup().await;
        let games = common::create_category(&db, "Games").await;

        let raw = json!({
            "active": true,
            "category_id": games.id,
            "name": "Checkpoint",
            "author": "BernardoGiordano",
            "headline": "Save manager",
            "description": "Backs up and restores save data",
            "url": "https://github.com/example/checkpoint",
        });
        let input: EntryInput = serde_json::from_value(raw.clone()).unwrap();
        let created = repository::create_entry(&db, input).await.unwrap();

        let dumped = serde_json::to_value(EntrySchema::from(created.clone())).unwrap();
        for (key, value) in raw.as_object().unwrap() {
            assert_eq!(&dumped[key], value, "field {key} changed");
        }
        assert_eq!(dumped["id"], json!(created.id));
    }

    #[tokio::test]
    async fn flat_views_never_emit_timestamps() {
        let db = setup().await;
        let games = common::create_category(&db, "Games").await;
        let e = common::create_entry(&db, "Launcher", Some(games.id)).await;

        let cat = serde_json::to_value(CategorySchema::from(games)).unwrap();
        assert_eq!(keys(&cat), ["id", "name", "active"]);

        let flat = serde_json::to_value(EntrySchema::from(e)).unwrap();
        assert_eq!(
            keys(&flat),
            ["id", "active", "category_id", "name", "author", "headline", "description", "url"]
        );
    }

    #[tokio::test]
    async fn malformed_url_is_rejected_before_storage() {
        let db = setup().await;
        let input: EntryInput = serde_json::from_value(json!({
            "name": "Broken",
            "url": "not a url",
        }))
        .unwrap();

        let err = repository::create_entry(&db, input).await.unwrap_err();
        assert!(matches!(err, CatalogError::Validation(_)));
        assert!(
            repository::list_active::<entry::Entity, _>(&db)
                .await
                .unwrap()
                .is_empty()
        );
    }
}

mod lifecycle {
    use super::*;

    #[tokio::test]
    async fn update_keeps_updated_at_non_decreasing() {
        let db = setup().await;
        let e = common::create_entry(&db, "Launcher", None).await;
        assert_eq!(e.created_at, e.updated_at);

        let input: EntryInput =
            serde_json::from_value(json!({ "name": "Launcher 2" })).unwrap();
        let updated = repository::update_entry(&db, e.id, input).await.unwrap();

        assert_eq!(updated.name, "Launcher 2");
        assert_eq!(updated.created_at, e.created_at);
        assert!(updated.updated_at >= e.updated_at);
    }

    #[tokio::test]
    async fn update_of_missing_entry_is_not_found() {
        let db = setup().await;
        let input: EntryInput = serde_json::from_value(json!({ "name": "Ghost" })).unwrap();

        let err = repository::update_entry(&db, 42, input).await.unwrap_err();
        assert!(matches!(err, CatalogError::NotFound(_)));
    }

    #[tokio::test]
    async fn soft_delete_hides_entry_from_category() {
        let db = setup().await;
        let games = common::create_category(&db, "Games").await;
        let e = common::create_entry(&db, "Launcher", Some(games.id)).await;

        let listed = repository::active_entries_for_category(&db, games.id)
            .await
            .unwrap();
        assert_eq!(listed.len(), 1);

        repository::set_active::<entry::Entity, _>(&db, e.id, false)
            .await
            .unwrap();
        assert!(
            repository::active_entries_for_category(&db, games.id)
                .await
                .unwrap()
                .is_empty()
        );

        // The row itself survives.
        let row = repository::find::<entry::Entity, _>(&db, e.id).await.unwrap();
        assert!(!row.active);
        assert!(row.updated_at >= e.updated_at);

        repository::set_active::<entry::Entity, _>(&db, e.id, true)
            .await
            .unwrap();
        assert_eq!(
            repository::active_entries_for_category(&db, games.id)
                .await
                .unwrap()
                .len(),
            1
        );
    }

    #[tokio::test]
    async fn soft_deleted_category_still_names_its_entries() {
        let db = setup().await;
        let games = common::create_category(&db, "Games").await;
        let e = common::create_entry(&db, "Launcher", Some(games.id)).await;

        repository::set_active::<category::Entity, _>(&db, games.id, false)
            .await
            .unwrap();

        let nested = render::load_entry_nested(&db, e.id).await.unwrap();
        assert_eq!(nested.category.as_deref(), Some("Games"));
    }
}

mod nested_view {
    use super::*;

    #[tokio::test]
    async fn entry_embeds_active_variants_without_back_references() {
        let db = setup().await;
        let games = common::create_category(&db, "Games").await;
        let e = common::create_entry(&db, "Launcher", Some(games.id)).await;
        let bundle = common::create_assets(&db).await;
        let smdh = common::create_smdh(&db).await;
        let xml = common::create_xml(&db).await;

        repository::create_cia(&db, cia_input(Some(e.id), Some(bundle.id), "https://example.com/a.cia"))
            .await
            .unwrap();
        repository::create_tdsx(
            &db,
            tdsx_input(Some(e.id), Some(smdh.id), Some(xml.id), "https://example.com/a.3dsx"),
        )
        .await
        .unwrap();
        repository::create_arm9(&db, arm9_input(Some(e.id), None, "https://example.com/a.bin"))
            .await
            .unwrap();

        let nested = render::load_entry_nested(&db, e.id).await.unwrap();
        let value = serde_json::to_value(&nested).unwrap();

        assert_eq!(
            keys(&value),
            [
                "id", "active", "name", "author", "headline", "description", "url", "category",
                "cia", "tdsx", "arm9"
            ]
        );
        assert_eq!(value["category"], json!("Games"));

        let cia = &value["cia"][0];
        assert!(cia.get("entry").is_none());
        assert!(cia.get("entry_id").is_none());
        assert!(cia.get("active").is_none());
        assert!(cia.get("icon_s").is_none());
        assert_eq!(cia["assets"]["id"], json!(bundle.id));
        assert!(cia["assets"].get("active").is_none());

        let tdsx = &value["tdsx"][0];
        assert!(tdsx.get("entry").is_none());
        assert!(tdsx["smdh"].get("icon_l").is_none());
        assert!(tdsx["smdh"].get("tdsx").is_none());
        assert_eq!(tdsx["xml"]["id"], json!(xml.id));
        assert_eq!(tdsx["assets"], Value::Null);

        let arm9 = &value["arm9"][0];
        assert!(arm9.get("entry").is_none());
        assert_eq!(arm9["assets"], Value::Null);

        assert!(!value.to_string().contains("created_at"));
        assert!(!value.to_string().contains("updated_at"));
    }

    #[tokio::test]
    async fn inactive_variants_are_not_embedded() {
        let db = setup().await;
        let e = common::create_entry(&db, "Launcher", None).await;
        let old = repository::create_cia(&db, cia_input(Some(e.id), None, "https://example.com/old.cia"))
            .await
            .unwrap();
        repository::set_active::<titledb::entity::cia::Entity, _>(&db, old.id, false)
            .await
            .unwrap();

        let nested = render::load_entry_nested(&db, e.id).await.unwrap();
        assert!(nested.cia.is_empty());
        assert_eq!(nested.category, None);
    }

    #[tokio::test]
    async fn missing_entry_is_not_found() {
        let db = setup().await;
        let err = render::load_entry_nested(&db, 7).await.unwrap_err();
        assert!(matches!(err, CatalogError::NotFound(_)));
    }
}
