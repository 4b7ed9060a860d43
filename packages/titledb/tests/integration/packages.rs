use serde_json::{Value, json};

use titledb::entity::cia;
use titledb::error::CatalogError;
use titledb::models::cia::{CiaSchema, CiaV0};
use titledb::models::tdsx::TdsxSchema;
use titledb::{render, repository};

use crate::common::{self, arm9_input, cia_input, keys, setup, tdsx_input};

mod cia_views {
    use super::*;

    #[tokio::test]
    async fn flat_cia_lists_fields_in_declaration_order() {
        let db = setup().await;
        let created = repository::create_cia(&db, cia_input(None, None, "https://example.com/a.cia"))
            .await
            .unwrap();

        let value = serde_json::to_value(CiaSchema::from(created)).unwrap();
        assert_eq!(
            keys(&value),
            [
                "id", "active", "version", "size", "mtime", "url", "path", "etag", "sha256",
                "entry_id", "assets_id", "titleid", "name_s", "name_l", "publisher", "icon_s",
                "icon_l"
            ]
        );
        assert_eq!(value["mtime"], json!("2016-05-01T12:00:00Z"));
        assert_eq!(value["titleid"], json!("000400000F800100"));
    }

    #[tokio::test]
    async fn legacy_view_renames_and_uses_epoch_mtime() {
        let db = setup().await;
        let created = repository::create_cia(&db, cia_input(None, None, "https://example.com/a.cia"))
            .await
            .unwrap();

        let value = serde_json::to_value(CiaV0::from(created.clone())).unwrap();
        assert_eq!(
            value,
            json!({
                "id": created.id,
                "titleid": "000400000F800100",
                "name": "Foo",
                "description": "Bar",
                "author": "Baz",
                "size": 4096,
                "mtime": 1_462_104_000,
                "url": "https://example.com/a.cia",
            })
        );
    }

    #[tokio::test]
    async fn legacy_listing_skips_inactive_rows() {
        let db = setup().await;
        let kept = repository::create_cia(&db, cia_input(None, None, "https://example.com/a.cia"))
            .await
            .unwrap();
        let hidden = repository::create_cia(&db, cia_input(None, None, "https://example.com/b.cia"))
            .await
            .unwrap();
        repository::set_active::<cia::Entity, _>(&db, hidden.id, false)
            .await
            .unwrap();

        let rows = render::list_cia_v0(&db).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, kept.id);
    }

    #[tokio::test]
    async fn nested_cia_embeds_entry_summary_and_assets() {
        let db = setup().await;
        let games = common::create_category(&db, "Games").await;
        let e = common::create_entry(&db, "Launcher", Some(games.id)).await;
        let bundle = common::create_assets(&db).await;
        let created = repository::create_cia(
            &db,
            cia_input(Some(e.id), Some(bundle.id), "https://example.com/a.cia"),
        )
        .await
        .unwrap();

        let value = serde_json::to_value(render::load_cia_nested(&db, created.id).await.unwrap())
            .unwrap();
        assert!(value.get("entry_id").is_none());
        assert!(value.get("assets_id").is_none());
        assert_eq!(
            keys(&value["entry"]),
            ["id", "name", "author", "headline", "description", "url", "category"]
        );
        assert_eq!(value["entry"]["category"], json!("Games"));
        assert_eq!(value["assets"]["mapping"], json!(r#"{"icon":"icons/app.png"}"#));
        assert!(value["assets"].get("active").is_none());
    }

    #[tokio::test]
    async fn two_active_rows_on_one_entry_are_both_returned() {
        let db = setup().await;
        let e = common::create_entry(&db, "Launcher", None).await;
        let first = repository::create_cia(&db, cia_input(Some(e.id), None, "https://example.com/1.cia"))
            .await
            .unwrap();
        let second = repository::create_cia(&db, cia_input(Some(e.id), None, "https://example.com/2.cia"))
            .await
            .unwrap();

        let active = repository::active_cia_for_entry(&db, e.id).await.unwrap();
        let ids: Vec<i32> = active.iter().map(|m| m.id).collect();
        assert_eq!(ids, [first.id, second.id]);
    }

    #[tokio::test]
    async fn malformed_titleid_is_rejected() {
        let db = setup().await;
        let mut input = cia_input(None, None, "https://example.com/a.cia");
        input.titleid = "not-hex".into();

        let err = repository::create_cia(&db, input).await.unwrap_err();
        assert!(matches!(err, CatalogError::Validation(_)));
    }

    #[tokio::test]
    async fn missing_parent_row_is_a_validation_error() {
        let db = setup().await;
        let err = repository::create_cia(&db, cia_input(Some(999), None, "https://example.com/a.cia"))
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::Validation(_)), "got {err:?}");
        assert!(render::list_cia_v0(&db).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn orphaned_rows_are_representable() {
        let db = setup().await;
        let created = repository::create_cia(&db, cia_input(None, None, "https://example.com/a.cia"))
            .await
            .unwrap();

        let nested = render::load_cia_nested(&db, created.id).await.unwrap();
        assert_eq!(nested.entry, None);
        assert_eq!(nested.assets, None);
    }
}

mod tdsx_views {
    use super::*;

    #[tokio::test]
    async fn name_stays_textual() {
        let db = setup().await;
        let created = repository::create_tdsx(&db, tdsx_input(None, None, None, "https://example.com/a.3dsx"))
            .await
            .unwrap();

        let value = serde_json::to_value(TdsxSchema::from(created)).unwrap();
        assert_eq!(value["name"], json!("boot"));
    }

    #[tokio::test]
    async fn nested_tdsx_embeds_sidecars_without_cycle() {
        let db = setup().await;
        let e = common::create_entry(&db, "Launcher", None).await;
        let smdh = common::create_smdh(&db).await;
        let xml = common::create_xml(&db).await;
        let created = repository::create_tdsx(
            &db,
            tdsx_input(Some(e.id), Some(smdh.id), Some(xml.id), "https://example.com/a.3dsx"),
        )
        .await
        .unwrap();

        let value =
            serde_json::to_value(render::load_tdsx_nested(&db, created.id).await.unwrap()).unwrap();
        for fk in ["entry_id", "assets_id", "smdh_id", "xml_id"] {
            assert!(value.get(fk).is_none(), "{fk} emitted");
        }
        assert_eq!(value["smdh"]["id"], json!(smdh.id));
        assert_eq!(value["smdh"]["name_s"], json!("Launcher"));
        assert!(value["smdh"].get("tdsx").is_none());
        assert!(value["smdh"].get("active").is_none());
        assert_eq!(value["xml"]["id"], json!(xml.id));
        assert!(value["xml"].get("tdsx").is_none());
        assert_eq!(value["entry"]["name"], json!("Launcher"));
        assert_eq!(value["assets"], Value::Null);
    }
}

mod arm9_views {
    use super::*;

    #[tokio::test]
    async fn nested_arm9_embeds_entry_and_assets() {
        let db = setup().await;
        let e = common::create_entry(&db, "Launcher", None).await;
        let bundle = common::create_assets(&db).await;
        let created = repository::create_arm9(
            &db,
            arm9_input(Some(e.id), Some(bundle.id), "https://example.com/a.bin"),
        )
        .await
        .unwrap();

        let value =
            serde_json::to_value(render::load_arm9_nested(&db, created.id).await.unwrap()).unwrap();
        assert_eq!(
            keys(&value),
            [
                "id", "active", "version", "size", "mtime", "url", "path", "etag", "sha256",
                "entry", "assets"
            ]
        );
        assert_eq!(value["entry"]["id"], json!(e.id));
        assert_eq!(value["entry"]["active"], json!(true));
        assert_eq!(
            keys(&value["entry"]),
            ["id", "active", "name", "author", "headline", "description", "url", "category"]
        );
        assert_eq!(value["assets"]["id"], json!(bundle.id));
        assert_eq!(value["assets"]["active"], json!(true));
        assert!(value["assets"].get("cia").is_none());
    }
}

mod assets_views {
    use super::*;

    #[tokio::test]
    async fn assets_list_active_dependents_with_their_entry() {
        let db = setup().await;
        let e = common::create_entry(&db, "Launcher", None).await;
        let bundle = common::create_assets(&db).await;
        repository::create_cia(&db, cia_input(Some(e.id), Some(bundle.id), "https://example.com/a.cia"))
            .await
            .unwrap();
        let mut tdsx = tdsx_input(Some(e.id), None, None, "https://example.com/a.3dsx");
        tdsx.assets_id = Some(bundle.id);
        repository::create_tdsx(&db, tdsx).await.unwrap();
        repository::create_arm9(&db, arm9_input(None, Some(bundle.id), "https://example.com/a.bin"))
            .await
            .unwrap();

        let value =
            serde_json::to_value(render::load_assets_nested(&db, bundle.id).await.unwrap()).unwrap();
        assert_eq!(value["cia"].as_array().unwrap().len(), 1);
        assert_eq!(value["tdsx"].as_array().unwrap().len(), 1);
        assert_eq!(value["arm9"].as_array().unwrap().len(), 1);

        for kind in ["cia", "tdsx", "arm9"] {
            let child = &value[kind][0];
            assert!(child.get("assets").is_none(), "{kind} re-embeds assets");
            assert!(child.get("assets_id").is_none());
            assert!(child.get("active").is_none());
        }
        assert_eq!(value["cia"][0]["entry"]["id"], json!(e.id));
        assert_eq!(value["arm9"][0]["entry"], Value::Null);
    }

    #[tokio::test]
    async fn mapping_resources_parse_back() {
        let db = setup().await;
        let bundle = common::create_assets(&db).await;
        let resources = bundle.resources().unwrap();
        assert_eq!(resources.get("icon"), Some(&json!("icons/app.png")));
    }
}
