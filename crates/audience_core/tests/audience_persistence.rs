use audience_core::db::{open_db, open_db_in_memory};
use audience_core::{
    AudienceListQuery, AudienceService, AudienceServiceError, AudienceSnapshot, Bucket, Catalog,
    DragEvent, DragLocation, SaveAudienceRequest, SelectionStore, SqliteAudienceRepository,
};
use rusqlite::Connection;
use uuid::Uuid;

fn selection() -> AudienceSnapshot {
    let mut store = SelectionStore::new(Catalog::builtin());
    store.set_query("bank");
    for bucket in [Bucket::Core, Bucket::Supportive] {
        store.handle_drag_end(&DragEvent::between(
            DragLocation::new(Bucket::SearchResults, 0),
            DragLocation::new(bucket, 0),
        ));
    }
    // Drop scores so equality does not depend on float text round trips.
    let mut snapshot = store.snapshot();
    for topic in snapshot.core.iter_mut().chain(snapshot.supportive.iter_mut()) {
        topic.similarity = None;
    }
    snapshot
}

fn set_updated_at(conn: &Connection, id: Uuid, millis: i64) {
    conn.execute(
        "UPDATE audiences SET updated_at = ?1 WHERE id = ?2;",
        rusqlite::params![millis, id.to_string()],
    )
    .unwrap();
}

#[test]
fn save_then_get_round_trips_fields() {
    let conn = open_db_in_memory().unwrap();
    let service = AudienceService::new(SqliteAudienceRepository::try_new(&conn).unwrap());
    let snapshot = selection();

    let mut request = SaveAudienceRequest::new("  Retail bankers  ", snapshot.clone());
    request.tags = vec![" fintech ".to_string(), "".to_string(), "fintech".to_string()];
    request.home_page_url = Some(" https://example.com/bank ".to_string());
    let saved = service.save_audience(request).unwrap();

    assert_eq!(saved.name, "Retail bankers");
    assert_eq!(saved.tags, vec!["fintech".to_string()]);
    assert_eq!(saved.home_page_url.as_deref(), Some("https://example.com/bank"));
    assert_eq!(saved.snapshot, snapshot);

    let loaded = service.get_audience(saved.id).unwrap().unwrap();
    assert_eq!(loaded, saved);
}

#[test]
fn saving_with_existing_id_updates_in_place() {
    let conn = open_db_in_memory().unwrap();
    let service = AudienceService::new(SqliteAudienceRepository::try_new(&conn).unwrap());

    let mut first = SaveAudienceRequest::new("Draft", AudienceSnapshot::empty());
    first.tags = vec!["a".to_string(), "b".to_string()];
    let created = service.save_audience(first).unwrap();

    let mut second = SaveAudienceRequest::new("Final", selection());
    second.id = Some(created.id);
    second.tags = vec!["c".to_string()];
    let updated = service.save_audience(second).unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "Final");
    assert_eq!(updated.tags, vec!["c".to_string()]);
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at >= created.updated_at);
    assert_eq!(
        service
            .list_audiences(&AudienceListQuery::default())
            .unwrap()
            .len(),
        1
    );
}

#[test]
fn unknown_request_id_is_created_under_that_id() {
    let conn = open_db_in_memory().unwrap();
    let service = AudienceService::new(SqliteAudienceRepository::try_new(&conn).unwrap());
    let id = Uuid::new_v4();

    let mut request = SaveAudienceRequest::new("Imported", AudienceSnapshot::empty());
    request.id = Some(id);
    let saved = service.save_audience(request).unwrap();

    assert_eq!(saved.id, id);
}

#[test]
fn list_orders_by_recency_and_filters_by_tag() {
    let conn = open_db_in_memory().unwrap();
    let service = AudienceService::new(SqliteAudienceRepository::try_new(&conn).unwrap());

    let mut ids = Vec::new();
    for (name, tag) in [("One", "retail"), ("Two", "b2b"), ("Three", "retail")] {
        let mut request = SaveAudienceRequest::new(name, AudienceSnapshot::empty());
        request.tags = vec![tag.to_string()];
        ids.push(service.save_audience(request).unwrap().id);
    }
    set_updated_at(&conn, ids[0], 3_000);
    set_updated_at(&conn, ids[1], 1_000);
    set_updated_at(&conn, ids[2], 2_000);

    let all: Vec<String> = service
        .list_audiences(&AudienceListQuery::default())
        .unwrap()
        .into_iter()
        .map(|audience| audience.name)
        .collect();
    assert_eq!(all, vec!["One", "Three", "Two"]);

    let retail: Vec<String> = service
        .list_audiences(&AudienceListQuery {
            tag: Some("  retail ".to_string()),
            ..AudienceListQuery::default()
        })
        .unwrap()
        .into_iter()
        .map(|audience| audience.name)
        .collect();
    assert_eq!(retail, vec!["One", "Three"]);

    let page = service
        .list_audiences(&AudienceListQuery {
            limit: Some(1),
            offset: 1,
            ..AudienceListQuery::default()
        })
        .unwrap();
    assert_eq!(page.len(), 1);
    assert_eq!(page[0].name, "Three");
}

#[test]
fn delete_removes_audience_and_reports_missing() {
    let conn = open_db_in_memory().unwrap();
    let service = AudienceService::new(SqliteAudienceRepository::try_new(&conn).unwrap());
    let mut request = SaveAudienceRequest::new("Short lived", AudienceSnapshot::empty());
    request.tags = vec!["tmp".to_string()];
    let saved = service.save_audience(request).unwrap();

    service.delete_audience(saved.id).unwrap();

    assert!(service.get_audience(saved.id).unwrap().is_none());
    let tag_rows: i64 = conn
        .query_row("SELECT COUNT(*) FROM audience_tags;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(tag_rows, 0);
    assert!(matches!(
        service.delete_audience(saved.id),
        Err(AudienceServiceError::AudienceNotFound(id)) if id == saved.id
    ));
}

#[test]
fn load_snapshot_feeds_selection_store() {
    let conn = open_db_in_memory().unwrap();
    let service = AudienceService::new(SqliteAudienceRepository::try_new(&conn).unwrap());
    let snapshot = selection();
    let saved = service
        .save_audience(SaveAudienceRequest::new("Bankers", snapshot.clone()))
        .unwrap();

    let mut store = SelectionStore::new(Catalog::builtin());
    store.restore(service.load_snapshot(saved.id).unwrap());

    assert_eq!(store.snapshot(), snapshot);
    assert!(service.load_snapshot(Uuid::new_v4()).unwrap().is_none());
}

#[test]
fn corrupt_snapshot_loads_as_empty_buckets() {
    let conn = open_db_in_memory().unwrap();
    let service = AudienceService::new(SqliteAudienceRepository::try_new(&conn).unwrap());
    let saved = service
        .save_audience(SaveAudienceRequest::new("Broken", selection()))
        .unwrap();
    conn.execute(
        "UPDATE audiences SET snapshot_json = 'not json' WHERE id = ?1;",
        [saved.id.to_string()],
    )
    .unwrap();

    let snapshot = service.load_snapshot(saved.id).unwrap().unwrap();

    assert!(snapshot.is_empty());
}

#[test]
fn invalid_name_and_url_are_rejected() {
    let conn = open_db_in_memory().unwrap();
    let service = AudienceService::new(SqliteAudienceRepository::try_new(&conn).unwrap());

    let blank = service.save_audience(SaveAudienceRequest::new("   ", AudienceSnapshot::empty()));
    assert!(matches!(blank, Err(AudienceServiceError::InvalidName)));

    let mut request = SaveAudienceRequest::new("Named", AudienceSnapshot::empty());
    request.home_page_url = Some("ftp://example.com".to_string());
    let bad_url = service.save_audience(request);
    assert!(matches!(
        bad_url,
        Err(AudienceServiceError::InvalidHomePageUrl(_))
    ));

    assert!(service
        .list_audiences(&AudienceListQuery::default())
        .unwrap()
        .is_empty());
}

#[test]
fn file_backed_database_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("audiences.sqlite3");
    let snapshot = selection();

    let id = {
        let conn = open_db(&path).unwrap();
        let service = AudienceService::new(SqliteAudienceRepository::try_new(&conn).unwrap());
        service
            .save_audience(SaveAudienceRequest::new("Persisted", snapshot.clone()))
            .unwrap()
            .id
    };

    let conn = open_db(&path).unwrap();
    let service = AudienceService::new(SqliteAudienceRepository::try_new(&conn).unwrap());
    let loaded = service.get_audience(id).unwrap().unwrap();
    assert_eq!(loaded.name, "Persisted");
    assert_eq!(loaded.snapshot, snapshot);
}
