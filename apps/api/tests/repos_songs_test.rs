mod common;

use common::setup_db;
use ourchants_api::errors::domain::DomainError;
use ourchants_api::repos::songs::{
    self, ListParams, SongDraft, SongUpdate, DEFAULT_LIST_LIMIT,
};
use time::macros::date;

fn draft(id: &str, name: &str, artist: &str, genre: &str) -> SongDraft {
    SongDraft {
        id: Some(id.into()),
        name: Some(name.into()),
        artist: Some(artist.into()),
        album: Some("Hymns".into()),
        release_date: Some(date!(2023 - 01 - 01)),
        genre: Some(genre.into()),
        duration_in_seconds: Some(240),
    }
}

#[tokio::test]
async fn create_then_get_returns_equal_fields() {
    let db = setup_db().await;

    let created = songs::create_song(&db, draft("s1", "Amazing Grace", "Unknown", "Gospel"))
        .await
        .unwrap();
    assert!(created.created_at.is_some());
    assert!(created.updated_at.is_some());

    let fetched = songs::get_song(&db, "s1").await.unwrap();
    assert_eq!(fetched.id, "s1");
    assert_eq!(fetched.name, "Amazing Grace");
    assert_eq!(fetched.artist, "Unknown");
    assert_eq!(fetched.album, "Hymns");
    assert_eq!(fetched.release_date, date!(2023 - 01 - 01));
    assert_eq!(fetched.genre, "Gospel");
    assert_eq!(fetched.duration_in_seconds, 240);
}

#[tokio::test]
async fn create_duplicate_id_is_invalid_data_not_db_error() {
    let db = setup_db().await;

    songs::create_song(&db, draft("s1", "First", "A", "Gospel"))
        .await
        .unwrap();
    let err = songs::create_song(&db, draft("s1", "Second", "B", "Folk"))
        .await
        .unwrap_err();
    assert!(
        matches!(err, DomainError::InvalidData(_)),
        "expected InvalidData, got {err:?}"
    );
}

#[tokio::test]
async fn get_absent_id_is_not_found() {
    let db = setup_db().await;

    let err = songs::get_song(&db, "missing").await.unwrap_err();
    assert_eq!(
        err,
        DomainError::not_found("Song with ID missing not found")
    );
}

#[tokio::test]
async fn update_changes_only_supplied_fields_and_refreshes_updated_at() {
    let db = setup_db().await;

    let created = songs::create_song(&db, draft("s1", "Old Name", "Keeper", "Gospel"))
        .await
        .unwrap();

    let update = SongUpdate {
        name: Some("New Name".into()),
        ..Default::default()
    };
    let updated = songs::update_song(&db, "s1", update).await.unwrap();

    assert_eq!(updated.name, "New Name");
    assert_eq!(updated.artist, "Keeper");
    assert_eq!(updated.album, created.album);
    assert_eq!(updated.duration_in_seconds, created.duration_in_seconds);
    assert_eq!(updated.created_at, created.created_at);
    assert_ne!(updated.updated_at, created.updated_at);
}

#[tokio::test]
async fn update_absent_id_is_not_found() {
    let db = setup_db().await;

    let update = SongUpdate {
        name: Some("New".into()),
        ..Default::default()
    };
    let err = songs::update_song(&db, "missing", update).await.unwrap_err();
    assert_eq!(
        err,
        DomainError::not_found("Song with ID missing not found")
    );
}

#[tokio::test]
async fn update_with_empty_patch_is_invalid_data() {
    let db = setup_db().await;

    songs::create_song(&db, draft("s1", "Name", "A", "Gospel"))
        .await
        .unwrap();
    let err = songs::update_song(&db, "s1", SongUpdate::default())
        .await
        .unwrap_err();
    assert_eq!(err, DomainError::invalid_data("No update data provided"));
}

#[tokio::test]
async fn delete_reports_whether_a_row_was_removed() {
    let db = setup_db().await;

    songs::create_song(&db, draft("s1", "Name", "A", "Gospel"))
        .await
        .unwrap();

    assert!(songs::delete_song(&db, "s1").await.unwrap());
    // Physical delete: the row is gone.
    assert!(songs::get_song(&db, "s1").await.is_err());
    // Absent id is not an error, just false.
    assert!(!songs::delete_song(&db, "s1").await.unwrap());
    assert!(!songs::delete_song(&db, "never-existed").await.unwrap());
}

#[tokio::test]
async fn list_orders_by_name_and_paginates() {
    let db = setup_db().await;

    for (id, name) in [("s1", "Gamma"), ("s2", "Alpha"), ("s3", "Beta")] {
        songs::create_song(&db, draft(id, name, "A", "Gospel"))
            .await
            .unwrap();
    }

    let all = songs::list_songs(&db, ListParams::default()).await.unwrap();
    let names: Vec<&str> = all.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, ["Alpha", "Beta", "Gamma"]);

    let page = songs::list_songs(
        &db,
        ListParams {
            limit: Some(1),
            offset: Some(1),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(page.len(), 1);
    assert_eq!(page[0].name, "Beta");
}

#[tokio::test]
async fn list_filters_combine_with_and() {
    let db = setup_db().await;

    songs::create_song(&db, draft("s1", "One", "Miriam", "Gospel"))
        .await
        .unwrap();
    songs::create_song(&db, draft("s2", "Two", "Miriam", "Folk"))
        .await
        .unwrap();
    songs::create_song(&db, draft("s3", "Three", "Asaph", "Gospel"))
        .await
        .unwrap();

    let gospel = songs::list_songs(
        &db,
        ListParams {
            genre: Some("Gospel".into()),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(gospel.len(), 2);
    assert!(gospel.iter().all(|s| s.genre == "Gospel"));

    let both = songs::list_songs(
        &db,
        ListParams {
            genre: Some("Gospel".into()),
            artist: Some("Miriam".into()),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(both.len(), 1);
    assert_eq!(both[0].id, "s1");

    let none = songs::list_songs(
        &db,
        ListParams {
            genre: Some("Jazz".into()),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert!(none.is_empty());
}

#[tokio::test]
async fn list_default_limit_is_the_documented_contract() {
    assert_eq!(DEFAULT_LIST_LIMIT, 100);

    let db = setup_db().await;
    // An empty table lists as an empty page, not an error.
    let page = songs::list_songs(&db, ListParams::default()).await.unwrap();
    assert!(page.is_empty());
}
