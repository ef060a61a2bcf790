//! SeaORM adapter for the songs repository.
//!
//! Owns statement construction. Timestamps are assigned here so create and
//! update behave the same on every backend: both set `updated_at`, only
//! insert sets `created_at`.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};
use time::OffsetDateTime;

use crate::entities::songs;
use crate::repos::songs::{NewSong, SongUpdate};

// Adapter functions return DbErr; the repos layer maps to DomainError.

pub async fn insert_song<C: ConnectionTrait>(
    conn: &C,
    song: NewSong,
) -> Result<songs::Model, sea_orm::DbErr> {
    let now = OffsetDateTime::now_utc();
    let active = songs::ActiveModel {
        id: Set(song.id),
        name: Set(song.name),
        artist: Set(song.artist),
        album: Set(song.album),
        release_date: Set(song.release_date),
        genre: Set(song.genre),
        duration_in_seconds: Set(song.duration_in_seconds),
        created_at: Set(Some(now)),
        updated_at: Set(Some(now)),
    };
    active.insert(conn).await
}

pub async fn find_song_by_id<C: ConnectionTrait>(
    conn: &C,
    id: &str,
) -> Result<Option<songs::Model>, sea_orm::DbErr> {
    songs::Entity::find_by_id(id).one(conn).await
}

/// Updates exactly the supplied fields plus `updated_at`. Fails with
/// `DbErr::RecordNotUpdated` when no row has the id.
pub async fn update_song<C: ConnectionTrait>(
    conn: &C,
    id: &str,
    update: SongUpdate,
) -> Result<songs::Model, sea_orm::DbErr> {
    let mut active = songs::ActiveModel {
        id: Set(id.to_owned()),
        ..Default::default()
    };

    if let Some(name) = update.name {
        active.name = Set(name);
    }
    if let Some(artist) = update.artist {
        active.artist = Set(artist);
    }
    if let Some(album) = update.album {
        active.album = Set(album);
    }
    if let Some(release_date) = update.release_date {
        active.release_date = Set(release_date);
    }
    if let Some(genre) = update.genre {
        active.genre = Set(genre);
    }
    if let Some(duration) = update.duration_in_seconds {
        active.duration_in_seconds = Set(duration);
    }
    active.updated_at = Set(Some(OffsetDateTime::now_utc()));

    active.update(conn).await
}

pub async fn delete_song<C: ConnectionTrait>(conn: &C, id: &str) -> Result<u64, sea_orm::DbErr> {
    let result = songs::Entity::delete_by_id(id).exec(conn).await?;
    Ok(result.rows_affected)
}

pub async fn list_songs<C: ConnectionTrait>(
    conn: &C,
    limit: u64,
    offset: u64,
    genre: Option<String>,
    artist: Option<String>,
) -> Result<Vec<songs::Model>, sea_orm::DbErr> {
    let mut query = songs::Entity::find();

    if let Some(genre) = genre {
        query = query.filter(songs::Column::Genre.eq(genre));
    }
    if let Some(artist) = artist {
        query = query.filter(songs::Column::Artist.eq(artist));
    }

    query
        .order_by_asc(songs::Column::Name)
        .offset(offset)
        .limit(limit)
        .all(conn)
        .await
}
