//! Data-access layer for songs (generic over ConnectionTrait).
//!
//! This is the single authoritative validation boundary: required-field
//! presence, non-empty trimmed strings, and the positive-duration rule are
//! all enforced here, before any statement is built. The router only parses
//! shapes.

use sea_orm::ConnectionTrait;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, OffsetDateTime};

use crate::adapters::songs_sea as adapter;
use crate::errors::domain::DomainError;

/// Page size applied when a list request does not specify one. This value is
/// the public contract; the router passes omitted parameters through as None.
pub const DEFAULT_LIST_LIMIT: u64 = 100;

const RELEASE_DATE_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]");

/// Song domain model
#[derive(Debug, Clone, PartialEq)]
pub struct Song {
    pub id: String,
    pub name: String,
    pub artist: String,
    pub album: String,
    pub release_date: Date,
    pub genre: String,
    pub duration_in_seconds: i32,
    pub created_at: Option<OffsetDateTime>,
    pub updated_at: Option<OffsetDateTime>,
}

/// Caller-supplied fields for create, before validation. Every field is
/// optional so missing ones can be reported together.
#[derive(Debug, Default, Clone)]
pub struct SongDraft {
    pub id: Option<String>,
    pub name: Option<String>,
    pub artist: Option<String>,
    pub album: Option<String>,
    pub release_date: Option<Date>,
    pub genre: Option<String>,
    pub duration_in_seconds: Option<i32>,
}

/// A validated draft. Only constructible through `validate_draft`.
#[derive(Debug, Clone)]
pub struct NewSong {
    pub id: String,
    pub name: String,
    pub artist: String,
    pub album: String,
    pub release_date: Date,
    pub genre: String,
    pub duration_in_seconds: i32,
}

/// Partial update. The typed fields are the fixed allowlist of updatable
/// columns; nothing caller-supplied ever reaches identifier position.
#[derive(Debug, Default, Clone)]
pub struct SongUpdate {
    pub name: Option<String>,
    pub artist: Option<String>,
    pub album: Option<String>,
    pub release_date: Option<Date>,
    pub genre: Option<String>,
    pub duration_in_seconds: Option<i32>,
}

impl SongUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.artist.is_none()
            && self.album.is_none()
            && self.release_date.is_none()
            && self.genre.is_none()
            && self.duration_in_seconds.is_none()
    }
}

#[derive(Debug, Default, Clone)]
pub struct ListParams {
    pub limit: Option<u64>,
    pub offset: Option<u64>,
    pub genre: Option<String>,
    pub artist: Option<String>,
}

pub fn parse_release_date(raw: &str) -> Result<Date, DomainError> {
    Date::parse(raw, RELEASE_DATE_FORMAT).map_err(|_| {
        DomainError::invalid_data(format!("Invalid release_date '{raw}': expected YYYY-MM-DD"))
    })
}

pub fn format_release_date(date: Date) -> String {
    format!(
        "{:04}-{:02}-{:02}",
        date.year(),
        u8::from(date.month()),
        date.day()
    )
}

fn require_non_empty(field: &'static str, value: &str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::invalid_data(format!(
            "Field '{field}' cannot be empty"
        )));
    }
    Ok(())
}

fn require_positive_duration(duration: i32) -> Result<(), DomainError> {
    if duration <= 0 {
        return Err(DomainError::invalid_data(
            "Duration must be a positive integer",
        ));
    }
    Ok(())
}

fn validate_draft(draft: SongDraft) -> Result<NewSong, DomainError> {
    let missing: Vec<&str> = [
        ("id", draft.id.is_none()),
        ("name", draft.name.is_none()),
        ("artist", draft.artist.is_none()),
        ("album", draft.album.is_none()),
        ("release_date", draft.release_date.is_none()),
        ("genre", draft.genre.is_none()),
        ("duration_in_seconds", draft.duration_in_seconds.is_none()),
    ]
    .into_iter()
    .filter_map(|(field, absent)| absent.then_some(field))
    .collect();

    let (
        Some(id),
        Some(name),
        Some(artist),
        Some(album),
        Some(release_date),
        Some(genre),
        Some(duration_in_seconds),
    ) = (
        draft.id,
        draft.name,
        draft.artist,
        draft.album,
        draft.release_date,
        draft.genre,
        draft.duration_in_seconds,
    )
    else {
        return Err(DomainError::invalid_data(format!(
            "Missing required fields: {}",
            missing.join(", ")
        )));
    };

    require_non_empty("id", &id)?;
    require_non_empty("name", &name)?;
    require_non_empty("artist", &artist)?;
    require_non_empty("album", &album)?;
    require_non_empty("genre", &genre)?;
    require_positive_duration(duration_in_seconds)?;

    Ok(NewSong {
        id,
        name,
        artist,
        album,
        release_date,
        genre,
        duration_in_seconds,
    })
}

fn validate_update(update: &SongUpdate) -> Result<(), DomainError> {
    if update.is_empty() {
        return Err(DomainError::invalid_data("No update data provided"));
    }

    for (field, value) in [
        ("name", &update.name),
        ("artist", &update.artist),
        ("album", &update.album),
        ("genre", &update.genre),
    ] {
        if let Some(value) = value {
            require_non_empty(field, value)?;
        }
    }

    if let Some(duration) = update.duration_in_seconds {
        require_positive_duration(duration)?;
    }

    Ok(())
}

pub async fn create_song<C: ConnectionTrait>(
    conn: &C,
    draft: SongDraft,
) -> Result<Song, DomainError> {
    let song = validate_draft(draft)?;
    let model = adapter::insert_song(conn, song).await?;
    Ok(Song::from(model))
}

pub async fn get_song<C: ConnectionTrait>(conn: &C, id: &str) -> Result<Song, DomainError> {
    match adapter::find_song_by_id(conn, id).await? {
        Some(model) => Ok(Song::from(model)),
        None => Err(DomainError::not_found(format!(
            "Song with ID {id} not found"
        ))),
    }
}

pub async fn update_song<C: ConnectionTrait>(
    conn: &C,
    id: &str,
    update: SongUpdate,
) -> Result<Song, DomainError> {
    validate_update(&update)?;
    match adapter::update_song(conn, id, update).await {
        Ok(model) => Ok(Song::from(model)),
        // Zero rows matched the id: report the missing song, not a bare row.
        Err(sea_orm::DbErr::RecordNotUpdated) => Err(DomainError::not_found(format!(
            "Song with ID {id} not found"
        ))),
        Err(e) => Err(DomainError::from(e)),
    }
}

/// Returns true if a row was removed, false if no song had the id. A missing
/// row is not an error here.
pub async fn delete_song<C: ConnectionTrait>(conn: &C, id: &str) -> Result<bool, DomainError> {
    let rows_affected = adapter::delete_song(conn, id).await?;
    Ok(rows_affected > 0)
}

/// Equality filters are ANDed; results are ordered by name ascending with
/// offset applied before limit. An empty page is success.
pub async fn list_songs<C: ConnectionTrait>(
    conn: &C,
    params: ListParams,
) -> Result<Vec<Song>, DomainError> {
    let models = adapter::list_songs(
        conn,
        params.limit.unwrap_or(DEFAULT_LIST_LIMIT),
        params.offset.unwrap_or(0),
        params.genre,
        params.artist,
    )
    .await?;
    Ok(models.into_iter().map(Song::from).collect())
}

impl From<crate::entities::songs::Model> for Song {
    fn from(model: crate::entities::songs::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            artist: model.artist,
            album: model.album,
            release_date: model.release_date,
            genre: model.genre,
            duration_in_seconds: model.duration_in_seconds,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
