use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use time::format_description::well_known::Rfc3339;

use crate::error::AppError;
use crate::repos::songs::{self, ListParams, Song, SongDraft, SongUpdate};
use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
pub struct SongResponse {
    pub id: String,
    pub name: String,
    pub artist: String,
    pub album: String,
    pub release_date: String,
    pub genre: String,
    pub duration_in_seconds: i32,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl From<Song> for SongResponse {
    fn from(song: Song) -> Self {
        Self {
            id: song.id,
            name: song.name,
            artist: song.artist,
            album: song.album,
            release_date: songs::format_release_date(song.release_date),
            genre: song.genre,
            duration_in_seconds: song.duration_in_seconds,
            created_at: song.created_at.and_then(|t| t.format(&Rfc3339).ok()),
            updated_at: song.updated_at.and_then(|t| t.format(&Rfc3339).ok()),
        }
    }
}

/// All fields optional: presence is checked by the data-access layer so a
/// request missing several fields gets them reported together.
#[derive(Debug, Deserialize)]
pub struct CreateSongRequest {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub artist: Option<String>,
    #[serde(default)]
    pub album: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub duration_in_seconds: Option<i32>,
}

/// Unknown keys are rejected outright; the field set mirrors the updatable
/// column allowlist and deliberately excludes `id`.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateSongRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub artist: Option<String>,
    #[serde(default)]
    pub album: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub duration_in_seconds: Option<i32>,
}

#[derive(Debug, Deserialize)]
pub struct ListSongsQuery {
    pub limit: Option<u64>,
    pub offset: Option<u64>,
    pub genre: Option<String>,
    pub artist: Option<String>,
}

fn draft_from(req: CreateSongRequest) -> Result<SongDraft, AppError> {
    let release_date = req
        .release_date
        .as_deref()
        .map(songs::parse_release_date)
        .transpose()?;

    Ok(SongDraft {
        id: req.id,
        name: req.name,
        artist: req.artist,
        album: req.album,
        release_date,
        genre: req.genre,
        duration_in_seconds: req.duration_in_seconds,
    })
}

fn update_from(req: UpdateSongRequest) -> Result<SongUpdate, AppError> {
    let release_date = req
        .release_date
        .as_deref()
        .map(songs::parse_release_date)
        .transpose()?;

    Ok(SongUpdate {
        name: req.name,
        artist: req.artist,
        album: req.album,
        release_date,
        genre: req.genre,
        duration_in_seconds: req.duration_in_seconds,
    })
}

async fn list_songs(
    state: web::Data<AppState>,
    query: web::Query<ListSongsQuery>,
) -> Result<HttpResponse, AppError> {
    let query = query.into_inner();
    let params = ListParams {
        limit: query.limit,
        offset: query.offset,
        genre: query.genre,
        artist: query.artist,
    };

    let page = songs::list_songs(&state.db, params).await?;
    let body: Vec<SongResponse> = page.into_iter().map(SongResponse::from).collect();
    Ok(HttpResponse::Ok().json(body))
}

async fn create_song(
    state: web::Data<AppState>,
    body: web::Json<CreateSongRequest>,
) -> Result<HttpResponse, AppError> {
    let draft = draft_from(body.into_inner())?;
    let song = songs::create_song(&state.db, draft).await?;
    tracing::info!(song_id = %song.id, "song.created");
    Ok(HttpResponse::Created().json(SongResponse::from(song)))
}

async fn get_song(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let song = songs::get_song(&state.db, &id).await?;
    Ok(HttpResponse::Ok().json(SongResponse::from(song)))
}

async fn update_song(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<UpdateSongRequest>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let update = update_from(body.into_inner())?;
    let song = songs::update_song(&state.db, &id, update).await?;
    tracing::info!(song_id = %id, "song.updated");
    Ok(HttpResponse::Ok().json(SongResponse::from(song)))
}

async fn delete_song(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    // Idempotent at the HTTP surface: 204 either way, the outcome is logged.
    let removed = songs::delete_song(&state.db, &id).await?;
    tracing::info!(song_id = %id, removed, "song.deleted");
    Ok(HttpResponse::NoContent().finish())
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/songs")
            .route(web::get().to(list_songs))
            .route(web::post().to(create_song))
            .default_service(web::route().to(super::not_found)),
    )
    .service(
        web::resource("/songs/{id}")
            .route(web::get().to(get_song))
            .route(web::put().to(update_song))
            .route(web::delete().to(delete_song))
            .default_service(web::route().to(super::not_found)),
    );
}

#[cfg(test)]
mod tests {
    use time::macros::{date, datetime};

    use super::{draft_from, CreateSongRequest, SongResponse};
    use crate::repos::songs::Song;

    #[test]
    fn response_formats_dates_and_timestamps() {
        let song = Song {
            id: "s1".into(),
            name: "Amazing Grace".into(),
            artist: "Unknown".into(),
            album: "Hymns".into(),
            release_date: date!(2023 - 01 - 01),
            genre: "Gospel".into(),
            duration_in_seconds: 240,
            created_at: Some(datetime!(2025-06-01 12:00:00 UTC)),
            updated_at: None,
        };

        let resp = SongResponse::from(song);
        assert_eq!(resp.release_date, "2023-01-01");
        assert_eq!(resp.created_at.as_deref(), Some("2025-06-01T12:00:00Z"));
        assert!(resp.updated_at.is_none());
    }

    #[test]
    fn create_request_date_parse_failure_is_invalid_data() {
        let req = CreateSongRequest {
            id: Some("s1".into()),
            name: None,
            artist: None,
            album: None,
            release_date: Some("01/01/2023".into()),
            genre: None,
            duration_in_seconds: None,
        };
        let err = draft_from(req).unwrap_err();
        assert_eq!(err.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }
}
