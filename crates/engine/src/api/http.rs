//! HTTP routes.

use std::sync::Arc;

use axum::{
    extract::{rejection::BytesRejection, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};

use reel_domain::{Movie, MovieId, ValidationErrors};

use super::extract::JsonBody;
use crate::app::App;
use crate::use_cases::MovieError;

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/", get(root))
        .route("/movies", get(list_movies).post(create_movie))
        .route(
            "/movies/{id}",
            get(get_movie).patch(update_movie).delete(delete_movie),
        )
}

async fn root() -> Json<Value> {
    Json(json!({ "message": "hola mundo" }))
}

/// Lists movies; when `genre` is repeated, the first value wins.
async fn list_movies(
    State(app): State<Arc<App>>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<Vec<Movie>>, ApiError> {
    let genre = params
        .into_iter()
        .find_map(|(key, value)| (key == "genre").then_some(value));
    let movies = app.use_cases.movies.ops.list(genre.as_deref()).await?;
    Ok(Json(movies))
}

async fn get_movie(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
) -> Result<Json<Movie>, ApiError> {
    let movie = app.use_cases.movies.ops.get(&MovieId::from(id)).await?;
    Ok(Json(movie))
}

async fn create_movie(
    State(app): State<Arc<App>>,
    JsonBody(body): JsonBody,
) -> Result<(StatusCode, Json<Movie>), ApiError> {
    let movie = app.use_cases.movies.ops.create(&body).await?;
    Ok((StatusCode::CREATED, Json(movie)))
}

async fn update_movie(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
    JsonBody(body): JsonBody,
) -> Result<Json<Movie>, ApiError> {
    let movie = app
        .use_cases
        .movies
        .ops
        .update(&MovieId::from(id), &body)
        .await?;
    Ok(Json(movie))
}

async fn delete_movie(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    app.use_cases
        .movies
        .ops
        .delete(&MovieId::from(id))
        .await?;
    Ok(Json(json!({ "message": "Movie deleted" })))
}

#[derive(Debug)]
pub enum ApiError {
    NotFound,
    Validation(ValidationErrors),
    /// The body could not be buffered; answered with the rejection's own status.
    Body(BytesRejection),
    BadRequest(String),
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound => (
                StatusCode::NOT_FOUND,
                Json(json!({ "message": "Movie not found" })),
            )
                .into_response(),
            ApiError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": errors })),
            )
                .into_response(),
            ApiError::Body(rejection) => rejection.into_response(),
            ApiError::BadRequest(message) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "message": message }))).into_response()
            }
            ApiError::Internal(detail) => {
                tracing::error!(error = %detail, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "message": "Internal error" })),
                )
                    .into_response()
            }
        }
    }
}

impl From<MovieError> for ApiError {
    fn from(e: MovieError) -> Self {
        match e {
            MovieError::NotFound(_) => ApiError::NotFound,
            MovieError::Validation(errors) => ApiError::Validation(errors),
            MovieError::Repo(e) => ApiError::Internal(e.to_string()),
        }
    }
}
