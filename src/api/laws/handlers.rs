use axum::extract::rejection::JsonRejection;
use axum::{
    extract::{Path, Query},
    Extension, Json,
};
use std::sync::Arc;

use agora_core::BallotService;

use super::types::{law_to_view, LawQuery, LawView, SubmitRequest, UserLawView};
use crate::api::error::ApiError;

/// List all laws with their tallies
#[utoipa::path(
    get,
    path = "/api/laws",
    tag = "laws",
    responses(
        (status = 200, description = "All laws", body = Vec<LawView>),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn list_laws(
    Extension(service): Extension<Arc<BallotService>>,
) -> Result<Json<Vec<LawView>>, ApiError> {
    let laws = service.list_laws().await?;
    Ok(Json(laws.into_iter().map(law_to_view).collect()))
}

/// Get law detail, with the caller's recorded vote when `userId` is given
#[utoipa::path(
    get,
    path = "/api/laws/{id}",
    tag = "laws",
    params(
        ("id" = String, Path, description = "Law ID"),
        ("userId" = Option<String>, Query, description = "Voter identifier")
    ),
    responses(
        (status = 200, description = "Law detail", body = UserLawView),
        (status = 404, description = "Law not found"),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn get_law(
    Extension(service): Extension<Arc<BallotService>>,
    Path(id): Path<String>,
    Query(query): Query<LawQuery>,
) -> Result<Json<UserLawView>, ApiError> {
    let (law, user_vote) = service
        .law_for_user(&id, query.user_id.as_deref())
        .await?;

    Ok(Json(UserLawView {
        law: law_to_view(law),
        user_vote: user_vote.map(Into::into),
    }))
}

/// Cast a vote or post a comment; returns the updated law
#[utoipa::path(
    post,
    path = "/api/laws/{id}",
    tag = "laws",
    params(
        ("id" = String, Path, description = "Law ID")
    ),
    request_body = SubmitRequest,
    responses(
        (status = 200, description = "Updated law", body = LawView),
        (status = 400, description = "Malformed body or duplicate vote"),
        (status = 404, description = "Law not found"),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn submit(
    Extension(service): Extension<Arc<BallotService>>,
    Path(id): Path<String>,
    payload: Result<Json<SubmitRequest>, JsonRejection>,
) -> Result<Json<LawView>, ApiError> {
    let Json(request) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;

    let law = match request {
        SubmitRequest::Vote { vote, user_id } => {
            service.submit_vote(&id, &user_id, vote.into()).await?
        }
        SubmitRequest::Comment {
            author,
            content,
            user_id: _,
        } => service.submit_comment(&id, &author, &content).await?,
    };

    Ok(Json(law_to_view(law)))
}
