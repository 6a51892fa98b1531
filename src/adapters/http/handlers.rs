//! HTTP handlers for the feedback endpoints.

use std::sync::Arc;

use axum::{extract::State, Json};

use crate::application::{
    GetStatsHandler, ListFeedbackHandler, SubmitFeedbackCommand, SubmitFeedbackHandler,
};
use crate::domain::feedback::SentimentClassifier;
use crate::ports::FeedbackStore;

use super::dto::{
    FeedbackResponse, RootResponse, StatsResponse, SubmitFeedbackRequest, SubmitFeedbackResponse,
};
use super::error::ApiError;

/// Application state for the feedback endpoints.
#[derive(Clone)]
pub struct FeedbackAppState {
    /// Submission command handler
    pub submit: Arc<SubmitFeedbackHandler>,
    /// Read-all query handler
    pub list: Arc<ListFeedbackHandler>,
    /// Aggregate statistics query handler
    pub stats: Arc<GetStatsHandler>,
}

impl FeedbackAppState {
    /// Wire the application handlers over a store and classifier.
    pub fn new(store: Arc<dyn FeedbackStore>, classifier: Arc<SentimentClassifier>) -> Self {
        Self {
            submit: Arc::new(SubmitFeedbackHandler::new(store.clone(), classifier)),
            list: Arc::new(ListFeedbackHandler::new(store.clone())),
            stats: Arc::new(GetStatsHandler::new(store)),
        }
    }
}

/// Liveness message.
///
/// GET|HEAD /
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Feedback Collector API is live".to_string(),
    })
}

/// Submit a piece of feedback.
///
/// POST /feedback
pub async fn submit_feedback(
    State(state): State<FeedbackAppState>,
    Json(request): Json<SubmitFeedbackRequest>,
) -> Result<Json<SubmitFeedbackResponse>, ApiError> {
    let record = state
        .submit
        .handle(SubmitFeedbackCommand {
            name: request.name,
            product: request.product,
            feedback: request.feedback,
            category: request.category,
        })
        .await?;

    Ok(Json(SubmitFeedbackResponse {
        message: "Feedback submitted".to_string(),
        sentiment: record.sentiment(),
    }))
}

/// List every stored feedback record.
///
/// GET /feedback
pub async fn list_feedback(
    State(state): State<FeedbackAppState>,
) -> Result<Json<Vec<FeedbackResponse>>, ApiError> {
    let records = state.list.handle().await?;
    Ok(Json(records.iter().map(FeedbackResponse::from).collect()))
}

/// Aggregate statistics over the full record set.
///
/// GET /stats
pub async fn get_stats(
    State(state): State<FeedbackAppState>,
) -> Result<Json<StatsResponse>, ApiError> {
    let stats = state.stats.handle().await?;
    Ok(Json(StatsResponse::from(stats)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn root_reports_live() {
        let Json(response) = root().await;
        assert_eq!(response.message, "Feedback Collector API is live");
    }
}
