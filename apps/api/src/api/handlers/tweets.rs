use axum::{extract::State, http::StatusCode, Json};
use uuid::Uuid;

use crate::api::errors::ApiError;
use crate::api::extract::{PathParam, ValidJson};
use crate::api::state::TwitterState;
use crate::domain::tweet::{Tweet, TweetUpdate};

/// Show all tweets
///
/// GET /
pub async fn show_all_tweets(
    State(state): State<TwitterState>,
) -> Result<Json<Vec<Tweet>>, ApiError> {
    Ok(Json(state.tweets.list().await?))
}

/// Post a tweet
///
/// POST /post
pub async fn post_tweet(
    State(state): State<TwitterState>,
    ValidJson(tweet): ValidJson<Tweet>,
) -> Result<(StatusCode, Json<Tweet>), ApiError> {
    let tweet = state.tweets.create(tweet).await?;
    Ok((StatusCode::CREATED, Json(tweet)))
}

/// Show a tweet
///
/// GET /tweets/:tweet_id
pub async fn show_tweet(
    State(state): State<TwitterState>,
    PathParam(tweet_id): PathParam<Uuid>,
) -> Result<Json<Tweet>, ApiError> {
    let tweet = state
        .tweets
        .find_by_id(tweet_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Tweet not found: {}", tweet_id)))?;

    Ok(Json(tweet))
}

/// Delete a tweet and return it
///
/// DELETE /tweets/:tweet_id/delete
pub async fn delete_tweet(
    State(state): State<TwitterState>,
    PathParam(tweet_id): PathParam<Uuid>,
) -> Result<Json<Tweet>, ApiError> {
    Ok(Json(state.tweets.delete(tweet_id).await?))
}

/// Edit a tweet's content
///
/// PUT /tweets/:tweet_id/update
pub async fn update_tweet(
    State(state): State<TwitterState>,
    PathParam(tweet_id): PathParam<Uuid>,
    ValidJson(update): ValidJson<TweetUpdate>,
) -> Result<Json<Tweet>, ApiError> {
    Ok(Json(state.tweets.edit(tweet_id, update.content).await?))
}
