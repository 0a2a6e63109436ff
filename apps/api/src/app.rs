// Router assembly for each demo app

use axum::{
    middleware::from_extractor_with_state,
    routing::{delete, get, post, put},
    Router,
};
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeFile;
use tower_http::trace::TraceLayer;

use crate::api::handlers::{self, hello, people, tweets, users};
use crate::api::middleware::{VerifiedKey, VerifiedToken};
use crate::api::state::{HelloState, TwitterState};
use crate::auth::PasswordHasher;
use crate::config::{Config, DemoApp};
use crate::infrastructure::repositories::{JsonTweetRepository, JsonUserRepository};

/// Dependency-injection demo
pub fn hello_router(state: HelloState, cat_picture: PathBuf) -> Router {
    // Guards run in reverse order of registration: token, then key
    let decorated = Router::new()
        .route("/items-decoration/", get(hello::read_decorated_items))
        .route_layer(from_extractor_with_state::<VerifiedKey, _>(state.clone()))
        .route_layer(from_extractor_with_state::<VerifiedToken, _>(state.clone()));

    Router::new()
        .route("/", get(hello::home))
        .route("/items", get(hello::read_items))
        .route("/items/", get(hello::read_items))
        .route("/users", get(hello::read_users))
        .route("/users/", get(hello::read_users))
        .route("/teams", get(hello::read_teams))
        .route("/teams/", get(hello::read_teams))
        .route("/query", get(hello::read_query))
        .route("/query/", get(hello::read_query))
        .route("/redirect", get(hello::redirect))
        .route("/health", get(handlers::health_check))
        .merge(decorated)
        .route_service("/cat", ServeFile::new(cat_picture))
        .with_state(state)
}

/// Validation demo
pub fn people_router() -> Router {
    Router::new()
        .route("/", get(people::home))
        .route("/person/new", post(people::create_person))
        .route("/person/detail", get(people::show_person))
        .route("/person/detail/:person_id", get(people::show_person_by_id))
        .route("/person/:person_id", put(people::update_person))
        .route("/health", get(handlers::health_check))
}

/// Users and tweets demo
pub fn twitter_router(state: TwitterState) -> Router {
    Router::new()
        // Users
        .route("/signup", post(users::signup))
        .route("/login", post(users::login))
        .route("/users", get(users::show_all_users))
        .route("/users/:user_id", get(users::show_user))
        .route("/users/:user_id/delete", delete(users::delete_user))
        .route("/users/:user_id/update", put(users::update_user))
        // Tweets
        .route("/", get(tweets::show_all_tweets))
        .route("/post", post(tweets::post_tweet))
        .route("/tweets/:tweet_id", get(tweets::show_tweet))
        .route("/tweets/:tweet_id/delete", delete(tweets::delete_tweet))
        .route("/tweets/:tweet_id/update", put(tweets::update_tweet))
        .route("/health", get(handlers::health_check))
        .with_state(state)
}

/// Builds the configured demo with JSON-file storage, tracing and CORS
pub fn build(config: &Config) -> Router {
    let router = match config.demo {
        DemoApp::Hello => hello_router(
            HelloState {
                secrets: config.secrets.clone(),
            },
            config.cat_picture(),
        ),
        DemoApp::People => people_router(),
        DemoApp::Twitter => twitter_router(TwitterState::new(
            Arc::new(JsonUserRepository::new(config.users_file())),
            Arc::new(JsonTweetRepository::new(config.tweets_file())),
            PasswordHasher::new(config.bcrypt_cost),
        )),
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    router.layer(TraceLayer::new_for_http()).layer(cors)
}
