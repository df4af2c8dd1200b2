// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::http::StatusCode;
use axum::response::IntoResponse;
use sport_swipe::db::StoreError;
use sport_swipe::error::AppError;

#[test]
fn test_error_status_codes() {
    let cases = [
        (AppError::Unauthorized, StatusCode::UNAUTHORIZED),
        (AppError::InvalidToken, StatusCode::UNAUTHORIZED),
        (AppError::NotFound("x".to_string()), StatusCode::NOT_FOUND),
        (AppError::BadRequest("x".to_string()), StatusCode::BAD_REQUEST),
        (AppError::Conflict("x".to_string()), StatusCode::CONFLICT),
        (StoreError::Offline.into(), StatusCode::INTERNAL_SERVER_ERROR),
    ];

    for (err, expected) in cases {
        assert_eq!(err.into_response().status(), expected);
    }
}

#[test]
fn test_store_error_maps_to_database() {
    let err: AppError = StoreError::Query {
        collection: "likedSports",
        message: "deadline exceeded".to_string(),
    }
    .into();

    match err {
        AppError::Database(msg) => assert!(msg.contains("likedSports")),
        other => panic!("unexpected error: {:?}", other),
    }
}
