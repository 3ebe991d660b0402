//! Body and query extractors whose rejections are [`AppError`]s.
//!
//! Axum's stock `Json`/`Query` reject with plain-text 4xx responses. These
//! wrappers turn the same rejections into the usual `{"error", "code"}`
//! 400 body, carrying serde's reason (unknown enum variant, malformed id,
//! missing field, ...).

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// JSON body extractor rejecting with [`AppError::BadRequest`].
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Query-string extractor rejecting with [`AppError::BadRequest`].
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);
