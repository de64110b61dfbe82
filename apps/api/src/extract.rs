//! Extractors whose rejections use the API error envelope.
//!
//! Malformed JSON and unparsable path segments come back as
//! `400 VALIDATION_ERROR` instead of axum's plain-text rejections.

use axum::extract::{FromRequest, FromRequestParts};

use crate::errors::AppError;

#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct ApiPath<T>(pub T);
