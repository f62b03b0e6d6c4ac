//! Standard response envelope helpers.

use axum::{http::StatusCode, Json};
use serde::Serialize;

#[derive(Serialize)]
pub struct SuccessOne<T> {
    pub message: &'static str,
    pub data: T,
}

#[derive(Serialize)]
pub struct SuccessMany<T> {
    pub message: &'static str,
    pub count: usize,
    pub data: Vec<T>,
}

#[derive(Serialize)]
pub struct MessageOnly {
    pub message: &'static str,
}

pub fn success_one<T: Serialize>(
    status: StatusCode,
    message: &'static str,
    data: T,
) -> (StatusCode, Json<SuccessOne<T>>) {
    (status, Json(SuccessOne { message, data }))
}

pub fn success_many<T: Serialize>(
    message: &'static str,
    data: Vec<T>,
) -> (StatusCode, Json<SuccessMany<T>>) {
    let count = data.len();
    (StatusCode::OK, Json(SuccessMany { message, count, data }))
}

pub fn message_only(message: &'static str) -> (StatusCode, Json<MessageOnly>) {
    (StatusCode::OK, Json(MessageOnly { message }))
}
