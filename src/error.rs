use std::fmt;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::response::ApiResponse;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("{key} has an invalid value: {value}")]
    Invalid { key: &'static str, value: String },
}

/// Seeding stage that was running when a failure occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedStage {
    Teardown,
    Users,
    Products,
    SampleRelations,
    Summary,
}

impl fmt::Display for SeedStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SeedStage::Teardown => "teardown",
            SeedStage::Users => "users",
            SeedStage::Products => "products",
            SeedStage::SampleRelations => "sample_relations",
            SeedStage::Summary => "summary",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
#[error("seeding failed during {stage}: {source}")]
pub struct SeedError {
    pub stage: SeedStage,
    #[source]
    pub source: sea_orm::DbErr,
}

impl SeedError {
    pub fn at(stage: SeedStage) -> impl FnOnce(sea_orm::DbErr) -> Self {
        move |source| Self { stage, source }
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not Found")]
    NotFound { path: String },
}

#[derive(Serialize)]
struct ErrorData {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        let (status, path) = match self {
            AppError::NotFound { path } => (StatusCode::NOT_FOUND, Some(path)),
        };

        let body = ApiResponse {
            message: message.clone(),
            data: Some(ErrorData {
                error: message,
                path,
            }),
        };

        (status, axum::Json(body)).into_response()
    }
}
