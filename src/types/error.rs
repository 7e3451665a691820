use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;
use sea_orm::DbErr;
use tracing::error;

#[derive(Debug, Error)]
pub enum AppError {
    // request-scoped failures
    #[error("invalid search parameters: {0}")]
    InvalidParameters(String),
    #[error("not found")]
    NotFound,
    #[error("{0} does not exist")]
    MissingReference(&'static str),
    #[error("validation error: {0}")]
    Validation(String),

    // infra things
    #[error(transparent)]
    Db(sea_orm::DbErr),
}

impl From<DbErr> for AppError {
    fn from(e: DbErr) -> Self {
        AppError::from_db(e)
    }
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    message: String,
}

impl AppError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidParameters(_) => "INVALID_PARAMETERS",
            Self::NotFound => "NOT_FOUND",
            Self::MissingReference(_) => "REFERENCE_NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Db(_) => "DB_ERROR",
        }
    }

    fn from_db(err: DbErr) -> Self {
        match &err {
            DbErr::RecordNotFound(_) => AppError::NotFound,
            _ => AppError::Db(err),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidParameters(_) => StatusCode::BAD_REQUEST,
            Self::NotFound | Self::MissingReference(_) => StatusCode::NOT_FOUND,
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        // don't leak driver messages to clients
        let message = match self {
            Self::Db(e) => {
                error!("database error: {}", e);
                "internal database error".to_string()
            }
            other => other.to_string(),
        };
        HttpResponse::build(self.status_code())
            .json(ErrorBody { error: self.kind(), message })
    }
}
