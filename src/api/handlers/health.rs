use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use sqlx::MySqlPool;

use crate::infrastructure::database::{self, DbStatus};

/// Health check body, tagged by `status`
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum HealthResponse {
    Ok { db: DbStatus },
    Error { message: String, error: String },
}

/// Health check endpoint, covering both the server and the database
///
/// GET /
pub async fn health_check(State(pool): State<MySqlPool>) -> (StatusCode, Json<HealthResponse>) {
    match database::ping(&pool).await {
        Ok(db) => (StatusCode::OK, Json(HealthResponse::Ok { db })),
        Err(e) => {
            tracing::error!(error = %e, "Health check failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(HealthResponse::Error {
                    message: "Falha ao conectar no banco".to_string(),
                    error: e.to_string(),
                }),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn ok_shape() {
        let body = HealthResponse::Ok {
            db: DbStatus { ok: 1 },
        };

        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({ "status": "ok", "db": { "ok": 1 } })
        );
    }

    #[test]
    fn error_shape() {
        let body = HealthResponse::Error {
            message: "Falha ao conectar no banco".to_string(),
            error: "connection refused".to_string(),
        };

        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({
                "status": "error",
                "message": "Falha ao conectar no banco",
                "error": "connection refused"
            })
        );
    }
}
