use actix_web::{web, HttpResponse};
use sea_orm::{ConnectionTrait, Statement};

use crate::error::AppError;
use crate::state::app_state::AppState;

/// Liveness plus a `SELECT 1` when a database is configured.
async fn health(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    if let Some(db) = app_state.db() {
        db.execute(Statement::from_string(
            db.get_database_backend(),
            "SELECT 1",
        ))
        .await?;
    }
    Ok(HttpResponse::Ok().content_type("text/plain").body("ok"))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health));
}
