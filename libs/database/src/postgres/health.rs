use crate::common::{DatabaseError, DatabaseResult};
use sea_orm::DatabaseConnection;

/// Ping the database to verify the connection is alive.
///
/// Used by readiness probes; a failed ping marks the service as not ready.
pub async fn check_health(db: &DatabaseConnection) -> DatabaseResult<()> {
    db.ping()
        .await
        .map_err(|e| DatabaseError::HealthCheckFailed(e.to_string()))
}
