use crate::domain::distance::{
    entity::{NewPincodeDistance, PincodeDistance},
    errors::DomainError,
    repository::DistanceRepository,
};
use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, info};

pub struct SqlxDistanceRepository {
    pub pool: PgPool,
}

impl SqlxDistanceRepository {
    pub fn new(pool: PgPool) -> Self {
        info!("Initializing SqlxDistanceRepository with connection pool");
        Self { pool }
    }
}

#[async_trait]
impl DistanceRepository for SqlxDistanceRepository {
    async fn find_by_pair(
        &self,
        from: &str,
        to: &str,
    ) -> Result<Option<PincodeDistance>, DomainError> {
        debug!("Looking up stored distance for {} -> {}", from, to);

        let row = sqlx::query_as::<_, PincodeDistance>(
            r#"SELECT id, from_pincode, to_pincode, distance_in_meters, distance_in_km,
                      duration_in_seconds, duration_text, route_overview_polyline,
                      full_route_json, created_at, updated_at
               FROM pincode_distances
               WHERE from_pincode = $1 AND to_pincode = $2"#,
        )
        .bind(from)
        .bind(to)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::Infrastructure(e.to_string()))?;

        Ok(row)
    }

    async fn insert(&self, record: NewPincodeDistance) -> Result<PincodeDistance, DomainError> {
        debug!(
            "Inserting distance record for {} -> {}",
            record.from_pincode, record.to_pincode
        );

        let row = sqlx::query_as::<_, PincodeDistance>(
            r#"INSERT INTO pincode_distances
                   (from_pincode, to_pincode, distance_in_meters, distance_in_km,
                    duration_in_seconds, duration_text, route_overview_polyline, full_route_json)
               VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
               RETURNING id, from_pincode, to_pincode, distance_in_meters, distance_in_km,
                         duration_in_seconds, duration_text, route_overview_polyline,
                         full_route_json, created_at, updated_at"#,
        )
        .bind(&record.from_pincode)
        .bind(&record.to_pincode)
        .bind(record.distance_in_meters)
        .bind(record.distance_in_km)
        .bind(record.duration_in_seconds)
        .bind(&record.duration_text)
        .bind(&record.route_overview_polyline)
        .bind(&record.full_route_json)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => DomainError::Conflict,
            _ => DomainError::Infrastructure(e.to_string()),
        })?;

        Ok(row)
    }
}
