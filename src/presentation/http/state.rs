use crate::{application::resolve_distance::use_case::ResolveDistanceUseCase, config::Config};
use sqlx::PgPool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub resolver: Arc<ResolveDistanceUseCase>,
    pub config: Config,
}
