pub mod sqlx_distance_repository;
