pub mod normalizer;
pub mod ors_client;
pub mod traits;
