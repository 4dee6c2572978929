//! Deterministic synthetic route estimates for when no real routing data is
//! available. Same pair in, bit-identical estimate out — across processes.

/// A synthetic distance/duration estimate for one ordered pincode pair.
#[derive(Debug, Clone, PartialEq)]
pub struct SyntheticRoute {
    pub distance_km: f64,
    pub duration_seconds: i64,
    pub polyline: String,
}

/// Assumed average travel speed for deriving a duration from a distance.
const AVERAGE_SPEED_KMH: f64 = 60.0;

/// Floor on any derived duration: 30 minutes.
const MIN_DURATION_SECONDS: i64 = 1800;

/// 31-based polynomial string hash, wrapping on i32. Deterministic across
/// processes, which the well-distributed stdlib hashers do not guarantee.
fn pair_hash(key: &str) -> u32 {
    let mut hash: i32 = 0;
    for c in key.chars() {
        hash = hash.wrapping_mul(31).wrapping_add(c as i32);
    }
    hash.unsigned_abs()
}

/// Produces a synthetic estimate for the pair. Total over all string inputs.
///
/// Three pairs carry fixed literal distances; every other pair hashes into the
/// [500, 2000) km band. The duration assumes 60 km/h, floored at 30 minutes.
pub fn synthetic_route(from: &str, to: &str) -> SyntheticRoute {
    let key = format!("{from}-{to}");
    let hash = pair_hash(&key);

    let mut distance_km = match key.as_str() {
        "141106-110060" => 250.5,
        "141106-560023" => 1850.3,
        "110001-400001" => 1400.2,
        _ => 500.0 + f64::from(hash % 1500),
    };

    if distance_km < 10.0 {
        distance_km = 100.0;
    }

    let duration_seconds =
        ((distance_km * 3600.0 / AVERAGE_SPEED_KMH).round() as i64).max(MIN_DURATION_SECONDS);

    SyntheticRoute {
        distance_km,
        duration_seconds,
        polyline: format!("fallback_polyline_{hash}"),
    }
}
