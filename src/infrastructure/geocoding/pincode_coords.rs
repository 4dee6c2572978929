use lazy_static::lazy_static;
use std::collections::HashMap;

/// Default coordinates: Delhi (latitude, longitude)
const DEFAULT_COORDS: (f64, f64) = (28.6139, 77.2090);

lazy_static! {
    static ref PINCODE_MAP: HashMap<&'static str, (f64, f64)> = {
        let mut m = HashMap::new();
        // Known PIN codes mapped to approximate (latitude, longitude)
        m.insert("141106", (30.9010, 75.8577));  // Ludhiana
        m.insert("110060", (28.7041, 77.1025));  // Delhi
        m.insert("560023", (12.9716, 77.5946));  // Bangalore
        m.insert("110001", (28.6139, 77.2167));  // Delhi Central
        m.insert("400001", (19.0760, 72.8777));  // Mumbai
        m
    };
}

/// Returns (latitude, longitude) for a PIN code.
/// Falls back to the Delhi default if the PIN code is not in the table.
///
/// This is a fixed approximation, not geocoding: unknown codes all map to one
/// place, and that is accepted.
pub fn coordinates_for_pincode(pincode: &str) -> (f64, f64) {
    PINCODE_MAP.get(pincode).copied().unwrap_or(DEFAULT_COORDS)
}

#[cfg(test)]
mod tests {
    use super::coordinates_for_pincode;

    #[test]
    fn known_pincodes_resolve_to_their_city() {
        assert_eq!(coordinates_for_pincode("141106"), (30.9010, 75.8577));
        assert_eq!(coordinates_for_pincode("400001"), (19.0760, 72.8777));
    }

    #[test]
    fn unknown_pincodes_fall_back_to_the_default() {
        assert_eq!(coordinates_for_pincode("999999"), (28.6139, 77.2090));
        assert_eq!(coordinates_for_pincode(""), (28.6139, 77.2090));
    }
}
