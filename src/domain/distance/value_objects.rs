use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use validator::Validate;

lazy_static! {
    static ref PINCODE_REGEX: regex::Regex = regex::Regex::new(r"^\d{6}$").unwrap();
}

/// A six-digit postal code. Malformed input is rejected here, before it can
/// reach the resolution engine.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Pincode {
    #[validate(regex(path = *PINCODE_REGEX))]
    pub value: String,
}

impl Pincode {
    pub fn new(value: String) -> Result<Self, validator::ValidationErrors> {
        let pincode = Self { value };
        pincode.validate()?;
        Ok(pincode)
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}
