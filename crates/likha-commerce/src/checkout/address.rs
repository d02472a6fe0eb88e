//! Shipping address types.

use crate::error::CommerceError;
use serde::{Deserialize, Serialize};

/// A shipping address.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ShippingAddress {
    /// Recipient full name.
    pub full_name: String,
    /// Address line 1.
    pub line1: String,
    /// Address line 2 (unit, barangay, etc.).
    #[serde(default)]
    pub line2: Option<String>,
    /// City or municipality.
    pub city: String,
    /// Province or region (e.g., "NCR").
    pub province: String,
    /// Postal code.
    #[serde(default)]
    pub postal_code: Option<String>,
    /// Contact phone number.
    pub phone: String,
    /// Contact email.
    pub email: String,
}

impl ShippingAddress {
    /// Validate the address.
    ///
    /// Every required field must be non-empty after trimming and the
    /// email must contain `'@'`. This predicate gates progression to
    /// payment; failure names the offending fields.
    pub fn validate(&self) -> Result<(), CommerceError> {
        let mut missing = Vec::new();
        if self.full_name.trim().is_empty() {
            missing.push("full name");
        }
        if self.line1.trim().is_empty() {
            missing.push("address line 1");
        }
        if self.city.trim().is_empty() {
            missing.push("city");
        }
        if self.province.trim().is_empty() {
            missing.push("province");
        }
        if self.phone.trim().is_empty() {
            missing.push("phone");
        }
        if self.email.trim().is_empty() {
            missing.push("email");
        }
        if !missing.is_empty() {
            return Err(CommerceError::IncompleteAddress(missing.join(", ")));
        }
        if !self.email.contains('@') {
            return Err(CommerceError::InvalidEmail(self.email.clone()));
        }
        Ok(())
    }

    /// Boolean form of `validate`.
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Format as multi-line text for the receipt.
    pub fn multi_line(&self) -> String {
        let mut lines = vec![self.full_name.clone(), self.line1.clone()];
        if let Some(ref line2) = self.line2 {
            lines.push(line2.clone());
        }
        let city_line = if let Some(ref postal) = self.postal_code {
            format!("{}, {} {}", self.city, self.province, postal)
        } else {
            format!("{}, {}", self.city, self.province)
        };
        lines.push(city_line);
        lines.push(self.phone.clone());
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_address() -> ShippingAddress {
        ShippingAddress {
            full_name: "Juan Dela Cruz".to_string(),
            line1: "123 Rizal St".to_string(),
            line2: None,
            city: "Manila".to_string(),
            province: "NCR".to_string(),
            postal_code: Some("1000".to_string()),
            phone: "0912 345 6789".to_string(),
            email: "j@x.com".to_string(),
        }
    }

    #[test]
    fn test_valid_address_passes() {
        assert!(valid_address().is_valid());
    }

    #[test]
    fn test_empty_full_name_blocks() {
        let mut addr = valid_address();
        addr.full_name = String::new();
        let err = addr.validate().unwrap_err();
        assert!(matches!(err, CommerceError::IncompleteAddress(ref m) if m.contains("full name")));
    }

    #[test]
    fn test_whitespace_only_field_blocks() {
        let mut addr = valid_address();
        addr.city = "   ".to_string();
        assert!(!addr.is_valid());
    }

    #[test]
    fn test_email_without_at_blocks() {
        let mut addr = valid_address();
        addr.email = "juan.example.com".to_string();
        let err = addr.validate().unwrap_err();
        assert!(matches!(err, CommerceError::InvalidEmail(_)));
    }

    #[test]
    fn test_optional_fields_not_required() {
        let mut addr = valid_address();
        addr.line2 = None;
        addr.postal_code = None;
        assert!(addr.is_valid());
    }

    #[test]
    fn test_multiple_missing_fields_named() {
        let addr = ShippingAddress::default();
        let err = addr.validate().unwrap_err();
        match err {
            CommerceError::IncompleteAddress(missing) => {
                assert!(missing.contains("full name"));
                assert!(missing.contains("email"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_multi_line_format() {
        let text = valid_address().multi_line();
        assert!(text.contains("Juan Dela Cruz"));
        assert!(text.contains("Manila, NCR 1000"));
    }
}
