//! Guest details attached to a booking

use serde::{Deserialize, Serialize};

/// Contact details and stay length for the guest holding a booking
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestInfo {
    /// Full name
    pub name: String,
    /// Phone number
    pub phone: String,
    /// Email address, may be empty
    pub email: String,
    /// Length of stay in nights
    pub nights: u32,
}

impl GuestInfo {
    /// Create guest details for a one-night stay without email
    pub fn new(name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self { name: name.into(), phone: phone.into(), email: String::new(), nights: 1 }
    }

    /// Set the email address
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Set the length of stay
    pub fn with_nights(mut self, nights: u32) -> Self {
        self.nights = nights;
        self
    }

    /// Check that the details are complete enough to confirm a booking
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Guest name is required".to_string());
        }
        if self.phone.trim().is_empty() {
            return Err("Guest phone number is required".to_string());
        }
        if self.nights == 0 {
            return Err("Stay must be at least one night".to_string());
        }
        Ok(())
    }
}
