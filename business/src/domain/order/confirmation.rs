use chrono::{DateTime, Duration, Utc};
use rand::Rng;

pub const DEFAULT_CODE_LENGTH: usize = 6;
pub const DEFAULT_CODE_TTL_MINUTES: i64 = 15;

/// Settings for confirmation codes, built once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutConfig {
    pub code_length: usize,
    pub code_ttl: Duration,
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            code_length: DEFAULT_CODE_LENGTH,
            code_ttl: Duration::minutes(DEFAULT_CODE_TTL_MINUTES),
        }
    }
}

impl CheckoutConfig {
    /// Saturates at the latest representable instant instead of overflowing.
    pub fn expires_at(&self, issued_at: DateTime<Utc>) -> DateTime<Utc> {
        issued_at
            .checked_add_signed(self.code_ttl)
            .unwrap_or(DateTime::<Utc>::MAX_UTC)
    }

    /// Random digits-only code of `code_length` characters.
    pub fn generate_code(&self) -> String {
        let mut rng = rand::rng();
        (0..self.code_length)
            .map(|_| char::from(b'0' + rng.random_range(0..10u8)))
            .collect()
    }
}

/// The single live code of a pending order.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfirmationCode {
    pub order_id: i64,
    pub code: String,
    pub expires_at: DateTime<Utc>,
}

impl ConfirmationCode {
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }

    pub fn matches(&self, submitted: &str) -> bool {
        self.code == submitted
    }
}
