//! Display currencies. Amounts are never converted; only the symbol changes.

use std::fmt;

use serde::{de::Deserializer, Deserialize, Serialize};

/// A currency drawn from the fixed [`CURRENCIES`] catalog.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
pub struct CurrencyChoice {
    pub code: &'static str,
    pub symbol: &'static str,
    pub name: &'static str,
}

const fn currency(code: &'static str, symbol: &'static str, name: &'static str) -> CurrencyChoice {
    CurrencyChoice { code, symbol, name }
}

/// Selectable currencies, in selector order.
pub const CURRENCIES: [CurrencyChoice; 10] = [
    currency("USD", "$", "US Dollar"),
    currency("EUR", "€", "Euro"),
    currency("GBP", "£", "British Pound"),
    currency("JPY", "¥", "Japanese Yen"),
    currency("CNY", "¥", "Chinese Yuan"),
    currency("INR", "₹", "Indian Rupee"),
    currency("CAD", "C$", "Canadian Dollar"),
    currency("AUD", "A$", "Australian Dollar"),
    currency("BRL", "R$", "Brazilian Real"),
    currency("ZAR", "R", "South African Rand"),
];

impl CurrencyChoice {
    /// Looks up a catalog entry by ISO code, ignoring case and surrounding whitespace.
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim();
        CURRENCIES
            .iter()
            .find(|entry| entry.code.eq_ignore_ascii_case(code))
            .copied()
    }
}

impl Default for CurrencyChoice {
    fn default() -> Self {
        CURRENCIES[0]
    }
}

impl fmt::Display for CurrencyChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}

#[derive(Deserialize)]
struct StoredCurrency {
    code: String,
}

impl<'de> Deserialize<'de> for CurrencyChoice {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let stored = StoredCurrency::deserialize(deserializer)?;
        CurrencyChoice::from_code(&stored.code).ok_or_else(|| {
            serde::de::Error::custom(format!("unsupported currency code `{}`", stored.code))
        })
    }
}
