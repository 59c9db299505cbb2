use crate::price::js_round;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Purchase formats. The multipliers are shared with backend pricing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PurchaseFormat {
    #[serde(rename = "digital-4k")]
    Digital4k,
    #[default]
    #[serde(rename = "digital-hd")]
    DigitalHd,
    #[serde(rename = "digital-atmos")]
    DigitalAtmos,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown purchase format: {0}")]
pub struct UnknownFormat(pub String);

impl PurchaseFormat {
    /// Display order on the detail page.
    pub const ALL: [PurchaseFormat; 3] = [
        PurchaseFormat::DigitalHd,
        PurchaseFormat::Digital4k,
        PurchaseFormat::DigitalAtmos,
    ];

    pub fn key(self) -> &'static str {
        match self {
            PurchaseFormat::Digital4k => "digital-4k",
            PurchaseFormat::DigitalHd => "digital-hd",
            PurchaseFormat::DigitalAtmos => "digital-atmos",
        }
    }

    pub fn multiplier(self) -> f64 {
        match self {
            PurchaseFormat::Digital4k => 1.0,
            PurchaseFormat::DigitalHd => 0.7,
            PurchaseFormat::DigitalAtmos => 1.2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PurchaseFormat::Digital4k => "Цифровой 4K HDR",
            PurchaseFormat::DigitalHd => "Цифровой Full HD",
            PurchaseFormat::DigitalAtmos => "Цифровой Atmos + субтитры",
        }
    }

    pub fn total(self, base_price: u32) -> u32 {
        js_round(f64::from(base_price) * self.multiplier())
    }

    /// Label for a stored format key, or the key itself when unknown.
    pub fn label_for_key(key: &str) -> String {
        key.parse::<PurchaseFormat>()
            .map(|format| format.label().to_owned())
            .unwrap_or_else(|_| key.to_owned())
    }
}

impl FromStr for PurchaseFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "digital-4k" => Ok(PurchaseFormat::Digital4k),
            "digital-hd" => Ok(PurchaseFormat::DigitalHd),
            "digital-atmos" => Ok(PurchaseFormat::DigitalAtmos),
            other => Err(UnknownFormat(other.to_owned())),
        }
    }
}

impl fmt::Display for PurchaseFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
