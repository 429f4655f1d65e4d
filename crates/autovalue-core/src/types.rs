//! Valuation records shared by the UI crate and the desktop app.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseTransmissionError;

/// Gearbox type. Only two values exist.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Transmission {
    #[default]
    Manual,
    Automatic,
}

impl Transmission {
    /// Wire value (`manual` / `automatic`)
    pub fn as_str(&self) -> &'static str {
        match self {
            Transmission::Manual => "manual",
            Transmission::Automatic => "automatic",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Transmission::Manual => "Manual",
            Transmission::Automatic => "Automatic",
        }
    }
}

impl fmt::Display for Transmission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Transmission {
    type Err = ParseTransmissionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "manual" => Ok(Transmission::Manual),
            "automatic" => Ok(Transmission::Automatic),
            other => Err(ParseTransmissionError(other.to_string())),
        }
    }
}

/// A vehicle valuation as the orchestration layer holds it.
///
/// Prices are optional: a vehicle can be known without having been valued yet.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ValuationRecord {
    pub make: String,
    pub model: String,
    pub year: u16,
    pub vin: String,
    pub transmission: Transmission,
    pub mileage: u32,
    #[serde(default)]
    pub reserve_price: Option<f64>,
    #[serde(default)]
    pub average_price: Option<f64>,
}

impl ValuationRecord {
    /// True once both prices are known
    pub fn has_valuation(&self) -> bool {
        self.reserve_price.is_some() && self.average_price.is_some()
    }

    /// `"{year} {make} {model}"`
    pub fn title(&self) -> String {
        format!("{} {} {}", self.year, self.make, self.model)
    }
}

/// Where a reserve price sits relative to the average market price
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PricePosition {
    Above,
    Below,
    AtMarket,
}

impl PricePosition {
    /// Relative band around the average that still counts as at market
    pub const TOLERANCE: f64 = 0.01;

    /// Compare a reserve price to the average market price.
    ///
    /// A non-positive or non-finite average gives nothing to compare
    /// against and reads as at market.
    pub fn compare(reserve: f64, average: f64) -> Self {
        if !average.is_finite() || !reserve.is_finite() || average <= 0.0 {
            return PricePosition::AtMarket;
        }
        let delta = (reserve - average) / average;
        if delta > Self::TOLERANCE {
            PricePosition::Above
        } else if delta < -Self::TOLERANCE {
            PricePosition::Below
        } else {
            PricePosition::AtMarket
        }
    }

    /// Short description for the valuation panel
    pub fn label(&self) -> &'static str {
        match self {
            PricePosition::Above => "above market average",
            PricePosition::Below => "below market average",
            PricePosition::AtMarket => "in line with market average",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ValuationRecord {
        ValuationRecord {
            make: "Toyota".to_string(),
            model: "Corolla".to_string(),
            year: 2019,
            vin: "JTDBR32E720123456".to_string(),
            transmission: Transmission::Automatic,
            mileage: 45_210,
            reserve_price: Some(14_500.0),
            average_price: Some(15_200.0),
        }
    }

    #[test]
    fn transmission_parses_known_values() {
        assert_eq!("manual".parse::<Transmission>().unwrap(), Transmission::Manual);
        assert_eq!(
            "automatic".parse::<Transmission>().unwrap(),
            Transmission::Automatic
        );
    }

    #[test]
    fn transmission_rejects_other_values() {
        for raw in ["", "Manual", "cvt", "auto", "semi-automatic"] {
            let err = raw.parse::<Transmission>().unwrap_err();
            assert_eq!(err, ParseTransmissionError(raw.to_string()));
        }
    }

    #[test]
    fn transmission_serde_is_lowercase() {
        let json = serde_json::to_string(&Transmission::Automatic).unwrap();
        assert_eq!(json, "\"automatic\"");
        assert!(serde_json::from_str::<Transmission>("\"dual-clutch\"").is_err());
    }

    #[test]
    fn record_deserializes_without_prices() {
        let json = r#"{
            "make": "Ford", "model": "Focus", "year": 2015,
            "vin": "WF0AXXGCDAFA12345", "transmission": "manual", "mileage": 88000
        }"#;
        let record: ValuationRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.transmission, Transmission::Manual);
        assert!(!record.has_valuation());
    }

    #[test]
    fn record_rejects_unknown_transmission() {
        let json = r#"{
            "make": "Ford", "model": "Focus", "year": 2015,
            "vin": "X", "transmission": "cvt", "mileage": 1
        }"#;
        assert!(serde_json::from_str::<ValuationRecord>(json).is_err());
    }

    #[test]
    fn record_title_and_valuation() {
        let record = sample();
        assert_eq!(record.title(), "2019 Toyota Corolla");
        assert!(record.has_valuation());

        let partial = ValuationRecord {
            average_price: None,
            ..sample()
        };
        assert!(!partial.has_valuation());
    }

    #[test]
    fn price_position_bands() {
        assert_eq!(PricePosition::compare(11_000.0, 10_000.0), PricePosition::Above);
        assert_eq!(PricePosition::compare(9_000.0, 10_000.0), PricePosition::Below);
        assert_eq!(PricePosition::compare(10_050.0, 10_000.0), PricePosition::AtMarket);
        assert_eq!(PricePosition::compare(9_950.0, 10_000.0), PricePosition::AtMarket);
    }

    #[test]
    fn price_position_without_average() {
        assert_eq!(PricePosition::compare(5_000.0, 0.0), PricePosition::AtMarket);
        assert_eq!(PricePosition::compare(5_000.0, f64::NAN), PricePosition::AtMarket);
    }
}
