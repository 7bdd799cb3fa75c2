//! Unit conversion
//!
//! Five table-driven converters, each anchored on one base unit, and a
//! registry that routes a symbol to the converter that knows it. Symbols are
//! case-sensitive (`m` is metres, `M` is nothing).

mod registry;
mod tables;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use registry::UnitConverterRegistry;

use tables::UnitEntry;

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum UnitError {
    #[error("unsupported unit '{unit}'")]
    UnsupportedUnit { unit: String },

    #[error("cannot convert '{from}' to '{to}': different unit families")]
    IncompatibleUnitFamily { from: String, to: String },
}

/// Physical quantity a unit measures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitFamily {
    Energy,
    Volume,
    Mass,
    Distance,
    Freight,
    Passenger,
    Area,
}

impl fmt::Display for UnitFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            UnitFamily::Energy => "energy",
            UnitFamily::Volume => "volume",
            UnitFamily::Mass => "mass",
            UnitFamily::Distance => "distance",
            UnitFamily::Freight => "freight",
            UnitFamily::Passenger => "passenger",
            UnitFamily::Area => "area",
        };
        f.write_str(name)
    }
}

/// A converter for one group of related units
pub trait UnitConverter: Send + Sync {
    /// Registry key (`energy`, `volume`, ...)
    fn name(&self) -> &'static str;

    fn base_unit(&self) -> &'static str;

    fn supported_units(&self) -> Vec<&'static str>;

    fn family_of(&self, unit: &str) -> Option<UnitFamily>;

    /// Size of one `unit` expressed in the base unit
    fn scale_of(&self, unit: &str) -> Option<f64>;

    fn is_supported(&self, unit: &str) -> bool {
        self.scale_of(unit).is_some()
    }

    fn convert(&self, value: f64, from: &str, to: &str) -> Result<f64, UnitError> {
        let unsupported = |unit: &str| UnitError::UnsupportedUnit {
            unit: unit.to_string(),
        };
        let from_scale = self.scale_of(from).ok_or_else(|| unsupported(from))?;
        let to_scale = self.scale_of(to).ok_or_else(|| unsupported(to))?;

        if self.family_of(from) != self.family_of(to) {
            return Err(UnitError::IncompatibleUnitFamily {
                from: from.to_string(),
                to: to.to_string(),
            });
        }
        if from == to {
            return Ok(value);
        }
        Ok(value * from_scale / to_scale)
    }
}

/// Converter backed by a static table
#[derive(Debug, Clone, Copy)]
pub struct TableConverter {
    name: &'static str,
    base_unit: &'static str,
    entries: &'static [UnitEntry],
}

impl TableConverter {
    pub fn energy() -> Self {
        Self {
            name: "energy",
            base_unit: "kWh",
            entries: tables::ENERGY,
        }
    }

    pub fn volume() -> Self {
        Self {
            name: "volume",
            base_unit: "L",
            entries: tables::VOLUME,
        }
    }

    pub fn mass() -> Self {
        Self {
            name: "mass",
            base_unit: "kg",
            entries: tables::MASS,
        }
    }

    pub fn distance() -> Self {
        Self {
            name: "distance",
            base_unit: "km",
            entries: tables::DISTANCE,
        }
    }

    /// Freight (tonne-km), passenger (passenger-km) and area (m2) units
    pub fn composite() -> Self {
        Self {
            name: "composite",
            base_unit: "m2",
            entries: tables::COMPOSITE,
        }
    }

    fn entry(&self, unit: &str) -> Option<&UnitEntry> {
        self.entries.iter().find(|(symbol, _, _)| *symbol == unit)
    }
}

impl UnitConverter for TableConverter {
    fn name(&self) -> &'static str {
        self.name
    }

    fn base_unit(&self) -> &'static str {
        self.base_unit
    }

    fn supported_units(&self) -> Vec<&'static str> {
        self.entries.iter().map(|(symbol, _, _)| *symbol).collect()
    }

    fn family_of(&self, unit: &str) -> Option<UnitFamily> {
        self.entry(unit).map(|(_, _, family)| *family)
    }

    fn scale_of(&self, unit: &str) -> Option<f64> {
        self.entry(unit).map(|(_, scale, _)| *scale)
    }
}
