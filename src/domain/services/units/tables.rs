//! Conversion tables
//!
//! Each entry is `(symbol, scale to the table's base unit, family)`.

use super::UnitFamily;

pub(super) type UnitEntry = (&'static str, f64, UnitFamily);

pub(super) const ENERGY: &[UnitEntry] = &[
    ("kWh", 1.0, UnitFamily::Energy),
    ("MWh", 1000.0, UnitFamily::Energy),
    ("GWh", 1_000_000.0, UnitFamily::Energy),
    ("Wh", 0.001, UnitFamily::Energy),
    ("J", 0.000_000_278, UnitFamily::Energy),
    ("kJ", 0.000_278, UnitFamily::Energy),
    ("MJ", 0.278, UnitFamily::Energy),
    ("GJ", 277.78, UnitFamily::Energy),
    ("TJ", 277_777.78, UnitFamily::Energy),
    ("BTU", 0.000_293, UnitFamily::Energy),
    ("MMBTU", 293.07, UnitFamily::Energy),
    ("therm", 29.307, UnitFamily::Energy),
];

pub(super) const VOLUME: &[UnitEntry] = &[
    ("L", 1.0, UnitFamily::Volume),
    ("mL", 0.001, UnitFamily::Volume),
    ("kL", 1000.0, UnitFamily::Volume),
    ("m3", 1000.0, UnitFamily::Volume),
    ("cm3", 0.001, UnitFamily::Volume),
    ("dm3", 1.0, UnitFamily::Volume),
    ("gal", 3.78541, UnitFamily::Volume),
    ("gal_uk", 4.54609, UnitFamily::Volume),
    ("ft3", 28.3168, UnitFamily::Volume),
    ("in3", 0.016_387_1, UnitFamily::Volume),
    ("barrel", 158.987, UnitFamily::Volume),
];

pub(super) const MASS: &[UnitEntry] = &[
    ("kg", 1.0, UnitFamily::Mass),
    ("g", 0.001, UnitFamily::Mass),
    ("mg", 0.000_001, UnitFamily::Mass),
    ("t", 1000.0, UnitFamily::Mass),
    ("tonne", 1000.0, UnitFamily::Mass),
    ("lb", 0.453_592, UnitFamily::Mass),
    ("oz", 0.028_349_5, UnitFamily::Mass),
    ("stone", 6.35029, UnitFamily::Mass),
    ("ton_us", 907.185, UnitFamily::Mass),
    ("ton_uk", 1016.05, UnitFamily::Mass),
];

pub(super) const DISTANCE: &[UnitEntry] = &[
    ("km", 1.0, UnitFamily::Distance),
    ("m", 0.001, UnitFamily::Distance),
    ("cm", 0.000_01, UnitFamily::Distance),
    ("mm", 0.000_001, UnitFamily::Distance),
    ("mi", 1.60934, UnitFamily::Distance),
    ("ft", 0.000_304_8, UnitFamily::Distance),
    ("in", 0.000_025_4, UnitFamily::Distance),
    ("yd", 0.000_914_4, UnitFamily::Distance),
    ("nm", 1.852, UnitFamily::Distance),
];

/// Freight, passenger and area units share one converter but never mix
pub(super) const COMPOSITE: &[UnitEntry] = &[
    ("tonne-km", 1.0, UnitFamily::Freight),
    ("t-km", 1.0, UnitFamily::Freight),
    ("kg-km", 0.001, UnitFamily::Freight),
    ("lb-mi", 0.000_285, UnitFamily::Freight),
    ("passenger-km", 1.0, UnitFamily::Passenger),
    ("pax-km", 1.0, UnitFamily::Passenger),
    ("passenger-mi", 1.60934, UnitFamily::Passenger),
    ("pax-mi", 1.60934, UnitFamily::Passenger),
    ("m2", 1.0, UnitFamily::Area),
    ("km2", 1_000_000.0, UnitFamily::Area),
    ("ha", 10_000.0, UnitFamily::Area),
    ("acre", 4046.86, UnitFamily::Area),
    ("ft2", 0.092_903, UnitFamily::Area),
];
