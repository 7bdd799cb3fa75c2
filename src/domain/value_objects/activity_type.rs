//! Activity type value object - what kind of activity a record measures

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::EmissionScope;
use crate::error::ValidationError;

/// Every activity type the engine can calculate.
///
/// The string form (`as_str`, serde, `FromStr`) is the snake_case name used by
/// activity records and emission-factor catalogs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityType {
    // Purchased energy
    Electricity,
    PurchasedElectricity,

    // Stationary and mobile combustion
    NaturalGas,
    Diesel,
    Gasoline,
    Lpg,
    Coal,
    Biomass,
    FuelOil,
    HeatingOil,

    // Air travel
    FlightDomesticShort,
    FlightDomesticMedium,
    FlightDomesticLong,
    FlightInternationalShort,
    FlightInternationalMedium,
    FlightInternationalLong,
    FlightGeneral,

    // Freight
    RoadFreight,
    RailFreight,
    SeaFreight,
    AirFreight,
    PipelineTransport,
    CourierDelivery,
    LastMileDelivery,

    // Waste treatment
    WasteLandfill,
    WasteIncineration,
    WasteRecycling,
    WasteComposting,
    WasteAnaerobicDigestion,
    WasteTreatmentGeneral,

    // Business travel and commuting
    EmployeeCommuting,
    BusinessTravel,
    ConferenceAttendance,
    ClientVisits,
    TrainingSessions,
}

impl ActivityType {
    /// All activity types, grouped by calculator family
    pub const ALL: [ActivityType; 35] = [
        ActivityType::Electricity,
        ActivityType::PurchasedElectricity,
        ActivityType::NaturalGas,
        ActivityType::Diesel,
        ActivityType::Gasoline,
        ActivityType::Lpg,
        ActivityType::Coal,
        ActivityType::Biomass,
        ActivityType::FuelOil,
        ActivityType::HeatingOil,
        ActivityType::FlightDomesticShort,
        ActivityType::FlightDomesticMedium,
        ActivityType::FlightDomesticLong,
        ActivityType::FlightInternationalShort,
        ActivityType::FlightInternationalMedium,
        ActivityType::FlightInternationalLong,
        ActivityType::FlightGeneral,
        ActivityType::RoadFreight,
        ActivityType::RailFreight,
        ActivityType::SeaFreight,
        ActivityType::AirFreight,
        ActivityType::PipelineTransport,
        ActivityType::CourierDelivery,
        ActivityType::LastMileDelivery,
        ActivityType::WasteLandfill,
        ActivityType::WasteIncineration,
        ActivityType::WasteRecycling,
        ActivityType::WasteComposting,
        ActivityType::WasteAnaerobicDigestion,
        ActivityType::WasteTreatmentGeneral,
        ActivityType::EmployeeCommuting,
        ActivityType::BusinessTravel,
        ActivityType::ConferenceAttendance,
        ActivityType::ClientVisits,
        ActivityType::TrainingSessions,
    ];

    /// Combustion fuels reported under Scope 1
    pub const COMBUSTION_FUELS: [ActivityType; 8] = [
        ActivityType::NaturalGas,
        ActivityType::Diesel,
        ActivityType::Gasoline,
        ActivityType::Lpg,
        ActivityType::Coal,
        ActivityType::Biomass,
        ActivityType::FuelOil,
        ActivityType::HeatingOil,
    ];

    /// Snake_case identifier used in records and factor catalogs
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityType::Electricity => "electricity",
            ActivityType::PurchasedElectricity => "purchased_electricity",
            ActivityType::NaturalGas => "natural_gas",
            ActivityType::Diesel => "diesel",
            ActivityType::Gasoline => "gasoline",
            ActivityType::Lpg => "lpg",
            ActivityType::Coal => "coal",
            ActivityType::Biomass => "biomass",
            ActivityType::FuelOil => "fuel_oil",
            ActivityType::HeatingOil => "heating_oil",
            ActivityType::FlightDomesticShort => "flight_domestic_short",
            ActivityType::FlightDomesticMedium => "flight_domestic_medium",
            ActivityType::FlightDomesticLong => "flight_domestic_long",
            ActivityType::FlightInternationalShort => "flight_international_short",
            ActivityType::FlightInternationalMedium => "flight_international_medium",
            ActivityType::FlightInternationalLong => "flight_international_long",
            ActivityType::FlightGeneral => "flight_general",
            ActivityType::RoadFreight => "road_freight",
            ActivityType::RailFreight => "rail_freight",
            ActivityType::SeaFreight => "sea_freight",
            ActivityType::AirFreight => "air_freight",
            ActivityType::PipelineTransport => "pipeline_transport",
            ActivityType::CourierDelivery => "courier_delivery",
            ActivityType::LastMileDelivery => "last_mile_delivery",
            ActivityType::WasteLandfill => "waste_landfill",
            ActivityType::WasteIncineration => "waste_incineration",
            ActivityType::WasteRecycling => "waste_recycling",
            ActivityType::WasteComposting => "waste_composting",
            ActivityType::WasteAnaerobicDigestion => "waste_anaerobic_digestion",
            ActivityType::WasteTreatmentGeneral => "waste_treatment_general",
            ActivityType::EmployeeCommuting => "employee_commuting",
            ActivityType::BusinessTravel => "business_travel",
            ActivityType::ConferenceAttendance => "conference_attendance",
            ActivityType::ClientVisits => "client_visits",
            ActivityType::TrainingSessions => "training_sessions",
        }
    }

    /// GHG Protocol scope this activity is reported under
    pub fn scope(&self) -> EmissionScope {
        if self.is_combustion_fuel() {
            EmissionScope::Scope1
        } else if matches!(
            self,
            ActivityType::Electricity | ActivityType::PurchasedElectricity
        ) {
            EmissionScope::Scope2
        } else {
            EmissionScope::Scope3
        }
    }

    /// Returns true for fuels burned on site
    pub fn is_combustion_fuel(&self) -> bool {
        Self::COMBUSTION_FUELS.contains(self)
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActivityType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| ValidationError::UnsupportedActivityType {
                activity_type: s.to_string(),
            })
    }
}
