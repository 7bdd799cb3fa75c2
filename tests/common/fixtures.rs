//! Test fixtures - a small emission factor catalog and activity records

use chrono::{DateTime, TimeZone, Utc};

use ghgcalc::infrastructure::{InMemoryActivityRepository, InMemoryFactorRepository};
use ghgcalc::{ActivityRecord, CalculationService, EngineConfig, Metadata};

pub const ORG: &str = "org-acme";
pub const OTHER_ORG: &str = "org-globex";

/// Catalog in the persistence layer's JSON shape
pub const FACTOR_CATALOG: &str = r#"[
    {"id": "grid-cn-2023", "activityType": "electricity", "region": "CN", "year": 2023,
     "factorValue": 0.581, "factorUnit": "kg CO2e/kWh", "gas": "CO2e", "gwp": 1,
     "source": "IEA", "sourceType": "standard", "isDefault": true},
    {"id": "grid-cn-2021", "activityType": "electricity", "region": "CN", "year": 2021,
     "factorValue": 0.61, "factorUnit": "kg CO2e/kWh", "gas": "CO2e", "gwp": 1,
     "source": "IEA", "sourceType": "standard",
     "validityStart": "2021-01-01T00:00:00Z", "validityEnd": "2021-12-31T23:59:59Z"},
    {"id": "grid-acme-ppa", "activityType": "electricity", "region": "CN", "year": 2023,
     "factorValue": 0.42, "factorUnit": "kg CO2e/kWh", "gas": "CO2e", "gwp": 1,
     "source": "CUSTOM", "sourceType": "custom", "organizationId": "org-acme"},
    {"id": "heating-oil", "activityType": "heating_oil", "region": "GLOBAL", "year": 2022,
     "factorValue": 2.52, "factorUnit": "kg CO2e/L", "gas": "CO2", "gwp": 1,
     "source": "IPCC", "sourceType": "standard"},
    {"id": "flight-short", "activityType": "flight_domestic_short", "region": "GLOBAL", "year": 2023,
     "factorValue": 0.1579, "factorUnit": "kg CO2e/passenger-km", "gas": "CO2e", "gwp": 1,
     "source": "DEFRA", "sourceType": "standard"},
    {"id": "road", "activityType": "road_freight", "region": "GLOBAL", "year": 2023,
     "factorValue": 0.105, "factorUnit": "kg CO2e/tonne-km", "gas": "CO2e", "gwp": 1,
     "source": "DEFRA", "sourceType": "standard"},
    {"id": "rail", "activityType": "rail_freight", "region": "GLOBAL", "year": 2023,
     "factorValue": 0.028, "factorUnit": "kg CO2e/tonne-km", "gas": "CO2e", "gwp": 1,
     "source": "DEFRA", "sourceType": "standard"},
    {"id": "sea", "activityType": "sea_freight", "region": "GLOBAL", "year": 2023,
     "factorValue": 0.016, "factorUnit": "kg CO2e/tonne-km", "gas": "CO2e", "gwp": 1,
     "source": "DEFRA", "sourceType": "standard"},
    {"id": "commute", "activityType": "employee_commuting", "region": "GLOBAL", "year": 2023,
     "factorValue": 0.1, "factorUnit": "kg CO2e/km", "gas": "CO2e", "gwp": 1,
     "source": "DEFRA", "sourceType": "standard"},
    {"id": "waste-general", "activityType": "waste_treatment_general", "region": "GLOBAL", "year": 2023,
     "factorValue": 0.5, "factorUnit": "kg CO2e/kg", "gas": "CO2e", "gwp": 1,
     "source": "EPA", "sourceType": "standard"}
]"#;

pub type TestService = CalculationService<InMemoryFactorRepository, InMemoryActivityRepository>;

/// Fixed evaluation moment so validity windows do not drift
pub fn as_of() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 30, 0, 0, 0).unwrap()
}

pub fn factors() -> InMemoryFactorRepository {
    InMemoryFactorRepository::from_json_str(FACTOR_CATALOG).unwrap()
}

pub fn quarter(year: i32, q: u32) -> (DateTime<Utc>, DateTime<Utc>) {
    let start = Utc.with_ymd_and_hms(year, (q - 1) * 3 + 1, 1, 0, 0, 0).unwrap();
    let end = Utc.with_ymd_and_hms(year, q * 3, 28, 0, 0, 0).unwrap();
    (start, end)
}

/// Activity records for `ORG`, plus one belonging to `OTHER_ORG`
pub fn records() -> Vec<ActivityRecord> {
    let (q1_start, q1_end) = quarter(2024, 1);
    let (q2_start, q2_end) = quarter(2024, 2);
    vec![
        ActivityRecord::new("office-power-q1", ORG, "electricity", 12.0, "MWh")
            .with_category("purchased_energy")
            .with_facility("hq")
            .with_period(q1_start, q1_end),
        ActivityRecord::new("boiler-q1", ORG, "heating_oil", 400.0, "L")
            .with_category("stationary_combustion")
            .with_facility("hq")
            .with_period(q1_start, q1_end),
        ActivityRecord::new("sales-trip", ORG, "flight_domestic_short", 450.0, "km")
            .with_category("business_travel")
            .with_metadata(
                Metadata::new()
                    .with("distance", 450.0)
                    .with("passengers", 2.0),
            )
            .with_period(q2_start, q2_end),
        ActivityRecord::new("office-power-q2", ORG, "electricity", 11.0, "MWh")
            .with_category("purchased_energy")
            .with_facility("hq")
            .with_period(q2_start, q2_end),
        ActivityRecord::new("globex-power", OTHER_ORG, "electricity", 5.0, "MWh")
            .with_category("purchased_energy"),
    ]
}

pub fn service_with(records: Vec<ActivityRecord>) -> TestService {
    CalculationService::from_config(
        &EngineConfig::default(),
        factors(),
        InMemoryActivityRepository::new(records),
    )
    .unwrap()
    .with_as_of(as_of())
}

pub fn service() -> TestService {
    service_with(records())
}
