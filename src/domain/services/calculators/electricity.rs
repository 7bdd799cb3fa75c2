//! Purchased electricity (Scope 2)
//!
//! Location-based accounting applies the grid-average factor as is.
//! Market-based accounting adjusts it by the contractual instrument behind
//! the supply.

use std::sync::Arc;

use super::base;
use super::Calculator;
use crate::domain::entities::{CalculationResult, EmissionFactor, NormalizedInput, RawInput};
use crate::domain::services::units::UnitConverterRegistry;
use crate::domain::value_objects::ActivityType;
use crate::error::{CalcResult, ValidationError};

const ACTIVITY_TYPES: &[ActivityType] =
    &[ActivityType::Electricity, ActivityType::PurchasedElectricity];

pub const DEFAULT_TRANSMISSION_LOSS_RATE: f64 = 0.065;

/// Generation needed to deliver `consumption` given grid losses.
///
/// Not applied by the calculator; `includeLosses` only labels the result.
pub fn transmission_loss_adjustment(consumption: f64, loss_rate: f64) -> f64 {
    consumption / (1.0 - loss_rate)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountingMethod {
    LocationBased,
    MarketBased,
}

impl AccountingMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountingMethod::LocationBased => "location_based",
            AccountingMethod::MarketBased => "market_based",
        }
    }

    fn from_metadata(value: Option<&str>) -> Result<Self, ValidationError> {
        match value {
            None | Some("location_based") => Ok(AccountingMethod::LocationBased),
            Some("market_based") => Ok(AccountingMethod::MarketBased),
            Some(_) => Err(ValidationError::metadata(
                "method",
                "must be location_based or market_based",
            )),
        }
    }
}

/// Contractual instrument for market-based accounting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContractType {
    RenewablePpa,
    GreenCertificate,
    ResidualMix,
    /// No instrument, or one without a specific adjustment
    GridAverage,
}

impl ContractType {
    pub fn from_metadata(value: Option<&str>) -> Self {
        match value {
            Some("renewable_ppa") => ContractType::RenewablePpa,
            Some("green_certificate") => ContractType::GreenCertificate,
            Some("residual_mix") => ContractType::ResidualMix,
            _ => ContractType::GridAverage,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ContractType::RenewablePpa => "renewable_ppa",
            ContractType::GreenCertificate => "green_certificate",
            ContractType::ResidualMix => "residual_mix",
            ContractType::GridAverage => "grid_average",
        }
    }

    pub fn factor_multiplier(&self) -> f64 {
        match self {
            ContractType::RenewablePpa | ContractType::GreenCertificate => 0.0,
            ContractType::ResidualMix => 1.2,
            ContractType::GridAverage => 1.0,
        }
    }

    fn methodology(&self) -> &'static str {
        match self {
            ContractType::RenewablePpa => "Market-based method with renewable PPA (zero emissions)",
            ContractType::GreenCertificate => {
                "Market-based method with renewable energy certificates (zero emissions)"
            }
            ContractType::ResidualMix => "Market-based method using residual mix factor",
            ContractType::GridAverage => "Market-based method using grid average factor",
        }
    }
}

pub struct ElectricityCalculator {
    units: Arc<UnitConverterRegistry>,
}

impl ElectricityCalculator {
    pub fn new(units: Arc<UnitConverterRegistry>) -> Self {
        Self { units }
    }

    fn location_based(
        &self,
        input: &NormalizedInput,
        factor: &EmissionFactor,
    ) -> CalculationResult {
        let mut breakdown = base::apply_factor(input, factor, factor.factor_value);
        breakdown.methodology =
            "Location-based method using grid average emission factor".to_string();
        breakdown.assumptions = breakdown
            .assumptions
            .with("method", AccountingMethod::LocationBased.as_str())
            .with("gridRegion", factor.region.as_str())
            .with(
                "transmissionLosses",
                if input.metadata().flag("includeLosses") {
                    "included"
                } else {
                    "excluded"
                },
            );
        base::finish(breakdown, self.method_name(), input, factor)
    }

    fn market_based(&self, input: &NormalizedInput, factor: &EmissionFactor) -> CalculationResult {
        let contract = ContractType::from_metadata(input.metadata().str("contractType"));
        let adjusted = factor.factor_value * contract.factor_multiplier();

        let mut breakdown = base::apply_factor(input, factor, adjusted);
        breakdown.methodology = contract.methodology().to_string();
        let adjustment = if adjusted != factor.factor_value {
            format!("Original: {}, Adjusted: {}", factor.factor_value, adjusted)
        } else {
            "None".to_string()
        };
        breakdown.assumptions = breakdown
            .assumptions
            .with("method", AccountingMethod::MarketBased.as_str())
            .with("contractType", contract.as_str())
            .with("factorAdjustment", adjustment);
        base::finish(breakdown, self.method_name(), input, factor)
    }
}

impl Calculator for ElectricityCalculator {
    fn name(&self) -> &'static str {
        "electricity"
    }

    fn supported_activity_types(&self) -> &'static [ActivityType] {
        ACTIVITY_TYPES
    }

    fn normalized_unit(&self, _activity_type: ActivityType) -> &'static str {
        "kWh"
    }

    fn method_name(&self) -> &'static str {
        "Electricity Consumption"
    }

    fn validate(&self, raw: &RawInput) -> Result<NormalizedInput, ValidationError> {
        let unit = self.normalized_unit(raw.activity_type());
        let input = base::normalize(&self.units, ACTIVITY_TYPES, unit, raw)?;
        let method = AccountingMethod::from_metadata(raw.metadata().text("method")?)?;
        Ok(input.tagged("method", method.as_str()))
    }

    fn calculate(
        &self,
        input: &NormalizedInput,
        factor: &EmissionFactor,
    ) -> CalcResult<CalculationResult> {
        base::ensure_factor_matches(input, factor)?;
        let method = AccountingMethod::from_metadata(input.metadata().str("method"))?;
        Ok(match method {
            AccountingMethod::LocationBased => self.location_based(input, factor),
            AccountingMethod::MarketBased => self.market_based(input, factor),
        })
    }
}
