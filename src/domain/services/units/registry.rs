//! Unit converter registry

use std::collections::BTreeSet;

use super::{TableConverter, UnitConverter, UnitError, UnitFamily};

/// Routes unit symbols to converters.
///
/// Symbols are unique across converters, so the first converter that knows a
/// symbol owns it. Converting between units owned by different converters
/// fails with `IncompatibleUnitFamily`.
pub struct UnitConverterRegistry {
    converters: Vec<Box<dyn UnitConverter>>,
}

impl UnitConverterRegistry {
    /// Registry with the five standard converters
    pub fn new() -> Self {
        Self::with_converters(vec![
            Box::new(TableConverter::energy()),
            Box::new(TableConverter::volume()),
            Box::new(TableConverter::mass()),
            Box::new(TableConverter::distance()),
            Box::new(TableConverter::composite()),
        ])
    }

    pub fn with_converters(converters: Vec<Box<dyn UnitConverter>>) -> Self {
        Self { converters }
    }

    pub fn converter(&self, name: &str) -> Option<&dyn UnitConverter> {
        self.converters
            .iter()
            .find(|c| c.name() == name)
            .map(|c| c.as_ref())
    }

    pub fn converter_for(&self, unit: &str) -> Option<&dyn UnitConverter> {
        self.converters
            .iter()
            .find(|c| c.is_supported(unit))
            .map(|c| c.as_ref())
    }

    pub fn convert(&self, value: f64, from: &str, to: &str) -> Result<f64, UnitError> {
        let from_converter = self
            .converter_for(from)
            .ok_or_else(|| UnitError::UnsupportedUnit {
                unit: from.to_string(),
            })?;
        let to_converter = self
            .converter_for(to)
            .ok_or_else(|| UnitError::UnsupportedUnit {
                unit: to.to_string(),
            })?;

        if from_converter.name() != to_converter.name() {
            return Err(UnitError::IncompatibleUnitFamily {
                from: from.to_string(),
                to: to.to_string(),
            });
        }
        from_converter.convert(value, from, to)
    }

    pub fn is_supported(&self, unit: &str) -> bool {
        self.converter_for(unit).is_some()
    }

    pub fn family_of(&self, unit: &str) -> Option<UnitFamily> {
        self.converter_for(unit).and_then(|c| c.family_of(unit))
    }

    /// Every known symbol, sorted
    pub fn all_supported_units(&self) -> Vec<&'static str> {
        self.converters
            .iter()
            .flat_map(|c| c.supported_units())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

impl Default for UnitConverterRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for UnitConverterRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UnitConverterRegistry")
            .field(
                "converters",
                &self.converters.iter().map(|c| c.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}
