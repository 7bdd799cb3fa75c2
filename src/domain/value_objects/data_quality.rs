//! Data quality value object

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How trustworthy a calculated figure is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataQuality {
    /// Metered or invoiced data with an organization-specific factor
    Measured,
    /// Activity data combined with a published factor
    Calculated,
    /// Everything else
    Estimated,
}

impl DataQuality {
    pub fn as_str(&self) -> &'static str {
        match self {
            DataQuality::Measured => "measured",
            DataQuality::Calculated => "calculated",
            DataQuality::Estimated => "estimated",
        }
    }
}

impl fmt::Display for DataQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DataQuality {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "measured" => Ok(DataQuality::Measured),
            "calculated" => Ok(DataQuality::Calculated),
            "estimated" => Ok(DataQuality::Estimated),
            other => Err(format!(
                "expected one of measured, calculated, estimated; got '{}'",
                other
            )),
        }
    }
}
