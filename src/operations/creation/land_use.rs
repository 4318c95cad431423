use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::OperationError;

/// Closed set of land-use surface types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LandUseType {
    Grass,
    Water,
    Building,
    Asphalt,
}

impl LandUseType {
    pub const ALL: [Self; 4] = [Self::Grass, Self::Water, Self::Building, Self::Asphalt];

    /// Name used as the material key.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Grass => "grass",
            Self::Water => "water",
            Self::Building => "building",
            Self::Asphalt => "asphalt",
        }
    }

    /// Surface color of this land use.
    #[must_use]
    pub fn color(self) -> [f64; 3] {
        match self {
            Self::Grass => [0.0, 1.0, 0.0],
            Self::Water => [0.0, 0.0, 1.0],
            Self::Building => [0.5, 0.5, 0.5],
            Self::Asphalt => [0.2, 0.2, 0.2],
        }
    }
}

impl fmt::Display for LandUseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LandUseType {
    type Err = OperationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|lu| lu.name() == s)
            .ok_or_else(|| OperationError::InvalidLandUseType(s.to_owned()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_known_name() {
        for lu in LandUseType::ALL {
            assert_eq!(lu.name().parse::<LandUseType>().unwrap(), lu);
        }
    }

    #[test]
    fn unknown_name_is_rejected_with_its_value() {
        let err = "unknown".parse::<LandUseType>().unwrap_err();
        assert!(matches!(&err, OperationError::InvalidLandUseType(v) if v == "unknown"));
        assert!(err.to_string().contains("unknown"));
    }

    #[test]
    fn names_are_case_sensitive() {
        assert!("Water".parse::<LandUseType>().is_err());
    }

    #[test]
    fn water_is_blue() {
        assert_eq!(LandUseType::Water.color(), [0.0, 0.0, 1.0]);
    }
}
