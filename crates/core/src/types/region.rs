//! Region (US state) codes accepted by the address form.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`RegionCode`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RegionCodeError {
    /// The input string is empty.
    #[error("region code cannot be empty")]
    Empty,
    /// The input is not one of the supported region codes.
    #[error("unsupported region code: {0}")]
    Unsupported(String),
}

/// A delivery region, restricted to the states the cafe delivers to.
///
/// ```
/// use midnight_bloom_core::RegionCode;
///
/// assert_eq!("CA".parse::<RegionCode>(), Ok(RegionCode::CA));
/// assert!("ZZ".parse::<RegionCode>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RegionCode {
    CA,
    NY,
    TX,
    FL,
    IL,
    PA,
    OH,
    GA,
    NC,
    MI,
    NJ,
    VA,
    WA,
    AZ,
    MA,
    TN,
    IN,
    MO,
    MD,
    WI,
}

impl RegionCode {
    /// Every supported region, in the order the form lists them.
    pub const ALL: [Self; 20] = [
        Self::CA,
        Self::NY,
        Self::TX,
        Self::FL,
        Self::IL,
        Self::PA,
        Self::OH,
        Self::GA,
        Self::NC,
        Self::MI,
        Self::NJ,
        Self::VA,
        Self::WA,
        Self::AZ,
        Self::MA,
        Self::TN,
        Self::IN,
        Self::MO,
        Self::MD,
        Self::WI,
    ];

    /// Two-letter code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CA => "CA",
            Self::NY => "NY",
            Self::TX => "TX",
            Self::FL => "FL",
            Self::IL => "IL",
            Self::PA => "PA",
            Self::OH => "OH",
            Self::GA => "GA",
            Self::NC => "NC",
            Self::MI => "MI",
            Self::NJ => "NJ",
            Self::VA => "VA",
            Self::WA => "WA",
            Self::AZ => "AZ",
            Self::MA => "MA",
            Self::TN => "TN",
            Self::IN => "IN",
            Self::MO => "MO",
            Self::MD => "MD",
            Self::WI => "WI",
        }
    }

    /// Parse a region code.
    ///
    /// # Errors
    ///
    /// Returns `RegionCodeError` if the input is empty or not a supported code.
    pub fn parse(s: &str) -> Result<Self, RegionCodeError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(RegionCodeError::Empty);
        }

        Self::ALL
            .into_iter()
            .find(|code| code.as_str() == s)
            .ok_or_else(|| RegionCodeError::Unsupported(s.to_string()))
    }
}

impl fmt::Display for RegionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RegionCode {
    type Err = RegionCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
