use crate::error::ConversionError;
use std::fmt;
use std::str::FromStr;

/// Carrier responsible for a cargo unit. Used as the category tag of a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ShippingCompany {
    Maersk,
    Msc,
    CmaCgm,
    Cosco,
    HapagLloyd,
    Oocl,
    Evergreen,
    Yangming,
}

impl ShippingCompany {
    pub const ALL: [ShippingCompany; 8] = [
        ShippingCompany::Maersk,
        ShippingCompany::Msc,
        ShippingCompany::CmaCgm,
        ShippingCompany::Cosco,
        ShippingCompany::HapagLloyd,
        ShippingCompany::Oocl,
        ShippingCompany::Evergreen,
        ShippingCompany::Yangming,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ShippingCompany::Maersk => "MAERSK",
            ShippingCompany::Msc => "MSC",
            ShippingCompany::CmaCgm => "CMA_CGM",
            ShippingCompany::Cosco => "COSCO",
            ShippingCompany::HapagLloyd => "HAPAG_LLOYD",
            ShippingCompany::Oocl => "OOCL",
            ShippingCompany::Evergreen => "EVERGREEN",
            ShippingCompany::Yangming => "YANGMING",
        }
    }
}

impl fmt::Display for ShippingCompany {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShippingCompany {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ShippingCompany::ALL
            .iter()
            .copied()
            .find(|company| company.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ConversionError::UnknownShippingCompany(s.to_string()))
    }
}
