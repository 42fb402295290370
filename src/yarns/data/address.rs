use std::fmt;

use crate::{
    midi::CCNumber,
    yarns::{data::Parameter, Error},
};

/// Number of controller addresses allotted to each part.
pub const PART_STRIDE: u8 = 32;

/// Addresses at the start of each part block which no per-part parameter uses.
///
/// In the first block, they hold the global parameters.
pub const RESERVED: u8 = 4;

/// One of the four independently addressable parts of the module.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct PartNumber(u8);

impl PartNumber {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 4;

    pub const ALL: [PartNumber; 4] = [PartNumber(1), PartNumber(2), PartNumber(3), PartNumber(4)];

    pub fn new(nb: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&nb).then_some(PartNumber(nb))
    }

    pub const fn as_u8(self) -> u8 {
        self.0
    }

    /// First address of this part's block.
    pub const fn base(self) -> u8 {
        (self.0 - 1) * PART_STRIDE
    }
}

impl fmt::Display for PartNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Scope {
    Global,
    Part(PartNumber),
}

impl Scope {
    /// Builds the `Scope` for a raw part number, `0` and `None` meaning global.
    pub fn from_part(parameter: Parameter, part: Option<u8>) -> Result<Self, Error> {
        let invalid = || Error::InvalidPartNumber {
            parameter: parameter.name(),
            part,
        };

        match part {
            None => Ok(Scope::Global),
            Some(0) if parameter.is_global() => Ok(Scope::Global),
            Some(0) => Err(invalid()),
            Some(nb) => PartNumber::new(nb).map(Scope::Part).ok_or_else(invalid),
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::Global => f.write_str("global"),
            Scope::Part(part) => write!(f, "part {part}"),
        }
    }
}

impl From<PartNumber> for Scope {
    fn from(part: PartNumber) -> Self {
        Scope::Part(part)
    }
}

/// Where a parameter lives in the module's controller space.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Placement {
    /// A fixed address, shared by all parts.
    Global { address: u8 },
    /// An offset in each part's block.
    PerPart { offset: u8 },
}

/// The controller address a parameter is transmitted to for a given `Scope`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ControllerAddress {
    pub parameter: Parameter,
    pub scope: Scope,
    pub nb: CCNumber,
}

impl ControllerAddress {
    pub fn resolve(parameter: Parameter, scope: Scope) -> Result<Self, Error> {
        let nb = match (parameter.placement(), scope) {
            (Placement::Global { address }, Scope::Global) => address,
            (Placement::PerPart { offset }, Scope::Part(part)) => part.base() + offset,
            (Placement::Global { .. }, Scope::Part(part)) => {
                return Err(Error::InvalidPartNumber {
                    parameter: parameter.name(),
                    part: Some(part.as_u8()),
                })
            }
            (Placement::PerPart { .. }, Scope::Global) => {
                return Err(Error::InvalidPartNumber {
                    parameter: parameter.name(),
                    part: None,
                })
            }
        };

        Ok(ControllerAddress {
            parameter,
            scope,
            nb: CCNumber::new_unchecked(nb),
        })
    }

    /// Finds the parameter and scope a controller number is assigned to.
    pub fn lookup(nb: CCNumber) -> Option<Self> {
        let part = PartNumber::new(nb.as_u8() / PART_STRIDE + 1)?;
        let part_offset = nb.as_u8() % PART_STRIDE;

        Parameter::ALL
            .iter()
            .find_map(|&parameter| match parameter.placement() {
                Placement::Global { address } if address == nb.as_u8() => {
                    Some((parameter, Scope::Global))
                }
                Placement::PerPart { offset } if offset == part_offset => {
                    Some((parameter, Scope::Part(part)))
                }
                _ => None,
            })
            .map(|(parameter, scope)| ControllerAddress {
                parameter,
                scope,
                nb,
            })
    }
}
