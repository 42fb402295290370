use nom::{
    combinator::{map, map_res},
    number::complete::u8 as byte,
    sequence::tuple,
    IResult,
};

use std::fmt;

use crate::midi::{self, RangeError};

/// A Control Change message.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct CC {
    pub nb: CCNumber,
    pub value: CCValue,
}

impl CC {
    pub const TAG: midi::Tag = midi::Tag(0xb0);

    pub fn new(nb: CCNumber, value: CCValue) -> Self {
        CC { nb, value }
    }

    /// Builds the 3 bytes wire message for `chan`.
    pub fn to_bytes(self, chan: midi::Channel) -> [u8; 3] {
        [
            midi::TagChannel::new(Self::TAG, chan).status(),
            self.nb.as_u8(),
            self.value.as_u8(),
        ]
    }
}

/// Parses the data bytes of a Control Change.
pub fn parse(i: &[u8]) -> IResult<&[u8], CC> {
    map(
        tuple((
            map_res(byte, CCNumber::try_from),
            map_res(byte, CCValue::try_from),
        )),
        |(nb, value)| CC { nb, value },
    )(i)
}

/// The controller number (a.k.a. controller address) of a `CC`.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct CCNumber(u8);

impl CCNumber {
    pub const MAX: CCNumber = CCNumber(0x7f);

    /// Builds a `CCNumber` from a value known to be in range.
    pub(crate) const fn new_unchecked(nb: u8) -> Self {
        CCNumber(nb)
    }

    pub const fn as_u8(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for CCNumber {
    type Error = RangeError;

    fn try_from(nb: u8) -> Result<Self, Self::Error> {
        if nb > Self::MAX.0 {
            return Err(RangeError::CCNumber(nb));
        }

        Ok(Self(nb))
    }
}

impl fmt::Display for CCNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct CCValue(u8);

impl CCValue {
    pub const MAX: CCValue = CCValue(0x7f);

    /// Builds a `CCValue` from a value known to be in range.
    pub(crate) const fn new_unchecked(value: u8) -> Self {
        CCValue(value)
    }

    pub const fn as_u8(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for CCValue {
    type Error = RangeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value > Self::MAX.0 {
            return Err(RangeError::CCValue(value));
        }

        Ok(Self(value))
    }
}

impl fmt::Display for CCValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::{CCNumber, CCValue, RangeError, CC};
    use crate::midi::Channel;

    #[test]
    fn to_bytes() {
        let cc = CC::new(CCNumber::try_from(4).unwrap(), CCValue::try_from(1).unwrap());
        assert_eq!(cc.to_bytes(Channel::try_from(1).unwrap()), [0xb0, 4, 1]);

        let cc = CC::new(
            CCNumber::try_from(40).unwrap(),
            CCValue::try_from(32).unwrap(),
        );
        assert_eq!(cc.to_bytes(Channel::try_from(5).unwrap()), [0xb4, 40, 32]);

        let cc = CC::new(CCNumber::MAX, CCValue::MAX);
        assert_eq!(cc.to_bytes(Channel::try_from(16).unwrap()), [0xbf, 0x7f, 0x7f]);
    }

    #[test]
    fn out_of_range() {
        assert_eq!(CCNumber::try_from(0x7f).unwrap(), CCNumber::MAX);
        assert_eq!(CCNumber::try_from(0x80), Err(RangeError::CCNumber(0x80)));

        assert_eq!(CCValue::try_from(0).unwrap().as_u8(), 0);
        assert_eq!(CCValue::try_from(0xff), Err(RangeError::CCValue(0xff)));
    }
}
