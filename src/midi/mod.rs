mod error;
pub use error::{Error, RangeError};

pub mod channel_voice;
pub use channel_voice::{CCNumber, CCValue, ChannelVoice, CC};

pub mod connector;
pub use connector::{Connector, Midir, OutputConnection};

pub mod port;
pub use port::{Direction, DirectionalPorts, MidiClient, PortsIn, PortsOut};

#[cfg(test)]
pub mod recorder;

use std::fmt;

/// A MIDI channel, numbered `1..=16` as on devices front panels.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Channel(u8);

impl Channel {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 16;

    /// The channel as encoded in the low nibble of a status byte.
    pub const fn nibble(self) -> u8 {
        self.0
    }

    pub const fn number(self) -> u8 {
        self.0 + 1
    }
}

impl TryFrom<u8> for Channel {
    type Error = RangeError;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        if !(Self::MIN..=Self::MAX).contains(&number) {
            return Err(RangeError::Channel(number));
        }

        Ok(Channel(number - 1))
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.number(), f)
    }
}

/// The high nibble of a channel voice status byte.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Tag(pub u8);

impl From<Tag> for u8 {
    fn from(tag: Tag) -> Self {
        tag.0
    }
}

/// A channel voice status byte, split into its `Tag` and `Channel`.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct TagChannel {
    pub tag: Tag,
    pub chan: Channel,
}

impl TagChannel {
    pub fn new(tag: Tag, chan: Channel) -> Self {
        TagChannel { tag, chan }
    }

    pub fn status(self) -> u8 {
        self.tag.0 | self.chan.nibble()
    }
}

impl From<u8> for TagChannel {
    fn from(status: u8) -> Self {
        TagChannel {
            tag: Tag(status & 0xf0),
            chan: Channel(status & 0x0f),
        }
    }
}
