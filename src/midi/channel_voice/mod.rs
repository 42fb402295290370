use nom::{
    combinator::{map, verify},
    error::{Error, ErrorKind},
    number::complete::u8 as byte,
    IResult,
};

pub mod cc;
pub use cc::{CCNumber, CCValue, CC};

use crate::midi;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct ChannelVoice {
    pub chan: midi::Channel,
    pub msg: Message,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Message {
    CC(CC),
}

/// Parses the channel voice message at the start of `i`.
///
/// Only Control Changes are handled.
pub fn parse(i: &[u8]) -> IResult<&[u8], ChannelVoice> {
    let (i, status) = verify(byte, |status: &u8| status & 0x80 != 0)(i)?;
    let tag_chan = midi::TagChannel::from(status);

    match tag_chan.tag {
        CC::TAG => map(cc::parse, |cc| ChannelVoice {
            chan: tag_chan.chan,
            msg: Message::CC(cc),
        })(i),
        tag => {
            log::debug!("Ignoring channel voice tag 0x{:02x}", u8::from(tag));
            Err(nom::Err::Error(Error::new(i, ErrorKind::Tag)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{parse, Message};

    #[test]
    fn parse_cc() {
        let (rem, cv) = parse(&[0xb4, 40, 32]).unwrap();
        assert!(rem.is_empty());
        assert_eq!(cv.chan.number(), 5);

        let Message::CC(cc) = cv.msg;
        assert_eq!(cc.nb.as_u8(), 40);
        assert_eq!(cc.value.as_u8(), 32);
    }

    #[test]
    fn parse_unhandled() {
        // Running status
        assert!(parse(&[40, 32]).is_err());
        // Note On
        assert!(parse(&[0x90, 60, 100]).is_err());
        // Truncated CC
        assert!(parse(&[0xb0, 4]).is_err());
        // Data byte with the status bit set
        assert!(parse(&[0xb0, 0x84, 1]).is_err());
    }
}
