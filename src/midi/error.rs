use std::sync::Arc;

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("MIDI initialization failed")]
    Init(#[from] midir::InitError),

    #[error("MIDI port connection failed for {}", .0)]
    PortConnection(Arc<str>),

    #[error("Couldn't retrieve a MIDI port name")]
    PortInfoError(#[from] midir::PortInfoError),

    #[error("Invalid MIDI port name {}", .0)]
    PortNotFound(Arc<str>),

    #[error("Couldn't send MIDI message: {}", .0)]
    Send(#[from] midir::SendError),
}

/// A value which doesn't fit in its MIDI field.
#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
pub enum RangeError {
    #[error("MIDI channel {} out of range (1..=16)", .0)]
    Channel(u8),

    #[error("CC number out of range 0x{:02x}", .0)]
    CCNumber(u8),

    #[error("CC value out of range 0x{:02x}", .0)]
    CCValue(u8),
}
