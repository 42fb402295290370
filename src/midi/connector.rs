use std::sync::Arc;

use crate::midi::{self, Direction};

/// Access to a MIDI subsystem: ports enumeration and connection.
///
/// Implemented by [`Midir`] for the actual OS / driver ports.
pub trait Connector {
    /// The type resulting from a sucessful connection to an input port.
    ///
    /// Dropping it releases the port.
    type In;
    /// The type resulting from a sucessful connection to an output port.
    type Out: OutputConnection;

    /// Queries the subsystem for the names of the ports in `direction`.
    fn list(&mut self, direction: Direction) -> Result<Vec<Arc<str>>, midi::Error>;

    /// Attempts to connect the input port, forwarding incoming messages to `tx`.
    fn connect_in(
        &mut self,
        port_name: Arc<str>,
        tx: flume::Sender<Vec<u8>>,
    ) -> Result<Self::In, midi::Error>;

    /// Attempts to connect the output port.
    fn connect_out(&mut self, port_name: Arc<str>) -> Result<Self::Out, midi::Error>;

    /// Notifies that the connection for `direction` was released.
    fn disconnected(&mut self, direction: Direction);
}

pub trait OutputConnection {
    /// Writes `msg` to the port, unbuffered.
    fn send(&mut self, msg: &[u8]) -> Result<(), midi::Error>;

    fn close(self);
}

impl OutputConnection for midir::MidiOutputConnection {
    fn send(&mut self, msg: &[u8]) -> Result<(), midi::Error> {
        midir::MidiOutputConnection::send(self, msg)?;

        Ok(())
    }

    fn close(self) {
        midir::MidiOutputConnection::close(self);
    }
}

/// A `Connector` backed by `midir`.
pub struct Midir {
    ins: midi::PortsIn,
    outs: midi::PortsOut,
}

impl Midir {
    pub fn new(client_name: Arc<str>) -> Self {
        Midir {
            ins: midi::PortsIn::new(client_name.clone()),
            outs: midi::PortsOut::new(client_name),
        }
    }
}

impl Connector for Midir {
    type In = midir::MidiInputConnection<flume::Sender<Vec<u8>>>;
    type Out = midir::MidiOutputConnection;

    fn list(&mut self, direction: Direction) -> Result<Vec<Arc<str>>, midi::Error> {
        match direction {
            Direction::In => {
                self.ins.refresh()?;
                Ok(self.ins.list().collect())
            }
            Direction::Out => {
                self.outs.refresh()?;
                Ok(self.outs.list().collect())
            }
        }
    }

    fn connect_in(
        &mut self,
        port_name: Arc<str>,
        tx: flume::Sender<Vec<u8>>,
    ) -> Result<Self::In, midi::Error> {
        // Ports may have come and gone since last listing.
        self.ins.refresh()?;

        // Messages are dropped while the receiving side is full.
        self.ins.connect(port_name, tx, |_ts, msg, tx| {
            let _ = tx.try_send(msg.to_owned());
        })
    }

    fn connect_out(&mut self, port_name: Arc<str>) -> Result<Self::Out, midi::Error> {
        self.outs.refresh()?;

        self.outs.connect(port_name)
    }

    fn disconnected(&mut self, direction: Direction) {
        match direction {
            Direction::In => self.ins.disconnect(),
            Direction::Out => self.outs.disconnect(),
        }
    }
}
