use std::sync::Arc;

use crate::{
    midi::{self, channel_voice, ChannelVoice, Connector, Direction, OutputConnection, CC},
    yarns::Error,
};

/// Incoming messages kept while nobody is monitoring.
const MONITOR_CAPACITY: usize = 64;

/// Life cycle of a `Gateway`. Termination consumes it, see `Gateway::terminate`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Stage {
    Unconfigured,
    PortsSelected,
    Open,
    Closed,
}

/// The MIDI ports and channel used to talk to the module.
///
/// The output port is mandatory, the input port is only used for monitoring.
pub struct Gateway<C: Connector> {
    connector: C,
    chan: Option<midi::Channel>,
    port_in: Option<Arc<str>>,
    port_out: Option<Arc<str>>,
    midi_in: Option<C::In>,
    midi_out: Option<C::Out>,
    monitor_rx: Option<flume::Receiver<Vec<u8>>>,
    has_opened: bool,
}

impl<C: Connector> Gateway<C> {
    pub fn new(connector: C) -> Self {
        Gateway {
            connector,
            chan: None,
            port_in: None,
            port_out: None,
            midi_in: None,
            midi_out: None,
            monitor_rx: None,
            has_opened: false,
        }
    }

    pub fn stage(&self) -> Stage {
        if self.midi_out.is_some() {
            Stage::Open
        } else if self.has_opened {
            Stage::Closed
        } else if self.port_out.is_some() {
            Stage::PortsSelected
        } else {
            Stage::Unconfigured
        }
    }

    pub fn list_ports(&mut self, direction: Direction) -> Result<Vec<Arc<str>>, Error> {
        Ok(self.connector.list(direction)?)
    }

    /// Selects the port to use for `direction` on next `open()`.
    pub fn select_port(&mut self, direction: Direction, port_name: impl Into<Arc<str>>) {
        let port_name = port_name.into();
        log::debug!("Selected {direction} {port_name}");

        match direction {
            Direction::In => self.port_in = Some(port_name),
            Direction::Out => self.port_out = Some(port_name),
        }
    }

    /// Goes without input port on next `open()`.
    pub fn deselect_input(&mut self) {
        if let Some(port_name) = self.port_in.take() {
            log::debug!("Deselected {} {port_name}", Direction::In);
        }
    }

    pub fn selected_port(&self, direction: Direction) -> Option<&Arc<str>> {
        match direction {
            Direction::In => self.port_in.as_ref(),
            Direction::Out => self.port_out.as_ref(),
        }
    }

    pub fn has_output_port(&self) -> bool {
        self.port_out.is_some()
    }

    pub fn set_channel(&mut self, number: u8) -> Result<(), Error> {
        let chan =
            midi::Channel::try_from(number).map_err(|_| Error::InvalidChannelRange(number))?;
        log::debug!("Using MIDI channel {chan}");
        self.chan = Some(chan);

        Ok(())
    }

    pub fn channel(&self) -> Option<midi::Channel> {
        self.chan
    }

    /// Connects the selected ports, releasing the previous connections first.
    ///
    /// Failing to connect the input port is not fatal.
    pub fn open(&mut self) -> Result<(), Error> {
        let port_out = self.port_out.clone().ok_or(Error::NoOutputPortSelected)?;

        self.close();

        let midi_out = self.connector.connect_out(port_out.clone())?;
        log::info!("Opened {} {port_out}", Direction::Out);
        self.midi_out = Some(midi_out);
        self.has_opened = true;

        if let Some(port_in) = self.port_in.clone() {
            let (msg_tx, msg_rx) = flume::bounded(MONITOR_CAPACITY);
            match self.connector.connect_in(port_in.clone(), msg_tx) {
                Ok(midi_in) => {
                    log::info!("Opened {} {port_in}", Direction::In);
                    self.midi_in = Some(midi_in);
                    self.monitor_rx = Some(msg_rx);
                }
                Err(err) => log::warn!("Continuing without {} {port_in}: {err}", Direction::In),
            }
        }

        Ok(())
    }

    pub fn close(&mut self) {
        self.monitor_rx = None;

        if let Some(midi_in) = self.midi_in.take() {
            drop(midi_in);
            self.connector.disconnected(Direction::In);
        }

        if let Some(midi_out) = self.midi_out.take() {
            midi_out.close();
            self.connector.disconnected(Direction::Out);
            log::info!("Closed MIDI ports");
        }
    }

    pub fn is_open(&self) -> bool {
        self.midi_out.is_some()
    }

    /// Sends a Control Change, returning the bytes written to the port.
    pub fn send_control_change(&mut self, cc: CC) -> Result<[u8; 3], Error> {
        let midi_out = self.midi_out.as_mut().ok_or(Error::NoOutputPortSelected)?;
        let chan = self.chan.ok_or(Error::ChannelNotSet)?;

        let msg = cc.to_bytes(chan);
        midi_out.send(&msg)?;
        log::trace!("Sent CC {:02x?}", msg);

        Ok(msg)
    }

    /// Drains the messages received on the input port since last call.
    ///
    /// Unhandled or malformed messages are skipped.
    pub fn monitor(&mut self) -> Vec<ChannelVoice> {
        let msg_rx = match self.monitor_rx.as_ref() {
            Some(msg_rx) => msg_rx,
            None => return Vec::new(),
        };

        msg_rx
            .try_iter()
            .filter_map(|msg| match channel_voice::parse(&msg) {
                Ok((_, cv)) => Some(cv),
                Err(err) => {
                    log::warn!("Skipping incoming message {msg:02x?}: {err}");
                    None
                }
            })
            .collect()
    }

    /// Releases the ports for good.
    pub fn terminate(mut self) {
        self.close();
        log::debug!("MIDI gateway terminated");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::midi::{
        channel_voice::Message,
        recorder::{Log, Recorder},
        CCNumber, CCValue,
    };
    use std::{cell::RefCell, rc::Rc};

    fn cc(nb: u8, value: u8) -> CC {
        CC::new(
            CCNumber::try_from(nb).unwrap(),
            CCValue::try_from(value).unwrap(),
        )
    }

    fn gateway() -> (Gateway<Recorder>, Rc<RefCell<Log>>) {
        let recorder = Recorder::new(&["Yarns In"], &["Yarns Out", "Other Out"]);
        let log = recorder.log();

        (Gateway::new(recorder), log)
    }

    #[test]
    fn stages() {
        let (mut gw, _log) = gateway();
        assert_eq!(gw.stage(), Stage::Unconfigured);

        gw.select_port(Direction::Out, "Yarns Out");
        assert_eq!(gw.stage(), Stage::PortsSelected);

        gw.open().unwrap();
        assert_eq!(gw.stage(), Stage::Open);

        gw.close();
        assert_eq!(gw.stage(), Stage::Closed);

        gw.open().unwrap();
        assert_eq!(gw.stage(), Stage::Open);
        gw.terminate();
    }

    #[test]
    fn list_ports() {
        let (mut gw, _log) = gateway();
        assert_eq!(gw.list_ports(Direction::In).unwrap().len(), 1);
        assert_eq!(
            gw.list_ports(Direction::Out).unwrap(),
            [Arc::<str>::from("Yarns Out"), "Other Out".into()]
        );
    }

    #[test]
    fn send_before_open() {
        let (mut gw, log) = gateway();
        gw.set_channel(1).unwrap();

        assert!(matches!(
            gw.send_control_change(cc(4, 1)),
            Err(Error::NoOutputPortSelected)
        ));

        gw.select_port(Direction::Out, "Yarns Out");
        assert!(matches!(
            gw.send_control_change(cc(4, 1)),
            Err(Error::NoOutputPortSelected)
        ));

        assert!(log.borrow().sent.is_empty());
    }

    #[test]
    fn send_after_close() {
        let (mut gw, log) = gateway();
        gw.set_channel(1).unwrap();
        gw.select_port(Direction::Out, "Yarns Out");
        gw.open().unwrap();

        assert_eq!(gw.send_control_change(cc(4, 1)).unwrap(), [0xb0, 4, 1]);

        gw.close();
        assert!(matches!(
            gw.send_control_change(cc(4, 1)),
            Err(Error::NoOutputPortSelected)
        ));

        assert_eq!(log.borrow().sent, [vec![0xb0, 4, 1]]);
    }

    #[test]
    fn open_without_output() {
        let (mut gw, log) = gateway();
        gw.select_port(Direction::In, "Yarns In");

        assert!(matches!(gw.open(), Err(Error::NoOutputPortSelected)));
        assert!(log.borrow().events.is_empty());
    }

    #[test]
    fn channel() {
        let (mut gw, _log) = gateway();
        gw.select_port(Direction::Out, "Yarns Out");
        gw.open().unwrap();

        assert!(matches!(
            gw.send_control_change(cc(4, 1)),
            Err(Error::ChannelNotSet)
        ));

        assert!(matches!(gw.set_channel(0), Err(Error::InvalidChannelRange(0))));
        assert!(matches!(
            gw.set_channel(17),
            Err(Error::InvalidChannelRange(17))
        ));
        assert!(gw.channel().is_none());

        gw.set_channel(5).unwrap();
        assert_eq!(gw.send_control_change(cc(40, 32)).unwrap(), [0xb4, 40, 32]);
        gw.set_channel(16).unwrap();
        assert_eq!(gw.send_control_change(cc(1, 0)).unwrap(), [0xbf, 1, 0]);
    }

    #[test]
    fn reopen_order() {
        let (mut gw, log) = gateway();
        gw.select_port(Direction::In, "Yarns In");
        gw.select_port(Direction::Out, "Yarns Out");
        gw.open().unwrap();

        gw.select_port(Direction::Out, "Other Out");
        gw.open().unwrap();

        assert_eq!(
            log.borrow().events,
            [
                "open out Yarns Out",
                "open in Yarns In",
                "close in Yarns In",
                "close out Yarns Out",
                "open out Other Out",
                "open in Yarns In",
            ]
        );

        gw.terminate();
        let log = log.borrow();
        assert_eq!(
            log.events[log.events.len() - 2..],
            ["close in Yarns In", "close out Other Out"]
        );
    }

    #[test]
    fn unknown_port() {
        let (mut gw, _log) = gateway();
        gw.select_port(Direction::Out, "Gone");

        assert!(matches!(
            gw.open(),
            Err(Error::Midi(midi::Error::PortNotFound(name))) if name.as_ref() == "Gone"
        ));
        assert_eq!(gw.stage(), Stage::PortsSelected);
    }

    #[test]
    fn optional_input() {
        let (mut gw, log) = gateway();
        gw.select_port(Direction::In, "Gone");
        gw.select_port(Direction::Out, "Yarns Out");

        gw.open().unwrap();
        assert!(gw.is_open());
        assert_eq!(log.borrow().events, ["open out Yarns Out"]);
        assert!(gw.monitor().is_empty());
    }

    #[test]
    fn monitor() {
        let (mut gw, log) = gateway();
        gw.select_port(Direction::In, "Yarns In");
        gw.select_port(Direction::Out, "Yarns Out");
        gw.open().unwrap();

        {
            let log = log.borrow();
            let tx = log.input_tx.as_ref().unwrap();
            tx.send(vec![0xb4, 40, 32]).unwrap();
            // Note On, skipped
            tx.send(vec![0x90, 60, 100]).unwrap();
            tx.send(vec![0xb0, 2, 52]).unwrap();
        }

        let received = gw.monitor();
        assert_eq!(received.len(), 2);

        let Message::CC(first) = received[0].msg;
        assert_eq!(received[0].chan.number(), 5);
        assert_eq!(first, cc(40, 32));

        assert!(gw.monitor().is_empty());
    }
}
