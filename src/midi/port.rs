use std::{collections::BTreeMap, fmt, sync::Arc};

use super::Error;

pub type PortsIn = DirectionalPorts<midir::MidiInput>;
pub type PortsOut = DirectionalPorts<midir::MidiOutput>;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Direction {
    In,
    Out,
}

impl Direction {
    pub fn as_str(&self) -> &str {
        match self {
            Direction::In => "In Port",
            Direction::Out => "Out Port",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A `midir` client for one `Direction`.
pub trait MidiClient: midir::MidiIO + Sized {
    const DIRECTION: Direction;

    fn new_client(client_name: &str) -> Result<Self, midir::InitError>;
}

impl MidiClient for midir::MidiInput {
    const DIRECTION: Direction = Direction::In;

    fn new_client(client_name: &str) -> Result<Self, midir::InitError> {
        midir::MidiInput::new(client_name)
    }
}

impl MidiClient for midir::MidiOutput {
    const DIRECTION: Direction = Direction::Out;

    fn new_client(client_name: &str) -> Result<Self, midir::InitError> {
        midir::MidiOutput::new(client_name)
    }
}

/// The ports available for one `Direction`, by name.
pub struct DirectionalPorts<IO: MidiClient> {
    ports: BTreeMap<Arc<str>, IO::Port>,
    connected: Option<Arc<str>>,
    client_name: Arc<str>,
}

impl<IO: MidiClient> DirectionalPorts<IO> {
    pub fn new(client_name: Arc<str>) -> Self {
        DirectionalPorts {
            ports: BTreeMap::new(),
            connected: None,
            client_name,
        }
    }

    pub fn list(&self) -> impl Iterator<Item = Arc<str>> + '_ {
        self.ports.keys().cloned()
    }

    pub fn connected(&self) -> Option<&Arc<str>> {
        self.connected.as_ref()
    }

    /// Queries the subsystem for the current ports.
    pub fn refresh(&mut self) -> Result<(), Error> {
        let client = IO::new_client(&format!("{} {} scan", self.client_name, IO::DIRECTION))?;

        self.ports.clear();
        for port in client.ports() {
            let name = client.port_name(&port)?;
            // Our own ports, if any.
            if name.starts_with(self.client_name.as_ref()) {
                continue;
            }

            self.ports.insert(name.into(), port);
        }

        if let Some(connected) = self.connected.as_ref() {
            if !self.ports.contains_key(connected) {
                log::warn!("Connected {} {connected} no longer listed", IO::DIRECTION);
            }
        }

        Ok(())
    }

    pub fn disconnect(&mut self) {
        if let Some(port_name) = self.connected.take() {
            log::debug!("Disconnected {} {port_name}", IO::DIRECTION);
        }
    }

    /// A new client along with the port to connect it to.
    fn prepare(&mut self, port_name: &Arc<str>) -> Result<(IO, IO::Port), Error> {
        self.connected = None;

        let port = self
            .ports
            .get(port_name)
            .cloned()
            .ok_or_else(|| Error::PortNotFound(port_name.clone()))?;

        Ok((IO::new_client(&self.client_name)?, port))
    }

    fn connected_to(&mut self, port_name: Arc<str>) {
        log::debug!("Connected {} {port_name}", IO::DIRECTION);
        self.connected = Some(port_name);
    }
}

impl PortsIn {
    pub fn connect<D, C>(
        &mut self,
        port_name: Arc<str>,
        data: D,
        callback: C,
    ) -> Result<midir::MidiInputConnection<D>, Error>
    where
        D: Send,
        C: FnMut(u64, &[u8], &mut D) + Send + 'static,
    {
        let (client, port) = self.prepare(&port_name)?;
        let midi_conn = client
            .connect(&port, &port_name, callback, data)
            .map_err(|_| Error::PortConnection(port_name.clone()))?;

        self.connected_to(port_name);

        Ok(midi_conn)
    }
}

impl PortsOut {
    pub fn connect(&mut self, port_name: Arc<str>) -> Result<midir::MidiOutputConnection, Error> {
        let (client, port) = self.prepare(&port_name)?;
        let midi_conn = client
            .connect(&port, &port_name)
            .map_err(|_| Error::PortConnection(port_name.clone()))?;

        self.connected_to(port_name);

        Ok(midi_conn)
    }
}
