//! In-memory `Connector` used by tests in place of the OS MIDI ports.

use std::{cell::RefCell, rc::Rc, sync::Arc};

use crate::midi::{self, Connector, Direction, OutputConnection};

#[derive(Debug, Default)]
pub struct Log {
    pub sent: Vec<Vec<u8>>,
    /// Sending fails once `sent` holds this many messages.
    pub send_limit: Option<usize>,
    pub events: Vec<String>,
    pub input_tx: Option<flume::Sender<Vec<u8>>>,
}

pub struct Recorder {
    ins: Vec<Arc<str>>,
    outs: Vec<Arc<str>>,
    pub log: Rc<RefCell<Log>>,
}

impl Recorder {
    pub fn new(ins: &[&str], outs: &[&str]) -> Self {
        Recorder {
            ins: ins.iter().map(|&name| name.into()).collect(),
            outs: outs.iter().map(|&name| name.into()).collect(),
            log: Default::default(),
        }
    }

    pub fn log(&self) -> Rc<RefCell<Log>> {
        self.log.clone()
    }
}

pub struct RecorderOut {
    port_name: Arc<str>,
    log: Rc<RefCell<Log>>,
}

impl OutputConnection for RecorderOut {
    fn send(&mut self, msg: &[u8]) -> Result<(), midi::Error> {
        let mut log = self.log.borrow_mut();
        if log.send_limit.map_or(false, |limit| log.sent.len() >= limit) {
            return Err(midir::SendError::Other("output unavailable").into());
        }

        log.sent.push(msg.to_vec());

        Ok(())
    }

    fn close(self) {
        let mut log = self.log.borrow_mut();
        log.events.push(format!("close out {}", self.port_name));
    }
}

pub struct RecorderIn {
    port_name: Arc<str>,
    log: Rc<RefCell<Log>>,
}

impl Drop for RecorderIn {
    fn drop(&mut self) {
        let mut log = self.log.borrow_mut();
        log.events.push(format!("close in {}", self.port_name));
        log.input_tx = None;
    }
}

impl Connector for Recorder {
    type In = RecorderIn;
    type Out = RecorderOut;

    fn list(&mut self, direction: Direction) -> Result<Vec<Arc<str>>, midi::Error> {
        Ok(match direction {
            Direction::In => self.ins.clone(),
            Direction::Out => self.outs.clone(),
        })
    }

    fn connect_in(
        &mut self,
        port_name: Arc<str>,
        tx: flume::Sender<Vec<u8>>,
    ) -> Result<Self::In, midi::Error> {
        if !self.ins.contains(&port_name) {
            return Err(midi::Error::PortNotFound(port_name));
        }

        let mut log = self.log.borrow_mut();
        log.events.push(format!("open in {port_name}"));
        log.input_tx = Some(tx);

        Ok(RecorderIn {
            port_name,
            log: self.log.clone(),
        })
    }

    fn connect_out(&mut self, port_name: Arc<str>) -> Result<Self::Out, midi::Error> {
        if !self.outs.contains(&port_name) {
            return Err(midi::Error::PortNotFound(port_name));
        }

        self.log
            .borrow_mut()
            .events
            .push(format!("open out {port_name}"));

        Ok(RecorderOut {
            port_name,
            log: self.log.clone(),
        })
    }

    fn disconnected(&mut self, _direction: Direction) {}
}
