//! Control of a Mutable Instruments Yarns through MIDI Control Changes.

pub mod choice;
pub use choice::ChoiceRequest;

pub mod data;
pub use data::{LayoutMode, Parameter, PartNumber, Scope};

mod error;
pub use error::Error;

pub mod gateway;
pub use gateway::{Gateway, Stage};

use std::collections::BTreeSet;

use crate::midi::{Connector, CC};

/// Parameters picked for the randomize action.
pub type Selection = BTreeSet<Parameter>;

/// A choice which was transmitted to the module.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Applied {
    pub parameter: Parameter,
    pub scope: Scope,
    pub choice: &'static str,
    pub cc: CC,
    pub msg: [u8; 3],
}

/// An editing session: the MIDI gateway plus the layout last sent.
pub struct Yarns<C: Connector> {
    gateway: Gateway<C>,
    layout: Option<LayoutMode>,
    /// Parts `1..=initialized` received their complete defaults.
    initialized: u8,
}

impl<C: Connector> Yarns<C> {
    pub fn new(gateway: Gateway<C>) -> Self {
        Yarns {
            gateway,
            layout: None,
            initialized: 0,
        }
    }

    pub fn gateway(&self) -> &Gateway<C> {
        &self.gateway
    }

    pub fn gateway_mut(&mut self) -> &mut Gateway<C> {
        &mut self.gateway
    }

    pub fn layout(&self) -> Option<LayoutMode> {
        self.layout
    }

    /// Number of parts which can be edited, `0` until a layout is sent.
    pub fn part_count(&self) -> u8 {
        self.layout.map_or(0, LayoutMode::part_count)
    }

    pub fn active_parts(&self) -> impl Iterator<Item = PartNumber> {
        PartNumber::ALL
            .into_iter()
            .take(self.part_count() as usize)
    }

    /// Locks the port and channel selection.
    ///
    /// Ports are closed then re-opened. On first confirmation, the module
    /// is initialized with the defaults if `send_defaults` is set.
    pub fn confirm(&mut self, send_defaults: bool) -> Result<Vec<Applied>, Error> {
        if !self.gateway.has_output_port() {
            return Err(Error::NoOutputPortSelected);
        }

        self.gateway.close();
        self.gateway.open()?;

        if send_defaults && self.layout.is_none() {
            return self.send_defaults(Scope::Global);
        }

        Ok(Vec::new())
    }

    /// Handles a choice from the user, sending exactly one Control Change.
    ///
    /// `part` is `None` or `Some(0)` for global parameters. Parts activated
    /// by a layout chosen this way get their defaults on next `change_layout`.
    pub fn on_parameter_chosen(
        &mut self,
        name: &str,
        part: Option<u8>,
        request: &ChoiceRequest,
    ) -> Result<Applied, Error> {
        let param = name.parse::<Parameter>()?;
        let scope = Scope::from_part(param, part)?;

        self.apply(param, scope, request)
    }

    pub fn apply(
        &mut self,
        param: Parameter,
        scope: Scope,
        request: &ChoiceRequest,
    ) -> Result<Applied, Error> {
        let addr = param.address(scope)?;
        let choice = request.resolve(param)?;
        let (value, layout) = match param {
            Parameter::Layout => {
                let layout = LayoutMode::from_label(choice)?;
                (layout.value(), Some(layout))
            }
            _ => (param.value(choice)?, None),
        };
        let cc = CC::new(addr.nb, value);

        let msg = self.gateway.send_control_change(cc)?;
        log::debug!("{param} ({scope}) set to {choice}");

        if layout.is_some() {
            self.layout = layout;
        }

        Ok(Applied {
            parameter: param,
            scope,
            choice,
            cc,
            msg,
        })
    }

    /// Sends the layout then the defaults for the active parts which
    /// never received them.
    ///
    /// Parts which are no longer active keep their settings on the module.
    pub fn change_layout(&mut self, request: &ChoiceRequest) -> Result<Vec<Applied>, Error> {
        let prev_count = self.part_count();

        let mut applied = vec![self.apply(Parameter::Layout, Scope::Global, request)?];

        let count = self.part_count();
        if count != prev_count {
            log::info!("Layout {count} part(s)");
        }

        for part in PartNumber::ALL
            .into_iter()
            .take(count as usize)
            .skip(self.initialized as usize)
        {
            applied.extend(self.send_defaults(part.into())?);
            self.initialized = part.as_u8();
        }

        Ok(applied)
    }

    /// Sends the defaults for `scope`.
    ///
    /// The global defaults include the layout and the part defaults it implies.
    pub fn send_defaults(&mut self, scope: Scope) -> Result<Vec<Applied>, Error> {
        log::debug!("Sending {scope} defaults");

        match scope {
            Scope::Global => {
                let mut applied = self.change_layout(&ChoiceRequest::UseDefault)?;
                for param in [Parameter::Tempo, Parameter::Swing] {
                    applied.push(self.apply(param, scope, &ChoiceRequest::UseDefault)?);
                }

                Ok(applied)
            }
            Scope::Part(_) => Parameter::RESET_ORDER
                .iter()
                .map(|&param| self.apply(param, scope, &ChoiceRequest::UseDefault))
                .collect(),
        }
    }

    /// Picks a random choice for each parameter in `selection`.
    pub fn randomize(
        &mut self,
        part: PartNumber,
        selection: &Selection,
    ) -> Result<Vec<Applied>, Error> {
        selection
            .iter()
            .map(|&param| self.apply(param, part.into(), &ChoiceRequest::UseRandom))
            .collect()
    }

    pub fn terminate(self) {
        self.gateway.terminate();
    }
}
