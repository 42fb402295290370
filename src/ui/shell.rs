use std::io::{self, BufRead, Write};

use crate::{
    midi::{channel_voice::Message, Connector, Direction},
    ui::{Command, ParseError},
    yarns::{
        self, data::ControllerAddress, Applied, Parameter, PartNumber, Scope, Selection, Yarns,
    },
};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Flow {
    Continue,
    Quit,
}

/// A line oriented front end to a `Yarns` session.
pub struct Shell<C: Connector> {
    yarns: Yarns<C>,
    send_defaults: bool,
}

impl<C: Connector> Shell<C> {
    pub fn new(yarns: Yarns<C>, send_defaults: bool) -> Self {
        Shell {
            yarns,
            send_defaults,
        }
    }

    pub fn yarns(&self) -> &Yarns<C> {
        &self.yarns
    }

    /// Reads commands from `input` until "quit" or end of input.
    pub fn run(mut self, mut input: impl BufRead, mut out: impl Write) -> io::Result<()> {
        let mut line = String::new();
        loop {
            write!(out, "> ")?;
            out.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                break;
            }

            if self.handle(&line, &mut out)? == Flow::Quit {
                break;
            }
        }

        self.yarns.terminate();

        Ok(())
    }

    /// Executes the command in `line`, reporting errors on `out`.
    pub fn handle(&mut self, line: &str, out: &mut impl Write) -> io::Result<Flow> {
        let cmd = match Command::parse(line) {
            Ok(Some(cmd)) => cmd,
            Ok(None) => return Ok(Flow::Continue),
            Err(err) => {
                self.handle_error(&err, out)?;
                return Ok(Flow::Continue);
            }
        };

        if cmd == Command::Quit {
            return Ok(Flow::Quit);
        }

        if let Err(err) = self.execute(cmd, out)? {
            self.handle_error(&err, out)?;
        }

        Ok(Flow::Continue)
    }

    fn handle_error(&self, err: &dyn std::error::Error, out: &mut impl Write) -> io::Result<()> {
        log::error!("{err}");
        writeln!(out, "Error: {err}")
    }

    fn execute(
        &mut self,
        cmd: Command,
        out: &mut impl Write,
    ) -> io::Result<Result<(), ParseError>> {
        use Command::*;

        let res = match cmd {
            Help => writeln!(out, "{}", Command::HELP).map(Ok)?,
            Status => self.status(out).map(Ok)?,
            Ports => self.ports(out)?,
            Select(direction, port_name) => {
                self.yarns.gateway_mut().select_port(direction, port_name);
                if self.yarns.gateway().is_open() {
                    writeln!(out, "confirm to use the new port")?;
                }
                Ok(())
            }
            ClearInput => {
                self.yarns.gateway_mut().deselect_input();
                if self.yarns.gateway().is_open() {
                    writeln!(out, "confirm to release the input port")?;
                }
                Ok(())
            }
            Channel(nb) => self
                .yarns
                .gateway_mut()
                .set_channel(nb)
                .map_err(ParseError::from),
            Confirm => match self.yarns.confirm(self.send_defaults) {
                Ok(applied) => {
                    writeln!(out, "MIDI ports open")?;
                    self.report_all(&applied, out)?;
                    Ok(())
                }
                Err(err) => Err(err.into()),
            },
            Choices(param) => {
                let default = param.default_choice();
                let choices: Vec<String> = param
                    .choices()
                    .map(|choice| {
                        if choice == default {
                            format!("[{choice}]")
                        } else {
                            choice.to_string()
                        }
                    })
                    .collect();
                writeln!(out, "{param}: {}", choices.join(", "))?;
                Ok(())
            }
            Set {
                name,
                part,
                request,
            } => {
                let res = if name == Parameter::Layout.name() {
                    self.yarns.change_layout(&request)
                } else {
                    self.yarns
                        .on_parameter_chosen(&name, part, &request)
                        .map(|applied| vec![applied])
                };
                self.report_result(res, out)?
            }
            Layout(request) => {
                let res = self.yarns.change_layout(&request);
                self.report_result(res, out)?
            }
            Randomize { part, names } => {
                let res = self.randomize(part, &names);
                self.report_result(res, out)?
            }
            Reset(part) => {
                let res = self
                    .yarns
                    .send_defaults(part.map_or(Scope::Global, Scope::Part));
                self.report_result(res, out)?
            }
            Monitor => self.monitor(out).map(Ok)?,
            Quit => Ok(()),
        };

        Ok(res)
    }

    fn randomize(
        &mut self,
        part: PartNumber,
        names: &[String],
    ) -> Result<Vec<Applied>, yarns::Error> {
        let selection = names
            .iter()
            .map(|name| name.parse::<Parameter>())
            .collect::<Result<Selection, _>>()?;

        self.yarns.randomize(part, &selection)
    }

    fn status(&self, out: &mut impl Write) -> io::Result<()> {
        let gateway = self.yarns.gateway();

        let port = |direction| {
            gateway
                .selected_port(direction)
                .map_or_else(|| "none".to_string(), ToString::to_string)
        };
        writeln!(out, "stage: {:?}", gateway.stage())?;
        writeln!(out, "{}: {}", Direction::In, port(Direction::In))?;
        writeln!(out, "{}: {}", Direction::Out, port(Direction::Out))?;
        match gateway.channel() {
            Some(chan) => writeln!(out, "channel: {chan}")?,
            None => writeln!(out, "channel: not set")?,
        }

        match self.yarns.layout() {
            Some(layout) => writeln!(out, "layout: {layout} ({} part(s))", layout.part_count()),
            None => writeln!(out, "layout: not sent"),
        }
    }

    fn ports(&mut self, out: &mut impl Write) -> io::Result<Result<(), ParseError>> {
        for direction in [Direction::In, Direction::Out] {
            let ports = match self.yarns.gateway_mut().list_ports(direction) {
                Ok(ports) => ports,
                Err(err) => return Ok(Err(err.into())),
            };

            let selected = self.yarns.gateway().selected_port(direction).cloned();
            writeln!(out, "{direction}s:")?;
            for port in ports {
                let mark = if Some(&port) == selected.as_ref() { '*' } else { ' ' };
                writeln!(out, " {mark} {port}")?;
            }
        }

        Ok(Ok(()))
    }

    fn monitor(&mut self, out: &mut impl Write) -> io::Result<()> {
        for cv in self.yarns.gateway_mut().monitor() {
            let Message::CC(cc) = cv.msg;
            match ControllerAddress::lookup(cc.nb) {
                Some(addr) => {
                    let label = addr.parameter.curve().label(cc.value).unwrap_or("?");
                    writeln!(
                        out,
                        "ch {} {} ({}) = {label}",
                        cv.chan, addr.parameter, addr.scope,
                    )?;
                }
                None => writeln!(out, "ch {} CC {} = {}", cv.chan, cc.nb, cc.value)?,
            }
        }

        Ok(())
    }

    fn report_result(
        &self,
        res: Result<Vec<Applied>, yarns::Error>,
        out: &mut impl Write,
    ) -> io::Result<Result<(), ParseError>> {
        match res {
            Ok(applied) => {
                self.report_all(&applied, out)?;
                Ok(Ok(()))
            }
            Err(err) => Ok(Err(err.into())),
        }
    }

    fn report_all(&self, applied: &[Applied], out: &mut impl Write) -> io::Result<()> {
        match applied {
            [] => (),
            [single] => report(single, out)?,
            [first, ..] => {
                report(first, out)?;
                writeln!(out, "... {} more", applied.len() - 1)?;
            }
        }

        if applied.first().map(|applied| applied.parameter) == Some(Parameter::Layout) {
            writeln!(out, "{} part(s) active", self.yarns.part_count())?;
        }

        Ok(())
    }
}

fn report(applied: &Applied, out: &mut impl Write) -> io::Result<()> {
    writeln!(
        out,
        "{} ({}) = {} {:02x?}",
        applied.parameter, applied.scope, applied.choice, applied.msg,
    )
}
