use once_cell::sync::Lazy;

use std::sync::Arc;

use crate::{
    midi::{self, Connector, Direction},
    yarns::{self, Gateway},
};

pub static APP_NAME: Lazy<Arc<str>> = Lazy::new(|| "Yarns Controller".into());

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum SettingsError {
    #[error("Missing value for {}", .0)]
    MissingValue(&'static str),

    #[error("Invalid MIDI channel {:?}", .0)]
    InvalidChannel(String),

    #[error("Unknown argument {:?}", .0)]
    UnknownArgument(String),
}

/// Startup settings, overridden from the command line.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Settings {
    pub client_name: Arc<str>,
    pub channel: u8,
    pub port_in: Option<Arc<str>>,
    pub port_out: Option<Arc<str>>,
    /// Initialize the module on first confirmation.
    pub send_defaults: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            client_name: APP_NAME.clone(),
            channel: midi::Channel::MIN,
            port_in: None,
            port_out: None,
            send_defaults: true,
        }
    }
}

impl Settings {
    pub const USAGE: &'static str =
        "[--in <port name>] [--out <port name>] [--channel <1..=16>] [--no-defaults]";

    /// Builds the `Settings` from the arguments, program name excluded.
    pub fn from_args<I>(args: I) -> Result<Self, SettingsError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut settings = Settings::default();

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--in" => {
                    let port_name = args.next().ok_or(SettingsError::MissingValue("--in"))?;
                    settings.port_in = Some(port_name.into());
                }
                "--out" => {
                    let port_name = args.next().ok_or(SettingsError::MissingValue("--out"))?;
                    settings.port_out = Some(port_name.into());
                }
                "--channel" => {
                    let chan = args
                        .next()
                        .ok_or(SettingsError::MissingValue("--channel"))?;
                    settings.channel = chan
                        .parse::<u8>()
                        .ok()
                        .filter(|nb| (midi::Channel::MIN..=midi::Channel::MAX).contains(nb))
                        .ok_or(SettingsError::InvalidChannel(chan))?;
                }
                "--no-defaults" => settings.send_defaults = false,
                _ => return Err(SettingsError::UnknownArgument(arg)),
            }
        }

        Ok(settings)
    }

    /// Selects the channel and ports on `gateway`.
    pub fn apply<C: Connector>(&self, gateway: &mut Gateway<C>) -> Result<(), yarns::Error> {
        gateway.set_channel(self.channel)?;

        if let Some(port_in) = self.port_in.as_ref() {
            gateway.select_port(Direction::In, port_in.clone());
        }
        if let Some(port_out) = self.port_out.as_ref() {
            gateway.select_port(Direction::Out, port_out.clone());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{midi::recorder::Recorder, yarns::Stage};

    fn args(args: &[&str]) -> Vec<String> {
        args.iter().map(|arg| arg.to_string()).collect()
    }

    #[test]
    fn defaults() {
        let settings = Settings::from_args(args(&[])).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.client_name.as_ref(), "Yarns Controller");
        assert_eq!(settings.channel, 1);
        assert!(settings.send_defaults);
    }

    #[test]
    fn flags() {
        let settings = Settings::from_args(args(&[
            "--out",
            "Yarns Out",
            "--channel",
            "5",
            "--in",
            "Yarns In",
            "--no-defaults",
        ]))
        .unwrap();

        assert_eq!(settings.port_out.as_deref(), Some("Yarns Out"));
        assert_eq!(settings.port_in.as_deref(), Some("Yarns In"));
        assert_eq!(settings.channel, 5);
        assert!(!settings.send_defaults);
    }

    #[test]
    fn bad_args() {
        assert_eq!(
            Settings::from_args(args(&["--out"])),
            Err(SettingsError::MissingValue("--out"))
        );
        assert_eq!(
            Settings::from_args(args(&["--channel", "17"])),
            Err(SettingsError::InvalidChannel("17".into()))
        );
        assert_eq!(
            Settings::from_args(args(&["--channel", "one"])),
            Err(SettingsError::InvalidChannel("one".into()))
        );
        assert_eq!(
            Settings::from_args(args(&["-v"])),
            Err(SettingsError::UnknownArgument("-v".into()))
        );
    }

    #[test]
    fn apply() {
        let settings = Settings::from_args(args(&["--out", "Yarns Out", "--channel", "16"])).unwrap();

        let mut gateway = Gateway::new(Recorder::new(&[], &["Yarns Out"]));
        settings.apply(&mut gateway).unwrap();

        assert_eq!(gateway.stage(), Stage::PortsSelected);
        assert_eq!(gateway.channel().unwrap().number(), 16);
        assert!(gateway.selected_port(Direction::In).is_none());
    }
}
