use std::{env, io, process};

use yarns_controller::{
    midi,
    ui::Shell,
    yarns::{Gateway, Yarns},
    Settings,
};

pub fn main() -> io::Result<()> {
    env_logger::Builder::new()
        .filter_module("yarns_controller", log::LevelFilter::Debug)
        .parse_default_env()
        .init();

    let settings = match Settings::from_args(env::args().skip(1)) {
        Ok(settings) => settings,
        Err(err) => {
            eprintln!("{err}\nUsage: yarns-controller {}", Settings::USAGE);
            process::exit(2);
        }
    };

    let mut gateway = Gateway::new(midi::Midir::new(settings.client_name.clone()));
    if let Err(err) = settings.apply(&mut gateway) {
        log::error!("{err}");
    }

    println!("{}: type \"help\" for the commands", settings.client_name);

    Shell::new(Yarns::new(gateway), settings.send_defaults).run(io::stdin().lock(), io::stdout())
}
