//! Terminal front end.

pub mod command;
pub use command::{Command, ParseError};

pub mod shell;
pub use shell::{Flow, Shell};
