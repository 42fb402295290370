//! Static description of the module's parameters.
//!
//! This is a pure lookup layer: nothing here touches MIDI ports.

mod address;
pub use address::{ControllerAddress, PartNumber, Placement, Scope, PART_STRIDE};

mod curve;
pub use curve::Curve;

mod layout;
pub use layout::LayoutMode;

mod parameter;
pub use parameter::Parameter;

pub mod tables;

use crate::{midi::CCValue, yarns::Error};

/// Returns the CC value for `choice` of the parameter named `name`.
pub fn resolve_value(name: &str, choice: &str) -> Result<CCValue, Error> {
    name.parse::<Parameter>()?.value(choice)
}

/// Returns the controller address of the parameter named `name` for `part`.
///
/// `None` or `Some(0)` designates a global parameter.
pub fn resolve_address(name: &str, part: Option<u8>) -> Result<ControllerAddress, Error> {
    name.parse::<Parameter>()?.address_for(part)
}

pub fn default_choice(name: &str) -> Result<&'static str, Error> {
    Ok(name.parse::<Parameter>()?.default_choice())
}

pub fn random_choice(name: &str) -> Result<&'static str, Error> {
    Ok(name.parse::<Parameter>()?.random_choice())
}

/// Choice labels for the parameter named `name`, in display order.
pub fn available_choices(name: &str) -> Result<Vec<&'static str>, Error> {
    Ok(name.parse::<Parameter>()?.choices().collect())
}

/// Number of part pages to display for the layout labelled `label`.
pub fn current_layout_part_count(label: &str) -> Result<u8, Error> {
    Ok(LayoutMode::from_label(label)?.part_count())
}
