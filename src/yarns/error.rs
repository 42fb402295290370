use crate::midi;

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("Unknown choice {:?} for {}", .choice, .parameter)]
    UnknownChoice {
        parameter: &'static str,
        choice: String,
    },

    #[error("Unknown parameter {:?}", .0)]
    UnknownParameter(String),

    #[error("Invalid part {} for {}", part_display(.part), .parameter)]
    InvalidPartNumber {
        parameter: &'static str,
        part: Option<u8>,
    },

    #[error("No MIDI output port selected")]
    NoOutputPortSelected,

    #[error("MIDI channel not set")]
    ChannelNotSet,

    #[error("MIDI channel {} out of range (1..=16)", .0)]
    InvalidChannelRange(u8),

    #[error("{}", .0)]
    Midi(#[from] midi::Error),
}

fn part_display(part: &Option<u8>) -> String {
    match part {
        Some(part) => part.to_string(),
        None => "global".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn display() {
        let err = Error::InvalidPartNumber {
            parameter: "voicing",
            part: None,
        };
        assert_eq!(err.to_string(), "Invalid part global for voicing");

        let err = Error::InvalidPartNumber {
            parameter: "tempo",
            part: Some(2),
        };
        assert_eq!(err.to_string(), "Invalid part 2 for tempo");

        let err = Error::UnknownChoice {
            parameter: "voicing",
            choice: "cyclic".into(),
        };
        assert_eq!(err.to_string(), r#"Unknown choice "cyclic" for voicing"#);
    }
}
