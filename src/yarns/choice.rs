use std::fmt;

use crate::yarns::{data::Parameter, Error};

/// What the user asked for a parameter.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ChoiceRequest {
    Literal(String),
    UseDefault,
    UseRandom,
}

impl ChoiceRequest {
    pub const DEFAULT: &'static str = "default";
    pub const RANDOM: &'static str = "random";

    /// Resolves the request to one of `param`'s own labels.
    pub fn resolve(&self, param: Parameter) -> Result<&'static str, Error> {
        match self {
            ChoiceRequest::Literal(choice) => param.find_choice(choice),
            ChoiceRequest::UseDefault => Ok(param.default_choice()),
            ChoiceRequest::UseRandom => Ok(param.random_choice()),
        }
    }
}

/// Parses the user input, the lowercase sentinels designating
/// the default and random requests.
impl From<&str> for ChoiceRequest {
    fn from(choice: &str) -> Self {
        match choice {
            Self::DEFAULT => ChoiceRequest::UseDefault,
            Self::RANDOM => ChoiceRequest::UseRandom,
            other => ChoiceRequest::Literal(other.to_string()),
        }
    }
}

impl fmt::Display for ChoiceRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChoiceRequest::Literal(choice) => f.write_str(choice),
            ChoiceRequest::UseDefault => f.write_str(Self::DEFAULT),
            ChoiceRequest::UseRandom => f.write_str(Self::RANDOM),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ChoiceRequest;
    use crate::yarns::{data::Parameter, Error};

    #[test]
    fn sentinels() {
        assert_eq!(ChoiceRequest::from("default"), ChoiceRequest::UseDefault);
        assert_eq!(ChoiceRequest::from("random"), ChoiceRequest::UseRandom);
        // "Random" is a voicing label, not the sentinel
        assert_eq!(
            ChoiceRequest::from("Random"),
            ChoiceRequest::Literal("Random".into())
        );
    }

    #[test]
    fn resolve() {
        let voicing = Parameter::Voicing;
        assert_eq!(ChoiceRequest::from("Random").resolve(voicing).unwrap(), "Random");
        assert_eq!(ChoiceRequest::UseDefault.resolve(voicing).unwrap(), "Poly");

        let random = ChoiceRequest::UseRandom.resolve(voicing).unwrap();
        assert!(voicing.choices().any(|choice| choice == random));

        assert!(matches!(
            ChoiceRequest::from("poly").resolve(voicing),
            Err(Error::UnknownChoice { .. })
        ));
    }
}
