use std::{fmt, str::FromStr};

use crate::{
    midi::CCValue,
    yarns::{
        data::{
            address::{Placement, PART_STRIDE, RESERVED},
            tables, ControllerAddress, Curve, Scope,
        },
        Error,
    },
};

/// Defines the `Parameter`s: name, placement, value curve and default choice.
///
/// Placements are checked at compile time against the part blocks layout.
macro_rules! parameters {
    (
        global {
            $( $g_variant:ident($g_name:literal) @ $g_address:literal => $g_curve:ident, $g_default:literal; )*
        }
        per_part {
            $( $p_variant:ident($p_name:literal) @ $p_offset:literal => $p_curve:ident, $p_default:literal; )*
        }
    ) => {
        #[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
        pub enum Parameter {
            $( $g_variant, )*
            $( $p_variant, )*
        }

        const _: () = {
            $( assert!($g_address > 0 && $g_address < RESERVED, "global address overlaps a part"); )*
            $( assert!($p_offset >= RESERVED && $p_offset < PART_STRIDE, "offset out of part block"); )*
        };

        impl Parameter {
            pub const ALL: &'static [Parameter] = &[
                $( Parameter::$g_variant, )*
                $( Parameter::$p_variant, )*
            ];

            /// Per-part parameters, by offset.
            pub const PER_PART: &'static [Parameter] = &[$( Parameter::$p_variant, )*];

            pub fn name(self) -> &'static str {
                match self {
                    $( Parameter::$g_variant => $g_name, )*
                    $( Parameter::$p_variant => $p_name, )*
                }
            }

            pub fn placement(self) -> Placement {
                match self {
                    $( Parameter::$g_variant => Placement::Global { address: $g_address }, )*
                    $( Parameter::$p_variant => Placement::PerPart { offset: $p_offset }, )*
                }
            }

            /// The label to CC value table.
            ///
            /// Parameters sharing a curve get the very same table.
            pub fn curve(self) -> &'static Curve {
                match self {
                    $( Parameter::$g_variant => &tables::$g_curve, )*
                    $( Parameter::$p_variant => &tables::$p_curve, )*
                }
            }

            pub fn default_choice(self) -> &'static str {
                match self {
                    $( Parameter::$g_variant => $g_default, )*
                    $( Parameter::$p_variant => $p_default, )*
                }
            }
        }
    };
}

parameters! {
    global {
        Layout("layout") @ 1 => LAYOUT, "1M - Monophonic";
        Tempo("tempo") @ 2 => TEMPO, "120";
        Swing("swing") @ 3 => SWING, "0";
    }
    per_part {
        MidiChannel("midiChannel") @ 4 => CHANNEL, "1";
        LowerNote("lowerNote") @ 5 => NOTE, "0 - C_0";
        UpperNote("upperNote") @ 6 => NOTE, "127 - G_10";
        MidiOutMode("midiOutMode") @ 7 => MIDI_OUTPUT, "Off";
        Voicing("voicing") @ 8 => VOICING, "Poly";
        NotePriority("notePriority") @ 9 => NOTE_PRIORITY, "Last";
        Portamento("portamento") @ 10 => SWING, "0";
        Legato("legato") @ 11 => BOOLEAN, "Off";
        PitchBendRange("pitchBendRange") @ 12 => PITCH_BEND, "2";
        VibratoRange("vibratoRange") @ 13 => VIBRATO_RANGE, "1";
        VibratoSpeed("vibratoSpeed") @ 14 => VIBRATO_SPEED, "50";
        Transpose("transpose") @ 15 => TRANSPOSE, "0";
        FineTuning("fineTuning") @ 16 => FINE_TUNING, "0";
        TuningRoot("tuningRoot") @ 17 => TUNING_ROOT, "C";
        TuningSystem("tuningSystem") @ 18 => TUNING_SYSTEM, "Equal temperament";
        TriggerDuration("triggerDuration") @ 19 => TRIGGER_DURATION, "2";
        VelocityScale("velocityScale") @ 20 => BOOLEAN, "Off";
        TriggerShape("triggerShape") @ 21 => TRIGGER_SHAPE, "Square";
        AuxCvOut("auxCVout") @ 22 => AUX_CV, "Vibrato LFO";
        OscillatorShape("oscillatorShape") @ 23 => OSCILLATOR, "Off";
        ArpClockDiv("arpClockDiv") @ 24 => ARP_CLOCK_DIVISION, "/4";
        ArpGateLength("arpGateLength") @ 25 => ARP_GATE_LENGTH, "3";
        ArpRange("arpRange") @ 26 => ARP_RANGE, "0";
        ArpDirection("arpDirection") @ 27 => ARP_DIRECTION, "Up";
        ArpPattern("arpPattern") @ 28 => ARP_PATTERN, "1";
        EuclideanLength("euclideanLength") @ 29 => EUCLIDEAN, "0";
        EuclideanFill("euclideanFill") @ 30 => EUCLIDEAN, "0";
        EuclideanRotate("euclideanRotate") @ 31 => EUCLIDEAN, "0";
    }
}

impl Parameter {
    /// Order in which a part's defaults are sent.
    pub const RESET_ORDER: [Parameter; 28] = [
        Parameter::VibratoRange,
        Parameter::VibratoSpeed,
        Parameter::PitchBendRange,
        Parameter::Transpose,
        Parameter::FineTuning,
        Parameter::TriggerDuration,
        Parameter::ArpRange,
        Parameter::ArpPattern,
        Parameter::ArpGateLength,
        Parameter::EuclideanLength,
        Parameter::EuclideanFill,
        Parameter::EuclideanRotate,
        Parameter::Portamento,
        Parameter::MidiChannel,
        Parameter::LowerNote,
        Parameter::UpperNote,
        Parameter::MidiOutMode,
        Parameter::Voicing,
        Parameter::NotePriority,
        Parameter::Legato,
        Parameter::TuningRoot,
        Parameter::TuningSystem,
        Parameter::VelocityScale,
        Parameter::TriggerShape,
        Parameter::AuxCvOut,
        Parameter::OscillatorShape,
        Parameter::ArpClockDiv,
        Parameter::ArpDirection,
    ];

    pub fn is_global(self) -> bool {
        matches!(self.placement(), Placement::Global { .. })
    }

    /// Returns the CC value for `choice`.
    pub fn value(self, choice: &str) -> Result<CCValue, Error> {
        self.curve()
            .value(choice)
            .ok_or_else(|| Error::UnknownChoice {
                parameter: self.name(),
                choice: choice.into(),
            })
    }

    /// Returns the table's own label for `choice`.
    pub fn find_choice(self, choice: &str) -> Result<&'static str, Error> {
        self.curve()
            .find(choice)
            .ok_or_else(|| Error::UnknownChoice {
                parameter: self.name(),
                choice: choice.into(),
            })
    }

    pub fn choices(self) -> impl Iterator<Item = &'static str> {
        self.curve().labels()
    }

    /// A choice picked uniformly, for the "randomize" action.
    pub fn random_choice(self) -> &'static str {
        self.curve().random()
    }

    pub fn address(self, scope: Scope) -> Result<ControllerAddress, Error> {
        ControllerAddress::resolve(self, scope)
    }

    /// Resolves the address for a raw part number, `0` or `None` meaning global.
    pub fn address_for(self, part: Option<u8>) -> Result<ControllerAddress, Error> {
        ControllerAddress::resolve(self, Scope::from_part(self, part)?)
    }
}

impl FromStr for Parameter {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Parameter::ALL
            .iter()
            .find(|param| param.name() == name)
            .copied()
            .ok_or_else(|| Error::UnknownParameter(name.into()))
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::{tables, Parameter};
    use crate::yarns::Error;

    #[test]
    fn from_name() {
        for &param in Parameter::ALL {
            assert_eq!(param.name().parse::<Parameter>().unwrap(), param);
        }

        assert_eq!("auxCVout".parse::<Parameter>().unwrap(), Parameter::AuxCvOut);
        assert!(matches!(
            "vibrato".parse::<Parameter>(),
            Err(Error::UnknownParameter(name)) if name == "vibrato"
        ));
    }

    #[test]
    fn reset_order_covers_parts() {
        let mut order = Parameter::RESET_ORDER.to_vec();
        order.sort();
        assert_eq!(order, Parameter::PER_PART);
    }

    #[test]
    fn defaults_are_choices() {
        for &param in Parameter::ALL {
            let value = param.value(param.default_choice()).unwrap();
            assert!(value.as_u8() <= 127, "{param}");
        }
    }

    #[test]
    fn unknown_choice() {
        assert!(matches!(
            Parameter::Voicing.value("cyclic"),
            Err(Error::UnknownChoice { parameter: "voicing", ref choice }) if choice == "cyclic"
        ));
    }

    #[test]
    fn shared_curves() {
        use std::ptr;

        assert!(ptr::eq(
            Parameter::Swing.curve(),
            Parameter::Portamento.curve()
        ));
        assert!(ptr::eq(
            Parameter::EuclideanLength.curve(),
            Parameter::EuclideanFill.curve()
        ));
        assert!(ptr::eq(
            Parameter::EuclideanLength.curve(),
            Parameter::EuclideanRotate.curve()
        ));
        assert!(ptr::eq(Parameter::Legato.curve(), &tables::BOOLEAN));
        assert!(ptr::eq(
            Parameter::LowerNote.curve(),
            Parameter::UpperNote.curve()
        ));
        assert_ne!(
            Parameter::LowerNote.default_choice(),
            Parameter::UpperNote.default_choice()
        );
    }

    #[test]
    fn unique_labels() {
        for &param in Parameter::ALL {
            let mut labels: Vec<_> = param.choices().collect();
            let len = labels.len();
            labels.sort_unstable();
            labels.dedup();
            assert_eq!(labels.len(), len, "{param}");
        }
    }

    #[test]
    fn idempotent_lookup() {
        for &param in Parameter::ALL {
            for choice in param.choices() {
                assert_eq!(param.value(choice).unwrap(), param.value(choice).unwrap());
            }
        }
    }

    #[test]
    fn round_trip() {
        for &param in Parameter::ALL {
            let curve = param.curve();
            if !curve.is_injective() {
                continue;
            }

            for choice in param.choices() {
                let value = param.value(choice).unwrap();
                assert_eq!(curve.label(value), Some(choice), "{param}");
            }
        }
    }

    #[test]
    fn only_vibrato_speed_repeats_a_value() {
        let repeating: Vec<_> = Parameter::ALL
            .iter()
            .filter(|param| !param.curve().is_injective())
            .collect();
        assert_eq!(repeating, [&Parameter::VibratoSpeed]);

        let speed = Parameter::VibratoSpeed;
        assert_eq!(speed.value("60").unwrap().as_u8(), 70);
        assert_eq!(speed.value("69").unwrap().as_u8(), 81);
        assert_eq!(speed.value("70").unwrap().as_u8(), 70);
        assert_eq!(speed.value("71").unwrap().as_u8(), 83);
    }

    #[test]
    fn literal_values() {
        let value = |param: Parameter, choice| param.value(choice).unwrap().as_u8();

        assert_eq!(value(Parameter::Tempo, "External MIDI clock"), 0);
        assert_eq!(value(Parameter::Tempo, "120"), 52);
        assert_eq!(value(Parameter::Tempo, "238"), 127);
        assert_eq!(value(Parameter::Swing, "50"), 64);
        assert_eq!(value(Parameter::Portamento, "99"), 127);
        assert_eq!(value(Parameter::MidiChannel, "1"), 1);
        assert_eq!(value(Parameter::MidiChannel, "16"), 113);
        assert_eq!(value(Parameter::UpperNote, "127 - G_10"), 127);
        assert_eq!(value(Parameter::Voicing, "Cyclic"), 32);
        assert_eq!(value(Parameter::Transpose, "-36"), 0);
        assert_eq!(value(Parameter::Transpose, "0"), 64);
        assert_eq!(value(Parameter::FineTuning, "-64"), 0);
        assert_eq!(value(Parameter::TuningSystem, "Custom"), 125);
        assert_eq!(value(Parameter::AuxCvOut, "Aftertouch CC#2"), 26);
        assert_eq!(value(Parameter::EuclideanFill, "32"), 125);
        assert_eq!(value(Parameter::ArpGateLength, "48"), 126);
        assert_eq!(value(Parameter::VibratoSpeed, "/32"), 127);
    }

    #[test]
    fn curve_sizes() {
        let len = |param: Parameter| param.curve().len();

        assert_eq!(len(Parameter::Layout), 10);
        assert_eq!(len(Parameter::Tempo), 101);
        assert_eq!(len(Parameter::Swing), 100);
        assert_eq!(len(Parameter::MidiChannel), 16);
        assert_eq!(len(Parameter::LowerNote), 128);
        assert_eq!(len(Parameter::VibratoSpeed), 110);
        assert_eq!(len(Parameter::TuningSystem), 34);
        assert_eq!(len(Parameter::FineTuning), 128);
        assert_eq!(len(Parameter::EuclideanLength), 33);
    }
}
