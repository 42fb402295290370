use std::fmt;

use crate::{
    midi::CCValue,
    yarns::{
        data::{tables, Parameter},
        Error,
    },
};

/// How the module allocates its voices among parts.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum LayoutMode {
    /// 1M
    #[default]
    Monophonic,
    /// 2M
    DualMonophonic,
    /// 4M
    QuadMonophonic,
    /// 2P
    Duophonic,
    /// 4P
    Quadraphonic,
    /// 2>
    DuophonicChain,
    /// 4>
    QuadraphonicChain,
    /// 8>
    OctophonicChain,
    /// 4T
    QuadTrigger,
    /// 3+
    ThreePlusOne,
}

impl LayoutMode {
    pub const ALL: [LayoutMode; 10] = [
        LayoutMode::Monophonic,
        LayoutMode::DualMonophonic,
        LayoutMode::QuadMonophonic,
        LayoutMode::Duophonic,
        LayoutMode::Quadraphonic,
        LayoutMode::DuophonicChain,
        LayoutMode::QuadraphonicChain,
        LayoutMode::OctophonicChain,
        LayoutMode::QuadTrigger,
        LayoutMode::ThreePlusOne,
    ];

    pub fn label(self) -> &'static str {
        use LayoutMode::*;
        match self {
            Monophonic => "1M - Monophonic",
            DualMonophonic => "2M - Dual monophonic",
            QuadMonophonic => "4M - Quad monophonic",
            Duophonic => "2P - Duophonic",
            Quadraphonic => "4P - Quadraphonic",
            DuophonicChain => "2> - Duophonic polychaining",
            QuadraphonicChain => "4> - Quadraphonic polychaining",
            OctophonicChain => "8> - Octophonic polychaining",
            QuadTrigger => "4T - Quad trigger",
            ThreePlusOne => "3+ - Three plus one",
        }
    }

    /// Number of parts which can be edited with this layout.
    ///
    /// Polyphonic layouts gather all their voices in a single part.
    pub fn part_count(self) -> u8 {
        use LayoutMode::*;
        match self {
            Monophonic => 1,
            DualMonophonic => 2,
            QuadMonophonic => 4,
            Duophonic | Quadraphonic => 1,
            DuophonicChain | QuadraphonicChain | OctophonicChain => 1,
            QuadTrigger => 4,
            ThreePlusOne => 2,
        }
    }

    /// The CC value for this layout.
    ///
    /// Variants are declared in the order of the `LAYOUT` table.
    pub fn value(self) -> CCValue {
        tables::LAYOUT.value_at(self as usize)
    }

    pub fn from_label(label: &str) -> Result<Self, Error> {
        Self::ALL
            .iter()
            .find(|layout| layout.label() == label)
            .copied()
            .ok_or_else(|| Error::UnknownChoice {
                parameter: Parameter::Layout.name(),
                choice: label.into(),
            })
    }
}

impl fmt::Display for LayoutMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::LayoutMode;
    use crate::yarns::{data::Parameter, Error};

    #[test]
    fn labels_match_curve() {
        let curve_labels: Vec<_> = Parameter::Layout.choices().collect();
        let labels: Vec<_> = LayoutMode::ALL.iter().map(|layout| layout.label()).collect();
        assert_eq!(labels, curve_labels);

        for layout in LayoutMode::ALL {
            assert_eq!(Parameter::Layout.value(layout.label()).unwrap(), layout.value());
        }

        assert_eq!(
            LayoutMode::default().label(),
            Parameter::Layout.default_choice()
        );
    }

    #[test]
    fn quad_trigger() {
        let layout = LayoutMode::from_label("4T - Quad trigger").unwrap();
        assert_eq!(layout, LayoutMode::QuadTrigger);
        assert_eq!(layout.part_count(), 4);
        assert_eq!(layout.value().as_u8(), 103);
    }

    #[test]
    fn part_counts() {
        for layout in LayoutMode::ALL {
            assert!([1, 2, 4].contains(&layout.part_count()), "{layout}");
        }

        assert_eq!(LayoutMode::ThreePlusOne.part_count(), 2);
        assert_eq!(LayoutMode::OctophonicChain.part_count(), 1);
    }

    #[test]
    fn unknown_layout() {
        assert!(matches!(
            LayoutMode::from_label("4T"),
            Err(Error::UnknownChoice {
                parameter: "layout",
                ..
            })
        ));
    }
}
