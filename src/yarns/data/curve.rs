use rand::seq::SliceRandom;

use crate::midi::CCValue;

/// An ordered mapping from human readable labels to CC values.
///
/// Values are explicit lookups, not formulas: most curves follow the
/// module's internal quantization which is not linear.
#[derive(Debug)]
pub struct Curve {
    entries: &'static [(&'static str, u8)],
}

impl Curve {
    /// Builds a `Curve`.
    ///
    /// Out of range values are rejected at compile time for `static` curves.
    pub const fn new(entries: &'static [(&'static str, u8)]) -> Self {
        assert!(!entries.is_empty(), "empty curve");

        let mut idx = 0;
        while idx < entries.len() {
            assert!(entries[idx].1 <= CCValue::MAX.as_u8(), "CC value out of range");
            idx += 1;
        }

        Curve { entries }
    }

    /// Labels in display order.
    pub fn labels(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(label, _)| *label)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the static label equal to `label`, if any.
    pub fn find(&self, label: &str) -> Option<&'static str> {
        self.labels().find(|candidate| *candidate == label)
    }

    pub fn value(&self, label: &str) -> Option<CCValue> {
        self.entries
            .iter()
            .find(|(candidate, _)| *candidate == label)
            .map(|(_, value)| CCValue::new_unchecked(*value))
    }

    /// The CC value of the entry at `idx`, in display order.
    ///
    /// Panics if `idx` is out of range.
    pub fn value_at(&self, idx: usize) -> CCValue {
        CCValue::new_unchecked(self.entries[idx].1)
    }

    /// Returns the first label mapped to `value`, if any.
    pub fn label(&self, value: CCValue) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(_, candidate)| *candidate == value.as_u8())
            .map(|(label, _)| *label)
    }

    /// Whether each value is owned by a single label.
    pub fn is_injective(&self) -> bool {
        self.entries.iter().enumerate().all(|(idx, (_, value))| {
            self.entries[idx + 1..]
                .iter()
                .all(|(_, other)| other != value)
        })
    }

    /// Picks a label uniformly.
    pub fn random(&self) -> &'static str {
        self.entries
            .choose(&mut rand::thread_rng())
            .map_or(self.entries[0].0, |(label, _)| *label)
    }
}

#[cfg(test)]
mod tests {
    use super::Curve;
    use crate::midi::CCValue;

    static SAMPLE: Curve = Curve::new(&[("Off", 0), ("Half", 64), ("On", 127)]);

    #[test]
    fn lookup() {
        assert_eq!(SAMPLE.value("Half"), Some(CCValue::try_from(64).unwrap()));
        assert_eq!(SAMPLE.value("half"), None);
        assert_eq!(SAMPLE.find("On"), Some("On"));
        assert_eq!(SAMPLE.value_at(1), CCValue::try_from(64).unwrap());

        assert_eq!(SAMPLE.label(CCValue::MAX), Some("On"));
        assert_eq!(SAMPLE.label(CCValue::try_from(1).unwrap()), None);

        assert_eq!(SAMPLE.labels().collect::<Vec<_>>(), ["Off", "Half", "On"]);
    }

    #[test]
    fn injective() {
        static REPEATED: Curve = Curve::new(&[("a", 1), ("b", 2), ("c", 1)]);

        assert!(SAMPLE.is_injective());
        assert!(!REPEATED.is_injective());
        // First owner wins on reverse lookup.
        assert_eq!(REPEATED.label(CCValue::try_from(1).unwrap()), Some("a"));
    }

    #[test]
    fn random() {
        for _ in 0..32 {
            let label = SAMPLE.random();
            assert!(SAMPLE.value(label).is_some());
        }
    }
}
