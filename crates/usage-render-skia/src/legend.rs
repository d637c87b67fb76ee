// File: crates/usage-render-skia/src/legend.rs
// Summary: Legend entries and their click-to-toggle visibility.

use usage_core::SeriesKind;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Legend {
    hidden: Vec<SeriesKind>,
}

impl Legend {
    pub fn new() -> Self { Self::default() }

    pub fn is_visible(&self, kind: SeriesKind) -> bool {
        !self.hidden.contains(&kind)
    }

    /// Flip visibility; returns the new state.
    pub fn toggle(&mut self, kind: SeriesKind) -> bool {
        if let Some(i) = self.hidden.iter().position(|k| *k == kind) {
            self.hidden.remove(i);
            true
        } else {
            self.hidden.push(kind);
            false
        }
    }

    /// Entries in display order with their current visibility.
    pub fn entries(&self) -> impl Iterator<Item = (SeriesKind, bool)> + '_ {
        SeriesKind::ALL.into_iter().map(move |k| (k, self.is_visible(k)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_round_trip() {
        let mut l = Legend::new();
        assert!(l.is_visible(SeriesKind::GeneralSupply));
        assert!(!l.toggle(SeriesKind::GeneralSupply));
        assert!(!l.is_visible(SeriesKind::GeneralSupply));
        assert!(l.is_visible(SeriesKind::NationalAverage));
        assert!(l.toggle(SeriesKind::GeneralSupply));
        assert_eq!(l, Legend::new());
    }
}
