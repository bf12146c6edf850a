//! # Cross-Section Layout
//!
//! Left-to-right arrangement of deck elements and the normalizer that
//! separates vehicles from pedestrians and cyclists with a crash barrier.
//!
//! After normalization no `Carriageway` sits next to a `Footpath` or a
//! `Cycle Track` without a `Crash Barrier` between them. Normalizing an
//! already normalized layout changes nothing.
//!
//! ## Example
//!
//! ```rust
//! use bridge_core::cross_section::CrossSectionLayout;
//!
//! let layout = CrossSectionLayout::from_labels(["Railing", "Footpath", "Carriageway", "Railing"]).unwrap();
//! let normalized = layout.normalized();
//! assert_eq!(
//!     normalized.labels(),
//!     vec!["Railing", "Footpath", "Crash Barrier", "Carriageway", "Railing"]
//! );
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::clauses::{ClauseId, ClauseResult};
use crate::errors::CalcResult;
use crate::selectors::labelled;

/// One element of the deck cross-section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SectionElement {
    #[serde(rename = "Railing")]
    Railing,
    #[serde(rename = "Footpath")]
    Footpath,
    #[serde(rename = "Carriageway")]
    Carriageway,
    #[serde(rename = "Cycle Track")]
    CycleTrack,
    #[serde(rename = "Crash Barrier")]
    CrashBarrier,
    #[serde(rename = "Median")]
    Median,
    #[serde(rename = "Safety Kerb")]
    SafetyKerb,
}

labelled!(SectionElement, "cross_section", [
    Railing => "Railing",
    Footpath => "Footpath",
    Carriageway => "Carriageway",
    CycleTrack => "Cycle Track",
    CrashBarrier => "Crash Barrier",
    Median => "Median",
    SafetyKerb => "Safety Kerb",
]);

impl SectionElement {
    /// Footpaths and cycle tracks
    pub fn is_unprotected_user(&self) -> bool {
        matches!(self, SectionElement::Footpath | SectionElement::CycleTrack)
    }
}

/// True when `a` and `b` are a carriageway and a footpath or cycle track,
/// in either order.
pub fn needs_barrier(a: SectionElement, b: SectionElement) -> bool {
    (a == SectionElement::Carriageway && b.is_unprotected_user())
        || (b == SectionElement::Carriageway && a.is_unprotected_user())
}

/// Ordered deck elements, left to right
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CrossSectionLayout {
    elements: Vec<SectionElement>,
}

impl CrossSectionLayout {
    pub fn new(elements: Vec<SectionElement>) -> Self {
        Self { elements }
    }

    /// Parse a layout from element labels; an unknown label is an input error.
    pub fn from_labels<I, S>(labels: I) -> CalcResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let elements = labels
            .into_iter()
            .map(|l| l.as_ref().parse::<SectionElement>())
            .collect::<CalcResult<Vec<_>>>()?;
        Ok(Self { elements })
    }

    pub fn elements(&self) -> &[SectionElement] {
        &self.elements
    }

    pub fn labels(&self) -> Vec<&'static str> {
        self.elements.iter().map(|e| e.label()).collect()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn contains(&self, element: SectionElement) -> bool {
        self.elements.contains(&element)
    }

    pub fn barrier_count(&self) -> usize {
        self.elements
            .iter()
            .filter(|e| **e == SectionElement::CrashBarrier)
            .count()
    }

    /// True when no carriageway is left next to a footpath or cycle track
    pub fn is_normalized(&self) -> bool {
        self.elements.windows(2).all(|w| !needs_barrier(w[0], w[1]))
    }

    /// Return a normalized copy; `self` is left as it was.
    pub fn normalized(&self) -> CrossSectionLayout {
        let mut copy = self.clone();
        copy.normalize_in_place();
        copy
    }

    /// Insert crash barriers in place and return how many were inserted.
    ///
    /// Single left-to-right scan: when the pair at the cursor needs a
    /// barrier, one is inserted after the first element and the cursor moves
    /// past it onto the original second element. Pairs that already contain
    /// a crash barrier never match, so a second pass inserts nothing.
    pub fn normalize_in_place(&mut self) -> usize {
        let mut inserted = 0;
        let mut i = 0;
        while i + 1 < self.elements.len() {
            let (a, b) = (self.elements[i], self.elements[i + 1]);
            if needs_barrier(a, b) {
                debug!(position = i + 1, left = %a, right = %b, "inserting crash barrier");
                self.elements.insert(i + 1, SectionElement::CrashBarrier);
                inserted += 1;
                i += 2;
            } else {
                i += 1;
            }
        }
        inserted
    }

    /// Clause 105.2.1 verdict for a layout after normalization.
    ///
    /// Not applicable when no footpath or cycle track sits on the deck.
    pub fn protection_to_user(&self, inserted: usize) -> ClauseResult {
        let clause = ClauseId::ProtectionToUser;
        if !self.elements.iter().any(|e| e.is_unprotected_user()) {
            return ClauseResult::not_applicable(clause, "No footpath or cycle track in the cross-section.");
        }
        if !self.is_normalized() {
            return ClauseResult::rejected(clause, "Carriageway adjoins a footpath or cycle track without a crash barrier.");
        }
        ClauseResult::accepted(
            clause,
            format!(
                "Footpaths and cycle tracks separated from the carriageway by crash barriers ({} inserted).",
                inserted
            ),
        )
    }
}

impl From<Vec<SectionElement>> for CrossSectionLayout {
    fn from(elements: Vec<SectionElement>) -> Self {
        Self::new(elements)
    }
}

impl std::fmt::Display for CrossSectionLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.labels().join(" | "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use SectionElement::*;

    fn layout(labels: &[&str]) -> CrossSectionLayout {
        CrossSectionLayout::from_labels(labels).unwrap()
    }

    #[test]
    fn test_footpath_and_cycle_track_separated() {
        let l = layout(&["Railing", "Footpath", "Carriageway", "Cycle Track", "Railing"]);
        let n = l.normalized();
        assert_eq!(
            n.labels(),
            vec!["Railing", "Footpath", "Crash Barrier", "Carriageway", "Crash Barrier", "Cycle Track", "Railing"]
        );
        // original untouched
        assert_eq!(l.len(), 5);
    }

    #[test]
    fn test_in_place_counts_insertions() {
        let mut l = layout(&["Railing", "Footpath", "Carriageway", "Footpath", "Railing"]);
        assert_eq!(l.normalize_in_place(), 2);
        assert_eq!(l.barrier_count(), 2);
        assert_eq!(l.normalize_in_place(), 0);
    }

    #[test]
    fn test_no_insertion_needed() {
        let mut l = layout(&["Railing", "Carriageway", "Median", "Carriageway", "Railing"]);
        assert_eq!(l.normalize_in_place(), 0);
        assert!(l.is_normalized());

        let mut empty = CrossSectionLayout::default();
        assert_eq!(empty.normalize_in_place(), 0);
        let mut single = CrossSectionLayout::new(vec![Carriageway]);
        assert_eq!(single.normalize_in_place(), 0);
    }

    #[test]
    fn test_protection_to_user() {
        use crate::clauses::ClauseStatus;

        let bare = layout(&["Railing", "Carriageway", "Railing"]);
        assert_eq!(bare.protection_to_user(0).status, ClauseStatus::NotApplicable);

        let mut mixed = layout(&["Footpath", "Carriageway"]);
        assert_eq!(mixed.protection_to_user(0).status, ClauseStatus::NonCompliant);
        let n = mixed.normalize_in_place();
        let r = mixed.protection_to_user(n);
        assert!(r.is_compliant);
        assert!(r.remark.contains("1 inserted"));
    }

    #[test]
    fn test_unknown_label_rejected() {
        assert!(CrossSectionLayout::from_labels(["Railing", "Tramway"]).is_err());
    }

    #[test]
    fn test_needs_barrier_pairs() {
        assert!(needs_barrier(Carriageway, Footpath));
        assert!(needs_barrier(CycleTrack, Carriageway));
        assert!(!needs_barrier(Footpath, CycleTrack));
        assert!(!needs_barrier(Carriageway, Carriageway));
        assert!(!needs_barrier(Carriageway, CrashBarrier));
    }

    /// Every sequence up to length 5 over the elements that matter.
    fn all_sequences(max_len: usize) -> Vec<Vec<SectionElement>> {
        let alphabet = [Railing, Footpath, Carriageway, CycleTrack, CrashBarrier];
        let mut out = vec![vec![]];
        let mut frontier: Vec<Vec<SectionElement>> = vec![vec![]];
        for _ in 0..max_len {
            let mut next = Vec::new();
            for seq in &frontier {
                for e in alphabet {
                    let mut s = seq.clone();
                    s.push(e);
                    next.push(s);
                }
            }
            out.extend(next.iter().cloned());
            frontier = next;
        }
        out
    }

    #[test]
    fn test_idempotent_for_all_short_sequences() {
        for seq in all_sequences(5) {
            let once = CrossSectionLayout::new(seq.clone()).normalized();
            let twice = once.normalized();
            assert_eq!(once, twice, "not idempotent for {:?}", seq);
            assert!(once.is_normalized(), "left unseparated pair in {:?}", once);
        }
    }

    #[test]
    fn test_order_preserved_for_all_short_sequences() {
        for seq in all_sequences(5) {
            let once = CrossSectionLayout::new(seq.clone()).normalized();
            let inserted = once.len() - seq.len();

            // removing inserted barriers gives back the input
            let mut it = once.elements().iter().copied();
            let mut rebuilt = Vec::new();
            let mut skipped = 0;
            for original in &seq {
                for e in it.by_ref() {
                    if e == *original {
                        rebuilt.push(e);
                        break;
                    }
                    assert_eq!(e, CrashBarrier);
                    skipped += 1;
                }
            }
            assert_eq!(rebuilt, seq);
            assert_eq!(skipped, inserted);
        }
    }

    #[test]
    fn test_serde_as_label_list() {
        let l = layout(&["Footpath", "Carriageway"]);
        let json = serde_json::to_string(&l.normalized()).unwrap();
        assert_eq!(json, r#"["Footpath","Crash Barrier","Carriageway"]"#);

        let back: CrossSectionLayout = serde_json::from_str(&json).unwrap();
        assert!(back.is_normalized());
    }
}
