//! KindTally: a visitor that keeps state between calls.

use std::collections::BTreeMap;

use sv_core::{Size, Visitor};
use sv_shapes::{Circle, Rectangle, ShapeKind, ShapeVisitor};

/// Counts how many shapes of each kind it has visited.
///
/// The counts belong to the tally, never to the shapes; a fresh tally per
/// traversal gives independent results.
#[derive(Debug, Clone, Default)]
pub struct KindTally {
    counts: BTreeMap<ShapeKind, Size>,
}

impl KindTally {
    /// Create an empty tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// How many shapes of `kind` were visited.
    pub fn count(&self, kind: ShapeKind) -> Size {
        self.counts.get(&kind).copied().unwrap_or(0)
    }

    /// Total number of visits.
    pub fn total(&self) -> Size {
        self.counts.values().sum()
    }

    fn bump(&mut self, kind: ShapeKind) {
        *self.counts.entry(kind).or_insert(0) += 1;
    }
}

impl Visitor for KindTally {
    type Output = ();
}

impl ShapeVisitor for KindTally {
    fn visit_circle(&mut self, _circle: &Circle) {
        self.bump(ShapeKind::Circle);
    }

    fn visit_rectangle(&mut self, _rectangle: &Rectangle) {
        self.bump(ShapeKind::Rectangle);
    }
}
