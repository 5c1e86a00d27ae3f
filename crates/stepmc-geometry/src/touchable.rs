//! Touchables: a track's current position in the volume hierarchy.

use smallvec::SmallVec;

use stepmc_core::PhysicalId;

use crate::transform::AffineTransform;

/// An ordered chain of nested volume placements plus the accumulated
/// global→local transform of the innermost one.
///
/// Level 0 is the current volume, the last level is the world. Detector
/// hierarchies are shallow, so the chain is inline up to 8 levels.
/// Touchables are engine-owned and valid only while their track is
/// current; the step manager borrows them.
#[derive(Clone, Debug)]
pub struct Touchable {
    levels: SmallVec<[PhysicalId; 8]>,
    transform: AffineTransform,
}

impl Touchable {
    /// Build a touchable from the current volume, its ancestors (mother
    /// first, world last), and the accumulated transform.
    pub fn new(
        current: PhysicalId,
        ancestors: impl IntoIterator<Item = PhysicalId>,
        transform: AffineTransform,
    ) -> Self {
        let mut levels = SmallVec::new();
        levels.push(current);
        levels.extend(ancestors);
        Self { levels, transform }
    }

    /// Number of ancestors above the current volume.
    ///
    /// A world-level touchable has depth 0.
    pub fn depth(&self) -> usize {
        self.levels.len() - 1
    }

    /// The current volume.
    pub fn volume(&self) -> PhysicalId {
        self.levels[0]
    }

    /// The volume `level` steps above the current one (0 = current).
    ///
    /// `None` when `level` exceeds [`depth`](Touchable::depth); callers
    /// decide whether that deserves a warning.
    pub fn volume_at(&self, level: usize) -> Option<PhysicalId> {
        self.levels.get(level).copied()
    }

    /// The accumulated global→local transform of the current volume.
    pub fn transform(&self) -> &AffineTransform {
        &self.transform
    }

    /// Iterate the chain from the world down to the current volume.
    ///
    /// This is the order volume paths are printed in.
    pub fn iter_from_world(&self) -> impl Iterator<Item = PhysicalId> + '_ {
        self.levels.iter().rev().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain(ids: &[u32]) -> Touchable {
        Touchable::new(
            PhysicalId(ids[0]),
            ids[1..].iter().map(|&i| PhysicalId(i)),
            AffineTransform::identity(),
        )
    }

    #[test]
    fn depth_counts_ancestors_only() {
        assert_eq!(chain(&[5]).depth(), 0);
        assert_eq!(chain(&[5, 2, 0]).depth(), 2);
    }

    #[test]
    fn volume_at_is_bounded_by_depth() {
        let t = chain(&[5, 2, 0]);
        assert_eq!(t.volume_at(0), Some(PhysicalId(5)));
        assert_eq!(t.volume_at(2), Some(PhysicalId(0)));
        assert_eq!(t.volume_at(3), None);
    }

    #[test]
    fn world_iteration_reverses_the_chain() {
        let t = chain(&[5, 2, 0]);
        let order: Vec<PhysicalId> = t.iter_from_world().collect();
        assert_eq!(order, vec![PhysicalId(0), PhysicalId(2), PhysicalId(5)]);
    }
}
