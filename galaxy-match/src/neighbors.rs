//! Declination-sorted nearest-neighbor index.
//!
//! For every subject position the matcher needs the single closest
//! catalog position on the sphere. A full scan is O(N·M); this index
//! sorts the catalog by declination once and, per query, expands
//! outward from the query's declination, stopping as soon as the
//! declination offset alone exceeds the best separation found. The
//! pruning is exact: great-circle separation can never be smaller than
//! the difference in declination.
//!
//! Candidates are still compared with the full Vincenty separation, so
//! RA wraparound at 0°/360° and the poles are handled by the distance
//! itself, not the index.

use galaxy_core::{math, Angle};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy)]
struct IndexedPosition {
    ordinal: usize,
    ra_deg: f64,
    dec_deg: f64,
}

/// Nearest-neighbor index over a set of sky positions in degrees.
pub(crate) struct NeighborIndex {
    by_dec: Vec<IndexedPosition>,
}

impl NeighborIndex {
    /// Builds the index. `positions` are `(ra_deg, dec_deg)` pairs,
    /// already validated; their slice order defines the ordinals.
    pub(crate) fn new(positions: &[(f64, f64)]) -> Self {
        let mut by_dec: Vec<IndexedPosition> = positions
            .iter()
            .enumerate()
            .map(|(ordinal, &(ra_deg, dec_deg))| IndexedPosition {
                ordinal,
                ra_deg,
                dec_deg,
            })
            .collect();
        by_dec.sort_by(|a, b| {
            a.dec_deg
                .partial_cmp(&b.dec_deg)
                .unwrap_or(Ordering::Equal)
        });
        Self { by_dec }
    }

    /// The indexed position closest to `(ra_deg, dec_deg)`.
    ///
    /// Returns the ordinal and the great-circle separation. Ties break
    /// to the lowest ordinal, so results are deterministic for a fixed
    /// input order. Panics if the index is empty; callers guard that.
    pub(crate) fn nearest(&self, ra_deg: f64, dec_deg: f64) -> (usize, Angle) {
        assert!(!self.by_dec.is_empty(), "nearest() on an empty index");

        let n = self.by_dec.len();
        let start = self.by_dec.partition_point(|p| p.dec_deg < dec_deg);
        let mut below = start.checked_sub(1);
        let mut above = if start < n { Some(start) } else { None };

        let mut best_sep_deg = f64::INFINITY;
        let mut best_ordinal = usize::MAX;

        loop {
            let dec_offset = |i: usize| (self.by_dec[i].dec_deg - dec_deg).abs();
            let candidate = match (below, above) {
                (None, None) => break,
                (Some(b), None) => b,
                (None, Some(a)) => a,
                (Some(b), Some(a)) => {
                    if dec_offset(b) <= dec_offset(a) {
                        b
                    } else {
                        a
                    }
                }
            };

            // separation >= |delta dec|, so once the nearest untried
            // declination band is farther than the best hit, no better
            // candidate remains on either side
            if dec_offset(candidate) > best_sep_deg {
                break;
            }

            let p = self.by_dec[candidate];
            let sep = math::angular_separation(ra_deg, dec_deg, p.ra_deg, p.dec_deg).degrees();
            if sep < best_sep_deg || (sep == best_sep_deg && p.ordinal < best_ordinal) {
                best_sep_deg = sep;
                best_ordinal = p.ordinal;
            }

            if Some(candidate) == below {
                below = candidate.checked_sub(1);
            } else {
                above = if candidate + 1 < n {
                    Some(candidate + 1)
                } else {
                    None
                };
            }
        }

        (best_ordinal, Angle::from_degrees(best_sep_deg))
    }
}
