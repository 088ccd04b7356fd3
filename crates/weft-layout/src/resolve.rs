//! Track sizing.
//!
//! Turns an ordered list of [`TrackDefinition`]s plus the minimum sizes
//! reported by children into a concrete size for every track:
//!
//! 1. Pixel tracks take their rounded value. Auto and Star tracks start at
//!    the largest minimum contributed by a child that sits only in them.
//! 2. Optional multi-span minimums raise Star (or Auto) tracks in the span.
//! 3. Whatever is left of the content extent is shared among Star tracks by
//!    weight. When nothing is left, Star tracks keep their minimum and the
//!    grid overflows instead of squeezing content.

use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::track::TrackDefinition;

/// Minimum size of a child occupying exactly one track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackMinimum {
    pub track: usize,
    pub size: i32,
}

impl TrackMinimum {
    pub fn new(track: usize, size: i32) -> Self {
        Self { track, size }
    }
}

/// Minimum size of a child spanning `span` tracks starting at `start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpanMinimum {
    pub start: usize,
    pub span: usize,
    pub size: i32,
}

impl SpanMinimum {
    pub fn new(start: usize, span: usize, size: i32) -> Self {
        Self { start, span, size }
    }
}

/// How children spanning several tracks affect track minimums.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SpanPolicy {
    /// Spanning children never raise a track's minimum
    #[default]
    Ignore,
    /// Spread a spanning child's shortfall over the Star tracks it covers
    /// (by weight), or evenly over its Auto tracks if it covers no Star track
    Distribute,
}

/// Resolve track sizes from single-track minimums.
///
/// `minimums` may name the same track several times; the largest value
/// wins. A negative `content_extent` is treated as zero.
pub fn resolve_tracks(
    tracks: &[TrackDefinition],
    minimums: &[TrackMinimum],
    content_extent: i32,
) -> Vec<i32> {
    resolve_tracks_with_spans(tracks, minimums, &[], content_extent)
}

/// Resolve track sizes, also honoring minimums of children that span
/// several tracks. Entries in `spanning` with a span below 2 are ignored.
pub fn resolve_tracks_with_spans(
    tracks: &[TrackDefinition],
    minimums: &[TrackMinimum],
    spanning: &[SpanMinimum],
    content_extent: i32,
) -> Vec<i32> {
    if tracks.is_empty() {
        return Vec::new();
    }

    let mut sizes = seed_sizes(tracks, minimums);
    if !spanning.is_empty() {
        apply_spanning(tracks, &mut sizes, spanning);
    }
    distribute_star_space(tracks, &mut sizes, content_extent);

    sizes
        .into_iter()
        .map(|size| size.clamp(0, i32::MAX as i64) as i32)
        .collect()
}

/// Resolve track sizes and lay them out from `origin`.
pub fn resolve_geometry(
    tracks: &[TrackDefinition],
    minimums: &[TrackMinimum],
    spanning: &[SpanMinimum],
    content_extent: i32,
    origin: i32,
) -> TrackGeometry {
    let sizes = resolve_tracks_with_spans(tracks, minimums, spanning, content_extent);
    TrackGeometry::from_sizes(&sizes, origin)
}

fn seed_sizes(tracks: &[TrackDefinition], minimums: &[TrackMinimum]) -> Vec<i64> {
    let mut sizes: Vec<i64> = tracks
        .iter()
        .map(|track| match track {
            TrackDefinition::Pixel(value) => TrackDefinition::pixel_size(*value) as i64,
            TrackDefinition::Auto | TrackDefinition::Star(_) => 0,
        })
        .collect();

    for minimum in minimums {
        match tracks.get(minimum.track) {
            Some(TrackDefinition::Auto | TrackDefinition::Star(_)) => {
                let slot = &mut sizes[minimum.track];
                *slot = (*slot).max(minimum.size.max(0) as i64);
            }
            Some(TrackDefinition::Pixel(_)) => {}
            None => trace!("Ignoring minimum for missing track {}", minimum.track),
        }
    }

    sizes
}

fn apply_spanning(tracks: &[TrackDefinition], sizes: &mut [i64], spanning: &[SpanMinimum]) {
    let mut ordered: SmallVec<[&SpanMinimum; 8]> =
        spanning.iter().filter(|s| s.span > 1).collect();
    // Narrow spans first so wide ones see what narrow ones already claimed.
    ordered.sort_by_key(|s| s.span);

    for item in ordered {
        let start = item.start.min(tracks.len());
        let end = item.start.saturating_add(item.span).min(tracks.len());
        if start >= end {
            continue;
        }

        let current: i64 = sizes[start..end].iter().sum();
        let shortfall = item.size.max(0) as i64 - current;
        if shortfall <= 0 {
            continue;
        }

        let stars: SmallVec<[(usize, i64); 8]> = (start..end)
            .filter_map(|i| match tracks[i] {
                TrackDefinition::Star(weight) => Some((i, fixed_weight(weight))),
                _ => None,
            })
            .collect();

        if !stars.is_empty() {
            let total: i128 = stars.iter().map(|&(_, w)| w as i128).sum();
            let mut given = 0;
            for &(i, weight) in &stars {
                let add = share_of(shortfall, weight, total);
                sizes[i] += add;
                given += add;
            }
            if let Some(&(last, _)) = stars.last() {
                sizes[last] += shortfall - given;
            }
            trace!(
                "Span {}+{} raised star tracks by {}",
                item.start,
                item.span,
                shortfall
            );
            continue;
        }

        let autos: SmallVec<[usize; 8]> = (start..end)
            .filter(|&i| matches!(tracks[i], TrackDefinition::Auto))
            .collect();
        let Some(&last) = autos.last() else {
            trace!(
                "Span {}+{} covers only pixel tracks, shortfall {} dropped",
                item.start,
                item.span,
                shortfall
            );
            continue;
        };
        let share = shortfall / autos.len() as i64;
        for &i in &autos {
            sizes[i] += share;
        }
        sizes[last] += shortfall - share * autos.len() as i64;
    }
}

fn distribute_star_space(tracks: &[TrackDefinition], sizes: &mut [i64], content_extent: i32) {
    let extent = content_extent.max(0) as i64;
    let fixed: i64 = sizes.iter().sum();
    let avail = extent - fixed;
    let total_weight: i128 = tracks
        .iter()
        .filter_map(|track| match track {
            TrackDefinition::Star(weight) => Some(fixed_weight(*weight) as i128),
            _ => None,
        })
        .sum();

    debug!(
        "resolve_tracks: tracks={}, extent={}, fixed={}, avail={}, total_weight={}",
        tracks.len(),
        extent,
        fixed,
        avail,
        total_weight
    );

    if avail < 0 || total_weight <= 0 {
        // Overflow rather than shrink: Star tracks stay at their minimum.
        return;
    }

    for (i, track) in tracks.iter().enumerate() {
        if let TrackDefinition::Star(weight) = track {
            let weight = fixed_weight(*weight);
            let add = share_of(avail, weight, total_weight);
            trace!("  Track {}: weight={}, min={}, add={}", i, weight, sizes[i], add);
            sizes[i] += add;
        }
    }
}

/// Fixed-point scale for Star weights (six decimal places).
const WEIGHT_SCALE: f64 = 1_000_000.0;

/// Star weight as a fixed-point integer, never below one unit.
fn fixed_weight(weight: f64) -> i64 {
    // `as` saturates, so absurdly large weights stay representable.
    ((TrackDefinition::star_weight(weight) * WEIGHT_SCALE).round() as i64).max(1)
}

/// `floor(amount * weight / total)` without floating-point error.
fn share_of(amount: i64, weight: i64, total: i128) -> i64 {
    let share = amount as i128 * weight as i128 / total;
    share.clamp(0, i64::MAX as i128) as i64
}

/// Offsets and sizes of resolved tracks along one axis.
///
/// Stored as grid line positions, so `offset(i + 1) == offset(i) + size(i)`
/// holds exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackGeometry {
    lines: SmallVec<[i32; 9]>,
}

impl TrackGeometry {
    /// Lay out `sizes` end to end starting at `origin`.
    ///
    /// Lines saturate at `i32::MAX`, so tracks past that point report
    /// whatever size still fits.
    pub fn from_sizes(sizes: &[i32], origin: i32) -> Self {
        let mut lines = SmallVec::with_capacity(sizes.len() + 1);
        let mut cursor = origin;
        lines.push(cursor);
        for &size in sizes {
            cursor = cursor.saturating_add(size.max(0));
            lines.push(cursor);
        }
        Self { lines }
    }

    /// Number of tracks.
    pub fn len(&self) -> usize {
        self.lines.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Position of the first grid line.
    pub fn origin(&self) -> i32 {
        self.lines[0]
    }

    /// Start of track `index`.
    pub fn offset(&self, index: usize) -> Option<i32> {
        (index < self.len()).then(|| self.lines[index])
    }

    /// Size of track `index`.
    pub fn size(&self, index: usize) -> Option<i32> {
        (index < self.len()).then(|| self.lines[index + 1].saturating_sub(self.lines[index]))
    }

    /// Sum of all track sizes.
    pub fn total(&self) -> i32 {
        self.lines[self.len()].saturating_sub(self.origin())
    }

    /// Sizes of all tracks in order.
    pub fn sizes(&self) -> Vec<i32> {
        self.iter().map(|(_, size)| size).collect()
    }

    /// `(offset, size)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.lines.windows(2).map(|w| (w[0], w[1].saturating_sub(w[0])))
    }

    /// Offset and extent covered by `span` tracks starting at `start`.
    /// Out-of-range parts are dropped.
    pub fn span(&self, start: usize, span: usize) -> (i32, i32) {
        let first = start.min(self.len());
        let last = start.saturating_add(span).min(self.len());
        (self.lines[first], self.lines[last].saturating_sub(self.lines[first]))
    }
}
