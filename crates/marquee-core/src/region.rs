// File: crates/marquee-core/src/region.rs
// Summary: Maps a query region onto the document-order run of words it covers.

use serde::{Deserialize, Serialize};

use crate::geometry::{CenterRotatedBox, OverlayBounds, SelectionBounds};
use crate::polygon::{area_of_polygon, clip, to_polygon};
use crate::text::Word;

/// The document-order run of words a query region selects.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RegionMatch {
    /// Index of the first overlapped word.
    pub start_index: usize,
    /// Index of the last overlapped word (inclusive). A selection runs
    /// through every document-order word between the two even when a middle
    /// word does not geometrically overlap, as happens with rotated lines.
    pub end_index: usize,
    /// Intersection-over-union between the query region and the union of
    /// the overlapped words.
    pub iou: f64,
}

/// Find the run of words the query region most plausibly selects.
///
/// `words` are in document order; `region` may be rotated and only
/// partially overlap any word. Every word polygon is clipped against the
/// query polygon's axis-aligned bounds; words with zero clipped area do not
/// count as hits. Returns `None` when nothing overlaps or the query is
/// degenerate.
pub fn find_words_in_region(
    words: &[Word],
    region: &CenterRotatedBox,
    bounds: OverlayBounds,
) -> Option<RegionMatch> {
    if region.is_degenerate() {
        return None;
    }

    let region_polygon = to_polygon(region, bounds);
    let region_area = area_of_polygon(&region_polygon).abs();
    if region_area == 0.0 {
        return None;
    }
    let clip_bounds = SelectionBounds::around(&region_polygon);

    let mut intersection_area = 0.0;
    let mut word_area = 0.0;
    let mut run: Option<(usize, usize)> = None;

    for (index, word) in words.iter().enumerate() {
        if word.bounding_box.is_degenerate() {
            continue;
        }
        let word_polygon = to_polygon(&word.bounding_box, bounds);
        let clipped = area_of_polygon(&clip(&word_polygon, &clip_bounds)).abs();
        if clipped == 0.0 {
            continue;
        }
        intersection_area += clipped;
        word_area += area_of_polygon(&word_polygon).abs();
        run = Some(match run {
            None => (index, index),
            Some((start, _)) => (start, index),
        });
    }

    let (start_index, end_index) = run?;
    let union_area = word_area + region_area - intersection_area;
    let iou = if union_area > 0.0 { intersection_area / union_area } else { 0.0 };
    log::debug!(
        "region match: words [{start_index}, {end_index}] iou {iou:.4} \
         (intersection {intersection_area:.2}, union {union_area:.2})"
    );
    Some(RegionMatch { start_index, end_index, iou })
}
