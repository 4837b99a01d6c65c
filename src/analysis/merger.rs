//! Joins annotation fragments the OCR split apart. "daily" and "high" come
//! back as separate boxes on the same visual line; downstream matching needs
//! them as one label again.

use crate::analysis::classifier::{ChartDims, has_level_keyword};
use crate::config::EXTRACTION;
use crate::domain::{LabelFragment, PeriodHint};

/// Single left-to-right pass over labels sorted by line and position. A
/// freshly merged entry stays current so it can absorb its new neighbour too.
/// After merging, keyword-less labels outside the keep zone are dropped and
/// every survivor gets its period hint from the full wording.
pub fn merge_adjacent_labels(
    mut labels: Vec<LabelFragment>,
    dims: ChartDims,
) -> Vec<LabelFragment> {
    labels.sort_by_key(|label| (label.center_y, label.bounds.x1));

    let mut i = 0;
    while i + 1 < labels.len() {
        let current = &labels[i];
        let next = &labels[i + 1];

        let dy = (current.center_y - next.center_y).abs();
        let dx = next.bounds.x1 - current.bounds.x2;

        let same_line = dy < EXTRACTION.merge.max_center_dy_px;
        let adjacent = dx > EXTRACTION.merge.min_gap_px && dx < EXTRACTION.merge.max_gap_px;

        if same_line && adjacent {
            let merged_text = format!("{} {}", current.text, next.text);
            #[cfg(debug_assertions)]
            if crate::config::PRINT_MERGE_STEPS {
                log::info!(
                    "Merging '{}' + '{}' -> '{}'",
                    current.text,
                    next.text,
                    merged_text
                );
            }
            labels[i] = LabelFragment {
                text: merged_text,
                bounds: current.bounds.union(&next.bounds),
                center_y: (current.center_y + next.center_y) / 2,
                hint: PeriodHint::Unknown,
            };
            labels.remove(i + 1);
        } else {
            i += 1;
        }
    }

    // Second look now that split lines are whole again: keep annotations that
    // name a level, or sit deep enough in the plot area to be deliberate
    let keep_start = dims.width as f64 * EXTRACTION.layout.keep_zone_frac;
    labels.retain(|label| has_level_keyword(&label.text) || label.bounds.x1 as f64 > keep_start);

    for label in &mut labels {
        label.hint = PeriodHint::from_text(&label.text);
    }

    labels
}
