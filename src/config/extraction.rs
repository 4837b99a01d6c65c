//! Geometry tolerances for the extraction pipeline.
//!
//! Calibrated against 1280x720-ish TradingView screenshots; everything that
//! scales with the image is a fraction of chart size, fixed pixel values are
//! for text-height-sized gaps that do not.

/// Where the classifier expects things to live, as fractions of chart size
pub struct LayoutSettings {
    // The price scale hugs the left edge; a candidate's right edge must fall
    // inside this slice of the width
    pub price_column_frac: f64,
    // Annotations sit in the plot area; text past this is a label even
    // without a recognized keyword
    pub label_zone_frac: f64,
    // Stricter positional cut applied to keyword-less labels after merging
    pub keep_zone_frac: f64,
}

/// Settings for joining fragments of one annotation line
pub struct MergeSettings {
    // Two fragments on the same visual line have centers within this
    pub max_center_dy_px: i32,
    // Horizontal gap from one box to the next; slight overlap is tolerated
    pub min_gap_px: i32,
    pub max_gap_px: i32,
}

/// Settings for matching labels to price-scale readings
pub struct AssociationSettings {
    // Vertical alignment tolerance, fraction of chart height
    pub align_tolerance_frac: f64,
    // A primary match closer than this fraction is considered settled;
    // anything looser lets the tag fallback have a look
    pub close_match_frac: f64,
    // Window for a price printed right next to the label itself
    pub tag_max_dx_px: i32,
    pub tag_max_dy_px: i32,
}

/// Settings for locating the live price on the scale
pub struct CurrentPriceSettings {
    // The scale draws a HH:MM countdown under the live price; this is the
    // allowed slack below and to either side of the price box
    pub timestamp_slack_px: i32,
}

/// The Master Extraction Configuration
pub struct ExtractionConfig {
    pub layout: LayoutSettings,
    pub merge: MergeSettings,
    pub association: AssociationSettings,
    pub current_price: CurrentPriceSettings,
}

pub const EXTRACTION: ExtractionConfig = ExtractionConfig {
    layout: LayoutSettings {
        price_column_frac: 0.25,
        label_zone_frac: 0.5,
        keep_zone_frac: 0.6,
    },

    merge: MergeSettings {
        max_center_dy_px: 25,
        // -5 lets boxes that OCR drew slightly overlapping still join
        min_gap_px: -5,
        max_gap_px: 60,
    },

    association: AssociationSettings {
        align_tolerance_frac: 0.10,
        close_match_frac: 0.05,
        tag_max_dx_px: 100,
        tag_max_dy_px: 20,
    },

    current_price: CurrentPriceSettings {
        timestamp_slack_px: 20,
    },
};
