//! Display metrics for the flat row view.
//!
//! A pure function of the projected rows: the name column tracks the widest
//! visible label (capped), the value column is fixed, and the list height is
//! capped at a maximum row count with extra width reserved for the scroll
//! affordance once the cap is exceeded. Recomputed after every structural
//! change. The constants are a product decision, not an invariant.

use unicode_width::UnicodeWidthStr;

/// Fixed padding added to the name column.
const NAME_COLUMN_PADDING: f64 = 20.0;
/// Width contributed per display column of the widest label.
const NAME_COLUMN_CHAR_SCALE: f64 = 6.0;
/// Upper bound on the name column.
const NAME_COLUMN_MAX: f64 = 260.0;
/// Fixed width of the value column.
const VALUE_COLUMN_WIDTH: f64 = 80.0;
/// Extra list width beyond the columns.
const LIST_CHROME_WIDTH: f64 = 10.0;
/// Extra list height beyond the rows.
const LIST_CHROME_HEIGHT: f64 = 4.0;
/// Height of one row.
const ROW_HEIGHT: f64 = 20.0;
/// Rows visible without scrolling.
const MAX_VISIBLE_ROWS: usize = 10;
/// Width reserved for the scroll affordance.
const SCROLLBAR_WIDTH: f64 = 30.0;
/// Border padding around the list, per dimension.
const CONTROL_PADDING: f64 = 2.0;

/// Host-supplied inputs to the metric computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricsConfig {
    /// Width of the leading expander column.
    pub expander_column_width: f64,
    /// Height of the type-name header above the list.
    pub header_height: f64,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            expander_column_width: 20.0,
            header_height: 20.0,
        }
    }
}

impl MetricsConfig {
    /// Set the expander column width.
    #[must_use]
    pub fn with_expander_column_width(mut self, width: f64) -> Self {
        self.expander_column_width = width;
        self
    }

    /// Set the header height.
    #[must_use]
    pub fn with_header_height(mut self, height: f64) -> Self {
        self.header_height = height;
        self
    }
}

/// Derived display metrics for one projection state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DisplayMetrics {
    /// Width of the name column.
    pub name_column_width: f64,
    /// Width of the value column.
    pub value_column_width: f64,
    /// Width of the row list, scroll affordance included.
    pub list_width: f64,
    /// Height of the row list.
    pub list_height: f64,
    /// Overall control width.
    pub control_width: f64,
    /// Overall control height.
    pub control_height: f64,
    /// Whether the row count exceeded the visible cap.
    pub scrollbar_reserved: bool,
}

impl DisplayMetrics {
    /// Compute metrics for the given visible labels.
    ///
    /// Label width is measured in display columns, so wide characters count
    /// double and the column does not under-allocate for CJK names.
    #[must_use]
    pub fn measure<'a>(labels: impl IntoIterator<Item = &'a str>, config: &MetricsConfig) -> Self {
        let mut max_label_width = 0usize;
        let mut row_count = 0usize;
        for label in labels {
            max_label_width = max_label_width.max(label.width());
            row_count += 1;
        }

        let name_column_width =
            (NAME_COLUMN_PADDING + max_label_width as f64 * NAME_COLUMN_CHAR_SCALE)
                .min(NAME_COLUMN_MAX);

        let mut list_width = config.expander_column_width
            + name_column_width
            + VALUE_COLUMN_WIDTH
            + LIST_CHROME_WIDTH;
        let visible_rows = row_count.min(MAX_VISIBLE_ROWS);
        let list_height = LIST_CHROME_HEIGHT + visible_rows as f64 * ROW_HEIGHT;

        let scrollbar_reserved = row_count > MAX_VISIBLE_ROWS;
        if scrollbar_reserved {
            list_width += SCROLLBAR_WIDTH;
        }

        Self {
            name_column_width,
            value_column_width: VALUE_COLUMN_WIDTH,
            list_width,
            list_height,
            control_width: list_width + CONTROL_PADDING,
            control_height: list_height + config.header_height + CONTROL_PADDING,
            scrollbar_reserved,
        }
    }
}
