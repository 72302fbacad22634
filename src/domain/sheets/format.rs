use strum::AsRefStr;

use super::{
    schema::{bold_columns, threshold_columns, COLUMN_COUNT, HEADER_ROW_COUNT},
    threshold::Rgb,
};

pub const COLUMN_WIDTH_PX: u32 = 60;
pub const ROW_HEIGHT_PX: u32 = 18;
pub const FROZEN_ROW_COUNT: u32 = HEADER_ROW_COUNT as u32;
pub const CELL_PADDING: CellPadding = CellPadding {
    top: 0,
    right: 1,
    bottom: 0,
    left: 1,
};

/// Half-open `start..end` range of rows or columns of one sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DimensionSpan {
    pub sheet_id: i32,
    pub dimension: Dimension,
    pub start: u32,
    pub end: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Dimension {
    Rows,
    Columns,
}

/// Rectangular cell range; `None` bounds are open-ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSpan {
    pub sheet_id: i32,
    pub start_row: Option<u32>,
    pub end_row: Option<u32>,
    pub start_column: Option<u32>,
    pub end_column: Option<u32>,
}

impl GridSpan {
    pub fn rows(sheet_id: i32, start: u32, end: u32) -> Self {
        GridSpan {
            sheet_id,
            start_row: Some(start),
            end_row: Some(end),
            start_column: None,
            end_column: None,
        }
    }

    pub fn cells(sheet_id: i32, rows: (u32, u32), columns: (u32, u32)) -> Self {
        GridSpan {
            sheet_id,
            start_row: Some(rows.0),
            end_row: Some(rows.1),
            start_column: Some(columns.0),
            end_column: Some(columns.1),
        }
    }

    /// A single column from `start_row` down to the end of the sheet.
    pub fn column_from(sheet_id: i32, column: u32, start_row: u32) -> Self {
        GridSpan {
            sheet_id,
            start_row: Some(start_row),
            end_row: None,
            start_column: Some(column),
            end_column: Some(column + 1),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellPadding {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum HorizontalAlignment {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Condition {
    Less(f64),
    AtLeast(f64),
}

impl Condition {
    /// Condition type name in the Sheets API.
    pub fn kind(&self) -> &'static str {
        match self {
            Condition::Less(_) => "NUMBER_LESS",
            Condition::AtLeast(_) => "NUMBER_GREATER_THAN_EQ",
        }
    }

    pub fn boundary(&self) -> f64 {
        match self {
            Condition::Less(boundary) | Condition::AtLeast(boundary) => *boundary,
        }
    }

    pub fn matches(&self, value: f64) -> bool {
        match self {
            Condition::Less(boundary) => value < *boundary,
            Condition::AtLeast(boundary) => value >= *boundary,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormatOperation {
    FrozenRows {
        sheet_id: i32,
        count: u32,
    },
    ColumnWidth {
        span: DimensionSpan,
        pixels: u32,
    },
    RowHeight {
        span: DimensionSpan,
        pixels: u32,
    },
    Padding {
        range: GridSpan,
        padding: CellPadding,
    },
    HorizontalAlignment {
        range: GridSpan,
        alignment: HorizontalAlignment,
    },
    Bold {
        range: GridSpan,
    },
    /// Bold text in `color` when `condition` holds. Lower `index` is evaluated first.
    ConditionalColor {
        range: GridSpan,
        condition: Condition,
        color: Rgb,
        index: u32,
    },
    /// Spreadsheet-wide default padding, not tied to a sheet.
    DefaultPadding(CellPadding),
}

/// Operations submitted together in one batch request.
pub type FormattingBatch = Vec<FormatOperation>;

/// Formatting for a freshly created results sheet.
///
/// Frozen rows and dimension sizes come first, conditional rules last. Rule
/// indices increase in listed order so the first matching rule wins.
pub fn build(sheet_id: i32, row_count: u32, column_count: u32) -> FormattingBatch {
    let header_rows = HEADER_ROW_COUNT as u32;
    let mut batch = vec![
        FormatOperation::FrozenRows {
            sheet_id,
            count: FROZEN_ROW_COUNT,
        },
        FormatOperation::ColumnWidth {
            span: DimensionSpan {
                sheet_id,
                dimension: Dimension::Columns,
                start: 1,
                end: COLUMN_COUNT as u32,
            },
            pixels: COLUMN_WIDTH_PX,
        },
        FormatOperation::RowHeight {
            span: DimensionSpan {
                sheet_id,
                dimension: Dimension::Rows,
                start: 0,
                end: row_count,
            },
            pixels: ROW_HEIGHT_PX,
        },
        FormatOperation::Padding {
            range: GridSpan::cells(sheet_id, (0, row_count), (0, column_count)),
            padding: CELL_PADDING,
        },
        FormatOperation::HorizontalAlignment {
            range: GridSpan::rows(sheet_id, 0, header_rows),
            alignment: HorizontalAlignment::Center,
        },
        FormatOperation::Bold {
            range: GridSpan::rows(sheet_id, 0, header_rows),
        },
    ];

    batch.extend(bold_columns().map(|column| FormatOperation::Bold {
        range: GridSpan::column_from(sheet_id, column, header_rows),
    }));

    let mut index = 0;
    for (column, scale) in threshold_columns() {
        let range = GridSpan::column_from(sheet_id, column, header_rows);

        let conditions = scale
            .bands
            .iter()
            .map(|band| (Condition::Less(band.boundary), band.color))
            .chain(
                scale
                    .ceiling()
                    .map(|ceiling| (Condition::AtLeast(ceiling), scale.above)),
            );

        for (condition, color) in conditions {
            batch.push(FormatOperation::ConditionalColor {
                range,
                condition,
                color,
                index,
            });
            index += 1;
        }
    }

    batch
}

/// Spreadsheet-level default cell format.
pub fn default_format_batch() -> FormattingBatch {
    vec![FormatOperation::DefaultPadding(CELL_PADDING)]
}
