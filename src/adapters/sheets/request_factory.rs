use google_sheets4::{
    api::{
        AddConditionalFormatRuleRequest, AddSheetRequest, BooleanCondition, BooleanRule,
        CellData, CellFormat, Color, ConditionValue, ConditionalFormatRule, DimensionProperties,
        DimensionRange, GridProperties, GridRange, Padding, RepeatCellRequest, Request,
        SheetProperties, SpreadsheetProperties, TextFormat, UpdateDimensionPropertiesRequest,
        UpdateSheetPropertiesRequest, UpdateSpreadsheetPropertiesRequest,
    },
    FieldMask,
};

use crate::domain::sheets::{
    format::{CellPadding, DimensionSpan, FormatOperation, GridSpan},
    threshold::Rgb,
};

pub trait RequestFactory {
    fn add_sheet(title: &str, row_count: u32, column_count: u32) -> Self;
    fn from_operation(operation: &FormatOperation) -> Self;
}

/// Sheets API indices are `int32`; grid sizes never get near the limit.
fn api_index(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

fn color(rgb: Rgb) -> Color {
    let (red, green, blue) = rgb.to_unit();
    Color {
        red: Some(red),
        green: Some(green),
        blue: Some(blue),
        alpha: None,
    }
}

fn padding(padding: CellPadding) -> Padding {
    Padding {
        top: Some(api_index(padding.top)),
        right: Some(api_index(padding.right)),
        bottom: Some(api_index(padding.bottom)),
        left: Some(api_index(padding.left)),
    }
}

fn grid_range(span: &GridSpan) -> GridRange {
    GridRange {
        sheet_id: Some(span.sheet_id),
        start_row_index: span.start_row.map(api_index),
        end_row_index: span.end_row.map(api_index),
        start_column_index: span.start_column.map(api_index),
        end_column_index: span.end_column.map(api_index),
    }
}

fn dimension_range(span: &DimensionSpan) -> DimensionRange {
    DimensionRange {
        sheet_id: Some(span.sheet_id),
        dimension: Some(span.dimension.as_ref().to_string()),
        start_index: Some(api_index(span.start)),
        end_index: Some(api_index(span.end)),
    }
}

fn pixel_size(span: &DimensionSpan, pixels: u32) -> Request {
    Request {
        update_dimension_properties: Some(UpdateDimensionPropertiesRequest {
            range: Some(dimension_range(span)),
            properties: Some(DimensionProperties {
                pixel_size: Some(api_index(pixels)),
                ..Default::default()
            }),
            fields: Some(FieldMask::new(&["pixel_size"])),
            ..Default::default()
        }),
        ..Default::default()
    }
}

fn repeat_format(range: &GridSpan, format: CellFormat, fields: &str) -> Request {
    Request {
        repeat_cell: Some(RepeatCellRequest {
            range: Some(grid_range(range)),
            cell: Some(CellData {
                user_entered_format: Some(format),
                ..Default::default()
            }),
            fields: Some(FieldMask::new(&[fields])),
        }),
        ..Default::default()
    }
}

impl RequestFactory for Request {
    fn add_sheet(title: &str, row_count: u32, column_count: u32) -> Self {
        Request {
            add_sheet: Some(AddSheetRequest {
                properties: Some(SheetProperties {
                    title: Some(title.to_string()),
                    grid_properties: Some(GridProperties {
                        row_count: Some(api_index(row_count)),
                        column_count: Some(api_index(column_count)),
                        ..Default::default()
                    }),
                    ..Default::default()
                }),
            }),
            ..Default::default()
        }
    }

    fn from_operation(operation: &FormatOperation) -> Self {
        match operation {
            FormatOperation::FrozenRows { sheet_id, count } => Request {
                update_sheet_properties: Some(UpdateSheetPropertiesRequest {
                    properties: Some(SheetProperties {
                        sheet_id: Some(*sheet_id),
                        grid_properties: Some(GridProperties {
                            frozen_row_count: Some(api_index(*count)),
                            ..Default::default()
                        }),
                        ..Default::default()
                    }),
                    fields: Some(FieldMask::new(&["grid_properties.frozen_row_count"])),
                }),
                ..Default::default()
            },
            FormatOperation::ColumnWidth { span, pixels }
            | FormatOperation::RowHeight { span, pixels } => pixel_size(span, *pixels),
            FormatOperation::Padding { range, padding: p } => repeat_format(
                range,
                CellFormat {
                    padding: Some(padding(*p)),
                    ..Default::default()
                },
                "user_entered_format.padding",
            ),
            FormatOperation::HorizontalAlignment { range, alignment } => repeat_format(
                range,
                CellFormat {
                    horizontal_alignment: Some(alignment.as_ref().to_string()),
                    ..Default::default()
                },
                "user_entered_format.horizontal_alignment",
            ),
            FormatOperation::Bold { range } => repeat_format(
                range,
                CellFormat {
                    text_format: Some(TextFormat {
                        bold: Some(true),
                        ..Default::default()
                    }),
                    ..Default::default()
                },
                "user_entered_format.text_format.bold",
            ),
            FormatOperation::ConditionalColor {
                range,
                condition,
                color: rgb,
                index,
            } => Request {
                add_conditional_format_rule: Some(AddConditionalFormatRuleRequest {
                    index: Some(api_index(*index)),
                    rule: Some(ConditionalFormatRule {
                        ranges: Some(vec![grid_range(range)]),
                        boolean_rule: Some(BooleanRule {
                            condition: Some(BooleanCondition {
                                type_: Some(condition.kind().to_string()),
                                values: Some(vec![ConditionValue {
                                    user_entered_value: Some(condition.boundary().to_string()),
                                    ..Default::default()
                                }]),
                            }),
                            format: Some(CellFormat {
                                text_format: Some(TextFormat {
                                    bold: Some(true),
                                    foreground_color: Some(color(*rgb)),
                                    ..Default::default()
                                }),
                                ..Default::default()
                            }),
                        }),
                        ..Default::default()
                    }),
                }),
                ..Default::default()
            },
            FormatOperation::DefaultPadding(p) => Request {
                update_spreadsheet_properties: Some(UpdateSpreadsheetPropertiesRequest {
                    properties: Some(SpreadsheetProperties {
                        default_format: Some(CellFormat {
                            padding: Some(padding(*p)),
                            ..Default::default()
                        }),
                        ..Default::default()
                    }),
                    fields: Some(FieldMask::new(&["default_format.padding"])),
                }),
                ..Default::default()
            },
        }
    }
}
