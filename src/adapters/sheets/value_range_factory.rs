use google_sheets4::api::ValueRange;
use serde_json::Value;

pub trait ValueRangeFactory {
    fn from_rows<R: AsRef<[T]>, T: AsRef<str>>(rows: &[R]) -> Self;
}

fn wrap_value<T: AsRef<str>>(value: T) -> Value {
    Value::String(value.as_ref().to_owned())
}

impl ValueRangeFactory for ValueRange {
    fn from_rows<R: AsRef<[T]>, T: AsRef<str>>(rows: &[R]) -> Self {
        let values = rows
            .iter()
            .map(|row| row.as_ref().iter().map(wrap_value).collect::<Vec<_>>())
            .collect::<Vec<_>>();

        ValueRange {
            major_dimension: Some("ROWS".to_string()),
            range: None,
            values: Some(values),
        }
    }
}
