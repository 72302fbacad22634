use super::threshold::{ThresholdScale, PURITY, SIGNIFICANCE};

pub const COLUMN_COUNT: usize = 11;
pub const HEADER_ROW_COUNT: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColumnRole {
    /// Row label, bold text.
    Label,
    Numeric,
    /// Numeric total shown in bold.
    Summary,
    /// Numeric, colored by the given scale.
    Threshold(ThresholdScale),
}

impl ColumnRole {
    pub fn is_bold(&self) -> bool {
        matches!(self, ColumnRole::Label | ColumnRole::Summary)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnSpec {
    pub group: &'static str,
    pub field: &'static str,
    pub role: ColumnRole,
}

const fn column(group: &'static str, field: &'static str, role: ColumnRole) -> ColumnSpec {
    ColumnSpec { group, field, role }
}

pub static COLUMNS: [ColumnSpec; COLUMN_COUNT] = [
    column("", "Variable", ColumnRole::Label),
    column("", "[", ColumnRole::Numeric),
    column("", ")", ColumnRole::Numeric),
    column("", "width", ColumnRole::Numeric),
    column("", "sig", ColumnRole::Summary),
    column("unc", "√(Σ(s²))", ColumnRole::Numeric),
    column("", "bkg", ColumnRole::Summary),
    column("unc", "√(Σ(b²))", ColumnRole::Numeric),
    column("signif", "s/√(s+b)", ColumnRole::Threshold(SIGNIFICANCE)),
    column("", "s/(s+b)", ColumnRole::Numeric),
    column("reco", "purity", ColumnRole::Threshold(PURITY)),
];

/// The two header rows: group labels, then field labels.
pub fn header_rows() -> [[&'static str; COLUMN_COUNT]; HEADER_ROW_COUNT] {
    [COLUMNS.map(|c| c.group), COLUMNS.map(|c| c.field)]
}

/// Column indices with their threshold scale, left to right.
pub fn threshold_columns() -> impl Iterator<Item = (u32, ThresholdScale)> {
    COLUMNS
        .iter()
        .zip(0u32..)
        .filter_map(|(spec, index)| match spec.role {
            ColumnRole::Threshold(scale) => Some((index, scale)),
            _ => None,
        })
}

pub fn bold_columns() -> impl Iterator<Item = u32> {
    COLUMNS
        .iter()
        .zip(0u32..)
        .filter(|(spec, _)| spec.role.is_bold())
        .map(|(_, index)| index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_rows() {
        let [groups, fields] = header_rows();
        assert_eq!(
            groups,
            ["", "", "", "", "", "unc", "", "unc", "signif", "", "reco"]
        );
        assert_eq!(
            fields,
            [
                "Variable", "[", ")", "width", "sig", "√(Σ(s²))", "bkg", "√(Σ(b²))", "s/√(s+b)",
                "s/(s+b)", "purity"
            ]
        );
    }

    #[test]
    fn test_threshold_columns() {
        let columns = threshold_columns().collect::<Vec<_>>();
        assert_eq!(columns, vec![(8, SIGNIFICANCE), (10, PURITY)]);
    }

    #[test]
    fn test_bold_columns() {
        assert_eq!(bold_columns().collect::<Vec<_>>(), vec![0, 4, 6]);
    }
}
