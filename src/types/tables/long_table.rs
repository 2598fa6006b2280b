use crate::types::month::MonthCode;
use crate::types::tables::monthly_table::MONTH_COLUMN;
use chrono::Month;
use polars::prelude::{Column, DataFrame, PolarsResult};

pub const SERIES_COLUMN: &str = "series_name";
pub const VALUE_COLUMN: &str = "value";

#[derive(Debug, Clone, PartialEq)]
pub struct LongRow {
    pub month: Month,
    pub series_name: String,
    pub value: f64,
}

/// Long-form view of a [`crate::MonthlyTable`], one row per (month, series) pair.
/// Obtained with [`crate::MonthlyTable::to_long`].
#[derive(Debug, Clone, PartialEq)]
pub struct LongTable {
    series: Vec<String>,
    rows: Vec<LongRow>,
}

impl LongTable {
    pub(crate) fn new(series: Vec<String>, rows: Vec<LongRow>) -> Self {
        Self { series, rows }
    }

    /// Series names in the column order of the wide table.
    pub fn series_names(&self) -> &[String] {
        &self.series
    }

    pub fn rows(&self) -> &[LongRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows of a single series, in calendar order.
    pub fn series<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a LongRow> + 'a {
        self.rows.iter().filter(move |row| row.series_name == name)
    }

    pub fn to_dataframe(&self) -> PolarsResult<DataFrame> {
        let months: Vec<&str> = self.rows.iter().map(|r| r.month.abbreviation()).collect();
        let names: Vec<&str> = self.rows.iter().map(|r| r.series_name.as_str()).collect();
        let values: Vec<f64> = self.rows.iter().map(|r| r.value).collect();
        DataFrame::new(vec![
            Column::new(MONTH_COLUMN.into(), months),
            Column::new(SERIES_COLUMN.into(), names),
            Column::new(VALUE_COLUMN.into(), values),
        ])
    }
}
