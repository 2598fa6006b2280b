// monthly_table.rs

//! The wide, one-row-per-month table produced by [`crate::reshape`].

use crate::types::month::{MonthCode, CANONICAL_MONTHS};
use crate::types::tables::long_table::{LongRow, LongTable};
use chrono::Month;
use polars::prelude::{Column, DataFrame, PolarsResult};

/// Name of the month label column in every frame built from a [`MonthlyTable`].
pub const MONTH_COLUMN: &str = "month";

/// One calendar month with a value for every series, in the table's series order.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyRow {
    pub month: Month,
    pub values: Vec<f64>,
}

impl MonthlyRow {
    /// Capitalized three-letter label, e.g. `"Jul"`.
    pub fn label(&self) -> &'static str {
        self.month.abbreviation()
    }
}

/// Twelve rows in calendar order, one column per irradiance series.
///
/// Instances are built by [`crate::reshape`] and are immutable afterwards.
/// The column set is `month` followed by the series names in the order the
/// API listed them.
///
/// # Example
///
/// ```
/// # use nrel_solar::{decode, reshape};
/// let body = r#"{"outputs": {"avg_ghi": {"annual": 1.0, "monthly": {
///     "jan": 1.0, "feb": 1.0, "mar": 1.0, "apr": 1.0, "may": 1.0, "jun": 1.0,
///     "jul": 1.5, "aug": 1.0, "sep": 1.0, "oct": 1.0, "nov": 1.0, "dec": 1.0}}}}"#;
/// let response = decode(body)?;
/// let table = reshape(&response.outputs)?;
///
/// assert_eq!(table.height(), 12);
/// assert_eq!(table.width(), 2);
/// assert_eq!(table.rows()[6].label(), "Jul");
/// assert_eq!(table.rows()[6].values, vec![1.5]);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyTable {
    series: Vec<String>,
    annual: Vec<f64>,
    rows: Vec<MonthlyRow>,
}

impl MonthlyTable {
    /// `columns[s][i]` is the value of series `s` for `CANONICAL_MONTHS[i]`.
    pub(crate) fn from_columns(series: Vec<String>, annual: Vec<f64>, columns: &[[f64; 12]]) -> Self {
        let rows = CANONICAL_MONTHS
            .iter()
            .enumerate()
            .map(|(i, &month)| MonthlyRow {
                month,
                values: columns.iter().map(|column| column[i]).collect(),
            })
            .collect();
        Self {
            series,
            annual,
            rows,
        }
    }

    pub fn series_names(&self) -> &[String] {
        &self.series
    }

    pub fn rows(&self) -> &[MonthlyRow] {
        &self.rows
    }

    /// Number of rows, always 12.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns including `month`.
    pub fn width(&self) -> usize {
        self.series.len() + 1
    }

    fn series_index(&self, series: &str) -> Option<usize> {
        self.series.iter().position(|name| name == series)
    }

    /// The value of `series` in `month`, `None` for an unknown series.
    pub fn value(&self, month: Month, series: &str) -> Option<f64> {
        let idx = self.series_index(series)?;
        self.rows
            .iter()
            .find(|row| row.month == month)
            .map(|row| row.values[idx])
    }

    /// All twelve values of one series, January first.
    pub fn column(&self, series: &str) -> Option<Vec<f64>> {
        let idx = self.series_index(series)?;
        Some(self.rows.iter().map(|row| row.values[idx]).collect())
    }

    /// The annual figure the API reported alongside the monthly values.
    pub fn annual(&self, series: &str) -> Option<f64> {
        self.series_index(series).map(|idx| self.annual[idx])
    }

    /// Smallest and largest value across all series, `None` when there are no series.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        self.rows
            .iter()
            .flat_map(|row| row.values.iter().copied())
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }

    /// Explodes the table into one row per (month, series) pair, month-major.
    pub fn to_long(&self) -> LongTable {
        let rows = self
            .rows
            .iter()
            .flat_map(|row| {
                self.series
                    .iter()
                    .zip(row.values.iter())
                    .map(move |(name, &value)| LongRow {
                        month: row.month,
                        series_name: name.clone(),
                        value,
                    })
            })
            .collect();
        LongTable::new(self.series.clone(), rows)
    }

    /// Builds a Polars `DataFrame` with the `month` label column first.
    pub fn to_dataframe(&self) -> PolarsResult<DataFrame> {
        let mut columns = Vec::with_capacity(self.width());
        let labels: Vec<&str> = self.rows.iter().map(|row| row.label()).collect();
        columns.push(Column::new(MONTH_COLUMN.into(), labels));
        for (idx, name) in self.series.iter().enumerate() {
            let values: Vec<f64> = self.rows.iter().map(|row| row.values[idx]).collect();
            columns.push(Column::new(name.as_str().into(), values));
        }
        DataFrame::new(columns)
    }
}
