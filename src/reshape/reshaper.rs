use crate::reshape::error::ReshapeError;
use crate::types::api_response::{Outputs, SeriesData};
use crate::types::month::{MonthCode, CANONICAL_MONTHS};
use crate::types::tables::monthly_table::MonthlyTable;
use log::debug;

/// Flattens the per-series monthly mappings into a [`MonthlyTable`].
///
/// Columns follow the order of `outputs`. Every series is read through
/// [`CANONICAL_MONTHS`], so rows line up in calendar order no matter how the
/// keys were ordered inside each `monthly` mapping. Month keys outside the
/// canonical twelve are ignored.
///
/// # Errors
///
/// * [`ReshapeError::EmptyOutputs`] if `outputs` holds no series.
/// * [`ReshapeError::MissingMonth`] for the first series that lacks one of
///   the twelve month keys. No partial table is produced.
pub fn reshape(outputs: &Outputs) -> Result<MonthlyTable, ReshapeError> {
    if outputs.is_empty() {
        return Err(ReshapeError::EmptyOutputs);
    }

    let mut names = Vec::with_capacity(outputs.len());
    let mut annual = Vec::with_capacity(outputs.len());
    let mut columns = Vec::with_capacity(outputs.len());

    for (name, data) in outputs.iter() {
        columns.push(monthly_sequence(name, data)?);
        names.push(name.to_string());
        annual.push(data.annual);
    }

    debug!(
        "Reshaped {} series into {} monthly rows",
        names.len(),
        CANONICAL_MONTHS.len()
    );
    Ok(MonthlyTable::from_columns(names, annual, &columns))
}

fn monthly_sequence(name: &str, data: &SeriesData) -> Result<[f64; 12], ReshapeError> {
    let mut values = [0.0; 12];
    for (slot, month) in values.iter_mut().zip(CANONICAL_MONTHS.iter()) {
        *slot = *data
            .monthly
            .get(month.code())
            .ok_or_else(|| ReshapeError::MissingMonth {
                series: name.to_string(),
                month: month.code(),
            })?;
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::decoder::decode;
    use crate::test_utils::{ramp_outputs, ramp_series, SAMPLE_RESPONSE};
    use crate::types::api_response::SeriesData;
    use chrono::Month;
    use std::collections::HashMap;

    fn sample_outputs() -> Outputs {
        decode(SAMPLE_RESPONSE).expect("fixture decodes").outputs
    }

    #[test]
    fn test_row_and_column_count() -> Result<(), ReshapeError> {
        for n in 1..=4 {
            let names: Vec<String> = (0..n).map(|i| format!("series_{}", i)).collect();
            let refs: Vec<&str> = names.iter().map(String::as_str).collect();
            let table = reshape(&ramp_outputs(&refs))?;
            assert_eq!(table.height(), 12);
            assert_eq!(table.width(), n + 1);
            assert_eq!(table.series_names(), names.as_slice());
        }
        Ok(())
    }

    #[test]
    fn test_sample_rows_match_known_values() -> Result<(), ReshapeError> {
        let table = reshape(&sample_outputs())?;
        assert_eq!(table.series_names(), ["avg_dni", "avg_ghi", "avg_lat_tilt"]);

        let january = &table.rows()[0];
        assert_eq!(january.label(), "Jan");
        assert_eq!(january.values, vec![3.12, 1.97, 3.55]);

        let july = &table.rows()[6];
        assert_eq!(july.label(), "Jul");
        assert_eq!(july.values, vec![4.60, 5.98, 5.58]);

        assert_eq!(table.annual("avg_lat_tilt"), Some(4.86));
        Ok(())
    }

    #[test]
    fn test_calendar_order_ignores_key_order() -> Result<(), ReshapeError> {
        // avg_ghi is stored alphabetically in the fixture
        let table = reshape(&sample_outputs())?;
        let labels: Vec<&str> = table.rows().iter().map(|r| r.label()).collect();
        assert_eq!(
            labels,
            ["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"]
        );
        assert_eq!(
            table.column("avg_ghi"),
            Some(vec![1.97, 2.68, 3.95, 5.03, 5.85, 6.49, 5.98, 5.39, 4.69, 3.37, 2.29, 1.78])
        );
        Ok(())
    }

    #[test]
    fn test_values_copied_exactly() -> Result<(), ReshapeError> {
        let outputs = sample_outputs();
        let table = reshape(&outputs)?;
        for (name, data) in outputs.iter() {
            for month in CANONICAL_MONTHS {
                let expected = data.monthly[month.code()];
                let actual = table.value(month, name).expect("series present");
                assert_eq!(actual.to_bits(), expected.to_bits(), "{} {:?}", name, month);
            }
        }
        Ok(())
    }

    #[test]
    fn test_missing_month_is_rejected() {
        let mut broken = ramp_series(1.0);
        broken.monthly.remove("oct");
        let outputs: Outputs = vec![
            ("avg_dni".to_string(), ramp_series(0.0)),
            ("avg_ghi".to_string(), broken),
        ]
        .into_iter()
        .collect();

        assert_eq!(
            reshape(&outputs),
            Err(ReshapeError::MissingMonth {
                series: "avg_ghi".to_string(),
                month: "oct",
            })
        );
    }

    #[test]
    fn test_empty_outputs_rejected() {
        assert_eq!(reshape(&Outputs::default()), Err(ReshapeError::EmptyOutputs));
    }

    #[test]
    fn test_extra_month_keys_ignored() -> Result<(), ReshapeError> {
        let mut series = ramp_series(0.0);
        series.monthly.insert("annual".to_string(), 99.0);
        series.monthly.insert("Jan".to_string(), 42.0);
        let outputs: Outputs = vec![("x".to_string(), series)].into_iter().collect();

        let table = reshape(&outputs)?;
        assert_eq!(table.value(Month::January, "x"), Some(0.0));
        assert_eq!(table.value_range(), Some((0.0, 11.0)));
        Ok(())
    }

    #[test]
    fn test_reshape_is_idempotent() -> Result<(), ReshapeError> {
        let outputs = sample_outputs();
        let first = reshape(&outputs)?;
        let second = reshape(&outputs)?;
        assert_eq!(first, second);
        for (a, b) in first.rows().iter().zip(second.rows()) {
            let a_bits: Vec<u64> = a.values.iter().map(|v| v.to_bits()).collect();
            let b_bits: Vec<u64> = b.values.iter().map(|v| v.to_bits()).collect();
            assert_eq!(a_bits, b_bits);
        }
        Ok(())
    }

    #[test]
    fn test_series_without_any_months() {
        let outputs: Outputs = vec![(
            "avg_dni".to_string(),
            SeriesData {
                annual: 0.0,
                monthly: HashMap::new(),
            },
        )]
        .into_iter()
        .collect();
        assert!(matches!(
            reshape(&outputs),
            Err(ReshapeError::MissingMonth { month: "jan", .. })
        ));
    }
}
