//! The canonical month ordering shared by the reshaper and the renderers.

use chrono::Month;

/// Calendar order, January first. Row `i` of every [`crate::MonthlyTable`] is
/// `CANONICAL_MONTHS[i]`, and chart axes are labeled in this order.
pub const CANONICAL_MONTHS: [Month; 12] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
    Month::July,
    Month::August,
    Month::September,
    Month::October,
    Month::November,
    Month::December,
];

/// Short month names as they appear in the API payload and on charts.
///
/// # Examples
///
/// ```
/// use chrono::Month;
/// use nrel_solar::MonthCode;
///
/// assert_eq!(Month::September.code(), "sep");
/// assert_eq!(Month::September.abbreviation(), "Sep");
/// ```
pub trait MonthCode {
    /// Lowercase three-letter key used in the `monthly` mapping (`jan`..`dec`).
    fn code(&self) -> &'static str;
    /// Capitalized three-letter label (`Jan`..`Dec`).
    fn abbreviation(&self) -> &'static str;
}

impl MonthCode for Month {
    fn code(&self) -> &'static str {
        match self {
            Month::January => "jan",
            Month::February => "feb",
            Month::March => "mar",
            Month::April => "apr",
            Month::May => "may",
            Month::June => "jun",
            Month::July => "jul",
            Month::August => "aug",
            Month::September => "sep",
            Month::October => "oct",
            Month::November => "nov",
            Month::December => "dec",
        }
    }

    fn abbreviation(&self) -> &'static str {
        match self {
            Month::January => "Jan",
            Month::February => "Feb",
            Month::March => "Mar",
            Month::April => "Apr",
            Month::May => "May",
            Month::June => "Jun",
            Month::July => "Jul",
            Month::August => "Aug",
            Month::September => "Sep",
            Month::October => "Oct",
            Month::November => "Nov",
            Month::December => "Dec",
        }
    }
}

/// Axis label for the month at `index` in [`CANONICAL_MONTHS`], empty when out of range.
pub(crate) fn label_at(index: usize) -> &'static str {
    CANONICAL_MONTHS
        .get(index)
        .map(|m| m.abbreviation())
        .unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_months_are_in_calendar_order() {
        for (i, month) in CANONICAL_MONTHS.iter().enumerate() {
            assert_eq!(month.number_from_month() as usize, i + 1);
        }
    }

    #[test]
    fn test_codes_and_labels_agree() {
        let labels: Vec<&str> = CANONICAL_MONTHS.iter().map(|m| m.abbreviation()).collect();
        assert_eq!(
            labels,
            ["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"]
        );
        for month in CANONICAL_MONTHS {
            assert_eq!(month.code(), month.abbreviation().to_lowercase());
        }
    }

    #[test]
    fn test_label_at_out_of_range() {
        assert_eq!(label_at(0), "Jan");
        assert_eq!(label_at(11), "Dec");
        assert_eq!(label_at(12), "");
    }
}
