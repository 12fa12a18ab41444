//! Due-date labels and their ordering.
//!
//! A todo's day/month/year components are free-form strings on the wire with
//! sentinel values for "unset". Only month and year contribute to the label,
//! which is either `MM/YY` or the literal `No Due Date`.

use std::fmt;

pub const NO_DUE_DATE: &str = "No Due Date";

pub const UNSET_DAY: &str = "00";
pub const UNSET_MONTH: &str = "00";
pub const UNSET_YEAR: &str = "0000";

/// Month/year bucket a todo is grouped under.
///
/// The derived `Ord` is the display order: `NoDueDate` sorts before every
/// dated entry, dated entries compare by year and then by month. Because the
/// label only keeps two year digits, so does the comparison.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DueDate {
    #[default]
    NoDueDate,
    Dated { year: u8, month: u8 },
}

impl DueDate {
    /// Derive the bucket from raw month and year components.
    ///
    /// Sentinels, empty strings, and anything that is not a month in `1..=12`
    /// with a numeric year collapse to `NoDueDate`.
    pub fn from_parts(month: &str, year: &str) -> Self {
        if month == UNSET_MONTH || year == UNSET_YEAR {
            return DueDate::NoDueDate;
        }
        let (Ok(month), Ok(year)) = (month.trim().parse::<u8>(), year.trim().parse::<u16>()) else {
            return DueDate::NoDueDate;
        };
        if !(1..=12).contains(&month) {
            return DueDate::NoDueDate;
        }
        DueDate::Dated {
            year: (year % 100) as u8,
            month,
        }
    }

    /// Parse a label produced by [`DueDate::label`]. Returns `None` for
    /// anything else.
    pub fn parse_label(label: &str) -> Option<Self> {
        if label == NO_DUE_DATE {
            return Some(DueDate::NoDueDate);
        }
        let (month, year) = label.split_once('/')?;
        if month.len() != 2 || year.len() != 2 {
            return None;
        }
        let month: u8 = month.parse().ok()?;
        let year: u8 = year.parse().ok()?;
        (1..=12)
            .contains(&month)
            .then_some(DueDate::Dated { year, month })
    }

    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for DueDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DueDate::NoDueDate => f.write_str(NO_DUE_DATE),
            DueDate::Dated { year, month } => write!(f, "{month:02}/{year:02}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_components_have_no_due_date() {
        assert_eq!(DueDate::from_parts("00", "0000").label(), "No Due Date");
        assert_eq!(DueDate::from_parts("03", "0000"), DueDate::NoDueDate);
        assert_eq!(DueDate::from_parts("00", "2022"), DueDate::NoDueDate);
    }

    #[test]
    fn dated_label_uses_two_digit_year() {
        assert_eq!(DueDate::from_parts("03", "2022").label(), "03/22");
        assert_eq!(DueDate::from_parts("11", "1999").label(), "11/99");
    }

    #[test]
    fn garbage_components_have_no_due_date() {
        assert_eq!(DueDate::from_parts("Month", "2022"), DueDate::NoDueDate);
        assert_eq!(DueDate::from_parts("13", "2022"), DueDate::NoDueDate);
        assert_eq!(DueDate::from_parts("", ""), DueDate::NoDueDate);
    }

    #[test]
    fn no_due_date_sorts_first() {
        let dated = DueDate::from_parts("03", "2021");
        assert!(DueDate::NoDueDate < dated);
        assert!(dated > DueDate::NoDueDate);
    }

    #[test]
    fn dated_entries_compare_year_then_month() {
        let march_21 = DueDate::from_parts("03", "2021");
        let jan_22 = DueDate::from_parts("01", "2022");
        let feb_22 = DueDate::from_parts("02", "2022");
        assert!(march_21 < jan_22);
        assert!(jan_22 < feb_22);
        assert!(!(jan_22 < march_21));
    }

    #[test]
    fn labels_parse_back() {
        let due = DueDate::from_parts("07", "2024");
        assert_eq!(DueDate::parse_label(&due.label()), Some(due));
        assert_eq!(DueDate::parse_label("No Due Date"), Some(DueDate::NoDueDate));
        assert_eq!(DueDate::parse_label("All Todos"), None);
        assert_eq!(DueDate::parse_label("13/22"), None);
        assert_eq!(DueDate::parse_label("3/22"), None);
    }
}
