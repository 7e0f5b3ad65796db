use itertools::Itertools;

use crate::export::error::ExportError;

/// A record that becomes one numeric spreadsheet row
pub trait SheetRecord {
    fn values(&self) -> Vec<f64>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct SheetTable<T> {
    pub sheet_name: String,
    pub records: Vec<T>,
}

impl<T: SheetRecord> SheetTable<T> {
    pub fn new(sheet_name: impl Into<String>, records: Vec<T>) -> Self {
        SheetTable {
            sheet_name: sheet_name.into(),
            records,
        }
    }

    /// Checks every record yields the same number of values and returns it
    pub fn validate(&self) -> Result<usize, ExportError> {
        let Some(first) = self.records.first() else {
            return Ok(0);
        };
        let width = first.values().len();
        match self
            .records
            .iter()
            .map(SheetRecord::values)
            .find_position(|values| values.len() != width)
        {
            Some((row, values)) => Err(ExportError::WidthMismatch {
                sheet: self.sheet_name.clone(),
                row: row + 1,
                expected: width,
                got: values.len(),
            }),
            None => Ok(width),
        }
    }

    /// `Day`, then one `IterationN` column per value
    pub fn header(&self) -> Result<Vec<String>, ExportError> {
        let width = self.validate()?;
        Ok(std::iter::once(String::from("Day"))
            .chain((1..=width).map(|i| format!("Iteration{i}")))
            .collect())
    }

    /// Rows prefixed with their 1-based index
    pub fn rows(&self) -> Result<Vec<Vec<f64>>, ExportError> {
        self.validate()?;
        Ok(self
            .records
            .iter()
            .enumerate()
            .map(|(i, record)| {
                std::iter::once((i + 1) as f64)
                    .chain(record.values())
                    .collect()
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row(Vec<f64>);

    impl SheetRecord for Row {
        fn values(&self) -> Vec<f64> {
            self.0.clone()
        }
    }

    #[test]
    fn header_and_rows() {
        let table = SheetTable::new("SSU", vec![Row(vec![1., 2.]), Row(vec![3., 4.])]);
        assert_eq!(
            table.header().unwrap(),
            vec!["Day", "Iteration1", "Iteration2"]
        );
        assert_eq!(
            table.rows().unwrap(),
            vec![vec![1., 1., 2.], vec![2., 3., 4.]]
        );
    }

    #[test]
    fn mismatched_widths() {
        let table = SheetTable::new(
            "Accrual",
            vec![Row(vec![1., 2.]), Row(vec![3., 4.]), Row(vec![5.])],
        );
        let err = table.validate().unwrap_err();
        assert_eq!(
            format!("{}", err),
            String::from("sheet Accrual: row 3 has 1 values, expected 2")
        );
    }

    #[test]
    fn empty_table() {
        let table: SheetTable<Row> = SheetTable::new("Empty", vec![]);
        assert_eq!(table.validate().unwrap(), 0);
        assert_eq!(table.header().unwrap(), vec!["Day"]);
    }
}
