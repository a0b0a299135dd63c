//! CSV reader/writer for conventional tables
//!
//! The header row names the columns. Empty fields are missing values.
//! A column becomes I64 when every non-empty field parses as an integer
//! other than the I64 null sentinel, otherwise F64.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use crate::error::{FrameError, Result};
use crate::table::{Column, Table, NULL_I64};

pub fn read_csv_path<P: AsRef<Path>>(path: P) -> Result<Table> {
    let file = File::open(path.as_ref())?;
    log::debug!("reading CSV from {}", path.as_ref().display());
    read_csv(file)
}

pub fn read_csv<R: Read>(reader: R) -> Result<Table> {
    let mut rdr = csv::ReaderBuilder::new().has_headers(true).from_reader(reader);
    let names: Vec<String> = rdr.headers()?.iter().map(|h| h.trim().to_string()).collect();

    let mut raw: Vec<Vec<String>> = vec![Vec::new(); names.len()];
    for record in rdr.records() {
        let record = record?;
        for (j, field) in record.iter().enumerate() {
            if let Some(col) = raw.get_mut(j) {
                col.push(field.trim().to_string());
            }
        }
    }

    let columns = names
        .iter()
        .zip(&raw)
        .map(|(name, fields)| parse_column(name, fields))
        .collect::<Result<Vec<_>>>()?;
    log::debug!(
        "parsed CSV table with {} columns, {} rows",
        columns.len(),
        columns.first().map(Column::len).unwrap_or(0)
    );
    Table::new(names, columns)
}

fn parse_column(name: &str, fields: &[String]) -> Result<Column> {
    let all_int = fields
        .iter()
        .all(|f| f.is_empty() || f.parse::<i64>().map_or(false, |v| v != NULL_I64));
    if all_int && fields.iter().any(|f| !f.is_empty()) {
        let data = fields
            .iter()
            .map(|f| f.parse::<i64>().unwrap_or(NULL_I64))
            .collect();
        return Ok(Column::I64(data));
    }

    let data = fields
        .iter()
        .enumerate()
        .map(|(row, f)| {
            if f.is_empty() {
                return Ok(f64::NAN);
            }
            f.parse::<f64>().map_err(|_| FrameError::Parse {
                row,
                column: name.to_string(),
                value: f.clone(),
            })
        })
        .collect::<Result<Vec<f64>>>()?;
    Ok(Column::F64(data))
}

/// Write a table as CSV; nulls become empty fields
pub fn write_csv<W: Write>(table: &Table, writer: W) -> Result<()> {
    table.validate()?;
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(&table.names)?;
    for row in 0..table.row_count() {
        let record: Vec<String> = table
            .columns
            .iter()
            .map(|col| match col {
                Column::F64(data) if data[row].is_nan() => String::new(),
                Column::F64(data) => data[row].to_string(),
                Column::I64(data) if data[row] == NULL_I64 => String::new(),
                Column::I64(data) => data[row].to_string(),
            })
            .collect();
        wtr.write_record(&record)?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "A,B,C,D\n,2.0,,0\n3,4.0,,1\n0.5,5,,5\n";

    #[test]
    fn test_read_column_types() {
        let table = read_csv(SAMPLE.as_bytes()).unwrap();
        assert_eq!(table.names, ["A", "B", "C", "D"]);
        assert_eq!(table.row_count(), 3);

        // D is all integers; C has no values at all and stays F64
        assert_eq!(table.columns[3], Column::I64(vec![0, 1, 5]));
        assert!(matches!(table.columns[2], Column::F64(ref v) if v.iter().all(|x| x.is_nan())));
        assert!(table.columns[0].has_nulls());
    }

    #[test]
    fn test_read_parse_error() {
        let err = read_csv("x,y\n1,2\n3,abc\n".as_bytes()).unwrap_err();
        match err {
            FrameError::Parse { row, column, value } => {
                assert_eq!(row, 1);
                assert_eq!(column, "y");
                assert_eq!(value, "abc");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_ragged_record_is_csv_error() {
        let err = read_csv("x,y\n1,2\n3\n".as_bytes()).unwrap_err();
        assert!(matches!(err, FrameError::Csv(_)));
    }

    #[test]
    fn test_sentinel_literal_stays_a_value() {
        let table = read_csv("n\n1\n-9223372036854775808\n".as_bytes()).unwrap();
        match &table.columns[0] {
            Column::F64(data) => assert_eq!(data[1], i64::MIN as f64),
            other => panic!("expected F64 column, got {other:?}"),
        }
        assert!(!table.columns[0].has_nulls());
    }

    #[test]
    fn test_write_ragged_table_is_error() {
        let table = Table {
            names: vec!["a".into(), "b".into()],
            columns: vec![Column::F64(vec![1.0, 2.0]), Column::I64(vec![1])],
        };
        let mut buf = Vec::new();
        let err = write_csv(&table, &mut buf).unwrap_err();
        assert!(matches!(err, FrameError::LengthMismatch { ref column, expected: 2, actual: 1 } if column == "b"));
        assert!(buf.is_empty());
    }

    #[test]
    fn test_write_nulls_as_empty() {
        let table = Table::new(
            vec!["a".into(), "b".into()],
            vec![
                Column::F64(vec![1.5, f64::NAN]),
                Column::I64(vec![NULL_I64, 2]),
            ],
        )
        .unwrap();
        let mut buf = Vec::new();
        write_csv(&table, &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "a,b\n1.5,\n,2\n");
    }
}
