//! Reads and writes points in a simple csv format: a header line followed by one point per line.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/import/csv_test.rs"]
mod csv_test;

pub use self::actual::{read_csv_points, write_csv_points};

#[cfg(feature = "csv-format")]
mod actual {
    extern crate csv;

    use som_core::prelude::Float;
    use std::error::Error;
    use std::io::{Read, Write};

    /// Reads points from csv. All columns are treated as coordinates and every row must have
    /// the same amount of them.
    pub fn read_csv_points<R: Read>(reader: R) -> Result<Vec<Vec<Float>>, Box<dyn Error>> {
        let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
        let mut points = vec![];

        for (idx, record) in reader.records().enumerate() {
            let point = record?
                .iter()
                .map(|value| {
                    value.parse::<Float>().map_err(|err| format!("cannot parse '{value}' at row {idx}: {err}"))
                })
                .collect::<Result<Vec<_>, _>>()?;

            points.push(point);
        }

        Ok(points)
    }

    /// Writes points as csv with a header line.
    pub fn write_csv_points<W: Write>(writer: W, points: &[Vec<Float>]) -> Result<(), Box<dyn Error>> {
        let dimension = points.first().map_or(2, |point| point.len());
        let mut writer = csv::Writer::from_writer(writer);

        writer.write_record(get_column_names(dimension))?;
        for point in points {
            writer.write_record(point.iter().map(|value| value.to_string()))?;
        }
        writer.flush()?;

        Ok(())
    }

    fn get_column_names(dimension: usize) -> Vec<String> {
        match dimension {
            2 => vec!["X".to_string(), "Y".to_string()],
            _ => (1..=dimension).map(|idx| format!("X{idx}")).collect(),
        }
    }
}

#[cfg(not(feature = "csv-format"))]
mod actual {
    use som_core::prelude::Float;
    use std::error::Error;
    use std::io::{Read, Write};

    /// A stub method for reading points from csv format.
    pub fn read_csv_points<R: Read>(_reader: R) -> Result<Vec<Vec<Float>>, Box<dyn Error>> {
        Err("csv-format feature is not included".into())
    }

    /// A stub method for writing points in csv format.
    pub fn write_csv_points<W: Write>(_writer: W, _points: &[Vec<Float>]) -> Result<(), Box<dyn Error>> {
        Err("csv-format feature is not included".into())
    }
}
