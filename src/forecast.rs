use std::io::Read;
use std::path::Path;

use anyhow::Context;
use chrono::NaiveDateTime;

use crate::models::WeatherReading;

#[derive(serde::Deserialize)]
struct CsvRow {
    observed_at: Option<NaiveDateTime>,
    temperature: f64,
    humidity: f64,
    wind_speed: Option<f64>,
}

impl CsvRow {
    fn into_reading(self) -> WeatherReading {
        WeatherReading {
            temperature: self.temperature,
            humidity: self.humidity,
            wind_speed: self.wind_speed.unwrap_or(0.0),
            observed_at: self.observed_at,
        }
    }
}

/// Loads an hourly forecast, keeping file order.
pub fn import_csv(csv_path: &Path) -> anyhow::Result<Vec<WeatherReading>> {
    let reader = csv::Reader::from_path(csv_path)
        .with_context(|| format!("failed to open forecast {}", csv_path.display()))?;
    read_forecast(reader)
        .with_context(|| format!("failed to read forecast {}", csv_path.display()))
}

pub fn parse_csv<R: Read>(input: R) -> anyhow::Result<Vec<WeatherReading>> {
    read_forecast(csv::Reader::from_reader(input))
}

fn read_forecast<R: Read>(mut reader: csv::Reader<R>) -> anyhow::Result<Vec<WeatherReading>> {
    let mut readings = Vec::new();

    for (index, result) in reader.deserialize::<CsvRow>().enumerate() {
        let row = result.with_context(|| format!("invalid forecast row {}", index + 1))?;
        readings.push(row.into_reading());
    }

    Ok(readings)
}
