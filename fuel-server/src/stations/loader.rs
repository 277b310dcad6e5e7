//! CSV loading for the enriched fuel price file.
//!
//! Expected header row (column order does not matter):
//!
//! ```text
//! OPIS Truckstop ID,Truckstop Name,Address,City,State,Rack ID,Retail Price,Latitude,Longitude
//! ```
//!
//! Rows without coordinates or with unparseable values are skipped and
//! counted. When an ID appears more than once the last row wins.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};

use crate::domain::{GeoPoint, Station, StationId};

use super::error::StationError;

const ID: &str = "OPIS Truckstop ID";
const NAME: &str = "Truckstop Name";
const CITY: &str = "City";
const STATE: &str = "State";
const PRICE: &str = "Retail Price";
const LATITUDE: &str = "Latitude";
const LONGITUDE: &str = "Longitude";

/// Result of loading a station file.
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    /// Unique stations, ordered by ID.
    pub stations: Vec<Station>,
    /// Rows rejected for missing or invalid values.
    pub skipped: usize,
    /// Rows replaced by a later row with the same ID.
    pub duplicates: usize,
}

/// Load stations from a CSV file.
pub fn load_stations(path: impl AsRef<Path>) -> Result<LoadReport, StationError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| StationError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_stations(file)
}

/// Parse stations from any CSV source.
pub fn parse_stations<R: Read>(reader: R) -> Result<LoadReport, StationError> {
    let mut csv_reader = ReaderBuilder::new()
        .trim(Trim::Fields)
        .flexible(true)
        .from_reader(reader);

    let columns = Columns::from_headers(csv_reader.headers()?)?;

    let mut by_id: BTreeMap<StationId, Station> = BTreeMap::new();
    let mut report = LoadReport::default();

    for record in csv_reader.records() {
        let record = match record {
            Ok(record) => record,
            Err(e) if e.is_io_error() => return Err(e.into()),
            Err(_) => {
                report.skipped += 1;
                continue;
            }
        };

        match columns.station(&record) {
            Some(station) => {
                if by_id.insert(station.id, station).is_some() {
                    report.duplicates += 1;
                }
            }
            None => report.skipped += 1,
        }
    }

    report.stations = by_id.into_values().collect();
    Ok(report)
}

/// Column positions resolved from the header row.
struct Columns {
    id: usize,
    name: Option<usize>,
    city: Option<usize>,
    state: Option<usize>,
    price: usize,
    latitude: usize,
    longitude: usize,
}

impl Columns {
    fn from_headers(headers: &StringRecord) -> Result<Self, StationError> {
        let find = |name: &str| headers.iter().position(|h| h.eq_ignore_ascii_case(name));
        let require = |name: &'static str| find(name).ok_or(StationError::MissingColumn(name));

        Ok(Self {
            id: require(ID)?,
            name: find(NAME),
            city: find(CITY),
            state: find(STATE),
            price: require(PRICE)?,
            latitude: require(LATITUDE)?,
            longitude: require(LONGITUDE)?,
        })
    }

    /// Build a station from a row, or `None` if the row is unusable.
    fn station(&self, record: &StringRecord) -> Option<Station> {
        let field = |index: usize| record.get(index).filter(|v| !v.is_empty());
        let text = |index: Option<usize>| index.and_then(|i| record.get(i)).unwrap_or_default();

        let lat: f64 = field(self.latitude)?.parse().ok()?;
        let lon: f64 = field(self.longitude)?.parse().ok()?;
        let position = GeoPoint::new(lon, lat).ok()?;

        let id: u64 = field(self.id)?.parse().ok()?;
        let price: f64 = field(self.price)?.parse().ok()?;
        if !price.is_finite() || price < 0.0 {
            return None;
        }

        Some(
            Station::new(StationId(id), position, price).with_details(
                text(self.name),
                text(self.city),
                text(self.state),
            ),
        )
    }
}
