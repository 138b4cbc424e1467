// crates/postcode-core/src/export.rs
//! CSV export of lookup results.
//!
//! Both exports share one layout: a `postcode,city,state,state_code` header
//! followed by one row per postcode, fields written as stored.

use crate::error::Result;
use crate::model::{CityRecord, PostcodeRecord};
use chrono::{DateTime, TimeZone};
use std::io::Write;

pub const CSV_HEADER: [&str; 4] = ["postcode", "city", "state", "state_code"];

/// Writes a single postcode record.
pub fn write_postcode_csv<W: Write>(writer: W, rec: &PostcodeRecord) -> Result<()> {
    let mut w = csv::Writer::from_writer(writer);
    w.write_record(CSV_HEADER)?;
    w.write_record([&rec.postcode, &rec.city, &rec.state, &rec.state_code])?;
    w.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Writes one row for every postcode of a city.
pub fn write_city_csv<W: Write>(writer: W, rec: &CityRecord) -> Result<()> {
    let mut w = csv::Writer::from_writer(writer);
    w.write_record(CSV_HEADER)?;
    for pc in &rec.postcodes {
        w.write_record([pc, &rec.city, &rec.state, &rec.state_code])?;
    }
    w.flush().map_err(csv::Error::from)?;
    Ok(())
}

fn stamp<Tz: TimeZone>(now: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    now.format("%Y%m%d-%H%M%S").to_string()
}

/// `postcode_lookup_<postcode>_<YYYYMMDD-HHMMSS>.csv`
pub fn postcode_export_filename<Tz: TimeZone>(postcode: &str, now: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!("postcode_lookup_{postcode}_{}.csv", stamp(now))
}

/// `city_postcodes_<city>_<YYYYMMDD-HHMMSS>.csv`, with `/` in the city name
/// replaced by `-`.
pub fn city_export_filename<Tz: TimeZone>(city: &str, now: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let safe_city = city.replace('/', "-");
    format!("city_postcodes_{safe_city}_{}.csv", stamp(now))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn city() -> CityRecord {
        CityRecord {
            city: "Kota Kinabalu".into(),
            state: "Sabah".into(),
            state_code: "SBH".into(),
            postcodes: vec!["88000".into(), "88100".into(), "88300".into()],
        }
    }

    #[test]
    fn city_export_has_one_row_per_postcode() {
        let mut buf = Vec::new();
        write_city_csv(&mut buf, &city()).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "postcode,city,state,state_code");
        assert_eq!(lines[2], "88100,Kota Kinabalu,Sabah,SBH");
    }

    #[test]
    fn postcode_export_quotes_commas() {
        let rec = PostcodeRecord {
            postcode: "93050".into(),
            city: "Kuching, Petra Jaya".into(),
            state: "Sarawak".into(),
            state_code: String::new(),
        };
        let mut buf = Vec::new();
        write_postcode_csv(&mut buf, &rec).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "postcode,city,state,state_code\n93050,\"Kuching, Petra Jaya\",Sarawak,\n"
        );
    }

    #[test]
    fn filenames_carry_a_timestamp() {
        let now = Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap();
        assert_eq!(
            postcode_export_filename("40100", &now),
            "postcode_lookup_40100_20240309-140507.csv"
        );
        assert_eq!(
            city_export_filename("Bandar Baru Bangi/Kajang", &now),
            "city_postcodes_Bandar Baru Bangi-Kajang_20240309-140507.csv"
        );
    }
}
