//! JSON record sink.
//!
//! Writes the ordered record list produced by the airflow builder so that a
//! downstream translator can turn it into a simulation input.

use crate::airflow::AirflowRecord;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Writes records to a JSON file, preserving their order.
///
/// # Example
/// ```no_run
/// use building_airflow::airflow::{AirflowConfig, build_airflow_network};
/// use building_airflow::io::write_records_json;
/// use building_airflow::model::{Building, surface::Surface, zone::Zone};
/// use std::path::Path;
///
/// let zone = Zone::from_surfaces("office", vec![Surface::exterior("north", 10.0)]).unwrap();
/// let building = Building::new("b", vec![zone]).unwrap();
/// let records = build_airflow_network(&building, AirflowConfig::new()).unwrap();
/// write_records_json(Path::new("afn.json"), &records).unwrap();
/// ```
pub fn write_records_json(path: &Path, records: &[AirflowRecord]) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create file: {}", path.display()))?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, records)
        .with_context(|| format!("Failed to serialize records to: {}", path.display()))?;

    Ok(())
}

/// Reads records previously written by [`write_records_json`].
pub fn read_records_json(path: &Path) -> Result<Vec<AirflowRecord>> {
    let file =
        File::open(path).with_context(|| format!("Failed to open file: {}", path.display()))?;
    let reader = BufReader::new(file);

    let records: Vec<AirflowRecord> = serde_json::from_reader(reader)
        .with_context(|| format!("Failed to deserialize records from: {}", path.display()))?;

    Ok(records)
}

/// Serializes records to a pretty-printed JSON string.
pub fn to_records_string(records: &[AirflowRecord]) -> Result<String> {
    serde_json::to_string_pretty(records).context("Failed to serialize records to string")
}

/// Deserializes records from a JSON string.
pub fn from_records_string(json: &str) -> Result<Vec<AirflowRecord>> {
    serde_json::from_str(json).context("Failed to deserialize records from string")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::airflow::{AirflowConfig, build_airflow_network};
    use crate::model::Building;
    use crate::model::surface::Surface;
    use crate::model::zone::Zone;
    use crate::UID;
    use tempfile::tempdir;

    fn network() -> Result<Vec<AirflowRecord>> {
        let (a, b) = (UID::from("a"), UID::from("b"));
        let z1 = Zone::from_surfaces(
            "z1",
            vec![
                Surface::exterior("north", 10.0),
                Surface::interior("p1", 6.0, &b).with_uid(a.clone()),
            ],
        )?;
        let z2 = Zone::from_surfaces("z2", vec![Surface::interior("p2", 6.0, &a).with_uid(b)])?;
        let building = Building::new("b", vec![z1, z2])?;
        Ok(build_airflow_network(&building, AirflowConfig::new())?)
    }

    #[test]
    fn test_write_and_read_records() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("afn.json");

        let original = network()?;
        write_records_json(&path, &original)?;
        let loaded = read_records_json(&path)?;

        assert_eq!(loaded, original);
        Ok(())
    }

    #[test]
    fn test_string_form_keeps_order_and_tags() -> Result<()> {
        let records = network()?;
        let json = to_records_string(&records)?;
        let value: serde_json::Value = serde_json::from_str(&json)?;
        let types: Vec<&str> = value
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["type"].as_str().unwrap())
            .collect();
        assert_eq!(
            types,
            vec![
                "ReferenceCrackConditions",
                "SurfaceCrack",
                "SurfaceCrack",
                "Zone",
                "Zone",
                "Surface",
                "Surface",
            ]
        );
        assert_eq!(from_records_string(&json)?, records);
        Ok(())
    }

    #[test]
    fn test_read_missing_file_fails() {
        let dir = tempdir().unwrap();
        assert!(read_records_json(&dir.path().join("missing.json")).is_err());
    }
}
