use crate::error::{PodstatsError, Result};
use crate::models::Episode;
use csv::ReaderBuilder;
use log::{info, warn};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

/// Parse episode rows from CSV with a header row.
///
/// Column names must match [`Episode`] field names; extra columns are ignored.
/// Rows with NaN or infinite numbers are rejected.
pub fn read_episodes<R: Read>(reader: R) -> Result<Vec<Episode>> {
    let mut rdr = ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut out = Vec::new();
    for (i, row) in rdr.deserialize::<Episode>().enumerate() {
        let episode = row?;
        if let Some((field, v)) = episode.metrics().into_iter().find(|(_, v)| !v.is_finite()) {
            warn!("row {}: rejected {field} = {v}", i + 1);
            return Err(PodstatsError::InvalidRow { row: i + 1, field });
        }
        out.push(episode);
    }
    Ok(out)
}

/// Load episodes from a CSV file.
pub fn load_csv<P: AsRef<Path>>(path: P) -> Result<Vec<Episode>> {
    let path = path.as_ref();
    let episodes = read_episodes(File::open(path)?)?;
    info!("loaded {} episodes from {}", episodes.len(), path.display());
    Ok(episodes)
}

/// Read any JSON document (config, event script) from a file.
pub fn load_json<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<T> {
    let f = File::open(path)?;
    Ok(serde_json::from_reader(f)?)
}

/// Save a value as pretty JSON.
pub fn save_json<T: Serialize + ?Sized, P: AsRef<Path>>(value: &T, path: P) -> Result<()> {
    let mut f = File::create(path)?;
    let s = serde_json::to_string_pretty(value)?;
    f.write_all(s.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const HEADER: &str = "id,title,duration_min,completion_rate,new_listeners,\
                          returning_listeners,subscribers,social_shares,subscribers_gained\n";

    #[test]
    fn reads_rows_and_trims_cells() {
        let data = format!("{HEADER}E1, Pilot ,32.5,71,120,40,200,15,22\n");
        let eps = read_episodes(data.as_bytes()).unwrap();
        assert_eq!(eps.len(), 1);
        assert_eq!(eps[0].title, "Pilot");
        assert_eq!(eps[0].duration_min, 32.5);
    }

    #[test]
    fn rejects_non_finite_values() {
        let rows = "E1,Pilot,32.5,71,120,40,200,15,22\nE2,Next,NaN,70,10,4,210,3,10\n";
        let data = format!("{HEADER}{rows}");
        let err = read_episodes(data.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            PodstatsError::InvalidRow {
                row: 2,
                field: "duration_min"
            }
        ));
    }

    #[test]
    fn write_json() {
        let dir = tempdir().unwrap();
        let p = dir.path().join("x.json");
        save_json(&vec![1.0, 2.0], &p).unwrap();
        let back: Vec<f64> = load_json(&p).unwrap();
        assert_eq!(back, vec![1.0, 2.0]);
    }
}
