use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use include_dir::{include_dir, Dir};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, WorkoutError};

static SAMPLES_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/samples");

/// One raw workout record: an activity code and its positional values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutPackage {
    pub code: String,
    pub values: Vec<f64>,
}

impl WorkoutPackage {
    pub fn new(code: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            code: code.into(),
            values,
        }
    }
}

/// Formats as `CODE:v1,v2,...`, the same shape [`FromStr`] accepts.
impl fmt::Display for WorkoutPackage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.code, self.values.iter().join(","))
    }
}

impl FromStr for WorkoutPackage {
    type Err = WorkoutError;

    fn from_str(s: &str) -> Result<Self> {
        let (code, values) = s.split_once(':').ok_or_else(|| WorkoutError::InvalidValue {
            value: s.to_string(),
            reason: "expected CODE:v1,v2,...".to_string(),
        })?;
        let values = if values.trim().is_empty() {
            Vec::new()
        } else {
            values.split(',').map(parse_value).collect::<Result<_>>()?
        };
        Ok(Self::new(code.trim(), values))
    }
}

fn parse_value(raw: &str) -> Result<f64> {
    raw.trim()
        .parse::<f64>()
        .map_err(|e| WorkoutError::InvalidValue {
            value: raw.to_string(),
            reason: e.to_string(),
        })
}

#[derive(Deserialize, Clone, Debug)]
pub struct SampleSet {
    pub name: String,
    pub packages: Vec<WorkoutPackage>,
}

impl SampleSet {
    /// Looks up a sample set bundled with the binary.
    pub fn load(name: &str) -> Result<Self> {
        let file = SAMPLES_DIR
            .get_file(format!("{name}.json"))
            .ok_or_else(|| WorkoutError::InvalidValue {
                value: name.to_string(),
                reason: format!("no such sample set (available: {})", Self::names().join(", ")),
            })?;
        let contents = file.contents_utf8().ok_or_else(|| WorkoutError::InvalidValue {
            value: name.to_string(),
            reason: "sample set is not valid UTF-8".to_string(),
        })?;
        Ok(serde_json::from_str(contents)?)
    }

    pub fn names() -> Vec<&'static str> {
        SAMPLES_DIR
            .files()
            .filter_map(|file| file.path().file_stem()?.to_str())
            .sorted()
            .collect()
    }
}

/// Reads a JSON array of `{ "code": ..., "values": [...] }` objects.
pub fn from_json_reader<R: Read>(reader: R) -> Result<Vec<WorkoutPackage>> {
    Ok(serde_json::from_reader(reader)?)
}

/// Reads headerless CSV rows of `CODE,v1,v2,...`. Lines starting with `#` are skipped.
pub fn from_csv_reader<R: Read>(reader: R) -> Result<Vec<WorkoutPackage>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .from_reader(reader);

    let mut packages = Vec::new();
    for record in rdr.records() {
        let record = record?;
        let mut fields = record.iter();
        let Some(code) = fields.next() else {
            continue;
        };
        let values = fields.map(parse_value).collect::<Result<_>>()?;
        packages.push(WorkoutPackage::new(code, values));
    }
    Ok(packages)
}

/// Loads packages from a file, picking the format from its extension (`.csv`, anything else is JSON).
pub fn load_file(path: &Path) -> Result<Vec<WorkoutPackage>> {
    let file = File::open(path)?;
    let is_csv = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
    let packages = if is_csv {
        from_csv_reader(file)?
    } else {
        from_json_reader(file)?
    };
    debug!(path = %path.display(), count = packages.len(), "loaded workout packages");
    Ok(packages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_default_sample_set() {
        let set = SampleSet::load("default").unwrap();

        assert_eq!(set.name, "default");
        assert_eq!(
            set.packages,
            vec![
                WorkoutPackage::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
                WorkoutPackage::new("RUN", vec![15000.0, 1.0, 75.0]),
                WorkoutPackage::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
            ]
        );
    }

    #[test]
    fn test_sample_set_names() {
        let names = SampleSet::names();
        assert!(names.contains(&"default"));
        assert!(names.contains(&"mixed"));
    }

    #[test]
    fn test_missing_sample_set() {
        assert_matches!(
            SampleSet::load("nonexistent"),
            Err(WorkoutError::InvalidValue { value, .. }) if value == "nonexistent"
        );
    }

    #[test]
    fn test_parse_inline_spec() {
        let pkg: WorkoutPackage = "RUN:15000, 1, 75".parse().unwrap();
        assert_eq!(pkg, WorkoutPackage::new("RUN", vec![15000.0, 1.0, 75.0]));
        assert_eq!(pkg.to_string(), "RUN:15000,1,75");
    }

    #[test]
    fn test_parse_inline_spec_without_values() {
        let pkg: WorkoutPackage = "RUN:".parse().unwrap();
        assert!(pkg.values.is_empty());
    }

    #[test]
    fn test_parse_inline_spec_errors() {
        assert_matches!(
            "RUN".parse::<WorkoutPackage>(),
            Err(WorkoutError::InvalidValue { .. })
        );
        assert_matches!(
            "RUN:15000,fast,75".parse::<WorkoutPackage>(),
            Err(WorkoutError::InvalidValue { value, .. }) if value == "fast"
        );
    }

    #[test]
    fn test_json_reader() {
        let json = r#"[{"code": "SWM", "values": [720, 1, 80, 25, 40]}]"#;
        let packages = from_json_reader(json.as_bytes()).unwrap();
        assert_eq!(packages.len(), 1);
        assert_eq!(packages[0].code, "SWM");
        assert_eq!(packages[0].values[4], 40.0);
    }

    #[test]
    fn test_csv_reader() {
        let csv = "# code,action,duration,weight,...\nRUN,15000,1,75\nWLK, 9000, 1, 75, 180\n";
        let packages = from_csv_reader(csv.as_bytes()).unwrap();
        assert_eq!(
            packages,
            vec![
                WorkoutPackage::new("RUN", vec![15000.0, 1.0, 75.0]),
                WorkoutPackage::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
            ]
        );
    }

    #[test]
    fn test_csv_reader_bad_value() {
        let csv = "RUN,15000,one,75\n";
        assert_matches!(
            from_csv_reader(csv.as_bytes()),
            Err(WorkoutError::InvalidValue { .. })
        );
    }

    #[test]
    fn test_load_file_by_extension() {
        let dir = tempdir().unwrap();

        let csv_path = dir.path().join("workouts.csv");
        let mut f = File::create(&csv_path).unwrap();
        writeln!(f, "SWM,720,1,80,25,40").unwrap();
        assert_eq!(load_file(&csv_path).unwrap()[0].code, "SWM");

        let json_path = dir.path().join("workouts.json");
        std::fs::write(&json_path, r#"[{"code": "RUN", "values": [1, 2, 3]}]"#).unwrap();
        assert_eq!(load_file(&json_path).unwrap()[0].code, "RUN");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        assert_matches!(
            load_file(&dir.path().join("missing.json")),
            Err(WorkoutError::Io(_))
        );
    }
}
