use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use serde::Serialize;
use std::path::Path;

/// Write `value` as pretty JSON, replacing `path` atomically.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;

    serde_json::to_writer_pretty(&mut file, value).context("Failed to serialize results")?;

    file.commit()
        .with_context(|| format!("Failed to write results to {}", path.display()))?;

    tracing::info!(path = %path.display(), "wrote results");
    Ok(())
}

pub fn to_json_string<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("Failed to serialize results")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::insights::farm_market_insights;
    use std::env;

    #[test]
    fn test_write_json_replaces_file() {
        let temp_path = env::temp_dir().join("crop_advisor_test_write.json");
        let _ = std::fs::remove_file(&temp_path);

        write_json(&temp_path, &vec!["Wheat", "Rice"]).unwrap();
        write_json(&temp_path, &vec!["Millet"]).unwrap();

        let content = std::fs::read_to_string(&temp_path).unwrap();
        let crops: Vec<String> = serde_json::from_str(&content).unwrap();
        assert_eq!(crops, vec!["Millet"]);

        let _ = std::fs::remove_file(&temp_path);
    }

    #[test]
    fn test_insights_serialize_with_labels() {
        let insights = farm_market_insights("Loam", None, None, 7);
        let json = to_json_string(&insights).unwrap();
        assert!(json.contains("\"climate_zone\": \"Unknown\""));
        assert!(json.contains("\"current_season\": \"Monsoon\""));
    }

    #[test]
    fn test_write_json_missing_directory() {
        let path = Path::new("/nonexistent/dir/out.json");
        assert!(write_json(path, &1).is_err());
    }
}
