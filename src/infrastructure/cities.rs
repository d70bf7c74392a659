use std::path::Path;

use csv::ReaderBuilder;

use crate::domain::error::{AppError, Result};

/// Load the ordered city list from a CSV file with a `city` column.
/// Order is preserved and nothing is filtered or deduplicated; the input
/// file is the single source of truth for what gets processed.
pub fn load_cities(path: &Path) -> Result<Vec<String>> {
    let mut reader = ReaderBuilder::new().from_path(path).map_err(|e| {
        AppError::InputError(format!("Failed to open cities file {}: {}", path.display(), e))
    })?;

    let headers = reader
        .headers()
        .map_err(|e| AppError::InputError(format!("Failed to read CSV headers: {}", e)))?
        .clone();
    let city_index = headers
        .iter()
        .position(|h| h == "city")
        .ok_or_else(|| {
            AppError::InputError(format!(
                "Cities file {} has no 'city' column",
                path.display()
            ))
        })?;

    let mut cities = Vec::new();
    for (row, result) in reader.records().enumerate() {
        let record = result.map_err(|e| {
            AppError::InputError(format!("Failed to parse CSV row {}: {}", row + 1, e))
        })?;
        if let Some(city) = record.get(city_index) {
            cities.push(city.to_string());
        }
    }

    Ok(cities)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(dir: &tempfile::TempDir, content: &str) -> std::path::PathBuf {
        let path = dir.path().join("cities.csv");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_preserves_order_and_duplicates() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(&dir, "city,state\nBoston,MA\nAustin,TX\nBoston,MA\n");
        let cities = load_cities(&path).unwrap();
        assert_eq!(cities, vec!["Boston", "Austin", "Boston"]);
    }

    #[test]
    fn test_missing_city_column_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(&dir, "name,state\nBoston,MA\n");
        let err = load_cities(&path).unwrap_err();
        assert!(matches!(err, AppError::InputError(_)));
    }

    #[test]
    fn test_missing_file_is_fatal() {
        let err = load_cities(Path::new("/nonexistent/cities.csv")).unwrap_err();
        assert!(matches!(err, AppError::InputError(_)));
    }
}
