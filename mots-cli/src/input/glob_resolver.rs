//! File pattern resolution using glob

use crate::error::CliError;
use anyhow::{Context, Result};
use glob::glob;
use std::path::PathBuf;

/// Resolve file patterns to actual file paths
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for pattern in patterns {
        let paths = glob(pattern).map_err(|_| CliError::InvalidPattern(pattern.clone()))?;

        for path_result in paths {
            let path =
                path_result.with_context(|| format!("Error resolving pattern: {pattern}"))?;

            if path.is_file() {
                files.push(path);
            }
        }
    }

    if files.is_empty() {
        anyhow::bail!("No files found matching the provided patterns");
    }

    // Remove duplicates and sort
    files.sort();
    files.dedup();

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_sorted_and_deduplicated() {
        let temp_dir = TempDir::new().unwrap();
        for name in ["b.txt", "a.txt", "c.md"] {
            std::fs::write(temp_dir.path().join(name), "x").unwrap();
        }
        let base = temp_dir.path().display();
        let files = resolve_patterns(&[format!("{base}/*.txt"), format!("{base}/a.*")]).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.txt", "b.txt"]);
    }

    #[test]
    fn test_invalid_and_empty_patterns() {
        let err = resolve_patterns(&["[".to_string()]).unwrap_err();
        assert!(err.downcast_ref::<CliError>().is_some());
        assert!(resolve_patterns(&["/nonexistent/*.txt".to_string()]).is_err());
    }
}
