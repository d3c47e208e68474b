//! Input handling module

pub mod file_reader;
pub mod glob_resolver;

pub use file_reader::FileReader;
pub use glob_resolver::resolve_patterns;

use anyhow::Result;
use std::io::Read;

/// One text to analyse, labelled by where it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    /// File path, `<args>` or `<stdin>`
    pub name: String,
    pub text: String,
}

/// Gather sources: glob patterns first, else literal text, else stdin
pub fn collect_sources(patterns: &[String], literal: &[String]) -> Result<Vec<Source>> {
    if !patterns.is_empty() {
        return resolve_patterns(patterns)?
            .into_iter()
            .map(|path| {
                Ok(Source {
                    name: path.display().to_string(),
                    text: FileReader::read_text(&path)?,
                })
            })
            .collect();
    }

    if !literal.is_empty() {
        return Ok(vec![Source {
            name: "<args>".to_string(),
            text: literal.join(" "),
        }]);
    }

    let mut text = String::new();
    std::io::stdin().read_to_string(&mut text)?;
    Ok(vec![Source {
        name: "<stdin>".to_string(),
        text,
    }])
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_literal_text_is_joined() {
        let sources = collect_sources(&[], &["La".to_string(), "vie.".to_string()]).unwrap();
        assert_eq!(
            sources,
            vec![Source {
                name: "<args>".to_string(),
                text: "La vie.".to_string()
            }]
        );
    }

    #[test]
    fn test_patterns_take_precedence() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("a.txt");
        std::fs::write(&path, "été").unwrap();

        let pattern = temp_dir.path().join("*.txt").display().to_string();
        let sources = collect_sources(&[pattern], &["ignored".to_string()]).unwrap();
        assert_eq!(sources.len(), 1);
        assert_eq!(sources[0].text, "été");
    }
}
