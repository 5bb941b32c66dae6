use std::{
    collections::BTreeMap,
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::Path,
};

use crate::error::Result;

pub type Query = String;
pub type Url = String;

/// Query text mapped to its result URLs, best result first.
///
/// Keys are kept sorted so iteration, and everything derived from it, is reproducible.
pub type ResultSet = BTreeMap<Query, Vec<Url>>;

pub fn load(path: &Path) -> Result<ResultSet> {
    Ok(serde_json::from_reader(BufReader::new(File::open(path)?))?)
}

pub fn save(path: &Path, results: &ResultSet) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, results)?;
    writeln!(writer)?;
    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.json");

        let mut results = ResultSet::new();
        results.insert(
            "rust borrow checker".to_string(),
            vec![
                "https://doc.rust-lang.org/book/ch04-02-references-and-borrowing.html".to_string(),
                "https://rustc-dev-guide.rust-lang.org/borrow_check.html".to_string(),
            ],
        );
        results.insert("empty".to_string(), Vec::new());

        save(&path, &results).unwrap();
        assert_eq!(load(&path).unwrap(), results);
    }

    #[test]
    fn keeps_url_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("google.json");
        std::fs::write(&path, r#"{"q": ["https://c", "https://a", "https://b"]}"#).unwrap();

        let results = load(&path).unwrap();
        assert_eq!(results["q"], vec!["https://c", "https://a", "https://b"]);
    }

    #[test]
    fn pretty_prints_with_sorted_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");

        let mut results = ResultSet::new();
        results.insert("b".to_string(), vec!["https://b".to_string()]);
        results.insert("a".to_string(), vec!["https://a".to_string()]);
        save(&path, &results).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            written,
            "{\n  \"a\": [\n    \"https://a\"\n  ],\n  \"b\": [\n    \"https://b\"\n  ]\n}\n"
        );
    }

    #[test]
    fn malformed_json_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "[1, 2, 3]").unwrap();

        assert!(matches!(load(&path), Err(crate::error::Error::SerdeJson(_))));
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            load(&dir.path().join("nope.json")),
            Err(crate::error::Error::IO(_))
        ));
    }
}
