use std::{
    fs::File,
    io::{BufRead, BufReader, Read},
    path::Path,
};

use crate::{error::Result, result_set::Query};

/// Reads one query per line, trimming whitespace and skipping blank lines.
pub fn read_queries(path: &Path) -> Result<Vec<Query>> {
    parse_queries(File::open(path)?)
}

pub fn parse_queries<R: Read>(reader: R) -> Result<Vec<Query>> {
    let mut queries = Vec::new();

    for line in BufReader::new(reader).lines() {
        let line = line?;
        let query = line.trim();
        if !query.is_empty() {
            queries.push(query.to_string());
        }
    }

    Ok(queries)
}
