use std::{fs::File, io, path::Path};

use serde::Serialize;

use crate::{
    compare::QueryMetric,
    error::{Error, Result},
};

pub const HEADER: [&str; 4] = [
    "Queries",
    "Number of Overlapping Results",
    "Percent Overlap",
    "Spearman Correlation",
];

const AVERAGES_LABEL: &str = "Averages";

/// How data rows are labelled in rendered output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RowLabels {
    /// "Query 1", "Query 2", ... by position.
    #[default]
    Sequential,
    /// The original query text.
    Query,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Averages {
    pub overlap_count: f64,
    pub overlap_percent: f64,
    pub correlation: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub rows: Vec<QueryMetric>,
    pub averages: Averages,
}

/// Builds a report whose averages are the column means of `metrics`.
///
/// An empty `metrics` has no mean and is reported as [`Error::NoQueriesCompared`].
#[allow(clippy::cast_precision_loss)]
pub fn aggregate(metrics: Vec<QueryMetric>) -> Result<Report> {
    if metrics.is_empty() {
        return Err(Error::NoQueriesCompared);
    }

    let n = metrics.len() as f64;
    let mean = |column: fn(&QueryMetric) -> f64| metrics.iter().map(column).sum::<f64>() / n;

    let averages = Averages {
        overlap_count: mean(|m| m.overlap_count),
        overlap_percent: mean(|m| m.overlap_percent),
        correlation: mean(|m| m.correlation),
    };

    Ok(Report {
        rows: metrics,
        averages,
    })
}

impl Report {
    /// Data rows followed by the averages row, numbers to two decimal places.
    pub fn records(&self, labels: RowLabels) -> Vec<[String; 4]> {
        let mut records: Vec<[String; 4]> = self
            .rows
            .iter()
            .enumerate()
            .map(|(i, metric)| {
                let label = match labels {
                    RowLabels::Sequential => format!("Query {}", i + 1),
                    RowLabels::Query => metric.query.clone(),
                };
                record(
                    label,
                    metric.overlap_count,
                    metric.overlap_percent,
                    metric.correlation,
                )
            })
            .collect();

        records.push(record(
            AVERAGES_LABEL.to_string(),
            self.averages.overlap_count,
            self.averages.overlap_percent,
            self.averages.correlation,
        ));

        records
    }

    pub fn write_csv<W: io::Write>(&self, writer: W, labels: RowLabels) -> Result<()> {
        let mut writer = csv::Writer::from_writer(writer);

        writer.write_record(HEADER)?;
        for record in self.records(labels) {
            writer.write_record(&record)?;
        }
        writer.flush()?;

        Ok(())
    }

    pub fn save_csv(&self, path: &Path, labels: RowLabels) -> Result<()> {
        self.write_csv(File::create(path)?, labels)
    }
}

fn record(
    label: String,
    overlap_count: f64,
    overlap_percent: f64,
    correlation: f64,
) -> [String; 4] {
    [
        label,
        format!("{overlap_count:.2}"),
        format!("{overlap_percent:.2}"),
        format!("{correlation:.2}"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metric(query: &str, count: f64, percent: f64, correlation: f64) -> QueryMetric {
        QueryMetric::new(query.to_string(), count, percent, correlation)
    }

    #[test]
    fn averages_are_column_means() {
        let report = aggregate(vec![
            metric("a", 3.0, 30.0, 0.5),
            metric("b", 5.0, 50.0, -0.5),
            metric("c", 1.0, 10.0, 1.0),
        ])
        .unwrap();

        assert_eq!(report.rows.len(), 3);
        assert_eq!(report.averages.overlap_count, 3.0);
        assert_eq!(report.averages.overlap_percent, 30.0);
        assert!((report.averages.correlation - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn single_row_average_is_the_row() {
        let report = aggregate(vec![metric("a", 7.0, 70.0, 0.123_456)]).unwrap();
        assert_eq!(
            report.averages,
            Averages {
                overlap_count: 7.0,
                overlap_percent: 70.0,
                correlation: 0.123_456
            }
        );
    }

    #[test]
    fn empty_metrics_are_an_error() {
        assert!(matches!(aggregate(Vec::new()), Err(Error::NoQueriesCompared)));
    }

    #[test]
    fn sequential_labels() {
        let report = aggregate(vec![
            metric("first", 3.0, 100.0, 0.5),
            metric("second", 1.0, 10.0, -1.0),
        ])
        .unwrap();

        let records = report.records(RowLabels::Sequential);
        assert_eq!(
            records,
            vec![
                ["Query 1", "3.00", "100.00", "0.50"].map(String::from),
                ["Query 2", "1.00", "10.00", "-1.00"].map(String::from),
                ["Averages", "2.00", "55.00", "-0.25"].map(String::from),
            ]
        );
    }

    #[test]
    fn query_labels() {
        let report = aggregate(vec![metric("what is rust", 3.0, 100.0, 0.5)]).unwrap();

        let records = report.records(RowLabels::Query);
        assert_eq!(records[0][0], "what is rust");
        assert_eq!(records[1][0], "Averages");
    }

    #[test]
    fn writes_csv() {
        let report = aggregate(vec![metric("q1", 3.0, 100.0, 0.5)]).unwrap();

        let mut buffer = Vec::new();
        report.write_csv(&mut buffer, RowLabels::Sequential).unwrap();

        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "Queries,Number of Overlapping Results,Percent Overlap,Spearman Correlation\n\
             Query 1,3.00,100.00,0.50\n\
             Averages,3.00,100.00,0.50\n"
        );
    }

    #[test]
    fn csv_quotes_query_text_with_commas() {
        let report = aggregate(vec![metric("salt, pepper", 1.0, 10.0, 0.0)]).unwrap();

        let mut buffer = Vec::new();
        report.write_csv(&mut buffer, RowLabels::Query).unwrap();

        let written = String::from_utf8(buffer).unwrap();
        assert!(written.contains("\"salt, pepper\",1.00,10.00,0.00\n"));
    }
}
