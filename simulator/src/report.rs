//! Statistics reporting: console summary and append-only CSV export.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;
use wheelhouse_types::RoundStats;

/// Human-readable end-of-run summary.
///
/// The win/loss ratio is reported as a count pair, never a quotient.
pub fn summary(stats: &RoundStats) -> String {
    let (wins, losses) = stats.ratio();
    format!(
        "rounds:          {}\n\
         won/lost:        {}/{}\n\
         max streak hits: {}\n\
         won amount:      {:.3}\n\
         lost amount:     {:.3}\n\
         net profit:      {:.3}",
        stats.trials(),
        wins,
        losses,
        stats.max_streak_hits,
        stats.win_amount,
        stats.loss_amount,
        stats.net_profit(),
    )
}

/// Append one statistics record to `path`, creating the file if needed.
///
/// Each write is independent: one line, no header, no schema versioning.
/// Failures surface to the caller; in-memory statistics are unaffected.
pub fn append_csv(path: &Path, stats: &RoundStats) -> io::Result<()> {
    let mut file = OpenOptions::new().append(true).create(true).open(path)?;
    file.write_all(stats.csv_record().as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RoundStats {
        RoundStats {
            win_amount: 2.04,
            loss_amount: -7.0,
            win_count: 1,
            loss_count: 3,
            max_streak_hits: 1,
        }
    }

    #[test]
    fn test_summary_reports_ratio_as_pair() {
        let rendered = summary(&sample());
        assert!(rendered.contains("won/lost:        1/3"));
        assert!(rendered.contains("rounds:          4"));
        assert!(rendered.contains("net profit:      -4.960"));
    }

    #[test]
    fn test_append_csv_accumulates_records() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("results.csv");

        append_csv(&path, &sample()).expect("first append");
        append_csv(&path, &sample()).expect("second append");

        let contents = std::fs::read_to_string(&path).expect("read back");
        assert_eq!(contents, "2.04, -7, 1, 3\n2.04, -7, 1, 3\n");
    }
}
