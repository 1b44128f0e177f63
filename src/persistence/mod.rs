//! Append-only timing log
//!
//! One record per run, plain text, never read back by the game.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use crate::bench::RunReport;
use crate::error::Result;

/// Render a run report in the log's line format
pub fn format_report(report: &RunReport) -> String {
    format!(
        "Execution time is {} seconds.\nCalculation time while using {} is {} nano seconds.\n",
        report.execution.as_secs(),
        report.backend.label(),
        report.calculation.as_nanos()
    )
}

/// Append a run report, creating the file if needed
pub fn append_report(path: &Path, report: &RunReport) -> Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    file.write_all(format_report(report).as_bytes())?;
    log::info!("Timing report appended to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::BackendKind;
    use std::time::Duration;

    fn temp_log(name: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!(
            "path_pong_{}_{}.txt",
            name,
            std::process::id()
        ));
        let _ = std::fs::remove_file(&path);
        path
    }

    #[test]
    fn test_format_report() {
        let report = RunReport {
            backend: BackendKind::Foreign,
            execution: Duration::from_millis(12_400),
            calculation: Duration::from_nanos(987_654),
        };
        assert_eq!(
            format_report(&report),
            "Execution time is 12 seconds.\nCalculation time while using FOREIGN is 987654 nano seconds.\n"
        );
    }

    #[test]
    fn test_append_never_truncates() {
        let path = temp_log("append");
        let native = RunReport {
            backend: BackendKind::Native,
            execution: Duration::from_secs(3),
            calculation: Duration::from_nanos(10),
        };
        let foreign = RunReport {
            backend: BackendKind::Foreign,
            ..native
        };

        append_report(&path, &native).unwrap();
        append_report(&path, &foreign).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 4);
        assert!(contents.starts_with("Execution time is 3 seconds."));
        assert!(contents.contains("using NATIVE"));
        assert!(contents.contains("using FOREIGN"));
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_append_to_missing_directory_fails() {
        let path = std::env::temp_dir()
            .join("path_pong_missing_dir_for_test")
            .join("nested")
            .join("log.txt");
        let report = RunReport {
            backend: BackendKind::Native,
            execution: Duration::ZERO,
            calculation: Duration::ZERO,
        };
        assert!(matches!(
            append_report(&path, &report),
            Err(crate::PongError::Io(_))
        ));
    }
}
