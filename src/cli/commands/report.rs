//! Report command handler
//!
//! Renders a class report of the startup gradebook as Markdown or HTML.

use gradebook::config::Config;
use gradebook::models::Gradebook;
use gradebook::report::{reporter_for, ReportContext, ReportFormat};
use gradebook::sample::startup_gradebook;
use gradebook::{error, info, verbose};
use std::error::Error;
use std::path::{Path, PathBuf};

/// Title used for generated reports
const REPORT_TITLE: &str = "Gradebook Report";

/// Base file name for reports written to the reports directory
const REPORT_STEM: &str = "gradebook_report";

/// Run the report command.
///
/// # Arguments
/// * `format` - Report format
/// * `output` - Optional output path; defaults to the configured reports directory
/// * `config` - Effective configuration (subjects, sample data, top N, reports directory)
///
/// # Returns
/// `false` if the report could not be produced
pub fn run(format: ReportFormat, output: Option<&Path>, config: &Config) -> bool {
    let gradebook = match startup_gradebook(config) {
        Ok(gradebook) => gradebook,
        Err(e) => {
            error!("Failed to build gradebook: {e}");
            return false;
        }
    };

    match write_report(&gradebook, format, output, config) {
        Ok(path) => {
            println!("✓ Report generated: {}", path.display());
            true
        }
        Err(e) => {
            error!("Report generation failed: {e}");
            eprintln!("✗ {e}");
            false
        }
    }
}

/// Render `gradebook` and write it to `output` (or the default report path)
///
/// # Errors
/// Returns an error if the gradebook is empty or the file cannot be written
pub fn write_report(
    gradebook: &Gradebook,
    format: ReportFormat,
    output: Option<&Path>,
    config: &Config,
) -> Result<PathBuf, Box<dyn Error>> {
    let path = output.map_or_else(|| default_report_path(config, format), Path::to_path_buf);

    let ctx = ReportContext::new(gradebook, REPORT_TITLE, config.top_n())?;
    verbose!("Rendering {format} report to {}", path.display());
    reporter_for(format).generate(&ctx, &path)?;

    info!("{format} report written for {} students", gradebook.len());
    Ok(path)
}

/// `<reports_dir>/gradebook_report.<ext>`
#[must_use]
pub fn default_report_path(config: &Config, format: ReportFormat) -> PathBuf {
    PathBuf::from(&config.paths.reports_dir).join(format!("{REPORT_STEM}.{}", format.extension()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use gradebook::sample::load_sample_data;

    fn config_in(dir: &Path) -> Config {
        let mut config = Config::from_defaults();
        config.paths.reports_dir = dir.to_string_lossy().to_string();
        config
    }

    #[test]
    fn test_default_report_path() {
        let config = config_in(Path::new("/tmp/reports"));
        assert_eq!(
            default_report_path(&config, ReportFormat::Markdown),
            PathBuf::from("/tmp/reports/gradebook_report.md")
        );
    }

    #[test]
    fn test_write_report_to_reports_dir() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(&dir.path().join("nested"));
        let mut gradebook = Gradebook::new();
        load_sample_data(&mut gradebook);

        let path = write_report(&gradebook, ReportFormat::Html, None, &config).unwrap();
        assert!(path.ends_with("nested/gradebook_report.html"));
        let content = std::fs::read_to_string(path).unwrap();
        assert!(content.contains("Dabe Dabe"));
    }

    #[test]
    fn test_write_report_rejects_empty_gradebook() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        let output = dir.path().join("out.md");

        let result = write_report(&Gradebook::new(), ReportFormat::Markdown, Some(&output), &config);
        assert!(result.is_err());
        assert!(!output.exists());
    }
}
