//! Rendering helpers (plain text) for versioning information.
//!
//! The report layout is fixed; callers that embed it in other output should
//! treat it as opaque text.

use std::io::{self, Write};
use tracing::debug;
use versioning_types::{DateTime, VersioningInformation};

/// Continuation lines line up with the values after the field labels.
const INDENT: &str = "          ";

const BANNER_RULE: &str = "========================================";

/// Render the seven-line report, each line terminated by `\n`.
pub fn render_version(info: &VersioningInformation<'_>) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Project:  {} - {}\n",
        info.project.name, info.project.variant
    ));
    out.push_str(&format!("Version:  v{}\n", info.version));
    out.push_str(&format!(
        "Git:      {} - {}\n",
        info.git.reference,
        render_datetime(&info.git.commit.datetime)
    ));
    out.push_str(&format!("{}{}\n", INDENT, info.git.commit.hash));
    out.push_str(&format!("{}{}\n", INDENT, info.git.repository));
    out.push_str(&format!(
        "Build on: {}\n",
        render_datetime(&info.build.datetime)
    ));
    out.push_str(&format!(
        "Compiler: {} ({})\n",
        info.build.compiler.name, info.build.compiler.version
    ));
    out
}

/// `DD.MM.YYYY-hh:mm:ss`.
///
/// Every component is zero-padded to at least two digits. The year uses the
/// same minimum width, so four-digit years print in full.
pub fn render_datetime(dt: &DateTime) -> String {
    format!(
        "{:02}.{:02}.{:02}-{:02}:{:02}:{:02}",
        dt.date.day, dt.date.month, dt.date.year, dt.time.hour, dt.time.minute, dt.time.second
    )
}

/// Header printed by the example program before the report.
pub fn render_banner(title: &str) -> String {
    format!("{BANNER_RULE}\n{title}\n{BANNER_RULE}\n")
}

/// Write the banner to `out` and flush it.
pub fn write_banner<W: Write + ?Sized>(out: &mut W, title: &str) -> io::Result<()> {
    out.write_all(render_banner(title).as_bytes())?;
    out.flush()
}

/// Write the banner to standard output, ignoring write failures like
/// [`print_version`].
pub fn print_banner(title: &str) {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    if let Err(err) = write_banner(&mut handle, title) {
        debug!("failed to write banner to stdout: {}", err);
    }
}

/// Write the report to `out` and flush it.
pub fn write_version<W: Write + ?Sized>(
    out: &mut W,
    info: &VersioningInformation<'_>,
) -> io::Result<()> {
    out.write_all(render_version(info).as_bytes())?;
    out.flush()
}

/// Write the report to standard output.
///
/// Output is best effort: a closed or failing stdout is logged and otherwise
/// ignored.
pub fn print_version(info: &VersioningInformation<'_>) {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    if let Err(err) = write_version(&mut handle, info) {
        debug!("failed to write versioning report to stdout: {}", err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use versioning_types::{Date, Time};

    #[test]
    fn datetime_pads_single_digits() {
        let dt = DateTime::new(Date::new(3, 4, 2024), Time::new(5, 6, 7));
        assert_eq!(render_datetime(&dt), "03.04.2024-05:06:07");
    }

    #[test]
    fn datetime_year_keeps_all_digits() {
        let dt = DateTime::new(Date::new(31, 12, 1999), Time::new(23, 59, 59));
        assert_eq!(render_datetime(&dt), "31.12.1999-23:59:59");
    }

    #[test]
    fn datetime_short_year_is_padded() {
        let dt = DateTime::new(Date::new(1, 1, 7), Time::new(0, 0, 0));
        assert_eq!(render_datetime(&dt), "01.01.07-00:00:00");
    }

    #[test]
    fn banner_has_rules_around_title() {
        let banner = render_banner("Example");
        let lines: Vec<&str> = banner.lines().collect();
        assert_eq!(lines, vec![BANNER_RULE, "Example", BANNER_RULE]);
        assert_eq!(BANNER_RULE.len(), 40);
    }

    #[test]
    fn write_banner_matches_render() {
        let mut buf = Vec::new();
        write_banner(&mut buf, "Example").expect("write to vec");
        assert_eq!(String::from_utf8(buf).unwrap(), render_banner("Example"));
    }

    #[test]
    fn write_version_matches_render() {
        let info = VersioningInformation::default();
        let mut buf = Vec::new();
        write_version(&mut buf, &info).expect("write to vec");
        assert_eq!(String::from_utf8(buf).unwrap(), render_version(&info));
    }
}
