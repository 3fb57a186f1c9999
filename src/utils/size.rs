//! Size formatting utilities.
//!
//! This module turns a raw byte count into the strings printed by the CLI:
//! either the plain count with a `B` suffix, or a value scaled to the largest
//! fitting unit with one fractional digit.

use std::path::Path;

use crate::config::{OutputOptions, SizeBase};

/// `(threshold, divisor, label)` for each binary unit, smallest first.
const BINARY_UNITS: [(u64, u64, &str); 7] = [
    (0, 1, "B"),
    (1 << 10, 1 << 10, "KB"),
    (1 << 20, 1 << 20, "MB"),
    (1 << 30, 1 << 30, "GB"),
    (1 << 40, 1 << 40, "TB"),
    (1 << 50, 1 << 50, "PB"),
    (1 << 60, 1 << 60, "EB"),
];

/// `(threshold, divisor, label)` for each decimal unit, smallest first.
const DECIMAL_UNITS: [(u64, u64, &str); 7] = [
    (0, 1, "B"),
    (1_000, 1_000, "KB"),
    (1_000_000, 1_000_000, "MB"),
    (1_000_000_000, 1_000_000_000, "GB"),
    (1_000_000_000_000, 1_000_000_000_000, "TB"),
    (1_000_000_000_000_000, 1_000_000_000_000_000, "PB"),
    (1_000_000_000_000_000_000, 1_000_000_000_000_000_000, "EB"),
];

/// Render a byte count without scaling, e.g. `1000000B`.
#[must_use]
pub fn default_format(bytes: u64) -> String {
    format!("{bytes}B")
}

/// Render a byte count scaled by powers of 1024, e.g. `976.6KB`.
///
/// The value is scaled to the largest unit from `B` up to `EB` that it
/// reaches, and always printed with one fractional digit (`1` renders as
/// `1.0B`).
///
/// # Examples
///
/// ```
/// # use path_size::utils::human_format;
/// assert_eq!(human_format(1024), "1.0KB");
/// assert_eq!(human_format(1_000_000), "976.6KB");
/// ```
#[must_use]
pub fn human_format(bytes: u64) -> String {
    human_format_with(bytes, SizeBase::Binary)
}

/// Render a byte count scaled in the given base.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn human_format_with(bytes: u64, base: SizeBase) -> String {
    let units = match base {
        SizeBase::Binary => &BINARY_UNITS,
        SizeBase::Decimal => &DECIMAL_UNITS,
    };

    let (_, divisor, label) = units
        .iter()
        .rev()
        .find(|(threshold, _, _)| bytes >= *threshold)
        .copied()
        .unwrap_or(units[0]);

    let value = bytes as f64 / divisor as f64;
    format!("{value:.1}{label}")
}

/// Render a byte count according to the output options.
#[must_use]
pub fn format_size(bytes: u64, options: &OutputOptions) -> String {
    if options.humanize {
        human_format_with(bytes, options.base)
    } else {
        default_format(bytes)
    }
}

/// Compose the output line for a measured path: `<size>\t<path>\n`.
#[must_use]
pub fn render_line(bytes: u64, path: &Path, options: &OutputOptions) -> String {
    format!("{}\t{}\n", format_size(bytes, options), path.display())
}

/// Compose the output line using binary scaling when `humanize` is set.
///
/// # Examples
///
/// ```
/// # use std::path::Path;
/// # use path_size::utils::build_output;
/// assert_eq!(build_output(1_000_000, Path::new("test"), false), "1000000B\ttest\n");
/// assert_eq!(build_output(1_000_000, Path::new("test"), true), "976.6KB\ttest\n");
/// ```
#[must_use]
pub fn build_output(bytes: u64, path: &Path, humanize: bool) -> String {
    render_line(bytes, path, &OutputOptions::new(humanize))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_format() {
        assert_eq!(default_format(0), "0B");
        assert_eq!(default_format(1), "1B");
        assert_eq!(default_format(1023), "1023B");
        assert_eq!(default_format(1_000_000), "1000000B");
    }

    #[test]
    fn test_human_format_bytes_tier() {
        assert_eq!(human_format(0), "0.0B");
        assert_eq!(human_format(1), "1.0B");
        assert_eq!(human_format(68), "68.0B");
        assert_eq!(human_format(1023), "1023.0B");
    }

    #[test]
    fn test_human_format_every_unit() {
        let labels = ["B", "KB", "MB", "GB", "TB", "PB", "EB"];

        for (power, label) in labels.iter().enumerate() {
            let bytes = 1u64 << (10 * power);
            assert_eq!(human_format(bytes), format!("1.0{label}"));
            assert_eq!(human_format(3 * bytes), format!("3.0{label}"));
        }
    }

    #[test]
    fn test_human_format_fractions() {
        assert_eq!(human_format(1_000_000), "976.6KB");
        assert_eq!(human_format(5529), "5.4KB");
        assert_eq!(human_format(1536), "1.5KB");
        assert_eq!(human_format(10 * 1024 * 1024 + 512 * 1024), "10.5MB");
    }

    #[test]
    fn test_human_format_stops_at_exabytes() {
        assert_eq!(human_format(u64::MAX), "16.0EB");
        assert_eq!(human_format(8 << 60), "8.0EB");
    }

    #[test]
    fn test_human_format_decimal_base() {
        assert_eq!(human_format_with(999, SizeBase::Decimal), "999.0B");
        assert_eq!(human_format_with(1_000, SizeBase::Decimal), "1.0KB");
        assert_eq!(human_format_with(1_000_000, SizeBase::Decimal), "1.0MB");
        assert_eq!(human_format_with(5529, SizeBase::Decimal), "5.5KB");
        assert_eq!(
            human_format_with(2_000_000_000_000_000_000, SizeBase::Decimal),
            "2.0EB"
        );
    }

    #[test]
    fn test_format_size_follows_options() {
        let raw = OutputOptions::new(false);
        let binary = OutputOptions::new(true);
        let decimal = OutputOptions::new(true).with_base(SizeBase::Decimal);

        assert_eq!(format_size(1_000_000, &raw), "1000000B");
        assert_eq!(format_size(1_000_000, &binary), "976.6KB");
        assert_eq!(format_size(1_000_000, &decimal), "1.0MB");
    }

    #[test]
    fn test_raw_format_ignores_base() {
        let opts = OutputOptions::new(false).with_base(SizeBase::Decimal);

        assert_eq!(format_size(2048, &opts), "2048B");
    }

    #[test]
    fn test_build_output() {
        assert_eq!(
            build_output(1_000_000, Path::new("test"), false),
            "1000000B\ttest\n"
        );
        assert_eq!(
            build_output(1_000_000, Path::new("test"), true),
            "976.6KB\ttest\n"
        );
    }

    #[test]
    fn test_render_line_decimal() {
        let opts = OutputOptions::new(true).with_base(SizeBase::Decimal);

        assert_eq!(
            render_line(1_000_000, Path::new("dir/file"), &opts),
            "1.0MB\tdir/file\n"
        );
    }
}
