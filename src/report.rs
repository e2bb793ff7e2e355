//! Human-readable comparison report.
//!
//! The layout is fixed: per-file parse warnings, totals, segment lists, then
//! either the identical banner or the three difference listings.

use std::fmt;

use crate::compare::{DiffResult, compare};
use crate::io::ParsedHex;

const RULE: &str = "================================================================================";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOptions {
    /// Entries shown per difference category before `... and N more`.
    pub max_listed: usize,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self { max_listed: 10 }
    }
}

/// One side of the comparison: the name it is reported under and its parse output.
#[derive(Debug, Clone, Copy)]
pub struct FileSummary<'a> {
    pub name: &'a str,
    pub parsed: &'a ParsedHex,
}

impl<'a> FileSummary<'a> {
    pub fn new(name: &'a str, parsed: &'a ParsedHex) -> Self {
        Self { name, parsed }
    }
}

#[derive(Debug, Clone)]
pub struct ComparisonReport<'a> {
    first: FileSummary<'a>,
    second: FileSummary<'a>,
    diff: DiffResult<'a>,
    options: ReportOptions,
}

impl<'a> ComparisonReport<'a> {
    pub fn new(first: FileSummary<'a>, second: FileSummary<'a>) -> Self {
        let diff = compare(&first.parsed.space, &second.parsed.space);
        Self {
            first,
            second,
            diff,
            options: ReportOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ReportOptions) -> Self {
        self.options = options;
        self
    }

    pub fn is_identical(&self) -> bool {
        self.diff.is_identical()
    }

    fn write_warnings(f: &mut fmt::Formatter<'_>, file: &FileSummary<'_>) -> fmt::Result {
        writeln!(f, "Parsing {}...", file.name)?;
        for diagnostic in &file.parsed.diagnostics {
            writeln!(f, "Warning: {diagnostic}")?;
        }
        Ok(())
    }

    fn write_totals(
        f: &mut fmt::Formatter<'_>,
        label: &str,
        file: &FileSummary<'_>,
    ) -> fmt::Result {
        writeln!(f, "{label}: {}", file.name)?;
        writeln!(f, "  Total addresses: {}", file.parsed.space.len())?;
        writeln!(f, "  Total bytes: {}", file.parsed.space.total_bytes())
    }

    fn write_segments(
        f: &mut fmt::Formatter<'_>,
        label: &str,
        file: &FileSummary<'_>,
    ) -> fmt::Result {
        writeln!(f, "{label} segments:")?;
        for segment in file.parsed.space.segments() {
            writeln!(f, "  {segment}")?;
        }
        Ok(())
    }

    fn write_differences(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let max = self.options.max_listed;

        if !self.diff.only_in_first.is_empty() {
            writeln!(f, "Only in {}:", self.first.name)?;
            write_limited(f, &self.diff.only_in_first, max, |f, (addr, data)| {
                writeln!(f, "  0x{addr:08X}: {}", HexBytes(data))
            })?;
        }

        if !self.diff.only_in_second.is_empty() {
            writeln!(f)?;
            writeln!(f, "Only in {}:", self.second.name)?;
            write_limited(f, &self.diff.only_in_second, max, |f, (addr, data)| {
                writeln!(f, "  0x{addr:08X}: {}", HexBytes(data))
            })?;
        }

        if !self.diff.differing.is_empty() {
            writeln!(f)?;
            writeln!(f, "Data differs at same address:")?;
            write_limited(f, &self.diff.differing, max, |f, d| {
                writeln!(f, "  0x{:08X}:", d.address)?;
                writeln!(f, "    File1: {}", HexBytes(d.first))?;
                writeln!(f, "    File2: {}", HexBytes(d.second))
            })?;
        }

        Ok(())
    }
}

impl fmt::Display for ComparisonReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Self::write_warnings(f, &self.first)?;
        Self::write_warnings(f, &self.second)?;

        write_banner(f, "Comparison Results:")?;
        Self::write_totals(f, "File 1", &self.first)?;
        writeln!(f)?;
        Self::write_totals(f, "File 2", &self.second)?;

        write_banner(f, "Address Ranges:")?;
        Self::write_segments(f, "File 1", &self.first)?;
        writeln!(f)?;
        Self::write_segments(f, "File 2", &self.second)?;

        if self.diff.is_identical() {
            return write_banner(f, "✓ FILES ARE IDENTICAL!");
        }

        write_banner(f, "Differences Found:")?;
        self.write_differences(f)
    }
}

fn write_banner(f: &mut fmt::Formatter<'_>, title: &str) -> fmt::Result {
    writeln!(f)?;
    writeln!(f, "{RULE}")?;
    writeln!(f, "{title}")?;
    writeln!(f, "{RULE}")?;
    writeln!(f)
}

fn write_limited<T>(
    f: &mut fmt::Formatter<'_>,
    items: &[T],
    max: usize,
    mut write_item: impl FnMut(&mut fmt::Formatter<'_>, &T) -> fmt::Result,
) -> fmt::Result {
    for item in items.iter().take(max) {
        write_item(f, item)?;
    }
    if items.len() > max {
        writeln!(f, "  ... and {} more", items.len() - max)?;
    }
    Ok(())
}

/// Lowercase hex, no separators.
struct HexBytes<'a>(&'a [u8]);

impl fmt::Display for HexBytes<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|b| write!(f, "{b:02x}"))
    }
}
