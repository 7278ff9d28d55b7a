//! Sinks for diagnostic findings.
//!
//! The pipeline only ever appends findings, in order, to a [`Reporter`].
//! [`LineReporter`] renders them as text lines; [`MemoryReporter`] keeps
//! them for tests and report artifacts.

use crate::finding::Finding;
use std::io::{self, Write};

/// Append-only, ordered sink for findings.
pub trait Reporter {
    fn report(&mut self, finding: &Finding) -> io::Result<()>;
}

impl<R: Reporter + ?Sized> Reporter for &mut R {
    fn report(&mut self, finding: &Finding) -> io::Result<()> {
        (**self).report(finding)
    }
}

/// Writes one line per finding.
#[derive(Debug)]
pub struct LineReporter<W: Write> {
    out: W,
}

impl<W: Write> LineReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl LineReporter<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Reporter for LineReporter<W> {
    fn report(&mut self, finding: &Finding) -> io::Result<()> {
        writeln!(self.out, "{}", finding)
    }
}

/// Collects findings in memory.
#[derive(Debug, Default, Clone)]
pub struct MemoryReporter {
    findings: Vec<Finding>,
}

impl MemoryReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    /// Rendered lines, in report order.
    pub fn lines(&self) -> Vec<String> {
        self.findings.iter().map(ToString::to_string).collect()
    }

    /// Drain collected findings, leaving the reporter empty.
    pub fn take(&mut self) -> Vec<Finding> {
        std::mem::take(&mut self.findings)
    }
}

impl Reporter for MemoryReporter {
    fn report(&mut self, finding: &Finding) -> io::Result<()> {
        self.findings.push(*finding);
        Ok(())
    }
}

/// Forwards every finding to two reporters, first then second.
pub struct TeeReporter<A, B> {
    first: A,
    second: B,
}

impl<A: Reporter, B: Reporter> TeeReporter<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }

    pub fn into_parts(self) -> (A, B) {
        (self.first, self.second)
    }
}

impl<A: Reporter, B: Reporter> Reporter for TeeReporter<A, B> {
    fn report(&mut self, finding: &Finding) -> io::Result<()> {
        self.first.report(finding)?;
        self.second.report(finding)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DescriptiveField;

    #[test]
    fn test_line_reporter_writes_lines() {
        let mut reporter = LineReporter::new(Vec::new());
        reporter
            .report(&Finding::missing_field(DescriptiveField::Make))
            .expect("write");
        reporter.report(&Finding::AllPartsWorking).expect("write");

        let out = String::from_utf8(reporter.into_inner()).expect("utf8");
        assert_eq!(out, "Car is missing Make\nAll parts found to be working\n");
    }

    #[test]
    fn test_memory_reporter_take() {
        let mut reporter = MemoryReporter::new();
        reporter.report(&Finding::AllPartsWorking).expect("report");
        assert_eq!(reporter.lines(), vec!["All parts found to be working"]);

        let taken = reporter.take();
        assert_eq!(taken, vec![Finding::AllPartsWorking]);
        assert!(reporter.findings().is_empty());
    }

    #[test]
    fn test_tee_reporter_feeds_both() {
        let mut tee = TeeReporter::new(LineReporter::new(Vec::new()), MemoryReporter::new());
        tee.report(&Finding::missing_field(DescriptiveField::Year))
            .expect("report");

        let (lines, memory) = tee.into_parts();
        assert_eq!(lines.into_inner(), b"Car is missing Year\n".to_vec());
        assert_eq!(memory.findings().len(), 1);
    }
}
