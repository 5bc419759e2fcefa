//! # Report Module
//!
//! Report assembly: a `Report` value populated step-by-step by one of two
//! interchangeable builder strategies, sequenced by a director.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Report Construction Flow                             │
//! │                                                                         │
//! │  ReportDirector::construct(builder, h, c, f)                            │
//! │       │                                                                 │
//! │       ├── builder.set_header(h)   ─┐                                    │
//! │       ├── builder.set_content(c)   ├─ same sequence for every strategy  │
//! │       ├── builder.set_footer(f)   ─┘                                    │
//! │       └── builder.into_report()  ──► Report { header, content, footer } │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Report
// =============================================================================

/// A finished (or partially assembled) report.
///
/// Fields default to empty strings; a builder that finalizes early simply
/// yields a partially-populated report rather than failing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub header: String,
    pub content: String,
    pub footer: String,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Header: {}", self.header)?;
        writeln!(f, "Content: {}", self.content)?;
        write!(f, "Footer: {}", self.footer)
    }
}

// =============================================================================
// Builder Strategies
// =============================================================================

/// The three-call assembly contract shared by every report strategy.
///
/// The variant set is closed (text and HTML); the trait exists so the
/// director can drive any strategy through the identical sequence.
pub trait ReportBuilder {
    fn set_header(&mut self, header: &str);
    fn set_content(&mut self, content: &str);
    fn set_footer(&mut self, footer: &str);

    /// Takes the assembled report out of the builder, leaving it empty.
    /// Unset fields come back as empty strings.
    fn into_report(&mut self) -> Report;
}

/// Plain-text strategy: labels each section with a `Text <Section>:` prefix.
#[derive(Debug, Default)]
pub struct TextReportBuilder {
    report: Report,
}

impl TextReportBuilder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReportBuilder for TextReportBuilder {
    fn set_header(&mut self, header: &str) {
        self.report.header = format!("Text Header: {}", header);
    }

    fn set_content(&mut self, content: &str) {
        self.report.content = format!("Text Content: {}", content);
    }

    fn set_footer(&mut self, footer: &str) {
        self.report.footer = format!("Text Footer: {}", footer);
    }

    fn into_report(&mut self) -> Report {
        std::mem::take(&mut self.report)
    }
}

/// HTML strategy: wraps each section in a tag.
#[derive(Debug, Default)]
pub struct HtmlReportBuilder {
    report: Report,
}

impl HtmlReportBuilder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReportBuilder for HtmlReportBuilder {
    fn set_header(&mut self, header: &str) {
        self.report.header = format!("<h1>{}</h1>", header);
    }

    fn set_content(&mut self, content: &str) {
        self.report.content = format!("<p>{}</p>", content);
    }

    fn set_footer(&mut self, footer: &str) {
        self.report.footer = format!("<footer>{}</footer>", footer);
    }

    fn into_report(&mut self) -> Report {
        std::mem::take(&mut self.report)
    }
}

// =============================================================================
// Director
// =============================================================================

/// Sequences builder calls identically regardless of strategy.
#[derive(Debug, Default)]
pub struct ReportDirector;

impl ReportDirector {
    pub fn new() -> Self {
        ReportDirector
    }

    /// Runs the fixed header → content → footer sequence and returns the
    /// finished report.
    pub fn construct(
        &self,
        builder: &mut dyn ReportBuilder,
        header: &str,
        content: &str,
        footer: &str,
    ) -> Report {
        builder.set_header(header);
        builder.set_content(content);
        builder.set_footer(footer);
        builder.into_report()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_builder_through_director() {
        let director = ReportDirector::new();
        let mut builder = TextReportBuilder::new();

        let report = director.construct(&mut builder, "H", "C", "F");

        assert_eq!(report.header, "Text Header: H");
        assert_eq!(report.content, "Text Content: C");
        assert_eq!(report.footer, "Text Footer: F");
    }

    #[test]
    fn test_html_builder_through_director() {
        let director = ReportDirector::new();
        let mut builder = HtmlReportBuilder::new();

        let report = director.construct(&mut builder, "H", "C", "F");

        assert_eq!(report.header, "<h1>H</h1>");
        assert_eq!(report.content, "<p>C</p>");
        assert_eq!(report.footer, "<footer>F</footer>");
    }

    /// Finalizing before any setter has run yields empty fields, not a
    /// failure.
    #[test]
    fn test_partial_report_is_empty_not_an_error() {
        let mut builder = TextReportBuilder::new();
        let report = builder.into_report();

        assert_eq!(report, Report::default());
        assert_eq!(report.header, "");
    }

    #[test]
    fn test_partially_populated_report() {
        let mut builder = HtmlReportBuilder::new();
        builder.set_header("H");

        let report = builder.into_report();
        assert_eq!(report.header, "<h1>H</h1>");
        assert_eq!(report.content, "");
        assert_eq!(report.footer, "");
    }

    #[test]
    fn test_report_display() {
        let mut builder = TextReportBuilder::new();
        let report = ReportDirector::new().construct(&mut builder, "H", "C", "F");

        let rendered = report.to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "Header: Text Header: H");
        assert_eq!(lines[1], "Content: Text Content: C");
        assert_eq!(lines[2], "Footer: Text Footer: F");
    }
}
