// src/persistence/mod.rs — Transcript, summary and CSV log writer
//
// Per conversation: `audit/conversation_<tag>.txt` and
// `summary/summary_<tag>.txt` (write-once), plus one appended row in
// `sentiment.csv` and `decisions.csv`. Nothing is ever rewritten or removed.
// Rows from concurrent writers may interleave but each is a single write.

pub mod csv;

use chrono::{NaiveDateTime, Timelike};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::infra::errors::ScreenpassError;
use crate::infra::paths;

const RULE_WIDTH: usize = 50;

/// Filename tag `%Y%m%d_%H%M%S_%Y%m%d_%H%M%S` from the conversation bounds.
pub fn timestamp_tag(start: &NaiveDateTime, end: &NaiveDateTime) -> String {
    format!(
        "{}_{}",
        start.format("%Y%m%d_%H%M%S"),
        end.format("%Y%m%d_%H%M%S")
    )
}

/// ISO-8601 local timestamp as written in the CSV logs. Microseconds are
/// printed only when non-zero.
pub fn iso_timestamp(t: &NaiveDateTime) -> String {
    format_timestamp(t, 'T')
}

/// Timestamp as shown in transcript and summary headers.
pub fn header_timestamp(t: &NaiveDateTime) -> String {
    format_timestamp(t, ' ')
}

fn format_timestamp(t: &NaiveDateTime, sep: char) -> String {
    let base = t.format(&format!("%Y-%m-%d{sep}%H:%M:%S")).to_string();
    // Leap-second nanos run past 1e9
    let micros = (t.nanosecond() % 1_000_000_000) / 1_000;
    if micros == 0 {
        base
    } else {
        format!("{base}.{micros:06}")
    }
}

/// Header fields shared by the transcript and summary files.
#[derive(Debug, Clone)]
pub struct ConversationMeta<'a> {
    pub start_time: &'a NaiveDateTime,
    pub end_time: &'a NaiveDateTime,
    pub lead_source: &'a str,
    pub company: &'a str,
}

#[derive(Debug, Clone)]
pub struct SentimentRow<'a> {
    pub recorded_at: NaiveDateTime,
    pub company: &'a str,
    pub lead_source: &'a str,
    pub score: u8,
    /// `conversation_<tag>`, pointing at the transcript file.
    pub conversation: String,
}

#[derive(Debug, Clone)]
pub struct DecisionRow<'a> {
    pub recorded_at: NaiveDateTime,
    pub company: &'a str,
    pub lead_source: &'a str,
    pub qualified: bool,
    pub reason: &'a str,
}

#[derive(Debug, Clone)]
pub struct ResultsWriter {
    results_dir: PathBuf,
}

impl ResultsWriter {
    pub fn new(results_dir: impl Into<PathBuf>) -> Self {
        Self {
            results_dir: results_dir.into(),
        }
    }

    pub fn results_dir(&self) -> &Path {
        &self.results_dir
    }

    pub fn ensure_dirs(&self) -> Result<(), ScreenpassError> {
        paths::ensure_results_dirs(&self.results_dir)?;
        Ok(())
    }

    pub fn transcript_path(&self, tag: &str) -> PathBuf {
        paths::audit_dir(&self.results_dir).join(format!("conversation_{tag}.txt"))
    }

    pub fn summary_path(&self, tag: &str) -> PathBuf {
        paths::summary_dir(&self.results_dir).join(format!("summary_{tag}.txt"))
    }

    /// Write the full transcript. Returns the file path.
    pub fn write_transcript(
        &self,
        tag: &str,
        meta: &ConversationMeta<'_>,
        history: &[String],
    ) -> Result<PathBuf, ScreenpassError> {
        self.ensure_dirs()?;
        let path = self.transcript_path(tag);

        let mut out = String::new();
        out.push_str("Conversation Log\n");
        out.push_str(&format!("Start Time: {}\n", header_timestamp(meta.start_time)));
        out.push_str(&format!("End Time: {}\n", header_timestamp(meta.end_time)));
        out.push_str(&format!("Lead Source: {}\n", meta.lead_source));
        out.push_str(&format!("Company: {}\n", meta.company));
        out.push_str(&"=".repeat(RULE_WIDTH));
        out.push_str("\n\n");
        for line in history {
            out.push_str(line);
            out.push('\n');
        }

        std::fs::write(&path, out)?;
        Ok(path)
    }

    /// Write the LLM summary. Returns the file path.
    pub fn write_summary(
        &self,
        tag: &str,
        meta: &ConversationMeta<'_>,
        generated_at: &NaiveDateTime,
        summary: &str,
    ) -> Result<PathBuf, ScreenpassError> {
        self.ensure_dirs()?;
        let path = self.summary_path(tag);

        let mut out = String::new();
        out.push_str("Conversation Summary\n");
        out.push_str(&format!("Generated: {}\n", header_timestamp(generated_at)));
        out.push_str(&format!("Lead Source: {}\n", meta.lead_source));
        out.push_str(&format!("Company: {}\n", meta.company));
        out.push_str(&"=".repeat(RULE_WIDTH));
        out.push_str("\n\n");
        out.push_str(summary);

        std::fs::write(&path, out)?;
        Ok(path)
    }

    pub fn append_sentiment(&self, row: &SentimentRow<'_>) -> Result<(), ScreenpassError> {
        let score = row.score.to_string();
        let recorded_at = iso_timestamp(&row.recorded_at);
        self.append_row(
            &paths::sentiment_log_path(&self.results_dir),
            &[
                &recorded_at,
                row.company,
                row.lead_source,
                &score,
                &row.conversation,
            ],
        )
    }

    pub fn append_decision(&self, row: &DecisionRow<'_>) -> Result<(), ScreenpassError> {
        let recorded_at = iso_timestamp(&row.recorded_at);
        self.append_row(
            &paths::decisions_log_path(&self.results_dir),
            &[
                &recorded_at,
                row.company,
                row.lead_source,
                csv::bool_field(row.qualified),
                row.reason,
            ],
        )
    }

    fn append_row(&self, path: &Path, fields: &[&str]) -> Result<(), ScreenpassError> {
        std::fs::create_dir_all(&self.results_dir)?;
        let line = csv::format_row(fields);
        let mut f = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)?;
        f.write_all(line.as_bytes())?;
        Ok(())
    }
}
