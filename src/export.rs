//! Export encodings for the `UserData` aggregate
//!
//! - JSON: pretty-printed with two-space indentation, loadable again as is.
//! - Text: a fixed-order report (answers by category, then groups with
//!   their members and reflection). Output depends only on the input.

use crate::error::Result;
use crate::schema::{UserData, CATEGORY_COUNT};

const RULE_WIDTH: usize = 50;

/// Export format selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Text,
}

impl ExportFormat {
    /// File extension for exported files
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Text => "txt",
        }
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "json" => Ok(Self::Json),
            "text" | "txt" => Ok(Self::Text),
            other => Err(format!("unknown export format: {}", other)),
        }
    }
}

/// Encode `data` in the given format
pub fn export(data: &UserData, format: ExportFormat) -> Result<String> {
    match format {
        ExportFormat::Json => export_json(data),
        ExportFormat::Text => Ok(export_text(data)),
    }
}

/// Pretty-printed JSON of the whole aggregate
pub fn export_json(data: &UserData) -> Result<String> {
    Ok(serde_json::to_string_pretty(data)?)
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line);
    out.push('\n');
}

/// Human-readable report
pub fn export_text(data: &UserData) -> String {
    let heavy = "=".repeat(RULE_WIDTH);
    let light = "-".repeat(RULE_WIDTH);
    let mut out = String::new();

    out.push_str("価値の序列 - 自己分析結果\n");
    push_line(&mut out, &heavy);
    out.push('\n');

    for category in 1..=CATEGORY_COUNT {
        let answers = data.answers_for_category(category);
        if answers.is_empty() {
            continue;
        }

        out.push_str(&format!("カテゴリー {}\n", category));
        push_line(&mut out, &light);
        for answer in answers {
            out.push_str(&format!("{}. {}\n", answer.index, answer.text));
            if let Some(purpose) = answer.purpose_text() {
                out.push_str(&format!("   目的: {}\n", purpose));
            }
        }
        out.push('\n');
    }

    if !data.groups.is_empty() {
        out.push('\n');
        push_line(&mut out, &heavy);
        out.push_str("グループ分析\n");
        push_line(&mut out, &heavy);
        out.push('\n');

        for group in &data.groups {
            out.push_str(&format!("【{}】\n", group.label));
            for answer in data.members_of(group) {
                out.push_str(&format!("  - {}\n", answer.text));
            }
            if let Some(insight) = data.insight_for(&group.id) {
                out.push_str(&format!("  なぜ？: {}\n", insight.reflection));
            }
            out.push('\n');
        }
    }

    out
}

/// Download name for an export made on `date`: `value-hierarchy-YYYY-MM-DD.<ext>`
pub fn export_filename(format: ExportFormat, date: chrono::NaiveDate) -> String {
    format!(
        "value-hierarchy-{}.{}",
        date.format("%Y-%m-%d"),
        format.extension()
    )
}
