//! Console output formatter for command replies

use crate::cli::commands::OutputFormat;
use colored::Colorize;
use genomechat_application::CommandReply;
use serde_json::{Map, Value, json};

/// Formats [`CommandReply`] values for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    pub fn render(reply: &CommandReply, format: OutputFormat) -> String {
        match format {
            OutputFormat::Text => Self::format(reply),
            OutputFormat::Json => Self::format_json(reply),
        }
    }

    /// Format a reply as markdown-flavoured text
    pub fn format(reply: &CommandReply) -> String {
        let mut output = String::new();

        match reply {
            CommandReply::Success { title, fields, .. } => {
                output.push_str(&format!("✅ {}\n\n", title.green().bold()));
                for (label, value) in fields {
                    output.push_str(&Self::field(label, value));
                }
            }
            CommandReply::ValidationFailed { message } => {
                output.push_str(&format!("❌ {}\n", message.red()));
            }
            CommandReply::DispatchFailed {
                title, classified, ..
            } => {
                output.push_str(&format!("❌ {}\n\n", title.red().bold()));
                output.push_str(&format!(
                    "{} {}\n",
                    format!("{}:", classified.category).yellow().bold(),
                    classified.detail
                ));
                if classified.category.is_transient() {
                    output.push_str(&format!(
                        "\n{}\n",
                        "This error is usually temporary. Please try again shortly.".dimmed()
                    ));
                }
            }
            CommandReply::Batch { results } => {
                let succeeded = results.iter().filter(|r| r.succeeded).count();
                let title = format!(
                    "Batch Results ({}/{} succeeded)",
                    succeeded,
                    results.len()
                );
                output.push_str(&format!("{}\n\n", title.cyan().bold()));
                for result in results {
                    let mark = if result.succeeded { "✅" } else { "❌" };
                    let detail = if result.succeeded {
                        result.detail.normal()
                    } else {
                        result.detail.red()
                    };
                    output.push_str(&format!(
                        "{} {} {}: {}\n",
                        mark,
                        capitalize(result.kind).bold(),
                        result.item,
                        detail
                    ));
                }
            }
            CommandReply::Info { title, lines } => {
                output.push_str(&format!("{}\n\n", title.cyan().bold()));
                output.push_str(&Self::indent(&lines.join("\n"), "  "));
                output.push('\n');
            }
            CommandReply::SetupComplete { message, .. } => {
                output.push_str(&format!("✅ {}\n\n", "API key configured".green().bold()));
                output.push_str(message);
                output.push('\n');
            }
        }

        output
    }

    /// Format a reply as pretty-printed JSON
    ///
    /// The API key from `setup` is never echoed.
    pub fn format_json(reply: &CommandReply) -> String {
        let value = match reply {
            CommandReply::Success {
                title,
                fields,
                response,
            } => json!({
                "status": "success",
                "title": title,
                "fields": Self::field_map(fields),
                "response": response,
            }),
            CommandReply::ValidationFailed { message } => json!({
                "status": "invalid",
                "message": message,
            }),
            CommandReply::DispatchFailed {
                title,
                classified,
                response,
            } => json!({
                "status": "failed",
                "title": title,
                "category": classified.category,
                "message": classified.message(),
                "response": response,
            }),
            CommandReply::Batch { results } => json!({
                "status": "batch",
                "succeeded": results.iter().filter(|r| r.succeeded).count(),
                "total": results.len(),
                "items": results,
            }),
            CommandReply::Info { title, lines } => json!({
                "status": "info",
                "title": title,
                "lines": lines,
            }),
            CommandReply::SetupComplete { message, .. } => json!({
                "status": "configured",
                "message": message,
            }),
        };
        serde_json::to_string_pretty(&value).unwrap_or_else(|_| "{}".to_string())
    }

    fn field(label: &str, value: &str) -> String {
        format!("{} {}\n", format!("{}:", label).bold(), value)
    }

    fn field_map(fields: &[(String, String)]) -> Value {
        let map: Map<String, Value> = fields
            .iter()
            .map(|(k, v)| (k.clone(), Value::String(v.clone())))
            .collect();
        Value::Object(map)
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
