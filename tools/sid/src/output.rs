//! Output formatting for command results.

use serde::Serialize;
use sid_scoped::ScopedId;

use crate::config::OutputFormat;

/// Field breakdown of a parsed scoped id.
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ParsedView {
    pub scope: String,
    pub id: String,
    pub version_id: Option<String>,
    pub canonical: String,
}

impl From<&ScopedId> for ParsedView {
    fn from(sid: &ScopedId) -> Self {
        Self {
            scope: sid.scope().to_string(),
            id: sid.id().to_string(),
            version_id: sid.version_id().map(ToString::to_string),
            canonical: sid.to_canonical_string(),
        }
    }
}

/// Validity of a single input.
#[derive(Debug, Serialize)]
pub struct CheckResult {
    pub input: String,
    pub valid: bool,
}

/// Renders a value as pretty JSON.
pub fn format_json<T: Serialize>(data: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(data)?)
}

pub fn print_parsed(view: &ParsedView, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            println!("scope:     {}", view.scope);
            println!("id:        {}", view.id);
            println!("version:   {}", view.version_id.as_deref().unwrap_or("-"));
            println!("canonical: {}", view.canonical);
        }
        OutputFormat::Json => println!("{}", format_json(view)?),
    }
    Ok(())
}

pub fn print_checks(results: &[CheckResult], format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            for r in results {
                let label = if r.valid { "valid" } else { "invalid" };
                println!("{label}\t{}", r.input);
            }
        }
        OutputFormat::Json => println!("{}", format_json(&results)?),
    }
    Ok(())
}

/// Prints a single scalar value.
pub fn print_value<T: Serialize + std::fmt::Display>(
    value: &T,
    format: OutputFormat,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => println!("{value}"),
        OutputFormat::Json => println!("{}", serde_json::to_string(value)?),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parsed_view_json() {
        let sid = ScopedId::create(
            "modules",
            Some("511083bb08ce6b1b00000003"),
            Some("latest"),
        )
        .unwrap();
        let json = format_json(&ParsedView::from(&sid)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["scope"], "modules");
        assert_eq!(value["versionId"], "latest");
        assert_eq!(value["canonical"], "modules/511083bb08ce6b1b00000003/latest");
    }
}
