//! Report rendering for the command line.

use std::path::PathBuf;

use clap::ValueEnum;
use cumas_detect::CapabilityRecord;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Format {
    #[default]
    Json,
    Text,
}

/// Capabilities detected for one manifest path
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub path: PathBuf,
    pub capabilities: Vec<CapabilityRecord>,
}

/// Render reports. A single JSON report prints as the bare capability array.
pub fn render(reports: &[Report], format: Format) -> serde_json::Result<String> {
    match format {
        Format::Json => match reports {
            [single] => serde_json::to_string_pretty(&single.capabilities),
            _ => serde_json::to_string_pretty(reports),
        },
        Format::Text => Ok(render_text(reports)),
    }
}

fn render_text(reports: &[Report]) -> String {
    let blocks: Vec<String> = reports.iter().map(render_block).collect();
    blocks.join("\n")
}

fn render_block(report: &Report) -> String {
    let mut out = format!("{}\n", report.path.display());

    for record in &report.capabilities {
        out.push_str(&format!("  {:<26} {}", record.key(), record.description));
        if let Some(compat) = &record.compatibility {
            let status = if compat.safari { "supported" } else { "unsupported" };
            out.push_str(&format!(" [safari: {}]", status));
        }
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use cumas_detect::Compatibility;

    fn report(path: &str, records: Vec<CapabilityRecord>) -> Report {
        Report {
            path: PathBuf::from(path),
            capabilities: records,
        }
    }

    #[test]
    fn test_single_json_is_bare_array() {
        let reports = vec![report("m.json", vec![CapabilityRecord::new("popup", "Popup")])];
        let value: serde_json::Value =
            serde_json::from_str(&render(&reports, Format::Json).unwrap()).unwrap();
        assert_eq!(
            value,
            serde_json::json!([{"capability": "popup", "description": "Popup"}])
        );
    }

    #[test]
    fn test_multiple_json_keeps_paths() {
        let reports = vec![
            report("a/manifest.json", vec![CapabilityRecord::new("popup", "Popup")]),
            report("b/manifest.json", vec![CapabilityRecord::new("sidebar", "Sidebar")]),
        ];
        let value: serde_json::Value =
            serde_json::from_str(&render(&reports, Format::Json).unwrap()).unwrap();
        assert_eq!(value[1]["path"], "b/manifest.json");
        assert_eq!(value[1]["capabilities"][0]["capability"], "sidebar");
    }

    #[test]
    fn test_text_shows_safari_status() {
        let record = CapabilityRecord::new("sidebar", "Provides a sidebar").with_compatibility(
            Compatibility {
                safari: false,
                notes: None,
                docs: None,
            },
        );
        let text = render(&[report("m.json", vec![record])], Format::Text).unwrap();
        assert!(text.starts_with("m.json\n"));
        assert!(text.contains("sidebar"));
        assert!(text.contains("[safari: unsupported]"));
    }

    #[test]
    fn test_text_separates_reports() {
        let reports = vec![
            report("a.json", vec![CapabilityRecord::new("popup", "Popup")]),
            report("b.json", vec![CapabilityRecord::new("omnibox", "Keyword")]),
        ];
        let text = render(&reports, Format::Text).unwrap();
        let expected = format!(
            "a.json\n  {:<26} Popup\n\nb.json\n  {:<26} Keyword\n",
            "popup", "omnibox"
        );
        assert_eq!(text, expected);
    }
}
