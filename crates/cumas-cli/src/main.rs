mod config;
mod output;

use std::path::PathBuf;

use clap::Parser;
use cumas_detect::{detect_from_path_async, discover_manifests, DetectOptions};
use tracing::warn;
use tracing_subscriber::EnvFilter;

use output::{Format, Report};

#[derive(Parser, Debug)]
#[command(name = "cumas", version, about = "Report the capabilities a browser-extension manifest declares")]
struct Args {
    /// Manifest files (or directories, with --recursive)
    #[arg(required = true)]
    paths: Vec<PathBuf>,

    /// Treat directories as extension trees and inspect every manifest.json
    #[arg(short, long)]
    recursive: bool,

    /// Fail on missing or invalid manifests instead of falling back
    #[arg(long)]
    strict: bool,

    /// Include the inspected manifest field paths
    #[arg(long)]
    fields: bool,

    /// Include normalized capability ids
    #[arg(long)]
    normalize: bool,

    /// Include Safari compatibility metadata
    #[arg(long)]
    compat: bool,

    /// Shorthand for --fields --normalize --compat
    #[arg(long)]
    all: bool,

    #[arg(long, value_enum, default_value_t = Format::Json)]
    format: Format,

    /// Options file (defaults to $CUMAS_CONFIG, then ~/.cumas/config.json)
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    /// Flags switch options on; they never switch off what the config enables.
    fn merge_into(&self, base: DetectOptions) -> DetectOptions {
        let options = DetectOptions {
            strict: base.strict || self.strict,
            include_fields: base.include_fields || self.fields,
            normalize_names: base.normalize_names || self.normalize,
            include_compatibility: base.include_compatibility || self.compat,
        };
        if self.all {
            options.enriched()
        } else {
            options
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let options = args.merge_into(config::load_options(args.config.as_deref())?);

    let targets = collect_targets(&args.paths, args.recursive, &options)?;

    let mut reports = Vec::with_capacity(targets.len());
    for path in targets {
        let capabilities = detect_from_path_async(&path, &options).await?;
        reports.push(Report { path, capabilities });
    }

    println!("{}", output::render(&reports, args.format)?);
    Ok(())
}

/// Expand directories (with --recursive) into the manifests they contain.
///
/// Finding nothing is reported on stderr, or rejected in strict mode, so an
/// empty report list is never mistaken for an empty capability list.
fn collect_targets(
    paths: &[PathBuf],
    recursive: bool,
    options: &DetectOptions,
) -> anyhow::Result<Vec<PathBuf>> {
    let mut targets = Vec::new();
    for path in paths {
        if recursive && path.is_dir() {
            targets.extend(discover_manifests(path, options)?);
        } else {
            targets.push(path.clone());
        }
    }

    if targets.is_empty() {
        if options.strict {
            anyhow::bail!("no manifests found under {:?}", paths);
        }
        warn!("No manifests found under {:?}", paths);
    }

    Ok(targets)
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_merge_over_config() {
        let args = Args::parse_from(["cumas", "--fields", "manifest.json"]);
        let base = DetectOptions {
            strict: true,
            ..DetectOptions::default()
        };
        let options = args.merge_into(base);
        assert!(options.strict);
        assert!(options.include_fields);
        assert!(!options.normalize_names);
    }

    #[test]
    fn test_all_flag() {
        let args = Args::parse_from(["cumas", "--all", "--format", "text", "a.json", "b.json"]);
        let options = args.merge_into(DetectOptions::default());
        assert_eq!(options, DetectOptions::default().enriched());
        assert_eq!(args.format, Format::Text);
        assert_eq!(args.paths.len(), 2);
    }

    #[test]
    fn test_path_required() {
        assert!(Args::try_parse_from(["cumas"]).is_err());
    }

    #[test]
    fn test_empty_discovery() {
        let tmp = tempfile::tempdir().unwrap();
        let paths = vec![tmp.path().to_path_buf()];

        let targets = collect_targets(&paths, true, &DetectOptions::default()).unwrap();
        assert!(targets.is_empty());

        let err = collect_targets(&paths, true, &DetectOptions::strict()).unwrap_err();
        assert!(err.to_string().contains("no manifests found"));
    }

    #[test]
    fn test_collect_targets_expands_dirs_only_when_recursive() {
        let tmp = tempfile::tempdir().unwrap();
        let ext = tmp.path().join("ext");
        std::fs::create_dir_all(&ext).unwrap();
        std::fs::write(ext.join("manifest.json"), "{}").unwrap();
        let paths = vec![tmp.path().to_path_buf()];

        let recursive = collect_targets(&paths, true, &DetectOptions::default()).unwrap();
        assert_eq!(recursive, vec![ext.join("manifest.json")]);

        let literal = collect_targets(&paths, false, &DetectOptions::default()).unwrap();
        assert_eq!(literal, paths);
    }
}
