mod cli;

use std::fs;
use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands, Format, ListFormat};
use mediafeed::config::FeedConfig;
use mediafeed::MediaFeed;

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let config = FeedConfig::load(cli.config.as_deref())?;
    let stdout = std::io::stdout();
    run(cli.command, config, &mut stdout.lock())
}

// Logs go to stderr so rendered output on stdout stays clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run<W: Write>(command: Commands, config: FeedConfig, out: &mut W) -> Result<()> {
    match command {
        Commands::Render { feed, output, format } => {
            let mf = MediaFeed::open(config, feed.as_deref())?;
            let rendered = match format {
                Format::Html => mf.render_html(),
                Format::Json => mf.render_json()?,
            };
            match output {
                Some(path) => {
                    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                        fs::create_dir_all(parent)
                            .with_context(|| format!("failed to create output directory: {}", parent.display()))?;
                    }
                    fs::write(&path, rendered)
                        .with_context(|| format!("failed to write output: {}", path.display()))?;
                    tracing::info!(path = %path.display(), items = mf.feed().len(), "rendered feed");
                }
                None => out.write_all(rendered.as_bytes())?,
            }
        }
        Commands::List { feed, format } => {
            let mf = MediaFeed::open(config, feed.as_deref())?;
            match format {
                ListFormat::Text => {
                    for s in mf.summary() {
                        writeln!(out, "{:<8} {:>8} {:<8} {}", s.kind, s.views, s.badge, s.label)?;
                    }
                }
                ListFormat::Json => writeln!(out, "{}", mf.summary_json()?)?,
            }
        }
        Commands::Classify { views } => {
            let mf = MediaFeed::new(config, Default::default());
            for v in views {
                writeln!(out, "{}\t{}", v, mf.classify(v))?;
            }
        }
        Commands::Export { feed } => {
            let mf = MediaFeed::open(config, feed.as_deref())?;
            writeln!(out, "{}", mf.feed().to_json()?)?;
        }
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn run_to_string(command: Commands, config: FeedConfig) -> String {
        let mut out = Vec::new();
        run(command, config, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn write_feed(dir: &std::path::Path) -> PathBuf {
        let path = dir.join("feed.json");
        fs::write(
            &path,
            r#"[{"type":"video","url":"u1","views":50},{"type":"article","title":"t1","views":175}]"#,
        )
        .unwrap();
        path
    }

    #[test]
    fn render_creates_output_directories() {
        let tmp = tempfile::tempdir().unwrap();
        let feed = write_feed(tmp.path());
        let output = tmp.path().join("site/nested/index.html");
        let stdout = run_to_string(
            Commands::Render { feed: Some(feed), output: Some(output.clone()), format: Format::Html },
            FeedConfig::default(),
        );
        assert!(stdout.is_empty());
        let html = fs::read_to_string(&output).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"<div class="wrap-item wrap-item-new">"#));
        assert!(html.contains(r##"<a href="#">t1</a>"##));
    }

    #[test]
    fn render_json_goes_to_writer() {
        let tmp = tempfile::tempdir().unwrap();
        let feed = write_feed(tmp.path());
        let stdout = run_to_string(
            Commands::Render { feed: Some(feed), output: None, format: Format::Json },
            FeedConfig::default(),
        );
        let v: serde_json::Value = serde_json::from_str(&stdout).unwrap();
        assert_eq!(v.as_array().map(|a| a.len()), Some(2));
    }

    #[test]
    fn render_reports_unwritable_output() {
        let tmp = tempfile::tempdir().unwrap();
        let blocker = tmp.path().join("file");
        fs::write(&blocker, "x").unwrap();
        let mut out = Vec::new();
        let err = run(
            Commands::Render { feed: None, output: Some(blocker.join("index.html")), format: Format::Html },
            FeedConfig::default(),
            &mut out,
        )
        .unwrap_err();
        assert!(err.to_string().contains("failed to create output directory"));
    }

    #[test]
    fn list_prints_aligned_columns() {
        let tmp = tempfile::tempdir().unwrap();
        let feed = write_feed(tmp.path());
        let stdout = run_to_string(
            Commands::List { feed: Some(feed), format: ListFormat::Text },
            FeedConfig::default(),
        );
        let lines: Vec<&str> = stdout.lines().collect();
        assert_eq!(lines, vec!["video          50 new      u1", "article       175 neutral  t1"]);
    }

    #[test]
    fn list_json_has_one_entry_per_item() {
        let tmp = tempfile::tempdir().unwrap();
        let feed = write_feed(tmp.path());
        let stdout = run_to_string(
            Commands::List { feed: Some(feed), format: ListFormat::Json },
            FeedConfig::default(),
        );
        let v: serde_json::Value = serde_json::from_str(&stdout).unwrap();
        assert_eq!(v[0]["badge"], "new");
        assert_eq!(v[1]["kind"], "article");
    }

    #[test]
    fn classify_uses_configured_thresholds() {
        let cfg = FeedConfig { popular_above: Some(10), new_below: Some(5), ..Default::default() };
        let stdout = run_to_string(Commands::Classify { views: vec![4, 10, 11] }, cfg);
        assert_eq!(stdout, "4\tnew\n10\tneutral\n11\tpopular\n");
    }

    #[test]
    fn export_round_trips_through_load() {
        let tmp = tempfile::tempdir().unwrap();
        let stdout = run_to_string(Commands::Export { feed: None }, FeedConfig::default());
        let path = tmp.path().join("builtin.json");
        fs::write(&path, stdout).unwrap();
        let loaded = mediafeed::feed::Feed::load(&path, &FeedConfig::default()).unwrap();
        assert_eq!(loaded, mediafeed::feed::Feed::builtin());
    }
}
