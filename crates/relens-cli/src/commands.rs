use std::fs;
use std::path::Path;

use anyhow::{bail, Context};
use colored::Colorize;
use serde::Serialize;
use tracing::debug;

use relens_diff::{diff, Change, ChangeKinds, DiffConfig};
use relens_report::{plan_overlays, ChangeSummary, Offset, Surface};
use relens_snapshot::{Capture, CaptureId, SnapshotNode};
use relens_store::{CaptureStore, FsCaptureStore};
use relens_types::Rect;

use crate::cli::*;
use crate::config::RelensConfig;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => RelensConfig::load(Path::new(path))?,
        None => RelensConfig::discover()?,
    };
    let root = cli.root.clone().unwrap_or_else(|| config.root.0.clone());
    let store = FsCaptureStore::open(&root)?;
    debug!(root = %root, "opened capture store");

    match cli.command {
        Command::Record(ref args) => cmd_record(&store, args),
        Command::List(_) => cmd_list(&store),
        Command::Latest(_) => cmd_latest(&store),
        Command::Show(ref args) => cmd_show(&store, args),
        Command::Diff(ref args) => cmd_diff(&store, &config, args, &cli.format),
    }
}

fn cmd_record(store: &FsCaptureStore, args: &RecordArgs) -> anyhow::Result<()> {
    let json = fs::read_to_string(&args.tree)
        .with_context(|| format!("reading snapshot tree {}", args.tree))?;
    let tree: SnapshotNode =
        serde_json::from_str(&json).with_context(|| format!("parsing {}", args.tree))?;
    tree.validate()
        .with_context(|| format!("malformed snapshot tree {}", args.tree))?;

    let capture = match args.time {
        Some(millis) => Capture::at(CaptureId::from_millis(millis), &args.url, tree),
        None => Capture::new(&args.url, tree),
    };
    let id = store.save(&capture)?;
    println!(
        "{} Recorded capture {} ({})",
        "✓".green().bold(),
        id.to_string().yellow(),
        id.display_time()
    );
    Ok(())
}

fn cmd_list(store: &FsCaptureStore) -> anyhow::Result<()> {
    let ids = store.list()?;
    if ids.is_empty() {
        println!("No captures.");
        return Ok(());
    }
    let latest = store.latest()?;
    for id in ids {
        let marker = if Some(id) == latest { "*" } else { " " };
        println!(
            "{} {}  {}",
            marker.green().bold(),
            id.to_string().yellow(),
            id.display_time().dimmed()
        );
    }
    Ok(())
}

fn cmd_latest(store: &FsCaptureStore) -> anyhow::Result<()> {
    match store.baseline()? {
        None => println!("No baseline yet."),
        Some(capture) => {
            println!(
                "{}  {}",
                capture.time.to_string().yellow().bold(),
                capture.time.display_time()
            );
            println!("  URL: {}", capture.url.blue());
            println!("  Nodes: {}", capture.tree.subtree_len().to_string().bold());
        }
    }
    Ok(())
}

fn cmd_show(store: &FsCaptureStore, args: &ShowArgs) -> anyhow::Result<()> {
    let id = CaptureId::from_millis(args.time);
    let Some(capture) = store.load(id)? else {
        bail!("no capture record for [{id}]");
    };
    println!("Capture {} ({})", id.to_string().yellow().bold(), id.display_time());
    println!("  URL: {}", capture.url.blue());
    println!("  Nodes: {}", capture.tree.subtree_len().to_string().bold());
    Ok(())
}

/// Serializable view of one change for `--format json`.
#[derive(Serialize)]
struct ChangeView {
    kinds: ChangeKinds,
    label: String,
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    rect: Option<Rect>,
}

#[derive(Serialize)]
struct DiffReport {
    left: CaptureId,
    right: CaptureId,
    summary: ChangeSummary,
    changes: Vec<ChangeView>,
}

fn cmd_diff(
    store: &FsCaptureStore,
    config: &RelensConfig,
    args: &DiffArgs,
    format: &OutputFormat,
) -> anyhow::Result<()> {
    let left_id = CaptureId::from_millis(args.left);
    let Some(left) = store.load(left_id)? else {
        bail!("missing left record [{left_id}]");
    };
    let right = match args.right {
        Some(millis) => {
            let right_id = CaptureId::from_millis(millis);
            let Some(right) = store.load(right_id)? else {
                bail!("missing right record [{right_id}]");
            };
            right
        }
        None => match store.baseline()? {
            Some(capture) => capture,
            None => bail!("no baseline to diff against; pass an explicit right capture"),
        },
    };

    let mut diff_config: DiffConfig = config.diff;
    if let Some(priority) = args.priority {
        diff_config.priority = priority.into();
    }
    let changes = diff(&left.tree, &right.tree, &diff_config);
    let summary = ChangeSummary::tally(&changes);

    match format {
        OutputFormat::Json => {
            let report = DiffReport {
                left: left.time,
                right: right.time,
                summary,
                changes: changes.iter().map(change_view).collect(),
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Text => print_text_report(config, &left, &right, &changes, &summary),
    }
    Ok(())
}

fn change_view(change: &Change<'_>) -> ChangeView {
    ChangeView {
        kinds: change.kinds,
        label: change.kinds.to_string(),
        name: change.node.name.as_str().to_string(),
        rect: change.node.rect,
    }
}

fn print_text_report(
    config: &RelensConfig,
    left: &Capture,
    right: &Capture,
    changes: &[Change<'_>],
    summary: &ChangeSummary,
) {
    if changes.is_empty() {
        println!("{} No changes.", "✓".green().bold());
        return;
    }

    // Root origins rebase page-absolute rects onto each screenshot.
    let offset = |tree: &SnapshotNode| {
        tree.rect
            .map(|r| Offset::new(r.x, r.y))
            .unwrap_or_default()
    };
    let overlays = plan_overlays(
        changes,
        offset(&left.tree),
        offset(&right.tree),
        &config.highlight,
    );

    println!(
        "diff [{}] vs [{}]: {} changes",
        left.time.to_string().yellow(),
        right.time.to_string().yellow(),
        changes.len().to_string().bold()
    );
    for change in changes {
        let label = change.kinds.to_string();
        let label = match change.kinds {
            k if k.contains(ChangeKinds::ADD) => label.green(),
            k if k.contains(ChangeKinds::REMOVE) => label.red(),
            k if k.contains(ChangeKinds::STYLE) => label.magenta(),
            _ => label.yellow(),
        };
        let rect = change
            .node
            .rect
            .map(|r| r.to_string())
            .unwrap_or_else(|| "(not rendered)".to_string());
        println!("  {:<12} <{}> {}", label, change.node.name, rect.dimmed());
    }
    let left_overlays = overlays.iter().filter(|o| o.surface == Surface::Left).count();
    println!(
        "overlays: {} on right, {} on left",
        (overlays.len() - left_overlays).to_string().bold(),
        left_overlays.to_string().bold()
    );
    println!("{}", summary.to_string().bold());
}
