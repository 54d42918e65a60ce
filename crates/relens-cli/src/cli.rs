use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "relens",
    about = "Structural visual regression diffing",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Capture directory (overrides the config file)
    #[arg(long, global = true)]
    pub root: Option<String>,

    /// Config file path (default: ./relens.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Import an externally captured snapshot tree as a new capture
    Record(RecordArgs),
    /// List captures in the store
    List(ListArgs),
    /// Show the current baseline capture
    Latest(LatestArgs),
    /// Show one capture record
    Show(ShowArgs),
    /// Diff two captures and report the changes
    Diff(DiffArgs),
}

#[derive(Args)]
pub struct RecordArgs {
    /// Path to the snapshot tree JSON produced by the capture pipeline
    pub tree: String,
    /// URL the snapshot was captured from
    #[arg(long)]
    pub url: String,
    /// Capture time in epoch milliseconds (default: now)
    #[arg(long)]
    pub time: Option<i64>,
}

#[derive(Args)]
pub struct ListArgs {}

#[derive(Args)]
pub struct LatestArgs {}

#[derive(Args)]
pub struct ShowArgs {
    /// Capture time in epoch milliseconds
    pub time: i64,
}

#[derive(Args)]
pub struct DiffArgs {
    /// Older capture time in epoch milliseconds
    pub left: i64,
    /// Newer capture time in epoch milliseconds (default: the baseline)
    pub right: Option<i64>,
    /// LCS scan strategy (overrides the config file)
    #[arg(long, value_enum)]
    pub priority: Option<PriorityArg>,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum PriorityArg {
    Head,
    Tail,
}

impl From<PriorityArg> for relens_diff::Priority {
    fn from(arg: PriorityArg) -> Self {
        match arg {
            PriorityArg::Head => Self::Head,
            PriorityArg::Tail => Self::Tail,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_record() {
        let cli =
            Cli::try_parse_from(["relens", "record", "tree.json", "--url", "https://x"]).unwrap();
        if let Command::Record(args) = cli.command {
            assert_eq!(args.tree, "tree.json");
            assert_eq!(args.url, "https://x");
            assert_eq!(args.time, None);
        } else {
            panic!("wrong command");
        }
    }

    #[test]
    fn record_requires_url() {
        assert!(Cli::try_parse_from(["relens", "record", "tree.json"]).is_err());
    }

    #[test]
    fn parse_diff_with_both_sides() {
        let cli = Cli::try_parse_from(["relens", "diff", "1000", "2000"]).unwrap();
        if let Command::Diff(args) = cli.command {
            assert_eq!(args.left, 1000);
            assert_eq!(args.right, Some(2000));
            assert!(args.priority.is_none());
        } else {
            panic!("wrong command");
        }
    }

    #[test]
    fn parse_diff_priority_override() {
        let cli = Cli::try_parse_from(["relens", "diff", "1000", "--priority", "tail"]).unwrap();
        if let Command::Diff(args) = cli.command {
            assert!(matches!(args.priority, Some(PriorityArg::Tail)));
            assert_eq!(args.right, None);
        } else {
            panic!("wrong command");
        }
    }

    #[test]
    fn parse_global_root_and_format() {
        let cli =
            Cli::try_parse_from(["relens", "--root", "/tmp/caps", "--format", "json", "list"])
                .unwrap();
        assert_eq!(cli.root, Some("/tmp/caps".into()));
        assert!(matches!(cli.format, OutputFormat::Json));
    }

    #[test]
    fn parse_show() {
        let cli = Cli::try_parse_from(["relens", "show", "1410531783000"]).unwrap();
        if let Command::Show(args) = cli.command {
            assert_eq!(args.time, 1410531783000);
        } else {
            panic!("wrong command");
        }
    }

    #[test]
    fn parse_latest() {
        let cli = Cli::try_parse_from(["relens", "latest"]).unwrap();
        assert!(matches!(cli.command, Command::Latest(_)));
    }
}
