use clap::builder::NonEmptyStringValueParser;
use clap::error::ErrorKind;
use clap::Parser;
use std::path::PathBuf;

use mkvretag_core::config::ToolsConfig;
use mkvretag_core::JobInput;

/// Exit status for missing or malformed arguments.
pub const USAGE_EXIT_CODE: i32 = 1;

#[derive(Debug, Parser)]
#[command(name = "mkvretag")]
#[command(
    author,
    version,
    about = "Retitle, tag and rename a directory of Matroska episodes"
)]
pub struct Cli {
    /// Directory containing the .mkv files
    pub directory: PathBuf,

    /// Base title, e.g. the show name
    #[arg(value_parser = NonEmptyStringValueParser::new())]
    pub title: String,

    /// Studio written to the ARTIST tag
    #[arg(value_parser = NonEmptyStringValueParser::new())]
    pub studio: String,

    /// Season number (defaults to 1)
    #[arg(allow_hyphen_values = true)]
    pub season: Option<String>,

    /// Added to every episode number, to continue numbering from an earlier batch (defaults to 0)
    #[arg(allow_hyphen_values = true)]
    pub episodes_offset: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Show what would be done without executing
    #[arg(long)]
    pub dry_run: bool,

    /// Print the batch report as JSON
    #[arg(long)]
    pub json: bool,

    /// Path to mkvpropedit (searched on PATH when unset)
    #[arg(long, env = "MKVRETAG_MKVPROPEDIT", value_name = "PATH")]
    pub mkvpropedit: Option<PathBuf>,

    /// Kill a single mkvpropedit call after this many seconds
    #[arg(long, env = "MKVRETAG_TOOL_TIMEOUT", value_name = "SECS")]
    pub tool_timeout: Option<u64>,
}

impl Cli {
    /// Parse `std::env::args`, exiting with [`USAGE_EXIT_CODE`] and a usage
    /// message on any argument error. `--help` and `--version` exit 0.
    pub fn parse_or_exit() -> Self {
        match Self::try_parse() {
            Ok(cli) => cli,
            Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
                e.exit()
            }
            Err(e) => {
                let _ = e.print();
                std::process::exit(USAGE_EXIT_CODE);
            }
        }
    }

    /// The job described by the positional arguments.
    pub fn job_input(&self) -> mkvretag_core::Result<JobInput> {
        JobInput::from_args(
            self.directory.clone(),
            self.title.clone(),
            self.studio.clone(),
            self.season.as_deref(),
            self.episodes_offset.as_deref(),
        )
    }

    pub fn tools_config(&self) -> ToolsConfig {
        ToolsConfig {
            mkvpropedit_path: self.mkvpropedit.clone(),
            timeout_secs: self.tool_timeout,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("mkvretag").chain(args.iter().copied()))
    }

    #[test]
    fn required_positionals_only() {
        let cli = parse(&["/media/show", "Show", "Studio"]).unwrap();
        let job = cli.job_input().unwrap();
        assert_eq!(job.directory, PathBuf::from("/media/show"));
        assert_eq!(job.title, "Show");
        assert_eq!(job.studio, "Studio");
        assert_eq!(job.season, 1);
        assert_eq!(job.episodes_offset, 0);
        assert!(!cli.dry_run);
    }

    #[test]
    fn season_and_offset() {
        let cli = parse(&["/media/show", "Show", "Studio", "2", "13"]).unwrap();
        let job = cli.job_input().unwrap();
        assert_eq!(job.season, 2);
        assert_eq!(job.episodes_offset, 13);
    }

    #[test]
    fn unparsable_season_falls_back() {
        let cli = parse(&["/media/show", "Show", "Studio", "two", "none"]).unwrap();
        let job = cli.job_input().unwrap();
        assert_eq!(job.season, 1);
        assert_eq!(job.episodes_offset, 0);
    }

    #[test]
    fn negative_offset_is_kept() {
        let cli = parse(&["/media/show", "Show", "Studio", "two", "-3"]).unwrap();
        let job = cli.job_input().unwrap();
        assert_eq!(job.season, 1);
        assert_eq!(job.episodes_offset, -3);
    }

    #[test]
    fn title_with_path_separator_is_rejected() {
        let cli = parse(&["/media/show", "Show/Extras", "Studio"]).unwrap();
        assert!(cli.job_input().is_err());
    }

    #[test]
    fn missing_studio_is_an_error() {
        let err = parse(&["/media/show", "Show"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn empty_title_is_an_error() {
        assert!(parse(&["/media/show", "", "Studio"]).is_err());
    }

    #[test]
    fn empty_directory_is_an_error() {
        assert!(parse(&["", "Show", "Studio"]).is_err());
    }

    #[test]
    fn tool_flags_feed_tools_config() {
        let cli = parse(&[
            "/media/show",
            "Show",
            "Studio",
            "--mkvpropedit",
            "/opt/mkvpropedit",
            "--tool-timeout",
            "45",
            "--dry-run",
            "--json",
        ])
        .unwrap();
        let tools = cli.tools_config();
        assert_eq!(tools.mkvpropedit_path, Some(PathBuf::from("/opt/mkvpropedit")));
        assert_eq!(tools.timeout_secs, Some(45));
        assert!(cli.dry_run);
        assert!(cli.json);
    }
}
