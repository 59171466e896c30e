#![forbid(unsafe_code)]

//! Command-line argument parsing for the demo.
//!
//! Parses args manually to keep the binary lean. Every option can also be set
//! through a `GROUPLOG_DEMO_*` environment variable; explicit flags win.

use std::env;

use grouplog::{BoxSpec, ColorProfile, GroupOptions, WrapMode};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const HELP_TEXT: &str = "\
grouplog demo: two log groups taking turns on one terminal

USAGE:
    grouplog-demo [OPTIONS]

OPTIONS:
    --title=TEXT          Title of the second group (default: Process 1)
    --color=NAME          Style name for its border (default: green)
    --box=NAME            Box style: single, double, round, bold,
                          singleDouble, doubleSingle, classic, arrow
                          (default: classic)
    --padding=N           Padding on every edge (default: 0)
    --fallback-width=N    Width when the terminal size is unknown (default: 20)
    --max-width=N         Upper bound on the block width (default: 50)
    --wrap=MODE           'columns' (default) or 'chars'
    --plain               Never emit color codes
    --help, -h            Show this help message
    --version, -V         Show version

ENVIRONMENT VARIABLES:
    GROUPLOG_DEMO_TITLE           Override --title
    GROUPLOG_DEMO_COLOR           Override --color
    GROUPLOG_DEMO_BOX             Override --box
    GROUPLOG_DEMO_PADDING         Override --padding
    GROUPLOG_DEMO_FALLBACK_WIDTH  Override --fallback-width
    GROUPLOG_DEMO_MAX_WIDTH       Override --max-width
    GROUPLOG_LOG                  Diagnostics filter for stderr (e.g. grouplog=debug)";

/// What the process should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Run(Opts),
    Help,
    Version,
}

/// Parsed command-line options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opts {
    pub title: String,
    pub color: String,
    pub box_name: String,
    pub padding: i32,
    pub fallback_width: u16,
    pub max_width: u16,
    pub wrap_mode: WrapMode,
    pub plain: bool,
}

impl Default for Opts {
    fn default() -> Self {
        Self {
            title: "Process 1".into(),
            color: "green".into(),
            box_name: "classic".into(),
            padding: 0,
            fallback_width: 20,
            max_width: 50,
            wrap_mode: WrapMode::Columns,
            plain: false,
        }
    }
}

impl Opts {
    /// Options for the titled group.
    pub fn group_options(&self) -> GroupOptions {
        let options = GroupOptions::new()
            .title(self.title.as_str())
            .color(self.color.as_str())
            .box_style(BoxSpec::Named(self.box_name.clone()))
            .padding(self.padding)
            .fallback_width(self.fallback_width)
            .max_width(self.max_width)
            .wrap_mode(self.wrap_mode);
        if self.plain {
            options.color_profile(ColorProfile::Mono)
        } else {
            options
        }
    }
}

/// Parse the process arguments and environment.
pub fn parse() -> Result<Command, String> {
    parse_from(env::args().skip(1), |key| env::var(key).ok())
}

/// Parse `args` (without the program name), reading overrides through `env`.
pub fn parse_from<I, F>(args: I, env: F) -> Result<Command, String>
where
    I: IntoIterator<Item = String>,
    F: Fn(&str) -> Option<String>,
{
    let mut opts = Opts::default();

    // Environment first, flags override.
    if let Some(val) = env("GROUPLOG_DEMO_TITLE") {
        opts.title = val;
    }
    if let Some(val) = env("GROUPLOG_DEMO_COLOR") {
        opts.color = val;
    }
    if let Some(val) = env("GROUPLOG_DEMO_BOX") {
        opts.box_name = val;
    }
    if let Some(val) = env("GROUPLOG_DEMO_PADDING")
        && let Ok(n) = val.parse()
    {
        opts.padding = n;
    }
    if let Some(val) = env("GROUPLOG_DEMO_FALLBACK_WIDTH")
        && let Ok(n) = val.parse()
    {
        opts.fallback_width = n;
    }
    if let Some(val) = env("GROUPLOG_DEMO_MAX_WIDTH")
        && let Ok(n) = val.parse()
    {
        opts.max_width = n;
    }

    for arg in args {
        match arg.as_str() {
            "--help" | "-h" => return Ok(Command::Help),
            "--version" | "-V" => return Ok(Command::Version),
            "--plain" => opts.plain = true,
            other => {
                if let Some(val) = other.strip_prefix("--title=") {
                    opts.title = val.to_string();
                } else if let Some(val) = other.strip_prefix("--color=") {
                    opts.color = val.to_string();
                } else if let Some(val) = other.strip_prefix("--box=") {
                    opts.box_name = val.to_string();
                } else if let Some(val) = other.strip_prefix("--padding=") {
                    opts.padding = number("--padding", val)?;
                } else if let Some(val) = other.strip_prefix("--fallback-width=") {
                    opts.fallback_width = number("--fallback-width", val)?;
                } else if let Some(val) = other.strip_prefix("--max-width=") {
                    opts.max_width = number("--max-width", val)?;
                } else if let Some(val) = other.strip_prefix("--wrap=") {
                    opts.wrap_mode = match val {
                        "columns" => WrapMode::Columns,
                        "chars" => WrapMode::Chars,
                        _ => return Err(format!("Invalid --wrap value: {val}")),
                    };
                } else {
                    return Err(format!(
                        "Unknown argument: {other}\nRun with --help for usage information."
                    ));
                }
            }
        }
    }

    Ok(Command::Run(opts))
}

fn number<T: std::str::FromStr>(flag: &str, val: &str) -> Result<T, String> {
    val.parse()
        .map_err(|_| format!("Invalid {flag} value: {val}"))
}
