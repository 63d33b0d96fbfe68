use clap::Parser;

pub const VERSION: &str = "0.1.0";

#[derive(Parser, Debug, Clone)]
#[command(name = "disktree")]
#[command(version = VERSION)]
#[command(about = "Turns a flat list of delimited paths into an indented folder tree")]
#[command(
    long_about = "Turns a flat list of delimited paths into an indented folder tree.\n\nReads one path per line (or per NUL byte with --null), builds the folder\nhierarchy, and prints one line per distinct folder, children sorted by name\nand indented by nesting depth."
)]
pub struct Args {
    /// Character separating path segments
    #[arg(short = 'd', long = "delimiter", default_value_t = '\\')]
    pub delimiter: char,

    /// Treat input records as NUL-delimited instead of line-delimited
    #[arg(short = '0', long = "null")]
    pub null: bool,

    /// Spaces per nesting level
    #[arg(long = "indent", default_value_t = 1)]
    pub indent: usize,

    /// Print a summary footer after the listing
    #[arg(long = "stats")]
    pub stats: bool,

    /// File containing the path list; '-' reads from stdin
    #[arg(default_value = "-")]
    pub input: String,
}

impl Args {
    /// Effective indent unit; zero would flatten the hierarchy, so it is
    /// clamped to at least one space per level.
    pub fn indent_unit(&self) -> usize {
        self.indent.max(1)
    }
}
