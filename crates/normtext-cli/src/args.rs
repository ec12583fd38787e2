use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug, Clone)]
#[command(name = "normtext", version, about = "normtext CLI")]
pub struct Cli {
    /// Emit JSON output on stdout.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Normalize text from a file or stdin into canonical form.
    Normalize {
        /// Input path, or `-` for stdin.
        #[arg(default_value = "-")]
        input: String,

        #[command(flatten)]
        opts: PipelineArgs,
    },

    /// Generate a separator-joined slug.
    Slugify {
        /// Input path, or `-` for stdin.
        #[arg(default_value = "-")]
        input: String,

        /// Separator placed between slug segments.
        #[arg(long, default_value = "-")]
        sep: char,

        /// Default encoding label for byte input.
        #[arg(long, default_value = "utf-8")]
        encoding: String,
    },

    /// Report category and transliteration per code point.
    Inspect {
        /// Input path, or `-` for stdin.
        #[arg(default_value = "-")]
        input: String,

        /// Default encoding label for byte input.
        #[arg(long, default_value = "utf-8")]
        encoding: String,
    },
}

#[derive(Args, Debug, Clone)]
pub struct PipelineArgs {
    /// Skip Unicode-aware lowercasing.
    #[arg(long)]
    pub no_lowercase: bool,

    /// Skip whitespace collapsing.
    #[arg(long)]
    pub no_collapse: bool,

    /// Apply NFKD decomposition before other stages.
    #[arg(long)]
    pub decompose: bool,

    /// General transliteration of non-Latin scripts.
    #[arg(long)]
    pub latinize: bool,

    /// Strict transliteration; only printable ASCII survives.
    #[arg(long)]
    pub ascii: bool,

    /// Comma-separated category codes to replace (default: all but letters).
    #[arg(long, value_name = "CODES")]
    pub replace: Option<String>,

    /// Default encoding label for byte input.
    #[arg(long, default_value = "utf-8")]
    pub encoding: String,
}
