//! CLI command definitions

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for workflow results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Every section, with rephrasings
    Full,
    /// Copy-ready Q/A text
    Plain,
    /// JSON output
    Json,
}

impl From<OutputFormat> for faqsmith_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Full => faqsmith_domain::OutputFormat::Full,
            OutputFormat::Plain => faqsmith_domain::OutputFormat::Plain,
            OutputFormat::Json => faqsmith_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for faqsmith
#[derive(Parser, Debug)]
#[command(name = "faqsmith")]
#[command(author, version, about = "Generate FAQs for a page from its content and search questions")]
#[command(long_about = r#"
faqsmith resolves a page's target keywords, gathers "People Also Ask"
questions for each of them, and generates two FAQ sets from the page
content: content-based FAQs (rephrased, and interlinked for new pages)
and PAA FAQs seeded with the gathered questions.

Configuration files are loaded from (in priority order):
1. --config <path>       Explicit config file
2. ./faqsmith.toml       Project-level config
3. ~/.config/faqsmith/config.toml   Global config

Example:
  faqsmith existing --collection seo-pages --page 42
  faqsmith -o plain new --keyword "best crm" --content-file draft.html
  faqsmith pages --collection url-pattern-blog
  faqsmith keywords refresh
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Output format (overrides the config file)
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Backend base URL (overrides the config file)
    #[arg(long, value_name = "URL", global = true)]
    pub base_url: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate FAQs for an existing CMS page
    Existing(ExistingArgs),

    /// Generate FAQs for new, pasted content
    New(NewArgs),

    /// List the pages of a CMS collection
    Pages {
        /// Collection id or URL-pattern group
        #[arg(long, value_name = "ID")]
        collection: String,
    },

    /// Look up related pages for a keyword
    Links {
        #[arg(long, value_name = "KEYWORD")]
        keyword: String,
    },

    /// Manage the keyword index
    #[command(subcommand)]
    Keywords(KeywordsCommand),

    /// Inspect or clear local cache entries
    #[command(subcommand)]
    Cache(CacheCommand),
}

#[derive(Subcommand, Debug)]
pub enum KeywordsCommand {
    /// Fetch the keyword index from the CMS, replacing the cached copies
    Refresh,
}

#[derive(Args, Debug)]
pub struct ExistingArgs {
    /// Collection id or URL-pattern group
    #[arg(long, value_name = "ID")]
    pub collection: String,

    /// Page id within the collection
    #[arg(long, value_name = "ID")]
    pub page: String,
}

#[derive(Args, Debug)]
pub struct NewArgs {
    /// Target keyword
    #[arg(long, value_name = "KEYWORD")]
    pub keyword: Option<String>,

    /// File with the page content; `-` or omitted reads stdin
    #[arg(long, value_name = "PATH")]
    pub content_file: Option<PathBuf>,

    /// Page url, for keyword index lookup
    #[arg(long, value_name = "URL", requires = "category")]
    pub url: Option<String>,

    /// Keyword index category, for keyword index lookup
    #[arg(long, value_name = "NAME", requires = "url")]
    pub category: Option<String>,
}

impl NewArgs {
    /// Whether content should be read from stdin
    pub fn reads_stdin(&self) -> bool {
        self.content_file
            .as_ref()
            .is_none_or(|path| path.as_os_str() == "-")
    }
}

#[derive(Subcommand, Debug)]
pub enum CacheCommand {
    /// Show the age of an entry
    Info {
        /// e.g. keywords_json, strapi_pages_<collection>, page_details_<page>
        key: String,
    },
    /// Remove an entry
    Clear { key: String },
}
