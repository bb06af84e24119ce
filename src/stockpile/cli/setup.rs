use clap::{Parser, Subcommand};
use stockpile::model::{FolderIcon, FolderKind};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Returns the version string with the build's git hash and commit date.
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const BUILD: &str = env!("STOCKPILE_BUILD");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| format!("{} ({})", VERSION, BUILD))
}

#[derive(Parser, Debug)]
#[command(name = "stockpile", bin_name = "stockpile", version = get_version())]
#[command(about = "Stock and shopping list folders with barcode product lookup", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create the default stock and shopping folders
    Init,

    /// List folders
    #[command(alias = "ls")]
    List {
        /// Only show folders of this kind (stock or shopping)
        #[arg(short, long)]
        kind: Option<FolderKind>,
    },

    /// Create a folder
    #[command(alias = "n")]
    Create {
        /// Folder name
        name: String,

        /// Icon symbol (house, cart, refrigerator, ...)
        #[arg(short, long, default_value = "house")]
        icon: FolderIcon,

        /// Folder kind (stock or shopping)
        #[arg(short, long, default_value = "stock")]
        kind: FolderKind,
    },

    /// Rename, re-icon or retype a folder
    #[command(alias = "e")]
    Edit {
        /// Folder index, id or name
        folder: String,

        /// New name
        #[arg(short, long)]
        name: Option<String>,

        /// New icon symbol
        #[arg(short, long)]
        icon: Option<FolderIcon>,

        /// New kind (stock or shopping)
        #[arg(short, long)]
        kind: Option<FolderKind>,
    },

    /// Delete a folder
    #[command(alias = "rm")]
    Delete {
        /// Folder index, id or name
        folder: String,
    },

    /// Look up a product by barcode
    Lookup {
        /// The scanned code
        code: String,

        /// Write the product image to this file
        #[arg(long)]
        save_image: Option<PathBuf>,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., lookup.base-url)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

/// Installs the stderr log subscriber. `RUST_LOG` wins over `--verbose`.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
