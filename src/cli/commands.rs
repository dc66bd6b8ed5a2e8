//! CLI subcommand definitions

use std::path::PathBuf;

use clap::Subcommand;

use crate::consts::DEFAULT_SERVE_PORT;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Browse sessions interactively (default)
    Browse,
    /// Print the filtered session list
    List,
    /// Print one session by id
    Show {
        /// Row identifier as shown in listings
        id: i64,
    },
    /// Fix malformed date strings in the database
    Repair,
    /// Serve a directory over HTTP and open a browser tab
    Serve {
        /// Directory to serve
        #[arg(default_value = ".")]
        root: PathBuf,
        /// Port to bind on localhost
        #[arg(short, long, default_value_t = DEFAULT_SERVE_PORT)]
        port: u16,
        /// Do not open a browser tab
        #[arg(long)]
        no_open: bool,
    },
}
