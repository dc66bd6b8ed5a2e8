mod cli;
mod config;
mod consts;
mod db;
mod error;
mod output;
mod repair;
mod serve;
mod tui;

use std::path::PathBuf;

use clap::Parser;

use cli::{Cli, Commands};
use config::Config;
use consts::DEFAULT_DB_FILE;
use db::{Day, SessionFilter, SessionStore};
use error::AppError;
use output::{
    ListTableOptions, detail_lines, output_detail_json, output_session_json, print_session_table,
};

fn main() {
    if let Err(error) = run() {
        eprintln!("{error}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    let cli = Cli::parse().with_config(&Config::load());

    // serve never touches the store
    if let Some(Commands::Serve { root, port, no_open }) = &cli.command {
        return serve::run(root.clone(), *port, !*no_open);
    }

    let filter = SessionFilter {
        text: cli.filter.clone(),
        day: cli.day.as_deref().map(Day::parse).transpose()?,
    };

    let db_path = cli
        .db
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_FILE));
    let store = SessionStore::open(&db_path)?;

    match &cli.command {
        None | Some(Commands::Browse) => tui::run(&store, filter),
        Some(Commands::List) => {
            let rows = store.list(&filter)?;
            if cli.json {
                println!("{}", output_session_json(&rows, cli.order));
            } else if rows.is_empty() {
                println!("No sessions found.");
            } else {
                print_session_table(
                    &rows,
                    ListTableOptions {
                        order: cli.order,
                        use_color: cli.use_color(),
                    },
                );
            }
            Ok(())
        }
        Some(Commands::Show { id }) => {
            // Unknown ids print nothing; that is not an error
            if let Some(row) = store.get(*id)? {
                if cli.json {
                    println!("{}", output_detail_json(&row));
                } else {
                    for line in detail_lines(&row) {
                        println!("{line}");
                    }
                }
            }
            Ok(())
        }
        Some(Commands::Repair) => {
            let fixed = repair::repair_dates(&store)?;
            if fixed == 0 {
                println!("No malformed dates found.");
            } else {
                println!("Fixed {fixed} date entries in the DB.");
            }
            Ok(())
        }
        Some(Commands::Serve { .. }) => unreachable!(),
    }
}
