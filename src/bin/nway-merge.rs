//! n-way file merge front end.
//!
//! Reads an ancestor file and any number of candidate files, performs a
//! line-based n-way merge and prints the result to stdout. On conflict the
//! output carries standard conflict markers and the exit code is 1.
//!
//! ## Usage
//!
//! ```bash
//! nway-merge <ancestor> <candidate>...
//! RUST_LOG=debug nway-merge base.txt ours.txt theirs.txt
//! ```

use std::env;
use std::fs;
use std::process::ExitCode;

use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use nway_merge::canonical::fingerprint_hex;
use nway_merge::text::{diff_lines, render_merge};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn usage() {
    eprintln!("usage: nway-merge <ancestor> <candidate>...");
    eprintln!();
    eprintln!("Merges any number of candidate files against a common ancestor.");
    eprintln!("Prints the merged text to stdout; conflicting regions are wrapped");
    eprintln!("in <<<<<<< / ||||||| / ======= / >>>>>>> markers and the exit");
    eprintln!("code is 1.");
}

fn run(paths: &[String]) -> Result<bool, String> {
    let read = |path: &String| {
        fs::read_to_string(path).map_err(|e| format!("cannot read {}: {}", path, e))
    };

    let ancestor = read(&paths[0])?;
    let candidates = paths[1..]
        .iter()
        .map(read)
        .collect::<Result<Vec<_>, _>>()?;
    let candidate_refs: Vec<&str> = candidates.iter().map(String::as_str).collect();
    let labels: Vec<&str> = paths[1..].iter().map(String::as_str).collect();

    let diff = diff_lines(&ancestor, &candidate_refs);
    debug!(
        hunks = diff.len(),
        fingerprint = %fingerprint_hex(&diff),
        "computed line diff"
    );

    let conflicted = diff.has_conflict();
    if conflicted {
        info!(hunks = ?diff.conflicting_hunks(), "merge has conflicts");
    }
    print!("{}", render_merge(&diff, &labels));
    Ok(conflicted)
}

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() || args[0] == "-h" || args[0] == "--help" {
        usage();
        return ExitCode::from(2);
    }

    match run(&args) {
        Ok(false) => ExitCode::SUCCESS,
        Ok(true) => ExitCode::FAILURE,
        Err(msg) => {
            eprintln!("nway-merge: {}", msg);
            ExitCode::from(2)
        }
    }
}
