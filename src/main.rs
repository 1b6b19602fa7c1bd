use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use log::error;

use simpair::{rank, DirSource, Report, Source};

#[derive(Parser, Debug)]
#[command(
    name = "simpair",
    about = "Rank a directory's entries by pairwise name similarity, closest first"
)]
struct Cli {
    /// Directory whose entries are compared pairwise
    dir: PathBuf,

    /// Only print the N closest pairs
    #[arg(long)]
    limit: Option<usize>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let entries = DirSource::new(&cli.dir).list().map_err(|err| {
        error!("cannot read {}: {err}", cli.dir.display());
        err
    })?;

    println!("{} files", entries.len());

    // Fewer than 3 entries: nothing worth ranking, report the names as-is.
    if entries.len() < 3 {
        match entries.as_slice() {
            [only] => println!("{}", only.name),
            [first, second] => println!("{} {}", first.name, second.name),
            _ => {}
        }
        return Ok(());
    }

    let mut builder = rank().entries(entries);
    if let Some(n) = cli.limit {
        builder = builder.limit(n);
    }
    let report = builder.run()?;

    render(&report);
    Ok(())
}

/// Print the ranked report: pair count, then one blank-line-separated block
/// per combination in ascending-distance order.
fn render(report: &Report) {
    println!("{} combinations", report.stats.pairs);
    println!();

    for (i, comb) in report.combinations.iter().enumerate() {
        println!("{} ({})", comb.first.name, format_size(comb.first.size));
        println!("{} ({})", comb.second.name, format_size(comb.second.size));
        println!("{}", comb.dist);
        println!("{}", comb.first.key);
        println!("{}", comb.second.key);
        if i < report.combinations.len() - 1 {
            println!();
        }
    }
}

/// Format a byte count with comma thousands-grouping: 1234567 -> "1,234,567".
fn format_size(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
