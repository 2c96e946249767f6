use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;
use unique_letter_words::{find_answers, Dictionary, SearchConfig};

/// Find every set of words that uses no letter twice.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Number of words in each solution.
    word_count: usize,
    /// Length of every word.
    word_length: usize,
    /// Number of worker threads.
    threads: usize,
    /// Whitespace-delimited word list.
    dictionary: PathBuf,
    /// Where to write solutions, one per line. `-` is stdout.
    #[arg(default_value = "-")]
    output: PathBuf,
    /// Print dictionary statistics before searching.
    #[arg(long)]
    stats: bool,
    /// Don't show the partition being explored.
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let config = SearchConfig::new(args.word_count, args.word_length, args.threads)?;
    let dictionary = Dictionary::load(&args.dictionary, Some(config.word_length))
        .with_context(|| format!("could not load {}", args.dictionary.display()))?;
    if args.stats {
        eprint!("{}", dictionary.stats());
    }

    let to_stdout = args.output.as_os_str() == "-";
    let sink: Box<dyn Write + Send> = if to_stdout {
        Box::new(BufWriter::new(io::stdout()))
    } else {
        let file = File::create(&args.output)
            .with_context(|| format!("could not open {}", args.output.display()))?;
        Box::new(BufWriter::new(file))
    };

    let show_progress = !args.quiet;
    let start = Instant::now();
    let (report, _) = find_answers(&dictionary, config, sink, |seed| {
        if show_progress {
            eprint!("\r{}", seed);
        }
    })
    .with_context(|| format!("search into {} failed", args.output.display()))?;
    if show_progress {
        eprintln!();
    }

    let summary = format!(
        "Answer count: {}\nDuration: {} seconds",
        report.solutions,
        start.elapsed().as_secs()
    );
    if to_stdout {
        eprintln!("{}", summary);
    } else {
        println!("{}", summary);
    }
    Ok(())
}
