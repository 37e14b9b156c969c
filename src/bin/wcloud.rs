//! wcloud — rank the significant words of text files for a word cloud.
//!
//! Usage:
//!   wcloud notes.txt --max-words 50
//!   cat speech.txt | wcloud --focus-word freedom --pretty

use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;
use std::process;

use clap::Parser;

use wordcloud_engine::{
    CloudConfig, CloudSession, InvalidLinePolicy, RawLine, WcResult, WordCloudEngine,
};

#[derive(Parser)]
#[command(
    name = "wcloud",
    about = "Weighted word list for word-cloud rendering",
    version
)]
struct Cli {
    /// Input text files (reads stdin when none are given)
    files: Vec<PathBuf>,

    /// Word to emphasize above all others
    #[arg(long, visible_alias = "title")]
    focus_word: Option<String>,

    /// Maximum words to output (0 = all)
    #[arg(long, visible_alias = "max-rendered-words")]
    max_words: Option<u16>,

    /// Tokenizer worker threads
    #[arg(long)]
    workers: Option<usize>,

    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Fail when a line is not valid UTF-8 instead of skipping it
    #[arg(long)]
    strict: bool,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> WcResult<()> {
    let mut config = match &cli.config {
        Some(path) => CloudConfig::from_file(path)?,
        None => CloudConfig::default(),
    };
    if let Some(word) = cli.focus_word {
        config.focus_word = Some(word);
    }
    if let Some(max) = cli.max_words {
        config.max_rendered_words = max;
    }
    if let Some(workers) = cli.workers {
        config.workers = workers;
    }
    if cli.strict {
        config.invalid_lines = InvalidLinePolicy::Fail;
    }

    let engine = WordCloudEngine::new(config)?;
    let mut session = engine.begin()?;

    if cli.files.is_empty() {
        feed(&mut session, io::stdin().lock())?;
    } else {
        for path in &cli.files {
            let file = std::fs::File::open(path)?;
            feed(&mut session, BufReader::new(file))?;
        }
    }
    log::info!("Read {} lines", session.lines());

    let ranked = session.finish()?;
    let json = if cli.pretty {
        serde_json::to_string_pretty(&ranked)
    } else {
        serde_json::to_string(&ranked)
    }
    .map_err(io::Error::from)?;
    println!("{}", json);
    Ok(())
}

/// Stream raw byte lines into the session; UTF-8 is checked by the workers.
fn feed<R: BufRead>(session: &mut CloudSession, reader: R) -> WcResult<()> {
    for line in reader.split(b'\n') {
        let mut bytes = line?;
        if bytes.last() == Some(&b'\r') {
            bytes.pop();
        }
        session.process(RawLine::new(bytes))?;
    }
    Ok(())
}
