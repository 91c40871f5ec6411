use std::error::Error;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use sentence_search::{Engine, EngineConfig};

#[derive(Parser)]
#[command(name = "sentence-search", about = "Answer a question from a directory of text files")]
struct Args {
    /// Directory holding the corpus documents
    corpus: PathBuf,

    /// JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of top files searched for sentences
    #[arg(long)]
    files: Option<usize>,

    /// Number of sentences printed
    #[arg(long)]
    sentences: Option<usize>,

    /// Stopword list, one word per line
    #[arg(long)]
    stopwords: Option<PathBuf>,

    /// Query text; prompted for on stdin when omitted
    #[arg(short, long)]
    query: Option<String>,
}

impl Args {
    fn engine_config(&self) -> Result<EngineConfig, Box<dyn Error>> {
        let mut config = match &self.config {
            Some(path) => EngineConfig::from_file(path)?,
            None => EngineConfig::default(),
        };
        if let Some(n) = self.files {
            config.file_matches = n;
        }
        if let Some(n) = self.sentences {
            config.sentence_matches = n;
        }
        if let Some(path) = &self.stopwords {
            config.stopwords = Some(path.clone());
        }
        Ok(config)
    }
}

fn read_query() -> io::Result<String> {
    print!("Query: ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line)
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();
    let config = args.engine_config()?;

    let engine = Engine::load(&args.corpus, config)?;

    let text = match &args.query {
        Some(text) => text.clone(),
        None => read_query()?,
    };
    let query = engine.query(&text);
    if query.is_empty() {
        tracing::warn!("query has no content words");
    }

    for answer in engine.answer(&query) {
        println!("{}", answer);
    }

    Ok(())
}
