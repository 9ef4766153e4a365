use std::env;

use ragpipe_core::config::{expand_path, Config};
use ragpipe_core::ingest::IngestionPipeline;
use ragpipe_core::traits::Retriever;
use ragpipe_retrieval::DummyRetriever;

fn parse_args() -> (String, Vec<String>) {
    let mut args: Vec<String> = env::args().collect();
    let prog = args.remove(0);
    if args.is_empty() {
        eprintln!("Usage: {} <ingest|query> [args...]", prog);
        std::process::exit(1);
    }
    let cmd = args.remove(0);
    (cmd, args)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::load().map_err(|e| {
        eprintln!("Error loading config: {}", e);
        e
    })?;
    let (cmd, args) = parse_args();
    match cmd.as_str() {
        "ingest" => {
            let data_dir = args.first().map(expand_path).unwrap_or_else(|| {
                let dir: String = config
                    .get("data.raw_txt_dir")
                    .unwrap_or_else(|_| "data/txt".to_string());
                expand_path(dir)
            });
            println!("Ingesting from {}", data_dir.display());
            let pipeline = IngestionPipeline::with_config(config.chunking());
            let chunks = pipeline.run(&data_dir)?;
            println!("Ingest complete ({} chunks)", chunks.len());
        }
        "query" => {
            let top_k: usize = args.first().and_then(|s| s.parse().ok()).unwrap_or(5);
            // No embedder is wired up yet; the dummy backend ignores the
            // query vector anyway.
            let retriever = DummyRetriever::new();
            let results = retriever.retrieve(&[0.0; 4], top_k)?;
            println!("{}", serde_json::to_string_pretty(&results)?);
        }
        _ => {
            eprintln!("Unknown command: {}", cmd);
            std::process::exit(1);
        }
    }
    Ok(())
}
