//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `audience_core` wiring without any UI.
//! - Run one deterministic search/drag session and print its output payload.
//!
//! Usage: `audience_cli [query] [--log-dir <absolute dir>]`

use audience_core::{
    core_version, default_log_level, init_logging, market_shares, AudienceOutput, Bucket, Catalog,
    DragEvent, DragLocation, SelectionStore,
};
use std::process::ExitCode;

const DEFAULT_QUERY: &str = "bank";

fn main() -> ExitCode {
    let mut query = DEFAULT_QUERY.to_string();
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--log-dir" {
            let Some(dir) = args.next() else {
                eprintln!("--log-dir requires a directory");
                return ExitCode::FAILURE;
            };
            if let Err(err) = init_logging(default_log_level(), &dir) {
                eprintln!("logging disabled: {err}");
            }
        } else {
            query = arg;
        }
    }

    println!("audience_core version={}", core_version());

    let mut store = SelectionStore::new(Catalog::builtin());
    store.set_query(query.as_str());
    println!("query=`{}` results={}", store.query(), store.search_results().len());
    for topic in store.search_results().iter().take(5) {
        println!(
            "  {:<40} similarity={:.2}",
            topic.name,
            topic.similarity.unwrap_or_default()
        );
    }

    for bucket in [Bucket::Core, Bucket::Supportive] {
        let outcome = store.handle_drag_end(&DragEvent::between(
            DragLocation::new(Bucket::SearchResults, 0),
            DragLocation::new(bucket, 0),
        ));
        println!("drag searchResults[0] -> {bucket}: {outcome:?}");
    }

    let shares = market_shares(store.core());
    for (topic, share) in store.core().iter().zip(shares) {
        println!("market share {}={share}%", topic.name);
    }

    match AudienceOutput::from_snapshot(&store.snapshot()).to_pretty_json() {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("failed to render output: {err}");
            ExitCode::FAILURE
        }
    }
}
