// lexcache-spell: Check spelling of words from stdin.
//
// Loads the dictionaries named in a settings file, then reads words from
// stdin (one per line) and reports whether each word is in the merged
// dictionary:
//   C: word    (correct)
//   W: word    (wrong / misspelled)
//
// Usage:
//   lexcache-spell [-c CONFIG] [OPTIONS]
//
// Options:
//   -c, --config PATH      Settings file (default: $LEXCACHE_CONFIG or ./lexcache.json)
//   -i, --ignore-case      Also fold case and accents for every entry
//   -h, --help             Print help

use std::io::{self, BufRead, Write};

use lexcache::{DictionaryCache, MatchOptions, get_dictionary};

#[tokio::main]
async fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (config_path, args) =
        lexcache_cli::parse_config_path(&args).unwrap_or_else(|e| lexcache_cli::fatal(&e));

    if lexcache_cli::wants_help(&args) {
        println!("lexcache-spell: Check spelling of words from stdin.");
        println!();
        println!("Usage: lexcache-spell [-c CONFIG] [OPTIONS]");
        println!();
        println!("Reads words from stdin (one per line). Prints:");
        println!("  C: word    (correct)");
        println!("  W: word    (misspelled)");
        println!();
        println!("Options:");
        println!("  -c, --config PATH      Settings file (default: $LEXCACHE_CONFIG or ./lexcache.json)");
        println!("  -i, --ignore-case      Also fold case and accents for every entry");
        println!("  -h, --help             Print this help");
        println!();
        println!("Set RUST_LOG=debug to trace dictionary loading.");
        return;
    }

    lexcache_cli::init_logging();

    let options = MatchOptions::ignore_case(args.iter().any(|a| a == "-i" || a == "--ignore-case"));

    let settings = lexcache_cli::load_settings(config_path.as_deref())
        .unwrap_or_else(|e| lexcache_cli::fatal(&e));

    let cache = DictionaryCache::default();
    // Load errors are already logged as warnings by the cache.
    let dictionary = get_dictionary(&cache, &settings).await;
    tracing::debug!(
        words = dictionary.len(),
        errors = dictionary.errors().len(),
        "dictionary ready"
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("error reading stdin: {e}");
                break;
            }
        };
        let word = line.trim();
        if word.is_empty() {
            continue;
        }

        let tag = if dictionary.has_with_options(word, &options) {
            'C'
        } else {
            'W'
        };
        let _ = writeln!(out, "{tag}: {word}");
    }
}
