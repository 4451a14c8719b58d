use clap::Parser;
use std::path::PathBuf;
use std::process;

use quiz_json_normalize::transform;

#[derive(Parser, Debug)]
#[command(name = "quiz-json-normalize")]
#[command(about = "Renumber and validate an English-grammar quiz JSON file in place")]
struct Args {
    /// Path to the quiz JSON file (read and then overwritten)
    #[arg(default_value = "app_english_grammar.json")]
    quiz_file: PathBuf,
}

fn main() {
    let args = Args::parse();

    match transform::process(&args.quiz_file) {
        Ok(summary) => {
            println!("\n=== Normalization Complete ===");
            println!("  ✓ Categories renumbered: {}", summary.categories);
            println!("  ✓ Items validated: {}", summary.items);
            println!("  ✓ Output file: {}", args.quiz_file.display());
        }
        Err(e) => {
            eprintln!("\n❌ Error: {}", e);
            process::exit(1);
        }
    }
}
