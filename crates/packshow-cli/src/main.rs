use clap::{Parser, Subcommand};
use std::path::PathBuf;

use packshow_model::{KnapsackInstance, knapsack, parser, slideshow};
use packshow_solver::SolutionStatus;

#[derive(Parser)]
#[command(name = "packshow")]
#[command(about = "Mixed-integer programming demos: knapsack and slideshow", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a random knapsack instance and solve it
    Knapsack {
        /// Number of items to generate
        #[arg(short, long, default_value_t = 10000)]
        items: usize,
        /// Seed for the random generator
        #[arg(short, long, default_value_t = 0)]
        seed: u64,
        /// Output format (json, pretty)
        #[arg(short, long, default_value = "pretty")]
        format: String,
    },
    /// Build and solve the slideshow for one photo collection file
    Solve {
        /// The photo collection file
        input: PathBuf,
        /// Where to write the slide list
        output: PathBuf,
    },
    /// Process every .txt collection in a directory
    Batch {
        /// Directory holding the input collections
        input_dir: PathBuf,
        /// Directory the _output.txt files are written into
        output_dir: PathBuf,
    },
    /// Check a photo collection file for errors
    Check {
        /// The file to check
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Knapsack {
            items,
            seed,
            format,
        } => {
            let instance = KnapsackInstance::generate(items, seed);
            let report = knapsack::solve(&instance);

            if format == "json" {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&report)
                        .unwrap_or_else(|e| format!("Error: {e}"))
                );
                if report.status != SolutionStatus::Optimal {
                    std::process::exit(1);
                }
            } else {
                match report.status {
                    SolutionStatus::Optimal => {
                        println!("Status: OPTIMAL");
                        println!("Total value: {:.2}", report.total_value);
                        println!(
                            "Selected items ({} of {}): {:?}",
                            report.selected.len(),
                            items,
                            report.selected
                        );
                    }
                    _ => {
                        println!("No optimal solution found.");
                        std::process::exit(1);
                    }
                }
            }
        }
        Commands::Solve { input, output } => match slideshow::solve_file(&input, &output) {
            Ok(count) => {
                println!("Wrote {} slides to {}", count, output.display());
            }
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        },
        Commands::Batch {
            input_dir,
            output_dir,
        } => match packshow_model::process_dir(&input_dir, &output_dir) {
            Ok(report) => {
                for entry in &report.entries {
                    println!(
                        "{} -> {} ({} slides)",
                        entry.input.display(),
                        entry.output.display(),
                        entry.slide_count
                    );
                }
                println!("{} files processed", report.entries.len());
            }
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        },
        Commands::Check { file } => {
            let source = match std::fs::read_to_string(&file) {
                Ok(s) => s,
                Err(e) => {
                    eprintln!("Error reading file: {e}");
                    std::process::exit(1);
                }
            };

            match parser::Parser::parse(&source) {
                Ok(photos) => {
                    let horizontal = photos.iter().filter(|p| p.is_horizontal()).count();
                    let vertical = photos.len() - horizontal;

                    println!("✓ {} is valid", file.display());
                    println!("  {} photos", photos.len());
                    println!("  {} horizontal", horizontal);
                    println!("  {} vertical", vertical);
                }
                Err(e) => {
                    eprintln!("✗ {} has errors:", file.display());
                    eprintln!("  {}", e);
                    std::process::exit(1);
                }
            }
        }
    }
}
