use clap::{Parser, Subcommand};
use obra::{BudgetFile, BudgetGenerator, PipelineError};
use obra_pricing::{format_grouped, round_money};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "obra", version, about = "Construction budgets: totals and printable PDF")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the adjustment cascade of a budget file
    Totals {
        /// Budget file (JSON)
        file: PathBuf,
    },
    /// Write the printable budget as PDF
    Render {
        /// Budget file (JSON)
        file: PathBuf,
        /// Output PDF (defaults to the budget name next to the input file)
        #[arg(short = 'o', long = "output")]
        output: Option<PathBuf>,
    },
    /// Write a new budget file pre-filled with the starter catalog
    Init {
        #[arg(short = 'o', long = "output", default_value = "presupuesto.json")]
        output: PathBuf,
        /// Budget name
        #[arg(long = "name", default_value = "Nuevo presupuesto")]
        name: String,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    if let Err(e) = run(cli.command) {
        match e.field() {
            Some(field) => eprintln!("Error in `{}`: {}", field, e),
            None => eprintln!("Error: {}", e),
        }
        std::process::exit(1);
    }
}

fn run(command: Command) -> Result<(), PipelineError> {
    match command {
        Command::Totals { file } => {
            let budget = BudgetFile::load(&file)?;
            let generator = BudgetGenerator::new(budget.report_layout());
            let totals = generator.totals(&budget.items, &budget.adjustments)?;
            println!("{}", budget.name);
            for (label, amount) in totals.summary() {
                println!("{:<12}{:>16} USD", label, format_grouped(round_money(amount)));
            }
        }
        Command::Render { file, output } => {
            let budget = BudgetFile::load(&file)?;
            let base_dir = file.parent().unwrap_or(Path::new("."));
            let metadata = budget.metadata(base_dir)?;
            let output = output.unwrap_or_else(|| base_dir.join(budget.output_file_name()));

            let generator = BudgetGenerator::new(budget.report_layout());
            let report = generator.generate_to_file(&budget.items, &metadata, &output)?;
            for warning in &report.warnings {
                eprintln!("Warning: {}", warning);
            }
            println!("Wrote {} ({} page(s))", output.display(), report.page_count);
        }
        Command::Init { output, name } => {
            let budget = BudgetFile::starter(name);
            fs::write(&output, budget.to_json()?)?;
            println!("Created {} with {} items", output.display(), budget.items.len());
        }
    }
    Ok(())
}
