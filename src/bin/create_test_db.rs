use std::error::Error;
use std::path::Path;
use std::process::exit;

use clap::Parser;
use rusqlite::Connection;
use time::{Duration, OffsetDateTime};

use expense_tracker::{CATEGORIES, Expense, create_expense, initialize_db};

/// A utility for creating a test database for the expense tracker server.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short)]
    output_path: String,

    /// How many sample expenses to create.
    #[arg(long, short, default_value_t = 60)]
    count: u32,
}

const DESCRIPTIONS: [&str; 6] = [
    "",
    "Weekly shop",
    "Cab to the station",
    "Dinner with friends",
    "Monthly bill",
    "Birthday present",
];

/// Create and populate a database for manual testing.
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let output_path = Path::new(&args.output_path);

    if let Err(message) = check_output_path(output_path) {
        eprintln!("{message}");
        exit(1);
    }

    println!("Creating database at {}", output_path.display());
    let conn = Connection::open(output_path)?;

    initialize_db(&conn)?;

    println!("Creating {} sample expenses...", args.count);

    let today = OffsetDateTime::now_utc().date();

    // Spread the expenses over roughly the last six months so every chart
    // on the analytics page has data.
    for i in 0..args.count {
        let category = CATEGORIES[i as usize % CATEGORIES.len()];
        let amount = f64::from((i * 137) % 2_000 + 50) + f64::from(i % 100) / 100.0;
        let date = today - Duration::days(i64::from(i * 3 % 180));
        let description = DESCRIPTIONS[i as usize % DESCRIPTIONS.len()];

        create_expense(
            Expense::build(amount, category, date).description(description),
            &conn,
        )?;
    }

    println!("Success!");

    Ok(())
}

/// The path must name a new file with an extension, e.g. "expenses.db".
fn check_output_path(path: &Path) -> Result<(), String> {
    if path.extension().is_none_or(|extension| extension.is_empty()) {
        return Err(format!(
            "Output path {} needs a file extension, e.g. 'expenses.db'.",
            path.display()
        ));
    }

    if path.exists() {
        return Err(format!("Refusing to overwrite {}.", path.display()));
    }

    Ok(())
}
