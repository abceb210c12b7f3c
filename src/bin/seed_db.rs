use std::error::Error;
use std::path::Path;
use std::process::exit;
use std::sync::{Arc, Mutex};

use clap::Parser;
use rusqlite::Connection;
use time::OffsetDateTime;

use expense_ledger::{ExpenseStore, NewExpense, Payer, SQLiteExpenseStore, initialize_db};

/// A utility for creating a database filled with sample expenses for manual testing.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short)]
    output_path: String,

    /// How many sample expenses to create.
    #[arg(long, short, default_value_t = 10)]
    count: usize,
}

/// Create and populate a database for manual testing.
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let output_path = Path::new(&args.output_path);

    match output_path.extension() {
        None => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        Some(extension) if extension.is_empty() => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        _ => {}
    }

    if output_path.is_file() {
        eprintln!("File already exists at {output_path:#?}!");
        exit(1);
    }

    println!("Creating database at {output_path:#?}");
    let conn = Connection::open(output_path)?;

    initialize_db(&conn)?;

    println!("Creating {} expenses...", args.count);

    let store = SQLiteExpenseStore::new(Arc::new(Mutex::new(conn)));
    let now = OffsetDateTime::now_utc();

    for i in 0..args.count {
        store.create(NewExpense {
            payer: Payer::new(&format!("Payer {i}"))?,
            amount: (i + 1) as f64 * 10.0,
            note: i.to_string(),
            date: now,
        })?;
    }

    println!("Success!");

    Ok(())
}
