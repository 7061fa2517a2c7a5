//! Load the demo schema, seed rows, and stored routines.
//!
//! Run this once before any other demo. It is destructive: the employees
//! table is dropped and recreated with the seed data.

use employee_db_demos::prelude::*;
use employee_db_demos::scripts::{ROUTINES_SQL, SCHEMA_SQL};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let cfg = DemoConfig::from_env()?;
    let client = connect(&cfg).await?;

    println!("Loading schema and seed data...");
    client.batch_execute(SCHEMA_SQL).await?;

    println!("Loading stored routines...");
    client.batch_execute(ROUTINES_SQL).await?;

    let employees = fetch_all_ordered(&client).await?;
    println!("\nDemo database is ready with {} employees:", employees.len());
    print_roster(&employees);

    Ok(())
}
