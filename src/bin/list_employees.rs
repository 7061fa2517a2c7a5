//! Basic query demo: fetch every employee and print the roster.

use employee_db_demos::prelude::*;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let cfg = DemoConfig::from_env()?;
    let client = connect(&cfg).await?;

    let employees = fetch_all(&client).await?;

    println!("Employee roster:");
    print_roster(&employees);

    Ok(())
}
