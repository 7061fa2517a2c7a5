//! Stored-procedure demo: IN plus INOUT parameters. The count comes back in
//! the procedure's output row.

use clap::Parser;
use employee_db_demos::prelude::*;

#[derive(Parser, Debug)]
#[command(about = "Count the employees of a department via a stored procedure")]
struct Args {
    #[arg(long, default_value = "Engineering")]
    department: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_tracing();

    let cfg = DemoConfig::from_env()?;
    let client = connect(&cfg).await?;

    println!(
        "Calling stored procedure: get_count_for_department('{}', ?)",
        args.department
    );
    let count = count_for_department(&client, &args.department).await?;
    println!("Stored procedure call finished");

    println!(
        "\nEmployee count in department {}: {count}",
        args.department
    );

    Ok(())
}
