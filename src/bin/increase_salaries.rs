//! Stored-procedure demo: a data-modifying procedure, with a before/after
//! comparison of the affected rows.

use clap::Parser;
use employee_db_demos::prelude::*;

#[derive(Parser, Debug)]
#[command(about = "Raise a department's salaries via a stored procedure")]
struct Args {
    #[arg(long, default_value = "Engineering")]
    department: String,
    #[arg(long, default_value_t = 10000.0)]
    amount: f64,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_tracing();

    let cfg = DemoConfig::from_env()?;
    let client = connect(&cfg).await?;

    println!("=== SALARIES BEFORE THE INCREASE ===\n");
    let before = fetch_by_department(&client, &args.department).await?;
    print_details(&before);

    println!(
        "\nCalling stored procedure: increase_salaries_for_department('{}', {})",
        args.department, args.amount
    );
    increase_salaries_for_department(&client, &args.department, args.amount).await?;
    println!("Stored procedure call finished");

    println!("\n=== SALARIES AFTER THE INCREASE ===\n");
    let after = fetch_by_department(&client, &args.department).await?;
    print_details(&after);

    Ok(())
}
