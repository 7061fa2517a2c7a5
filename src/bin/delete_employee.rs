//! DML demo: delete an employee by name, showing the row before and the
//! not-found notice after.

use clap::Parser;
use employee_db_demos::prelude::*;

#[derive(Parser, Debug)]
#[command(about = "Delete an employee by name")]
struct Args {
    #[arg(long, default_value = "John")]
    first_name: String,
    #[arg(long, default_value = "Doe")]
    last_name: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_tracing();

    let cfg = DemoConfig::from_env()?;
    let client = connect(&cfg).await?;

    println!("BEFORE THE DELETE...");
    let before = find_by_name(&client, &args.first_name, &args.last_name).await?;
    print_lookup(&before, &args.first_name, &args.last_name);

    println!(
        "\nDeleting employee: {} {}\n",
        args.first_name, args.last_name
    );

    let rows_affected = client
        .execute(
            "DELETE FROM employees WHERE last_name = $1 AND first_name = $2",
            &[&args.last_name, &args.first_name],
        )
        .await?;

    println!("Rows deleted: {rows_affected}");

    println!("\nAFTER THE DELETE...");
    let after = find_by_name(&client, &args.first_name, &args.last_name).await?;
    print_lookup(&after, &args.first_name, &args.last_name);

    Ok(())
}
