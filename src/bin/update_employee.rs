//! DML demo: change an employee's email address, showing the row before and
//! after the update.

use clap::Parser;
use employee_db_demos::prelude::*;

#[derive(Parser, Debug)]
#[command(about = "Update an employee's email address")]
struct Args {
    #[arg(long, default_value = "John")]
    first_name: String,
    #[arg(long, default_value = "Doe")]
    last_name: String,
    #[arg(long, default_value = "john.doe@newmail.com")]
    email: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_tracing();

    let cfg = DemoConfig::from_env()?;
    let client = connect(&cfg).await?;

    println!("BEFORE THE UPDATE...");
    let before = find_by_name(&client, &args.first_name, &args.last_name).await?;
    print_lookup(&before, &args.first_name, &args.last_name);

    println!(
        "\nUpdating email for {} {}...\n",
        args.first_name, args.last_name
    );

    let rows_affected = client
        .execute(
            "UPDATE employees SET email = $1 WHERE last_name = $2 AND first_name = $3",
            &[&args.email, &args.last_name, &args.first_name],
        )
        .await?;

    println!("Rows updated: {rows_affected}");

    println!("\nAFTER THE UPDATE...");
    let after = find_by_name(&client, &args.first_name, &args.last_name).await?;
    print_lookup(&after, &args.first_name, &args.last_name);

    Ok(())
}
