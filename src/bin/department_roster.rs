//! Stored-routine demo: a set-returning routine whose result set is printed
//! like any other query result.

use clap::Parser;
use employee_db_demos::prelude::*;

#[derive(Parser, Debug)]
#[command(about = "List a department's employees via a set-returning routine")]
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
        "Calling stored routine: get_employees_for_department('{}')",
        args.department
    );
    let employees = employees_for_department(&client, &args.department).await?;
    println!("Stored routine call finished\n");

    print_details(&employees);

    Ok(())
}
