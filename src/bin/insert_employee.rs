//! DML demo: insert one employee with a parameterized statement, then show
//! the updated roster.

use clap::Parser;
use employee_db_demos::prelude::*;

#[derive(Parser, Debug)]
#[command(about = "Insert a new employee and list the result")]
struct Args {
    #[arg(long, default_value = "Wright")]
    last_name: String,
    #[arg(long, default_value = "Eric")]
    first_name: String,
    #[arg(long, default_value = "eric.wright@acme.com")]
    email: String,
    #[arg(long, default_value = "HR")]
    department: String,
    #[arg(long, default_value_t = 33000.0)]
    salary: f64,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_tracing();

    let cfg = DemoConfig::from_env()?;
    let client = connect(&cfg).await?;

    println!(
        "Inserting new employee: {} {} ({})\n",
        args.first_name, args.last_name, args.department
    );

    let rows_affected = client
        .execute(
            "INSERT INTO employees (last_name, first_name, email, department, salary) \
             VALUES ($1, $2, $3, $4, $5)",
            &[
                &args.last_name,
                &args.first_name,
                &args.email,
                &args.department,
                &args.salary,
            ],
        )
        .await?;

    println!("Rows inserted: {rows_affected}\n");

    println!("Updated employee roster:");
    let employees = fetch_all_ordered(&client).await?;
    print_roster(&employees);

    Ok(())
}
