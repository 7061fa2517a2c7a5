//! Prepared-statement demo: one statement, prepared once, executed with two
//! different parameter sets.

use employee_db_demos::prelude::*;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let cfg = DemoConfig::from_env()?;
    let client = connect(&cfg).await?;

    let stmt = prepare_salary_filter(&client).await?;

    println!("Employees in Legal with a salary above 80000:");
    let legal = run_salary_filter(&client, &stmt, 80000.0, "Legal").await?;
    print_details(&legal);

    // Same prepared statement, different bindings.
    println!("\nEmployees in HR with a salary above 25000:");
    let hr = run_salary_filter(&client, &stmt, 25000.0, "HR").await?;
    print_details(&hr);

    Ok(())
}
