//! Stored-procedure demo: a single INOUT parameter that goes in as a
//! department name and comes back as a greeting.

use clap::Parser;
use employee_db_demos::prelude::*;

#[derive(Parser, Debug)]
#[command(about = "Greet a department via an INOUT stored-procedure parameter")]
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
        "Calling stored procedure: greet_the_department('{}')",
        args.department
    );
    let greeting = greet_department(&client, &args.department).await?;
    println!("Stored procedure call finished");

    println!("\nGreeting result: {greeting}");

    Ok(())
}
