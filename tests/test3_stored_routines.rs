#![cfg(feature = "test-utils")]

use employee_db_demos::prelude::*;
use employee_db_demos::scripts::{ROUTINES_SQL, SCHEMA_SQL};
use employee_db_demos::test_utils::EmbeddedDemoDb;

#[test]
fn test3_stored_routines() -> Result<(), Box<dyn std::error::Error>> {
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async move {
        let db = EmbeddedDemoDb::start().await?;
        let client = connect(&db.config).await?;

        client.batch_execute(SCHEMA_SQL).await?;
        client.batch_execute(ROUTINES_SQL).await?;

        // IN + INOUT: the count comes back in the output row.
        let count = count_for_department(&client, "Engineering").await?;
        assert_eq!(count, 3);
        let none = count_for_department(&client, "Accounting").await?;
        assert_eq!(none, 0);

        // Set-returning routine, ordered by last name.
        let engineering = employees_for_department(&client, "Engineering").await?;
        let names: Vec<&str> = engineering.iter().map(|e| e.last_name.as_str()).collect();
        assert_eq!(names, vec!["Public", "Smith", "Waters"]);

        // INOUT round trip: the department name goes in, a greeting comes out.
        let greeting = greet_department(&client, "Engineering").await?;
        assert_eq!(greeting, "Hello to everyone in Engineering!");

        // Data-modifying procedure: every salary in the department moves by
        // exactly the raise amount.
        let before = fetch_by_department(&client, "Engineering").await?;
        increase_salaries_for_department(&client, "Engineering", 10000.0).await?;
        let after = fetch_by_department(&client, "Engineering").await?;
        assert_eq!(before.len(), after.len());
        for (b, a) in before.iter().zip(after.iter()) {
            assert_eq!(b.last_name, a.last_name);
            assert!((a.salary - b.salary - 10000.0).abs() < 1e-6);
        }

        // Other departments are untouched.
        let hr = fetch_by_department(&client, "HR").await?;
        let hr_salaries: Vec<f64> = hr.iter().map(|e| e.salary).collect();
        assert_eq!(hr_salaries, vec![55000.0, 28000.0]);

        drop(client);
        db.stop().await;
        Ok(())
    })
}
