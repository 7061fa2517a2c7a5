#![cfg(feature = "test-utils")]

use employee_db_demos::prelude::*;
use employee_db_demos::scripts::SCHEMA_SQL;
use employee_db_demos::test_utils::EmbeddedDemoDb;

#[test]
fn test2_insert_update_delete_roundtrip() -> Result<(), Box<dyn std::error::Error>> {
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async move {
        let db = EmbeddedDemoDb::start().await?;
        let client = connect(&db.config).await?;

        client.batch_execute(SCHEMA_SQL).await?;

        let inserted = client
            .execute(
                "INSERT INTO employees (last_name, first_name, email, department, salary) \
                 VALUES ($1, $2, $3, $4, $5)",
                &[
                    &"Wright",
                    &"Eric",
                    &"eric.wright@acme.com",
                    &"HR",
                    &33000.0_f64,
                ],
            )
            .await?;
        assert_eq!(inserted, 1);
        assert_eq!(fetch_all(&client).await?.len(), 8);

        let updated = client
            .execute(
                "UPDATE employees SET email = $1 WHERE last_name = $2 AND first_name = $3",
                &[&"john.doe@newmail.com", &"Doe", &"John"],
            )
            .await?;
        assert_eq!(updated, 1);
        let doe = find_by_name(&client, "John", "Doe").await?;
        assert_eq!(doe[0].email, "john.doe@newmail.com");

        let deleted = client
            .execute(
                "DELETE FROM employees WHERE last_name = $1 AND first_name = $2",
                &[&"Doe", &"John"],
            )
            .await?;
        assert_eq!(deleted, 1);
        assert!(find_by_name(&client, "John", "Doe").await?.is_empty());

        // Deleting again affects nothing.
        let deleted_again = client
            .execute(
                "DELETE FROM employees WHERE last_name = $1 AND first_name = $2",
                &[&"Doe", &"John"],
            )
            .await?;
        assert_eq!(deleted_again, 0);

        drop(client);
        db.stop().await;
        Ok(())
    })
}
