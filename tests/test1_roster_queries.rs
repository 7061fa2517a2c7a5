#![cfg(feature = "test-utils")]

use employee_db_demos::prelude::*;
use employee_db_demos::scripts::SCHEMA_SQL;
use employee_db_demos::test_utils::EmbeddedDemoDb;

#[test]
fn test1_roster_and_lookup_queries() -> Result<(), Box<dyn std::error::Error>> {
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async move {
        let db = EmbeddedDemoDb::start().await?;
        let client = connect(&db.config).await?;

        client.batch_execute(SCHEMA_SQL).await?;

        let all = fetch_all(&client).await?;
        assert_eq!(all.len(), 7);

        let ordered = fetch_all_ordered(&client).await?;
        assert_eq!(ordered.first().unwrap().last_name, "Adams");
        assert_eq!(ordered.last().unwrap().last_name, "Waters");

        let found = find_by_name(&client, "John", "Doe").await?;
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].email, "john.doe@acme.com");
        assert_eq!(found[0].department, "HR");

        let missing = find_by_name(&client, "Nobody", "Here").await?;
        assert!(missing.is_empty());

        // One prepared statement, two parameter sets.
        let stmt = prepare_salary_filter(&client).await?;

        let legal = run_salary_filter(&client, &stmt, 80000.0, "Legal").await?;
        let legal_names: Vec<&str> = legal.iter().map(|e| e.last_name.as_str()).collect();
        assert_eq!(legal_names, vec!["Adams", "Queue"]);

        let hr = run_salary_filter(&client, &stmt, 25000.0, "HR").await?;
        assert_eq!(hr.len(), 2);
        assert!(hr.iter().all(|e| e.department == "HR" && e.salary > 25000.0));

        drop(client);
        db.stop().await;
        Ok(())
    })
}
