//! Wrappers for the stored routines defined in `sql/routines.sql`.
//!
//! PostgreSQL hands INOUT procedure parameters back as a one-row result set,
//! so each wrapper issues the `CALL` (or the `SELECT` for the set-returning
//! function) and pulls the output back out by parameter name.

use tokio_postgres::Client;

use crate::employee::Employee;
use crate::error::DemoDbError;

/// Call `get_count_for_department` and return its INOUT count.
///
/// The second argument is the INOUT slot; the literal NULL is the
/// placeholder Postgres requires for it in the CALL.
///
/// # Errors
/// Returns `DemoDbError::ExecutionError` if the procedure produces no output
/// row, or the driver error if the call itself fails.
pub async fn count_for_department(client: &Client, department: &str) -> Result<i32, DemoDbError> {
    let rows = client
        .query("CALL get_count_for_department($1, NULL)", &[&department])
        .await?;
    let row = rows.first().ok_or_else(|| {
        DemoDbError::ExecutionError("get_count_for_department returned no output row".to_string())
    })?;
    Ok(row.try_get("employee_count")?)
}

/// Select from the set-returning `get_employees_for_department`.
///
/// # Errors
/// Returns errors from query execution or row mapping.
pub async fn employees_for_department(
    client: &Client,
    department: &str,
) -> Result<Vec<Employee>, DemoDbError> {
    let rows = client
        .query(
            "SELECT * FROM get_employees_for_department($1)",
            &[&department],
        )
        .await?;
    rows.iter().map(Employee::from_row).collect()
}

/// Call `greet_the_department`, passing the department name through the
/// INOUT parameter and returning the greeting the procedure built from it.
///
/// # Errors
/// Returns `DemoDbError::ExecutionError` if the procedure produces no output
/// row, or the driver error if the call itself fails.
pub async fn greet_department(client: &Client, department: &str) -> Result<String, DemoDbError> {
    let rows = client
        .query("CALL greet_the_department($1)", &[&department])
        .await?;
    let row = rows.first().ok_or_else(|| {
        DemoDbError::ExecutionError("greet_the_department returned no output row".to_string())
    })?;
    Ok(row.try_get("greeting")?)
}

/// Call `increase_salaries_for_department`. IN parameters only, so there is
/// no output row to read back.
///
/// # Errors
/// Returns the driver error if the call fails.
pub async fn increase_salaries_for_department(
    client: &Client,
    department: &str,
    amount: f64,
) -> Result<(), DemoDbError> {
    client
        .execute(
            "CALL increase_salaries_for_department($1, $2)",
            &[&department, &amount],
        )
        .await?;
    Ok(())
}
