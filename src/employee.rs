use tokio_postgres::{Client, Row, Statement};

use crate::error::DemoDbError;

/// One row of the `employees` table.
///
/// Lives only as long as a demo's print loop; the database owns the real
/// record.
#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    pub last_name: String,
    pub first_name: String,
    pub email: String,
    pub department: String,
    pub salary: f64,
}

impl Employee {
    /// Map a result row by column name.
    ///
    /// # Errors
    /// Returns the driver error if a column is missing or has an unexpected
    /// type.
    pub fn from_row(row: &Row) -> Result<Self, DemoDbError> {
        Ok(Self {
            last_name: row.try_get("last_name")?,
            first_name: row.try_get("first_name")?,
            email: row.try_get("email")?,
            department: row.try_get("department")?,
            salary: row.try_get("salary")?,
        })
    }

    /// "Doe, John" - the short roster form.
    #[must_use]
    pub fn roster_line(&self) -> String {
        format!("{}, {}", self.last_name, self.first_name)
    }

    /// "Doe, John, Engineering, 55000.00" - the full form.
    #[must_use]
    pub fn detail_line(&self) -> String {
        format!(
            "{}, {}, {}, {:.2}",
            self.last_name, self.first_name, self.department, self.salary
        )
    }
}

fn rows_to_employees(rows: &[Row]) -> Result<Vec<Employee>, DemoDbError> {
    rows.iter().map(Employee::from_row).collect()
}

/// Fetch every employee in table order.
///
/// # Errors
/// Returns errors from query execution or row mapping.
pub async fn fetch_all(client: &Client) -> Result<Vec<Employee>, DemoDbError> {
    let rows = client.query("SELECT * FROM employees", &[]).await?;
    rows_to_employees(&rows)
}

/// Fetch every employee ordered by last name.
///
/// # Errors
/// Returns errors from query execution or row mapping.
pub async fn fetch_all_ordered(client: &Client) -> Result<Vec<Employee>, DemoDbError> {
    let rows = client
        .query("SELECT * FROM employees ORDER BY last_name", &[])
        .await?;
    rows_to_employees(&rows)
}

/// Fetch the employees of one department, ordered by last name.
///
/// # Errors
/// Returns errors from query execution or row mapping.
pub async fn fetch_by_department(
    client: &Client,
    department: &str,
) -> Result<Vec<Employee>, DemoDbError> {
    let rows = client
        .query(
            "SELECT * FROM employees WHERE department = $1 ORDER BY last_name",
            &[&department],
        )
        .await?;
    rows_to_employees(&rows)
}

/// Look up employees by exact first and last name.
///
/// # Errors
/// Returns errors from query execution or row mapping.
pub async fn find_by_name(
    client: &Client,
    first_name: &str,
    last_name: &str,
) -> Result<Vec<Employee>, DemoDbError> {
    let rows = client
        .query(
            "SELECT * FROM employees WHERE last_name = $1 AND first_name = $2",
            &[&last_name, &first_name],
        )
        .await?;
    rows_to_employees(&rows)
}

/// Prepare the salary/department filter once so a demo can bind it with
/// several parameter sets.
///
/// # Errors
/// Returns the driver error if preparation fails.
pub async fn prepare_salary_filter(client: &Client) -> Result<Statement, DemoDbError> {
    let stmt = client
        .prepare("SELECT * FROM employees WHERE salary > $1 AND department = $2")
        .await?;
    Ok(stmt)
}

/// Run a previously prepared salary/department filter.
///
/// # Errors
/// Returns errors from query execution or row mapping.
pub async fn run_salary_filter(
    client: &Client,
    stmt: &Statement,
    min_salary: f64,
    department: &str,
) -> Result<Vec<Employee>, DemoDbError> {
    let rows = client.query(stmt, &[&min_salary, &department]).await?;
    rows_to_employees(&rows)
}

/// Print the short "last, first" roster with its header.
pub fn print_roster(employees: &[Employee]) {
    println!("Last name, First name");
    println!("---------------------");
    for employee in employees {
        println!("{}", employee.roster_line());
    }
}

/// Print full employee lines with a header, salary to two decimal places.
pub fn print_details(employees: &[Employee]) {
    println!("Last name, First name, Department, Salary");
    println!("-----------------------------------------");
    for employee in employees {
        println!("{}", employee.detail_line());
    }
}

/// Print a name lookup result, or a not-found notice.
pub fn print_lookup(employees: &[Employee], first_name: &str, last_name: &str) {
    if employees.is_empty() {
        println!("Employee NOT FOUND: {first_name} {last_name}");
        return;
    }
    for employee in employees {
        println!(
            "Employee found: {} {}, {}",
            employee.first_name, employee.last_name, employee.email
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Employee {
        Employee {
            last_name: "Doe".to_string(),
            first_name: "John".to_string(),
            email: "john.doe@acme.com".to_string(),
            department: "HR".to_string(),
            salary: 55000.0,
        }
    }

    #[test]
    fn roster_line_is_last_comma_first() {
        assert_eq!(sample().roster_line(), "Doe, John");
    }

    #[test]
    fn detail_line_formats_salary_with_cents() {
        assert_eq!(sample().detail_line(), "Doe, John, HR, 55000.00");
    }
}
