//! Convenient imports for the demo binaries.

pub use crate::client::{connect, init_tracing};
pub use crate::config::DemoConfig;
pub use crate::employee::{
    Employee, fetch_all, fetch_all_ordered, fetch_by_department, find_by_name,
    prepare_salary_filter, print_details, print_lookup, print_roster, run_salary_filter,
};
pub use crate::error::DemoDbError;
pub use crate::procedures::{
    count_for_department, employees_for_department, greet_department,
    increase_salaries_for_department,
};
