//! Built-in five-row demo dataset.
//!
//! Used by `payscope analyze --sample`, the benchmarks and the tests.

use crate::types::EmployeeRecord;

/// The demo dataset in input-file form.
pub const SAMPLE_CSV: &str = "\
emp_id,name,department,salary,years_exp,performance_score
E101,Ramesh,Sales,45000,3,78
E102,Sneha,HR,52000,5,85
E103,Amit,IT,62000,7,92
E104,Leela,Sales,39000,2,70
E105,Karan,IT,58000,4,81
";

/// The demo dataset as records, in file order.
pub fn employees() -> Vec<EmployeeRecord> {
    vec![
        EmployeeRecord::new("E101", "Ramesh", "Sales", 45000.0, 3, 78.0),
        EmployeeRecord::new("E102", "Sneha", "HR", 52000.0, 5, 85.0),
        EmployeeRecord::new("E103", "Amit", "IT", 62000.0, 7, 92.0),
        EmployeeRecord::new("E104", "Leela", "Sales", 39000.0, 2, 70.0),
        EmployeeRecord::new("E105", "Karan", "IT", 58000.0, 4, 81.0),
    ]
}
