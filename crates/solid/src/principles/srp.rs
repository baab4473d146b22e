//! Single Responsibility Principle
//!
//! A type should have one reason to change. [`EmployeeV1`] holds employee
//! data, computes salary and persists itself, so changes to payroll rules or
//! storage both land in the same type. [`EmployeeV2`] only holds data;
//! [`EmployeeSalaryCalculator`] and [`EmployeeRepository`] take the other two
//! jobs.

use std::io::Write;

use chrono::NaiveDate;

use crate::context::DemoContext;
use crate::error::Result;
use crate::principles::Principle;

/// Employee record that also does payroll and persistence.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeV1 {
    name: String,
    date_of_birth: NaiveDate,
}

impl EmployeeV1 {
    /// Create an employee.
    pub fn new(name: impl Into<String>, date_of_birth: NaiveDate) -> Self {
        Self {
            name: name.into(),
            date_of_birth,
        }
    }

    /// Employee name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Employee date of birth.
    pub fn date_of_birth(&self) -> NaiveDate {
        self.date_of_birth
    }

    /// Placeholder salary.
    pub fn calculate_salary(&self) -> f64 {
        0.0
    }

    /// Pretend to persist this employee.
    pub fn save_to_database(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Saving employee {} to the database", self.name)?;
        Ok(())
    }
}

/// Employee record that only holds data.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeV2 {
    name: String,
    date_of_birth: NaiveDate,
}

impl EmployeeV2 {
    /// Create an employee.
    pub fn new(name: impl Into<String>, date_of_birth: NaiveDate) -> Self {
        Self {
            name: name.into(),
            date_of_birth,
        }
    }

    /// Employee name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Employee date of birth.
    pub fn date_of_birth(&self) -> NaiveDate {
        self.date_of_birth
    }
}

/// Salary rules, kept apart from the employee record.
#[derive(Debug, Default)]
pub struct EmployeeSalaryCalculator;

impl EmployeeSalaryCalculator {
    /// Placeholder salary.
    pub fn calculate_salary(&self, _employee: &EmployeeV2) -> f64 {
        0.0
    }
}

/// Persistence, kept apart from the employee record.
#[derive(Debug, Default)]
pub struct EmployeeRepository;

impl EmployeeRepository {
    /// Pretend to persist an employee.
    pub fn save_to_database(&self, employee: &EmployeeV2, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Saving employee {} to the database", employee.name())?;
        Ok(())
    }
}

/// Birth date shared by the demonstration's employees.
pub const DEMO_BIRTH_DATE: NaiveDate = match NaiveDate::from_ymd_opt(1990, 1, 15) {
    Some(date) => date,
    None => panic!("invalid demonstration birth date"),
};

/// Run the SRP demonstration.
pub fn run(_ctx: &DemoContext, out: &mut dyn Write) -> Result<()> {
    writeln!(out, "{}", Principle::Srp.title())?;
    let born = DEMO_BIRTH_DATE;

    let employee1 = EmployeeV1::new("John Doe", born);
    writeln!(out, "Salary of {}: {:?}", employee1.name(), employee1.calculate_salary())?;
    employee1.save_to_database(out)?;

    let employee2 = EmployeeV2::new("Jane Doe", born);
    let calculator = EmployeeSalaryCalculator;
    let repository = EmployeeRepository;
    writeln!(
        out,
        "Salary of {}: {:?}",
        employee2.name(),
        calculator.calculate_salary(&employee2)
    )?;
    repository.save_to_database(&employee2, out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn birthday() -> NaiveDate {
        NaiveDate::from_ymd_opt(1985, 6, 30).unwrap()
    }

    #[test]
    fn test_employee_fields() {
        let v1 = EmployeeV1::new("Ada", birthday());
        let v2 = EmployeeV2::new("Ada", birthday());
        assert_eq!(v1.name(), v2.name());
        assert_eq!(v1.date_of_birth(), v2.date_of_birth());
    }

    #[test]
    fn test_salary_is_same_in_both_versions() {
        let v1 = EmployeeV1::new("Ada", birthday());
        let v2 = EmployeeV2::new("Ada", birthday());
        assert_eq!(
            v1.calculate_salary(),
            EmployeeSalaryCalculator.calculate_salary(&v2)
        );
    }

    #[test]
    fn test_demo_birth_date() {
        assert_eq!(DEMO_BIRTH_DATE.to_string(), "1990-01-15");
    }

    #[test]
    fn test_repository_save() {
        let mut buf = Vec::new();
        EmployeeRepository
            .save_to_database(&EmployeeV2::new("Ada", birthday()), &mut buf)
            .unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "Saving employee Ada to the database\n");
    }
}
