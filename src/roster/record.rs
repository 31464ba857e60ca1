//! Employee record and salary band types.

use chrono::NaiveDate;
use std::fmt;

/// Salaries at or above this are at least "Mid".
pub const MID_BAND_FLOOR: f64 = 50_000.0;
/// Salaries at or above this are "Senior".
pub const SENIOR_BAND_FLOOR: f64 = 80_000.0;

/// Coarse salary category. Total over salary, including a missing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SalaryBand {
    Junior,
    Mid,
    Senior,
    Unknown,
}

impl SalaryBand {
    pub fn from_salary(salary: Option<f64>) -> Self {
        match salary {
            None => SalaryBand::Unknown,
            Some(s) if s < MID_BAND_FLOOR => SalaryBand::Junior,
            Some(s) if s < SENIOR_BAND_FLOOR => SalaryBand::Mid,
            Some(_) => SalaryBand::Senior,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SalaryBand::Junior => "Junior",
            SalaryBand::Mid => "Mid",
            SalaryBand::Senior => "Senior",
            SalaryBand::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for SalaryBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the raw roster, every field still an untouched string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawEmployee {
    pub employee_id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub hire_date: Option<String>,
    pub job_title: Option<String>,
    pub department: Option<String>,
    pub salary: Option<String>,
    pub manager_id: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub birth_date: Option<String>,
    pub status: Option<String>,
}

/// A cleaned employee record with typed fields.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeRecord {
    pub employee_id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub full_name: String,
    pub email: Option<String>,
    pub email_domain: String,
    pub hire_date: Option<NaiveDate>,
    pub job_title: Option<String>,
    pub department: Option<String>,
    pub salary: Option<f64>,
    pub salary_band: SalaryBand,
    pub manager_id: Option<String>,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub birth_date: Option<NaiveDate>,
    pub age: Option<i64>,
    pub tenure_years: Option<f64>,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_salary_band_boundaries() {
        assert_eq!(SalaryBand::from_salary(Some(49_999.99)), SalaryBand::Junior);
        assert_eq!(SalaryBand::from_salary(Some(50_000.0)), SalaryBand::Mid);
        assert_eq!(SalaryBand::from_salary(Some(79_999.99)), SalaryBand::Mid);
        assert_eq!(SalaryBand::from_salary(Some(80_000.0)), SalaryBand::Senior);
        assert_eq!(SalaryBand::from_salary(None), SalaryBand::Unknown);
    }

    #[test]
    fn test_salary_band_negative_and_zero_are_junior() {
        assert_eq!(SalaryBand::from_salary(Some(0.0)), SalaryBand::Junior);
        assert_eq!(SalaryBand::from_salary(Some(-10.0)), SalaryBand::Junior);
    }

    #[test]
    fn test_salary_band_display() {
        assert_eq!(SalaryBand::Senior.to_string(), "Senior");
        assert_eq!(SalaryBand::Unknown.as_str(), "Unknown");
    }
}
