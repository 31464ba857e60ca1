//! Single-pass row transform: raw strings in, typed record out.

use super::coerce::{parse_date, parse_salary};
use super::derive::{age, tenure_years};
use super::normalize::{
    email_domain, fill_missing, full_name, normalize_email, title_case, DEFAULT_STATUS,
};
use super::{EmployeeRecord, RawEmployee, SalaryBand};
use chrono::NaiveDate;

/// Fields whose raw value was present but could not be coerced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Degradations {
    pub salary: bool,
    pub hire_date: bool,
    pub birth_date: bool,
}

/// Coerce an optional raw value, reporting whether a non-empty value was lost.
fn coerce<T>(raw: Option<&str>, parse: impl Fn(&str) -> Option<T>) -> (Option<T>, bool) {
    match raw {
        None => (None, false),
        Some(s) => {
            let parsed = parse(s);
            let degraded = parsed.is_none() && !s.trim().is_empty();
            (parsed, degraded)
        }
    }
}

/// Normalize, coerce and derive every field of one record.
///
/// Never fails: a malformed field becomes missing and the row survives.
pub fn clean_record(
    raw: RawEmployee,
    run_date: NaiveDate,
    run_timestamp: &str,
) -> (EmployeeRecord, Degradations) {
    let first_name = raw.first_name.as_deref().map(title_case);
    let last_name = raw.last_name.as_deref().map(title_case);
    let email = raw.email.as_deref().map(normalize_email);

    let (salary, salary_degraded) = coerce(raw.salary.as_deref(), parse_salary);
    let (hire_date, hire_degraded) = coerce(raw.hire_date.as_deref(), parse_date);
    let (birth_date, birth_degraded) = coerce(raw.birth_date.as_deref(), parse_date);

    let record = EmployeeRecord {
        full_name: full_name(first_name.as_deref(), last_name.as_deref()),
        email_domain: email_domain(email.as_deref()),
        employee_id: raw.employee_id,
        first_name,
        last_name,
        email,
        hire_date,
        job_title: raw.job_title,
        department: raw.department,
        salary,
        salary_band: SalaryBand::from_salary(salary),
        manager_id: raw.manager_id,
        address: fill_missing(raw.address, ""),
        city: fill_missing(raw.city, ""),
        state: fill_missing(raw.state, ""),
        zip_code: fill_missing(raw.zip_code, ""),
        birth_date,
        age: age(birth_date, run_date),
        tenure_years: tenure_years(hire_date, run_date),
        status: fill_missing(raw.status, DEFAULT_STATUS),
        created_at: run_timestamp.to_string(),
        updated_at: run_timestamp.to_string(),
    };

    let degradations = Degradations {
        salary: salary_degraded,
        hire_date: hire_degraded,
        birth_date: birth_degraded,
    };
    (record, degradations)
}
