//! Stage A: raw roster in, cleaned roster out.

use super::{PipelineError, RunContext};
use crate::data::{write_csv_atomic, DataLoader};
use crate::roster::{clean_record, dedup_by_employee_id, derive, EmployeeRecord, RawEmployee};
use polars::prelude::*;
use serde::Serialize;
use std::path::Path;
use tracing::{debug, info, warn};

/// Output columns, in order.
pub const FINAL_COLUMNS: [&str; 22] = [
    "employee_id",
    "first_name",
    "last_name",
    "full_name",
    "email",
    "email_domain",
    "hire_date",
    "job_title",
    "department",
    "salary",
    "salary_band",
    "manager_id",
    "address",
    "city",
    "state",
    "zip_code",
    "birth_date",
    "age",
    "tenure_years",
    "status",
    "created_at",
    "updated_at",
];

/// Counts gathered while cleaning.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CleanReport {
    pub rows_read: usize,
    pub duplicates_dropped: usize,
    pub future_hires_dropped: usize,
    pub rows_written: usize,
    pub salary_unparsed: usize,
    pub hire_date_unparsed: usize,
    pub birth_date_unparsed: usize,
    pub run_date: String,
    pub run_timestamp: String,
}

/// Turn the all-string raw table into one `RawEmployee` per row.
fn read_raw_employees(df: &DataFrame) -> Result<Vec<RawEmployee>, PipelineError> {
    let column = |name: &str| -> Result<_, PipelineError> {
        Ok(DataLoader::string_column(df, name)?.into_iter())
    };

    let mut employee_id = column("employee_id")?;
    let mut first_name = column("first_name")?;
    let mut last_name = column("last_name")?;
    let mut email = column("email")?;
    let mut hire_date = column("hire_date")?;
    let mut job_title = column("job_title")?;
    let mut department = column("department")?;
    let mut salary = column("salary")?;
    let mut manager_id = column("manager_id")?;
    let mut address = column("address")?;
    let mut city = column("city")?;
    let mut state = column("state")?;
    let mut zip_code = column("zip_code")?;
    let mut birth_date = column("birth_date")?;
    let mut status = column("status")?;

    let records = (0..df.height())
        .map(|_| RawEmployee {
            employee_id: employee_id.next().flatten(),
            first_name: first_name.next().flatten(),
            last_name: last_name.next().flatten(),
            email: email.next().flatten(),
            hire_date: hire_date.next().flatten(),
            job_title: job_title.next().flatten(),
            department: department.next().flatten(),
            salary: salary.next().flatten(),
            manager_id: manager_id.next().flatten(),
            address: address.next().flatten(),
            city: city.next().flatten(),
            state: state.next().flatten(),
            zip_code: zip_code.next().flatten(),
            birth_date: birth_date.next().flatten(),
            status: status.next().flatten(),
        })
        .collect();
    Ok(records)
}

fn str_values<'a>(
    records: &'a [EmployeeRecord],
    field: impl Fn(&'a EmployeeRecord) -> Option<&'a str>,
) -> Vec<Option<&'a str>> {
    records.iter().map(field).collect()
}

/// Project cleaned records onto `FINAL_COLUMNS`.
fn records_to_frame(records: &[EmployeeRecord]) -> Result<DataFrame, PipelineError> {
    let df = DataFrame::new(vec![
        Column::new("employee_id".into(), str_values(records, |r| r.employee_id.as_deref())),
        Column::new("first_name".into(), str_values(records, |r| r.first_name.as_deref())),
        Column::new("last_name".into(), str_values(records, |r| r.last_name.as_deref())),
        Column::new("full_name".into(), str_values(records, |r| Some(r.full_name.as_str()))),
        Column::new("email".into(), str_values(records, |r| r.email.as_deref())),
        Column::new(
            "email_domain".into(),
            str_values(records, |r| Some(r.email_domain.as_str())),
        ),
        Column::new(
            "hire_date".into(),
            records.iter().map(|r| r.hire_date).collect::<Vec<_>>(),
        ),
        Column::new("job_title".into(), str_values(records, |r| r.job_title.as_deref())),
        Column::new("department".into(), str_values(records, |r| r.department.as_deref())),
        Column::new(
            "salary".into(),
            records.iter().map(|r| r.salary).collect::<Vec<_>>(),
        ),
        Column::new(
            "salary_band".into(),
            str_values(records, |r| Some(r.salary_band.as_str())),
        ),
        Column::new("manager_id".into(), str_values(records, |r| r.manager_id.as_deref())),
        Column::new("address".into(), str_values(records, |r| Some(r.address.as_str()))),
        Column::new("city".into(), str_values(records, |r| Some(r.city.as_str()))),
        Column::new("state".into(), str_values(records, |r| Some(r.state.as_str()))),
        Column::new("zip_code".into(), str_values(records, |r| Some(r.zip_code.as_str()))),
        Column::new(
            "birth_date".into(),
            records.iter().map(|r| r.birth_date).collect::<Vec<_>>(),
        ),
        Column::new("age".into(), records.iter().map(|r| r.age).collect::<Vec<_>>()),
        Column::new(
            "tenure_years".into(),
            records.iter().map(|r| r.tenure_years).collect::<Vec<_>>(),
        ),
        Column::new("status".into(), str_values(records, |r| Some(r.status.as_str()))),
        Column::new("created_at".into(), str_values(records, |r| Some(r.created_at.as_str()))),
        Column::new("updated_at".into(), str_values(records, |r| Some(r.updated_at.as_str()))),
    ])?;
    Ok(df)
}

/// Clean an all-string raw roster table.
///
/// Dedup runs on the raw rows, then each survivor goes through a single
/// normalize/coerce/derive pass. Rows with a hire date after the run date are
/// dropped.
pub fn clean_frame(
    raw: &DataFrame,
    ctx: &RunContext,
) -> Result<(DataFrame, CleanReport), PipelineError> {
    if raw.column("employee_id").is_err() && raw.height() > 1 {
        warn!(
            rows = raw.height(),
            "Input has no employee_id column; all rows share one dedup key and only the first is kept"
        );
    }

    let raw_records = read_raw_employees(raw)?;
    let rows_read = raw_records.len();

    let unique = dedup_by_employee_id(raw_records);
    let mut report = CleanReport {
        rows_read,
        duplicates_dropped: rows_read - unique.len(),
        run_date: ctx.run_date.to_string(),
        run_timestamp: ctx.run_timestamp.clone(),
        ..Default::default()
    };

    let mut cleaned = Vec::with_capacity(unique.len());
    for raw in unique {
        let (record, degraded) = clean_record(raw, ctx.run_date, &ctx.run_timestamp);
        let id = record.employee_id.as_deref().unwrap_or_default();

        if degraded.salary {
            report.salary_unparsed += 1;
            debug!(employee_id = id, "Unparseable salary, set to missing");
        }
        if degraded.hire_date {
            report.hire_date_unparsed += 1;
            debug!(employee_id = id, "Unparseable hire_date, set to missing");
        }
        if degraded.birth_date {
            report.birth_date_unparsed += 1;
            debug!(employee_id = id, "Unparseable birth_date, set to missing");
        }

        if derive::is_future_hire(record.hire_date, ctx.run_date) {
            report.future_hires_dropped += 1;
            debug!(employee_id = id, hire_date = ?record.hire_date, "Dropping future hire");
            continue;
        }
        cleaned.push(record);
    }

    if report.future_hires_dropped > 0 {
        warn!(
            count = report.future_hires_dropped,
            run_date = %ctx.run_date,
            "Dropped records with a hire date after the run date"
        );
    }

    let df = records_to_frame(&cleaned)?;
    report.rows_written = df.height();
    Ok((df, report))
}

/// Stage A end to end: load, clean and atomically persist.
pub fn run_clean(
    input: &Path,
    output: &Path,
    ctx: &RunContext,
) -> Result<CleanReport, PipelineError> {
    info!(input = %input.display(), "Cleaning roster");

    let raw = DataLoader::load_csv(input)?;
    let (df, report) = clean_frame(&raw, ctx)?;
    write_csv_atomic(&df, output)?;

    info!(
        output = %output.display(),
        rows_read = report.rows_read,
        duplicates = report.duplicates_dropped,
        future_hires = report.future_hires_dropped,
        rows_written = report.rows_written,
        "Wrote cleaned roster"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use chrono::NaiveDate;

    fn ctx() -> Result<RunContext> {
        let date = NaiveDate::from_ymd_opt(2024, 3, 14).ok_or_else(|| anyhow::anyhow!("date"))?;
        Ok(RunContext::fixed(date, "2024-03-14T09:30:00.000000"))
    }

    fn raw_frame(columns: Vec<(&str, Vec<Option<&str>>)>) -> Result<DataFrame> {
        let cols = columns
            .into_iter()
            .map(|(name, values)| Column::new(name.into(), values))
            .collect();
        Ok(DataFrame::new(cols)?)
    }

    fn strings(df: &DataFrame, name: &str) -> Result<Vec<Option<String>>> {
        Ok(DataLoader::string_column(df, name)?)
    }

    #[test]
    fn test_final_column_order() -> Result<()> {
        let raw = raw_frame(vec![("employee_id", vec![Some("E1")])])?;
        let (df, _) = clean_frame(&raw, &ctx()?)?;

        let names: Vec<String> = DataLoader::get_columns(&df);
        assert_eq!(names, FINAL_COLUMNS.map(str::to_string).to_vec());
        Ok(())
    }

    #[test]
    fn test_duplicate_keeps_first_salary() -> Result<()> {
        let raw = raw_frame(vec![
            ("employee_id", vec![Some("E1"), Some("E1")]),
            ("salary", vec![Some("$45,000"), Some("$90,000")]),
        ])?;

        let (df, report) = clean_frame(&raw, &ctx()?)?;

        assert_eq!(df.height(), 1);
        assert_eq!(report.duplicates_dropped, 1);
        let salary = df.column("salary")?.as_materialized_series().f64()?.get(0);
        assert_eq!(salary, Some(45_000.0));
        assert_eq!(strings(&df, "salary_band")?, vec![Some("Junior".to_string())]);
        Ok(())
    }

    #[test]
    fn test_future_hire_dropped_and_missing_hire_kept() -> Result<()> {
        let raw = raw_frame(vec![
            ("employee_id", vec![Some("E1"), Some("E2"), Some("E3"), Some("E4")]),
            (
                "hire_date",
                vec![Some("2024-03-15"), Some("2024-03-14"), None, Some("garbage")],
            ),
        ])?;

        let (df, report) = clean_frame(&raw, &ctx()?)?;

        assert_eq!(
            strings(&df, "employee_id")?,
            vec![Some("E2".to_string()), Some("E3".to_string()), Some("E4".to_string())]
        );
        assert_eq!(report.future_hires_dropped, 1);
        assert_eq!(report.hire_date_unparsed, 1);
        assert_eq!(report.rows_written, 3);
        Ok(())
    }

    #[test]
    fn test_absent_columns_become_defaults_or_missing() -> Result<()> {
        let raw = raw_frame(vec![
            ("employee_id", vec![Some("E1")]),
            ("first_name", vec![Some("ada")]),
            ("last_name", vec![Some("LOVELACE")]),
            ("unrelated", vec![Some("dropped")]),
        ])?;

        let (df, _) = clean_frame(&raw, &ctx()?)?;

        assert!(df.column("unrelated").is_err());
        assert_eq!(strings(&df, "full_name")?, vec![Some("Ada Lovelace".to_string())]);
        assert_eq!(strings(&df, "status")?, vec![Some("Active".to_string())]);
        assert_eq!(strings(&df, "manager_id")?, vec![None]);
        assert_eq!(strings(&df, "salary_band")?, vec![Some("Unknown".to_string())]);
        assert_eq!(strings(&df, "email_domain")?, vec![Some(String::new())]);
        Ok(())
    }

    #[test]
    fn test_absent_employee_id_column_keeps_first_row_only() -> Result<()> {
        let raw = raw_frame(vec![("first_name", vec![Some("ann"), Some("bob"), Some("cy")])])?;

        let (df, report) = clean_frame(&raw, &ctx()?)?;

        assert_eq!(strings(&df, "first_name")?, vec![Some("Ann".to_string())]);
        assert_eq!(report.duplicates_dropped, 2);
        Ok(())
    }

    #[test]
    fn test_every_row_shares_run_timestamp() -> Result<()> {
        let raw = raw_frame(vec![("employee_id", vec![Some("E1"), Some("E2"), Some("E3")])])?;
        let ctx = ctx()?;

        let (df, _) = clean_frame(&raw, &ctx)?;

        let expected = vec![Some(ctx.run_timestamp.clone()); 3];
        assert_eq!(strings(&df, "created_at")?, expected);
        assert_eq!(strings(&df, "updated_at")?, expected);
        Ok(())
    }

    #[test]
    fn test_empty_input_yields_header_only_frame() -> Result<()> {
        let raw = raw_frame(vec![("employee_id", vec![])])?;

        let (df, report) = clean_frame(&raw, &ctx()?)?;

        assert_eq!(df.height(), 0);
        assert_eq!(df.width(), FINAL_COLUMNS.len());
        assert_eq!(report, CleanReport {
            run_date: "2024-03-14".into(),
            run_timestamp: "2024-03-14T09:30:00.000000".into(),
            ..Default::default()
        });
        Ok(())
    }
}
