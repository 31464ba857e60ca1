//! Roster module - employee record types and per-field transforms

pub mod coerce;
pub mod dedup;
pub mod derive;
pub mod normalize;
mod record;
mod transform;

pub use dedup::dedup_by_employee_id;
pub use record::{EmployeeRecord, RawEmployee, SalaryBand, MID_BAND_FLOOR, SENIOR_BAND_FLOOR};
pub use transform::{clean_record, Degradations};
