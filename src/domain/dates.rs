//! Date arithmetic for due dates and reservation expiry.
//!
//! All wire dates are ISO `YYYY-MM-DD`. Display formatting (DD/MM/YYYY) is
//! left to the embedding UI.

use chrono::{Days, NaiveDate};

/// Standard loan period.
pub const LOAN_PERIOD_DAYS: u64 = 14;
/// Reservations expire this many days after creation.
pub const RESERVATION_PERIOD_DAYS: u64 = 14;
/// A loan may be renewed at most this many times.
pub const MAX_RENEWALS: i32 = 2;

/// Whole days between `today` and `date`. Positive = days left, zero = due
/// today, negative = past the date by `|n|` days.
pub fn days_remaining(date: NaiveDate, today: NaiveDate) -> i64 {
    (date - today).num_days()
}

pub fn is_overdue(due_date: NaiveDate, today: NaiveDate) -> bool {
    days_remaining(due_date, today) < 0
}

/// `date` plus one loan period. Used for the initial due date (from the
/// loan date) and for renewals (from the current due date).
pub fn plus_loan_period(date: NaiveDate) -> NaiveDate {
    add_days(date, LOAN_PERIOD_DAYS)
}

/// `date` plus one reservation period.
pub fn plus_reservation_period(date: NaiveDate) -> NaiveDate {
    add_days(date, RESERVATION_PERIOD_DAYS)
}

fn add_days(date: NaiveDate, days: u64) -> NaiveDate {
    // Overflow only past year 262143; the date comes from a validated
    // ISO string so saturating is safe here.
    date.checked_add_days(Days::new(days)).unwrap_or(date)
}

/// Human-readable remaining-days label, matching the backend's locale.
pub fn describe_days_remaining(days: i64) -> String {
    if days < 0 {
        format!("{} dias de atraso", days.abs())
    } else if days == 0 {
        "Vence hoje".to_string()
    } else if days == 1 {
        "1 dia restante".to_string()
    } else {
        format!("{} dias restantes", days)
    }
}
