//! Flat CSV rendering of the waitlist for the admin export.

use std::borrow::Cow;
use std::fmt::Write;

use chrono::{DateTime, SecondsFormat, Utc};

use crate::domain::entities::waitlist_user::WaitlistUserWithResponses;

pub const CSV_HEADER: &str = "Email,Role,Question,Answer,Multiple Choice,Submitted At";

/// Render one row per survey response, or a single row with blank survey columns
/// for users who answered nothing. Users are written in the order given.
pub fn render_waitlist_csv(users: &[WaitlistUserWithResponses]) -> String {
    let mut csv = String::with_capacity(64 * (users.len() + 1));
    csv.push_str(CSV_HEADER);
    csv.push('\n');

    for entry in users {
        let email = field(&entry.user.email);
        let role = field(&entry.user.role);
        let submitted_at = iso_timestamp(entry.user.created_at);

        if entry.responses.is_empty() {
            // String writes are infallible.
            let _ = writeln!(csv, "{email},{role},,,,{submitted_at}");
            continue;
        }

        for response in &entry.responses {
            let _ = writeln!(
                csv,
                "{email},{role},{question},{answer},{multiple},{submitted_at}",
                question = quoted(&response.question_id),
                answer = quoted(&response.answer),
                multiple = response.is_multiple_choice,
            );
        }
    }

    csv
}

/// `waitlist-<ISO8601 timestamp>.csv`
pub fn export_filename(now: DateTime<Utc>) -> String {
    format!("waitlist-{}.csv", iso_timestamp(now))
}

fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn quoted(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

fn field(value: &str) -> Cow<'_, str> {
    if value.contains([',', '"', '\n', '\r']) {
        Cow::Owned(quoted(value))
    } else {
        Cow::Borrowed(value)
    }
}
