//! Operator-facing conflict messages.
//!
//! The wording is read by people deciding whether to overwrite, so the
//! layout stays stable:
//!
//! ```text
//! CRITICAL MESSAGE FROM UNICORN:
//! You need to run a Unicorn sync. The following fields did not match the serialized version:
//!
//! Home: Title, Text
//! About: Version
//!
//! Do you want to overwrite anyway?
//! THIS MAY CAUSE LOST WORK.
//! ```
//!
//! With a single flagged record the `Name: ` prefix is omitted. When two
//! flagged entries share a name (versions or languages of one record), the
//! name is qualified as `Home (en, v2)`.

use crate::aggregate::ConflictReport;
use crate::error::CheckError;

pub const HEADER: &str = "CRITICAL MESSAGE FROM UNICORN:\n";
pub const MISMATCH_PREAMBLE: &str =
    "You need to run a Unicorn sync. The following fields did not match the serialized version:\n";
pub const FAILURE_PREAMBLE: &str = "The serialization conflict check failed: ";
pub const CONFIRMATION: &str = "\n\nDo you want to overwrite anyway?\nTHIS MAY CAUSE LOST WORK.";

/// Renders a conflict report, or `None` if nothing was flagged.
pub fn format_report(report: &ConflictReport) -> Option<String> {
    if report.is_empty() {
        return None;
    }

    let mut message = String::from(HEADER);
    message.push_str(MISMATCH_PREAMBLE);

    let with_names = report.len() > 1;
    for entry in report.iter() {
        message.push('\n');
        if with_names {
            message.push_str(&entry.display_name);
            let repeated = report
                .iter()
                .filter(|other| other.display_name == entry.display_name)
                .nth(1)
                .is_some();
            if repeated {
                message.push_str(&format!(" ({}, v{})", entry.language, entry.version));
            }
            message.push_str(": ");
        }
        message.push_str(&entry.field_names().join(", "));
    }

    message.push_str(CONFIRMATION);
    Some(message)
}

/// Renders the block message used when the check itself failed.
pub fn format_failure(error: &CheckError) -> String {
    format!("{HEADER}{FAILURE_PREAMBLE}{error}{CONFIRMATION}")
}
