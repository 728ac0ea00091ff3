//! CSV export of the flagged set

use squatwatch_api::FlaggedDomain;

/// Default export file name.
pub const EXPORT_FILE_NAME: &str = "dangerous_domains.csv";

/// Column order, matching the review table layout.
const CSV_HEADER: [&str; 6] = [
    "domain_id",
    "url",
    "registrar_name",
    "abuse_emails",
    "owner_name",
    "last_updated",
];

/// Renders flagged domains as CSV text.
pub struct ExportService;

impl ExportService {
    /// Produces a CSV document: header row plus one line per record,
    /// CRLF-terminated, RFC 4180 quoting.
    ///
    /// Missing optional fields are written as empty cells, not placeholders;
    /// placeholder substitution is a display concern.
    #[must_use]
    pub fn to_csv(entries: &[FlaggedDomain]) -> String {
        let mut out = String::new();
        write_row(&mut out, CSV_HEADER.iter().copied());

        for entry in entries {
            write_row(
                &mut out,
                [
                    entry.domain_id.as_str(),
                    entry.url.as_str(),
                    entry.registrar_name.as_str(),
                    entry.abuse_emails.as_deref().unwrap_or(""),
                    entry.owner_name.as_deref().unwrap_or(""),
                    entry.last_updated.as_str(),
                ]
                .into_iter(),
            );
        }

        out
    }
}

fn write_row<'a>(out: &mut String, fields: impl Iterator<Item = &'a str>) {
    let mut first = true;
    for field in fields {
        if !first {
            out.push(',');
        }
        first = false;
        out.push_str(&escape_field(field));
    }
    out.push_str("\r\n");
}

/// Quotes a field when it contains a delimiter, quote, or line break.
fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
