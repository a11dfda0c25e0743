use sqlx::PgPool;
use storage::{dto::entry::EntryReportRow, repository::entry::EntryRepository};
use uuid::Uuid;

use crate::error::WebResult;
use crate::identity::Identity;

/// Entry report for one event, scoped to the caller's club unless admin
pub async fn entries_report(
    pool: &PgPool,
    identity: &Identity,
    event_id: Uuid,
    club_id: Option<Uuid>,
) -> WebResult<String> {
    let club_id = identity.resolve_club(club_id)?;

    let repo = EntryRepository::new(pool);
    let rows = repo.report_rows(event_id, club_id).await?;

    Ok(render_csv(&rows))
}

const CSV_HEADER: &str = "entry_id,entry_type,status,division,club,competitor,weight_class,fee_cents";

fn render_csv(rows: &[EntryReportRow]) -> String {
    let mut out = String::from(CSV_HEADER);
    out.push('\n');

    for row in rows {
        let fields = [
            row.entry_id.to_string(),
            row.entry_type.to_string(),
            row.status.to_string(),
            row.division_name.clone(),
            row.club_name.clone(),
            row.competitor.clone(),
            row.weight_class.clone().unwrap_or_default(),
            row.fee_cents.to_string(),
        ];
        let line: Vec<String> = fields.iter().map(|f| escape_field(f)).collect();
        out.push_str(&line.join(","));
        out.push('\n');
    }

    out
}

/// RFC 4180 quoting: fields containing the delimiter, a quote or a newline
/// are wrapped in quotes with embedded quotes doubled.
fn escape_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storage::models::{EntryStatus, EntryType};

    #[test]
    fn test_escape_plain_field_untouched() {
        assert_eq!(escape_field("Shotokan Leipzig"), "Shotokan Leipzig");
    }

    #[test]
    fn test_escape_delimiter_and_quotes() {
        assert_eq!(escape_field("Kai, Dojo"), "\"Kai, Dojo\"");
        assert_eq!(escape_field("the \"tigers\""), "\"the \"\"tigers\"\"\"");
        assert_eq!(escape_field("a\nb"), "\"a\nb\"");
    }

    #[test]
    fn test_render_csv_header_and_rows() {
        let rows = vec![EntryReportRow {
            entry_id: uuid::Uuid::nil(),
            entry_type: EntryType::Kumite,
            status: EntryStatus::Submitted,
            division_name: "Cadet Male".to_string(),
            club_name: "Kai, Dojo".to_string(),
            competitor: "Aiko Tanaka".to_string(),
            weight_class: Some("-52kg".to_string()),
            fee_cents: 2500,
        }];

        let csv = render_csv(&rows);
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some(CSV_HEADER));
        assert_eq!(
            lines.next(),
            Some(
                "00000000-0000-0000-0000-000000000000,KUMITE,SUBMITTED,Cadet Male,\"Kai, Dojo\",Aiko Tanaka,-52kg,2500"
            )
        );
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_render_csv_empty_is_header_only() {
        assert_eq!(render_csv(&[]), format!("{CSV_HEADER}\n"));
    }
}
