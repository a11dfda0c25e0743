use axum::{
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
};
use storage::{Database, dto::entry::EntriesReportQuery};
use uuid::Uuid;

use crate::error::WebError;
use crate::identity::Identity;

use super::services;

#[utoipa::path(
    get,
    path = "/api/reports/entries.csv",
    params(
        ("eventId" = Uuid, Query, description = "Event to report on"),
        ("clubId" = Option<Uuid>, Query, description = "Filter by club; implied for club-scoped callers")
    ),
    responses(
        (status = 200, description = "CSV export of the event's entries", content_type = "text/csv"),
        (status = 403, description = "Club mismatch")
    ),
    tag = "reports"
)]
pub async fn entries_csv(
    State(db): State<Database>,
    identity: Identity,
    Query(query): Query<EntriesReportQuery>,
) -> Result<Response, WebError> {
    let csv =
        services::entries_report(db.pool(), &identity, query.event_id, query.club_id).await?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"entries.csv\"",
            ),
        ],
        csv,
    )
        .into_response())
}
