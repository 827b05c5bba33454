use carrier_client::{CarrierResponse, QueryKind};

pub const REPORT_CONTENT_TYPE: &str = "application/json";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Report {
    pub filename: String,
    pub content: Vec<u8>,
}

/// Pretty-prints the raw carrier response, not the normalized rows.
pub fn build_report(
    raw: &CarrierResponse,
    kind: QueryKind,
    query_number: &str,
) -> Result<Report, serde_json::Error> {
    Ok(Report {
        filename: report_filename(kind, query_number),
        content: serde_json::to_vec_pretty(raw)?,
    })
}

pub fn report_filename(kind: QueryKind, query_number: &str) -> String {
    let number: String = query_number
        .trim()
        .chars()
        .map(|c| match c {
            'A'..='Z' | 'a'..='z' | '0'..='9' | '.' | '_' | '-' => c,
            _ => '_',
        })
        .collect();

    match kind {
        QueryKind::Master => format!("tracking-{}.json", number),
        QueryKind::Single => format!("{}_fedex_tracking.json", number),
    }
}
