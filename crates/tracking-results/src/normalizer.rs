use carrier_client::CarrierResponse;
use serde::Serialize;
use serde_json::Value;

pub const MISSING_TRACKING_ID: &str = "N/A";
pub const DELIVERED_LOCATION: &str = "Delivered";
pub const UNKNOWN_LOCATION: &str = "Unknown";

const DELIVERED_STATUS_MARKER: &str = "delivered";
const PLACE_SEPARATOR: &str = ", ";
const REMARK_SEPARATOR: &str = " — ";

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Row {
    pub tracking_id: String,
    pub location: String,
}

/// Whether the latest status description is appended to a resolved place.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatusRemarks {
    #[default]
    Append,
    Omit,
}

/// Flattens every track result of every complete track result into a row,
/// keeping document order. Never fails: missing fields fall back to
/// [`MISSING_TRACKING_ID`] and [`UNKNOWN_LOCATION`].
pub fn normalize(raw: &CarrierResponse, remarks: StatusRemarks) -> Vec<Row> {
    track_results(raw)
        .map(|track| TrackResultView::from_value(track).into_row(remarks))
        .collect()
}

fn track_results(raw: &Value) -> impl Iterator<Item = &Value> + '_ {
    raw.get("output")
        .and_then(|output| output.get("completeTrackResults"))
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .flat_map(|complete| {
            complete
                .get("trackResults")
                .and_then(Value::as_array)
                .into_iter()
                .flatten()
        })
}

fn raw_text_at<'a>(parent: Option<&'a Value>, key: &str) -> Option<&'a str> {
    parent
        .and_then(|value| value.get(key))
        .and_then(Value::as_str)
        .filter(|text| !text.trim().is_empty())
}

fn text_at<'a>(parent: Option<&'a Value>, key: &str) -> Option<&'a str> {
    raw_text_at(parent, key).map(str::trim)
}

/// The handful of fields a row is derived from, each one possibly absent.
#[derive(Debug, Default, PartialEq)]
struct TrackResultView<'a> {
    tracking_number: Option<&'a str>,
    status_by_locale: Option<&'a str>,
    description: Option<&'a str>,
    city: Option<&'a str>,
    country: Option<&'a str>,
}

impl<'a> TrackResultView<'a> {
    fn from_value(track: &'a Value) -> Self {
        let latest_status = track.get("latestStatusDetail");
        let scan_location = latest_status.and_then(|status| status.get("scanLocation"));

        Self {
            tracking_number: raw_text_at(track.get("trackingNumberInfo"), "trackingNumber"),
            status_by_locale: text_at(latest_status, "statusByLocale"),
            description: text_at(latest_status, "description"),
            city: text_at(scan_location, "city"),
            country: text_at(scan_location, "countryName"),
        }
    }

    fn is_delivered(&self) -> bool {
        self.status_by_locale
            .map(|status| status.to_lowercase().contains(DELIVERED_STATUS_MARKER))
            .unwrap_or(false)
    }

    fn place(&self) -> Option<String> {
        let parts: Vec<&str> = [self.city, self.country].into_iter().flatten().collect();

        match parts.is_empty() {
            true => None,
            false => Some(parts.join(PLACE_SEPARATOR)),
        }
    }

    fn location(&self, remarks: StatusRemarks) -> String {
        if self.is_delivered() {
            return DELIVERED_LOCATION.to_string();
        }

        match (self.place(), self.description, remarks) {
            (None, _, _) => UNKNOWN_LOCATION.to_string(),
            (Some(place), Some(description), StatusRemarks::Append) => {
                format!("{}{}{}", place, REMARK_SEPARATOR, description)
            }
            (Some(place), _, _) => place,
        }
    }

    fn into_row(self, remarks: StatusRemarks) -> Row {
        Row {
            location: self.location(remarks),
            tracking_id: self
                .tracking_number
                .unwrap_or(MISSING_TRACKING_ID)
                .to_string(),
        }
    }
}
