use serde::{Deserialize, Serialize};

use crate::TimeFrame;

/// One labelled series returned by the stats endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsItem {
    pub label: String,
    #[serde(default)]
    pub event: String,
    #[serde(default)]
    pub range: Vec<RangeEntry>,
}

/// Per-window slots of a range entry; any of them may be absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RangeEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub today: Option<TimeFrameData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last7days: Option<TimeFrameData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last30days: Option<TimeFrameData>,
}

impl RangeEntry {
    pub fn slot(&self, time_frame: TimeFrame) -> Option<&TimeFrameData> {
        match time_frame {
            TimeFrame::Today => self.today.as_ref(),
            TimeFrame::Last7Days => self.last7days.as_ref(),
            TimeFrame::Last30Days => self.last30days.as_ref(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeFrameData {
    #[serde(default)]
    pub from_date: String,
    #[serde(default)]
    pub to_date: String,
    #[serde(default)]
    pub data: Option<f64>,
    /// Provider-specific payload, carried through untouched.
    #[serde(default, rename = "ftlData", skip_serializing_if = "Option::is_none")]
    pub extra: Option<serde_json::Value>,
}

impl TimeFrameData {
    /// Renders `data` the way the endpoint wrote it: integral values without a fraction.
    pub fn display_data(&self) -> Option<String> {
        self.data.map(format_number)
    }
}

pub type StatsResult = Vec<StatsItem>;

// Values at or beyond 1e15 use f64's Display, which never switches to exponent form.
fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_partial_payload() {
        let raw = r#"[{"label":"Received","event":"RECEIVE","range":[
            {"last7days":{"fromDate":"2024-05-01","toDate":"2024-05-07","data":12,"ftlData":{"x":1}}}
        ]}]"#;
        let items: StatsResult = serde_json::from_str(raw).unwrap();
        assert_eq!(items.len(), 1);
        let entry = &items[0].range[0];
        assert!(entry.today.is_none());
        let slot = entry.slot(TimeFrame::Last7Days).unwrap();
        assert_eq!(slot.from_date, "2024-05-01");
        assert_eq!(slot.data, Some(12.0));
        assert_eq!(slot.extra, Some(serde_json::json!({"x": 1})));
    }

    #[test]
    fn integral_numbers_render_without_fraction() {
        let slot = TimeFrameData {
            data: Some(5.0),
            ..TimeFrameData::default()
        };
        assert_eq!(slot.display_data().as_deref(), Some("5"));

        let slot = TimeFrameData {
            data: Some(2.5),
            ..TimeFrameData::default()
        };
        assert_eq!(slot.display_data().as_deref(), Some("2.5"));
    }

    #[test]
    fn huge_counts_render_as_full_digit_strings() {
        let slot = TimeFrameData {
            data: Some(1e21),
            ..TimeFrameData::default()
        };
        assert_eq!(
            slot.display_data().as_deref(),
            Some("1000000000000000000000")
        );

        let slot = TimeFrameData {
            data: Some(999_999_999_999_999.0),
            ..TimeFrameData::default()
        };
        assert_eq!(slot.display_data().as_deref(), Some("999999999999999"));
    }
}
