use pretty_assertions::assert_eq;
use statbot_core::{shape_data_lines, RangeEntry, StatsItem, TimeFrame, TimeFrameData};

fn slot(data: Option<f64>) -> TimeFrameData {
    TimeFrameData {
        from_date: "2024-05-01".to_string(),
        to_date: "2024-05-07".to_string(),
        data,
        extra: None,
    }
}

fn item(label: &str, range: Vec<RangeEntry>) -> StatsItem {
    StatsItem {
        label: label.to_string(),
        event: "EVENT".to_string(),
        range,
    }
}

#[test]
fn present_slot_renders_label_and_value() {
    let items = vec![item(
        "A",
        vec![RangeEntry {
            today: Some(slot(Some(5.0))),
            ..RangeEntry::default()
        }],
    )];

    assert_eq!(shape_data_lines(&items, TimeFrame::Today), vec!["A, Data: 5"]);
}

#[test]
fn null_data_renders_placeholder() {
    let items = vec![item(
        "A",
        vec![RangeEntry {
            today: Some(slot(None)),
            ..RangeEntry::default()
        }],
    )];

    assert_eq!(
        shape_data_lines(&items, TimeFrame::Today),
        vec!["A, Data: No data"]
    );
}

#[test]
fn missing_slot_contributes_nothing() {
    let items = vec![item(
        "A",
        vec![RangeEntry {
            last7days: Some(slot(Some(3.0))),
            ..RangeEntry::default()
        }],
    )];

    assert!(shape_data_lines(&items, TimeFrame::Today).is_empty());
}

#[test]
fn order_follows_items_then_range_entries() {
    let items = vec![
        item(
            "First",
            vec![
                RangeEntry {
                    last30days: Some(slot(Some(1.0))),
                    ..RangeEntry::default()
                },
                RangeEntry {
                    last30days: Some(slot(Some(2.0))),
                    ..RangeEntry::default()
                },
            ],
        ),
        item("Empty", Vec::new()),
        item(
            "Second",
            vec![RangeEntry {
                last30days: Some(slot(None)),
                ..RangeEntry::default()
            }],
        ),
    ];

    assert_eq!(
        shape_data_lines(&items, TimeFrame::Last30Days),
        vec![
            "First, Data: 1",
            "First, Data: 2",
            "Second, Data: No data",
        ]
    );
}

#[test]
fn shapes_payload_decoded_from_json() {
    let raw = r#"[
        {"label":"Shipped","event":"SHIP","range":[{"today":{"fromDate":"a","toDate":"b","data":7,"ftlData":null}}]},
        {"label":"Pending","event":"SHIP","range":[{"today":{"fromDate":"a","toDate":"b","data":null}}]}
    ]"#;
    let items: Vec<StatsItem> = serde_json::from_str(raw).unwrap();

    assert_eq!(
        shape_data_lines(&items, TimeFrame::Today),
        vec!["Shipped, Data: 7", "Pending, Data: No data"]
    );
}
