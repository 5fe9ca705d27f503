use audience_core::{AudienceSnapshot, SubItem, Topic};

fn payments() -> Topic {
    Topic::new(
        "t1",
        "Digital payments",
        vec![
            SubItem::new("t1c1", "Mobile Wallets", true),
            SubItem::new("t1c2", "P2P Transfers", false),
        ],
    )
}

#[test]
fn topic_serializes_sub_items_as_children() {
    let json = serde_json::to_value(payments()).unwrap();
    assert_eq!(json["id"], "t1");
    assert_eq!(json["name"], "Digital payments");
    assert_eq!(json["children"][1]["id"], "t1c2");
    assert_eq!(json["children"][1]["selected"], false);
    assert!(json.get("similarity").is_none());
}

#[test]
fn snapshot_uses_saved_audience_field_names() {
    let mut scored = payments();
    scored.similarity = Some(0.8);
    let snapshot = AudienceSnapshot {
        core: vec![scored],
        supportive: Vec::new(),
    };

    let json = serde_json::to_value(&snapshot).unwrap();
    assert_eq!(json["coreTopics"][0]["similarity"], 0.8);
    assert_eq!(json["supportiveTopics"], serde_json::json!([]));

    let decoded: AudienceSnapshot = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, snapshot);
}

#[test]
fn partial_snapshot_payload_decodes_with_defaults() {
    let decoded: AudienceSnapshot = serde_json::from_value(serde_json::json!({
        "coreTopics": [
            { "id": "t2", "name": "Blockchain", "children": [ { "id": "t2c1", "name": "Ledgers" } ] }
        ]
    }))
    .unwrap();

    assert!(decoded.supportive.is_empty());
    assert!(!decoded.core[0].sub_items[0].selected);
    assert_eq!(decoded.core[0].similarity, None);
}
