//! CSV export tests.

use ctae_model::{
    AeValue, BatchRow, CategoryReport, DetailRow, DetailTable, EventCategory, TrialId,
    TrialMetrics, TrialReport,
};
use ctae_report::{write_batch_csv, write_category_summary_csv, write_detail_csv};

fn detail_table() -> DetailTable {
    DetailTable {
        category: EventCategory::Serious,
        arms: vec!["Placebo".to_string(), "Drug 10mg".to_string()],
        rows: vec![
            DetailRow {
                term: "Total".to_string(),
                cells: vec![AeValue::Known(2.0), AeValue::Known(5.0)],
                total: AeValue::Known(7.0),
                percent: AeValue::Known(7.143),
            },
            DetailRow {
                term: "Anemia".to_string(),
                cells: vec![AeValue::Known(2.0), AeValue::Known(5.0)],
                total: AeValue::Known(7.0),
                percent: AeValue::Known(7.143),
            },
        ],
    }
}

fn csv_string(write: impl FnOnce(&mut Vec<u8>)) -> String {
    let mut buffer = Vec::new();
    write(&mut buffer);
    String::from_utf8(buffer).expect("utf8 csv")
}

#[test]
fn detail_csv_has_stable_columns() {
    let out = csv_string(|buf| write_detail_csv(&detail_table(), buf).expect("write"));
    let mut lines = out.lines();
    assert_eq!(lines.next(), Some("Term,Placebo,Drug 10mg,Total,Percent"));
    assert_eq!(lines.next(), Some("Total,2,5,7,7.143"));
    assert_eq!(lines.next(), Some("Anemia,2,5,7,7.143"));
    assert_eq!(lines.next(), None);
}

#[test]
fn batch_csv_renders_na_sentinels() {
    let rows = vec![BatchRow {
        id: TrialId::new("NCT1").expect("id"),
        metrics: TrialMetrics::enrollment_only(Some(120.0)),
    }];
    let out = csv_string(|buf| write_batch_csv(&rows, buf).expect("write"));
    let mut lines = out.lines();
    assert_eq!(
        lines.next(),
        Some(
            "NCTID,AE Count,Subjects with AE,Subjects in study,\
             % subjects w AE,Subject per AE,Study Arm Count"
        )
    );
    assert_eq!(lines.next(), Some("NCT1,NA,NA,120,NA,NA,NA"));
}

#[test]
fn category_summary_csv_lists_sae_then_oae() {
    let report = TrialReport {
        id: TrialId::new("NCT1").expect("id"),
        sae: CategoryReport {
            category: EventCategory::Serious,
            affected: 7.0,
            subject_percent: "7.14".to_string(),
            term_count: 1,
            detail: Some(detail_table()),
        },
        oae: CategoryReport {
            category: EventCategory::Other,
            affected: 0.0,
            subject_percent: "0".to_string(),
            term_count: 0,
            detail: None,
        },
        summary: TrialMetrics::unavailable(),
    };
    let out = csv_string(|buf| write_category_summary_csv(&report, buf).expect("write"));
    let mut lines = out.lines();
    assert_eq!(lines.next(), Some("Group,Subjects,Percentage,AE Count"));
    assert_eq!(lines.next(), Some("SAE,7,7.14,1"));
    assert_eq!(lines.next(), Some("OAE,0,0,0"));
}
