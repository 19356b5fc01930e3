use super::common::*;

use crate::screening::sessions::domain::AssessmentRequest;
use crate::screening::sessions::export::write_records;

#[test]
fn empty_store_exports_header_only() {
    let mut buffer = Vec::new();

    let rows = write_records(&[], &mut buffer).expect("export succeeds");

    assert_eq!(rows, 0);
    let text = String::from_utf8(buffer).expect("utf8 csv");
    assert_eq!(text.lines().count(), 1);
    assert!(text.starts_with("id,created_at,patient_ref,consent,triage_category"));
    assert!(text.trim_end().ends_with("post_points,pirads_overridden"));
}

#[test]
fn skipped_sections_export_as_empty_cells() {
    let (service, _) = build_service();
    let record = service
        .submit(AssessmentRequest {
            patient_ref: None,
            consent: Some(consent()),
            triage: None,
            core: Some(core_form()),
            post: None,
        })
        .expect("submission succeeds");

    let mut buffer = Vec::new();
    write_records(std::slice::from_ref(&record), &mut buffer).expect("export succeeds");

    let text = String::from_utf8(buffer).expect("utf8 csv");
    let row = text.lines().nth(1).expect("data row");
    let cells: Vec<&str> = row.split(',').collect();
    assert_eq!(cells.len(), 17);
    assert_eq!(cells[0], record.id.0);
    assert_eq!(cells[2], "");
    assert_eq!(cells[3], "true");
    assert_eq!(cells[4], "");
    assert_eq!(cells[6], "5");
    assert_eq!(cells[7], "LOWER");
    assert_eq!(cells[12], "22.0");
    assert!(cells[13..].iter().all(|cell| cell.is_empty()));
}

#[test]
fn full_record_exports_triage_and_post_columns() {
    let (service, _) = build_service();
    let record = service.submit(full_request()).expect("submission succeeds");

    let mut buffer = Vec::new();
    write_records(std::slice::from_ref(&record), &mut buffer).expect("export succeeds");

    let text = String::from_utf8(buffer).expect("utf8 csv");
    let row = text.lines().nth(1).expect("data row");
    assert!(row.contains("kiosk-17"));
    assert!(row.contains(",4,"));
    assert!(row.contains("Moderate-Risk"));
    assert!(row.ends_with(",50,false"));
}

#[test]
fn export_csv_reports_row_count() {
    let (service, _) = build_service();
    service.submit(full_request()).expect("first stored");
    service.submit(full_request()).expect("second stored");

    let mut buffer = Vec::new();
    let rows = service.export_csv(&mut buffer).expect("export succeeds");

    assert_eq!(rows, 2);
    let text = String::from_utf8(buffer).expect("utf8 csv");
    assert_eq!(text.lines().count(), 3);
}
