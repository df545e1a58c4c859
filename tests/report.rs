#![forbid(unsafe_code)]
use chrono::NaiveDate;
use escala::{io, model::RosterId, render_period, ScaleCalendar, StatusRenderer, TextStatus};
use tempfile::tempdir;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[test]
fn text_rendering_of_a_week() {
    let reports = ScaleCalendar::new(RosterId::Alfa).period(d(2025, 10, 6), d(2025, 10, 12));
    insta::assert_snapshot!(render_period(&reports, &TextStatus).trim_end(), @r"
    06/10/2025  Seg  ALFA   FOLGA
    07/10/2025  Ter  ALFA   TRABALHA
    08/10/2025  Qua  ALFA   FOLGA
    09/10/2025  Qui  ALFA   TRABALHA
    10/10/2025  Sex  ALFA   TRABALHA
    11/10/2025  Sab  ALFA   FOLGA
    12/10/2025  Dom  ALFA   FOLGA  (Nossa Sr.a Aparecida - Padroeira do Brasil)
    ");
}

#[test]
fn single_line_for_bravo() {
    let report = ScaleCalendar::new(RosterId::Bravo).status(d(2025, 10, 13));
    assert_eq!(TextStatus.render(&report), "13/10/2025  Seg  BRAVO  FOLGA");
}

#[test]
fn export_csv_and_json() {
    let dir = tempdir().unwrap();
    let reports = ScaleCalendar::new(RosterId::Bravo).period(d(2025, 10, 11), d(2025, 10, 13));

    let csv_path = dir.path().join("period.csv");
    io::export_period_csv(&csv_path, &reports).unwrap();
    let csv = std::fs::read_to_string(&csv_path).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines[0], "date,weekday,roster,status,holiday");
    assert_eq!(lines[1], "11/10/2025,Sab,BRAVO,TRABALHA,");
    assert_eq!(lines.len(), 4);

    let json_path = dir.path().join("period.json");
    io::export_period_json(&json_path, &reports).unwrap();
    let value: serde_json::Value =
        serde_json::from_slice(&std::fs::read(&json_path).unwrap()).unwrap();
    assert_eq!(value[0]["date"], "2025-10-11");
    assert_eq!(value[0]["roster"], "BRAVO");
    assert_eq!(value[0]["status"], "work");
    assert_eq!(value[2]["is_off"], true);
    assert!(value[2].get("holiday").is_none());
}
