// tests/end_to_end.rs
use std::fs;
use std::path::PathBuf;

use finals_scrape::core::html_parser::parse_finals_page;
use finals_scrape::core::reconciler::DayTokenReconciler;
use finals_scrape::core::{report, roster};

const FINALS_PAGE: &str = r#"
<html><body>
  <h2>Monday</h2>
  <table class="footable">
    <thead><tr><th>Class Start Time</th><th>Class Days</th><th>Final Exam Time</th></tr></thead>
    <tbody>
      <tr><td>10:00 a.m.</td><td>Tues/Thurs (TR)</td><td>8:00am</td></tr>
      <tr><td>9:00 a.m.</td><td>Mon/Wed/Fri (MWF)</td><td>10:15am</td></tr>
    </tbody>
  </table>
  <h2>Wednesday</h2>
  <table class="footable">
    <tbody>
      <tr><td>1:00 p.m.</td><td>Mon/Wed (MW)</td><td>12:30pm</td></tr>
    </tbody>
  </table>
</body></html>
"#;

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("finals_e2e_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

#[test]
fn tuesday_thursday_class_gets_one_row() {
    let finals = parse_finals_page(FINALS_PAGE).unwrap();
    let sessions = roster::read_sessions("Class,Days,Time\nCS101,T,10:00am\nCS101,R,10:00am\n".as_bytes()).unwrap();
    let classes = roster::group_by_class(sessions);

    let matched = report::match_classes(&finals, &classes, &DayTokenReconciler::default());
    let mut out = Vec::new();
    report::write_rows(&mut out, &matched.rows).unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Class,Class Time,Class Days,Final Day,Final Time\nCS101,10:00am,TR,Monday,8:00am\n"
    );
}

#[test]
fn misses_are_left_out_of_the_file() {
    let finals = parse_finals_page(FINALS_PAGE).unwrap();
    let roster_csv = "\
Class,Days,Time,Instructor
MATH181,M,9:00AM,Lee
PHYS180,F,3:00pm,Ortiz
MATH181,W,9:00AM,Lee
MATH181,F,9:00AM,Lee
ART100,M,1:00pm,Kim
ART100,W,1:00pm,Kim
";
    let classes = roster::group_by_class(roster::read_sessions(roster_csv.as_bytes()).unwrap());

    let matched = report::match_classes(&finals, &classes, &DayTokenReconciler::default());
    let names: Vec<&str> = matched.rows.iter().map(|r| r.class_name.as_str()).collect();
    assert_eq!(names, ["MATH181", "ART100"]);
    assert_eq!(matched.misses.len(), 1);

    assert_eq!(matched.rows[0].class_days, "MWF");
    assert_eq!(matched.rows[0].final_time, "10:15am");
    assert_eq!(matched.rows[1].final_day, "Wednesday");
}

#[test]
fn reads_and_writes_files() {
    let dir = tmp_dir("files");
    let input = dir.join("class_schedule.csv");
    let output = dir.join("finals_schedule.csv");
    fs::write(&input, "Class,Days,Time\nART100,W,1:00pm\nART100,M,1:00pm\n").unwrap();

    let finals = parse_finals_page(FINALS_PAGE).unwrap();
    let classes = roster::group_by_class(roster::read_sessions_from_path(&input).unwrap());
    let matched = report::match_classes(&finals, &classes, &DayTokenReconciler::default());
    report::write_rows_to_path(&output, &matched.rows).unwrap();

    let written = fs::read_to_string(&output).unwrap();
    assert!(written.ends_with("ART100,1:00pm,MW,Wednesday,12:30pm\n"));
}

#[test]
fn missing_roster_file_is_an_error() {
    let dir = tmp_dir("missing");
    let err = roster::read_sessions_from_path(&dir.join("nope.csv")).unwrap_err();
    assert!(err.message.contains("nope.csv"));
    let source = err.source_error().and_then(|e| e.downcast_ref::<std::io::Error>());
    assert_eq!(source.map(|e| e.kind()), Some(std::io::ErrorKind::NotFound));
}
