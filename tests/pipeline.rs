//! Parse-to-export pipeline tests over a canned API payload.

use ssq_history::export::{export_all, ExportTargets};
use ssq_history::parse::parse_draw_notice;
use std::fs;

const TWO_DRAWS: &str = r#"{
    "state": 0,
    "message": "查询成功",
    "result": [
        {
            "name": "双色球",
            "code": "2024002",
            "date": "2024-01-04(四)",
            "red": "03,08,14,22,27,31",
            "blue": "12",
            "sales": "361242148",
            "poolmoney": "2445120662",
            "content": "一等奖9注，单注奖金6136790元",
            "detailsLink": "/c/2024/01/04/577498.shtml"
        },
        {
            "name": "双色球",
            "code": "2024001",
            "date": "2024-01-02(二)",
            "red": "1,5,9,12,20,33",
            "blue": "7",
            "sales": "350934624",
            "poolmoney": "2438712410",
            "content": "一等奖5注，单注奖金8578475元",
            "detailsLink": "/c/2024/01/02/577322.shtml"
        }
    ]
}"#;

#[test]
fn test_payload_to_both_files() {
    let draws = parse_draw_notice(TWO_DRAWS).unwrap();
    assert_eq!(draws.len(), 2);

    let dir = tempfile::tempdir().unwrap();
    let targets = ExportTargets {
        xlsx: Some(dir.path().join("ssq_history.xlsx")),
        csv: Some(dir.path().join("ssq_history.csv")),
    };

    let outcome = export_all(&draws, &targets);
    assert!(outcome.is_success());
    assert_eq!(outcome.written.len(), 2);

    // CSV rows follow payload order, newest issue first
    let csv = fs::read_to_string(targets.csv.as_ref().unwrap()).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("issue,draw_date,red_numbers"));
    assert!(lines[1].starts_with("2024002,2024-01-04,\"3,8,14,22,27,31\",12,"));
    assert!(lines[2].starts_with("2024001,2024-01-02,\"1,5,9,12,20,33\",7,"));
    assert!(lines[2].contains("https://www.cwl.gov.cn/c/2024/01/02/577322.shtml"));

    let xlsx_len = fs::metadata(targets.xlsx.as_ref().unwrap()).unwrap().len();
    assert!(xlsx_len > 0);
}

#[test]
fn test_single_draw_is_header_plus_one_row() {
    let raw = r#"{"result": [{"code": "2024001", "date": "2024-01-02(二)",
                  "red": "1,5,9,12,20,33", "blue": "7"}]}"#;
    let draws = parse_draw_notice(raw).unwrap();
    assert_eq!(draws.len(), 1);

    let dir = tempfile::tempdir().unwrap();
    let targets = ExportTargets {
        xlsx: None,
        csv: Some(dir.path().join("one.csv")),
    };
    let outcome = export_all(&draws, &targets);
    assert!(outcome.is_success());

    let csv = fs::read_to_string(targets.csv.as_ref().unwrap()).unwrap();
    assert_eq!(csv.lines().count(), 2);
}

#[test]
fn test_empty_payload_gives_header_only_files() {
    let draws = parse_draw_notice(r#"{"result": []}"#).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let targets = ExportTargets {
        xlsx: Some(dir.path().join("empty.xlsx")),
        csv: Some(dir.path().join("empty.csv")),
    };
    let outcome = export_all(&draws, &targets);
    assert!(outcome.is_success());

    let csv = fs::read_to_string(targets.csv.as_ref().unwrap()).unwrap();
    assert_eq!(csv.lines().count(), 1);
    assert!(targets.xlsx.as_ref().unwrap().exists());
}

#[test]
fn test_failed_parse_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let result = parse_draw_notice("<html>403 Forbidden</html>");
    assert!(result.is_err());
    // nothing reached the exporter
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}
