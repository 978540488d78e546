use risk_auditor::classification::{RiskTier, ValidationError};
use risk_auditor::inventory::{InventoryError, InventoryImporter};
use std::io::Cursor;

const INVENTORY: &str = "\
systemName,systemPurpose,conductsSocialScoring,usedInEducation,interactsWithHumans,owner
Exam Proctor,Flags suspicious behaviour during remote exams,no,yes,yes,Learning Ops
Support Bot,Answers customer support questions,,,Y,Customer Care
Citizen Score,Ranks residents by trustworthiness,TRUE,,,Civic Tech
Broken Row,Has a bad answer,perhaps,,,Unknown
,Missing its name,,,,Nobody
";

#[test]
fn classifies_each_row_independently() {
    let entries =
        InventoryImporter::from_reader(Cursor::new(INVENTORY)).expect("inventory parses");

    assert_eq!(entries.len(), 5);

    let tiers: Vec<Option<RiskTier>> = entries
        .iter()
        .map(|entry| entry.outcome.as_ref().ok().map(|result| result.risk_category))
        .collect();
    assert_eq!(
        tiers,
        vec![
            Some(RiskTier::HighRisk),
            Some(RiskTier::LimitedRisk),
            Some(RiskTier::Prohibited),
            None,
            None,
        ]
    );

    assert_eq!(entries[0].system_name, "Exam Proctor");
    assert_eq!(entries[0].line, 2);
    assert_eq!(
        entries[3].outcome,
        Err(ValidationError::InvalidType {
            field: "conductsSocialScoring",
            expected: "boolean",
        })
    );
    assert_eq!(
        entries[4].outcome,
        Err(ValidationError::MissingField {
            field: "systemName"
        })
    );
}

#[test]
fn requires_name_and_purpose_columns() {
    let csv = "systemName,usedInJustice\nCourt Helper,yes\n";

    match InventoryImporter::from_reader(Cursor::new(csv)) {
        Err(InventoryError::MissingColumn(column)) => assert_eq!(column, "systemPurpose"),
        other => panic!("expected missing column, got {other:?}"),
    }
}

#[test]
fn reports_malformed_csv() {
    let csv = "systemName,systemPurpose\nA,B,extra\n";

    assert!(matches!(
        InventoryImporter::from_reader(Cursor::new(csv)),
        Err(InventoryError::Csv(_))
    ));
}
