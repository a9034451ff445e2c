#[cfg(test)]
mod tests {
    use crate::implementations::verifier::verify;
    use crate::models::law::LawKind;
    use crate::models::report::{ VerificationReport, SAMPLING_LIMITATION };
    use crate::models::violation::{ Outcome, Violation };
    use crate::tests::fixtures::{ one_way_case_insensitive, setup, Text };

    fn asymmetric_report() -> VerificationReport {
        let samples = vec![Text::Folded("string".to_string()), Text::Plain("STRING".to_string())];
        verify(&samples, &one_way_case_insensitive, &Text::Absent, 3).unwrap()
    }

    #[test]
    fn test_report_surfaces_sampling_limitation() {
        setup();
        let report = verify(&[1u8, 2], &|a: &u8, b: &u8| a == b, &0, 3).unwrap();

        assert!(report.passed());
        assert_eq!(report.limitation, SAMPLING_LIMITATION);
        assert!(report.to_string().contains("not a proof"));
    }

    #[test]
    fn test_json_report_layout() {
        setup();
        let report = asymmetric_report();

        let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();

        assert_eq!(json["sample_count"], 2);
        assert_eq!(json["repeats"], 3);
        assert_eq!(json["verdicts"][1]["law"], "symmetry");
        assert_eq!(json["verdicts"][1]["passed"], false);
        assert_eq!(json["verdicts"][4]["law"], "null_safety");
        assert_eq!(json["violations"][0]["indices"], serde_json::json!([0, 1]));
        assert_eq!(
            json["violations"][0]["outcomes"],
            serde_json::json!([{ "returned": true }, { "returned": false }])
        );
        assert!(json["violations"][0].get("note").is_none());
    }

    #[test]
    fn test_yaml_report_reads_back() {
        setup();
        let report = asymmetric_report();

        let parsed: VerificationReport = serde_yaml::from_str(&report.to_yaml().unwrap()).unwrap();

        assert_eq!(parsed, report);
    }

    #[test]
    fn test_record_keeps_law_order_and_counts() {
        let mut report = VerificationReport::new(3, 2);
        report.record(LawKind::Reflexivity, 3, vec![]);
        report.record(
            LawKind::NullSafety,
            3,
            vec![
                Violation::new(LawKind::NullSafety, vec![0], vec![Outcome::Returned(true)]),
                Violation::new(LawKind::NullSafety, vec![2], vec![Outcome::Raised("boom".into())])
            ]
        );

        assert!(!report.passed());
        assert_eq!(report.passed_law(LawKind::Reflexivity), Some(true));
        assert_eq!(report.passed_law(LawKind::Symmetry), None);
        assert_eq!(report.verdict(LawKind::NullSafety).unwrap().violations, 2);
        assert_eq!(report.failed_laws(), vec![LawKind::NullSafety]);
    }

    #[test]
    fn test_violation_display() {
        let violation = Violation::new(
            LawKind::Transitivity,
            vec![1, 0, 2],
            vec![Outcome::Returned(true), Outcome::Returned(true), Outcome::Returned(false)]
        );
        assert_eq!(violation.to_string(), "transitivity violated at (1, 0, 2): [true, true, false]");

        let raised = Violation::new(LawKind::NullSafety, vec![0], vec![Outcome::Raised("bad".into())])
            .with_note("on sentinel");
        assert_eq!(raised.to_string(), "null-safety violated at (0): [raised(bad)] on sentinel");
    }
}
