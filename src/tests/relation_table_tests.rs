#[cfg(test)]
mod tests {
    use std::fs;

    use crate::config::{ VerifierOptions, DEFAULT_REPEATS };
    use crate::errors::EqlawError;
    use crate::implementations::config::{ ConfigError, RelationConfig };
    use crate::implementations::verifier::ContractVerifier;
    use crate::models::law::LawKind;
    use crate::tests::fixtures::setup;

    const CASE_FOLDING: &str = r#"
name: case folding
samples: [string, STRING, other]
equal:
  - [string, string]
  - [STRING, STRING]
  - [other, other]
  - [string, STRING]
"#;

    #[test]
    fn test_parse_relation_defaults() {
        setup();
        let config = RelationConfig::from_yaml_str(CASE_FOLDING).unwrap();

        assert_eq!(config.name.as_deref(), Some("case folding"));
        assert_eq!(config.samples.len(), 3);
        assert_eq!(config.absent, "null");
        assert!(!config.symmetric);
        assert_eq!(config.equal[3], ("string".to_string(), "STRING".to_string()));
    }

    #[test]
    fn test_one_directional_table_fails_symmetry() {
        setup();
        let table = RelationConfig::from_yaml_str(CASE_FOLDING).unwrap().into_table().unwrap();

        assert!(table.holds("string", "STRING"));
        assert!(!table.holds("STRING", "string"));

        let report = ContractVerifier::default()
            .verify(&table.samples, &table, &table.absent)
            .unwrap();

        assert_eq!(report.failed_laws(), vec![LawKind::Symmetry]);
        let violation = report.violations_of(LawKind::Symmetry).next().unwrap();
        assert_eq!(violation.indices, vec![0, 1]);
    }

    #[test]
    fn test_symmetric_flag_mirrors_pairs() {
        setup();
        let mut config = RelationConfig::from_yaml_str(CASE_FOLDING).unwrap();
        config.symmetric = true;
        let table = config.into_table().unwrap();

        assert!(table.holds("STRING", "string"));
        let report = ContractVerifier::default()
            .verify(&table.samples, &table, &table.absent)
            .unwrap();
        assert!(report.passed(), "{}", report);
    }

    #[test]
    fn test_pairs_with_sentinel_break_null_safety() {
        setup();
        let yaml = r#"
samples: [a]
absent: none
equal:
  - [a, a]
  - [a, none]
"#;
        let table = RelationConfig::from_yaml_str(yaml).unwrap().into_table().unwrap();

        let report = ContractVerifier::default()
            .verify(&table.samples, &table, &table.absent)
            .unwrap();

        assert_eq!(report.failed_laws(), vec![LawKind::NullSafety]);
    }

    #[test]
    fn test_table_lookup_by_label() {
        setup();
        let yaml = r#"
samples: [a, b]
absent: none
symmetric: true
equal:
  - [a, b]
  - [b, none]
"#;
        let table = RelationConfig::from_yaml_str(yaml).unwrap().into_table().unwrap();

        assert_eq!(table.pair_count(), 4);
        assert!(table.holds("a", "b"));
        assert!(table.holds("b", "a"));
        assert!(table.holds("b", "none"));
        assert!(table.holds("none", "b"));
        assert!(!table.holds("a", "a"));
        assert!(!table.holds("a", "none"));
        assert!(!table.holds("a", "missing"));
        assert!(!table.holds("missing", "missing"));
    }

    #[test]
    fn test_table_rejects_bad_labels() {
        setup();
        let unknown = RelationConfig::from_yaml_str("samples: [a]\nequal: [[a, b]]\n")
            .unwrap()
            .into_table();
        assert!(matches!(unknown, Err(ConfigError::UnknownLabel(label)) if label == "b"));

        let duplicate = RelationConfig::from_yaml_str("samples: [a, a]\n").unwrap().into_table();
        assert!(matches!(duplicate, Err(ConfigError::DuplicateSample(_))));

        let collision = RelationConfig::from_yaml_str("samples: [a, \"null\"]\n")
            .unwrap()
            .into_table();
        assert!(matches!(collision, Err(ConfigError::SentinelCollision(_))));
    }

    #[test]
    fn test_relation_loads_from_json_file() {
        setup();
        let path = std::env::temp_dir().join(format!("eqlaw-relation-{}.json", std::process::id()));
        fs::write(
            &path,
            r#"{"samples": ["x", "y"], "equal": [["x", "x"], ["y", "y"]], "absent": "nothing"}"#
        ).unwrap();

        let config = RelationConfig::from_file(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(config.absent, "nothing");
        assert_eq!(config.name, None);
        let table = config.into_table().unwrap();
        assert_eq!(table.name, "relation");
        assert_eq!(table.pair_count(), 2);
    }

    #[test]
    fn test_verifier_options_from_yaml() {
        setup();
        assert_eq!(VerifierOptions::default().repeats, DEFAULT_REPEATS);

        let path = std::env::temp_dir().join(format!("eqlaw-options-{}.yaml", std::process::id()));
        fs::write(&path, "repeats: 5\n").unwrap();
        let options = VerifierOptions::from_file(&path).unwrap();
        fs::remove_file(&path).ok();
        assert_eq!(options.repeats, 5);

        let defaults: VerifierOptions = serde_yaml::from_str("{}").unwrap();
        assert_eq!(defaults.repeats, DEFAULT_REPEATS);

        let invalid = VerifierOptions::with_repeats(0).validate();
        assert!(matches!(invalid, Err(EqlawError::InvalidRepeats(0))));
    }

    #[test]
    fn test_missing_file_is_a_config_error() {
        setup();
        let path = std::env::temp_dir().join("eqlaw-does-not-exist.yaml");
        let err: EqlawError = RelationConfig::from_file(&path).unwrap_err().into();
        assert!(matches!(err, EqlawError::Config(ConfigError::FileReadError(_))));
    }
}
