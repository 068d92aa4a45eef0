use bearing_faults::utils::validation::Validate;
use bearing_faults::{
    compute, BearingError, BearingGeometry, ExportRecord, FaultAnalysisEngine, FaultKind,
    LocalStorage, ReportFormatter, TomlConfig,
};
use tempfile::TempDir;

fn bearing_file(rpm: &str, output: &str) -> TomlConfig {
    let content = format!(
        r#"
[bearing]
designation = "Timken 30302"
inner_diameter_mm = 15.0
outer_diameter_mm = 42.0
element_count = 14
element_diameter_mm = 6.5
contact_angle_deg = 15.0

[operation]
rpm = {}

{}
"#,
        rpm, output
    );
    TomlConfig::from_toml_str(&content).unwrap()
}

#[test]
fn test_engine_writes_export_that_round_trips() {
    let temp_dir = TempDir::new().unwrap();
    let storage = LocalStorage::new(temp_dir.path());
    let config = bearing_file(
        "1500.0",
        "[output]\nexport_file = \"reports/30302.json\"\nnotes = true",
    );
    assert!(config.validate().is_ok());

    let engine = FaultAnalysisEngine::new(storage.clone(), config);
    let outcome = engine.run().unwrap();

    assert_eq!(outcome.export_path.as_deref(), Some("reports/30302.json"));
    assert!(temp_dir.path().join("reports/30302.json").exists());
    assert!(outcome.report.text.contains("Bearing: Timken 30302"));
    assert!(outcome.report.text.contains("DIAGNOSTIC NOTES:"));

    let reloaded = ExportRecord::read_from(&storage, "reports/30302.json").unwrap();
    assert_eq!(reloaded, outcome.report.record);

    for kind in FaultKind::ALL {
        let original = outcome.result.get(kind);
        let exported = reloaded.frequencies.get(kind);
        assert!((exported.hz - original.hz).abs() <= 0.01, "{}", kind);
        assert!((exported.order - original.order).abs() <= 0.01, "{}", kind);
        assert!((exported.harmonics.second - original.harmonic_2x).abs() <= 0.01);
        assert!((exported.harmonics.third - original.harmonic_3x).abs() <= 0.01);
        assert_eq!(exported.description, kind.label());
    }
    assert_eq!(reloaded.parameters.element_count, 14);
    assert_eq!(reloaded.parameters.rpm, 1500.0);
    assert_eq!(reloaded.parameters.rotation_frequency_hz, 25.0);
}

#[test]
fn test_export_is_byte_for_byte_reproducible() {
    let temp_dir = TempDir::new().unwrap();
    let storage = LocalStorage::new(temp_dir.path());

    for name in ["first.json", "second.json"] {
        let config = bearing_file("1500", &format!("[output]\nexport_file = \"{}\"", name));
        FaultAnalysisEngine::new(storage.clone(), config).run().unwrap();
    }

    let first = std::fs::read(temp_dir.path().join("first.json")).unwrap();
    let second = std::fs::read(temp_dir.path().join("second.json")).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_export_layout() {
    let result = compute(&BearingGeometry::new(15.0, 42.0, 14, 6.5, 15.0, 1500.0));
    let json = ReportFormatter::new().to_record(&result).to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    let parameters = &value["parameters"];
    for key in [
        "inner_diameter_mm",
        "outer_diameter_mm",
        "pitch_diameter_mm",
        "element_count",
        "element_diameter_mm",
        "contact_angle_deg",
        "rpm",
        "rotation_frequency_hz",
    ] {
        assert!(parameters.get(key).is_some(), "missing parameter {}", key);
    }

    let bpfo = &value["frequencies"]["BPFO"];
    assert_eq!(bpfo["hz"], 136.45);
    assert_eq!(bpfo["order"], 5.46);
    assert_eq!(bpfo["description"], "Outer Race");
    assert_eq!(bpfo["harmonics"]["2x"], 272.9);
    assert_eq!(bpfo["harmonics"]["3x"], 409.34);
    assert_eq!(value["frequencies"]["FTF"]["description"], "Cage");
}

#[test]
fn test_strict_engine_rejects_before_writing() {
    let temp_dir = TempDir::new().unwrap();
    let storage = LocalStorage::new(temp_dir.path());
    let config = bearing_file("0", "[output]\nexport_file = \"never.json\"");

    let err = FaultAnalysisEngine::new(storage, config).run().unwrap_err();
    assert!(matches!(err, BearingError::InvalidSpeed { .. }));
    assert_eq!(err.exit_code(), 1);
    assert!(!temp_dir.path().join("never.json").exists());
}

#[test]
fn test_permissive_engine_reports_degenerate_speed() {
    let temp_dir = TempDir::new().unwrap();
    let storage = LocalStorage::new(temp_dir.path());
    let config = bearing_file(
        "0",
        "[output]\nvalidation = \"permissive\"\nexport_file = \"zero.json\"",
    );

    let outcome = FaultAnalysisEngine::new(storage, config).run().unwrap();
    assert_eq!(outcome.result.bpfo.hz, 0.0);
    assert!(outcome.result.bpfo.order.is_nan());

    // NaN orders are exported as null and cannot be parsed back as numbers.
    let json = std::fs::read_to_string(temp_dir.path().join("zero.json")).unwrap();
    assert!(json.contains("\"order\": null"));
    assert!(matches!(
        ExportRecord::from_json(&json),
        Err(BearingError::SerializationError(_))
    ));
}

#[test]
fn test_no_export_requested() {
    let temp_dir = TempDir::new().unwrap();
    let storage = LocalStorage::new(temp_dir.path());
    let config = bearing_file("3000", "");

    let outcome = FaultAnalysisEngine::new(storage, config).run().unwrap();
    assert!(outcome.export_path.is_none());
    assert_eq!(outcome.report.record.frequencies.bpfo.hz, 272.9);
    assert!(!outcome.report.text.contains("DIAGNOSTIC NOTES"));
    assert_eq!(std::fs::read_dir(temp_dir.path()).unwrap().count(), 0);
}
