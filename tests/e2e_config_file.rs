/// End-to-end tests for config file loading and CLI option precedence.
///
/// These tests exercise the full flow from config file on disk through CLI invocation
/// to correct output, using `assert_cmd` and `tempfile` for isolated test environments.
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

// ============================================================================
// Helper Functions
// ============================================================================

fn write_config(path: &std::path::Path, content: &str) {
    fs::write(path, content).unwrap();
}

fn fixtures_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).unwrap()
}

fn vendor_ids(json: &serde_json::Value) -> Vec<String> {
    json["vendors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["id"].as_str().unwrap().to_string())
        .collect()
}

// ============================================================================
// Auto-discovery
// ============================================================================

mod auto_discovery_tests {
    use super::*;

    #[test]
    fn test_auto_discovery_applies_inputs() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir.path().join("nac-tco.config.yml"),
            "devices: 2500\nyears: 5\nvendors:\n  - portnox\n  - cisco\n",
        );

        let assert = cargo_bin_cmd!("nac-tco")
            .current_dir(dir.path())
            .assert()
            .code(0);

        let json = stdout_json(assert.get_output());
        assert_eq!(json["configuration"]["device_count"], 2500);
        assert_eq!(json["configuration"]["analysis_period_years"], 5);
        assert_eq!(vendor_ids(&json), vec!["portnox", "cisco"]);
        assert_eq!(json["vendors"][0]["yearly"].as_array().unwrap().len(), 5);
    }

    #[test]
    fn test_auto_discovery_applies_format() {
        let dir = TempDir::new().unwrap();
        write_config(&dir.path().join("nac-tco.config.yml"), "format: markdown\n");

        cargo_bin_cmd!("nac-tco")
            .current_dir(dir.path())
            .assert()
            .code(0)
            .stdout(predicate::str::starts_with(
                "# NAC Total Cost of Ownership Comparison",
            ));
    }

    #[test]
    fn test_no_config_file_runs_normally() {
        let dir = TempDir::new().unwrap();

        let assert = cargo_bin_cmd!("nac-tco")
            .current_dir(dir.path())
            .assert()
            .code(0);

        let json = stdout_json(assert.get_output());
        assert_eq!(json["configuration"]["device_count"], 1000);
    }

    #[test]
    fn test_config_catalog_is_used() {
        let dir = TempDir::new().unwrap();
        fs::copy(
            fixtures_path().join("catalog.toml"),
            dir.path().join("vendors.toml"),
        )
        .unwrap();
        write_config(
            &dir.path().join("nac-tco.config.yml"),
            "catalog: vendors.toml\n",
        );

        let assert = cargo_bin_cmd!("nac-tco")
            .current_dir(dir.path())
            .assert()
            .code(0);

        assert_eq!(vendor_ids(&stdout_json(assert.get_output())), vec!["tomlnac"]);
    }
}

// ============================================================================
// Explicit --config
// ============================================================================

mod explicit_config_tests {
    use super::*;

    #[test]
    fn test_explicit_config_path_loads_successfully() {
        let dir = TempDir::new().unwrap();
        let config = fixtures_path().join("nac-tco.config.yml");

        cargo_bin_cmd!("nac-tco")
            .current_dir(dir.path())
            .args(["--config", config.to_str().unwrap()])
            .assert()
            .code(0)
            .stdout(predicate::str::contains("| Devices | 2500 |"))
            .stdout(predicate::str::contains("Cisco ISE"));
    }

    #[test]
    fn test_explicit_config_wins_over_discovered_file() {
        let dir = TempDir::new().unwrap();
        write_config(&dir.path().join("nac-tco.config.yml"), "devices: 10\n");
        let explicit = dir.path().join("other.yml");
        write_config(&explicit, "devices: 20\n");

        let assert = cargo_bin_cmd!("nac-tco")
            .current_dir(dir.path())
            .args(["-c", explicit.to_str().unwrap()])
            .assert()
            .code(0);

        assert_eq!(
            stdout_json(assert.get_output())["configuration"]["device_count"],
            20
        );
    }

    #[test]
    fn test_explicit_config_nonexistent_file_error() {
        cargo_bin_cmd!("nac-tco")
            .args(["--config", "/nonexistent/nac-tco.config.yml"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Failed to read config file"));
    }
}

// ============================================================================
// CLI over config precedence
// ============================================================================

mod merge_tests {
    use super::*;

    #[test]
    fn test_cli_values_override_config() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir.path().join("nac-tco.config.yml"),
            "devices: 2500\nlocations: 4\nvendors: [cisco]\n",
        );

        let assert = cargo_bin_cmd!("nac-tco")
            .current_dir(dir.path())
            .args(["-d", "500", "-v", "portnox"])
            .assert()
            .code(0);

        let json = stdout_json(assert.get_output());
        assert_eq!(json["configuration"]["device_count"], 500);
        assert_eq!(json["configuration"]["location_count"], 4);
        assert_eq!(vendor_ids(&json), vec!["portnox"]);
    }

    #[test]
    fn test_cli_format_overrides_config() {
        let dir = TempDir::new().unwrap();
        write_config(&dir.path().join("nac-tco.config.yml"), "format: markdown\n");

        let assert = cargo_bin_cmd!("nac-tco")
            .current_dir(dir.path())
            .args(["-f", "json"])
            .assert()
            .code(0);

        assert!(serde_json::from_slice::<serde_json::Value>(&assert.get_output().stdout).is_ok());
    }

    #[test]
    fn test_invalid_config_value_is_repaired() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir.path().join("nac-tco.config.yml"),
            "years: \"forever\"\n",
        );

        let assert = cargo_bin_cmd!("nac-tco")
            .current_dir(dir.path())
            .assert()
            .code(0)
            .stderr(predicate::str::contains("Invalid analysis_period"));

        let json = stdout_json(assert.get_output());
        assert_eq!(json["configuration"]["analysis_period_years"], 3);
        assert_eq!(json["summary"]["adjustments"][0]["field"], "analysis_period");
    }
}

// ============================================================================
// Error handling
// ============================================================================

mod error_tests {
    use super::*;

    #[test]
    fn test_invalid_yaml_syntax_error() {
        let dir = TempDir::new().unwrap();
        write_config(&dir.path().join("nac-tco.config.yml"), "devices: [unclosed\n");

        cargo_bin_cmd!("nac-tco")
            .current_dir(dir.path())
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Failed to parse config file"));
    }

    #[test]
    fn test_empty_vendor_id_validation_error() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir.path().join("nac-tco.config.yml"),
            "vendors:\n  - portnox\n  - \"\"\n",
        );

        cargo_bin_cmd!("nac-tco")
            .current_dir(dir.path())
            .assert()
            .code(3)
            .stderr(predicate::str::contains("vendors[1] must not be empty"));
    }

    #[test]
    fn test_invalid_format_in_config_error() {
        let dir = TempDir::new().unwrap();
        write_config(&dir.path().join("nac-tco.config.yml"), "format: pdf\n");

        cargo_bin_cmd!("nac-tco")
            .current_dir(dir.path())
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Invalid format: pdf"));
    }

    #[test]
    fn test_unknown_field_is_warned_not_fatal() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir.path().join("nac-tco.config.yml"),
            "devices: 100\ncolour: blue\n",
        );

        cargo_bin_cmd!("nac-tco")
            .current_dir(dir.path())
            .env_remove("NAC_TCO_LOG")
            .env_remove("RUST_LOG")
            .assert()
            .code(0)
            .stderr(predicate::str::contains("Unknown config field will be ignored"))
            .stderr(predicate::str::contains("colour"));
    }
}
