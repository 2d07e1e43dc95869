use crate::ports::outbound::CatalogSource;
use crate::shared::error::TcoError;
use crate::shared::security::read_checked;
use crate::shared::Result;
use crate::tco_analysis::domain::{CatalogDocument, VendorCatalog};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Serialization format of a catalog file, chosen by extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFileFormat {
    Json,
    Yaml,
    Toml,
}

impl CatalogFileFormat {
    /// Detects the format from the file extension (case-insensitive)
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_lowercase();
        match extension.as_str() {
            "json" => Some(Self::Json),
            "yml" | "yaml" => Some(Self::Yaml),
            "toml" => Some(Self::Toml),
            _ => None,
        }
    }

    fn parse(self, content: &str) -> std::result::Result<CatalogDocument, String> {
        match self {
            Self::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
            Self::Yaml => serde_yaml_ng::from_str(content).map_err(|e| e.to_string()),
            Self::Toml => toml::from_str(content).map_err(|e| e.to_string()),
        }
    }
}

/// FileCatalogSource adapter reading a vendor catalog from disk
///
/// The file goes through the shared symlink and size checks before it is
/// parsed, and every profile is validated before the catalog is returned.
pub struct FileCatalogSource {
    path: PathBuf,
}

impl FileCatalogSource {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogSource for FileCatalogSource {
    fn load_catalog(&self) -> Result<VendorCatalog> {
        if !self.path.exists() {
            return Err(TcoError::CatalogNotFound {
                path: self.path.clone(),
                suggestion: "Pass an existing JSON, YAML or TOML file to --catalog, or omit it to use the built-in catalog".to_string(),
            }
            .into());
        }

        let format =
            CatalogFileFormat::from_path(&self.path).ok_or_else(|| TcoError::CatalogParseError {
                path: self.path.clone(),
                details: "Unsupported file extension. Use .json, .yml, .yaml or .toml".to_string(),
            })?;

        let content = read_checked(&self.path, "vendor catalog")?;
        let document = format
            .parse(&content)
            .map_err(|details| TcoError::CatalogParseError {
                path: self.path.clone(),
                details,
            })?;
        debug!(
            path = %self.path.display(),
            ?format,
            vendors = document.vendors.len(),
            "Parsed catalog file"
        );

        VendorCatalog::from_document(document)
    }

    fn describe(&self) -> String {
        format!("vendor catalog {}", self.path.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const JSON_CATALOG: &str = r#"{
  "vendors": [
    {
      "id": "portnox",
      "name": "Portnox CLEAR",
      "architecture": "cloud",
      "pricing": { "per_device_monthly": 3.5, "implementation": 15000, "fte_required": 0.25, "deployment_days": 21 },
      "capabilities": { "cloud_native": 100, "zero_trust": 95, "automation": 90, "ai_ml": 85, "compliance": 92,
                        "user_experience": 95, "support": 95, "innovation": 90, "scalability": 100, "integration": 90 }
    },
    {
      "id": "legacy",
      "name": "Legacy NAC",
      "architecture": "on-premises",
      "pricing": { "per_device_monthly": 9.0, "implementation": 90000, "annual_support": 20000,
                   "hardware": 150000, "fte_required": 2.5, "deployment_days": 120 },
      "capabilities": { "cloud_native": 10, "zero_trust": 60, "automation": 40, "ai_ml": 20, "compliance": 80,
                        "user_experience": 50, "support": 60, "innovation": 30, "scalability": 50, "integration": 60 }
    }
  ]
}"#;

    const YAML_CATALOG: &str = r#"vendors:
  - id: onprem
    name: On-Prem NAC
    architecture: on-premise
    pricing:
      per_device_monthly: 6.0
      implementation: 50000
      hardware: 80000
      fte_required: 1.0
    capabilities:
      cloud_native: 20
      zero_trust: 70
      automation: 60
      ai_ml: 40
      compliance: 85
      user_experience: 60
      support: 70
      innovation: 50
      scalability: 60
      integration: 75
"#;

    const TOML_CATALOG: &str = r#"[[vendors]]
id = "tomlnac"
name = "TOML NAC"
architecture = "hybrid"

[vendors.pricing]
per_device_monthly = 5.0
implementation = 30000.0
fte_required = 0.75

[vendors.capabilities]
cloud_native = 70
zero_trust = 80
automation = 75
ai_ml = 60
compliance = 85
user_experience = 80
support = 75
innovation = 70
scalability = 80
integration = 85
"#;

    fn write_catalog(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            CatalogFileFormat::from_path(Path::new("vendors.JSON")),
            Some(CatalogFileFormat::Json)
        );
        assert_eq!(
            CatalogFileFormat::from_path(Path::new("vendors.yaml")),
            Some(CatalogFileFormat::Yaml)
        );
        assert_eq!(
            CatalogFileFormat::from_path(Path::new("vendors.toml")),
            Some(CatalogFileFormat::Toml)
        );
        assert_eq!(CatalogFileFormat::from_path(Path::new("vendors.csv")), None);
        assert_eq!(CatalogFileFormat::from_path(Path::new("vendors")), None);
    }

    #[test]
    fn test_load_json_catalog() {
        let dir = TempDir::new().unwrap();
        let path = write_catalog(&dir, "vendors.json", JSON_CATALOG);

        let catalog = FileCatalogSource::new(path).load_catalog().unwrap();
        assert_eq!(catalog.len(), 2);
        let legacy = catalog.get("legacy").unwrap();
        assert_eq!(legacy.pricing.hardware, 150_000.0);
        assert!(legacy.architecture.is_on_premises());
    }

    #[test]
    fn test_load_yaml_catalog_with_defaults() {
        let dir = TempDir::new().unwrap();
        let path = write_catalog(&dir, "vendors.yml", YAML_CATALOG);

        let catalog = FileCatalogSource::new(path).load_catalog().unwrap();
        let vendor = catalog.get("onprem").unwrap();
        assert_eq!(vendor.pricing.annual_support, 0.0);
        assert_eq!(vendor.pricing.deployment_days, 0);
        assert!(vendor.architecture.is_on_premises());
    }

    #[test]
    fn test_load_toml_catalog() {
        let dir = TempDir::new().unwrap();
        let path = write_catalog(&dir, "vendors.toml", TOML_CATALOG);

        let catalog = FileCatalogSource::new(path).load_catalog().unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.profiles()[0].name, "TOML NAC");
    }

    #[test]
    fn test_missing_catalog_file() {
        let source = FileCatalogSource::new(PathBuf::from("/nonexistent/vendors.json"));
        let err = source.load_catalog().unwrap_err().to_string();
        assert!(err.contains("Vendor catalog not found"));
        assert!(err.contains("--catalog"));
    }

    #[test]
    fn test_unsupported_extension() {
        let dir = TempDir::new().unwrap();
        let path = write_catalog(&dir, "vendors.csv", "id,name\n");

        let err = FileCatalogSource::new(path).load_catalog().unwrap_err().to_string();
        assert!(err.contains("Unsupported file extension"));
    }

    #[test]
    fn test_malformed_catalog() {
        let dir = TempDir::new().unwrap();
        let path = write_catalog(&dir, "vendors.json", "{ \"vendors\": [ { \"id\": \"x\" } ] }");

        let err = FileCatalogSource::new(path).load_catalog().unwrap_err().to_string();
        assert!(err.contains("Failed to parse vendor catalog"));
    }

    #[test]
    fn test_invalid_vendor_id_in_catalog() {
        let dir = TempDir::new().unwrap();
        let path = write_catalog(
            &dir,
            "vendors.json",
            &JSON_CATALOG.replace("\"legacy\"", "\"Legacy NAC\""),
        );

        let err = FileCatalogSource::new(path).load_catalog().unwrap_err().to_string();
        assert!(err.contains("invalid characters"));
    }

    #[test]
    fn test_duplicate_vendor_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write_catalog(
            &dir,
            "vendors.json",
            &JSON_CATALOG.replace("\"legacy\"", "\"portnox\""),
        );

        let err = FileCatalogSource::new(path).load_catalog().unwrap_err().to_string();
        assert!(err.contains("Invalid vendor catalog"));
    }

    #[test]
    fn test_describe() {
        let source = FileCatalogSource::new(PathBuf::from("vendors.json"));
        assert_eq!(source.describe(), "vendor catalog vendors.json");
        assert_eq!(source.path(), Path::new("vendors.json"));
    }
}
