/// Integration tests for the complete comparison workflow
mod test_utilities;

use nac_tco::prelude::*;
use nac_tco::tco_analysis::domain::Architecture;
use pretty_assertions::assert_eq;
use test_utilities::mocks::*;

fn two_vendor_catalog() -> MockCatalogSource {
    MockCatalogSource::new()
        .with_vendor("cloudy", Architecture::Cloud, 3.0, 0.0, 0.25)
        .with_vendor("boxy", Architecture::OnPremises, 8.0, 100_000.0, 2.0)
}

fn vendors(ids: &[&str]) -> Option<Vec<String>> {
    Some(ids.iter().map(|id| id.to_string()).collect())
}

fn render(response: &ComparisonResponse, formatter: &dyn ReportFormatter) -> String {
    let model = ComparisonReadModelBuilder::build(
        &response.comparison,
        &response.configuration,
        &response.metadata,
    );
    formatter.format(&model).unwrap()
}

#[test]
fn test_end_to_end_json_report() {
    let reporter = MockProgressReporter::new();
    let presenter = MockOutputPresenter::new();
    let use_case = GenerateComparisonUseCase::new(two_vendor_catalog(), reporter.clone());

    let response = use_case.execute(ComparisonRequest::default()).unwrap();
    let output = render(&response, &JsonFormatter::new());
    presenter.present(&output).unwrap();

    let json: serde_json::Value =
        serde_json::from_str(&presenter.last_output().unwrap()).unwrap();
    let rows = json["vendors"].as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["id"], "cloudy");
    assert_eq!(rows[0]["rank"], 1);
    assert_eq!(rows[1]["id"], "boxy");
    assert_eq!(json["summary"]["lowest_tco"]["id"], "cloudy");
    assert_eq!(json["summary"]["highest_tco"]["id"], "boxy");
    assert_eq!(json["configuration"]["device_count"], 1000);
    assert!(json["metadata"]["report_id"]
        .as_str()
        .unwrap()
        .starts_with("urn:uuid:"));

    // No portnox in this catalog, so no featured savings either
    assert!(json["summary"].get("featured_savings").is_none());
    assert!(reporter.warnings().is_empty());
    assert!(reporter
        .get_messages()
        .contains(&"Progress: 2/2 - boxy NAC".to_string()));
}

#[test]
fn test_end_to_end_markdown_report() {
    let reporter = MockProgressReporter::new();
    let use_case = GenerateComparisonUseCase::new(BuiltinCatalogSource::new(), reporter);

    let response = use_case
        .execute(ComparisonRequest::new(RawAnalysisInput {
            vendors: vendors(&["portnox", "cisco"]),
            ..Default::default()
        }))
        .unwrap();
    let output = render(&response, &MarkdownFormatter::new());

    assert!(output.starts_with("# NAC Total Cost of Ownership Comparison"));
    assert!(output.contains("Portnox CLEAR"));
    assert!(output.contains("Cisco ISE"));
    assert!(output.contains("$226,000"));
    assert!(output.contains("$1,251,250"));
    assert!(!output.contains("## Input Adjustments"));
}

#[test]
fn test_builtin_defaults_match_reference_figures() {
    let use_case =
        GenerateComparisonUseCase::new(BuiltinCatalogSource::new(), MockProgressReporter::new());

    let response = use_case.execute(ComparisonRequest::default()).unwrap();
    let comparison = &response.comparison;

    assert_eq!(comparison.len(), 14);
    let portnox = comparison.get("portnox").unwrap();
    assert_eq!(portnox.tco.total, 226_000.0);
    assert_eq!(portnox.tco.year(1), 92_000.0);
    assert_eq!(portnox.tco.year(2), 67_000.0);
    assert_eq!(portnox.tco.year(3), 67_000.0);
    assert_eq!(portnox.roi.annual_savings, 381_625.0);
    assert_eq!(comparison.get("cisco").unwrap().tco.total, 1_251_250.0);
    assert_eq!(comparison.get("aruba").unwrap().tco.total, 968_750.0);
    assert_eq!(
        comparison.summary.lowest_tco.as_ref().unwrap().id.as_str(),
        "portnox"
    );
}

#[test]
fn test_invalid_input_is_repaired_and_reported() {
    let reporter = MockProgressReporter::new();
    let use_case = GenerateComparisonUseCase::new(two_vendor_catalog(), reporter.clone());

    let response = use_case
        .execute(ComparisonRequest::new(RawAnalysisInput {
            device_count: Some(LooseNumber::from("-50")),
            analysis_period: Some(LooseNumber::from("25")),
            company_size: Some("gigantic".to_string()),
            ..Default::default()
        }))
        .unwrap();

    assert_eq!(response.configuration.device_count(), 1000);
    assert_eq!(response.configuration.analysis_period_years(), 10);
    assert_eq!(response.configuration.company_size(), CompanySize::Medium);
    assert_eq!(response.adjustments().len(), 3);
    assert_eq!(reporter.warnings().len(), 3);

    let output = render(&response, &MarkdownFormatter::new());
    assert!(output.contains("## Input Adjustments"));
    assert!(output.contains("gigantic"));
}

#[test]
fn test_portnox_price_override_only_moves_portnox() {
    let run = |price: Option<&str>| {
        let use_case = GenerateComparisonUseCase::new(
            BuiltinCatalogSource::new(),
            MockProgressReporter::new(),
        );
        use_case
            .execute(ComparisonRequest::new(RawAnalysisInput {
                portnox_pricing: price.map(LooseNumber::from),
                vendors: vendors(&["portnox", "cisco", "forescout"]),
                ..Default::default()
            }))
            .unwrap()
            .comparison
    };

    let base = run(None);
    let repriced = run(Some("5.00"));

    assert!(repriced.get("portnox").unwrap().tco.total > base.get("portnox").unwrap().tco.total);
    for id in ["cisco", "forescout"] {
        assert_eq!(
            repriced.get(id).unwrap().tco.total,
            base.get(id).unwrap().tco.total
        );
    }
}

#[test]
fn test_specific_baseline_through_port() {
    let use_case =
        GenerateComparisonUseCase::new(two_vendor_catalog(), MockProgressReporter::new());

    let response = use_case
        .compare(ComparisonRequest::new(RawAnalysisInput {
            baseline: Some("boxy".to_string()),
            ..Default::default()
        }))
        .unwrap();

    let summary = &response.comparison.summary;
    assert_eq!(summary.baseline_label, "boxy NAC");
    assert_eq!(
        summary.baseline_tco,
        response.comparison.get("boxy").unwrap().tco.total
    );
    let cloudy = response.comparison.get("cloudy").unwrap();
    assert!(cloudy.roi.savings_vs_baseline > 0.0);
    assert!(cloudy.roi.savings_percent > 0.0);
}

#[test]
fn test_unknown_vendors_only_fail() {
    let reporter = MockProgressReporter::new();
    let use_case = GenerateComparisonUseCase::new(two_vendor_catalog(), reporter.clone());

    let result = use_case.execute(ComparisonRequest::new(RawAnalysisInput {
        vendors: vendors(&["cisco"]),
        ..Default::default()
    }));

    let err = result.unwrap_err().to_string();
    assert!(err.contains("cisco"));
    assert!(err.contains("mock catalog"));
    assert_eq!(reporter.warnings().len(), 1);
}

#[test]
fn test_file_catalog_sources() {
    let fixtures = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures");

    for (file, first_id) in [
        ("catalog.json", "portnox"),
        ("catalog.yml", "hybridnac"),
        ("catalog.toml", "tomlnac"),
    ] {
        let source = FileCatalogSource::new(fixtures.join(file));
        let use_case = GenerateComparisonUseCase::new(source, MockProgressReporter::new());
        let response = use_case.execute(ComparisonRequest::default()).unwrap();

        assert_eq!(
            response.comparison.results[0].id.as_str(),
            first_id,
            "first vendor of {}",
            file
        );
    }
}
