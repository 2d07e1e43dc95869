use crate::application::read_models::{
    ComparisonReadModel, ConfigurationView, SummaryView, VendorView,
};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

const TCO_TABLE_HEADER: &str =
    "| Rank | Vendor | Architecture | Total TCO | Annual | Per Device | Per Device / Month | Deployment |\n";

const TCO_TABLE_SEPARATOR: &str =
    "|------|--------|--------------|-----------|--------|------------|--------------------|------------|\n";

const ROI_TABLE_HEADER: &str =
    "| Vendor | ROI | Annual Savings | Payback | Savings vs Baseline | Savings % | Security | Risk |\n";

const ROI_TABLE_SEPARATOR: &str =
    "|--------|-----|----------------|---------|---------------------|-----------|----------|------|\n";

/// MarkdownFormatter adapter for a human-readable comparison report
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    /// Formats whole dollars with thousands separators, e.g. `$1,251,250`
    fn usd(amount: f64) -> String {
        let rounded = amount.round();
        let digits = format!("{:.0}", rounded.abs());
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (index, digit) in digits.chars().enumerate() {
            if index > 0 && (digits.len() - index) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(digit);
        }
        if rounded < 0.0 {
            format!("-${}", grouped)
        } else {
            format!("${}", grouped)
        }
    }

    /// Formats prices below a dollar-per-unit level, e.g. `$3.50`
    fn usd_cents(amount: f64) -> String {
        format!("${:.2}", amount)
    }

    fn payback(vendor: &VendorView) -> String {
        if vendor.payback_undefined() {
            "Never".to_string()
        } else {
            format!("{} months", vendor.payback_months)
        }
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper methods for rendering sections
impl MarkdownFormatter {
    fn render_header(&self, output: &mut String, model: &ComparisonReadModel) {
        output.push_str("# NAC Total Cost of Ownership Comparison\n\n");
        output.push_str(&format!(
            "Generated {} by {} {} ({})\n\n",
            model.metadata.timestamp,
            model.metadata.tool_name,
            model.metadata.tool_version,
            model.metadata.report_id
        ));
    }

    fn render_configuration(&self, output: &mut String, config: &ConfigurationView) {
        output.push_str("## Analysis Configuration\n\n");
        output.push_str("| Parameter | Value |\n");
        output.push_str("|-----------|-------|\n");
        output.push_str(&format!("| Devices | {} |\n", config.device_count));
        output.push_str(&format!("| Locations | {} |\n", config.location_count));
        output.push_str(&format!(
            "| Analysis period | {} years |\n",
            config.analysis_period_years
        ));
        output.push_str(&format!("| Company size | {} |\n", config.company_size));
        if let Some(industry) = &config.industry {
            output.push_str(&format!("| Industry | {} |\n", industry));
        }
        output.push_str(&format!("| FTE cost | {} |\n", Self::usd(config.fte_cost)));
        output.push_str(&format!(
            "| Breach cost | {} |\n",
            Self::usd(config.breach_cost)
        ));
        if let Some(price) = config.portnox_pricing {
            output.push_str(&format!(
                "| Portnox price override | {} per device / month |\n",
                Self::usd_cents(price)
            ));
        }
        output.push_str(&format!(
            "| Baseline | {} |\n\n",
            Self::escape_markdown_table_cell(&config.baseline)
        ));
    }

    fn render_tco_table(&self, output: &mut String, vendors: &[VendorView]) {
        output.push_str("## TCO Comparison\n\n");
        output.push_str("Vendors ordered by total cost over the analysis period.\n\n");
        output.push_str(TCO_TABLE_HEADER);
        output.push_str(TCO_TABLE_SEPARATOR);

        for vendor in vendors {
            output.push_str(&format!(
                "| {} | {} | {} | {} | {} | {} | {} | {} days |\n",
                vendor.rank,
                Self::escape_markdown_table_cell(&vendor.name),
                vendor.architecture,
                Self::usd(vendor.total_tco),
                Self::usd(vendor.annual_tco),
                Self::usd(vendor.per_device_tco),
                Self::usd_cents(vendor.per_device_monthly),
                vendor.implementation_days
            ));
        }
        output.push('\n');
    }

    fn render_roi_table(&self, output: &mut String, vendors: &[VendorView], baseline: &str) {
        output.push_str("## Return on Investment\n\n");
        output.push_str(&format!(
            "Savings are measured against the {} baseline.\n\n",
            baseline
        ));
        output.push_str(ROI_TABLE_HEADER);
        output.push_str(ROI_TABLE_SEPARATOR);

        for vendor in vendors {
            output.push_str(&format!(
                "| {} | {}% | {} | {} | {} | {}% | {} | {} |\n",
                Self::escape_markdown_table_cell(&vendor.name),
                vendor.roi_percent,
                Self::usd(vendor.annual_savings),
                Self::payback(vendor),
                Self::usd(vendor.savings_vs_baseline),
                vendor.savings_percent,
                vendor.security_score,
                vendor.risk_score
            ));
        }
        output.push('\n');
    }

    fn render_yearly_table(&self, output: &mut String, vendors: &[VendorView], years: u32) {
        output.push_str("## Yearly Costs\n\n");

        output.push_str("| Vendor |");
        for year in 1..=years {
            output.push_str(&format!(" Year {} |", year));
        }
        output.push_str("\n|--------|");
        for _ in 1..=years {
            output.push_str("--------|");
        }
        output.push('\n');

        for vendor in vendors {
            output.push_str(&format!(
                "| {} |",
                Self::escape_markdown_table_cell(&vendor.name)
            ));
            for yearly in &vendor.yearly {
                output.push_str(&format!(" {} |", Self::usd(yearly.cost)));
            }
            output.push('\n');
        }
        output.push('\n');
    }

    fn render_adjustments(&self, output: &mut String, summary: &SummaryView) {
        if summary.adjustments.is_empty() {
            return;
        }

        output.push_str("## Input Adjustments\n\n");
        output.push_str("The following inputs were invalid and replaced:\n\n");
        for adjustment in &summary.adjustments {
            output.push_str(&format!(
                "- `{}`: {} replaced with {}\n",
                adjustment.field, adjustment.provided, adjustment.applied
            ));
        }
        output.push('\n');
    }

    fn render_summary(&self, output: &mut String, summary: &SummaryView) {
        output.push_str("## Summary\n\n");
        output.push_str(&format!("- Vendors compared: {}\n", summary.vendor_count));

        if let Some(lowest) = &summary.lowest_tco {
            output.push_str(&format!(
                "- Lowest TCO: {} ({})\n",
                lowest.name,
                Self::usd(lowest.total)
            ));
        }
        if let Some(highest) = &summary.highest_tco {
            output.push_str(&format!(
                "- Highest TCO: {} ({})\n",
                highest.name,
                Self::usd(highest.total)
            ));
        }
        output.push_str(&format!(
            "- Average competitor TCO: {}\n",
            Self::usd(summary.average_competitor_tco)
        ));
        if let (Some(savings), Some(percent)) =
            (summary.featured_savings, summary.featured_savings_percent)
        {
            output.push_str(&format!(
                "- Portnox savings vs competitor average: {} ({}%)\n",
                Self::usd(savings),
                percent
            ));
        }
        if let Some(days) = summary.fastest_deployment_days {
            output.push_str(&format!(
                "- Fastest deployment: {} days (average {:.0} days)\n",
                days, summary.average_deployment_days
            ));
        }
    }
}

impl ReportFormatter for MarkdownFormatter {
    fn format(&self, model: &ComparisonReadModel) -> Result<String> {
        let mut output = String::new();

        self.render_header(&mut output, model);
        self.render_configuration(&mut output, &model.configuration);
        self.render_tco_table(&mut output, &model.vendors);
        self.render_roi_table(&mut output, &model.vendors, &model.summary.baseline_label);
        self.render_yearly_table(
            &mut output,
            &model.vendors,
            model.configuration.analysis_period_years,
        );
        self.render_adjustments(&mut output, &model.summary);
        self.render_summary(&mut output, &model.summary);

        Ok(output)
    }
}
