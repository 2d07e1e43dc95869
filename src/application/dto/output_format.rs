/// Rendering of the comparison report
///
/// Accepted wherever a report format can be chosen: `--format`, the
/// `format` key of the config file, and the formatter factory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Full read model as pretty JSON, for scripts and dashboards
    #[default]
    Json,
    /// Tables for people: configuration, TCO, ROI, yearly costs, summary
    Markdown,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 2] = [OutputFormat::Json, OutputFormat::Markdown];

    /// Name as written in reports and messages
    pub fn label(&self) -> &'static str {
        match self {
            OutputFormat::Json => "JSON",
            OutputFormat::Markdown => "Markdown",
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            _ => {
                let accepted: Vec<String> = Self::ALL
                    .iter()
                    .map(|format| format!("'{}'", format))
                    .collect();
                Err(format!(
                    "Invalid format: {}. Please specify {}",
                    s,
                    accepted.join(" or ")
                ))
            }
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Markdown => write!(f, "markdown"),
        }
    }
}
