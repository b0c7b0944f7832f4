use super::Sample;
use crate::catalog::MetricKind;

pub const CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";

trait SimplePrometheusMetric {
    fn name(&self) -> &str;
    fn description(&self) -> &str;
    fn kind(&self) -> &str;
    fn value(&self) -> String;
}

trait PrometheusFormat {
    fn format(&self) -> String;
}

impl<T: SimplePrometheusMetric> PrometheusFormat for T {
    fn format(&self) -> String {
        let name = self.name();
        let help = escape_help(self.description());
        let kind = self.kind();
        let value = self.value();

        format!("# HELP {name} {help}\n# TYPE {name} {kind}\n{name} {value}")
    }
}

impl SimplePrometheusMetric for Sample {
    fn name(&self) -> &str {
        self.name
    }

    fn description(&self) -> &str {
        self.description
    }

    fn kind(&self) -> &str {
        self.kind.as_str()
    }

    fn value(&self) -> String {
        format!("{}", self.value)
    }
}

/// Renders `samples` as a Prometheus text exposition, sorted by metric name.
pub fn encode(samples: &[Sample]) -> String {
    if samples.is_empty() {
        return String::new();
    }

    let mut sorted: Vec<&Sample> = samples.iter().collect();
    sorted.sort_by(|a, b| a.name.cmp(b.name));

    let data: Vec<String> = sorted.into_iter().map(|s| s.format()).collect();

    data.join("\n") + "\n"
}

fn escape_help(help: &str) -> String {
    help.replace('\\', r"\\").replace('\n', r"\n")
}
