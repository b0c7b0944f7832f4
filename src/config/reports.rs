use super::*;

/// Commands producing the two reports. Each is an argv vector, run without
/// a shell.
#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
pub struct Reports {
    #[serde(default = "pmd_stats")]
    pmd_stats: Vec<String>,

    #[serde(default = "coverage")]
    coverage: Vec<String>,
}

impl Default for Reports {
    fn default() -> Self {
        Self {
            pmd_stats: pmd_stats(),
            coverage: coverage(),
        }
    }
}

impl Reports {
    pub fn check(&self) -> Result<(), ConfigError> {
        if self.pmd_stats.is_empty() {
            return Err(ConfigError::EmptyCommand("pmd_stats"));
        }

        if self.coverage.is_empty() {
            return Err(ConfigError::EmptyCommand("coverage"));
        }

        Ok(())
    }

    pub fn pmd_stats(&self) -> &[String] {
        &self.pmd_stats
    }

    pub fn coverage(&self) -> &[String] {
        &self.coverage
    }
}
