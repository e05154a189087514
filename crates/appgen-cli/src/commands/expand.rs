// Print the paths a compound pattern expands to

use appgen_patterns::{expand, normalize_input};

use super::{read_pattern, Command};
use crate::error::{CliError, CliResult};

/// Expand a pattern without touching the filesystem
pub struct ExpandCommand {
    pub pattern: Option<String>,
    pub json: bool,
}

impl ExpandCommand {
    pub fn new(pattern: Option<String>, json: bool) -> Self {
        Self { pattern, json }
    }

    /// Expanded paths of `pattern`
    pub fn expand(pattern: &str) -> Vec<String> {
        expand(&normalize_input(pattern))
    }

    /// Text printed for `paths`
    pub fn format(&self, paths: &[String]) -> CliResult<String> {
        if self.json {
            serde_json::to_string_pretty(paths)
                .map_err(|e| CliError::Internal(format!("failed to encode paths: {}", e)))
        } else {
            Ok(paths.join("\n"))
        }
    }
}

#[async_trait::async_trait]
impl Command for ExpandCommand {
    async fn execute(&self) -> CliResult<()> {
        let pattern = read_pattern(self.pattern.as_deref()).await?;
        let paths = Self::expand(&pattern);
        let output = self.format(&paths)?;
        if !output.is_empty() {
            println!("{}", output);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_grouped_pattern() {
        let paths = ExpandCommand::expand("home.(html,js), about.(html,js,css)");
        assert_eq!(paths, vec!["home.html", "home.js", "about.html", "about.js", "about.css"]);
    }

    #[test]
    fn test_format_plain_and_json() {
        let paths = vec!["a.html".to_string(), "a.js".to_string()];

        let plain = ExpandCommand::new(None, false).format(&paths).unwrap();
        assert_eq!(plain, "a.html\na.js");

        let json = ExpandCommand::new(None, true).format(&paths).unwrap();
        let decoded: Vec<String> = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, paths);
    }

    #[test]
    fn test_format_empty() {
        let plain = ExpandCommand::new(None, false).format(&[]).unwrap();
        assert!(plain.is_empty());
    }
}
