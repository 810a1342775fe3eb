//! YAML file adapter for decision domain profiles

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::domain::ranking::{DecisionDomain, DomainProfile};
use crate::ports::{DomainProfileSource, ProfileSourceError};

/// Reads a [`DomainProfile`] from a YAML file on every `load`.
///
/// Layout of the file is documented on [`DomainProfile`].
pub struct YamlProfileSource {
    path: PathBuf,
}

impl YamlProfileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<String, ProfileSourceError> {
        fs::read_to_string(&self.path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ProfileSourceError::NotFound(self.path.display().to_string()),
            ErrorKind::PermissionDenied => {
                ProfileSourceError::PermissionDenied(format!("Cannot read file: {}", e))
            }
            _ => ProfileSourceError::IoError(format!("Failed to read file: {}", e)),
        })
    }
}

impl DomainProfileSource for YamlProfileSource {
    fn load(&self) -> Result<DecisionDomain, ProfileSourceError> {
        let content = self.read()?;

        let profile: DomainProfile = serde_yaml::from_str(&content)
            .map_err(|e| ProfileSourceError::Malformed(e.to_string()))?;

        let domain = DecisionDomain::try_from(profile).map_err(|e| {
            warn!(path = %self.path.display(), error = %e, "Rejected domain profile");
            ProfileSourceError::from(e)
        })?;

        debug!(
            path = %self.path.display(),
            domain = domain.name(),
            criteria = domain.criteria().len(),
            alternatives = domain.alternatives().len(),
            "Loaded decision domain from YAML"
        );
        Ok(domain)
    }

    fn describe(&self) -> String {
        format!("yaml:{}", self.path.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ranking::DomainProfileError;
    use tempfile::TempDir;

    const TOY: &str = r#"
name: toy
criteria:
  - { code: C1, name: Price, kind: cost }
  - { code: C2, name: Quality, kind: benefit }
alternatives:
  - { code: A, name: Alpha }
  - { code: B, name: Beta }
ratings:
  A: { C1: [0.1, 0.2, 0.3], C2: [0.6, 0.7, 0.8] }
  B: { C1: [0.4, 0.5, 0.6], C2: [0.2, 0.3, 0.4] }
"#;

    fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn loads_valid_profile() {
        let dir = TempDir::new().unwrap();
        let source = YamlProfileSource::new(write(&dir, "toy.yaml", TOY));

        let domain = source.load().unwrap();

        assert_eq!(domain.name(), "toy");
        assert_eq!(domain.alternative_codes(), vec!["A", "B"]);
        assert_eq!(domain.questions().len(), 1);
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let source = YamlProfileSource::new(dir.path().join("absent.yaml"));

        assert!(matches!(source.load(), Err(ProfileSourceError::NotFound(_))));
    }

    #[test]
    fn garbage_is_malformed() {
        let dir = TempDir::new().unwrap();
        let source = YamlProfileSource::new(write(&dir, "bad.yaml", "name: [unclosed"));

        assert!(matches!(source.load(), Err(ProfileSourceError::Malformed(_))));
    }

    #[test]
    fn incomplete_ratings_are_invalid() {
        let dir = TempDir::new().unwrap();
        let content = TOY.replace("  B: { C1: [0.4, 0.5, 0.6], C2: [0.2, 0.3, 0.4] }\n", "");
        let source = YamlProfileSource::new(write(&dir, "partial.yaml", &content));

        let err = source.load().unwrap_err();
        assert_eq!(
            err,
            ProfileSourceError::Invalid(DomainProfileError::MissingRating {
                alternative: "B".to_string(),
                criterion: "C1".to_string(),
            })
        );
    }

    #[test]
    fn builtin_profile_round_trips_through_yaml() {
        let dir = TempDir::new().unwrap();
        let yaml = serde_yaml::to_string(&DecisionDomain::food_delivery().to_profile()).unwrap();
        let source = YamlProfileSource::new(write(&dir, "food.yaml", &yaml));

        assert_eq!(source.load().unwrap(), DecisionDomain::food_delivery());
    }

    #[test]
    fn describe_includes_path() {
        let source = YamlProfileSource::new("/etc/profiles/food.yaml");
        assert_eq!(source.describe(), "yaml:/etc/profiles/food.yaml");
    }
}
