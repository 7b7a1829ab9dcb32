use colored::Colorize;
use std::fmt;

#[derive(Debug)]
pub enum GroupwiseError {
    InvalidParticipantCount {
        value: usize,
    },
    InvalidGroupSize {
        value: usize,
    },
    RotationInProgress,
    NoRotationPending,
    ForeignRotation,
    ConfigError {
        path: String,
        message: String,
    },
    IoError {
        operation: String,
        path: Option<String>,
        source: std::io::Error,
    },
    Other(anyhow::Error),
}

impl GroupwiseError {
    pub fn invalid_participant_count(value: usize) -> Self {
        Self::InvalidParticipantCount { value }
    }

    pub fn invalid_group_size(value: usize) -> Self {
        Self::InvalidGroupSize { value }
    }

    pub fn config_error(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ConfigError {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn io_error(
        operation: impl Into<String>,
        path: Option<String>,
        source: std::io::Error,
    ) -> Self {
        Self::IoError {
            operation: operation.into(),
            path,
            source,
        }
    }

    /// True for errors caused by bad caller input rather than the environment.
    pub fn is_precondition_violation(&self) -> bool {
        matches!(
            self,
            Self::InvalidParticipantCount { .. }
                | Self::InvalidGroupSize { .. }
                | Self::RotationInProgress
                | Self::NoRotationPending
                | Self::ForeignRotation
        )
    }
}

impl fmt::Display for GroupwiseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParticipantCount { value } => {
                writeln!(
                    f,
                    "{} Invalid participant count: {}",
                    "✗".red().bold(),
                    value.to_string().yellow()
                )?;
                writeln!(
                    f,
                    "  {} Participant count must be between 1 and {}",
                    "→".blue(),
                    crate::core::partition::MAX_PARTICIPANTS
                )?;
                Ok(())
            }
            Self::InvalidGroupSize { value } => {
                writeln!(
                    f,
                    "{} Invalid group size: {}",
                    "✗".red().bold(),
                    value.to_string().yellow()
                )?;
                writeln!(f, "  {} Group size must be at least 1", "→".blue())?;
                Ok(())
            }
            Self::RotationInProgress => {
                writeln!(f, "{} A rotation is already in progress", "✗".red().bold())?;
                writeln!(
                    f,
                    "  {} Wait for the pending rotation to complete",
                    "→".blue()
                )?;
                Ok(())
            }
            Self::NoRotationPending => {
                writeln!(f, "{} No rotation is pending", "✗".red().bold())?;
                Ok(())
            }
            Self::ForeignRotation => {
                writeln!(
                    f,
                    "{} Rotation was started by a different session",
                    "✗".red().bold()
                )?;
                Ok(())
            }
            Self::ConfigError { path, message } => {
                writeln!(f, "{} Configuration error", "✗".red().bold())?;
                writeln!(f, "  {} Path: {}", "→".blue(), path.yellow())?;
                writeln!(f, "  {} Error: {}", "→".blue(), message)?;
                Ok(())
            }
            Self::IoError {
                operation,
                path,
                source,
            } => {
                writeln!(
                    f,
                    "{} I/O error during: {}",
                    "✗".red().bold(),
                    operation.yellow()
                )?;
                if let Some(path) = path {
                    writeln!(f, "  {} Path: {}", "→".blue(), path)?;
                }
                writeln!(f, "  {} Error: {}", "→".blue(), source)?;
                Ok(())
            }
            Self::Other(err) => write!(f, "{} {}", "✗".red().bold(), err),
        }
    }
}

impl std::error::Error for GroupwiseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::IoError { source, .. } => Some(source),
            Self::Other(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl From<std::io::Error> for GroupwiseError {
    fn from(err: std::io::Error) -> Self {
        Self::IoError {
            operation: "unknown".to_string(),
            path: None,
            source: err,
        }
    }
}

impl From<anyhow::Error> for GroupwiseError {
    fn from(err: anyhow::Error) -> Self {
        Self::Other(err)
    }
}

impl From<dialoguer::Error> for GroupwiseError {
    fn from(err: dialoguer::Error) -> Self {
        Self::Other(anyhow::anyhow!("Dialog error: {}", err))
    }
}

pub type Result<T> = std::result::Result<T, GroupwiseError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_invalid_participant_count_display() {
        colored::control::set_override(false);
        let err = GroupwiseError::invalid_participant_count(0);
        let text = err.to_string();
        assert!(text.contains("Invalid participant count: 0"));
        assert!(text.contains("between 1 and 100000"));
    }

    #[test]
    fn test_invalid_group_size_display() {
        colored::control::set_override(false);
        let text = GroupwiseError::invalid_group_size(0).to_string();
        assert!(text.contains("Invalid group size: 0"));
    }

    #[test]
    fn test_config_error_display() {
        colored::control::set_override(false);
        let err = GroupwiseError::config_error("/tmp/settings.json", "bad json");
        let text = err.to_string();
        assert!(text.contains("/tmp/settings.json"));
        assert!(text.contains("bad json"));
    }

    #[test]
    fn test_io_error_source() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = GroupwiseError::io_error("read settings", Some("/x".into()), io);
        assert!(err.source().is_some());
        assert!(!err.is_precondition_violation());
    }

    #[test]
    fn test_precondition_classification() {
        assert!(GroupwiseError::invalid_group_size(0).is_precondition_violation());
        assert!(GroupwiseError::RotationInProgress.is_precondition_violation());
        assert!(GroupwiseError::ForeignRotation.is_precondition_violation());
        assert!(!GroupwiseError::config_error("p", "m").is_precondition_violation());
    }

    #[test]
    fn test_from_anyhow() {
        let err: GroupwiseError = anyhow::anyhow!("boom").into();
        assert!(matches!(err, GroupwiseError::Other(_)));
        assert!(err.source().is_some());
    }
}
