use super::QueueConfig;

pub const MIN_HISTORY_LIMIT: usize = 1;
pub const MAX_HISTORY_LIMIT: usize = 100;
pub const MIN_LABEL_WIDTH: usize = 1;
pub const MAX_LABEL_WIDTH: usize = 9;

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("Invalid history_limit: {configured} (min: {min_limit}, max: {max_limit})")]
    HistoryLimit {
        configured: usize,
        min_limit: usize,
        max_limit: usize,
    },
    #[error("Invalid label_width: {configured} (min: {min_limit}, max: {max_limit})")]
    LabelWidth {
        configured: usize,
        min_limit: usize,
        max_limit: usize,
    },
    #[error("Invalid logging level: {configured}")]
    LogLevel { configured: String },
}

impl ConfigValidationError {
    pub fn user_message(&self) -> String {
        match self {
            ConfigValidationError::HistoryLimit {
                configured,
                min_limit,
                max_limit,
            } => {
                format!(
                    "Recent-calls history limit out of range!\n\n\
                    Your configured value: {configured}\n\
                    Valid range: {min_limit} - {max_limit}\n\n\
                    Please update history_limit in config.toml."
                )
            }
            ConfigValidationError::LabelWidth {
                configured,
                min_limit,
                max_limit,
            } => {
                format!(
                    "Ticket label width out of range!\n\n\
                    Your configured value: {configured}\n\
                    Valid range: {min_limit} - {max_limit}\n\n\
                    Please update label_width in config.toml."
                )
            }
            ConfigValidationError::LogLevel { configured } => {
                format!(
                    "Unknown logging level '{configured}'!\n\n\
                    Valid levels: trace, debug, info, warn, error, off\n\n\
                    Please update [logging] level in config.toml."
                )
            }
        }
    }
}

impl QueueConfig {
    /// Checks every limit and returns all problems found, not just the first.
    pub fn validate(&self) -> Result<(), Vec<ConfigValidationError>> {
        let mut errors = Vec::new();

        if !(MIN_HISTORY_LIMIT..=MAX_HISTORY_LIMIT).contains(&self.history_limit()) {
            errors.push(ConfigValidationError::HistoryLimit {
                configured: self.history_limit(),
                min_limit: MIN_HISTORY_LIMIT,
                max_limit: MAX_HISTORY_LIMIT,
            });
        }

        if !(MIN_LABEL_WIDTH..=MAX_LABEL_WIDTH).contains(&self.label_width()) {
            errors.push(ConfigValidationError::LabelWidth {
                configured: self.label_width(),
                min_limit: MIN_LABEL_WIDTH,
                max_limit: MAX_LABEL_WIDTH,
            });
        }

        if self.logging().level_filter().is_none() {
            errors.push(ConfigValidationError::LogLevel {
                configured: self.logging().level().to_string(),
            });
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(QueueConfig::default().validate().is_ok());
    }

    #[test]
    fn test_all_errors_are_reported() {
        let config = QueueConfig::new(0, 12);
        let errors = config.validate().unwrap_err();

        assert_eq!(errors.len(), 2);
        assert!(matches!(
            errors[0],
            ConfigValidationError::HistoryLimit { configured: 0, .. }
        ));
        assert!(matches!(
            errors[1],
            ConfigValidationError::LabelWidth { configured: 12, .. }
        ));
    }

    #[test]
    fn test_user_message_names_the_setting() {
        let error = ConfigValidationError::HistoryLimit {
            configured: 500,
            min_limit: MIN_HISTORY_LIMIT,
            max_limit: MAX_HISTORY_LIMIT,
        };
        let message = error.user_message();
        assert!(message.contains("500"));
        assert!(message.contains("history_limit"));
    }

    #[test]
    fn test_log_level_message_lists_every_accepted_level() {
        let message = ConfigValidationError::LogLevel {
            configured: "loud".to_string(),
        }
        .user_message();

        for level in ["trace", "debug", "info", "warn", "error", "off"] {
            assert!(message.contains(level), "missing level {level}");
            let logging = crate::config::LoggingConfig::new(Some(level.to_string()), None);
            assert!(logging.level_filter().is_some());
        }
    }
}
