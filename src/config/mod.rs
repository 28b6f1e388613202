use crate::cli::output::OutputPreferences;
use crate::domain::DEFAULT_TRANSFER_AMOUNT;
use crate::errors::ConfigError;

/// In-memory options for the demo scenario.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub transfer_amount: f64,
    pub output: OutputSettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            transfer_amount: DEFAULT_TRANSFER_AMOUNT,
            output: OutputSettings::default(),
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.transfer_amount.is_finite() || self.transfer_amount < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "transfer_amount must be a non-negative number, got {}",
                self.transfer_amount
            )));
        }
        Ok(())
    }
}

/// Console presentation switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutputSettings {
    pub quiet_mode: bool,
    pub screen_reader_mode: bool,
    pub high_contrast_mode: bool,
}

impl From<OutputSettings> for OutputPreferences {
    fn from(settings: OutputSettings) -> Self {
        Self {
            screen_reader_mode: settings.screen_reader_mode,
            high_contrast_mode: settings.high_contrast_mode,
            quiet_mode: settings.quiet_mode,
        }
    }
}
