//! User settings persisted between sessions.

use ec_solver::{FourVariablePolicy, LinearConfig};
use serde::{Deserialize, Serialize};

use crate::mode::CalculatorMode;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub dark_theme: bool,
    #[serde(default)]
    pub mode: CalculatorMode,
    #[serde(default)]
    pub four_variable: FourVariablePolicy,
}

impl Settings {
    pub fn toggle_theme(&mut self) -> bool {
        self.dark_theme = !self.dark_theme;
        self.dark_theme
    }

    pub fn theme_name(&self) -> &'static str {
        if self.dark_theme { "dark" } else { "light" }
    }

    pub fn linear_config(&self) -> LinearConfig {
        LinearConfig {
            four_variable: self.four_variable,
        }
    }

    /// Stored policy, overridden by elimination for this call only.
    pub fn linear_config_with(&self, eliminate: bool) -> LinearConfig {
        if eliminate {
            LinearConfig {
                four_variable: FourVariablePolicy::Elimination,
            }
        } else {
            self.linear_config()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_default() {
        let settings: Settings = serde_yaml::from_str("dark_theme: true\n").unwrap();
        assert!(settings.dark_theme);
        assert_eq!(settings.mode, CalculatorMode::Standard);
        assert_eq!(settings.four_variable, FourVariablePolicy::Unsupported);
    }

    #[test]
    fn yaml_uses_mode_ids() {
        let settings = Settings {
            dark_theme: false,
            mode: CalculatorMode::Polynomial3,
            four_variable: FourVariablePolicy::Elimination,
        };
        let yaml = serde_yaml::to_string(&settings).unwrap();
        assert!(yaml.contains("polynomial-3"));
        assert!(yaml.contains("elimination"));
        let back: Settings = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(back, settings);
    }

    #[test]
    fn eliminate_flag_leaves_settings_alone() {
        let settings = Settings::default();
        let config = settings.linear_config_with(true);
        assert_eq!(config.four_variable, FourVariablePolicy::Elimination);
        assert_eq!(settings.four_variable, FourVariablePolicy::Unsupported);
        assert_eq!(
            settings.linear_config_with(false).four_variable,
            FourVariablePolicy::Unsupported
        );
    }

    #[test]
    fn toggle() {
        let mut settings = Settings::default();
        assert_eq!(settings.theme_name(), "light");
        assert!(settings.toggle_theme());
        assert_eq!(settings.theme_name(), "dark");
    }
}
