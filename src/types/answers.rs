use serde::Serialize;

pub const PRODUCT_NAME: &str = "WP Travel Engine";

/// Which configuration surfaces a basic addon exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SettingsType {
    None,
    Global,
    TripEdit,
    Both,
}

impl SettingsType {
    /// Lenient parse: unknown input falls back to the first menu choice,
    /// the same way the interactive menu defaults.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "global" => SettingsType::Global,
            "trip-edit" => SettingsType::TripEdit,
            "both" => SettingsType::Both,
            _ => SettingsType::None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SettingsType::None => "none",
            SettingsType::Global => "global",
            SettingsType::TripEdit => "trip-edit",
            SettingsType::Both => "both",
        }
    }

    pub fn has_global(&self) -> bool {
        matches!(self, SettingsType::Global | SettingsType::Both)
    }

    pub fn has_trip_edit(&self) -> bool {
        matches!(self, SettingsType::TripEdit | SettingsType::Both)
    }
}

/// The validated questionnaire answers driving one scaffold run.
#[derive(Debug, Clone, Serialize)]
pub struct AnswerSet {
    pub addon_name: String,
    pub description: String,
    pub is_gateway: bool,
    pub requires_pro: bool,
    pub settings_type: SettingsType,
    pub use_webpack: bool,
}

impl AnswerSet {
    /// Default description, built from the raw addon name as entered.
    pub fn default_description(addon_name: &str) -> String {
        format!("{} for {}", addon_name, PRODUCT_NAME)
    }

    /// Payment gateways always carry global settings and never the webpack
    /// toolchain, regardless of what was answered.
    pub fn normalized(mut self) -> Self {
        if self.is_gateway {
            self.settings_type = SettingsType::Global;
            self.use_webpack = false;
        }
        self
    }
}
