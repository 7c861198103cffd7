//! Embedded stub texts backing the production `TemplateProvider`. Keys
//! mirror the generated layout: `<group>/<artifact>`.

mod assets;
mod basic;
mod config;
mod gateway;

use crate::template::TemplateProvider;
use crate::types::error::ScaffoldError;

pub struct StubLibrary;

impl StubLibrary {
    pub fn new() -> Self {
        StubLibrary
    }
}

impl Default for StubLibrary {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateProvider for StubLibrary {
    fn get(&self, key: &str) -> Result<&str, ScaffoldError> {
        match key {
            "basic-addon/main-plugin" => Ok(basic::MAIN_PLUGIN),
            "basic-addon/plugin-class" => Ok(basic::PLUGIN_CLASS),
            "basic-addon/backend-api" => Ok(basic::BACKEND_API),
            "basic-addon/settings-globals" => Ok(basic::SETTINGS_GLOBALS),
            "basic-addon/settings-trip-edits" => Ok(basic::SETTINGS_TRIP_EDITS),
            "basic-addon/builders-global-settings" => Ok(basic::BUILDERS_GLOBAL_SETTINGS),
            "basic-addon/builders-trip-meta" => Ok(basic::BUILDERS_TRIP_META),
            "payment-gateway/main-plugin" => Ok(gateway::MAIN_PLUGIN),
            "payment-gateway/plugin-class" => Ok(gateway::PLUGIN_CLASS),
            "payment-gateway/payment" => Ok(gateway::PAYMENT),
            "payment-gateway/builders-api" => Ok(gateway::BUILDERS_API),
            "payment-gateway/global-settings" => Ok(gateway::GLOBAL_SETTINGS),
            "config/composer" => Ok(config::COMPOSER_JSON),
            "config/package" => Ok(config::PACKAGE_JSON),
            "config/gruntfile" => Ok(config::GRUNTFILE),
            "config/phpcs" => Ok(config::PHPCS_XML),
            "config/readme" => Ok(config::README_TXT),
            "config/gitignore" => Ok(config::GITIGNORE),
            "config/webpack" => Ok(config::WEBPACK_CONFIG),
            "assets/admin-js" => Ok(assets::ADMIN_JS),
            "assets/public-js" => Ok(assets::PUBLIC_JS),
            "assets/public-scss" => Ok(assets::PUBLIC_SCSS),
            _ => Err(ScaffoldError::TemplateMissing(key.to_string())),
        }
    }
}
