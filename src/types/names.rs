use serde::Serialize;

/// Every naming convention used by the generated files, fully determined by
/// the addon name and the gateway flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DerivedNames {
    /// Kebab-case identifier without the product prefix, e.g. "paystack".
    pub slug: String,
    /// Prefixed slug used for the addon directory and text domain,
    /// e.g. "wptravelengine-paystack-payment".
    pub full_slug: String,
    /// Snake_case identifier for generated function names.
    pub function_slug: String,
    /// PascalCase PHP namespace rooted at WPTravelEngine.
    pub namespace: String,
    /// SCREAMING_SNAKE_CASE constant infix, e.g. "PAYSTACK".
    pub constant: String,
    /// Separator-free key for settings payloads.
    pub settings_key: String,
    /// Gateway toggle id, e.g. "paystack_enable"; empty for basic addons.
    pub gateway_id: String,
    /// Display title with the product prefix and gateway suffix removed.
    pub title: String,
}
