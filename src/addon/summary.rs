use crate::addon::scaffold::ScaffoldOutcome;
use crate::types::answers::AnswerSet;
use crate::types::names::DerivedNames;
use crate::utils::logger::{LogLevel, Logger};

/// Echo the configuration before asking the user to confirm generation.
pub fn print_configuration(answers: &AnswerSet, names: &DerivedNames) {
    let logger = Logger::new();
    logger.log_message(LogLevel::Info, &format!("Name: {}", answers.addon_name));
    logger.log_message(LogLevel::Info, &format!("Description: {}", answers.description));
    logger.log_message(
        LogLevel::Info,
        &format!(
            "Type: {}",
            if answers.is_gateway {
                "Payment Gateway"
            } else {
                "Basic Addon"
            }
        ),
    );
    logger.log_message(
        LogLevel::Info,
        &format!("Pro Compatible: {}", if answers.requires_pro { "Yes" } else { "No" }),
    );
    logger.log_message(
        LogLevel::Info,
        &format!("Settings: {}", answers.settings_type.as_str()),
    );
    logger.log_message(
        LogLevel::Info,
        &format!("Webpack: {}", if answers.use_webpack { "Yes" } else { "No" }),
    );
    logger.log_message(LogLevel::Info, &format!("Full Slug: {}", names.full_slug));
    logger.log_message(LogLevel::Info, &format!("Namespace: {}", names.namespace));
}

/// Success message plus the next-steps instruction list. The asset-tooling
/// steps only appear when webpack was requested.
pub fn print_next_steps(outcome: &ScaffoldOutcome) {
    let logger = Logger::new();
    logger.log_message(
        LogLevel::Success,
        &format!(
            "Addon scaffold created successfully ({} files).",
            outcome.file_count
        ),
    );
    logger.log_message(LogLevel::Info, &format!("Location: {}", outcome.root.display()));

    println!();
    println!("Next steps:");
    println!("  1. cd {}", outcome.names.full_slug);
    println!("  2. composer install");
    if outcome.answers.use_webpack {
        println!("  3. yarn install");
        println!("  4. yarn run");
    }
    println!();
}
