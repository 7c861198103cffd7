use crate::addon::scaffold::scaffold_addon;
use crate::addon::summary;
use crate::naming;
use crate::types::answers::{AnswerSet, SettingsType};
use crate::types::error::ScaffoldError;
use crate::utils::logger::{LogLevel, Logger};
use crate::utils::spinner::with_spinner;

/// Answers carried in from command flags. A provided flag suppresses its
/// prompt; the boolean flags mean "yes" when present and fall back to the
/// prompt when absent.
#[derive(Debug, Clone, Default)]
pub struct AddonFlags {
    pub name: Option<String>,
    pub description: Option<String>,
    pub gateway: bool,
    pub pro: bool,
    pub settings: Option<String>,
    pub webpack: bool,
}

pub async fn prompt_make_addon(cwd: &str, flags: AddonFlags) -> Result<(), String> {
    println!();
    println!("⎯⎯⎯⎯⎯⎯⎯⎯⎯⎯⎯⎯⎯⎯⎯⎯");
    println!("WP Travel Engine Addon Starter");
    println!("⎯⎯⎯⎯⎯⎯⎯⎯⎯⎯⎯⎯⎯⎯⎯⎯");
    println!();

    let addon_name = match flags.name {
        Some(name) => name.trim().to_string(),
        None => inquire::Text::new("Addon Name:")
            .with_help_message("e.g. \"PayStack Payment Gateway\" or \"Trip Difficulty Level\"")
            .prompt()
            .map_err(|e| format!("Failed to prompt for addon name: {}", e))?
            .trim()
            .to_string(),
    };

    if addon_name.is_empty() {
        Logger::new().log_message(LogLevel::Error, "Addon name is required.");
        return Err(ScaffoldError::EmptyName.to_string());
    }

    // The default description uses the name exactly as entered, prefix and
    // gateway suffix included.
    let description = match flags.description {
        Some(description) => description,
        None => inquire::Text::new("Addon Description:")
            .with_default(&AnswerSet::default_description(&addon_name))
            .prompt()
            .map_err(|e| format!("Failed to prompt for addon description: {}", e))?,
    };

    let is_gateway = flags.gateway
        || prompt_yes_no("Is this a payment gateway addon?")
            .map_err(|e| format!("Failed to prompt for addon type: {}", e))?;

    let requires_pro = flags.pro
        || prompt_yes_no("Does this addon require WP Travel Engine Pro compatibility?")
            .map_err(|e| format!("Failed to prompt for Pro compatibility: {}", e))?;

    let mut settings_type = SettingsType::None;
    let mut use_webpack = false;

    if !is_gateway {
        settings_type = match flags.settings {
            Some(value) => SettingsType::parse(&value),
            None => {
                let options = vec!["none", "global", "trip-edit", "both"];
                let choice = inquire::Select::new("What type of settings does this addon need?", options)
                    .prompt()
                    .map_err(|e| format!("Failed to prompt for settings type: {}", e))?;
                SettingsType::parse(choice)
            }
        };

        use_webpack = flags.webpack
            || prompt_yes_no("Does this addon require Webpack configuration?")
                .map_err(|e| format!("Failed to prompt for Webpack configuration: {}", e))?;
    }

    let answers = AnswerSet {
        addon_name,
        description,
        is_gateway,
        requires_pro,
        settings_type,
        use_webpack,
    }
    .normalized();

    println!();
    println!("⎯⎯⎯⎯⎯⎯⎯⎯⎯⎯⎯⎯⎯⎯⎯⎯");
    println!("Confirm Addon Details");
    println!("⎯⎯⎯⎯⎯⎯⎯⎯⎯⎯⎯⎯⎯⎯⎯⎯");
    println!();

    let names = naming::derive(&answers.addon_name, answers.is_gateway);
    summary::print_configuration(&answers, &names);

    println!();

    let confirm_prompt = inquire::Confirm::new("Generate the addon scaffold?")
        .with_default(true)
        .prompt();

    match confirm_prompt {
        Ok(true) => {
            let spinner = with_spinner("Generating addon...");
            let res = scaffold_addon(cwd, answers).await;
            spinner.finish_and_clear();
            match res {
                Ok(outcome) => {
                    summary::print_next_steps(&outcome);
                    Ok(())
                }
                Err(e) => Err(e.to_string()),
            }
        }
        _ => {
            Logger::new().log_message(LogLevel::Warning, "Aborting addon scaffolding.");
            Err("aborted by user".into())
        }
    }
}

fn prompt_yes_no(question: &str) -> Result<bool, inquire::InquireError> {
    let choice = inquire::Select::new(question, vec!["no", "yes"]).prompt()?;
    Ok(choice == "yes")
}
