use crate::template::{fragments, FragmentSet, Template, TemplateProvider, TokenMap};
use crate::types::answers::{AnswerSet, SettingsType};
use crate::types::error::ScaffoldError;
use crate::types::manifest::FileManifest;
use crate::types::names::DerivedNames;

/// Builds the complete file manifest for one scaffold run. Pure and
/// side-effect free; nothing touches the filesystem until the writer replays
/// the manifest.
pub fn assemble(
    answers: &AnswerSet,
    names: &DerivedNames,
    provider: &dyn TemplateProvider,
) -> Result<FileManifest, ScaffoldError> {
    let tokens = TokenMap::for_addon(answers, names);
    let mut manifest = FileManifest::new();

    add_root_files(answers, names, provider, &tokens, &mut manifest)?;
    if answers.is_gateway {
        add_gateway_files(provider, &tokens, &mut manifest)?;
    } else {
        add_basic_files(answers, provider, &tokens, &mut manifest)?;
    }
    add_config_files(answers, provider, &tokens, &mut manifest)?;
    if answers.use_webpack {
        add_asset_files(provider, &tokens, &mut manifest)?;
    }

    Ok(manifest)
}

fn render(
    provider: &dyn TemplateProvider,
    key: &str,
    tokens: &TokenMap,
    fragments: &FragmentSet,
) -> Result<String, ScaffoldError> {
    Ok(Template::parse(provider.get(key)?).render(tokens, fragments))
}

fn add_root_files(
    answers: &AnswerSet,
    names: &DerivedNames,
    provider: &dyn TemplateProvider,
    tokens: &TokenMap,
    manifest: &mut FileManifest,
) -> Result<(), ScaffoldError> {
    let stub_type = if answers.is_gateway {
        "payment-gateway"
    } else {
        "basic-addon"
    };

    let main = render(
        provider,
        &format!("{}/main-plugin", stub_type),
        tokens,
        &fragments::main_plugin_fragments(answers.requires_pro),
    )?;
    manifest.add_file(&format!("{}.php", names.full_slug), main)?;

    let class_fragments = if answers.is_gateway {
        FragmentSet::empty()
    } else {
        fragments::plugin_class_fragments(answers)
    };
    let plugin_class = render(
        provider,
        &format!("{}/plugin-class", stub_type),
        tokens,
        &class_fragments,
    )?;
    manifest.add_file("includes/Plugin.php", plugin_class)?;

    Ok(())
}

fn add_gateway_files(
    provider: &dyn TemplateProvider,
    tokens: &TokenMap,
    manifest: &mut FileManifest,
) -> Result<(), ScaffoldError> {
    let payment = render(provider, "payment-gateway/payment", tokens, &FragmentSet::empty())?;
    manifest.add_file("includes/Payment.php", payment)?;

    let api = render(
        provider,
        "payment-gateway/builders-api",
        tokens,
        &FragmentSet::empty(),
    )?;
    manifest.add_file("includes/Builders/API.php", api)?;

    let settings = render(
        provider,
        "payment-gateway/global-settings",
        tokens,
        &FragmentSet::empty(),
    )?;
    manifest.add_file("includes/Builders/global-settings.php", settings)?;

    Ok(())
}

fn add_basic_files(
    answers: &AnswerSet,
    provider: &dyn TemplateProvider,
    tokens: &TokenMap,
    manifest: &mut FileManifest,
) -> Result<(), ScaffoldError> {
    let settings = answers.settings_type;
    if settings == SettingsType::None {
        return Ok(());
    }

    manifest.add_dir("includes/Backend");
    manifest.add_dir("includes/Settings");
    manifest.add_dir("includes/Builders");

    let api = render(
        provider,
        "basic-addon/backend-api",
        tokens,
        &fragments::backend_api_fragments(settings),
    )?;
    manifest.add_file("includes/Backend/API.php", api)?;

    if settings.has_global() {
        let globals = render(
            provider,
            "basic-addon/settings-globals",
            tokens,
            &FragmentSet::empty(),
        )?;
        manifest.add_file("includes/Settings/Globals.php", globals)?;

        let builder = render(
            provider,
            "basic-addon/builders-global-settings",
            tokens,
            &FragmentSet::empty(),
        )?;
        manifest.add_file("includes/Builders/global-settings.php", builder)?;
    }

    if settings.has_trip_edit() {
        let trip_edits = render(
            provider,
            "basic-addon/settings-trip-edits",
            tokens,
            &FragmentSet::empty(),
        )?;
        manifest.add_file("includes/Settings/TripEdits.php", trip_edits)?;

        let builder = render(
            provider,
            "basic-addon/builders-trip-meta",
            tokens,
            &FragmentSet::empty(),
        )?;
        manifest.add_file("includes/Builders/trip-meta.php", builder)?;
    }

    Ok(())
}

fn add_config_files(
    answers: &AnswerSet,
    provider: &dyn TemplateProvider,
    tokens: &TokenMap,
    manifest: &mut FileManifest,
) -> Result<(), ScaffoldError> {
    let composer = render(
        provider,
        "config/composer",
        tokens,
        &fragments::composer_fragments(answers.requires_pro),
    )?;
    manifest.add_file("composer.json", composer)?;

    let package = render(
        provider,
        "config/package",
        tokens,
        &fragments::package_fragments(answers.use_webpack),
    )?;
    manifest.add_file("package.json", package)?;

    let gruntfile = render(
        provider,
        "config/gruntfile",
        tokens,
        &fragments::gruntfile_fragments(answers.use_webpack),
    )?;
    manifest.add_file("Gruntfile.js", gruntfile)?;

    for (key, path) in [
        ("config/phpcs", "phpcs.xml"),
        ("config/readme", "readme.txt"),
        ("config/gitignore", ".gitignore"),
    ] {
        let content = render(provider, key, tokens, &FragmentSet::empty())?;
        manifest.add_file(path, content)?;
    }

    Ok(())
}

fn add_asset_files(
    provider: &dyn TemplateProvider,
    tokens: &TokenMap,
    manifest: &mut FileManifest,
) -> Result<(), ScaffoldError> {
    manifest.add_dir("src/admin/js");
    manifest.add_dir("src/public/js");
    manifest.add_dir("src/public/scss");

    for (key, path) in [
        ("assets/admin-js", "src/admin/js/index.js"),
        ("assets/public-js", "src/public/js/index.js"),
        ("assets/public-scss", "src/public/scss/index.scss"),
    ] {
        let content = render(provider, key, tokens, &FragmentSet::empty())?;
        manifest.add_file(path, content)?;
    }

    let webpack = render(provider, "config/webpack", tokens, &FragmentSet::empty())?;
    manifest.add_file("webpack.config.js", webpack)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::naming;
    use crate::template::stubs::StubLibrary;
    use std::collections::BTreeSet;

    fn answers(name: &str, is_gateway: bool, settings: SettingsType, webpack: bool) -> AnswerSet {
        AnswerSet {
            addon_name: name.to_string(),
            description: AnswerSet::default_description(name),
            is_gateway,
            requires_pro: false,
            settings_type: settings,
            use_webpack: webpack,
        }
        .normalized()
    }

    fn build(answers: &AnswerSet) -> FileManifest {
        let names = naming::derive(&answers.addon_name, answers.is_gateway);
        assemble(answers, &names, &StubLibrary::new()).unwrap()
    }

    #[test]
    fn assembly_is_deterministic() {
        let a = answers("Trip Difficulty Level", false, SettingsType::Both, true);
        assert_eq!(build(&a), build(&a));
    }

    #[test]
    fn root_and_config_files_are_always_present() {
        let manifest = build(&answers("Weather Forecast", false, SettingsType::None, false));
        for path in [
            "wptravelengine-weather-forecast.php",
            "includes/Plugin.php",
            "composer.json",
            "package.json",
            "Gruntfile.js",
            "phpcs.xml",
            "readme.txt",
            ".gitignore",
        ] {
            assert!(manifest.contains(path), "missing {}", path);
        }
        assert_eq!(manifest.files().len(), 8);
    }

    #[test]
    fn gateway_manifest_has_payment_group() {
        let manifest = build(&answers(
            "PayStack Payment Gateway",
            true,
            SettingsType::None,
            true,
        ));
        assert!(manifest.contains("wptravelengine-paystack-payment.php"));
        assert!(manifest.contains("includes/Payment.php"));
        assert!(manifest.contains("includes/Builders/API.php"));
        assert!(manifest.contains("includes/Builders/global-settings.php"));
        // use_webpack is forced off for gateways.
        assert!(!manifest.contains("webpack.config.js"));
        assert!(!manifest.dirs().iter().any(|d| d.starts_with("src")));
    }

    #[test]
    fn settings_groups_gate_their_files() {
        let global = build(&answers("Trip Extras", false, SettingsType::Global, false));
        assert!(global.contains("includes/Backend/API.php"));
        assert!(global.contains("includes/Settings/Globals.php"));
        assert!(global.contains("includes/Builders/global-settings.php"));
        assert!(!global.contains("includes/Settings/TripEdits.php"));

        let trip = build(&answers("Trip Extras", false, SettingsType::TripEdit, false));
        assert!(trip.contains("includes/Settings/TripEdits.php"));
        assert!(trip.contains("includes/Builders/trip-meta.php"));
        assert!(!trip.contains("includes/Settings/Globals.php"));

        let none = build(&answers("Trip Extras", false, SettingsType::None, false));
        assert!(!none.contains("includes/Backend/API.php"));
    }

    #[test]
    fn both_is_the_union_of_global_and_trip_edit() {
        let global = build(&answers("Trip Extras", false, SettingsType::Global, false));
        let trip = build(&answers("Trip Extras", false, SettingsType::TripEdit, false));
        let both = build(&answers("Trip Extras", false, SettingsType::Both, false));

        let union: BTreeSet<&str> = global
            .files()
            .iter()
            .chain(trip.files())
            .map(|f| f.path.as_str())
            .collect();
        let both_paths: BTreeSet<&str> = both.files().iter().map(|f| f.path.as_str()).collect();
        assert_eq!(both_paths, union);

        // Files exclusive to one settings type keep their exact content.
        assert_eq!(
            both.file("includes/Settings/Globals.php"),
            global.file("includes/Settings/Globals.php")
        );
        assert_eq!(
            both.file("includes/Builders/trip-meta.php"),
            trip.file("includes/Builders/trip-meta.php")
        );
    }

    #[test]
    fn webpack_toggle_only_affects_gated_output() {
        let with = build(&answers("Trip Extras", false, SettingsType::Global, true));
        let without = build(&answers("Trip Extras", false, SettingsType::Global, false));

        for path in [
            "webpack.config.js",
            "src/admin/js/index.js",
            "src/public/js/index.js",
            "src/public/scss/index.scss",
        ] {
            assert!(with.contains(path), "missing {}", path);
            assert!(!without.contains(path), "unexpected {}", path);
        }

        // Files with webpack-gated fragments differ; everything else is
        // byte-identical.
        for entry in without.files() {
            let counterpart = with.file(&entry.path).expect("file disappeared");
            match entry.path.as_str() {
                "package.json" | "Gruntfile.js" | "includes/Plugin.php" => {
                    assert_ne!(counterpart.content, entry.content, "{}", entry.path)
                }
                _ => assert_eq!(counterpart.content, entry.content, "{}", entry.path),
            }
        }
    }

    #[test]
    fn webpack_fragments_render_valid_json_scaffolding() {
        let with = build(&answers("Trip Extras", false, SettingsType::None, true));
        let package = &with.file("package.json").unwrap().content;
        serde_json::from_str::<serde_json::Value>(package).expect("package.json parses");
        assert!(package.contains("\"start\": \"npx wp-scripts start --mode development\""));
        assert!(package.contains("grunt package && npm run build"));

        let without = build(&answers("Trip Extras", false, SettingsType::None, false));
        let package = &without.file("package.json").unwrap().content;
        serde_json::from_str::<serde_json::Value>(package).expect("package.json parses");
        assert!(!package.contains("wp-scripts"));
    }

    #[test]
    fn pro_flag_toggles_composer_dependency_and_bootstrap() {
        let mut pro = answers("Trip Extras", false, SettingsType::None, false);
        pro.requires_pro = true;
        let pro_manifest = build(&pro);
        let composer = &pro_manifest.file("composer.json").unwrap().content;
        serde_json::from_str::<serde_json::Value>(composer).expect("composer.json parses");
        assert!(composer.contains("wptravelengine-pro-config"));

        let main = &pro_manifest
            .file("wptravelengine-trip-extras.php")
            .unwrap()
            .content;
        assert!(main.contains("wptravelengine_pro_config( __FILE__"));
        assert!(!main.contains("vendor/autoload.php"));

        let standalone = build(&answers("Trip Extras", false, SettingsType::None, false));
        let main = &standalone
            .file("wptravelengine-trip-extras.php")
            .unwrap()
            .content;
        assert!(main.contains("wptravelengine_trip_extras_init"));
        assert!(!main.contains("wptravelengine_pro_config("));
    }

    #[test]
    fn rendered_files_have_no_leftover_slots() {
        let manifest = build(&answers("Trip Difficulty Level", false, SettingsType::Both, true));
        for entry in manifest.files() {
            assert!(
                !entry.content.contains("{{"),
                "unresolved slot in {}",
                entry.path
            );
        }
    }

    #[test]
    fn plugin_class_gates_follow_answers() {
        let manifest = build(&answers("Trip Extras", false, SettingsType::Global, true));
        let class = &manifest.file("includes/Plugin.php").unwrap().content;
        assert!(class.contains("use WPTravelEngineTripExtras\\Backend\\API;"));
        assert!(class.contains("enqueue_admin_assets"));
        assert!(class.contains("add_global_settings"));
        assert!(!class.contains("add_trip_meta_tabs"));
        assert!(class.contains("API::register_hooks();"));

        let bare = build(&answers("Trip Extras", false, SettingsType::None, false));
        let class = &bare.file("includes/Plugin.php").unwrap().content;
        assert!(!class.contains("Backend\\API"));
        assert!(!class.contains("enqueue_admin_assets"));
        assert!(!class.contains("API::register_hooks"));
    }

    #[test]
    fn backend_api_references_settings_key_and_namespace() {
        let manifest = build(&answers("Trip Difficulty Level", false, SettingsType::Both, false));
        let api = &manifest.file("includes/Backend/API.php").unwrap().content;
        assert!(api.contains("namespace WPTravelEngineTripDifficultyLevel\\Backend;"));
        assert!(api.contains("$schema['tripdifficultylevel']"));
        assert!(api.contains("$properties['tripdifficultylevel']"));
    }

    #[test]
    fn missing_stub_aborts_assembly() {
        struct EmptyProvider;
        impl TemplateProvider for EmptyProvider {
            fn get(&self, key: &str) -> Result<&str, ScaffoldError> {
                Err(ScaffoldError::TemplateMissing(key.to_string()))
            }
        }

        let a = answers("Trip Extras", false, SettingsType::None, false);
        let names = naming::derive(&a.addon_name, a.is_gateway);
        let err = assemble(&a, &names, &EmptyProvider).unwrap_err();
        assert!(matches!(err, ScaffoldError::TemplateMissing(_)));
    }
}
