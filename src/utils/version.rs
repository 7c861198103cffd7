/// Returns the CLI version with a runtime-first strategy:
/// 1. WTE_ADDON_STARTER_VERSION env var
/// 2. project-version.json located next to the running binary
/// 3. compile-time env!("CARGO_PKG_VERSION") as a last resort
pub fn get_version() -> String {
    if let Ok(v) = std::env::var("WTE_ADDON_STARTER_VERSION") {
        if !v.trim().is_empty() {
            return v;
        }
    }

    if let Ok(exe) = std::env::current_exe() {
        if let Some(bin_dir) = exe.parent() {
            let pv = bin_dir.join("project-version.json");
            if pv.exists() {
                if let Ok(contents) = std::fs::read_to_string(pv) {
                    if let Ok(parsed) = serde_json::from_str::<serde_json::Value>(&contents) {
                        if let Some(v) = parsed.get("version").and_then(|s| s.as_str()) {
                            return v.to_string();
                        }
                    }
                }
            }
        }
    }

    let compile_time = option_env!("CARGO_PKG_VERSION").unwrap_or("0.0.0");
    compile_time.to_string()
}
