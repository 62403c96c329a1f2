//! Example configurations written by `sift init`.
//!
//! The examples are kept as real TOML under `templates/` so they are checked by the test
//! suite. Before writing, every setting is commented out while section headers stay live,
//! so enabling a setting is a matter of deleting its `# `.

/// Project example (valid TOML with every setting at its default).
const LOCAL_TEMPLATE: &str = include_str!("../templates/config.toml");

/// Home-directory example (valid TOML).
const GLOBAL_TEMPLATE: &str = include_str!("../templates/config-global.toml");

/// Returns the project example with its settings disabled.
pub fn local_template() -> String {
    disable_settings(LOCAL_TEMPLATE)
}

/// Returns the home-directory example with its settings disabled.
pub fn global_template() -> String {
    disable_settings(GLOBAL_TEMPLATE)
}

/// Comments out `key = value` lines, leaving comments, blank lines and `[section]`
/// headers untouched.
fn disable_settings(template: &str) -> String {
    template
        .lines()
        .map(|line| {
            let trimmed = line.trim_start();
            if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('[') {
                format!("{line}\n")
            } else {
                format!("# {line}\n")
            }
        })
        .collect()
}
