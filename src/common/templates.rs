/// Templates module for embedded YAML templates

/// Get the default configuration template content
/// The template is embedded at compile time using include_str! macro
pub fn get_config_template() -> &'static str {
    include_str!("../../templates/config.yaml")
}
