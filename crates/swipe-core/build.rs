const SECTIONS: [&str; 4] = ["decoder", "keyboard", "appearance", "dictionary"];

fn main() {
    println!("cargo:rerun-if-changed=src/default_settings.toml");
    check_default_settings(include_str!("src/default_settings.toml"));
}

/// The embedded defaults must parse and carry every section, otherwise the
/// lazy `settings()` singleton would fail at runtime instead of here.
fn check_default_settings(content: &str) {
    let value: toml::Value = match content.parse() {
        Ok(v) => v,
        Err(e) => panic!("src/default_settings.toml contains invalid TOML: {e}"),
    };
    for section in SECTIONS {
        if !value.get(section).is_some_and(toml::Value::is_table) {
            panic!("src/default_settings.toml is missing [{section}]");
        }
    }
}
