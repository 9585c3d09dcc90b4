//! Configuration file generation.

use anyhow::{Context, Result, bail};
use serde::Serialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::config::IconConfig;
use crate::logger::status_success;

/// Generate iconcut.toml content with comments
pub fn generate_config_template() -> Result<String> {
    let defaults = IconConfig::default();
    let mut out = format!(
        "# iconcut configuration file (v{})\n\n",
        env!("CARGO_PKG_VERSION")
    );

    push_section(
        &mut out,
        "input",
        "Source images tried in order when no path is given",
        &defaults.input,
    )?;
    push_section(
        &mut out,
        "mask",
        "Pixels with every channel <= threshold (0-255) become transparent",
        &defaults.mask,
    )?;
    push_section(
        &mut out,
        "export",
        "filter: nearest | triangle | catmull-rom | gaussian | lanczos3\n# copies: full-size duplicates at the project root, e.g. [\"icon-192.png\"]",
        &defaults.export,
    )?;

    Ok(out)
}

fn push_section(out: &mut String, name: &str, doc: &str, section: &impl Serialize) -> Result<()> {
    let body = toml::to_string(section).with_context(|| format!("serializing [{name}]"))?;
    out.push_str(&format!("# {doc}\n[{name}]\n{body}\n"));
    Ok(())
}

/// Write the default config as `name` inside `dir`.
///
/// Refuses to replace an existing file unless `force` is set.
pub fn write_config(dir: &Path, name: &Path, force: bool) -> Result<PathBuf> {
    let path = dir.join(name);
    if path.exists() && !force {
        bail!(
            "'{}' already exists, use --force to overwrite",
            path.display()
        );
    }

    let content = generate_config_template()?;
    fs::write(&path, content)
        .with_context(|| format!("Failed to write config file '{}'", path.display()))?;

    status_success(&format!("created {}", path.display()));
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_template_parses_to_defaults() {
        let template = generate_config_template().unwrap();
        let parsed = toml::from_str::<IconConfig>(&template).unwrap();
        assert_eq!(parsed, IconConfig::default());
        assert!(template.contains("[export]"));
        assert!(template.contains("threshold = 30"));
    }

    #[test]
    fn test_write_config_refuses_overwrite() {
        let dir = TempDir::new().unwrap();
        let name = Path::new("iconcut.toml");

        let path = write_config(dir.path(), name, false).unwrap();
        fs::write(&path, "# edited").unwrap();

        assert!(write_config(dir.path(), name, false).is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), "# edited");

        write_config(dir.path(), name, true).unwrap();
        assert!(fs::read_to_string(&path).unwrap().contains("[mask]"));
    }
}
