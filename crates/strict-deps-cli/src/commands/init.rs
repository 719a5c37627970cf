//! Init command: write a starter configuration file.

use anyhow::{bail, Result};
use std::path::Path;

const CONFIG_TEMPLATE: &str = r#"# strict-deps configuration
#
# Each [[rules]] entry protects one module: imports resolving into
# `module` are only allowed from locations matching `allowReferenceFrom`.
# Patterns containing glob metacharacters (* ? {} []) are matched as
# globs; anything else is a plain prefix.

[[rules]]
module = "src/components/ui"
allowReferenceFrom = ["src/components/pages"]
# Imports from within the module itself are fine
allowSameModule = true
# Uncomment to exempt `import type` statements for this module
# allowTypeImport = true

[options]
# Resolve ./ and ../ specifiers against the importing file first
resolveRelativeImport = true
# Exempt all type-only imports globally
# allowTypeImport = true
"#;

const CONFIG_NAME: &str = "strict-deps.toml";

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    let path = Path::new(CONFIG_NAME);

    if path.exists() && !force {
        bail!("{CONFIG_NAME} already exists. Use --force to overwrite.");
    }

    std::fs::write(path, CONFIG_TEMPLATE)?;
    println!("Created {CONFIG_NAME}");
    Ok(())
}
