use anyhow::Context;
use sigdoc_config::SigdocConfig;

use crate::cli::GlobalFlags;

/// Load `.env` from the working directory, then the layered configuration.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<SigdocConfig> {
    load_dotenv()?;

    match &flags.config {
        Some(path) => SigdocConfig::load_with_file(path)
            .with_context(|| format!("failed to load config file {}", path.display())),
        None => SigdocConfig::load().context("failed to load configuration"),
    }
}

fn load_dotenv() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().context("failed to determine current directory")?;
    let env_path = cwd.join(".env");
    if env_path.exists() {
        dotenvy::from_path(&env_path)
            .with_context(|| format!("failed to load dotenv file at {}", env_path.display()))?;
    }
    Ok(())
}
