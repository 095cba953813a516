mod schema;

pub use schema::{Config, Scenario};

use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Commented starter file written by `credit-check init`.
pub const STARTER_CONFIG: &str = r#"# credit-check scenarios
#
# Each scenario holds raw form values, quoted as you would type them.
# Blank or missing numbers count as 0, a missing rent_ratio counts as
# fully on time, and a missing loan_amount defaults to 3x monthly income.
#
# education: high-school | college | bachelors | masters | phd
scenarios:
  - name: baseline
    form:
      rent_ratio: "0.95"
      monthly_income: "85000"
      monthly_expenses: "40000"
      missed_payments: "0"
      education: "bachelors"
      employment_years: "4"
      loan_amount: "300000"
  - name: bigger loan
    form:
      rent_ratio: "0.95"
      monthly_income: "85000"
      monthly_expenses: "40000"
      missed_payments: "0"
      education: "bachelors"
      employment_years: "4"
      loan_amount: "500000"
  - name: new job
    form:
      rent_ratio: "85%"
      monthly_income: "45000"
      monthly_expenses: "30000"
      missed_payments: "1"
      education: "masters"
      employment_years: "0.5"
"#;

/// Get the config directory path (~/.config/credit-check/)
pub fn get_config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".config").join("credit-check"))
}

/// Get the default scenario file path (~/.config/credit-check/scenarios.yaml)
pub fn get_config_path() -> Result<PathBuf> {
    Ok(get_config_dir()?.join("scenarios.yaml"))
}

/// The explicit path if given, otherwise the default scenario file path
pub fn resolve_config_path(path: Option<PathBuf>) -> Result<PathBuf> {
    match path {
        Some(p) => Ok(p),
        None => get_config_path(),
    }
}

/// Ensure the parent directory of `path` exists
fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
    }
    Ok(())
}

/// Parse scenario YAML
pub fn parse_config(content: &str) -> Result<Config> {
    let config: Config =
        serde_saphyr::from_str(content).context("Failed to parse scenarios: invalid YAML")?;
    Ok(config)
}

/// Load scenarios from a YAML file
///
/// # Arguments
///
/// * `path` - Optional path to the scenario file. If None, uses the default path
///   (~/.config/credit-check/scenarios.yaml)
///
/// # Errors
///
/// Returns an error if:
/// - The file does not exist
/// - The file cannot be read
/// - The YAML cannot be parsed
pub fn load_config(path: Option<PathBuf>) -> Result<Config> {
    let config_path = resolve_config_path(path)?;

    if !config_path.exists() {
        anyhow::bail!(
            "Scenario file not found at {}. Run `credit-check init` to create one",
            config_path.display()
        );
    }

    let content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read scenario file at {}", config_path.display()))?;

    let config = parse_config(&content)
        .with_context(|| format!("Invalid scenario file {}", config_path.display()))?;

    tracing::debug!(
        path = %config_path.display(),
        scenarios = config.scenarios.len(),
        "loaded scenario file"
    );

    Ok(config)
}

/// Write the starter scenario file atomically
///
/// Refuses to replace an existing file unless `force` is set.
/// Returns the path written.
pub fn write_starter_config(path: Option<PathBuf>, force: bool) -> Result<PathBuf> {
    let config_path = resolve_config_path(path)?;

    if config_path.exists() && !force {
        anyhow::bail!(
            "Scenario file already exists at {}. Use --force to overwrite",
            config_path.display()
        );
    }

    ensure_parent_dir(&config_path)?;

    let mut file = AtomicWriteFile::open(&config_path)
        .with_context(|| format!("Failed to open atomic write file at {}", config_path.display()))?;
    file.write_all(STARTER_CONFIG.as_bytes())
        .context("Failed to write scenario file")?;
    file.commit().context("Failed to save scenario file")?;

    tracing::info!(path = %config_path.display(), "wrote starter scenario file");

    Ok(config_path)
}
