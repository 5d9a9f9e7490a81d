use crate::error::{CliError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const GITIGNORE_FILE: &str = ".gitignore";

/// Patterns written on every run. Large result files are published as release
/// assets instead of being tracked.
pub const GITIGNORE_CONTENT: &str = "# Python
__pycache__/
*.py[cod]
*$py.class
*.so
.Python
env/
venv/
*.egg-info/
dist/
build/

# IDE
.vscode/
.idea/
*.swp
*.swo

# OS
.DS_Store
Thumbs.db

# Logs
*.log

# Large files - Available in GitHub Releases
data/prompts/paper_prompts_expanded_v2.csv
data/reference/npm_package_names.csv
data/results/gemma/*.csv
data/results/gpt_oss/*.csv
data/results/marin/*.csv
data/results/mistral/*.csv
data/results/ollama/*.csv
data/results/qwen/*.csv

# Temporary files
*.zip
check.js
fixgit.js
recover.js
";

/// Replaces `.gitignore` under `project_root` with [`GITIGNORE_CONTENT`].
///
/// Whatever the file held before is discarded.
pub fn write(project_root: &Path) -> Result<PathBuf> {
    let gitignore_path = project_root.join(GITIGNORE_FILE);
    fs::write(&gitignore_path, GITIGNORE_CONTENT).map_err(|source| CliError::WriteFile {
        path: gitignore_path.clone(),
        source,
    })?;
    debug!(
        "wrote {} ({} bytes)",
        gitignore_path.display(),
        GITIGNORE_CONTENT.len()
    );
    Ok(gitignore_path)
}
