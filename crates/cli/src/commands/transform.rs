//! `transform` command: rewrite source files.
//!
//! Responsibilities:
//! - Read each file, run the substitution pass and write or print the result.
//!
//! Invariants:
//! - Files are processed in argument order; the first failure stops the run.
//! - With `--out-dir`, a relative input keeps its relative path under the
//!   output directory. Inputs that are absolute or climb out with `..` are
//!   written under their file name.
//! - Two inputs never share an output path; a clash fails before anything
//!   is written.

use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::{Component, Path, PathBuf};

use anyhow::{Context, Result, bail};
use dotenv_import_transform::{EnvPlugin, transform_source};

pub fn run(plugin: &EnvPlugin, files: &[PathBuf], out_dir: Option<&Path>) -> Result<()> {
    let targets = match out_dir {
        Some(dir) => Some(output_paths(dir, files)?),
        None => None,
    };

    let stdout = std::io::stdout();
    for (index, file) in files.iter().enumerate() {
        let source = fs::read_to_string(file)
            .with_context(|| format!("Failed to read {}", file.display()))?;
        let output = transform_source(plugin, &file.display().to_string(), source)?;

        tracing::info!(
            file = %file.display(),
            removed_imports = output.report.removed_imports,
            replaced = output.report.replaced_references,
            "Transformed"
        );

        match &targets {
            Some(targets) => {
                let target = &targets[index];
                if let Some(parent) = target.parent() {
                    fs::create_dir_all(parent).with_context(|| {
                        format!("Failed to create output directory {}", parent.display())
                    })?;
                }
                fs::write(target, &output.code)
                    .with_context(|| format!("Failed to write {}", target.display()))?;
            }
            None => {
                let mut out = stdout.lock();
                out.write_all(output.code.as_bytes())?;
                out.flush()?;
            }
        }
    }

    Ok(())
}

/// Output path for every input, in input order.
fn output_paths(out_dir: &Path, files: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut seen: HashMap<PathBuf, &Path> = HashMap::new();
    let mut targets = Vec::with_capacity(files.len());

    for file in files {
        let target = out_dir.join(relative_output(file)?);
        if let Some(previous) = seen.insert(target.clone(), file) {
            bail!(
                "{} and {} would both be written to {}",
                previous.display(),
                file.display(),
                target.display()
            );
        }
        targets.push(target);
    }

    Ok(targets)
}

fn relative_output(file: &Path) -> Result<PathBuf> {
    let mut relative = PathBuf::new();
    for component in file.components() {
        match component {
            Component::Normal(part) => relative.push(part),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                let name = file
                    .file_name()
                    .with_context(|| format!("{} has no file name", file.display()))?;
                return Ok(PathBuf::from(name));
            }
        }
    }
    if relative.as_os_str().is_empty() {
        bail!("{} has no file name", file.display());
    }
    Ok(relative)
}
