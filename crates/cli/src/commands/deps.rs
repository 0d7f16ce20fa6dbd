//! `deps` command: print the mode and tracked definition files.
//!
//! Output is line oriented so build tools can consume it directly:
//! the mode, the cache key, then one `path<TAB>mtime` line per candidate
//! file, with `missing` in place of the modification time when absent.

use std::io::Write;

use anyhow::Result;
use dotenv_import_transform::EnvPlugin;

pub fn run(plugin: &EnvPlugin) -> Result<()> {
    let resolution = plugin.resolution();
    let mut out = std::io::stdout().lock();

    writeln!(out, "mode\t{}", resolution.mode)?;
    writeln!(out, "cache-key\t{:016x}", resolution.fingerprint.cache_key())?;
    for stamp in resolution.fingerprint.stamps() {
        match stamp.modified_ms {
            Some(ms) => writeln!(out, "{}\t{}", stamp.path.display(), ms)?,
            None => writeln!(out, "{}\tmissing", stamp.path.display())?,
        }
    }
    Ok(())
}
