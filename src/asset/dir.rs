use anyhow::{bail, Context, Result};
use glob::{glob, Pattern};
use std::path::Path;
use tracing::{debug, info};

use super::manifest::{is_image_id, StaticAssets};

impl StaticAssets {
    /// Build a manifest from every image file under `root`, keyed by its
    /// forward-slash path relative to `root`. Fails if `placeholder` is not
    /// among them.
    pub fn from_dir<P: AsRef<Path>>(root: P, placeholder: &str) -> Result<Self> {
        let root = root.as_ref();
        if !root.is_dir() {
            bail!("asset root `{}` is not a directory", root.display());
        }

        let pattern = format!("{}/**/*", Pattern::escape(&root.display().to_string()));
        let mut assets = StaticAssets::new(placeholder);
        let mut found_placeholder = false;

        for entry in glob(&pattern).context("invalid glob pattern for asset root")? {
            let path = entry.context("reading asset directory entry")?;
            if !path.is_file() {
                continue;
            }
            let rel = path
                .strip_prefix(root)
                .with_context(|| format!("`{}` is outside the asset root", path.display()))?;
            let id = rel
                .components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/");

            if id == placeholder {
                found_placeholder = true;
                continue;
            }
            if !is_image_id(&id) {
                debug!("asset root: ignoring non-image `{}`", id);
                continue;
            }
            assets.insert(id);
        }

        if !found_placeholder {
            bail!(
                "placeholder image `{}` not found under `{}`",
                placeholder,
                root.display()
            );
        }
        info!(root = %root.display(), images = assets.len(), "loaded asset manifest");
        Ok(assets)
    }
}
