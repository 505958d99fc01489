//! Template loader for reading command templates from a directory.
//!
//! Templates are read fresh on every call; nothing is cached. The loader only
//! ever reads, it never creates, modifies, or deletes template files.

use std::{
    io,
    path::{Path, PathBuf},
};

use log::debug;

use crate::{
    error::{Result, StencilError},
    template::TemplateId,
};

/// Name of the template directory, both bundled and under `$XDG_DATA_HOME/stencil`.
const TEMPLATE_DIR_NAME: &str = "templates";

/// Install layout relative to the executable's directory: `<exe_dir>/templates`
/// for a flat archive, `<exe_dir>/../share/stencil/templates` for a prefix install.
const DEPLOYED_TEMPLATE_DIRS: [&str; 2] = ["templates", "../share/stencil/templates"];

/// Reads template text for a [`TemplateId`] from a fixed base directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateLoader {
    template_dir: PathBuf,
}

impl TemplateLoader {
    /// Creates a loader reading from `template_dir`.
    pub fn new(template_dir: impl Into<PathBuf>) -> Self {
        Self {
            template_dir: template_dir.into(),
        }
    }

    /// Directory the loader reads templates from.
    pub fn template_dir(&self) -> &Path {
        &self.template_dir
    }

    /// Location of the given template inside the template directory.
    pub fn path_for(&self, id: TemplateId) -> PathBuf {
        self.template_dir.join(id.file_name())
    }

    /// Reads the full text of the given template.
    ///
    /// # Errors
    ///
    /// Returns `StencilError::TemplateNotFound` if the file does not exist
    /// Returns `StencilError::TemplateUnreadable` if the file cannot be
    /// inspected or read (permissions, symlink loops, I/O failure)
    pub fn load(&self, id: TemplateId) -> Result<String> {
        let path = self.path_for(id);
        match std::fs::metadata(&path) {
            Ok(_) => {}
            Err(source) if source.kind() == io::ErrorKind::NotFound => {
                return Err(StencilError::TemplateNotFound { id, path });
            }
            Err(source) => return Err(StencilError::TemplateUnreadable { id, path, source }),
        }

        debug!("Loading template '{id}' from {}", path.display());
        std::fs::read_to_string(&path)
            .map_err(|source| StencilError::TemplateUnreadable { id, path, source })
    }
}

impl Default for TemplateLoader {
    fn default() -> Self {
        TemplateLoaderBuilder::new().build()
    }
}

/// Builder for creating and configuring [`TemplateLoader`] instances.
#[derive(Debug, Clone, Default)]
pub struct TemplateLoaderBuilder {
    template_dir: Option<PathBuf>,
}

impl TemplateLoaderBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self { template_dir: None }
    }

    /// Sets a custom template directory.
    ///
    /// If not specified, the first existing directory of
    /// `$XDG_DATA_HOME/stencil/templates`, `<exe_dir>/templates` and
    /// `<exe_dir>/../share/stencil/templates` is used, falling back to the
    /// templates in this crate's source tree.
    pub fn with_template_dir<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.template_dir = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Builds the configured loader.
    pub fn build(self) -> TemplateLoader {
        let template_dir = self
            .template_dir
            .unwrap_or_else(Self::default_template_dir);
        debug!("Using template directory {}", template_dir.display());
        TemplateLoader::new(template_dir)
    }

    /// Returns the default template directory.
    fn default_template_dir() -> PathBuf {
        xdg::BaseDirectories::with_prefix("stencil")
            .find_data_file(TEMPLATE_DIR_NAME)
            .filter(|path| path.is_dir())
            .or_else(|| {
                std::env::current_exe()
                    .ok()
                    .and_then(|exe| deployed_template_dir(&exe))
            })
            .unwrap_or_else(bundled_template_dir)
    }
}

/// Template directory installed next to the executable at `exe`, if any.
pub fn deployed_template_dir(exe: &Path) -> Option<PathBuf> {
    let exe_dir = exe.parent()?;
    DEPLOYED_TEMPLATE_DIRS
        .iter()
        .map(|relative| exe_dir.join(relative))
        .find(|path| path.is_dir())
}

/// Templates in this crate's source tree, used when running from a checkout.
pub fn bundled_template_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(TEMPLATE_DIR_NAME)
}
