//! Generator configuration.
//!
//! Resolution order for each setting (highest first):
//! 1. command-line flags
//! 2. `PRLSDK_HEADER_DIR` environment variable (header directory only)
//! 3. the TOML file passed with `--config`
//! 4. built-in defaults

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use stringify_extract::HeaderFiles;
use stringify_model::NamingRules;

/// Environment variable overriding the SDK header directory.
pub const HEADER_DIR_ENV_VAR: &str = "PRLSDK_HEADER_DIR";

/// Installed location of the SDK headers.
pub const DEFAULT_HEADER_DIR: &str = "/usr/include/prlsdk";

/// Name of the generated source file.
pub const OUTPUT_FILE_NAME: &str = "PrlStringifyConsts.cpp";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("cannot determine the generator's location for the default output path: {source}")]
    OutputLocation {
        #[source]
        source: std::io::Error,
    },
}

/// Contents of a `--config` TOML file. Every key is optional.
///
/// ```toml
/// header_dir = "/opt/prlsdk/include"
/// output = "Libraries/PrlCommonUtilsBase/PrlStringifyConsts.cpp"
///
/// [headers]
/// enums = "PrlEnums.h"
///
/// [naming]
/// event_prefix = "PET_"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    pub header_dir: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub template: Option<PathBuf>,
    pub headers: HeaderFiles,
    pub naming: NamingRules,
}

impl ConfigFile {
    /// Parse a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content, path)
    }

    fn parse(content: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Settings given on the command line.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub header_dir: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub template: Option<PathBuf>,
}

/// Everything the pipeline needs, resolved once at start-up.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub header_dir: PathBuf,
    pub headers: HeaderFiles,
    pub output_path: PathBuf,
    /// Replacement template; the built-in template is used when unset.
    pub template: Option<PathBuf>,
    pub naming: NamingRules,
}

impl GeneratorConfig {
    /// Merge the layers described in the module docs.
    pub fn resolve(
        file: ConfigFile,
        env_header_dir: Option<PathBuf>,
        overrides: ConfigOverrides,
    ) -> Result<Self, ConfigError> {
        let header_dir = overrides
            .header_dir
            .or(env_header_dir)
            .or(file.header_dir)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_HEADER_DIR));
        let output_path = match overrides.output.or(file.output) {
            Some(path) => path,
            None => default_output_path()?,
        };
        Ok(Self {
            header_dir,
            headers: file.headers,
            output_path,
            template: overrides.template.or(file.template),
            naming: file.naming,
        })
    }

    /// File name written into the generated header comment.
    pub fn output_file_name(&self) -> String {
        self.output_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| OUTPUT_FILE_NAME.to_string())
    }
}

/// `PrlStringifyConsts.cpp` next to the running executable.
pub fn default_output_path() -> Result<PathBuf, ConfigError> {
    let exe = std::env::current_exe().map_err(|source| ConfigError::OutputLocation { source })?;
    let dir = exe.parent().unwrap_or_else(|| Path::new("."));
    Ok(dir.join(OUTPUT_FILE_NAME))
}

/// Header directory from [`HEADER_DIR_ENV_VAR`], ignoring empty values.
pub fn header_dir_from_env() -> Option<PathBuf> {
    std::env::var_os(HEADER_DIR_ENV_VAR)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}
