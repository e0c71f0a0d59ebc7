use camino::{Utf8Path, Utf8PathBuf};
use directories_next::ProjectDirs;

use crate::StorageError;

/// Config allows end users to override the directory n8r keeps its
/// credential in. It is intended to give library consumers a way to
/// support environment variable overrides for end users.
#[derive(Debug, Clone)]
pub struct Config {
    /// home is the path to the user's n8r config directory
    pub home: Utf8PathBuf,
}

impl Config {
    /// Creates a new instance of `Config`
    pub fn new(override_home: Option<&impl AsRef<Utf8Path>>) -> Result<Config, StorageError> {
        let home = match override_home {
            Some(home) => home.as_ref().to_path_buf(),
            None => {
                // Lin: /home/alice/.config/n8r
                // Win: C:\Users\Alice\AppData\Roaming\Injectionator\n8r\config
                // Mac: /Users/Alice/Library/Application Support/com.Injectionator.n8r
                let dir = ProjectDirs::from("com", "Injectionator", "n8r")
                    .ok_or(StorageError::DefaultConfigDirNotFound)?
                    .config_dir()
                    .to_path_buf();
                Utf8PathBuf::try_from(dir)?
            }
        };

        tracing::debug!(config_home = %home);
        Ok(Config { home })
    }
}
