use std::path::PathBuf;

/// XDG app name used for config and state directories.
pub const APP_NAME: &str = "dirlog";
/// File name of the configuration inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("", "", APP_NAME)
}

/// `~/.config/dirlog` on Linux.
pub fn config_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().to_path_buf())
}

/// `~/.local/state/dirlog` on Linux.
///
/// state_dir() is Linux-only; fall back to data_local_dir() on macOS/Windows.
pub fn state_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| {
        dirs.state_dir()
            .unwrap_or_else(|| dirs.data_local_dir())
            .to_path_buf()
    })
}

/// Default location of the configuration file.
pub fn default_config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(CONFIG_FILE_NAME))
}
