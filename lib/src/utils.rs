use std::path::PathBuf;

pub fn get_config_dir() -> PathBuf {
    if let Ok(path) = std::env::var("GOODLINKS_EXPORT_CONFIG_DIR") {
        return PathBuf::from(path);
    }

    if let Ok(path) = std::env::var("XDG_CONFIG_HOME") {
        return PathBuf::from(path).join("goodlinks-export");
    }

    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(".config/goodlinks-export");
    }

    #[cfg(target_os = "windows")]
    if let Ok(appdata) = std::env::var("APPDATA") {
        return PathBuf::from(appdata).join("goodlinks-export");
    }

    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

pub fn get_config_path() -> PathBuf {
    get_config_dir().join("config.yml")
}
