use std::path::PathBuf;

pub fn default_terraform_binary() -> PathBuf {
    PathBuf::from("terraform")
}

pub fn default_scspell_binary() -> PathBuf {
    PathBuf::from("scspell")
}

pub fn default_git_binary() -> PathBuf {
    PathBuf::from("git")
}

pub fn default_timeout_sec() -> u64 {
    30
}
