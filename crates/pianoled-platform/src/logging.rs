use env_logger::{Env, Target};
use std::fs;
use std::io;
use std::path::Path;

/// Initialise `env_logger`.
///
/// `RUST_LOG` is respected; otherwise the level is `info`. When `log_file` is
/// given and can be opened for appending, logs go there, else to stderr.
/// Calling this twice is harmless.
pub fn init(log_file: Option<&Path>) {
    let target = log_file
        .and_then(|path| match open_log_file(path) {
            Ok(file) => Some(Target::Pipe(Box::new(file))),
            Err(err) => {
                eprintln!("cannot open log file {}: {err}; logging to stderr", path.display());
                None
            }
        })
        .unwrap_or(Target::Stderr);

    let _ = env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(target)
        .try_init();
}

fn open_log_file(path: &Path) -> io::Result<fs::File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::OpenOptions::new().create(true).append(true).open(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_log_file_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("platform.log");
        open_log_file(&path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn init_twice_does_not_panic() {
        init(None);
        init(None);
    }
}
