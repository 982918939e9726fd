use crate::dir::CraftiqueDirectory;
use std::{error::Error, fs::File, str::FromStr, sync::Arc};
use tracing_subscriber::{
    filter::{self, LevelFilter},
    fmt::writer::BoxMakeWriter,
    prelude::*,
};

const GUI_LOG_FILE_NAME: &str = "craftique-gui.log";

/// Rendering, windowing and runtime crates whose events are not logged.
const NOISY_TARGETS: [&str; 16] = [
    "iced_wgpu",
    "iced_winit",
    "iced_tiny_skia",
    "iced_graphics",
    "iced_runtime",
    "iced_core",
    "wgpu_core",
    "wgpu_hal",
    "naga",
    "winit",
    "sctk",
    "calloop",
    "polling",
    "mio",
    "cosmic_text",
    "tokio",
];

fn is_noisy(target: &str) -> bool {
    NOISY_TARGETS.iter().any(|prefix| target.starts_with(prefix))
}

/// Logs to stdout and to `craftique-gui.log` in the data directory.
pub fn setup_logger(log_level: LevelFilter, datadir: CraftiqueDirectory) -> Result<(), Box<dyn Error>> {
    let log_path = datadir.path().join(GUI_LOG_FILE_NAME);
    let file = File::create(log_path)?;

    let file_log = tracing_subscriber::fmt::layer()
        .with_writer(BoxMakeWriter::new(Arc::new(file)))
        .with_ansi(false)
        .with_file(false);
    let stdout_log = tracing_subscriber::fmt::layer().pretty().with_file(false);

    tracing_subscriber::registry()
        .with(
            stdout_log
                .and_then(file_log)
                .with_filter(log_level)
                .with_filter(filter::filter_fn(|metadata| !is_noisy(metadata.target()))),
        )
        .try_init()?;

    Ok(())
}

/// Level from the LOG_LEVEL environment variable, if set.
pub fn parse_log_level() -> Result<Option<LevelFilter>, Box<dyn Error>> {
    match std::env::var("LOG_LEVEL") {
        Ok(level) => Ok(Some(LevelFilter::from_str(&level)?)),
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_only_noisy_targets() {
        assert!(is_noisy("wgpu_core::device"));
        assert!(is_noisy("iced_winit::program"));
        assert!(!is_noisy("craftique::navigation"));
        assert!(!is_noisy("craftique_gui::state::update"));
    }

    #[test]
    fn writes_into_the_data_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let datadir = CraftiqueDirectory::new(tmp.path().to_path_buf());
        let _ = setup_logger(LevelFilter::INFO, datadir);
        assert!(tmp.path().join(GUI_LOG_FILE_NAME).exists());
    }
}
