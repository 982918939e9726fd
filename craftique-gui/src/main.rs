#![windows_subsystem = "windows"]

use std::{error::Error, io::Write};

use iced::{Settings, Size};
use tracing::error;

use craftique_gui::{
    app::Craftique,
    args::{datadir, parse_args},
    config::Config,
    logger::parse_log_level,
    VERSION,
};
use craftique_ui::{component::text, font, theme};

fn main() -> Result<(), Box<dyn Error>> {
    let args = parse_args(std::env::args().collect(), VERSION)?;
    let datadir = datadir(&args)?;
    datadir.init()?;

    let config = Config::from_file_or_init(&datadir.config_path())?;
    let log_level = match parse_log_level()? {
        Some(level) => level,
        None => config.log_level()?,
    };

    setup_panic_hook();

    let settings = Settings {
        id: Some("Craftique".to_string()),
        antialiasing: false,
        default_text_size: text::P1_SIZE.into(),
        default_font: font::REGULAR,
        ..Default::default()
    };

    #[allow(unused_mut)]
    let mut window_settings = iced::window::Settings {
        position: iced::window::Position::Default,
        min_size: Some(Size {
            width: 1000.0,
            height: 650.0,
        }),
        ..Default::default()
    };

    #[cfg(target_os = "linux")]
    {
        window_settings.platform_specific = iced::window::settings::PlatformSpecific {
            application_id: "Craftique".to_string(),
            ..Default::default()
        };
    }

    if let Err(e) = iced::application(Craftique::title, Craftique::update, Craftique::view)
        .theme(|_| theme::Theme::default())
        .subscription(Craftique::subscription)
        .settings(settings)
        .window(window_settings)
        .run_with(move || Craftique::new((config, datadir, log_level)))
    {
        log::error!("{}", e);
        Err(format!("Failed to launch UI: {}", e).into())
    } else {
        Ok(())
    }
}

// A panic in any thread should stop the main thread, and print the panic.
fn setup_panic_hook() {
    std::panic::set_hook(Box::new(move |panic_info| {
        let file = panic_info
            .location()
            .map(|l| l.file())
            .unwrap_or_else(|| "'unknown'");
        let line = panic_info
            .location()
            .map(|l| l.line().to_string())
            .unwrap_or_else(|| "'unknown'".to_string());

        let bt = backtrace::Backtrace::new();
        let info = panic_info
            .payload()
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| panic_info.payload().downcast_ref::<String>().cloned());
        error!(
            "panic occurred at line {} of file {}: {:?}\n{:?}",
            line, file, info, bt
        );

        let _ = std::io::stdout().flush();
        std::process::exit(1);
    }));
}
