use std::{sync::Arc, time::Duration};

use craftique::directory::MockDirectory;
use craftique_ui::widget::Element;
use iced::{Subscription, Task};
use tracing::info;
use tracing_subscriber::filter::LevelFilter;

use crate::{
    config::Config,
    dir::CraftiqueDirectory,
    logger::setup_logger,
    state::{Msg, State},
    VERSION,
};

pub struct Craftique {
    state: State,
}

impl Craftique {
    pub fn title(&self) -> String {
        format!("Craftique v{}", VERSION)
    }

    pub fn new(
        (config, datadir, log_level): (Config, CraftiqueDirectory, LevelFilter),
    ) -> (Craftique, Task<Msg>) {
        if let Err(e) = setup_logger(log_level, datadir) {
            tracing::warn!("Error while setting up the logger: {}", e);
        }
        info!("starting Craftique v{}", VERSION);
        let directory = Arc::new(MockDirectory::new(config.timings));
        (
            Self {
                state: State::new(directory, config.timings.countdown_secs),
            },
            Task::none(),
        )
    }

    pub fn update(&mut self, message: Msg) -> Task<Msg> {
        self.state.update(message)
    }

    /// Ticks only while the reset confirmation is counting down.
    pub fn subscription(&self) -> Subscription<Msg> {
        if self.state.is_counting_down() {
            iced::time::every(Duration::from_secs(1)).map(|_| Msg::CountdownTick)
        } else {
            Subscription::none()
        }
    }

    pub fn view(&self) -> Element<'_, Msg> {
        self.state.view()
    }
}
