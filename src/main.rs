use std::process::ExitCode;

use trellis::config::Config;
use trellis::files::{Browser, CommandOpener};
use trellis::tui::event_loop::{self, App};
use trellis::ui::core::geom::Size;
use trellis::ui::core::widget::{Env, Notice};
use trellis::ui::driver::{Command, Driver};

struct FilesApp {
    browser: Browser,
}

impl App for FilesApp {
    fn notices(&mut self, notices: Vec<Notice>) -> Vec<Command> {
        notices
            .iter()
            .flat_map(|notice| self.browser.handle(notice))
            .collect()
    }
}

fn main() -> ExitCode {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("trellis-files: {}", err);
            return ExitCode::FAILURE;
        }
    };
    let _logging = config
        .ensure_log_dir()
        .ok()
        .and_then(|dir| trellis::logging::init(&dir, "trellis-files.log"));

    let opener = CommandOpener::new(config.open_command.clone());
    let browser = match Browser::new(&config, Box::new(opener)) {
        Ok(browser) => browser,
        Err(err) => {
            tracing::error!(error = %err, "startup failed");
            eprintln!("trellis-files: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let mut driver = Driver::new(browser.ui(), Env::default(), Size::new(80, 24));
    let focus = browser.initial_focus();
    let mut app = FilesApp { browser };

    match event_loop::run(&mut driver, &mut app, |d| {
        d.focus(focus);
    }) {
        Ok(None) => ExitCode::SUCCESS,
        Ok(Some(signal)) => {
            tracing::info!(?signal, "terminated");
            ExitCode::from(signal.exit_code() as u8)
        }
        Err(err) => {
            tracing::error!(error = %err, "terminal failure");
            eprintln!("trellis-files: {}", err);
            ExitCode::FAILURE
        }
    }
}
