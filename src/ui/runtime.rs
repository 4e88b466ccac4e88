use crate::config::Config;
use crate::export::{OutcomeReporter, PagedFileSink};
use crate::shutdown::ShutdownHandle;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, handle_paste};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use parking_lot::Mutex;
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::sync::Arc;
use std::time::Duration;

/// Account to sign in with before the first frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartupLogin {
    pub email: String,
    pub name: String,
}

pub fn run(config: Config, login: Option<StartupLogin>) -> io::Result<()> {
    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
    let shutdown = ShutdownHandle::new();
    shutdown.install_signal_handlers();
    let events = EventHandler::new(tick_rate, shutdown.clone());

    let export_tx = Mutex::new(events.sender());
    let reporter: OutcomeReporter = Arc::new(move |outcome| {
        let _ = export_tx.lock().send(AppEvent::Export(outcome));
    });
    let export_dir = config.export.resolved_output_dir();
    tracing::info!(dir = %export_dir.display(), format = ?config.export.format, "Export sink ready");
    let sink = PagedFileSink::new(export_dir, config.export.format, reporter);

    let mut app = App::new(config, Box::new(sink));
    if let Some(login) = login {
        app.login(login.email, login.name);
    }

    let (mut terminal, guard) = setup_terminal()?;
    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Paste(text)) => handle_paste(&mut app, &text),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Redraw) => {}
            Ok(AppEvent::Export(outcome)) => app.on_export_outcome(outcome),
            Ok(AppEvent::Shutdown) => app.request_quit(),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    shutdown.signal();
    drop(guard);
    Ok(())
}
