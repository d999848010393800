//! Terminal setup and the main event loop

use crate::config::Config;
use crate::logger::Logger;
use crate::services::{NotificationScheduler, Reminder, ReminderScheduler};
use crate::storage::LocalStorage;
use crate::ui::app_component::AppComponent;
use crate::ui::core::{Component, EventHandler};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Run the TUI until the user quits
pub async fn run_app(
    config: &Config,
    storage: LocalStorage,
    scheduler: ReminderScheduler,
    reminder_rx: mpsc::UnboundedReceiver<Reminder>,
    logger: Logger,
) -> anyhow::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    if config.ui.mouse_enabled {
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    } else {
        execute!(stdout, EnterAlternateScreen)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Initialize application components
    let notifier: Arc<dyn NotificationScheduler> = Arc::new(scheduler);
    let mut app = AppComponent::new(config, storage, notifier, logger).with_reminders(reminder_rx);
    let mut event_handler = EventHandler::new();

    app.load_data();

    let result = run_app_loop(&mut terminal, &mut app, &mut event_handler).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    result
}

async fn run_app_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppComponent,
    event_handler: &mut EventHandler,
) -> anyhow::Result<()> {
    let mut needs_render = true;

    loop {
        if needs_render {
            terminal.draw(|f| app.render(f, f.area()))?;
            needs_render = false;
        }

        let event = event_handler.next_event().await?;
        if app.handle_event(event)? {
            needs_render = true;
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
