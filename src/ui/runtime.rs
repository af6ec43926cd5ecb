use crate::config::Config;
use crate::feed::{fallback_projects, ProjectFeed};
use crate::shutdown::ShutdownHandle;
use crate::ui::app::App;
use crate::ui::clock::SystemClock;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, handle_mouse};
use crate::ui::layout::body_rect;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use ratatui::layout::Rect;
use std::io;
use std::sync::mpsc::{RecvTimeoutError, Sender};
use std::time::Duration;
use tokio::runtime::Handle;

/// Run the page until the user quits. `feed: None` means offline.
pub fn run(config: Config, feed: Option<ProjectFeed>, runtime: &Handle) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(config.animation.frame_ms.max(1));
    let shutdown = ShutdownHandle::new();
    let events = EventHandler::new(tick_rate, shutdown.clone());

    spawn_feed(runtime, feed, events.sender(), shutdown.clone());
    spawn_signal_listener(runtime, events.sender(), shutdown.clone());

    let mut app = App::new(config, Box::new(SystemClock::new()));
    app.mount();
    if let Ok((cols, rows)) = crossterm::terminal::size() {
        resize(&mut app, cols, rows);
    }

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Input(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Mouse(mouse)) => handle_mouse(&mut app, mouse),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(cols, rows)) => resize(&mut app, cols, rows),
            Ok(AppEvent::ProjectsLoaded(projects)) => app.on_projects(projects),
            Ok(AppEvent::Shutdown) => app.request_quit(),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    if !app.should_quit() {
        app.request_quit();
    }
    shutdown.signal();
    drop(guard);
    Ok(())
}

fn resize(app: &mut App, cols: u16, rows: u16) {
    let body = body_rect(Rect {
        x: 0,
        y: 0,
        width: cols,
        height: rows,
    });
    app.on_resize(body.width.max(1), body.height.max(1));
}

fn spawn_feed(
    runtime: &Handle,
    feed: Option<ProjectFeed>,
    tx: Sender<AppEvent>,
    shutdown: ShutdownHandle,
) {
    let Some(feed) = feed else {
        tracing::info!("Offline mode, using built-in projects");
        let _ = tx.send(AppEvent::ProjectsLoaded(fallback_projects()));
        return;
    };

    runtime.spawn(async move {
        tokio::select! {
            projects = feed.load() => {
                let _ = tx.send(AppEvent::ProjectsLoaded(projects));
            }
            _ = shutdown.wait() => {
                tracing::debug!("Project fetch abandoned on shutdown");
            }
        }
    });
}

fn spawn_signal_listener(runtime: &Handle, tx: Sender<AppEvent>, shutdown: ShutdownHandle) {
    runtime.spawn(async move {
        tokio::select! {
            _ = termination_signal() => {
                tracing::info!("Termination signal received");
                let _ = tx.send(AppEvent::Shutdown);
            }
            _ = shutdown.wait() => {}
        }
    });
}

#[cfg(unix)]
async fn termination_signal() {
    use tokio::signal::unix::{signal, SignalKind};

    match signal(SignalKind::terminate()) {
        Ok(mut sigterm) => {
            tokio::select! {
                _ = sigterm.recv() => {}
                _ = tokio::signal::ctrl_c() => {}
            }
        }
        Err(err) => {
            tracing::warn!(error = %err, "Failed to install SIGTERM handler");
            let _ = tokio::signal::ctrl_c().await;
        }
    }
}

#[cfg(not(unix))]
async fn termination_signal() {
    let _ = tokio::signal::ctrl_c().await;
}
