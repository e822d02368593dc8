//! Runtime: event loop and input routing for the TUI.
//!
//! Responsibilities
//! - Own the terminal lifecycle (enter/leave alternate screen, raw mode, mouse capture).
//! - Drive a single event loop that handles input and the pressed-key flash.
//! - Route input to the main view and apply the returned `Effect`s.
//!
//! A dedicated OS thread blocks on `crossterm::event::read()` and forwards
//! events over a channel. Ticking is fast only while a key is flashing and
//! slow otherwise.

use std::{io::Stdout, thread, time::Duration};

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, prelude::CrosstermBackend};
use tcalc_engine::InteractionDispatcher;
use tokio::{
    signal,
    sync::mpsc,
    time::{self, MissedTickBehavior},
};
use tracing::{info, warn};

use crate::app::{App, Effect, Msg};
use crate::ui::components::component::Component;
use crate::ui::main_component::MainView;

type Backend = CrosstermBackend<Stdout>;

/// Spawn a dedicated input thread that blocks on terminal input and forwards
/// `crossterm` events over a Tokio channel.
fn spawn_input_thread() -> mpsc::Receiver<Event> {
    let (sender, receiver) = mpsc::channel(500);
    thread::spawn(move || {
        loop {
            match event::read() {
                Ok(event) => {
                    if let Err(e) = sender.blocking_send(event) {
                        warn!("Failed to send event: {}", e);
                        break;
                    }
                }
                Err(e) => {
                    warn!("Failed to read event: {}", e);
                    break;
                }
            }
        }
    });
    receiver
}

/// Put the terminal into raw mode and enter the alternate screen.
fn setup_terminal() -> Result<Terminal<Backend>> {
    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture).context("enter alternate screen")?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    Ok(terminal)
}

/// Restore terminal settings and leave the alternate screen.
fn cleanup_terminal(terminal: &mut Terminal<Backend>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;
    Ok(())
}

fn render(terminal: &mut Terminal<Backend>, app: &mut App, main_view: &mut MainView) -> Result<()> {
    terminal.draw(|frame| main_view.render(frame, frame.area(), app))?;
    Ok(())
}

fn handle_input_event(app: &mut App, main_view: &mut MainView, input_event: Event) -> Vec<Effect> {
    match input_event {
        Event::Key(key_event) => main_view.handle_key_events(app, key_event),
        Event::Mouse(mouse_event) => main_view.handle_mouse_events(app, mouse_event),
        Event::Resize(width, height) => main_view.handle_message(app, Msg::Resize(width, height)),
        Event::FocusGained | Event::FocusLost | Event::Paste(_) => Vec::new(),
    }
}

/// Applies effects; returns `true` when the loop should exit.
fn process_effects(app: &mut App, effects: Vec<Effect>) -> bool {
    let mut quit = false;
    for effect in effects {
        match effect {
            Effect::Quit => quit = true,
            Effect::Feedback(action) => app.apply_action(action),
        }
    }
    quit
}

/// Entry point for the TUI runtime: sets up the terminal, runs the event
/// loop, and restores the terminal on exit.
pub async fn run_app(dispatcher: InteractionDispatcher) -> Result<()> {
    let mut app = App::new(dispatcher);
    let mut main_view = MainView::new();

    let mut terminal = setup_terminal()?;
    let mut input_receiver = spawn_input_thread();
    let result = event_loop(&mut terminal, &mut app, &mut main_view, &mut input_receiver).await;
    cleanup_terminal(&mut terminal)?;
    info!("tcalc exited");
    result
}

async fn event_loop(
    terminal: &mut Terminal<Backend>,
    app: &mut App,
    main_view: &mut MainView,
    input_receiver: &mut mpsc::Receiver<Event>,
) -> Result<()> {
    // Fast while a pressed key is showing, slow otherwise.
    let fast_interval = Duration::from_millis(120);
    let idle_interval = Duration::from_millis(5000);
    let mut current_interval = idle_interval;
    let mut ticker = time::interval(current_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    render(terminal, app, main_view)?;

    loop {
        let target_interval = if app.is_animating() { fast_interval } else { idle_interval };
        if target_interval != current_interval {
            current_interval = target_interval;
            ticker = time::interval_at(time::Instant::now() + current_interval, current_interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        }

        let effects = tokio::select! {
            maybe_event = input_receiver.recv() => {
                let Some(event) = maybe_event else {
                    // Input channel closed; shut down cleanly.
                    break;
                };
                if let Event::Key(key_event) = event
                    && key_event.code == KeyCode::Char('c')
                    && key_event.modifiers.contains(KeyModifiers::CONTROL)
                {
                    break;
                }
                handle_input_event(app, main_view, event)
            }
            _ = ticker.tick() => main_view.handle_message(app, Msg::Tick),
            _ = signal::ctrl_c() => break,
        };

        if process_effects(app, effects) {
            break;
        }
        render(terminal, app, main_view)?;
    }
    Ok(())
}
