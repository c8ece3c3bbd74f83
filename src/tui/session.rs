use std::io;
use chrono::Local;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event as TermEvent, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    Terminal,
};
use aveiro_events::{
    app::AppState,
    feed::{DataFeed, EventLoader},
    input::normal_mode,
    storage::config::Config,
    ui::theme::Theme,
};
use crate::cli::LaunchOptions;
use crate::tui::{
    links::{copy_to_clipboard, open_in_browser},
    presentation::{loading, ui},
    sample_events::sample_events,
};

/// Loads the events once and builds the state every view reads from.
pub async fn load_state(options: &LaunchOptions, config: &Config) -> AppState {
    let app = if options.sample {
        tracing::info!("Using sample events");
        AppState::sample(sample_events())
    } else {
        let primary = options
            .data
            .clone()
            .unwrap_or_else(|| config.data.primary.clone());
        let loader = EventLoader::new(DataFeed::new(), primary, config.data.fallback.clone());
        AppState::from_load(loader.load().await)
    };

    app.with_theme(Theme::get_by_name(&config.ui.theme))
        .with_filter(options.filter)
}

pub async fn run_tui(options: LaunchOptions) -> Result<(), io::Error> {
    let config = Config::load_or_create()
        .map_err(|e| io::Error::other(e.to_string()))?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let location = options.data.clone().unwrap_or_else(|| config.data.primary.clone());
    terminal.draw(|f| loading(f, &location)).ok();

    let mut app = load_state(&options, &config).await;

    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("Error: {:?}", err);
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppState,
) -> io::Result<()> {
    loop {
        let now = Local::now().naive_local();
        terminal.draw(|f| ui(f, app, now))?;

        if let TermEvent::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.status_message = None;

            if app.show_help {
                handle_help_keys(key.code, app);
            } else if app.detail.is_open() {
                handle_detail_keys(key.code, app);
            } else {
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                    _ => normal_mode::handle_key(key.code, app),
                }
            }
        }
    }
}

fn handle_help_keys(code: KeyCode, app: &mut AppState) {
    match code {
        KeyCode::Char('j') | KeyCode::Down => {
            app.help_scroll = app.help_scroll.saturating_add(1);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.help_scroll = app.help_scroll.saturating_sub(1);
        }
        KeyCode::Char('q') | KeyCode::Esc | KeyCode::Char('?') => {
            app.show_help = false;
            app.help_scroll = 0;
        }
        _ => {}
    }
}

fn handle_detail_keys(code: KeyCode, app: &mut AppState) {
    let Some(detail) = app.detail.content() else {
        return;
    };
    let url = detail.url.clone();
    let image_url = detail.image_url.clone();

    match code {
        KeyCode::Char('q') | KeyCode::Esc => app.close_detail(),
        KeyCode::Char('o') | KeyCode::Enter => {
            app.status_message = Some(match url {
                Some(url) => match open_in_browser(&url) {
                    Ok(()) => format!("A abrir {}", url),
                    Err(e) => e,
                },
                None => "Este evento não tem link".to_string(),
            });
        }
        KeyCode::Char('y') => {
            app.status_message = Some(match url {
                Some(url) => match copy_to_clipboard(&url) {
                    Ok(()) => "Link copiado".to_string(),
                    Err(e) => e,
                },
                None => "Este evento não tem link".to_string(),
            });
        }
        KeyCode::Char('i') => {
            app.status_message = Some(match image_url {
                Some(image_url) => match open_in_browser(&image_url) {
                    Ok(()) => format!("A abrir {}", image_url),
                    Err(e) => e,
                },
                None => "Este evento não tem imagem".to_string(),
            });
        }
        _ => {}
    }
}
