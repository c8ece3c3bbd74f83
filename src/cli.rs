use std::{
    env,
    io::{self, Write},
    process::{Command, Stdio},
};

use chrono::{Local, NaiveDateTime};

use aveiro_events::{
    app::AppState,
    events::{format::format_date, SourceFilter},
    render::ListEntry,
    storage::config::Config,
};

use crate::tui::load_state;

pub const USAGE: &str =
    "Usage: aveiro-events [--data <path|url>] [--source <slug>] [--agenda] [--sample]";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LaunchOptions {
    pub sample: bool,
    pub filter: SourceFilter,
    pub data: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CliMode {
    Interactive(LaunchOptions),
    Agenda(LaunchOptions),
    Help,
}

pub fn parse_cli_mode<I>(args: I) -> Result<CliMode, String>
where
    I: IntoIterator<Item = String>,
{
    let mut options = LaunchOptions::default();
    let mut agenda = false;
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--sample" => options.sample = true,
            "--agenda" => agenda = true,
            "--data" => {
                let location = args
                    .next()
                    .ok_or_else(|| "--data needs a path or URL".to_string())?;
                options.data = Some(location);
            }
            "--source" => {
                let slug = args
                    .next()
                    .ok_or_else(|| "--source needs a slug".to_string())?;
                options.filter = slug
                    .parse()
                    .map_err(|e| format!("{}. Known: all, teatro, gretua, aveiroon, avenida, vic, test, default", e))?;
            }
            "--help" | "-h" => return Ok(CliMode::Help),
            _ => return Err(format!("Unknown argument: {}", arg)),
        }
    }

    if agenda {
        Ok(CliMode::Agenda(options))
    } else {
        Ok(CliMode::Interactive(options))
    }
}

pub fn parse_env_args() -> Result<CliMode, String> {
    parse_cli_mode(env::args().skip(1))
}

pub async fn run_agenda_mode(options: LaunchOptions) -> Result<(), io::Error> {
    let config = Config::load_or_create()
        .map_err(|e| io::Error::other(e.to_string()))?;

    let app = load_state(&options, &config).await;
    let agenda = format_agenda_text(&app, Local::now().naive_local());
    display_with_pager(&agenda)
}

fn format_agenda_text(app: &AppState, now: NaiveDateTime) -> String {
    let stats = app.statistics(now);
    let mut lines = vec!["Eventos Culturais de Aveiro".to_string()];

    if let Some(updated) = app.last_updated {
        lines.push(format!("Atualizado: {}", format_date(Some(updated), true)));
    }

    lines.push(format!(
        "Total: {} | Este mês: {} | Fontes: {} | Próximo evento: {}",
        stats.total,
        stats.this_month,
        stats.sources,
        stats.next_event_label()
    ));
    lines.push(format!("Filtro: {}", app.board.filter()));
    lines.push(String::new());

    for entry in &app.list {
        match entry {
            ListEntry::Event(item) => {
                let mut line = format!("- {}  {} @ {} [{}]", item.when, item.title, item.location, item.source);
                for tag in &item.tags {
                    line.push_str(&format!(" #{}", tag));
                }
                lines.push(line);
            }
            ListEntry::NoEvents => lines.push("Nenhum evento encontrado.".to_string()),
            ListEntry::LoadFailed(message) => lines.push(message.clone()),
        }
    }

    lines.join("\n")
}

fn display_with_pager(text: &str) -> Result<(), io::Error> {
    let pager_value = env::var("PAGER").unwrap_or_else(|_| "less".to_string());
    let mut parts = pager_value.split_whitespace();
    let cmd = match parts.next() {
        Some(c) => c,
        None => {
            println!("{text}");
            return Ok(());
        }
    };
    let args: Vec<&str> = parts.collect();

    match Command::new(cmd)
        .args(&args)
        .stdin(Stdio::piped())
        .spawn()
    {
        Ok(mut child) => {
            if let Some(stdin) = child.stdin.as_mut() {
                stdin.write_all(text.as_bytes())?;
            }
            let _ = child.wait();
        }
        Err(_) => {
            println!("{text}");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use aveiro_events::{
        events::{Event, SourceSlug},
        feed::{FeedError, LoadError, LoadedEvents},
    };
    use chrono::NaiveDate;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn event(title: &str, source: &str, start: &str) -> Event {
        Event {
            title: title.to_string(),
            source: Some(source.to_string()),
            start_date: Some(start.to_string()),
            ..Event::default()
        }
    }

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, 6).unwrap().and_hms_opt(0, 0, 0).unwrap()
    }

    #[test]
    fn no_arguments_start_interactive_unfiltered() {
        assert_eq!(
            parse_cli_mode(args(&[])),
            Ok(CliMode::Interactive(LaunchOptions::default()))
        );
    }

    #[test]
    fn agenda_with_source_and_data() {
        let mode = parse_cli_mode(args(&["--agenda", "--source", "gretua", "--data", "site/data/events.json"]));

        assert_eq!(
            mode,
            Ok(CliMode::Agenda(LaunchOptions {
                sample: false,
                filter: SourceFilter::Source(SourceSlug::Gretua),
                data: Some("site/data/events.json".to_string()),
            }))
        );
    }

    #[test]
    fn unknown_source_is_rejected() {
        assert!(parse_cli_mode(args(&["--source", "cinema"])).is_err());
    }

    #[test]
    fn missing_option_value_is_rejected() {
        assert!(parse_cli_mode(args(&["--data"])).is_err());
    }

    #[test]
    fn unknown_argument_is_rejected() {
        assert_eq!(
            parse_cli_mode(args(&["--week"])),
            Err("Unknown argument: --week".to_string())
        );
    }

    #[test]
    fn help_flag_short_circuits() {
        assert_eq!(parse_cli_mode(args(&["--sample", "--help"])), Ok(CliMode::Help));
    }

    #[test]
    fn agenda_text_lists_sorted_events_with_stats() {
        let app = AppState::from_load(Ok(LoadedEvents::new(
            vec![
                event("Hamlet", "Teatro Aveirense", "2025-01-10"),
                event("Jazz", "GrETUA", "2025-01-05"),
                event("Fado", "Teatro Aveirense", "2025-02-01"),
            ],
            "events.json",
        )));

        let text = format_agenda_text(&app, now());

        assert!(text.contains("Total: 3 | Este mês: 2 | Fontes: 2 | Próximo evento: 4d"));
        let jazz = text.find("Jazz").unwrap();
        let hamlet = text.find("Hamlet").unwrap();
        let fado = text.find("Fado").unwrap();
        assert!(jazz < hamlet && hamlet < fado);
        assert!(!text.contains("Atualizado"));
    }

    fn failed_load() -> AppState {
        let not_found = |location: &str| FeedError::ReadError {
            location: location.to_string(),
            source: io::Error::from(io::ErrorKind::NotFound),
        };
        AppState::from_load(Err(LoadError::Exhausted {
            primary_location: "a".to_string(),
            primary: not_found("a"),
            fallback_location: "b".to_string(),
            fallback: not_found("b"),
        }))
    }

    #[test]
    fn agenda_text_after_failed_load_shows_error_once() {
        let text = format_agenda_text(&failed_load(), now());

        assert_eq!(text.matches("Erro ao carregar eventos").count(), 1);
        assert!(text.contains("Total: 0 | Este mês: 0 | Fontes: 0 | Próximo evento: -"));
    }

    #[test]
    fn agenda_text_after_failed_load_with_source_filter_keeps_error() {
        let app = failed_load().with_filter(SourceFilter::Source(SourceSlug::Teatro));

        let text = format_agenda_text(&app, now());

        assert_eq!(text.matches("Erro ao carregar eventos").count(), 1);
        assert!(!text.contains("Nenhum evento encontrado."));
        assert!(text.contains("Filtro: teatro"));
    }
}
