use chrono::{Days, Local};
use aveiro_events::events::Event;

/// Offline demo data spread around today, one event per known venue.
pub fn sample_events() -> Vec<Event> {
    let today = Local::now().date_naive();
    let scraped_at = Local::now().naive_local().format("%Y-%m-%dT%H:%M:%S").to_string();

    let events = [
        ("Hamlet", 2, "21:30", Some("Grande Auditório"), "Teatro Aveirense", vec!["teatro"]),
        ("Noite de Jazz", 5, "22:00", Some("GrETUA"), "GrETUA", vec!["música", "jazz"]),
        ("Mercado de Artesanato", 0, "10:00", None, "AveiroOn", vec!["feira"]),
        ("Fado no Café", 9, "21:00", Some("Avenida Café-Concerto"), "Avenida Café", vec!["música"]),
        ("Oficina de Ciência", 14, "15:00", Some("Fábrica Centro Ciência Viva"), "VIC Aveiro", vec![]),
        ("Concerto de Ano Novo", 30, "18:00", Some("Grande Auditório"), "Teatro Aveirense", vec!["música", "clássica"]),
    ];

    events
        .into_iter()
        .enumerate()
        .filter_map(|(i, (title, offset, time, location, source, tags))| {
            let date = today.checked_add_days(Days::new(offset))?;
            Some(Event {
                id: format!("sample_{}", i),
                title: title.to_string(),
                start_date: Some(format!("{}T{}:00", date.format("%Y-%m-%d"), time)),
                end_date: None,
                url: None,
                image_url: None,
                location: location.map(String::from),
                source: Some(source.to_string()),
                tags: Some(tags.into_iter().map(String::from).collect()),
                scraped_at: Some(scraped_at.clone()),
            })
        })
        .collect()
}
