pub fn copy_to_clipboard(text: &str) -> Result<(), String> {
    let mut clipboard = arboard::Clipboard::new().map_err(|e| {
        let err = format!("Failed to access clipboard: {}", e);
        tracing::error!("{}", err);
        err
    })?;

    clipboard.set_text(text).map_err(|e| {
        let err = format!("Failed to set clipboard text: {}", e);
        tracing::error!("{}", err);
        err
    })?;

    tracing::info!("Copied {} to clipboard", text);
    Ok(())
}

pub fn open_in_browser(url: &str) -> Result<(), String> {
    let opener = if cfg!(target_os = "macos") { "open" } else { "xdg-open" };
    tracing::info!("Opening {} with {}", url, opener);

    std::process::Command::new(opener)
        .arg(url)
        .spawn()
        .map(|_| ())
        .map_err(|e| {
            let err = format!("Failed to launch {}: {}", opener, e);
            tracing::error!("{}", err);
            err
        })
}
