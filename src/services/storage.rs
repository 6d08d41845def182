use chrono::{SecondsFormat, Utc};
use std::path::PathBuf;

fn config_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")?;
    Ok(PathBuf::from(home).join(".config/artgen"))
}

pub fn settings_path() -> anyhow::Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}

pub fn page_cache_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")?;
    Ok(PathBuf::from(home).join(".cache").join("artgen").join("pages"))
}

/// Best-effort append to the audit log; never fails the calling operation.
pub fn audit(action: &str, data: serde_json::Value) {
    let dir = match config_dir() {
        Ok(d) => d,
        Err(_) => return,
    };
    let _ = std::fs::create_dir_all(&dir);
    let event = serde_json::json!({
        "ts": Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        "action": action,
        "data": data
    });
    let line = format!("{}\n", event);
    let _ = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join("audit.jsonl"))
        .and_then(|mut f| std::io::Write::write_all(&mut f, line.as_bytes()));
}
