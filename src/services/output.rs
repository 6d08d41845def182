use crate::domain::models::{ErrorBody, JsonErr, JsonOut};
use crate::services::scaffold::WriteError;
use crate::services::settings::ConfigError;
use crate::services::topics::{LoadError, TopicError};
use serde::Serialize;

/// Progress lines are observational only; they are suppressed in `--json`
/// mode so stdout stays a single parseable document.
pub fn progress(json: bool, line: impl AsRef<str>) {
    if !json {
        println!("{}", line.as_ref());
    }
}

pub fn print_out<T: Serialize>(
    json: bool,
    data: &[T],
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        for d in data {
            println!("{}", row(d));
        }
    }
    Ok(())
}

pub fn print_one<T: Serialize>(
    json: bool,
    data: T,
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        println!("{}", row(&data));
    }
    Ok(())
}

pub fn error_code(err: &anyhow::Error) -> &'static str {
    if err.downcast_ref::<LoadError>().is_some() {
        "TOPICS_LOAD"
    } else if err.downcast_ref::<WriteError>().is_some() {
        "WRITE_FAILED"
    } else if let Some(topic_err) = err.downcast_ref::<TopicError>() {
        match topic_err {
            TopicError::DuplicateSlug(_) => "DUPLICATE_SLUG",
            TopicError::NotFound(_) => "TOPIC_NOT_FOUND",
        }
    } else if err.downcast_ref::<ConfigError>().is_some() {
        "MISSING_API_KEY"
    } else {
        "ERROR"
    }
}

pub fn print_error(json: bool, err: &anyhow::Error) {
    if json {
        let body = JsonErr {
            ok: false,
            error: ErrorBody {
                code: error_code(err).to_string(),
                message: format!("{:#}", err),
            },
        };
        match serde_json::to_string_pretty(&body) {
            Ok(rendered) => println!("{}", rendered),
            Err(_) => eprintln!("error: {:#}", err),
        }
    } else {
        eprintln!("error: {:#}", err);
    }
}
