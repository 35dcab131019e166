//! Turns backend error responses into one readable sentence.
//!
//! The backend answers failures in several shapes: plain text (sometimes a
//! whole .NET stack trace), problem-details objects, or validation maps. The
//! lookup below tries them from most to least specific and always ends with a
//! status-based default.

use serde_json::{Map, Value};

pub const CONNECTION_MESSAGE: &str =
    "Erro de conexão. Verifique sua conexão com a internet ou se o servidor está disponível.";
pub const UNKNOWN_MESSAGE: &str = "Erro desconhecido.";

const PRIMARY_KEYS: [&str; 3] = ["message", "title", "error"];
const SECONDARY_KEYS: [&str; 4] = ["Message", "detail", "Detail", "errors"];
const EXCEPTION_SUFFIX: &str = "Exception";

/// Best message for a failed response with `status` and raw `body`.
#[must_use]
pub fn extract_error_message(status: u16, body: &str) -> String {
    if body.trim().is_empty() {
        return status_message(status);
    }

    match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(map)) => from_object(&map).unwrap_or_else(|| status_message(status)),
        Ok(Value::String(text)) => from_text(&text),
        Ok(_) => status_message(status),
        Err(_) => from_text(body),
    }
}

/// Default sentence for a status code.
#[must_use]
pub fn status_message(status: u16) -> String {
    match status {
        400 => "Dados inválidos. Por favor, verifique as informações enviadas.".to_owned(),
        401 => "Não autorizado. Por favor, faça login novamente.".to_owned(),
        403 => "Acesso negado.".to_owned(),
        404 => "Recurso não encontrado.".to_owned(),
        409 => "Conflito: o recurso já existe.".to_owned(),
        422 => "Erro de validação. Por favor, verifique os dados enviados.".to_owned(),
        500 => "Erro interno do servidor. Por favor, tente novamente mais tarde.".to_owned(),
        other => format!("Erro na requisição ({other})."),
    }
}

/// First line of a text body, with a `Namespace.XxxException: ` prefix removed.
fn from_text(text: &str) -> String {
    let first_line = text.lines().next().unwrap_or_default().trim();
    if let Some(message) = exception_message(first_line) {
        return message.to_owned();
    }
    if first_line.is_empty() { text.to_owned() } else { first_line.to_owned() }
}

fn exception_message(line: &str) -> Option<&str> {
    let (kind, message) = line.split_once(':')?;
    let is_exception_name = kind.len() > EXCEPTION_SUFFIX.len()
        && kind.ends_with(EXCEPTION_SUFFIX)
        && kind.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.');
    let message = message.trim();
    (is_exception_name && !message.is_empty()).then_some(message)
}

fn from_object(map: &Map<String, Value>) -> Option<String> {
    if let Some(message) = PRIMARY_KEYS.iter().find_map(|key| non_empty_str(map.get(*key))) {
        return Some(message.to_owned());
    }

    match SECONDARY_KEYS.iter().filter_map(|key| map.get(*key)).find(|value| is_truthy(value))? {
        Value::String(message) => Some(message.clone()),
        Value::Object(details) => first_detail(details.values().next()?),
        Value::Array(details) => first_detail(details.first()?),
        _ => None,
    }
}

/// A validation map entry is either a message or a list of messages.
fn first_detail(value: &Value) -> Option<String> {
    match value {
        Value::String(message) => Some(message.clone()),
        Value::Array(messages) => messages.first()?.as_str().map(str::to_owned),
        _ => None,
    }
}

fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    value?.as_str().filter(|s| !s.is_empty())
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
