//! Pulling a JSON document out of free-form model output.

use presenter_error::{JsonError, PresenterResult};

/// Extract the JSON document from a model response.
///
/// A reply that already is a JSON document, or that opens with one, is taken
/// as is, so code fences inside string values never win. Otherwise tries, in
/// order: a fenced code block holding valid JSON (`json`-tagged first), the
/// first balanced `{...}` object, the first balanced `[...]` array, and
/// finally whatever the first fence holds. Braces inside string literals
/// are ignored.
///
/// # Errors
///
/// Returns a JSON error when nothing resembling JSON is present.
///
/// ```
/// use presenter_workflow::agents::extract_json;
///
/// let reply = "Sure! Here it is:\n```json\n{\"accepted\": true}\n```\nAnything else?";
/// assert_eq!(extract_json(reply).unwrap(), "{\"accepted\": true}");
///
/// let bare = "The verdict is {\"accepted\": false, \"feedback\": \"use {braces}\"} ok";
/// assert!(extract_json(bare).unwrap().ends_with("\"use {braces}\"}"));
/// ```
pub fn extract_json(response: &str) -> PresenterResult<String> {
    let trimmed = response.trim();
    if is_json(trimmed) {
        return Ok(trimmed.to_string());
    }

    let leading = match trimmed.chars().next() {
        Some('{') => balanced(trimmed, '{', '}'),
        Some('[') => balanced(trimmed, '[', ']'),
        _ => None,
    };
    if let Some(document) = leading {
        return Ok(document);
    }

    let fenced = fenced_block(response);
    if let Some(body) = fenced.as_deref().filter(|body| is_json(body)) {
        return Ok(body.to_string());
    }

    if let Some(object) = balanced(response, '{', '}') {
        return Ok(object);
    }

    if let Some(array) = balanced(response, '[', ']') {
        return Ok(array);
    }

    if let Some(body) = fenced {
        return Ok(body);
    }

    tracing::warn!(response_length = response.len(), "No JSON found in model response");
    Err(JsonError::new(
        "model response",
        format!("no JSON found (length: {})", response.len()),
    )
    .into())
}

fn is_json(candidate: &str) -> bool {
    serde_json::from_str::<serde_json::Value>(candidate).is_ok()
}

// Contents of the first fenced block, preferring one tagged json. An
// unterminated fence yields everything after it.
fn fenced_block(response: &str) -> Option<String> {
    let body_start = match response.find("```json") {
        Some(start) => start + "```json".len(),
        None => {
            let start = response.find("```")? + 3;
            response[start..]
                .find('\n')
                .map(|n| start + n + 1)
                .unwrap_or(start)
        }
    };

    let body = &response[body_start..];
    let body = match body.find("```") {
        Some(end) => &body[..end],
        None => body,
    };

    let trimmed = body.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn balanced(response: &str, open: char, close: char) -> Option<String> {
    let start = response.find(open)?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, ch) in response[start..].char_indices() {
        if escaped {
            escaped = false;
            continue;
        }

        match ch {
            '\\' if in_string => escaped = true,
            '"' => in_string = !in_string,
            c if c == open && !in_string => depth += 1,
            c if c == close && !in_string => {
                depth -= 1;
                if depth == 0 {
                    return Some(response[start..start + offset + ch.len_utf8()].to_string());
                }
            }
            _ => {}
        }
    }

    None
}
