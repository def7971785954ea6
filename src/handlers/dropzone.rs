use crate::app::App;
use crate::models::Slug;
use crate::operations::uploads::upload_file;
use std::path::PathBuf;

/// Splits text a file manager pastes when files are dropped on the terminal
/// into paths. Handles quoting, backslash escapes and `file://` URIs.
pub fn parse_dropped_paths(text: &str) -> Vec<PathBuf> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut quote: Option<char> = None;
    let mut chars = text.chars();

    while let Some(c) = chars.next() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some('"'), '\\') => {
                if let Some(next) = chars.next() {
                    current.push(next);
                }
            }
            (Some(_), c) => current.push(c),
            (None, '\'' | '"') => {
                quote = Some(c);
                in_token = true;
            }
            (None, '\\') => {
                if let Some(next) = chars.next() {
                    current.push(next);
                    in_token = true;
                }
            }
            (None, c) if c.is_whitespace() => {
                if in_token {
                    tokens.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            (None, c) => {
                current.push(c);
                in_token = true;
            }
        }
    }
    if in_token {
        tokens.push(current);
    }

    tokens
        .into_iter()
        .filter(|token| !token.is_empty())
        .map(|token| match token.strip_prefix("file://") {
            Some(uri) => {
                // Drop an optional host part: file://host/path
                let path = uri.find('/').map_or(uri, |start| &uri[start..]);
                let decoded = urlencoding::decode(path)
                    .map(|path| path.into_owned())
                    .unwrap_or_else(|_| path.to_string());
                PathBuf::from(decoded)
            }
            None => PathBuf::from(token),
        })
        .collect()
}

/// Starts one upload per dropped file.
pub fn on_drop(app: &mut App, text: &str) -> Vec<Slug> {
    let paths = parse_dropped_paths(text);
    tracing::debug!(count = paths.len(), "files dropped");
    paths
        .iter()
        .filter_map(|path| upload_file(&mut app.store, path))
        .collect()
}
