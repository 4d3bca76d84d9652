//! `/awkawk` slash-command handler.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use axum::extract::rejection::FormRejection;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Form;
use serde::Serialize;
use tracing::instrument;

use super::error::AwkError;
use super::AppState;
use crate::awk::{self, RenderContext};
use crate::util::constant_time_eq;

/// The only slash command this endpoint answers.
pub const SLASH_COMMAND: &str = "/awkawk";

/// Webhook reply posted back into the channel.
#[derive(Debug, Serialize)]
pub struct SlashResponse {
    pub response_type: &'static str,
    pub text: String,
}

impl SlashResponse {
    /// A reply visible to everyone in the channel.
    pub const fn in_channel(text: String) -> Self {
        Self {
            response_type: "in_channel",
            text,
        }
    }
}

impl IntoResponse for SlashResponse {
    fn into_response(self) -> Response {
        match serde_json::to_vec(&self) {
            Ok(body) => (
                [(header::CONTENT_TYPE, "application/json; charset=utf-8")],
                body,
            )
                .into_response(),
            Err(e) => {
                tracing::warn!("Error encoding JSON: {}", e);
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}

/// Collapse repeated form keys into one value, joined by a single space.
pub fn flatten_form(pairs: Vec<(String, String)>) -> HashMap<String, String> {
    let mut fields: HashMap<String, String> = HashMap::new();
    for (key, value) in pairs {
        match fields.entry(key) {
            Entry::Occupied(mut entry) => {
                let existing = entry.get_mut();
                existing.push(' ');
                existing.push_str(&value);
            }
            Entry::Vacant(entry) => {
                entry.insert(value);
            }
        }
    }
    fields
}

/// Answer a slash-command webhook.
///
/// Validates the shared secret and the command, splits `text` into the
/// sub-command and its target, and renders the reply.
#[instrument(skip_all, fields(means = tracing::field::Empty))]
pub async fn handle_awk(
    State(state): State<AppState>,
    form: Result<Form<Vec<(String, String)>>, FormRejection>,
) -> Result<SlashResponse, AwkError> {
    let Form(pairs) = form.map_err(|rejection| {
        tracing::debug!(%rejection, "Unable to parse form");
        AwkError::BadForm
    })?;
    let fields = flatten_form(pairs);

    if let Some(expected) = state.config.token.as_deref() {
        let submitted = fields.get("token").map_or("", String::as_str);
        if !constant_time_eq(expected, submitted) {
            tracing::debug!("Shared secret mismatch");
            return Err(AwkError::NotFound);
        }
    }

    match fields.get("command").map_or("", String::as_str) {
        "" => return Err(AwkError::NoCommand),
        SLASH_COMMAND => {}
        other => return Err(AwkError::unrecognized_command(other)),
    }

    let (means, target) = {
        let text = fields.get("text").map_or("", String::as_str);
        let words: Vec<&str> = text.split_whitespace().collect();
        let Some((means, rest)) = words.split_first() else {
            return Err(AwkError::NoCommandString);
        };
        ((*means).to_string(), rest.join(" "))
    };
    tracing::Span::current().record("means", means.as_str());

    let command = awk::lookup(&means).ok_or_else(|| AwkError::unrecognized_means(&means))?;

    let ctx = RenderContext::new(means, target).with_fields(fields);
    let text = command.render(&ctx, &mut rand::thread_rng())?;

    Ok(SlashResponse::in_channel(text))
}
