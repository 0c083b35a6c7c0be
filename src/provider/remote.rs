use crate::foodgrab::{GameState, MoveRng, Position};
use crate::provider::MoveProvider;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::time::Duration;
use thiserror::Error;
use tracing::{info, warn};

const SYSTEM_PROMPT: &str =
    "You are an AI playing a grid game. Only respond with a single move in the form [x,y].";

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("malformed response body: {0}")]
    Body(#[from] serde_json::Error),
    #[error("response contained no message content")]
    MalformedBody,
    #[error("no coordinate pair in model output: {0:?}")]
    NoCoordinates(String),
    #[error("model chose an illegal move: [{x},{y}]")]
    IllegalMove { x: usize, y: usize },
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    temperature: f64,
    min_p: f64,
    top_p: f64,
    top_k: u32,
    max_tokens: u32,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Deserialize)]
struct ChatResponseMessage {
    content: String,
}

/// Delegates the move decision to a remote chat-completion endpoint. The
/// model's output is free-form text, so every failure along the way
/// (transport, bad status, malformed body, unparseable text, illegal move)
/// degrades to standing still. A flaky judge must not crash the game.
pub struct RemoteModelProvider {
    model: String,
    base_url: String,
    api_key: String,
    client: reqwest::blocking::Client,
}

impl RemoteModelProvider {
    pub fn new(
        model: String,
        base_url: String,
        api_key: String,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        // The whole game loop blocks on this request, so the timeout matters.
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;
        Ok(RemoteModelProvider {
            model,
            base_url,
            api_key,
            client,
        })
    }

    fn request_move<R: MoveRng + Debug>(
        &self,
        state: &GameState<R>,
        legal: &[Position],
    ) -> Result<Position, ProviderError> {
        let prompt = build_prompt(state, legal);
        info!(
            player = %state.current_player(),
            model = %self.model,
            prompt = %prompt,
            "prompting remote model"
        );
        let request = ChatRequest {
            model: &self.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: &prompt,
                },
            ],
            temperature: 1.2,
            min_p: 0.0,
            top_p: 0.95,
            top_k: 20,
            max_tokens: 10,
        };
        let body = self
            .client
            .post(&self.base_url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()?
            .error_for_status()?
            .text()?;
        let content = extract_content(&body)?;
        info!(player = %state.current_player(), response = %content, "remote model replied");
        let (x, y) =
            last_coordinate_pair(&content).ok_or(ProviderError::NoCoordinates(content))?;
        check_legal(x, y, legal)
    }
}

impl<R: MoveRng + Debug> MoveProvider<R> for RemoteModelProvider {
    fn get_move(&mut self, state: &GameState<R>) -> Position {
        let legal = state.valid_moves();
        match self.request_move(state, &legal) {
            Ok(pos) => pos,
            Err(err) => {
                warn!(
                    player = %state.current_player(),
                    error = %err,
                    "remote provider failed, standing still"
                );
                state.player(state.current_player()).position()
            }
        }
    }
}

fn build_prompt<R: MoveRng + Debug>(state: &GameState<R>, legal: &[Position]) -> String {
    let me = state.player(state.current_player()).position();
    let moves = legal
        .iter()
        .map(Position::to_string)
        .collect::<Vec<String>>()
        .join(" ");
    format!(
        "Your coordinates: {me}\n\
         Food coordinates: {food}\n\
         Your valid moves are: {moves}\n\
         Make a move towards food.\n\
         Respond ONLY with the new coordinates as a bracketed pair, e.g.: [2,3]\n\
         Do NOT include any extra text or explanation.",
        food = state.food(),
    )
}

/// Pull the model's text out of a chat-completion response body.
fn extract_content(body: &str) -> Result<String, ProviderError> {
    let response: ChatResponse = serde_json::from_str(body)?;
    response
        .choices
        .into_iter()
        .next()
        .map(|c| c.message.content)
        .ok_or(ProviderError::MalformedBody)
}

fn check_legal(x: usize, y: usize, legal: &[Position]) -> Result<Position, ProviderError> {
    legal
        .iter()
        .copied()
        .find(|m| m.x() == x && m.y() == y)
        .ok_or(ProviderError::IllegalMove { x, y })
}

/// Scan free-form model output for `integer , integer` pairs and return the
/// last one. Models tend to think out loud before settling on an answer, so
/// the final pair is the one that counts. Brackets and other noise around the
/// numbers are ignored.
fn last_coordinate_pair(text: &str) -> Option<(usize, usize)> {
    let bytes = text.as_bytes();
    let mut last = None;
    let mut i = 0;
    while i < bytes.len() {
        if !bytes[i].is_ascii_digit() {
            i += 1;
            continue;
        }
        let first_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        let Ok(first) = text[first_start..i].parse::<usize>() else {
            continue;
        };
        let mut j = i;
        while j < bytes.len() && bytes[j].is_ascii_whitespace() {
            j += 1;
        }
        if j >= bytes.len() || bytes[j] != b',' {
            continue;
        }
        j += 1;
        while j < bytes.len() && bytes[j].is_ascii_whitespace() {
            j += 1;
        }
        let second_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if second_start == j {
            continue;
        }
        let Ok(second) = text[second_start..j].parse::<usize>() else {
            i = j;
            continue;
        };
        last = Some((first, second));
        i = j;
    }
    last
}
