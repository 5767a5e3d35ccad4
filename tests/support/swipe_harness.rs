#![allow(dead_code)]

use std::future::Future;
use std::pin::Pin;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use brandtaste::llm::{GenerationOptions, Provider};
use brandtaste::{Catalog, PreferenceProfile, SwipeSession};
use chrono::{DateTime, TimeZone, Utc};

pub const BASE_TS: i64 = 1_700_000_000;

pub fn catalog() -> &'static Catalog {
    Catalog::builtin().expect("builtin catalog decodes")
}

pub fn at(offset_secs: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(BASE_TS + offset_secs, 0).unwrap()
}

/// Session over catalog brands, one second apart.
pub fn session(swipes: &[(&str, bool)]) -> SwipeSession {
    let catalog = catalog();
    swipes
        .iter()
        .zip(0..)
        .fold(SwipeSession::new("harness-user"), |s, ((brand, liked), i)| {
            s.record(catalog.get(brand).unwrap(), *liked, at(i))
        })
}

/// Every catalog design, liked or not by `pick(index)`.
pub fn full_session(pick: impl Fn(usize) -> bool) -> SwipeSession {
    let catalog = catalog();
    catalog
        .iter()
        .enumerate()
        .fold(SwipeSession::new("harness-user"), |s, (i, design)| {
            s.record(design, pick(i), at(i64::try_from(i).unwrap()))
        })
}

pub fn fenced(tag: &str, body: &str) -> String {
    format!("```{tag}\n{body}\n```")
}

pub fn profile_value(profile: &PreferenceProfile) -> serde_json::Value {
    serde_json::to_value(profile).unwrap()
}

pub enum Reply {
    Text(String),
    Error(&'static str),
}

/// Provider that answers from a script and records what it was asked.
pub struct ScriptedProvider {
    reply: Reply,
    calls: AtomicUsize,
    last_prompt: Mutex<Option<String>>,
    last_options: Mutex<Option<GenerationOptions>>,
}

impl ScriptedProvider {
    pub fn new(reply: Reply) -> Self {
        Self {
            reply,
            calls: AtomicUsize::new(0),
            last_prompt: Mutex::new(None),
            last_options: Mutex::new(None),
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::new(Reply::Text(text.into()))
    }

    pub fn failing(message: &'static str) -> Self {
        Self::new(Reply::Error(message))
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.last_prompt.lock().unwrap().clone()
    }

    pub fn last_options(&self) -> Option<GenerationOptions> {
        *self.last_options.lock().unwrap()
    }
}

impl Provider for ScriptedProvider {
    fn name(&self) -> &str {
        "scripted"
    }

    fn generate<'a>(
        &'a self,
        prompt: &'a str,
        options: &'a GenerationOptions,
    ) -> Pin<Box<dyn Future<Output = anyhow::Result<String>> + Send + 'a>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_prompt.lock().unwrap() = Some(prompt.to_string());
        *self.last_options.lock().unwrap() = Some(*options);
        Box::pin(async move {
            match &self.reply {
                Reply::Text(text) => Ok(text.clone()),
                Reply::Error(message) => Err(anyhow::anyhow!(*message)),
            }
        })
    }
}
