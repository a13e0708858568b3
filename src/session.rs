// src/session.rs
use rand::Rng;
use std::time::{SystemTime, UNIX_EPOCH};

const SUFFIX_LEN: usize = 9;
const SUFFIX_CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Single generation point for every identifier the client mints.
///
/// The per-app session token correlates uploads with the later analysis on
/// the backend side and is cached for the app's lifetime. Submission tokens
/// are minted fresh for every analysis request and never reused.
#[derive(Debug, Default)]
pub struct SessionIds {
    session_id: Option<String>,
}

impl SessionIds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached per-app token, created the first time it is needed.
    pub fn session_id(&mut self) -> &str {
        self.session_id.get_or_insert_with(|| mint("session"))
    }

    /// Fresh token for one analysis submission.
    pub fn submission_id(&self) -> String {
        mint("enhanced")
    }
}

fn mint(prefix: &str) -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);
    let mut rng = rand::thread_rng();
    let suffix: String = (0..SUFFIX_LEN)
        .map(|_| SUFFIX_CHARSET[rng.gen_range(0..SUFFIX_CHARSET.len())] as char)
        .collect();
    format!("{}_{}_{}", prefix, millis, suffix)
}
