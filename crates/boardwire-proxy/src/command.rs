//! Inbound request classification.
//!
//! Every request maps to exactly one [`Route`]: a preflight probe, one typed
//! [`Command`], or not-found. Path segments are percent-decoded and must be
//! non-empty; any extra or missing segment fails the match.

use axum::http::Method;
use percent_encoding::percent_decode_str;

/// A recognised remote operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `any /stream/{gameId}`
    StreamOpen { game_id: String },
    /// `POST /move/{gameId}/{move}`
    MoveSubmit { game_id: String, mv: String },
    /// `POST /challenge/ai`
    ChallengeAi,
    /// `POST /challenge/open`
    ChallengeOpen,
    /// `GET /account/playing`
    AccountPlaying,
    /// `GET /account`
    Account,
}

/// Outcome of classifying a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Preflight,
    Command(Command),
    NotFound,
}

impl Command {
    /// Short operation name for logs.
    pub const fn operation(&self) -> &'static str {
        match self {
            Self::StreamOpen { .. } => "stream-open",
            Self::MoveSubmit { .. } => "move-submit",
            Self::ChallengeAi => "challenge-ai",
            Self::ChallengeOpen => "challenge-open",
            Self::AccountPlaying => "account-playing",
            Self::Account => "account",
        }
    }

    /// Whether the command carries a JSON body.
    pub const fn takes_json_body(&self) -> bool {
        matches!(self, Self::ChallengeAi | Self::ChallengeOpen)
    }
}

impl Route {
    /// Classify a request by method and path.
    pub fn classify(method: &Method, path: &str) -> Self {
        if method == Method::OPTIONS {
            return Self::Preflight;
        }
        let Some(segments) = split_path(path) else {
            return Self::NotFound;
        };
        let parts: Vec<&str> = segments.iter().map(String::as_str).collect();

        let command = match parts.as_slice() {
            ["stream", game_id] => Command::StreamOpen {
                game_id: (*game_id).to_string(),
            },
            ["move", game_id, mv] if method == Method::POST => Command::MoveSubmit {
                game_id: (*game_id).to_string(),
                mv: (*mv).to_string(),
            },
            ["challenge", "ai"] if method == Method::POST => Command::ChallengeAi,
            ["challenge", "open"] if method == Method::POST => Command::ChallengeOpen,
            ["account", "playing"] if method == Method::GET => Command::AccountPlaying,
            ["account"] if method == Method::GET => Command::Account,
            _ => return Self::NotFound,
        };
        Self::Command(command)
    }
}

/// Split an absolute path into decoded segments; `None` if any is empty or
/// not valid UTF-8.
fn split_path(path: &str) -> Option<Vec<String>> {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let rest = path.strip_prefix('/')?;
    rest.split('/')
        .map(|raw| {
            let decoded = percent_decode_str(raw).decode_utf8().ok()?;
            (!decoded.is_empty()).then(|| decoded.into_owned())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cmd(method: Method, path: &str) -> Route {
        Route::classify(&method, path)
    }

    #[test]
    fn move_submit_is_post_only() {
        assert_eq!(
            cmd(Method::POST, "/move/g1/e2e4"),
            Route::Command(Command::MoveSubmit {
                game_id: "g1".into(),
                mv: "e2e4".into(),
            })
        );
        assert_eq!(cmd(Method::GET, "/move/g1/e2e4"), Route::NotFound);
    }

    #[test]
    fn stream_accepts_any_method() {
        for method in [Method::GET, Method::POST, Method::HEAD] {
            assert_eq!(
                cmd(method, "/stream/AbCd1234"),
                Route::Command(Command::StreamOpen {
                    game_id: "AbCd1234".into()
                })
            );
        }
    }

    #[test]
    fn fixed_literals() {
        assert_eq!(
            cmd(Method::POST, "/challenge/ai"),
            Route::Command(Command::ChallengeAi)
        );
        assert_eq!(
            cmd(Method::POST, "/challenge/open"),
            Route::Command(Command::ChallengeOpen)
        );
        assert_eq!(
            cmd(Method::GET, "/account/playing"),
            Route::Command(Command::AccountPlaying)
        );
        assert_eq!(cmd(Method::GET, "/account"), Route::Command(Command::Account));
        assert_eq!(cmd(Method::GET, "/challenge/ai"), Route::NotFound);
        assert_eq!(cmd(Method::POST, "/account"), Route::NotFound);
    }

    #[test]
    fn options_is_preflight_on_any_path() {
        assert_eq!(cmd(Method::OPTIONS, "/move/g1/e2e4"), Route::Preflight);
        assert_eq!(cmd(Method::OPTIONS, "/nowhere"), Route::Preflight);
    }

    #[test]
    fn malformed_paths_do_not_match() {
        assert_eq!(cmd(Method::GET, "/stream/"), Route::NotFound);
        assert_eq!(cmd(Method::GET, "/stream"), Route::NotFound);
        assert_eq!(cmd(Method::GET, "/stream/g1/extra"), Route::NotFound);
        assert_eq!(cmd(Method::POST, "/move/g1"), Route::NotFound);
        assert_eq!(cmd(Method::POST, "/move//e2e4"), Route::NotFound);
        assert_eq!(cmd(Method::GET, "/account/"), Route::NotFound);
        assert_eq!(cmd(Method::GET, "stream/g1"), Route::NotFound);
        assert_eq!(cmd(Method::GET, "/"), Route::NotFound);
    }

    #[test]
    fn segments_are_percent_decoded() {
        assert_eq!(
            cmd(Method::POST, "/move/g1/e7e8%71"),
            Route::Command(Command::MoveSubmit {
                game_id: "g1".into(),
                mv: "e7e8q".into(),
            })
        );
        assert_eq!(cmd(Method::GET, "/stream/%FF"), Route::NotFound);
    }

    #[test]
    fn query_string_is_ignored() {
        assert_eq!(
            cmd(Method::GET, "/account?x=1"),
            Route::Command(Command::Account)
        );
    }

    #[test]
    fn operation_names() {
        assert_eq!(Command::ChallengeOpen.operation(), "challenge-open");
        assert!(Command::ChallengeAi.takes_json_body());
        assert!(!Command::Account.takes_json_body());
    }
}
