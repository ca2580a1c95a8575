//! Like-toggle handling for the heart buttons on cards.
//!
//! Each button carries its own in-flight flag, so toggling likes never
//! interferes with listing pagination.

use percent_encoding::percent_decode_str;
use serde::Serialize;

use crate::domain::like::{LikeRequest, LikeStatus};
use crate::domain::types::CampsiteId;
use crate::repository::LikeWriter;
use crate::repository::errors::{LikeError, LikeResult};

pub const LIKE_FAILED_MESSAGE: &str = "Sorry, we could not update your like right now.";
pub const CSRF_COOKIE: &str = "csrftoken";

/// State of one like affordance, mirroring its data attributes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LikeButton {
    pub campsite_id: CampsiteId,
    pub like_url: Option<String>,
    pub liked: bool,
    pub like_count: i64,
    pub auth_required: bool,
    pub loading: bool,
}

impl LikeButton {
    pub fn new(campsite_id: CampsiteId, liked: bool, like_count: i64) -> Self {
        Self {
            campsite_id,
            like_url: Some(format!("/api/campsites/{campsite_id}/like/")),
            liked,
            like_count,
            auth_required: false,
            loading: false,
        }
    }

    pub fn apply(&mut self, status: LikeStatus) {
        self.liked = status.is_liked;
        self.like_count = status.like_count;
    }

    pub fn classes(&self) -> HeartClasses {
        HeartClasses::for_state(self.liked)
    }
}

/// Class changes needed to show a liked or unliked heart.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct HeartClasses {
    pub button_color: &'static str,
    pub outline_hidden: bool,
    pub solid_hidden: bool,
}

impl HeartClasses {
    pub fn for_state(liked: bool) -> Self {
        Self {
            button_color: if liked { "text-rose-600" } else { "text-gray-500" },
            outline_hidden: liked,
            solid_hidden: !liked,
        }
    }
}

/// What the host should do after a click.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LikeAction {
    /// Navigate away to the login page.
    Redirect(String),
    /// Already in flight, or nothing to call.
    Skip,
    Send(LikeRequest),
}

/// Result of a completed toggle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LikeOutcome {
    Updated(LikeStatus),
    Redirect(String),
    /// User-visible failure message.
    Failed(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LikeToggler {
    login_url: String,
    /// Path and query of the current page, used as the `next` target.
    location: String,
    csrf_token: String,
}

impl LikeToggler {
    pub fn new(login_url: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            login_url: login_url.into(),
            location: location.into(),
            csrf_token: String::new(),
        }
    }

    /// Reads the CSRF token from a `Cookie` header value.
    #[must_use]
    pub fn with_cookies(mut self, cookie_header: &str) -> Self {
        self.csrf_token = csrf_from_cookies(cookie_header).unwrap_or_default();
        self
    }

    pub fn login_redirect(&self) -> String {
        let query = serde_html_form::to_string(vec![("next", self.location.as_str())])
            .unwrap_or_default();
        format!("{}?{query}", self.login_url)
    }

    pub fn begin(&self, button: &mut LikeButton) -> LikeAction {
        if button.auth_required {
            return LikeAction::Redirect(self.login_redirect());
        }
        if button.loading {
            return LikeAction::Skip;
        }
        let Some(url) = button.like_url.clone().filter(|u| !u.is_empty()) else {
            return LikeAction::Skip;
        };

        button.loading = true;
        LikeAction::Send(LikeRequest {
            url,
            csrf_token: self.csrf_token.clone(),
        })
    }

    pub fn complete(&self, button: &mut LikeButton, result: LikeResult<LikeStatus>) -> LikeOutcome {
        button.loading = false;
        match result {
            Ok(status) => {
                button.apply(status);
                LikeOutcome::Updated(status)
            }
            Err(LikeError::AuthRequired) => LikeOutcome::Redirect(self.login_redirect()),
            Err(err) => {
                log::error!("Failed to toggle like for campsite {}: {err}", button.campsite_id);
                LikeOutcome::Failed(LIKE_FAILED_MESSAGE.to_string())
            }
        }
    }

    /// Handles a click end to end through `writer`. `None` when the click was
    /// ignored.
    pub fn toggle<W>(&self, button: &mut LikeButton, writer: &W) -> Option<LikeOutcome>
    where
        W: LikeWriter + ?Sized,
    {
        match self.begin(button) {
            LikeAction::Redirect(url) => Some(LikeOutcome::Redirect(url)),
            LikeAction::Skip => None,
            LikeAction::Send(request) => {
                let result = writer.toggle_like(&request);
                Some(self.complete(button, result))
            }
        }
    }
}

/// Extracts the `csrftoken` value from a cookie header. The header is
/// percent-decoded before it is split.
pub fn csrf_from_cookies(cookie_header: &str) -> Option<String> {
    percent_decode_str(cookie_header)
        .decode_utf8_lossy()
        .split(';')
        .map(str::trim)
        .find_map(|pair| pair.strip_prefix(CSRF_COOKIE)?.strip_prefix('='))
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::mock::MockRepository;

    fn button() -> LikeButton {
        LikeButton::new(CampsiteId::new(5).unwrap(), false, 3)
    }

    fn toggler() -> LikeToggler {
        LikeToggler::new("/login/", "/campsites/?page=2")
            .with_cookies("sessionid=x; csrftoken=tok123")
    }

    #[test]
    fn reads_csrf_cookie() {
        assert_eq!(csrf_from_cookies("a=1; csrftoken=abc; b=2"), Some("abc".into()));
        assert_eq!(csrf_from_cookies("csrftokenx=1"), None);
        assert_eq!(csrf_from_cookies(""), None);
    }

    #[test]
    fn csrf_cookie_is_percent_decoded() {
        assert_eq!(
            csrf_from_cookies("theme=dark%3Bblue; csrftoken=a%2Bb%3D"),
            Some("a+b=".into())
        );
    }

    #[test]
    fn auth_required_redirects_without_request() {
        let mut repo = MockRepository::new();
        repo.expect_toggle_like().never();
        let mut btn = button();
        btn.auth_required = true;

        let outcome = toggler().toggle(&mut btn, &repo);

        assert_eq!(
            outcome,
            Some(LikeOutcome::Redirect(
                "/login/?next=%2Fcampsites%2F%3Fpage%3D2".into()
            ))
        );
        assert!(!btn.loading);
    }

    #[test]
    fn in_flight_button_is_skipped() {
        let mut btn = button();
        let toggler = toggler();

        assert!(matches!(toggler.begin(&mut btn), LikeAction::Send(_)));
        assert_eq!(toggler.begin(&mut btn), LikeAction::Skip);
    }

    #[test]
    fn success_updates_button() {
        let mut repo = MockRepository::new();
        repo.expect_toggle_like()
            .withf(|req| req.url == "/api/campsites/5/like/" && req.csrf_token == "tok123")
            .times(1)
            .returning(|_| {
                Ok(LikeStatus {
                    is_liked: true,
                    like_count: 4,
                })
            });
        let mut btn = button();

        let outcome = toggler().toggle(&mut btn, &repo);

        assert!(matches!(outcome, Some(LikeOutcome::Updated(_))));
        assert!(btn.liked);
        assert_eq!(btn.like_count, 4);
        assert!(!btn.loading);
        assert_eq!(btn.classes().button_color, "text-rose-600");
        assert!(btn.classes().outline_hidden);
    }

    #[test]
    fn forbidden_redirects_to_login() {
        let mut btn = button();
        let toggler = toggler();
        let _ = toggler.begin(&mut btn);

        let outcome = toggler.complete(&mut btn, Err(LikeError::AuthRequired));

        assert!(matches!(outcome, LikeOutcome::Redirect(url) if url.starts_with("/login/?next=")));
        assert!(!btn.loading);
    }

    #[test]
    fn failure_keeps_previous_state() {
        let mut repo = MockRepository::new();
        repo.expect_toggle_like()
            .times(1)
            .returning(|_| Err(LikeError::Status(500)));
        let mut btn = button();

        let outcome = toggler().toggle(&mut btn, &repo);

        assert_eq!(outcome, Some(LikeOutcome::Failed(LIKE_FAILED_MESSAGE.into())));
        assert!(!btn.liked);
        assert_eq!(btn.like_count, 3);
        assert!(!btn.loading);
    }
}
