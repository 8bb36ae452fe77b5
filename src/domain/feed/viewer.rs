use crate::domain::advert::Advert;
use crate::domain::user::Login;

/// Who is looking at the feed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewerContext {
    #[default]
    Anonymous,
    Authenticated { login: Login },
}

impl ViewerContext {
    pub fn authenticated(login: Login) -> Self {
        Self::Authenticated { login }
    }

    pub fn login(&self) -> Option<&Login> {
        match self {
            ViewerContext::Anonymous => None,
            ViewerContext::Authenticated { login } => Some(login),
        }
    }

    pub fn is_author_of(&self, advert: &Advert) -> bool {
        self.login().is_some_and(|login| advert.is_authored_by(login))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::feed::fixtures::advert;

    #[test]
    fn anonymous_never_owns_anything() {
        let viewer = ViewerContext::Anonymous;
        assert!(!viewer.is_author_of(&advert(1, 10, 0, "robert")));
        assert!(viewer.login().is_none());
    }

    #[test]
    fn authenticated_owns_only_own_adverts() {
        let viewer = ViewerContext::authenticated(Login::new("robert").unwrap());
        assert!(viewer.is_author_of(&advert(1, 10, 0, "robert")));
        assert!(!viewer.is_author_of(&advert(2, 10, 0, "alice1")));
    }
}
