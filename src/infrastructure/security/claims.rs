// src/infrastructure/security/claims.rs
use crate::application::{
    dto::AuthenticatedUser,
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::user::{Login, UserId};
use biscuit_auth::builder::{Fact, Predicate, Term};
use chrono::{DateTime, Utc};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Rebuilds the caller identity from the authority facts of a verified token.
pub fn parse_claims(facts: Vec<Fact>) -> ApplicationResult<AuthenticatedUser> {
    let ctx = ClaimsContext::from_facts(facts);

    let user_id = ctx
        .user_id
        .ok_or_else(|| ApplicationError::unauthorized("missing user id"))?;
    let login = ctx
        .login
        .ok_or_else(|| ApplicationError::unauthorized("missing login"))?;
    let issued_at = ctx
        .issued_at
        .ok_or_else(|| ApplicationError::unauthorized("missing issued_at"))?;
    let expires_at = ctx
        .expires_at
        .ok_or_else(|| ApplicationError::unauthorized("missing expires_at"))?;

    let id = UserId::new(user_id).map_err(|_| ApplicationError::unauthorized("invalid user id"))?;
    let login = Login::new(login).map_err(|_| ApplicationError::unauthorized("invalid login"))?;

    Ok(AuthenticatedUser {
        id,
        login,
        issued_at: DateTime::<Utc>::from(issued_at),
        expires_at: DateTime::<Utc>::from(expires_at),
    })
}

#[derive(Default)]
struct ClaimsContext {
    user_id: Option<i64>,
    login: Option<String>,
    issued_at: Option<SystemTime>,
    expires_at: Option<SystemTime>,
}

impl ClaimsContext {
    fn from_facts(facts: Vec<Fact>) -> Self {
        let mut ctx = ClaimsContext::default();
        for fact in facts {
            ctx.apply(fact.predicate);
        }
        ctx
    }

    fn apply(&mut self, predicate: Predicate) {
        match (predicate.name.as_str(), predicate.terms.as_slice()) {
            ("user", [Term::Integer(id), Term::Str(login)]) => {
                self.user_id = Some(*id);
                self.login = Some(login.clone());
            }
            ("issued_at", [Term::Date(secs)]) => self.issued_at = Some(from_epoch(*secs)),
            ("expires_at", [Term::Date(secs)]) => self.expires_at = Some(from_epoch(*secs)),
            _ => {}
        }
    }
}

fn from_epoch(seconds: u64) -> SystemTime {
    UNIX_EPOCH + Duration::from_secs(seconds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use biscuit_auth::builder::{date, fact, int, string};

    fn at(secs: u64) -> SystemTime {
        from_epoch(secs)
    }

    #[test]
    fn complete_fact_set_yields_user() {
        let facts = vec![
            fact("user", &[int(7), string("bob")]),
            fact("issued_at", &[date(&at(1_700_000_000))]),
            fact("expires_at", &[date(&at(1_700_003_600))]),
            fact("token_type", &[string("access")]),
        ];
        let user = parse_claims(facts).unwrap();
        assert_eq!(user.id, UserId(7));
        assert_eq!(user.login.as_str(), "bob");
        assert_eq!(user.expires_at.timestamp() - user.issued_at.timestamp(), 3600);
    }

    #[test]
    fn missing_user_fact_is_unauthorized() {
        let facts = vec![
            fact("issued_at", &[date(&at(1))]),
            fact("expires_at", &[date(&at(2))]),
        ];
        let err = parse_claims(facts).unwrap_err();
        assert!(matches!(err, ApplicationError::Unauthorized(msg) if msg == "missing user id"));
    }

    #[test]
    fn non_positive_user_id_is_rejected() {
        let facts = vec![
            fact("user", &[int(0), string("bob")]),
            fact("issued_at", &[date(&at(1))]),
            fact("expires_at", &[date(&at(2))]),
        ];
        assert!(parse_claims(facts).is_err());
    }
}
