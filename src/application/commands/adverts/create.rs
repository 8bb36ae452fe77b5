// src/application/commands/adverts/create.rs
use super::AdvertCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, CreatedAdvertDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        advert::{AdvertBody, AdvertHeader, NewAdvert, Price},
        errors::{DomainError, DomainResult},
    },
};

pub struct CreateAdvertCommand {
    pub header: String,
    pub body: Option<String>,
    pub price: i64,
    pub image_url: Option<String>,
}

/// Keeps the value, or records the validation message and yields `None`.
fn collect<T>(result: DomainResult<T>, violations: &mut Vec<String>) -> ApplicationResult<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(DomainError::Validation(msg)) => {
            violations.push(msg);
            Ok(None)
        }
        Err(other) => Err(other.into()),
    }
}

impl AdvertCommandService {
    pub async fn create_advert(
        &self,
        actor: &AuthenticatedUser,
        command: CreateAdvertCommand,
    ) -> ApplicationResult<CreatedAdvertDto> {
        let mut violations = Vec::new();

        let header = collect(AdvertHeader::new(command.header), &mut violations)?;
        let body = collect(
            AdvertBody::new(command.body.unwrap_or_default()),
            &mut violations,
        )?;
        let price = if command.price == 0 {
            violations.push("price is required".into());
            None
        } else {
            collect(Price::new(command.price), &mut violations)?
        };

        let image_url = command.image_url.filter(|url| !url.trim().is_empty());
        if let Some(url) = image_url.as_deref() {
            match self.image_validator.validate(url).await {
                Ok(()) => {}
                Err(ApplicationError::Validation(msg)) => violations.push(msg),
                Err(other) => {
                    tracing::error!(error = %other, "image check failed");
                    return Err(ApplicationError::infrastructure("internal error"));
                }
            }
        }

        let (Some(header), Some(body), Some(price), true) =
            (header, body, price, violations.is_empty())
        else {
            tracing::info!(violations = ?violations, "invalid advert");
            return Err(ApplicationError::validation(violations.join(", ")));
        };

        let new_advert = NewAdvert {
            header,
            body,
            image_url,
            price,
            created_at: self.clock.now(),
            author: actor.login.clone(),
        };

        let created = self.write_repo.insert(new_advert).await.map_err(|err| {
            tracing::error!(error = %err, "error saving advert");
            ApplicationError::infrastructure("error saving advert")
        })?;

        tracing::info!(id = i64::from(created.id), author = %created.author, "advert saved");
        Ok(created.into())
    }
}
