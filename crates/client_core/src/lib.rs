use reqwest::Client;
use serde::{de::DeserializeOwned, Serialize};
use shared::{
    domain::{
        Article, BusinessService, Category, CategoryId, CompanyInfo, Developer, Project, Service,
        Webinar,
    },
    error::ApiError,
    protocol::{ContactSubmission, ListEnvelope, SubmissionAck, WebinarRegistration},
};
use tracing::debug;
use url::Url;

pub mod aggregator;
pub mod config;
pub mod display;
pub mod error;
pub mod view_state;

pub use error::FetchError;

#[cfg(test)]
mod tests;

/// Marker value the contact form uses for "other, let me describe it".
/// Submissions must replace it with real text before they go out.
const CUSTOM_TIMELINE_SENTINEL: &str = "custom";

/// HTTP client for the content backend. Single-attempt semantics throughout:
/// no retries, no timeouts beyond the transport's own, no caching.
#[derive(Debug)]
pub struct SiteClient {
    http: Client,
    base_url: String,
}

impl SiteClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, FetchError> {
        let base_url = base_url.into();
        let base_url = base_url.trim_end_matches('/').to_string();
        Url::parse(&base_url).map_err(|err| FetchError::Validation {
            field: "base_url",
            message: err.to_string(),
        })?;
        Ok(Self {
            http: Client::new(),
            base_url,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        debug!(path, "get");
        let response = self
            .http
            .get(format!("{}{path}", self.base_url))
            .send()
            .await
            .map_err(FetchError::from)?
            .error_for_status()
            .map_err(FetchError::from)?;
        response.json().await.map_err(FetchError::from)
    }

    /// List fetch with envelope normalization at the boundary; see
    /// [`ListEnvelope`].
    async fn get_list<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, FetchError> {
        let envelope: ListEnvelope<T> = self.get_json(path).await?;
        Ok(envelope.into_items())
    }

    /// Detail fetch keyed by slug; a 404 becomes a typed `NotFound` so pages
    /// can distinguish "absent" from "broken".
    async fn get_detail<T: DeserializeOwned>(
        &self,
        path: &str,
        entity: &'static str,
        slug: &str,
    ) -> Result<T, FetchError> {
        debug!(path, entity, slug, "get detail");
        let response = self
            .http
            .get(format!("{}{path}", self.base_url))
            .send()
            .await
            .map_err(FetchError::from)?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(FetchError::NotFound {
                entity,
                slug: slug.to_string(),
            });
        }
        let response = response.error_for_status().map_err(FetchError::from)?;
        response.json().await.map_err(FetchError::from)
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, FetchError> {
        debug!(path, "post");
        let response = self
            .http
            .post(format!("{}{path}", self.base_url))
            .json(body)
            .send()
            .await
            .map_err(FetchError::from)?;
        let status = response.status();
        if !status.is_success() {
            // Surface the backend's inline message when it sent one.
            let detail = response
                .json::<ApiError>()
                .await
                .ok()
                .map(|api_err| api_err.message);
            return Err(FetchError::Http {
                status: status.as_u16(),
                detail,
            });
        }
        response.json().await.map_err(FetchError::from)
    }

    pub async fn list_categories(&self) -> Result<Vec<Category>, FetchError> {
        self.get_list("/categories/").await
    }

    pub async fn list_category_services(
        &self,
        category: CategoryId,
    ) -> Result<Vec<Service>, FetchError> {
        self.get_list(&format!("/categories/{}/services/", category.0))
            .await
    }

    pub async fn list_services(&self) -> Result<Vec<Service>, FetchError> {
        self.get_list("/services/").await
    }

    pub async fn service_detail(&self, slug: &str) -> Result<Service, FetchError> {
        self.get_detail(&format!("/services/{slug}/"), "service", slug)
            .await
    }

    pub async fn list_business_services(&self) -> Result<Vec<BusinessService>, FetchError> {
        self.get_list("/business-services/").await
    }

    pub async fn business_service_detail(
        &self,
        slug: &str,
    ) -> Result<BusinessService, FetchError> {
        self.get_detail(&format!("/business-services/{slug}/"), "business service", slug)
            .await
    }

    pub async fn list_projects(&self) -> Result<Vec<Project>, FetchError> {
        self.get_list("/projects/").await
    }

    pub async fn project_detail(&self, slug: &str) -> Result<Project, FetchError> {
        self.get_detail(&format!("/projects/{slug}/"), "project", slug)
            .await
    }

    pub async fn list_articles(&self) -> Result<Vec<Article>, FetchError> {
        self.get_list("/articles/").await
    }

    pub async fn article_detail(&self, slug: &str) -> Result<Article, FetchError> {
        self.get_detail(&format!("/articles/{slug}/"), "article", slug)
            .await
    }

    pub async fn list_webinars(&self) -> Result<Vec<Webinar>, FetchError> {
        self.get_list("/webinars/").await
    }

    pub async fn webinar_detail(&self, slug: &str) -> Result<Webinar, FetchError> {
        self.get_detail(&format!("/webinars/{slug}/"), "webinar", slug)
            .await
    }

    pub async fn company_info(&self) -> Result<CompanyInfo, FetchError> {
        self.get_json("/contact/company-info/").await
    }

    pub async fn list_developers(&self) -> Result<Vec<Developer>, FetchError> {
        self.get_list("/developers/").await
    }

    /// Registers for a webinar. Validates locally first so a rejected form
    /// never costs a round trip; the caller keeps the typed-in values either
    /// way. The backend path spelling is historical.
    pub async fn register_for_webinar(
        &self,
        registration: &WebinarRegistration,
    ) -> Result<SubmissionAck, FetchError> {
        validate_registration(registration)?;
        self.post_json("/Webnar-register/", registration).await
    }

    /// Submits the contact form. The phone number is normalized with the
    /// configured default country code before it goes out.
    pub async fn submit_contact(
        &self,
        submission: &ContactSubmission,
    ) -> Result<SubmissionAck, FetchError> {
        validate_contact(submission)?;
        let submission = ContactSubmission {
            phone: normalize_phone(&submission.phone, config::DEFAULT_COUNTRY_CODE),
            ..submission.clone()
        };
        self.post_json("/contact/client/", &submission).await
    }
}

/// Prefixes the default country code when the caller typed a bare national
/// number. Numbers that already carry a `+` prefix pass through untouched.
pub fn normalize_phone(raw: &str, country_code: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.starts_with('+') {
        trimmed.to_string()
    } else {
        format!("{country_code}{trimmed}")
    }
}

fn require_field(value: &str, field: &'static str) -> Result<(), FetchError> {
    if value.trim().is_empty() {
        return Err(FetchError::Validation {
            field,
            message: "must not be empty".to_string(),
        });
    }
    Ok(())
}

fn require_email(value: &str, field: &'static str) -> Result<(), FetchError> {
    require_field(value, field)?;
    if !value.contains('@') {
        return Err(FetchError::Validation {
            field,
            message: "must be a valid email address".to_string(),
        });
    }
    Ok(())
}

pub fn validate_registration(registration: &WebinarRegistration) -> Result<(), FetchError> {
    require_field(&registration.username, "username")?;
    require_email(&registration.email, "email")?;
    require_field(&registration.phone_number, "phone_number")
}

pub fn validate_contact(submission: &ContactSubmission) -> Result<(), FetchError> {
    require_field(&submission.name, "name")?;
    require_email(&submission.email, "email")?;
    require_field(&submission.phone, "phone")?;
    require_field(&submission.project_timeline, "project_timeline")?;
    if submission
        .project_timeline
        .trim()
        .eq_ignore_ascii_case(CUSTOM_TIMELINE_SENTINEL)
    {
        return Err(FetchError::Validation {
            field: "project_timeline",
            message: "describe the custom timeline instead of submitting the placeholder"
                .to_string(),
        });
    }
    require_field(&submission.message, "message")
}
