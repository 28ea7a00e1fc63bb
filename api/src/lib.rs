use reqwest::{Client, Method, RequestBuilder, StatusCode};
use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;
use serde_json::json;
use types::{
    ApiError, Config, Listing, PageQuery, Result,
    chart::ChartSeries,
    query::{ComplaintStatus, PaymentStatus, Status},
    records::{Ack, Complaint, Payment, User},
    session::{LoginRequest, LoginToken, Session},
    stats::{DashboardStats, DateRange},
};
use url::Url;

trait ReqwestExt {
    async fn try_send<T: DeserializeOwned>(self, session: &Session) -> Result<T>;
}

impl ReqwestExt for RequestBuilder {
    async fn try_send<T: DeserializeOwned>(self, session: &Session) -> Result<T> {
        let response = self.send().await.map_err(|error| {
            tracing::warn!(%error, "request failed without a response");
            ApiError::Network(error.to_string())
        })?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            tracing::warn!(url = %response.url(), "unauthorized, clearing stored credentials");
            session.sign_out();
            return Err(ApiError::Unauthorized);
        }
        if !status.is_success() {
            tracing::warn!(%status, url = %response.url(), "request failed");
            return Err(ApiError::Transport {
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|error| ApiError::Network(error.to_string()))?;

        serde_json::from_slice(&body).map_err(|error| {
            tracing::debug!(%error, "failed to parse response");
            ApiError::Decode(error.to_string())
        })
    }
}

/// Recorded as `processed_by` on payment reviews. The login token does not
/// carry an admin id, and the backend requires one.
pub const REVIEWER_ID: i64 = 1;

/// Client for the dashboard REST backend.
///
/// Every request carries the session's bearer token when one is stored. A 401
/// answer signs the session out before the error reaches the caller.
#[derive(Clone)]
pub struct AdminClient {
    client: Client,
    base_url: Url,
    session: Session,
}

impl AdminClient {
    pub fn new(config: &Config, session: Session) -> Self {
        Self {
            client: Client::new(),
            base_url: config.api_base_url.clone(),
            session,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn request(&self, method: Method, path: &str) -> Result<RequestBuilder> {
        let url = self
            .base_url
            .join(path.trim_start_matches('/'))
            .map_err(|_| ApiError::InvalidUrl(path.to_string()))?;
        tracing::debug!(%method, %url, "api request");

        let builder = self.client.request(method, url);
        Ok(match self.session.token() {
            Some(token) => builder.bearer_auth(token.expose_secret()),
            None => builder,
        })
    }

    fn get(&self, path: impl AsRef<str>) -> Result<RequestBuilder> {
        self.request(Method::GET, path.as_ref())
    }

    fn post(&self, path: impl AsRef<str>) -> Result<RequestBuilder> {
        self.request(Method::POST, path.as_ref())
    }

    fn put(&self, path: impl AsRef<str>) -> Result<RequestBuilder> {
        self.request(Method::PUT, path.as_ref())
    }

    pub async fn login(&self, username: &str, password: &str) -> Result<LoginToken> {
        self.post("/auth/login")?
            .json(&LoginRequest { username, password })
            .try_send(&self.session)
            .await
    }

    pub async fn dashboard_stats(&self, range: DateRange) -> Result<DashboardStats> {
        self.get("/dashboard/stats")?
            .query(&[("range_type", range.as_str())])
            .try_send(&self.session)
            .await
    }

    /// Fetch one page of any listing.
    pub async fn list<R: Listing>(&self, query: &PageQuery<R::Filter>) -> Result<Vec<R>> {
        self.get(R::PATH)?
            .query(&query.query_pairs())
            .try_send(&self.session)
            .await
    }

    pub async fn list_users(&self, query: &PageQuery<<User as Listing>::Filter>) -> Result<Vec<User>> {
        self.list(query).await
    }

    pub async fn list_payments(
        &self,
        query: &PageQuery<<Payment as Listing>::Filter>,
    ) -> Result<Vec<Payment>> {
        self.list(query).await
    }

    pub async fn list_complaints(
        &self,
        query: &PageQuery<<Complaint as Listing>::Filter>,
    ) -> Result<Vec<Complaint>> {
        self.list(query).await
    }

    pub async fn update_payment_status(
        &self,
        payment_id: &str,
        status: PaymentStatus,
        admin_notes: Option<&str>,
    ) -> Result<Ack> {
        self.put(format!("/payments/{payment_id}"))?
            .json(&json!({
                "status": status.as_str(),
                "admin_notes": admin_notes,
                "processed_by": REVIEWER_ID,
            }))
            .try_send(&self.session)
            .await
    }

    pub async fn update_complaint_status(
        &self,
        complaint_id: &str,
        status: ComplaintStatus,
    ) -> Result<Ack> {
        self.put(format!("/complaints/{complaint_id}"))?
            .query(&[("status", status.as_str())])
            .try_send(&self.session)
            .await
    }

    pub async fn gender_distribution(&self) -> Result<ChartSeries> {
        self.get("/charts/gender-distribution")?
            .try_send(&self.session)
            .await
    }

    pub async fn registrations(&self, days: u32) -> Result<ChartSeries> {
        self.get("/charts/registrations")?
            .query(&[("days", days)])
            .try_send(&self.session)
            .await
    }
}
