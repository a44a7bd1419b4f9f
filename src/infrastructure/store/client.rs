use reqwest::{header, Method, RequestBuilder, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use url::Url;
use zeroize::Zeroizing;

use crate::{
    entities::session::{AccessToken, AuthSession, AuthUser, PasswordGrant},
    errors::StoreError,
    settings::AppConfig,
};
use super::query::Query;

const SINGLE_OBJECT: &str = "application/vnd.pgrst.object+json";
const PREFER: &str = "Prefer";

/// HTTP client for the hosted content store: PostgREST tables under
/// `/rest/v1` and the auth service under `/auth/v1`.
#[derive(Clone)]
pub struct StoreClient {
    http: reqwest::Client,
    base_url: Url,
    anon_key: Zeroizing<String>,
}

impl StoreClient {
    pub fn new(config: &AppConfig) -> Result<Self, StoreError> {
        Self::with_http(reqwest::Client::new(), &config.store_url, &config.store_anon_key)
    }

    pub fn with_http(http: reqwest::Client, base_url: &str, anon_key: &str) -> Result<Self, StoreError> {
        let mut base_url = Url::parse(base_url)?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Ok(StoreClient {
            http,
            base_url,
            anon_key: Zeroizing::new(anon_key.to_string()),
        })
    }

    // ───── Table access ─────────────────────────────────────────────

    /// All rows matching the query.
    pub async fn select<T: DeserializeOwned>(
        &self,
        query: &Query,
        token: Option<&AccessToken>,
    ) -> Result<Vec<T>, StoreError> {
        let url = self.table_url(query)?;
        let response = self.send(self.request(Method::GET, url, token)).await?;
        Ok(response.json().await?)
    }

    /// Exactly one row; zero rows is `StoreError::NotFound`.
    pub async fn select_single<T: DeserializeOwned>(
        &self,
        query: &Query,
        token: Option<&AccessToken>,
    ) -> Result<T, StoreError> {
        let url = self.table_url(query)?;
        let request = self.request(Method::GET, url, token)
            .header(header::ACCEPT, SINGLE_OBJECT);

        let response = request.send().await?;
        if response.status() == StatusCode::NOT_ACCEPTABLE {
            return Err(StoreError::NotFound);
        }
        let response = Self::check(response).await?;
        Ok(response.json().await?)
    }

    /// Count-only query: no rows are transferred.
    pub async fn count(&self, query: &Query, token: Option<&AccessToken>) -> Result<u64, StoreError> {
        let url = self.table_url(query)?;
        let request = self.request(Method::HEAD, url, token)
            .header(PREFER, "count=exact");

        let response = self.send(request).await?;
        let range = response
            .headers()
            .get(header::CONTENT_RANGE)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| StoreError::Decode("missing Content-Range header".into()))?;

        parse_content_range_total(range)
    }

    /// Inserts one row and returns it as stored.
    pub async fn insert<B, T>(
        &self,
        table: &'static str,
        body: &B,
        token: Option<&AccessToken>,
    ) -> Result<T, StoreError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.table_url(&Query::table_rows(table))?;
        let request = self.request(Method::POST, url, token)
            .header(PREFER, "return=representation")
            .header(header::ACCEPT, SINGLE_OBJECT)
            .json(body);

        let response = self.send(request).await?;
        Ok(response.json().await?)
    }

    /// Inserts one row without reading it back, for tables the caller may
    /// write to but not select from.
    pub async fn insert_minimal<B>(
        &self,
        table: &'static str,
        body: &B,
        token: Option<&AccessToken>,
    ) -> Result<(), StoreError>
    where
        B: Serialize + ?Sized,
    {
        let url = self.rest_url(table)?;
        let request = self.request(Method::POST, url, token)
            .header(PREFER, "return=minimal")
            .json(body);

        self.send(request).await.map(|_| ())
    }

    /// Updates the matching rows and returns them; no match is `NotFound`.
    pub async fn update<B, T>(
        &self,
        query: &Query,
        body: &B,
        token: Option<&AccessToken>,
    ) -> Result<Vec<T>, StoreError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.table_url(query)?;
        let request = self.request(Method::PATCH, url, token)
            .header(PREFER, "return=representation")
            .json(body);

        let rows: Vec<T> = self.send(request).await?.json().await?;
        if rows.is_empty() {
            return Err(StoreError::NotFound);
        }
        Ok(rows)
    }

    pub async fn delete(&self, query: &Query, token: Option<&AccessToken>) -> Result<(), StoreError> {
        let url = self.table_url(query)?;
        let request = self.request(Method::DELETE, url, token)
            .header(PREFER, "return=minimal");

        self.send(request).await.map(|_| ())
    }

    /// True when the REST endpoint answers at all.
    pub async fn ping(&self) -> Result<(), StoreError> {
        let url = self.base_url.join("rest/v1/")?;
        self.send(self.request(Method::GET, url, None)).await.map(|_| ())
    }

    // ───── Auth service ─────────────────────────────────────────────

    pub async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<AuthSession, StoreError> {
        let mut url = self.base_url.join("auth/v1/token")?;
        url.query_pairs_mut().append_pair("grant_type", "password");

        let request = self.request(Method::POST, url, None)
            .json(&PasswordGrant { email, password });

        Ok(self.send(request).await?.json().await?)
    }

    pub async fn get_user(&self, token: &AccessToken) -> Result<AuthUser, StoreError> {
        let url = self.base_url.join("auth/v1/user")?;
        let response = self.send(self.request(Method::GET, url, Some(token))).await?;
        Ok(response.json().await?)
    }

    pub async fn sign_out(&self, token: &AccessToken) -> Result<(), StoreError> {
        let url = self.base_url.join("auth/v1/logout")?;
        self.send(self.request(Method::POST, url, Some(token))).await.map(|_| ())
    }

    // ───── Plumbing ─────────────────────────────────────────────────

    fn rest_url(&self, table: &str) -> Result<Url, StoreError> {
        Ok(self.base_url.join("rest/v1/")?.join(table)?)
    }

    fn table_url(&self, query: &Query) -> Result<Url, StoreError> {
        let mut url = self.rest_url(query.table())?;
        url.query_pairs_mut().extend_pairs(query.params());
        Ok(url)
    }

    fn request(&self, method: Method, url: Url, token: Option<&AccessToken>) -> RequestBuilder {
        let bearer = token.map(AccessToken::as_str).unwrap_or(self.anon_key.as_str());
        self.http
            .request(method, url)
            .header("apikey", self.anon_key.as_str())
            .bearer_auth(bearer)
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, StoreError> {
        let response = request.send().await?;
        Self::check(response).await
    }

    async fn check(response: Response) -> Result<Response, StoreError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = error_message(&body)
            .unwrap_or_else(|| status.canonical_reason().unwrap_or("Request failed").to_string());

        tracing::debug!(status = status.as_u16(), %message, "Content store rejected request");
        Err(StoreError::Api { status: status.as_u16(), message })
    }
}

/// Pulls the human readable message out of a PostgREST or auth service error body.
fn error_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    ["message", "msg", "error_description", "error"]
        .iter()
        .find_map(|key| value.get(*key).and_then(Value::as_str))
        .map(String::from)
}

/// `Content-Range: 0-9/42` or `*/0` → 42 / 0.
fn parse_content_range_total(range: &str) -> Result<u64, StoreError> {
    range
        .rsplit_once('/')
        .and_then(|(_, total)| total.trim().parse::<u64>().ok())
        .ok_or_else(|| StoreError::Decode(format!("unexpected Content-Range: {}", range)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_range_totals() {
        assert_eq!(parse_content_range_total("0-9/42").unwrap(), 42);
        assert_eq!(parse_content_range_total("*/0").unwrap(), 0);
        assert!(parse_content_range_total("0-9/*").is_err());
    }

    #[test]
    fn error_messages_from_either_service() {
        assert_eq!(
            error_message(r#"{"code":"42501","message":"permission denied for table projects"}"#).as_deref(),
            Some("permission denied for table projects")
        );
        assert_eq!(
            error_message(r#"{"error":"invalid_grant","error_description":"Invalid login credentials"}"#).as_deref(),
            Some("Invalid login credentials")
        );
        assert_eq!(error_message("<html>bad gateway</html>"), None);
    }

    #[test]
    fn base_url_without_trailing_slash_keeps_its_path() {
        let client = StoreClient::with_http(reqwest::Client::new(), "https://demo.supabase.co/proxy", "key").unwrap();
        let url = client.table_url(&Query::table_rows("projects")).unwrap();
        assert_eq!(url.as_str(), "https://demo.supabase.co/proxy/rest/v1/projects?select=*");
    }
}
