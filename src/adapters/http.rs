use crate::core::response::decode_item;
use crate::domain::ports::{ConfigProvider, HttpMethod, PlankaRequest};
use crate::utils::error::{PlankaError, Result};
use async_trait::async_trait;
use reqwest::{Client, Method};
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::OnceCell;

impl From<HttpMethod> for Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Patch => Method::PATCH,
            HttpMethod::Delete => Method::DELETE,
        }
    }
}

struct Login {
    username: String,
    password: String,
}

struct Inner {
    client: Client,
    base_url: String,
    login: Option<Login>,
    token: OnceCell<String>,
}

/// 以 reqwest 實作的 Planka 請求；可廉價複製，共用連線池與 token
#[derive(Clone)]
pub struct HttpTransport {
    inner: Arc<Inner>,
}

impl HttpTransport {
    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds()))
            .build()?;

        let login = match (config.username(), config.password()) {
            (Some(username), Some(password)) => Some(Login {
                username: username.to_string(),
                password: password.to_string(),
            }),
            _ => None,
        };

        if config.access_token().is_none() && login.is_none() {
            return Err(PlankaError::MissingConfigError {
                field: "access_token or username/password".to_string(),
            });
        }

        Ok(Self {
            inner: Arc::new(Inner {
                client,
                base_url: config.base_url().trim_end_matches('/').to_string(),
                login,
                token: OnceCell::new_with(config.access_token().map(str::to_string)),
            }),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.inner.base_url, path)
    }

    /// 取得 token；首次呼叫時登入，之後重複使用
    async fn token(&self) -> Result<&str> {
        let token = self
            .inner
            .token
            .get_or_try_init(|| self.login())
            .await?;
        Ok(token.as_str())
    }

    async fn login(&self) -> Result<String> {
        let login = self
            .inner
            .login
            .as_ref()
            .ok_or_else(|| PlankaError::AuthenticationError {
                message: "No credentials configured".to_string(),
            })?;

        tracing::debug!("🔑 Requesting access token for {}", login.username);
        let response = self
            .inner
            .client
            .post(self.url("/api/access-tokens"))
            .json(&json!({
                "emailOrUsername": login.username,
                "password": login.password,
            }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PlankaError::AuthenticationError {
                message: format!("HTTP {}: {}", status.as_u16(), body),
            });
        }

        let value: Value = response.json().await?;
        Ok(decode_item::<String>("AccessTokenResponse", value)?)
    }
}

#[async_trait]
impl PlankaRequest for HttpTransport {
    async fn request(&self, method: HttpMethod, path: &str, body: Option<Value>) -> Result<Value> {
        let token = self.token().await?;

        tracing::debug!("➡️ {:?} {}", method, path);
        let mut request = self
            .inner
            .client
            .request(Method::from(method), self.url(path))
            .bearer_auth(token);

        if let Some(body) = &body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        tracing::debug!("⬅️ {:?} {} -> {}", method, path, status);

        let text = response.text().await?;
        if !status.is_success() {
            return Err(PlankaError::HttpStatusError {
                status: status.as_u16(),
                message: text,
            });
        }

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&text)?)
    }
}
