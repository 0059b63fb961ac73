use crate::api::config::Config;
use async_trait::async_trait;
use serde::Deserialize;

/// Provider-side view of a single attempted charge.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentIntent {
    pub intent_id: String,
    /// Secret handed to the client so it can confirm the charge directly
    /// with the provider; the server never sees raw card data.
    pub client_secret: String,
    pub amount_minor: i64,
    pub status: IntentStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntentStatus {
    RequiresAction,
    Processing,
    Succeeded,
    Failed,
}

impl IntentStatus {
    /// Maps the provider's status strings onto our coarser set.
    pub fn from_provider(s: &str) -> IntentStatus {
        match s {
            "succeeded" => IntentStatus::Succeeded,
            "processing" => IntentStatus::Processing,
            "canceled" | "payment_failed" => IntentStatus::Failed,
            _ => IntentStatus::RequiresAction,
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum GatewayError {
    RequestFailed,
    InvalidResponse,
    Rejected,
}

impl std::error::Error for GatewayError {}

impl std::fmt::Display for GatewayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GatewayError::RequestFailed => write!(f, "Gateway request failed"),
            GatewayError::InvalidResponse => write!(f, "Gateway returned an invalid response"),
            GatewayError::Rejected => write!(f, "Gateway rejected the request"),
        }
    }
}

/// Seam between the checkout flow and the external payment provider.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn create_intent(
        &self,
        amount_minor: i64,
        currency: &str,
        order_ref: &str,
    ) -> Result<PaymentIntent, GatewayError>;

    async fn retrieve_intent(&self, intent_id: &str) -> Result<PaymentIntent, GatewayError>;
}

#[derive(Deserialize)]
struct ProviderIntentResponse {
    id: String,
    client_secret: Option<String>,
    amount: i64,
    status: String,
}

/// Stripe-compatible HTTP gateway.
pub struct StripeGateway {
    client: reqwest::Client,
    secret_key: String,
    base_url: String,
}

impl StripeGateway {
    pub fn new(secret_key: String, base_url: String) -> Self {
        StripeGateway {
            client: reqwest::Client::new(),
            secret_key,
            base_url,
        }
    }

    pub fn from_config() -> Self {
        let config = Config::default();
        Self::new(config.stripe_secret_key.clone(), config.stripe_base_url.clone())
    }

    fn to_intent(&self, body: ProviderIntentResponse) -> PaymentIntent {
        PaymentIntent {
            intent_id: body.id,
            client_secret: body.client_secret.unwrap_or_default(),
            amount_minor: body.amount,
            status: IntentStatus::from_provider(&body.status),
        }
    }
}

#[async_trait]
impl PaymentGateway for StripeGateway {
    async fn create_intent(
        &self,
        amount_minor: i64,
        currency: &str,
        order_ref: &str,
    ) -> Result<PaymentIntent, GatewayError> {
        let amount = amount_minor.to_string();
        let params = [
            ("amount", amount.as_str()),
            ("currency", currency),
            ("metadata[order_id]", order_ref),
        ];

        let response = self
            .client
            .post(format!("{}/v1/payment_intents", self.base_url))
            .bearer_auth(&self.secret_key)
            .form(&params)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Payment intent request failed: {e}");
                GatewayError::RequestFailed
            })?;

        if !response.status().is_success() {
            tracing::error!(status = %response.status(), "Payment intent rejected");
            return Err(GatewayError::Rejected);
        }

        let body: ProviderIntentResponse = response
            .json()
            .await
            .map_err(|_| GatewayError::InvalidResponse)?;

        Ok(self.to_intent(body))
    }

    async fn retrieve_intent(&self, intent_id: &str) -> Result<PaymentIntent, GatewayError> {
        let response = self
            .client
            .get(format!("{}/v1/payment_intents/{}", self.base_url, intent_id))
            .bearer_auth(&self.secret_key)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Payment intent lookup failed: {e}");
                GatewayError::RequestFailed
            })?;

        if !response.status().is_success() {
            return Err(GatewayError::Rejected);
        }

        let body: ProviderIntentResponse = response
            .json()
            .await
            .map_err(|_| GatewayError::InvalidResponse)?;

        Ok(self.to_intent(body))
    }
}
