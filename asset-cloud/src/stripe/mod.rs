//! Stripe integration via REST API (no SDK dependency)

use serde::Deserialize;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Everything checkout needs to know about a package purchase
pub struct CheckoutParams<'a> {
    /// Amount in minor units (cents)
    pub amount: i64,
    /// Product label shown on the Stripe payment page
    pub label: &'a str,
    pub customer_email: &'a str,
    pub package_id: i64,
    pub package_name: &'a str,
    pub employee_limit: i64,
}

/// Checkout session metadata, round-tripped through the provider
///
/// Stripe metadata values are always strings; `package_id` and
/// `employee_limit` are parsed back out during reconciliation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SessionMetadata {
    #[serde(rename = "packageId")]
    pub package_id: Option<String>,
    #[serde(rename = "packageName")]
    pub package_name: Option<String>,
    #[serde(rename = "employeeLimit")]
    pub employee_limit: Option<String>,
}

/// Retrieved checkout session, the subset reconciliation needs
#[derive(Debug, Clone, Deserialize)]
pub struct CheckoutSession {
    pub id: String,
    /// "paid" | "unpaid" | "no_payment_required"
    #[serde(default)]
    pub payment_status: String,
    #[serde(default)]
    pub customer_email: Option<String>,
    #[serde(default)]
    pub amount_total: Option<i64>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub payment_intent: Option<String>,
    #[serde(default)]
    pub metadata: SessionMetadata,
}

impl CheckoutSession {
    pub fn is_paid(&self) -> bool {
        self.payment_status == "paid"
    }

    /// Package id from metadata, if present and well-formed
    pub fn package_id(&self) -> Option<i64> {
        self.metadata.package_id.as_deref()?.parse().ok()
    }

    /// Employee limit from metadata, defaulting to 0 like the frontend does
    pub fn employee_limit(&self) -> i64 {
        self.metadata
            .employee_limit
            .as_deref()
            .and_then(|v| v.parse().ok())
            .unwrap_or(0)
    }
}

/// Create a Stripe Checkout Session (one-off payment mode)
pub async fn create_checkout_session(
    secret_key: &str,
    site_domain: &str,
    params: &CheckoutParams<'_>,
) -> Result<String, BoxError> {
    let amount = params.amount.to_string();
    let package_id = params.package_id.to_string();
    let employee_limit = params.employee_limit.to_string();
    let success_url =
        format!("{site_domain}/hr-dashboard/payment-success?session_id={{CHECKOUT_SESSION_ID}}");
    let cancel_url = format!("{site_domain}/hr-dashboard/payment-cancel");

    let client = reqwest::Client::new();
    let resp: serde_json::Value = client
        .post("https://api.stripe.com/v1/checkout/sessions")
        .basic_auth(secret_key, None::<&str>)
        .form(&[
            ("mode", "payment"),
            ("payment_method_types[0]", "card"),
            ("line_items[0][price_data][currency]", "usd"),
            ("line_items[0][price_data][unit_amount]", amount.as_str()),
            ("line_items[0][price_data][product_data][name]", params.label),
            ("line_items[0][quantity]", "1"),
            ("customer_email", params.customer_email),
            ("metadata[packageId]", package_id.as_str()),
            ("metadata[packageName]", params.package_name),
            ("metadata[employeeLimit]", employee_limit.as_str()),
            ("success_url", success_url.as_str()),
            ("cancel_url", cancel_url.as_str()),
        ])
        .send()
        .await?
        .json()
        .await?;

    resp["url"]
        .as_str()
        .map(String::from)
        .ok_or_else(|| format!("Stripe create_checkout failed: {resp}").into())
}

/// Retrieve a Checkout Session by id
pub async fn retrieve_session(
    secret_key: &str,
    session_id: &str,
) -> Result<CheckoutSession, BoxError> {
    let client = reqwest::Client::new();
    let resp: serde_json::Value = client
        .get(format!(
            "https://api.stripe.com/v1/checkout/sessions/{session_id}"
        ))
        .basic_auth(secret_key, None::<&str>)
        .send()
        .await?
        .json()
        .await?;

    if resp.get("error").is_some() {
        return Err(format!("Stripe retrieve_session failed: {resp}").into());
    }

    Ok(serde_json::from_value(resp)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_json() -> serde_json::Value {
        serde_json::json!({
            "id": "cs_test_a1b2c3",
            "object": "checkout.session",
            "payment_status": "paid",
            "customer_email": "hr@acme.io",
            "amount_total": 190000,
            "currency": "usd",
            "payment_intent": "pi_3Nxy",
            "metadata": {
                "packageId": "73141520052187",
                "packageName": "Premium",
                "employeeLimit": "30"
            }
        })
    }

    #[test]
    fn parses_paid_session() {
        let session: CheckoutSession = serde_json::from_value(session_json()).unwrap();
        assert!(session.is_paid());
        assert_eq!(session.id, "cs_test_a1b2c3");
        assert_eq!(session.payment_intent.as_deref(), Some("pi_3Nxy"));
        assert_eq!(session.amount_total, Some(190000));
        assert_eq!(session.package_id(), Some(73141520052187));
        assert_eq!(session.employee_limit(), 30);
    }

    #[test]
    fn unpaid_session_is_not_paid() {
        let mut json = session_json();
        json["payment_status"] = "unpaid".into();
        let session: CheckoutSession = serde_json::from_value(json).unwrap();
        assert!(!session.is_paid());
    }

    #[test]
    fn missing_metadata_degrades_gracefully() {
        let json = serde_json::json!({
            "id": "cs_test_empty",
            "payment_status": "paid"
        });
        let session: CheckoutSession = serde_json::from_value(json).unwrap();
        assert_eq!(session.package_id(), None);
        assert_eq!(session.employee_limit(), 0);
        assert!(session.payment_intent.is_none());
    }

    #[test]
    fn malformed_package_id_is_none() {
        let mut json = session_json();
        json["metadata"]["packageId"] = "not-a-number".into();
        let session: CheckoutSession = serde_json::from_value(json).unwrap();
        assert_eq!(session.package_id(), None);
    }
}
