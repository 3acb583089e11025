//! Expo push notification relay.
//!
//! Thin wrapper over the Expo push gateway: validate the token shape, post
//! the message, report the gateway's verdict. Failures are captured in the
//! returned outcome rather than propagated, so one bad token never aborts a
//! broadcast.

use serde::Serialize;
use serde_json::{json, Value};

use crate::models::User;

// ---

/// Result of a single push delivery attempt.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PushOutcome {
    // ---
    pub token: String,
    pub ok: bool,
    pub detail: Value,
}

/// Send a single push notification through the Expo gateway.
///
/// Tokens that do not look like Expo push tokens are rejected locally
/// without a network round trip.
pub async fn send_push(
    expo_push_url: &str,
    expo_push_token: &str,
    title: &str,
    body: &str,
    extra_data: Value,
) -> PushOutcome {
    // ---
    if !expo_push_token.starts_with("ExponentPushToken") {
        tracing::warn!("Invalid Expo push token: {}", expo_push_token);
        return PushOutcome {
            token: expo_push_token.to_string(),
            ok: false,
            detail: json!({ "error": "Invalid Expo push token" }),
        };
    }

    let message = json!({
        "to": expo_push_token,
        "sound": "default",
        "title": title,
        "body": body,
        "data": extra_data,
    });

    let client = reqwest::Client::new();
    let result = async {
        let response = client
            .post(expo_push_url)
            .header("Accept", "application/json")
            .json(&message)
            .send()
            .await?;
        response.json::<Value>().await
    }
    .await;

    match result {
        Ok(detail) => {
            tracing::info!("Notification sent: {}", detail);
            PushOutcome {
                token: expo_push_token.to_string(),
                ok: true,
                detail,
            }
        }
        Err(e) => {
            tracing::error!("Error sending notification: {}", e);
            PushOutcome {
                token: expo_push_token.to_string(),
                ok: false,
                detail: json!({ "error": e.to_string() }),
            }
        }
    }
}

/// Send a notification to every user that has a push token.
///
/// Users without a token are skipped. Deliveries run sequentially; each
/// outcome is collected so the caller can report per-user results.
pub async fn broadcast(
    expo_push_url: &str,
    users: &[User],
    title: &str,
    body: &str,
) -> Vec<PushOutcome> {
    // ---
    let mut outcomes = Vec::new();

    for user in users {
        let Some(token) = user.expo_push_token.as_deref() else {
            continue;
        };
        outcomes.push(
            send_push(
                expo_push_url,
                token,
                title,
                body,
                json!({ "userId": user.user_id }),
            )
            .await,
        );
    }

    outcomes
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;

    #[test]
    fn test_invalid_token_rejected_locally() {
        // ---
        let outcome = tokio_test::block_on(send_push(
            "http://localhost:0",
            "not-a-token",
            "t",
            "b",
            json!({}),
        ));

        assert!(!outcome.ok);
        assert_eq!(outcome.detail["error"], "Invalid Expo push token");
    }

    #[test]
    fn test_broadcast_skips_users_without_tokens() {
        // ---
        let users = vec![
            User {
                user_id: "u1".into(),
                name: None,
                email: None,
                expo_push_token: None,
                current_lat: None,
                current_lng: None,
                current_city: None,
                current_aqi: None,
            },
            User {
                user_id: "u2".into(),
                name: None,
                email: None,
                expo_push_token: Some("bogus".into()),
                current_lat: None,
                current_lng: None,
                current_city: None,
                current_aqi: None,
            },
        ];

        let outcomes = tokio_test::block_on(broadcast("http://localhost:0", &users, "t", "b"));

        // u1 has no token and is skipped; u2's malformed token fails locally.
        assert_eq!(outcomes.len(), 1);
        assert!(!outcomes[0].ok);
    }
}
