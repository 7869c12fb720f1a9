use reqwest::Client;
use serde_json::json;

pub struct Tracking {
    pub webhook_url: String,
    pub site: String,
}

impl Tracking {
    /// Forwards one conversion event. Callers treat this as fire-and-forget;
    /// a delivery failure must never affect the signup that triggered it.
    pub async fn send(&self, event: &str, identifier: &str) -> Result<(), String> {
        if self.webhook_url.is_empty() {
            // Log but don't fail in development
            println!("Conversion event {event} for {identifier}");
            return Ok(());
        }

        let res = Client::new()
            .post(&self.webhook_url)
            .json(&json!({
                "site": self.site,
                "event": event,
                "identifier": identifier
            }))
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if res.status().is_success() {
            Ok(())
        } else {
            Err(res.text().await.unwrap_or_default())
        }
    }
}
