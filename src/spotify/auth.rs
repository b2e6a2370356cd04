use crate::{
    ChartError, Res,
    config::Credentials,
    types::{AccessToken, TokenResponse},
};

use super::SpotifyClient;

impl SpotifyClient {
    /// Exchanges client credentials for an access token.
    ///
    /// Performs a single `client_credentials` grant against the configured
    /// token endpoint and returns the `access_token` field of the response.
    /// The token is not cached; one run requests exactly one token.
    ///
    /// # Arguments
    ///
    /// * `credentials` - Client id and secret registered with Spotify
    ///
    /// # Errors
    ///
    /// - [`ChartError::Configuration`] if either credential is empty. No
    ///   request is made in that case.
    /// - [`ChartError::Authentication`] on network failure, a non-success
    ///   status or a response without `access_token`.
    ///
    /// # Example
    ///
    /// ```
    /// let client = SpotifyClient::from_env();
    /// let token = client.request_token(&Credentials::from_env()?).await?;
    /// ```
    pub async fn request_token(&self, credentials: &Credentials) -> Res<AccessToken> {
        credentials.validate()?;

        let res = self
            .http
            .post(&self.token_url)
            .form(&[
                ("grant_type", "client_credentials"),
                ("client_id", credentials.client_id.as_str()),
                ("client_secret", credentials.client_secret.as_str()),
            ])
            .send()
            .await
            .map_err(|e| ChartError::Authentication(e.to_string()))?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            return Err(ChartError::Authentication(format!(
                "token endpoint returned {}: {}",
                status, body
            )));
        }

        let json: TokenResponse = res
            .json()
            .await
            .map_err(|e| ChartError::Authentication(format!("malformed token response: {}", e)))?;

        Ok(AccessToken::new(json.access_token))
    }
}
