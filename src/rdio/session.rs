use std::io::{self, BufRead, Write};

use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::{
    Res, config, info,
    types::{BeginAuthResult, CompleteAuthResult, PlaylistsResult, RpcEnvelope},
    warning,
};

/// Authenticated handle on the Rdio service for one run.
///
/// Owns the HTTP client and the developer credentials, plus the access token
/// once the out-of-band handshake has completed. Constructed once at the
/// start of the workflow and passed by reference into every phase that talks
/// to Rdio; there is no global state.
pub struct RdioSession {
    client: Client,
    consumer_key: String,
    consumer_secret: String,
    access_token: Option<String>,
}

impl Default for RdioSession {
    fn default() -> Self {
        Self::new()
    }
}

impl RdioSession {
    pub fn new() -> Self {
        RdioSession {
            client: Client::new(),
            consumer_key: config::rdio_consumer_key(),
            consumer_secret: config::rdio_consumer_secret(),
            access_token: None,
        }
    }

    /// Issues one RPC call and decodes its envelope.
    ///
    /// Every Rdio operation goes through here: a form-encoded POST carrying
    /// the method name, the method parameters, and the consumer key, with
    /// the access token attached as a bearer credential once authorized.
    /// Application-level failures (including missing authorization) come
    /// back inside the envelope, not as transport errors.
    pub async fn call<T: DeserializeOwned>(
        &self,
        method: &str,
        params: &[(&str, String)],
    ) -> Result<RpcEnvelope<T>, reqwest::Error> {
        let mut form: Vec<(&str, String)> = vec![
            ("method", method.to_string()),
            ("consumer_key", self.consumer_key.clone()),
        ];
        form.extend(params.iter().cloned());

        let mut request = self.client.post(config::rdio_apiurl()).form(&form);
        if let Some(token) = &self.access_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        response.json::<RpcEnvelope<T>>().await
    }

    /// Makes sure the session may issue mutating calls.
    ///
    /// Probes with a lightweight `getPlaylists`; if the service reports an
    /// authorization error, runs the interactive out-of-band handshake. Only
    /// a refusal of the completed handshake propagates as fatal.
    pub async fn ensure_authorized(&mut self) -> Res<()> {
        let probe: RpcEnvelope<PlaylistsResult> = self.call("getPlaylists", &[]).await?;
        if probe.is_ok() {
            return Ok(());
        }

        self.authorize().await
    }

    /// Runs the out-of-band authorization handshake.
    ///
    /// Obtains an authorization URL, sends the user there, then blocks on a
    /// verification code typed at the terminal and exchanges it for an
    /// access token. The whole program pauses here; there is no timeout and
    /// no local limit on malformed codes beyond what the service rejects.
    async fn authorize(&mut self) -> Res<()> {
        let begin = self.begin_authentication().await?;

        if webbrowser::open(&begin.authorization_url).is_err() {
            warning!("Failed to open browser.");
        }
        println!("Go to: {}", begin.authorization_url);
        print!("Then enter the code: ");
        io::stdout().flush()?;

        let mut verifier = String::new();
        io::stdin().lock().read_line(&mut verifier)?;
        let verifier = verifier.trim();

        let completed = self
            .complete_authentication(&begin.request_token, verifier)
            .await?;
        self.access_token = Some(completed.access_token);

        info!("Authorization complete");
        Ok(())
    }

    async fn begin_authentication(&self) -> Res<BeginAuthResult> {
        let response = self
            .client
            .post(config::rdio_auth_begin_url())
            .form(&[
                ("consumer_key", self.consumer_key.as_str()),
                ("consumer_secret", self.consumer_secret.as_str()),
                ("oauth_callback", "oob"),
            ])
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json::<BeginAuthResult>().await?)
    }

    async fn complete_authentication(
        &self,
        request_token: &str,
        verifier: &str,
    ) -> Res<CompleteAuthResult> {
        let response = self
            .client
            .post(config::rdio_auth_complete_url())
            .form(&[
                ("consumer_key", self.consumer_key.as_str()),
                ("consumer_secret", self.consumer_secret.as_str()),
                ("request_token", request_token),
                ("verifier", verifier),
            ])
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json::<CompleteAuthResult>().await?)
    }
}
