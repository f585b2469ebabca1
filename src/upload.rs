//! MediaWiki-style upload client for generated glyph files.
//!
//! Uses `ureq` for synchronous HTTP with its cookie store carrying the wiki
//! session. The flow is the standard MediaWiki action API handshake: fetch a
//! login token, log in, fetch a CSRF token, then send one multipart upload
//! request per artifact. Every failure is typed so the batch driver can log it
//! and move on; one artifact's failure never blocks the others.

use std::time::Duration;

use serde::Deserialize;

use crate::batch::GeneratedFile;
use crate::config::{UploadConfig, UploadSetting, apply_template};
use crate::error::UploadError;

const HTTP_TIMEOUT: Duration = Duration::from_secs(30);
const SVG_MIME: &str = "image/svg+xml";

// ---------------------------------------------------------------------------
// API response payloads
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    info: String,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    error: Option<ApiErrorBody>,
    query: Option<TokenQuery>,
}

#[derive(Debug, Deserialize)]
struct TokenQuery {
    tokens: TokenSet,
}

#[derive(Debug, Default, Deserialize)]
struct TokenSet {
    logintoken: Option<String>,
    csrftoken: Option<String>,
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    error: Option<ApiErrorBody>,
    login: Option<LoginOutcome>,
}

#[derive(Debug, Deserialize)]
struct LoginOutcome {
    result: Option<String>,
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    error: Option<ApiErrorBody>,
    upload: Option<UploadOutcome>,
}

#[derive(Debug, Deserialize)]
struct UploadOutcome {
    result: Option<String>,
    imageinfo: Option<ImageInfo>,
}

#[derive(Debug, Deserialize)]
struct ImageInfo {
    descriptionurl: Option<String>,
}

fn check_api_error(error: Option<ApiErrorBody>) -> Result<(), UploadError> {
    match error {
        Some(body) => Err(UploadError::Api { info: body.info }),
        None => Ok(()),
    }
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

/// Authenticated wiki upload session.
pub struct WikiClient {
    agent: ureq::Agent,
    config: UploadConfig,
    csrf_token: Option<String>,
}

impl WikiClient {
    pub fn new(config: UploadConfig) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(HTTP_TIMEOUT).build();
        Self {
            agent,
            config,
            csrf_token: None,
        }
    }

    /// Log in and fetch the CSRF token; required before any upload.
    pub fn login(&mut self) -> Result<(), UploadError> {
        let login_token = self.fetch_token("login")?;
        let response: LoginResponse = self.post_form(&[
            ("action", "login"),
            ("format", "json"),
            ("lgname", &self.config.username),
            ("lgpassword", &self.config.password),
            ("lgtoken", &login_token),
        ])?;
        check_api_error(response.error)?;

        let result = response
            .login
            .and_then(|login| login.result)
            .unwrap_or_else(|| "unknown response".into());
        if result != "Success" {
            return Err(UploadError::AuthFailure { result });
        }
        tracing::debug!(user = %self.config.username, "wiki login succeeded");

        self.csrf_token = Some(self.fetch_token("csrf")?);
        Ok(())
    }

    fn fetch_token(&self, kind: &str) -> Result<String, UploadError> {
        let response: TokenResponse = self.post_form(&[
            ("action", "query"),
            ("format", "json"),
            ("meta", "tokens"),
            ("type", kind),
        ])?;
        check_api_error(response.error)?;

        let tokens = response.query.map(|q| q.tokens).unwrap_or_default();
        let token = match kind {
            "login" => tokens.logintoken,
            _ => tokens.csrftoken,
        };
        token.ok_or_else(|| UploadError::TokenFailure { kind: kind.into() })
    }

    fn post_form<T: serde::de::DeserializeOwned>(
        &self,
        params: &[(&str, &str)],
    ) -> Result<T, UploadError> {
        let response = self
            .agent
            .post(&self.config.api_url)
            .send_form(params)
            .map_err(map_http_error)?;
        response
            .into_json()
            .map_err(|error| UploadError::TransportError {
                message: format!("malformed API response: {error}"),
            })
    }

    /// Upload one generated artifact; returns the wiki's description URL when
    /// it provides one.
    pub fn upload(&self, file: &GeneratedFile) -> Result<Option<String>, UploadError> {
        let csrf_token = self
            .csrf_token
            .as_deref()
            .ok_or_else(|| UploadError::TokenFailure { kind: "csrf".into() })?;

        let bytes = std::fs::read(&file.path).map_err(|source| UploadError::Io {
            path: file.path.clone(),
            source,
        })?;
        let basename = file
            .path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| file.token.clone());
        let context = [("basename", basename.as_str()), ("syllable", file.token.as_str())];

        let mut remote_name = apply_template(&self.config.filename_template, &context);
        if remote_name.is_empty() {
            remote_name = basename.clone();
        }

        let mut fields: Vec<(&str, String)> = vec![
            ("action", "upload".into()),
            ("format", "json".into()),
            ("filename", remote_name.clone()),
            ("token", csrf_token.into()),
        ];
        if !self.config.comment_template.is_empty() {
            fields.push(("comment", apply_template(&self.config.comment_template, &context)));
        }
        if let Some(text_template) = &self.config.text_template {
            fields.push(("text", apply_template(text_template, &context)));
        }
        if self.config.ignore_warnings {
            fields.push(("ignorewarnings", "1".into()));
        }

        let boundary = make_boundary();
        let body = multipart_body(&boundary, &fields, &remote_name, &bytes);
        let response = self
            .agent
            .post(&self.config.api_url)
            .set(
                "Content-Type",
                &format!("multipart/form-data; boundary={boundary}"),
            )
            .send_bytes(&body)
            .map_err(map_http_error)?;
        let response: UploadResponse =
            response
                .into_json()
                .map_err(|error| UploadError::TransportError {
                    message: format!("malformed API response: {error}"),
                })?;
        check_api_error(response.error)?;

        let outcome = response.upload.unwrap_or(UploadOutcome {
            result: None,
            imageinfo: None,
        });
        let result = outcome.result.unwrap_or_else(|| "unknown response".into());
        if result != "Success" {
            return Err(UploadError::UploadRejected { result });
        }

        let url = outcome.imageinfo.and_then(|info| info.descriptionurl);
        tracing::info!(remote = %remote_name, url = url.as_deref(), "uploaded artifact");
        Ok(url)
    }
}

fn map_http_error(error: ureq::Error) -> UploadError {
    match error {
        ureq::Error::Status(code, _) => UploadError::Api {
            info: format!("HTTP {code}"),
        },
        ureq::Error::Transport(transport) => UploadError::TransportError {
            message: transport.to_string(),
        },
    }
}

fn make_boundary() -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    format!("----zasocaravita{nanos:x}")
}

fn multipart_body(
    boundary: &str,
    fields: &[(&str, String)],
    filename: &str,
    file_bytes: &[u8],
) -> Vec<u8> {
    let mut body = Vec::with_capacity(file_bytes.len() + 512);
    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{boundary}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }
    body.extend_from_slice(
        format!(
            "--{boundary}\r\nContent-Disposition: form-data; name=\"file\"; \
             filename=\"{filename}\"\r\nContent-Type: {SVG_MIME}\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(file_bytes);
    body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());
    body
}

/// Drive the whole upload pass: log in once, upload every artifact, log and
/// count failures instead of aborting.
pub fn upload_generated(setting: &UploadSetting, files: &[GeneratedFile]) -> usize {
    let config = match setting {
        UploadSetting::Disabled { reason } => {
            tracing::info!(%reason, "wiki upload skipped");
            return 0;
        }
        UploadSetting::Enabled(config) => config.clone(),
    };
    if files.is_empty() {
        tracing::info!("no files generated to upload");
        return 0;
    }

    let mut client = WikiClient::new(config);
    if let Err(error) = client.login() {
        tracing::error!(%error, "wiki upload failed");
        return files.len();
    }

    let mut failures = 0;
    for file in files {
        if let Err(error) = client.upload(file) {
            tracing::error!(path = %file.path.display(), %error, "upload failed");
            failures += 1;
        }
    }
    if failures > 0 {
        tracing::error!(failures, "wiki upload completed with failures");
    }
    failures
}
