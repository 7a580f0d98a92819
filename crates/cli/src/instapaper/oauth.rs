// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! OAuth 1.0a request signing (HMAC-SHA1) and xAuth token parsing.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use hmac::{Hmac, Mac};
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use rand::distributions::Alphanumeric;
use rand::Rng;
use sha1::Sha1;

use shelf_core::{RemoteError, RemoteResult};

/// RFC 3986 unreserved characters pass through; everything else is encoded.
const ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

const NONCE_LEN: usize = 32;

pub fn encode(s: &str) -> String {
    utf8_percent_encode(s, ENCODE_SET).to_string()
}

/// An access token obtained through xAuth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub key: String,
    pub secret: String,
}

/// Signs requests with the consumer credentials and, once logged in, the access token.
#[derive(Clone)]
pub struct Signer {
    consumer_key: String,
    consumer_secret: String,
    token: Option<Token>,
}

impl Signer {
    pub fn new(consumer_key: impl Into<String>, consumer_secret: impl Into<String>) -> Self {
        Signer {
            consumer_key: consumer_key.into(),
            consumer_secret: consumer_secret.into(),
            token: None,
        }
    }

    pub fn with_token(mut self, token: Token) -> Self {
        self.token = Some(token);
        self
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    /// Builds the `Authorization` header for a request with a fresh nonce and timestamp.
    ///
    /// `params` are the form parameters sent in the request body; they take
    /// part in the signature.
    pub fn authorization(
        &self,
        method: &str,
        url: &str,
        params: &[(&str, &str)],
    ) -> RemoteResult<String> {
        let nonce: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(NONCE_LEN)
            .map(char::from)
            .collect();
        let timestamp = chrono::Utc::now().timestamp().to_string();
        self.authorization_at(method, url, params, &nonce, &timestamp)
    }

    pub fn authorization_at(
        &self,
        method: &str,
        url: &str,
        params: &[(&str, &str)],
        nonce: &str,
        timestamp: &str,
    ) -> RemoteResult<String> {
        let mut oauth: Vec<(&str, &str)> = vec![
            ("oauth_consumer_key", self.consumer_key.as_str()),
            ("oauth_nonce", nonce),
            ("oauth_signature_method", "HMAC-SHA1"),
            ("oauth_timestamp", timestamp),
            ("oauth_version", "1.0"),
        ];
        if let Some(token) = &self.token {
            oauth.push(("oauth_token", token.key.as_str()));
        }

        let mut signed = oauth.clone();
        signed.extend_from_slice(params);
        let signature = self.signature(&base_string(method, url, &signed))?;

        oauth.push(("oauth_signature", signature.as_str()));
        oauth.sort();
        let fields: Vec<String> = oauth
            .iter()
            .map(|(k, v)| format!("{}=\"{}\"", k, encode(v)))
            .collect();
        Ok(format!("OAuth {}", fields.join(", ")))
    }

    fn signature(&self, base: &str) -> RemoteResult<String> {
        let token_secret = self
            .token
            .as_ref()
            .map(|t| encode(&t.secret))
            .unwrap_or_default();
        let key = format!("{}&{}", encode(&self.consumer_secret), token_secret);
        let mut mac = Hmac::<Sha1>::new_from_slice(key.as_bytes())
            .map_err(|e| RemoteError::Auth(format!("signing key rejected: {e}")))?;
        mac.update(base.as_bytes());
        Ok(STANDARD.encode(mac.finalize().into_bytes()))
    }
}

/// Signature base string: method, URL and the sorted, encoded parameters.
pub fn base_string(method: &str, url: &str, params: &[(&str, &str)]) -> String {
    let mut pairs: Vec<(String, String)> = params
        .iter()
        .map(|(k, v)| (encode(k), encode(v)))
        .collect();
    pairs.sort();
    let normalized: Vec<String> = pairs.iter().map(|(k, v)| format!("{k}={v}")).collect();
    format!(
        "{}&{}&{}",
        method.to_ascii_uppercase(),
        encode(url),
        encode(&normalized.join("&"))
    )
}

/// Parses an `oauth_token=...&oauth_token_secret=...` response body.
pub fn parse_token(body: &str) -> RemoteResult<Token> {
    let mut key = None;
    let mut secret = None;
    for pair in body.trim().split('&') {
        let Some((name, value)) = pair.split_once('=') else {
            continue;
        };
        let value = percent_decode_str(value)
            .decode_utf8()
            .map_err(|e| RemoteError::Decode(e.to_string()))?
            .into_owned();
        match name {
            "oauth_token" => key = Some(value),
            "oauth_token_secret" => secret = Some(value),
            _ => {}
        }
    }
    match (key, secret) {
        (Some(key), Some(secret)) => Ok(Token { key, secret }),
        _ => Err(RemoteError::Auth(format!(
            "unexpected token response: {}",
            body.trim()
        ))),
    }
}

#[cfg(test)]
#[path = "oauth_tests.rs"]
mod tests;
