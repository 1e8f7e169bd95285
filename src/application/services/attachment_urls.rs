//! Resolution of stored attachments into client-facing URLs.

use anyhow::{Result, bail};
use chrono::{DateTime, Utc};
use url::Url;

use crate::domain::entities::{Attachment, AttachmentKind, PublicAttachment};
use crate::utils::token_hash::hmac_sha256_hex;

/// Builds time-limited download URLs for uploaded files.
///
/// File URLs take the form
/// `{base}/attachments/{id}/download/{name}?expires={unix}&signature={hex}`
/// where the signature is HMAC-SHA256 over `"{id}:{expires}"`. Link
/// attachments pass their stored target through unchanged.
#[derive(Clone)]
pub struct AttachmentUrlSigner {
    base_url: Url,
    secret: String,
    ttl_seconds: i64,
}

impl AttachmentUrlSigner {
    /// # Errors
    ///
    /// Fails if `base_url` is not an absolute http(s) URL.
    pub fn new(base_url: &str, secret: impl Into<String>, ttl_seconds: u64) -> Result<Self> {
        let base_url = Url::parse(base_url)?;

        if !matches!(base_url.scheme(), "http" | "https") || base_url.cannot_be_a_base() {
            bail!("attachment base URL must be an http(s) URL, got '{}'", base_url);
        }

        Ok(Self {
            base_url,
            secret: secret.into(),
            ttl_seconds: i64::try_from(ttl_seconds).unwrap_or(i64::MAX),
        })
    }

    /// Replaces the storage key of `attachment` with an access URL valid
    /// from `now` for the configured TTL.
    pub fn resolve(&self, attachment: Attachment, now: DateTime<Utc>) -> PublicAttachment {
        let url = match attachment.kind {
            AttachmentKind::Link => attachment.data,
            AttachmentKind::File => {
                let expires = now.timestamp().saturating_add(self.ttl_seconds);
                self.file_url(attachment.id, &attachment.name, expires)
            }
        };

        PublicAttachment {
            id: attachment.id,
            card_id: attachment.card_id,
            kind: attachment.kind,
            name: attachment.name,
            url,
            created_at: attachment.created_at,
        }
    }

    /// Signature a download endpoint recomputes to verify a URL.
    pub fn signature(&self, attachment_id: i64, expires: i64) -> String {
        hmac_sha256_hex(&self.secret, &format!("{}:{}", attachment_id, expires))
    }

    fn file_url(&self, attachment_id: i64, name: &str, expires: i64) -> String {
        let mut url = self.base_url.clone();

        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend([
                "attachments",
                &attachment_id.to_string(),
                "download",
                name,
            ]);
        }

        url.query_pairs_mut()
            .append_pair("expires", &expires.to_string())
            .append_pair("signature", &self.signature(attachment_id, expires));

        url.to_string()
    }
}
