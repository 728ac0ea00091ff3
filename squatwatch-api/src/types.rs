//! Wire types for the flagged-domain API.

use serde::{Deserialize, Deserializer, Serialize};

/// One flagged domain as returned by `GET /dangerous-urls`.
///
/// Fields mirror the service's JSON shape: snake_case keys, with
/// `abuse_emails` and `owner_name` possibly absent when WHOIS collection
/// found nothing for the registrar or registrant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FlaggedDomain {
    /// Opaque unique identifier. The service emits it as a JSON integer,
    /// older deployments as a string; both are accepted.
    #[serde(deserialize_with = "deserialize_id")]
    pub domain_id: String,

    /// Full URL of the flagged domain, also its display text.
    pub url: String,

    /// Registrar of record, empty when unresolved.
    #[serde(default)]
    pub registrar_name: String,

    /// Registrar abuse contact address(es).
    #[serde(default)]
    pub abuse_emails: Option<String>,

    /// Registrant name from WHOIS.
    #[serde(default)]
    pub owner_name: Option<String>,

    /// Date the record was last refreshed, preformatted by the service
    /// (`DD.MM.YYYY`). Displayed verbatim.
    #[serde(default)]
    pub last_updated: String,
}

/// Deserializes an identifier from either a JSON string or a JSON integer.
fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum IdRepr {
        String(String),
        I64(i64),
        U64(u64),
    }

    Ok(match IdRepr::deserialize(deserializer)? {
        IdRepr::String(s) => s,
        IdRepr::I64(n) => n.to_string(),
        IdRepr::U64(n) => n.to_string(),
    })
}
