//! Resource URL allow-listing.
//!
//! A resource URL is kept only when it parses as an absolute URL whose host
//! contains one of [`TRUSTED_DOMAINS`]. Matching is substring containment,
//! not a domain-suffix match: `evil-youtube.com.attacker.net` is accepted.

use url::Url;

use super::model::LearningJourney;

/// Host substrings a resource URL may point to.
pub const TRUSTED_DOMAINS: [&str; 11] = [
    "youtube.com",
    "youtu.be",
    "coursera.org",
    "edx.org",
    "khanacademy.org",
    "ted.com",
    "nationalgeographic.com",
    "britannica.com",
    "nasa.gov",
    "pbs.org",
    "smithsonianmag.com",
];

/// Replacement for any URL that is not trusted.
pub const FALLBACK_RESOURCE_URL: &str = "https://www.khanacademy.org";

/// Whether `url` parses and its host contains a trusted substring.
pub fn is_trusted_url(url: &str) -> bool {
    let Ok(parsed) = Url::parse(url) else {
        return false;
    };
    parsed
        .host_str()
        .map(|host| TRUSTED_DOMAINS.iter().any(|domain| host.contains(domain)))
        .unwrap_or(false)
}

/// Returns `url` unchanged when trusted, otherwise the fallback URL.
pub fn sanitize_url(url: &str) -> String {
    if is_trusted_url(url) {
        url.to_string()
    } else {
        FALLBACK_RESOURCE_URL.to_string()
    }
}

/// Rewrites every untrusted resource URL in place.
///
/// An empty URL string is treated as "no URL" and removed. Returns the
/// number of URLs that were replaced with the fallback.
pub fn sanitize_resource_urls(journey: &mut LearningJourney) -> usize {
    let mut replaced = 0;

    for resource in &mut journey.resources {
        let Some(url) = resource.url.take() else {
            continue;
        };
        if url.is_empty() {
            continue;
        }
        if is_trusted_url(&url) {
            resource.url = Some(url);
        } else {
            tracing::warn!(
                resource = %resource.title,
                url = %url,
                "Replacing untrusted resource URL with fallback"
            );
            resource.url = Some(FALLBACK_RESOURCE_URL.to_string());
            replaced += 1;
        }
    }

    replaced
}
