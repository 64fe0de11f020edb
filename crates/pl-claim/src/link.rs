//! Proof links: a URL whose query carries the token.

use url::{form_urlencoded, Url};

use crate::claim::Claim;
use crate::config::LinkConfig;
use crate::error::{ClaimError, Result};

/// Put `token` into `base` as the only query parameter.
///
/// Any query already on `base` is dropped; the path and fragment are kept.
pub fn build_link(base: &str, token: &str, config: &LinkConfig) -> Result<Url> {
    let mut url = Url::parse(base).map_err(|e| ClaimError::InvalidLink(e.to_string()))?;
    url.set_query(None);
    url.query_pairs_mut().append_pair(&config.query_param, token);
    Ok(url)
}

/// Pull the token out of a full link.
pub fn token_from_link(link: &str, config: &LinkConfig) -> Result<String> {
    let url = Url::parse(link.trim()).map_err(|e| ClaimError::InvalidLink(e.to_string()))?;
    find_param(url.query_pairs(), &config.query_param)
        .ok_or_else(|| ClaimError::MissingToken(config.query_param.clone()))
}

/// Pull the token out of a bare query string, with or without the `?`.
pub fn token_from_query(query: &str, config: &LinkConfig) -> Option<String> {
    let query = query.trim().trim_start_matches('?');
    find_param(form_urlencoded::parse(query.as_bytes()), &config.query_param)
}

fn find_param<'a>(
    mut pairs: impl Iterator<Item = (std::borrow::Cow<'a, str>, std::borrow::Cow<'a, str>)>,
    name: &str,
) -> Option<String> {
    pairs
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
}

/// Message posted alongside a shared link.
pub fn share_text(claim: &Claim, link: &Url) -> String {
    format!("{}\nProof link: {}", claim.text, link)
}
