use reqwest::Url;

/// Returns `true` when `url`'s host sits on the platform media domain.
///
/// `host_suffix` is matched against the parsed host only, so
/// `https://evil.example/?x=.whatsapp.net` is not treated as hosted. The
/// match falls on a label boundary whether or not the suffix starts with a
/// dot, and the bare domain itself counts as hosted.
#[must_use]
pub fn is_hosted_media_url(url: &str, host_suffix: &str) -> bool {
    let Ok(parsed) = Url::parse(url) else {
        return false;
    };
    let Some(host) = parsed.host_str() else {
        return false;
    };
    let host = host.to_ascii_lowercase();
    let suffix = host_suffix.to_ascii_lowercase();
    let domain = suffix.trim_start_matches('.');
    if domain.is_empty() {
        return false;
    }

    host == domain
        || host
            .strip_suffix(domain)
            .is_some_and(|rest| rest.ends_with('.'))
}
