use crate::error::CoreError;

/// Server part of user jids and the default `to` of every catalog query.
pub const S_WHATSAPP_NET: &str = "s.whatsapp.net";

const LEGACY_USER_SERVER: &str = "c.us";

/// Reduces a jid to its user form: drops any `:device` / `_agent` suffix on
/// the user part and maps the legacy `c.us` server to [`S_WHATSAPP_NET`].
///
/// A jid without `@` is treated as a bare server name and returned as-is.
///
/// # Errors
///
/// Returns [`CoreError::InvalidJid`] when `jid` is empty or has an empty
/// user part before `@`.
pub fn normalize_user_jid(jid: &str) -> Result<String, CoreError> {
    let jid = jid.trim();
    if jid.is_empty() {
        return Err(CoreError::InvalidJid(jid.to_string()));
    }

    let Some((user_part, server)) = jid.split_once('@') else {
        return Ok(jid.to_string());
    };

    let user = user_part
        .split(':')
        .next()
        .and_then(|u| u.split('_').next())
        .unwrap_or_default();
    if user.is_empty() {
        return Err(CoreError::InvalidJid(jid.to_string()));
    }

    let server = if server == LEGACY_USER_SERVER {
        S_WHATSAPP_NET
    } else {
        server
    };

    Ok(format!("{user}@{server}"))
}
