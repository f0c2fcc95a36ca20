//! Minimal URL handling for query-parameter navigation.
//!
//! Only the pieces navigation needs: split an href into base, query and
//! fragment, edit query parameters, and produce the relative
//! `path?query#fragment` form accepted by `history.replaceState`.

use std::borrow::Cow;
use std::fmt;

/// Ordered list of decoded query parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Parse a query string, with or without the leading `?`.
    ///
    /// Keys and values are percent-decoded and `+` is read as a space.
    /// Malformed escapes are kept as written.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let pairs = query
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| {
                let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
                (decode_component(key), decode_component(value))
            })
            .collect();
        Self { pairs }
    }

    /// First value for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Set `key` to `value`.
    ///
    /// Replaces the first occurrence in place and drops any later duplicates;
    /// appends when the key is absent.
    pub fn set(&mut self, key: &str, value: &str) {
        match self.pairs.iter().position(|(k, _)| k == key) {
            Some(index) => {
                self.pairs[index].1 = value.to_string();
                let mut seen = 0usize;
                self.pairs.retain(|(k, _)| {
                    if k != key {
                        return true;
                    }
                    seen += 1;
                    seen == 1
                });
            }
            None => self.pairs.push((key.to_string(), value.to_string())),
        }
    }

    /// Remove every occurrence of `key`.
    pub fn remove(&mut self, key: &str) {
        self.pairs.retain(|(k, _)| k != key);
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }
}

impl fmt::Display for QueryParams {
    /// Encoded form without the leading `?`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, (key, value)) in self.pairs.iter().enumerate() {
            if index > 0 {
                f.write_str("&")?;
            }
            write!(f, "{}={}", urlencoding::encode(key), urlencoding::encode(value))?;
        }
        Ok(())
    }
}

fn decode_component(raw: &str) -> String {
    let spaced: Cow<'_, str> = if raw.contains('+') {
        Cow::Owned(raw.replace('+', " "))
    } else {
        Cow::Borrowed(raw)
    };
    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => spaced.into_owned(),
    }
}

/// An href split into its navigation-relevant parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageUrl {
    /// Everything before `?` and `#` (scheme, authority and path)
    base: String,
    pub query: QueryParams,
    /// Fragment without `#`; empty fragments are dropped
    fragment: Option<String>,
}

impl PageUrl {
    pub fn parse(href: &str) -> Self {
        let (before_hash, fragment) = match href.split_once('#') {
            Some((rest, fragment)) if !fragment.is_empty() => (rest, Some(fragment.to_string())),
            Some((rest, _)) => (rest, None),
            None => (href, None),
        };
        let (base, query) = before_hash.split_once('?').unwrap_or((before_hash, ""));

        Self {
            base: base.to_string(),
            query: QueryParams::parse(query),
            fragment,
        }
    }

    /// Path component, `/` when the href has none.
    pub fn path(&self) -> &str {
        let path = match self.base.find("://") {
            Some(scheme_end) => {
                let rest = &self.base[scheme_end + 3..];
                rest.find('/').map(|slash| &rest[slash..]).unwrap_or("")
            }
            None => self.base.as_str(),
        };
        if path.is_empty() {
            "/"
        } else {
            path
        }
    }

    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }

    /// `path?query#fragment`, omitting empty parts.
    pub fn relative(&self) -> String {
        let mut out = self.path().to_string();
        if !self.query.is_empty() {
            out.push('?');
            out.push_str(&self.query.to_string());
        }
        if let Some(fragment) = &self.fragment {
            out.push('#');
            out.push_str(fragment);
        }
        out
    }
}

impl fmt::Display for PageUrl {
    /// The full href.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.base)?;
        if !self.query.is_empty() {
            write!(f, "?{}", self.query)?;
        }
        if let Some(fragment) = &self.fragment {
            write!(f, "#{}", fragment)?;
        }
        Ok(())
    }
}
