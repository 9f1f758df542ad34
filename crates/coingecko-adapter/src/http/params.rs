/*
[INPUT]:  Request descriptor fields and `{name}` path templates
[OUTPUT]: Rendered query pairs and substituted path segments
[POS]:    HTTP layer - parameter rendering shared by all endpoints
[UPDATE]: When changing how values are rendered onto the wire
*/

use std::fmt::Display;

use crate::http::{GeckoError, Result};

/// Path placeholder name paired with its replacement value
pub type PathParams<'a> = [(&'a str, &'a str)];

/// Ordered query parameters for a single call.
///
/// Absent options, empty strings and empty lists never reach the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(&'static str, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn required(self, name: &'static str, value: impl Display) -> Self {
        self.push(name, value.to_string())
    }

    pub fn optional<T: Display>(self, name: &'static str, value: Option<T>) -> Self {
        match value {
            Some(value) => self.push(name, value.to_string()),
            None => self,
        }
    }

    /// Renders as `true` / `false`
    pub fn flag(self, name: &'static str, value: Option<bool>) -> Self {
        self.optional(name, value)
    }

    /// Comma-joined
    pub fn list<T: Display>(self, name: &'static str, values: &[T]) -> Self {
        let joined = values
            .iter()
            .map(ToString::to_string)
            .filter(|value| !value.is_empty())
            .collect::<Vec<_>>()
            .join(",");
        self.push(name, joined)
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(key, value)| (*key, value.as_str()))
    }

    fn push(mut self, name: &'static str, value: String) -> Self {
        if !value.is_empty() {
            self.pairs.push((name, value));
        }
        self
    }
}

/// Substitutes every `{name}` placeholder in one path segment.
///
/// The returned segment is raw; percent-encoding happens when it is pushed
/// onto the URL.
pub(crate) fn render_segment(
    segment: &str,
    template: &str,
    params: &PathParams<'_>,
) -> Result<String> {
    let mut rendered = String::with_capacity(segment.len());
    let mut rest = segment;

    while let Some(open) = rest.find('{') {
        let Some(close) = rest[open..].find('}').map(|offset| open + offset) else {
            break;
        };
        let name = &rest[open + 1..close];
        let value = params
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| *value)
            .ok_or_else(|| GeckoError::MissingPathParameter {
                name: name.to_string(),
                template: template.to_string(),
            })?;

        rendered.push_str(&rest[..open]);
        rendered.push_str(value);
        rest = &rest[close + 1..];
    }

    rendered.push_str(rest);
    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_params_skip_empty_values() {
        let params = QueryParams::new()
            .required("vs_currency", "usd")
            .optional::<u32>("per_page", None)
            .optional("category", Some(""))
            .flag("sparkline", Some(false))
            .list::<String>("ids", &[])
            .list("vs_currencies", &["usd", "eur"]);

        let pairs: Vec<_> = params.iter().collect();
        assert_eq!(
            pairs,
            vec![
                ("vs_currency", "usd"),
                ("sparkline", "false"),
                ("vs_currencies", "usd,eur"),
            ]
        );
        assert_eq!(params.get("per_page"), None);
    }

    #[test]
    fn test_render_segment_substitutes_every_placeholder() {
        let params = [("platform", "ethereum"), ("address", "0xabc")];
        let rendered = render_segment("{platform}-{address}", "/x/{platform}-{address}", &params)
            .expect("render");
        assert_eq!(rendered, "ethereum-0xabc");

        let literal = render_segment("tickers", "/coins/{id}/tickers", &params).expect("render");
        assert_eq!(literal, "tickers");
    }

    #[test]
    fn test_render_segment_missing_parameter() {
        let err = render_segment("{id}", "/coins/{id}", &[]).unwrap_err();
        match err {
            GeckoError::MissingPathParameter { name, template } => {
                assert_eq!(name, "id");
                assert_eq!(template, "/coins/{id}");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
