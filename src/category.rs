//! Category strings.
//!
//! Native spans have no notion of a semantic category, so hashtags, emails,
//! links and mentions are told apart by a compact tag written into the span's
//! free-form metadata (its font feature settings):
//!
//! ```text
//! category: hashtag
//! category: email
//! category: url(https://example.com)
//! category: mention url(https://example.com/@alice)
//! ```
//!
//! The grammar is shared with other clients reading the same spans, so it is
//! kept exactly as is.

use crate::Error;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use url::Url;

/// Marks the beginning of a category within a metadata string.
pub const PREFIX: &str = "category: ";

const TARGET_START: &str = "url(";
const TARGET_END: &str = ")";

/// Semantic tag carried by a category.
///
/// Tags written by other clients that this codec has no rule for are kept
/// as [`Tag::Other`]; they match no extractor but never fail decoding.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub enum Tag {
    Hashtag,
    Email,
    Mention,
    Other(String),
}

impl Tag {
    pub fn as_str(&self) -> &str {
        match self {
            Tag::Hashtag => "hashtag",
            Tag::Email => "email",
            Tag::Mention => "mention",
            Tag::Other(tag) => tag,
        }
    }

    /// Whether this tag can be written as the first token of a category.
    fn is_token(&self) -> bool {
        let s = self.as_str();
        !s.is_empty() && !s.contains(char::is_whitespace) && !s.starts_with(TARGET_START)
    }

    /// Reads a token already known to be a valid tag.
    fn from_token(token: &str) -> Self {
        match token {
            "hashtag" => Tag::Hashtag,
            "email" => Tag::Email,
            "mention" => Tag::Mention,
            other => Tag::Other(other.to_string()),
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Tag> for String {
    fn from(tag: Tag) -> String {
        match tag {
            Tag::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl FromStr for Tag {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = Tag::from_token(s);
        if !tag.is_token() {
            return Err(Error::InvalidTag { tag: s.to_string() });
        }
        Ok(tag)
    }
}

/// A decoded category: a tag, a target, or both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<Tag>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<Url>,
}

impl Category {
    pub fn hashtag() -> Self {
        Self {
            tag: Some(Tag::Hashtag),
            url: None,
        }
    }

    pub fn email() -> Self {
        Self {
            tag: Some(Tag::Email),
            url: None,
        }
    }

    pub fn link(url: Url) -> Self {
        Self {
            tag: None,
            url: Some(url),
        }
    }

    pub fn mention(url: Url) -> Self {
        Self {
            tag: Some(Tag::Mention),
            url: Some(url),
        }
    }

    pub fn has_tag(&self, tag: &Tag) -> bool {
        self.tag.as_ref() == Some(tag)
    }

    /// Writes this category in its textual form.
    pub fn encode(&self) -> Result<String, Error> {
        encode(self.tag.as_ref(), self.url.as_ref())
    }
}

/// Builds a category string from a tag and/or a target.
pub fn encode(tag: Option<&Tag>, url: Option<&Url>) -> Result<String, Error> {
    if let Some(tag) = tag.filter(|t| !t.is_token()) {
        return Err(Error::InvalidTag {
            tag: tag.to_string(),
        });
    }
    match (tag, url) {
        (None, None) => Err(Error::EmptyCategory),
        (Some(tag), None) => Ok(format!("{PREFIX}{tag}")),
        (None, Some(url)) => Ok(format!("{PREFIX}{TARGET_START}{url}{TARGET_END}")),
        (Some(tag), Some(url)) => Ok(format!("{PREFIX}{tag} {TARGET_START}{url}{TARGET_END}")),
    }
}

/// Parses a metadata string.
///
/// Returns `Ok(None)` when `raw` is not a category at all, which is the
/// normal case for spans without a semantic tag. The only failure is a
/// malformed target.
pub fn decode(raw: &str) -> Result<Option<Category>, Error> {
    let Some(rest) = raw.strip_prefix(PREFIX) else {
        return Ok(None);
    };
    let rest = rest.trim();
    if rest.is_empty() {
        return Ok(None);
    }

    // no tag: the whole remainder is the target call.
    if rest.starts_with(TARGET_START) {
        let url = parse_target(raw, rest)?;
        return Ok(Some(Category::link(url)));
    }

    let (head, tail) = match rest.split_once(char::is_whitespace) {
        Some((head, tail)) => (head, Some(tail.trim_start())),
        None => (rest, None),
    };
    let url = tail.map(|t| parse_target(raw, t)).transpose()?;
    Ok(Some(Category {
        tag: Some(Tag::from_token(head)),
        url,
    }))
}

/// Strips the `url(` / `)` delimiters and parses what is between them.
///
/// The call must end the string, and the target may not contain whitespace.
fn parse_target(raw: &str, call: &str) -> Result<Url, Error> {
    let malformed = |target: &str, source| Error::MalformedTarget {
        raw: raw.to_string(),
        target: target.to_string(),
        source,
    };

    let inner = call
        .strip_prefix(TARGET_START)
        .and_then(|s| s.strip_suffix(TARGET_END))
        .ok_or_else(|| malformed(call, None))?;
    if inner.contains(char::is_whitespace) {
        return Err(malformed(inner, None));
    }

    Url::parse(inner).map_err(|e| malformed(inner, Some(e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn encodes_each_form() {
        assert_eq!(encode(Some(&Tag::Hashtag), None).unwrap(), "category: hashtag");
        assert_eq!(
            encode(None, Some(&url("https://example.com/"))).unwrap(),
            "category: url(https://example.com/)"
        );
        assert_eq!(
            encode(Some(&Tag::Mention), Some(&url("https://example.com/@alice"))).unwrap(),
            "category: mention url(https://example.com/@alice)"
        );
        assert_eq!(encode(None, None), Err(Error::EmptyCategory));
    }

    #[test]
    fn decodes_tag_only() {
        assert_eq!(
            decode("category: hashtag").unwrap(),
            Some(Category::hashtag())
        );
        assert_eq!(decode("category: email").unwrap(), Some(Category::email()));
    }

    #[test]
    fn decodes_tag_and_target() {
        assert_eq!(
            decode("category: mention url(https://example.com/@alice)").unwrap(),
            Some(Category::mention(url("https://example.com/@alice")))
        );
    }

    #[test]
    fn target_may_contain_parentheses() {
        let c = decode("category: url(https://en.wikipedia.org/wiki/Rust_(language))")
            .unwrap()
            .unwrap();
        assert_eq!(
            c.url.unwrap().as_str(),
            "https://en.wikipedia.org/wiki/Rust_(language)"
        );
    }

    #[test]
    fn missing_prefix_is_not_a_category() {
        assert_eq!(decode("not a category").unwrap(), None);
        assert_eq!(decode("smcp, onum").unwrap(), None);
        assert_eq!(decode("").unwrap(), None);
        assert_eq!(decode("category: ").unwrap(), None);
    }

    #[test]
    fn unterminated_call_is_malformed() {
        let err = decode("category: url(").unwrap_err();
        assert!(matches!(err, Error::MalformedTarget { source: None, .. }));
    }

    #[test]
    fn empty_target_is_malformed() {
        let err = decode("category: url()").unwrap_err();
        assert!(matches!(
            err,
            Error::MalformedTarget {
                source: Some(_),
                ..
            }
        ));
    }

    #[test]
    fn trailing_garbage_after_tag_is_malformed() {
        let err = decode("category: mention @alice").unwrap_err();
        assert!(matches!(err, Error::MalformedTarget { ref target, .. } if target == "@alice"));
    }

    #[test]
    fn unknown_tags_are_kept() {
        assert_eq!(
            decode("category: cashtag").unwrap(),
            Some(Category {
                tag: Some(Tag::Other("cashtag".to_string())),
                url: None,
            })
        );
        let c = decode("category: cashtag url(https://example.com/$RUST)")
            .unwrap()
            .unwrap();
        assert_eq!(c.tag, Some(Tag::Other("cashtag".to_string())));
        assert!(c.url.is_some());
    }

    #[test]
    fn text_after_the_call_is_malformed() {
        let err = decode("category: url(https://a.example/)x").unwrap_err();
        assert!(matches!(err, Error::MalformedTarget { source: None, .. }));
    }

    #[test]
    fn whitespace_inside_the_target_is_malformed() {
        let err = decode("category: url(https://a.example/ b)").unwrap_err();
        assert!(matches!(
            err,
            Error::MalformedTarget { ref target, source: None, .. } if target == "https://a.example/ b"
        ));
    }

    #[test]
    fn tag_names_are_validated() {
        assert_eq!("mention".parse::<Tag>(), Ok(Tag::Mention));
        assert_eq!("cashtag".parse::<Tag>(), Ok(Tag::Other("cashtag".to_string())));
        for bad in ["", "two words", "url(x)"] {
            assert_eq!(
                bad.parse::<Tag>(),
                Err(Error::InvalidTag {
                    tag: bad.to_string()
                })
            );
        }
        let bad = Tag::Other("a b".to_string());
        assert!(matches!(encode(Some(&bad), None), Err(Error::InvalidTag { .. })));
    }

    #[test]
    fn tags_serialize_as_plain_strings() {
        let c = Category {
            tag: Some(Tag::Other("cashtag".to_string())),
            url: None,
        };
        assert_eq!(serde_json::to_string(&c).unwrap(), r#"{"tag":"cashtag"}"#);
        assert_eq!(
            serde_json::to_string(&Category::hashtag()).unwrap(),
            r#"{"tag":"hashtag"}"#
        );
    }

    #[test]
    fn round_trips_every_valid_combination() {
        let target = url("https://example.com/@alice?x=1#frag");
        let cases = [
            Category::hashtag(),
            Category::email(),
            Category::link(target.clone()),
            Category::mention(target.clone()),
            Category {
                tag: Some(Tag::Hashtag),
                url: Some(target.clone()),
            },
            Category {
                tag: Some(Tag::Other("cashtag".to_string())),
                url: Some(target),
            },
        ];
        for category in cases {
            let raw = category.encode().unwrap();
            assert_eq!(decode(&raw).unwrap(), Some(category), "{raw}");
        }
    }
}
