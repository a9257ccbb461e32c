use serde::Serialize;
use url::Url;

/// Social share targets for a single post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareLinks {
    pub post_url: String,
    pub twitter: String,
    pub facebook: String,
    pub linkedin: String,
}

impl ShareLinks {
    /// Build share links for the post at `<site_url>/posts/<slug>`.
    pub fn build(site_url: &str, slug: &str, title: &str) -> Result<Self, url::ParseError> {
        let mut base = Url::parse(site_url)?;
        base.path_segments_mut()
            .map_err(|_| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
            .pop_if_empty()
            .extend(["posts", slug]);
        let post_url = base.to_string();

        let twitter = Url::parse_with_params(
            "https://twitter.com/intent/tweet",
            &[("url", post_url.as_str()), ("text", title)],
        )?;
        let facebook = Url::parse_with_params(
            "https://www.facebook.com/sharer/sharer.php",
            &[("u", post_url.as_str())],
        )?;
        let linkedin = Url::parse_with_params(
            "https://www.linkedin.com/shareArticle",
            &[("mini", "true"), ("url", post_url.as_str()), ("title", title)],
        )?;

        Ok(Self {
            twitter: twitter.into(),
            facebook: facebook.into(),
            linkedin: linkedin.into(),
            post_url,
        })
    }
}
