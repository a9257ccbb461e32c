//! Feed engine - search and interest-based recommendation over posts.
//!
//! Everything here is pure: the same posts and [`FeedContext`] always give
//! the same [`FeedView`]. Filtering never reorders; callers pass posts that
//! are already sorted newest first.

use std::fmt;

use crate::domain::{InterestSet, Post};
use crate::markup::strip_markup;

/// Where the reader's interests stand when the feed is computed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InterestState {
    Loading,
    Loaded(InterestSet),
}

impl InterestState {
    fn loaded(&self) -> Option<&InterestSet> {
        match self {
            InterestState::Loading => None,
            InterestState::Loaded(set) => Some(set),
        }
    }
}

/// Inputs to the feed besides the posts themselves.
#[derive(Debug, Clone)]
pub struct FeedContext {
    /// Query exactly as typed; shown verbatim in headings.
    pub query: Option<String>,
    pub interests: InterestState,
    pub authenticated: bool,
}

impl FeedContext {
    /// Anonymous visitor with no query.
    pub fn anonymous() -> Self {
        Self {
            query: None,
            interests: InterestState::Loaded(InterestSet::new()),
            authenticated: false,
        }
    }

    /// Signed-in reader with their saved interests.
    pub fn signed_in(interests: InterestSet) -> Self {
        Self {
            query: None,
            interests: InterestState::Loaded(interests),
            authenticated: true,
        }
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn with_interests(mut self, interests: InterestState) -> Self {
        self.interests = interests;
        self
    }

    /// Trimmed query, if anything is left after trimming.
    pub fn active_query(&self) -> Option<&str> {
        self.query
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
    }

    fn raw_query(&self) -> &str {
        self.query.as_deref().unwrap_or_default()
    }

    /// Interests that actually narrow the feed.
    fn personalizing_interests(&self) -> Option<&InterestSet> {
        if !self.authenticated {
            return None;
        }
        self.interests.loaded().filter(|set| !set.is_empty())
    }

    fn is_personalized(&self) -> bool {
        self.personalizing_interests().is_some()
    }
}

/// Heading shown above the feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedHeading {
    SearchResults { query: String },
    Recommended,
    Latest,
}

impl fmt::Display for FeedHeading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedHeading::SearchResults { query } => write!(f, "Search Results for \"{query}\""),
            FeedHeading::Recommended => write!(f, "Your Recommended Articles"),
            FeedHeading::Latest => write!(f, "Latest Articles"),
        }
    }
}

/// Why the feed came back empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmptyState {
    LoadingInterests,
    NoSearchMatches { query: String, within_interests: bool },
    NoInterestMatches,
    NoPosts,
}

impl EmptyState {
    pub fn message(&self) -> String {
        match self {
            EmptyState::LoadingInterests => "Loading articles...".to_string(),
            EmptyState::NoSearchMatches {
                query,
                within_interests,
            } => format!(
                "No articles found matching \"{query}\"{}. Try a different search term.",
                if *within_interests { " in your interests" } else { "" }
            ),
            EmptyState::NoInterestMatches => {
                "No articles match your selected interests right now.".to_string()
            }
            EmptyState::NoPosts => "No posts available yet. Check back soon!".to_string(),
        }
    }
}

/// The computed feed: the posts to show plus everything needed to label them.
#[derive(Debug, Clone)]
pub struct FeedView {
    pub heading: FeedHeading,
    pub posts: Vec<Post>,
    pub show_interest_banner: bool,
    pub empty_state: Option<EmptyState>,
}

/// Keep posts whose category or tags intersect the reader's interests.
///
/// A no-op for anonymous readers and for an empty interest set.
pub fn filter_by_interests(posts: Vec<Post>, ctx: &FeedContext) -> Vec<Post> {
    match ctx.personalizing_interests() {
        Some(interests) => posts.into_iter().filter(|p| interests.matches(p)).collect(),
        None => posts,
    }
}

/// Keep posts whose title, excerpt or plain-text content contains the
/// query, ignoring case. A blank query keeps everything.
pub fn filter_by_query(posts: Vec<Post>, query: &str) -> Vec<Post> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return posts;
    }
    posts
        .into_iter()
        .filter(|p| matches_query(p, &needle))
        .collect()
}

/// `needle` must already be trimmed and lowercased.
pub fn matches_query(post: &Post, needle: &str) -> bool {
    post.title.to_lowercase().contains(needle)
        || post.excerpt.to_lowercase().contains(needle)
        || strip_markup(&post.content).to_lowercase().contains(needle)
}

pub fn heading(ctx: &FeedContext) -> FeedHeading {
    if ctx.active_query().is_some() {
        FeedHeading::SearchResults {
            query: ctx.raw_query().to_string(),
        }
    } else if ctx.is_personalized() {
        FeedHeading::Recommended
    } else {
        FeedHeading::Latest
    }
}

/// Signed-in reader without interests and not searching.
pub fn show_interest_banner(ctx: &FeedContext) -> bool {
    let no_interests = ctx.interests.loaded().is_some_and(InterestSet::is_empty);
    ctx.authenticated && no_interests && ctx.active_query().is_none()
}

/// Pick the empty-state message for a feed that produced no posts.
pub fn empty_state(ctx: &FeedContext) -> EmptyState {
    if ctx.interests == InterestState::Loading {
        EmptyState::LoadingInterests
    } else if ctx.active_query().is_some() {
        EmptyState::NoSearchMatches {
            query: ctx.raw_query().to_string(),
            within_interests: ctx.is_personalized(),
        }
    } else if ctx.is_personalized() {
        EmptyState::NoInterestMatches
    } else {
        EmptyState::NoPosts
    }
}

/// Run both filters in order and derive the display state.
pub fn build_feed(posts: Vec<Post>, ctx: &FeedContext) -> FeedView {
    let posts = if ctx.interests == InterestState::Loading {
        Vec::new()
    } else {
        let posts = filter_by_interests(posts, ctx);
        match ctx.active_query() {
            Some(query) => filter_by_query(posts, query),
            None => posts,
        }
    };

    let empty = posts.is_empty().then(|| empty_state(ctx));

    FeedView {
        heading: heading(ctx),
        show_interest_banner: show_interest_banner(ctx),
        empty_state: empty,
        posts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(slug: &str, title: &str, category: &str, tags: &[&str], content: &str) -> Post {
        Post {
            slug: slug.to_string(),
            title: title.to_string(),
            content: content.to_string(),
            excerpt: format!("About {title}"),
            featured_image: "https://placehold.co/800x450.png".to_string(),
            author: "Jane Doe".to_string(),
            date: "2024-07-01T00:00:00Z".to_string(),
            category: category.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            read_time: "5 min read".to_string(),
        }
    }

    fn sample() -> Vec<Post> {
        vec![
            post(
                "saying-no",
                "The Art of Saying No",
                "Productivity",
                &["Boundaries"],
                "<p>Protect your <em>time</em>.</p>",
            ),
            post(
                "mornings",
                "Mindful Mornings",
                "Well-being",
                &["Routine", "Productivity"],
                "<p>Start slow.</p>",
            ),
            post(
                "minimalism",
                "Into Minimalism",
                "Lifestyle",
                &["Simplicity"],
                "<p>Less <strong>stuff</strong>, more room.</p>",
            ),
        ]
    }

    fn slugs(view: &FeedView) -> Vec<&str> {
        view.posts.iter().map(|p| p.slug.as_str()).collect()
    }

    fn interests(items: &[&str]) -> InterestSet {
        items.iter().copied().collect()
    }

    #[test]
    fn test_anonymous_sees_everything() {
        let view = build_feed(sample(), &FeedContext::anonymous());

        assert_eq!(slugs(&view), vec!["saying-no", "mornings", "minimalism"]);
        assert_eq!(view.heading, FeedHeading::Latest);
        assert!(!view.show_interest_banner);
        assert!(view.empty_state.is_none());
    }

    #[test]
    fn test_interests_ignored_when_not_signed_in() {
        let ctx = FeedContext::anonymous()
            .with_interests(InterestState::Loaded(interests(&["Travel"])));

        let view = build_feed(sample(), &ctx);

        assert_eq!(view.posts.len(), 3);
        assert_eq!(view.heading, FeedHeading::Latest);
    }

    #[test]
    fn test_interest_filter_matches_category_or_tag() {
        let ctx = FeedContext::signed_in(interests(&["Productivity"]));

        let view = build_feed(sample(), &ctx);

        assert_eq!(slugs(&view), vec!["saying-no", "mornings"]);
        assert_eq!(view.heading, FeedHeading::Recommended);
        assert_eq!(view.heading.to_string(), "Your Recommended Articles");
    }

    #[test]
    fn test_interest_filter_inclusion_rule() {
        let sets = [
            interests(&[]),
            interests(&["Boundaries"]),
            interests(&["Lifestyle", "Routine"]),
            interests(&["Travel"]),
        ];
        for set in sets {
            let ctx = FeedContext::signed_in(set.clone());
            let kept = filter_by_interests(sample(), &ctx);
            for p in sample() {
                let expected = set.is_empty()
                    || set.contains(&p.category)
                    || p.tags.iter().any(|t| set.contains(t));
                assert_eq!(kept.contains(&p), expected, "post {} with {set:?}", p.slug);
            }
        }
    }

    #[test]
    fn test_query_is_case_insensitive_and_searches_plain_content() {
        let by_title = build_feed(sample(), &FeedContext::anonymous().with_query("MINDFUL"));
        assert_eq!(slugs(&by_title), vec!["mornings"]);

        let by_content = build_feed(sample(), &FeedContext::anonymous().with_query("less stuff"));
        assert_eq!(slugs(&by_content), vec!["minimalism"]);

        // markup is not searchable text
        let by_tag_name = build_feed(sample(), &FeedContext::anonymous().with_query("strong"));
        assert!(by_tag_name.posts.is_empty());
    }

    #[test]
    fn test_heading_keeps_raw_query() {
        let view = build_feed(sample(), &FeedContext::anonymous().with_query("  Mindful "));

        assert_eq!(slugs(&view), vec!["mornings"]);
        assert_eq!(view.heading.to_string(), "Search Results for \"  Mindful \"");
    }

    #[test]
    fn test_blank_query_is_inactive() {
        let view = build_feed(sample(), &FeedContext::anonymous().with_query("   "));

        assert_eq!(view.posts.len(), 3);
        assert_eq!(view.heading, FeedHeading::Latest);
    }

    #[test]
    fn test_query_filter_is_idempotent() {
        let once = filter_by_query(sample(), "time");
        let twice = filter_by_query(once.clone(), "time");
        assert_eq!(once, twice);
    }

    #[test]
    fn test_both_filters_intersect() {
        let ctx = FeedContext::signed_in(interests(&["Productivity"])).with_query("saying");

        let view = build_feed(sample(), &ctx);

        assert_eq!(slugs(&view), vec!["saying-no"]);
        assert!(matches!(view.heading, FeedHeading::SearchResults { .. }));
    }

    #[test]
    fn test_empty_state_loading() {
        let ctx = FeedContext::signed_in(InterestSet::new()).with_interests(InterestState::Loading);

        let view = build_feed(sample(), &ctx);

        assert!(view.posts.is_empty());
        assert_eq!(view.empty_state, Some(EmptyState::LoadingInterests));
        assert_eq!(view.empty_state.unwrap().message(), "Loading articles...");
        assert!(!view.show_interest_banner);
    }

    #[test]
    fn test_empty_state_no_search_matches() {
        let view = build_feed(sample(), &FeedContext::anonymous().with_query("quantum"));

        let state = view.empty_state.unwrap();
        assert_eq!(
            state.message(),
            "No articles found matching \"quantum\". Try a different search term."
        );

        let ctx = FeedContext::signed_in(interests(&["Travel"])).with_query("quantum");
        let state = build_feed(sample(), &ctx).empty_state.unwrap();
        assert_eq!(
            state.message(),
            "No articles found matching \"quantum\" in your interests. Try a different search term."
        );
    }

    #[test]
    fn test_empty_state_no_interest_matches() {
        let view = build_feed(sample(), &FeedContext::signed_in(interests(&["Travel"])));

        assert_eq!(view.empty_state, Some(EmptyState::NoInterestMatches));
    }

    #[test]
    fn test_empty_state_no_posts() {
        let view = build_feed(Vec::new(), &FeedContext::anonymous());

        assert_eq!(view.empty_state, Some(EmptyState::NoPosts));
        assert_eq!(view.heading, FeedHeading::Latest);
    }

    #[test]
    fn test_interest_banner() {
        let signed_in_empty = FeedContext::signed_in(InterestSet::new());
        assert!(show_interest_banner(&signed_in_empty));
        assert!(!show_interest_banner(&signed_in_empty.clone().with_query("x")));
        assert!(!show_interest_banner(&FeedContext::anonymous()));
        assert!(!show_interest_banner(&FeedContext::signed_in(interests(&["Food"]))));
    }
}
