//! Domain entities - the core business objects.

mod interests;
mod post;
mod share;
mod slug;
mod submission;
mod user;

pub use interests::{INTEREST_CATALOG, InterestSet, interest_catalog};
pub use post::{Post, parse_post_date, sort_by_recency};
pub use share::ShareLinks;
pub use slug::slugify;
pub use submission::{NewPost, PostSubmission, split_tags};
pub use user::AuthUser;
