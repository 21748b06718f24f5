mod follower_helpers;
mod like_helpers;
mod question_helpers;
mod reply_helpers;
mod tag_helpers;
mod user_helpers;

// ----------------- Helper Functions -----------------

/// Multi-row finders report "nothing matched" as `None` rather than an empty
/// list.
pub(crate) fn non_empty<T>(rows: Vec<T>) -> Option<Vec<T>> {
    if rows.is_empty() {
        None
    } else {
        Some(rows)
    }
}
