//! Depth-first traversal of the comment tree.

use super::comment::Comment;

/// Apply `visit` to every comment of the forest, parents first.
///
/// `visit` runs on a comment before its members are descended into, so it
/// may narrow `members` and only the survivors are visited. The root list is
/// returned with the same length; filter it before walking.
pub fn walk<F>(mut comments: Vec<Comment>, mut visit: F) -> Vec<Comment>
where
    F: FnMut(&mut Comment),
{
    walk_mut(&mut comments, &mut visit);
    comments
}

/// In-place form of [`walk`].
pub fn walk_mut<F>(comments: &mut [Comment], visit: &mut F)
where
    F: FnMut(&mut Comment),
{
    for comment in comments {
        visit(comment);
        for members in comment.members.values_mut() {
            walk_mut(members, visit);
        }
    }
}
