//! Helpers over a loaded post collection.

use super::Post;

/// One past the highest id in the collection, `1` when empty.
/// `None` once the highest id is `u64::MAX`.
pub fn next_id(posts: &[Post]) -> Option<u64> {
    max_id(posts).map_or(Some(1), |max| max.checked_add(1))
}

pub fn max_id(posts: &[Post]) -> Option<u64> {
    posts.iter().map(|p| p.id).max()
}

pub fn find(posts: &[Post], id: u64) -> Option<&Post> {
    posts.iter().find(|p| p.id == id)
}

pub fn find_mut(posts: &mut [Post], id: u64) -> Option<&mut Post> {
    posts.iter_mut().find(|p| p.id == id)
}

/// Whether another post already uses `title`, ignoring case and surrounding
/// whitespace. The post with `exclude_id` is skipped so an update can keep
/// its own title.
pub fn is_duplicate_title(posts: &[Post], title: &str, exclude_id: Option<u64>) -> bool {
    let wanted = title.trim().to_lowercase();

    posts
        .iter()
        .filter(|p| Some(p.id) != exclude_id)
        .any(|p| p.title.trim().to_lowercase() == wanted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PostDraft;

    fn post(id: u64, title: &str) -> Post {
        Post::new(id, PostDraft::parse(title, "content", None).unwrap())
    }

    #[test]
    fn test_next_id_empty() {
        assert_eq!(next_id(&[]), Some(1));
    }

    #[test]
    fn test_next_id_uses_max_not_len() {
        let posts = vec![post(7, "a"), post(3, "b")];
        assert_eq!(next_id(&posts), Some(8));
        assert_eq!(max_id(&posts), Some(7));
    }

    #[test]
    fn test_next_id_at_u64_max() {
        let posts = vec![post(u64::MAX, "last")];
        assert_eq!(next_id(&posts), None);
    }

    #[test]
    fn test_find() {
        let posts = vec![post(1, "a"), post(2, "b")];
        assert_eq!(find(&posts, 2).map(|p| p.title.as_str()), Some("b"));
        assert!(find(&posts, 9).is_none());
    }

    #[test]
    fn test_duplicate_title_is_case_insensitive() {
        let posts = vec![post(1, "Hello World")];
        assert!(is_duplicate_title(&posts, "hello world", None));
        assert!(is_duplicate_title(&posts, "  HELLO WORLD ", None));
        assert!(!is_duplicate_title(&posts, "Hello", None));
    }

    #[test]
    fn test_duplicate_title_excludes_self() {
        let posts = vec![post(1, "Hello"), post(2, "Other")];
        assert!(!is_duplicate_title(&posts, "hello", Some(1)));
        assert!(is_duplicate_title(&posts, "other", Some(1)));
    }
}
