//! Tag aggregation across the post collection.
//!
//! A tag counts once per post even if repeated within that post's tag list.
//! Ordering is by descending count; equal-count tags keep the order of their
//! first appearance while scanning posts in collection order, which is stable
//! within a run and deterministic for a given input ordering.

use crate::post::Post;

/// A distinct tag and the number of posts carrying it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagCount {
    pub tag: String,
    pub count: usize,
}

/// Ranked tag aggregation, recomputed on demand from the post collection.
#[derive(Debug, Default)]
pub struct TagIndex {
    ranked: Vec<TagCount>,
}

impl TagIndex {
    /// Aggregate tags over `posts` and rank them by descending count.
    pub fn from_posts(posts: &[Post]) -> Self {
        let mut ranked: Vec<TagCount> = Vec::new();

        for post in posts {
            let mut seen_in_post: Vec<&str> = Vec::new();
            for tag in &post.tags {
                // Dedup within a single post's tag list
                if seen_in_post.contains(&tag.as_str()) {
                    continue;
                }
                seen_in_post.push(tag);

                match ranked.iter_mut().find(|t| t.tag == *tag) {
                    Some(entry) => entry.count += 1,
                    None => ranked.push(TagCount {
                        tag: tag.clone(),
                        count: 1,
                    }),
                }
            }
        }

        // Stable sort preserves first-seen order among equal counts
        ranked.sort_by(|a, b| b.count.cmp(&a.count));

        Self { ranked }
    }

    /// Tags ordered by descending count.
    pub fn ranked(&self) -> &[TagCount] {
        &self.ranked
    }

    pub fn is_empty(&self) -> bool {
        self.ranked.is_empty()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::post::tests::make_post;

    fn posts_with_tags(tag_lists: &[&[&str]]) -> Vec<Post> {
        tag_lists
            .iter()
            .enumerate()
            .map(|(i, tags)| make_post(&format!("post-{i}"), "2024-01-01", tags))
            .collect()
    }

    #[test]
    fn test_empty_collection() {
        let index = TagIndex::from_posts(&[]);
        assert!(index.is_empty());
    }

    #[test]
    fn test_counts_once_per_post() {
        // "rust" repeated within one post still counts once
        let posts = posts_with_tags(&[&["rust", "rust", "cli"]]);
        let index = TagIndex::from_posts(&posts);

        let rust = index.ranked().iter().find(|t| t.tag == "rust").unwrap();
        assert_eq!(rust.count, 1);
    }

    #[test]
    fn test_counts_across_posts() {
        let posts = posts_with_tags(&[&["rust", "cli"], &["rust"], &["rust", "web"]]);
        let index = TagIndex::from_posts(&posts);

        let count_of = |tag: &str| {
            index
                .ranked()
                .iter()
                .find(|t| t.tag == tag)
                .map(|t| t.count)
        };
        assert_eq!(count_of("rust"), Some(3));
        assert_eq!(count_of("cli"), Some(1));
        assert_eq!(count_of("web"), Some(1));
    }

    #[test]
    fn test_union_covers_all_tags_without_duplicates() {
        let posts = posts_with_tags(&[&["a", "b"], &["b", "c"], &["c", "a"]]);
        let index = TagIndex::from_posts(&posts);

        let mut names: Vec<&str> = index.ranked().iter().map(|t| t.tag.as_str()).collect();
        names.sort_unstable();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_descending_count_order() {
        // counts: a=3, b=3, c=1 - c must come after both a and b
        let posts = posts_with_tags(&[&["a", "b"], &["a", "b"], &["a", "b", "c"]]);
        let index = TagIndex::from_posts(&posts);

        let pos = |tag: &str| {
            index
                .ranked()
                .iter()
                .position(|t| t.tag == tag)
                .unwrap()
        };
        assert!(pos("c") > pos("a"));
        assert!(pos("c") > pos("b"));
    }

    #[test]
    fn test_equal_counts_form_contiguous_group() {
        let posts = posts_with_tags(&[&["a", "b"], &["a", "b"], &["c"]]);
        let index = TagIndex::from_posts(&posts);

        let counts: Vec<usize> = index.ranked().iter().map(|t| t.count).collect();
        assert_eq!(counts, vec![2, 2, 1]);
    }

    #[test]
    fn test_deterministic_across_repeated_runs() {
        let posts = posts_with_tags(&[&["x", "y", "z"], &["y", "x"]]);

        let first: Vec<TagCount> = TagIndex::from_posts(&posts).ranked().to_vec();
        let second: Vec<TagCount> = TagIndex::from_posts(&posts).ranked().to_vec();
        assert_eq!(first, second);
    }
}
