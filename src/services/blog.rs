use crate::models::BlogPost;

pub const RELATED_LIMIT: usize = 3;

/// Previous and next posts relative to `id`, by position in fetch order.
pub fn neighbours(all: &[BlogPost], id: i64) -> (Option<&BlogPost>, Option<&BlogPost>) {
    match all.iter().position(|p| p.id == id) {
        Some(index) => {
            let previous = index.checked_sub(1).and_then(|i| all.get(i));
            (previous, all.get(index + 1))
        }
        None => (None, None),
    }
}

/// Up to `limit` other posts sharing the post's category.
pub fn related<'a>(all: &'a [BlogPost], post: &BlogPost, limit: usize) -> Vec<&'a BlogPost> {
    all.iter()
        .filter(|p| p.id != post.id && p.category_label() == post.category_label())
        .take(limit)
        .collect()
}
