//! Ordering rules for news and comment listings.

use std::num::NonZeroUsize;

use super::news::{Comment, News};

/// Default number of news items shown on the home page.
pub const DEFAULT_HOME_PAGE_SIZE: NonZeroUsize = match NonZeroUsize::new(10) {
    Some(size) => size,
    None => panic!("home page size must be non-zero"),
};

/// Explicit listing configuration handed to services at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListingConfig {
    home_page_size: NonZeroUsize,
}

impl ListingConfig {
    pub const fn new(home_page_size: NonZeroUsize) -> Self {
        Self { home_page_size }
    }

    /// Maximum number of news items on the home page.
    pub const fn home_page_size(&self) -> NonZeroUsize {
        self.home_page_size
    }
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self::new(DEFAULT_HOME_PAGE_SIZE)
    }
}

/// Newest news first, truncated to the configured page size.
pub fn home_listing(news: Vec<News>, config: &ListingConfig) -> Vec<News> {
    latest_news(news, config.home_page_size().get())
}

/// At most `limit` news items, newest date first and later ids first within
/// a day.
pub fn latest_news(mut news: Vec<News>, limit: usize) -> Vec<News> {
    news.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| b.id.cmp(&a.id)));
    news.truncate(limit);
    news
}

/// Oldest comments first.
pub fn comment_listing(mut comments: Vec<Comment>) -> Vec<Comment> {
    comments.sort_by(|a, b| a.created.cmp(&b.created).then_with(|| a.id.cmp(&b.id)));
    comments
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::news::{CommentId, CommentText, NewsId};
    use crate::domain::user::UserId;
    use chrono::{Duration, NaiveDate, TimeZone, Utc};
    use rstest::rstest;

    fn news_dated(id: i64, days_ago: i64) -> News {
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).expect("valid date");
        News {
            id: NewsId::new(id),
            title: format!("Новость {id}"),
            text: "Просто текст.".to_owned(),
            date: today - Duration::days(days_ago),
        }
    }

    fn comment_at(id: i64, offset_days: i64) -> Comment {
        let base = Utc
            .with_ymd_and_hms(2024, 6, 1, 12, 0, 0)
            .single()
            .expect("valid timestamp");
        Comment {
            id: CommentId::new(id),
            news: NewsId::new(1),
            author: UserId::random(),
            text: CommentText::new(format!("Текст {id}")).expect("valid text"),
            created: base + Duration::days(offset_days),
        }
    }

    fn config(size: usize) -> ListingConfig {
        ListingConfig::new(NonZeroUsize::new(size).expect("non-zero size"))
    }

    #[rstest]
    fn home_listing_is_newest_first() {
        let news = vec![news_dated(1, 3), news_dated(2, 0), news_dated(3, 7)];
        let dates: Vec<_> = home_listing(news, &config(10))
            .into_iter()
            .map(|item| item.date)
            .collect();
        let mut sorted = dates.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(dates, sorted);
    }

    #[rstest]
    #[case(10)]
    #[case(3)]
    #[case(1)]
    fn home_listing_keeps_exactly_page_size_of_one_more(#[case] size: usize) {
        let news = (0..=size)
            .map(|index| news_dated(index as i64 + 1, index as i64))
            .collect();
        let listed = home_listing(news, &config(size));
        assert_eq!(listed.len(), size);
        assert!(listed.iter().all(|item| item.id != NewsId::new(size as i64 + 1)));
    }

    #[rstest]
    fn home_listing_keeps_short_lists_whole() {
        let listed = home_listing(vec![news_dated(1, 0)], &config(10));
        assert_eq!(listed.len(), 1);
    }

    #[rstest]
    fn same_day_news_lists_later_ids_first() {
        let news = vec![news_dated(1, 0), news_dated(3, 0), news_dated(2, 0)];
        let ids: Vec<_> = latest_news(news, 10)
            .into_iter()
            .map(|item| item.id.get())
            .collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[rstest]
    fn zero_limit_lists_nothing() {
        assert!(latest_news(vec![news_dated(1, 0)], 0).is_empty());
    }

    #[rstest]
    fn comment_listing_is_oldest_first_regardless_of_insertion_order() {
        let comments = vec![comment_at(1, 5), comment_at(2, -2), comment_at(3, 0)];
        let ids: Vec<_> = comment_listing(comments)
            .into_iter()
            .map(|comment| comment.id.get())
            .collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[rstest]
    fn default_page_size_is_ten() {
        assert_eq!(ListingConfig::default().home_page_size().get(), 10);
    }
}
