//! Token-driven page collection shared by the S3 listing and DynamoDB queries.

use std::collections::HashMap;
use std::future::Future;

/// Continuation token handed back by a paged AWS call.
pub trait PageToken {
    /// An empty token means there is no further page.
    fn is_exhausted(&self) -> bool;
}

impl PageToken for String {
    fn is_exhausted(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V, S> PageToken for HashMap<K, V, S> {
    fn is_exhausted(&self) -> bool {
        self.is_empty()
    }
}

/// Calls `fetch` with the previous page's token until no token comes back,
/// concatenating items in page order.
///
/// The first call gets `None`. The first error aborts the walk.
pub async fn collect_pages<T, K, E, F, Fut>(mut fetch: F) -> Result<Vec<T>, E>
where
    K: PageToken,
    F: FnMut(Option<K>) -> Fut,
    Fut: Future<Output = Result<(Vec<T>, Option<K>), E>>,
{
    let mut items = Vec::new();
    let mut token = None;

    loop {
        let (page, next) = fetch(token.take()).await?;
        items.extend(page);

        match next {
            Some(next) if !next.is_exhausted() => token = Some(next),
            _ => return Ok(items),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    type Page = (Vec<&'static str>, Option<&'static str>);

    /// Serves `pages` in order and records the token of every call.
    async fn walk(
        pages: Vec<Result<Page, String>>,
    ) -> (Result<Vec<String>, String>, Vec<Option<String>>) {
        let mut pages = VecDeque::from(pages);
        let mut seen = Vec::new();

        let result = collect_pages(|token: Option<String>| {
            seen.push(token);
            let page = pages.pop_front();
            async move {
                let (items, next) = page.expect("fetched past the last page")?;
                Ok::<_, String>((
                    items.into_iter().map(str::to_string).collect::<Vec<_>>(),
                    next.map(str::to_string),
                ))
            }
        })
        .await;

        (result, seen)
    }

    #[tokio::test]
    async fn test_follows_tokens_across_three_pages() {
        let (result, seen) = walk(vec![
            Ok((vec!["a.png", "b.png"], Some("t1"))),
            Ok((vec!["c.png"], Some("t2"))),
            Ok((vec!["d.png"], None)),
        ])
        .await;

        assert_eq!(result.unwrap(), vec!["a.png", "b.png", "c.png", "d.png"]);
        assert_eq!(
            seen,
            vec![None, Some("t1".to_string()), Some("t2".to_string())]
        );
    }

    #[tokio::test]
    async fn test_empty_token_ends_the_walk() {
        let (result, seen) = walk(vec![
            Ok((vec!["a.png"], Some("t1"))),
            Ok((vec!["b.png"], Some(""))),
        ])
        .await;

        assert_eq!(result.unwrap(), vec!["a.png", "b.png"]);
        assert_eq!(seen.len(), 2);
    }

    #[tokio::test]
    async fn test_empty_pages_are_followed() {
        let (result, _) = walk(vec![
            Ok((vec![], Some("t1"))),
            Ok((vec!["a.png"], None)),
        ])
        .await;

        assert_eq!(result.unwrap(), vec!["a.png"]);
    }

    #[tokio::test]
    async fn test_error_mid_listing_aborts() {
        let (result, seen) = walk(vec![
            Ok((vec!["a.png"], Some("t1"))),
            Err("AccessDenied".to_string()),
            Ok((vec!["never.png"], None)),
        ])
        .await;

        assert_eq!(result, Err("AccessDenied".to_string()));
        assert_eq!(seen.len(), 2);
    }

    #[tokio::test]
    async fn test_map_tokens_stop_when_empty() {
        let mut calls = 0;

        let items = collect_pages(|token: Option<HashMap<String, String>>| {
            calls += 1;
            let page = vec![calls];
            let next = match token {
                None => Some(HashMap::from([("PK".to_string(), "IMAGE#x".to_string())])),
                Some(_) => Some(HashMap::new()),
            };
            async move { Ok::<_, String>((page, next)) }
        })
        .await
        .unwrap();

        assert_eq!(items, vec![1, 2]);
    }
}
