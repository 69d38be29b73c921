//! Collects every starred repository by walking the pages in order.

use super::client::PageFetcher;
use super::error::GitHubError;
use super::types::{StarPage, StarredRepo};

/// Fetch all of `username`'s stars, page by page, until an empty page.
pub async fn collect_stars<F>(fetcher: &F, username: &str) -> Result<Vec<StarredRepo>, GitHubError>
where
    F: PageFetcher + ?Sized,
{
    collect_stars_with_progress(fetcher, username, |_, _| {}).await
}

/// Like [`collect_stars`], calling `on_page(page, stars_so_far)` after each
/// non-empty page.
///
/// The first empty page is the only stop condition. There is no page ceiling:
/// an API that never returns an empty page keeps this looping.
pub async fn collect_stars_with_progress<F, P>(
    fetcher: &F,
    username: &str,
    mut on_page: P,
) -> Result<Vec<StarredRepo>, GitHubError>
where
    F: PageFetcher + ?Sized,
    P: FnMut(u32, usize),
{
    let mut stars = Vec::new();
    let mut page = 1u32;

    loop {
        match fetcher.fetch_page(username, page).await? {
            StarPage::RateLimited { message, body } => {
                log::warn!("rate limited on page {}: {}", page, message);
                return Err(GitHubError::RateLimited { message, body });
            }
            StarPage::Stars(fetched) if fetched.is_empty() => {
                log::debug!("page {} is empty, collected {} stars", fetched.number, stars.len());
                break;
            }
            StarPage::Stars(fetched) => {
                log::debug!("page {} has {} stars", fetched.number, fetched.stars.len());
                stars.extend(fetched.stars);
                on_page(page, stars.len());
                page += 1;
            }
        }
    }

    Ok(stars)
}
