use crate::news::api::NewsApiContract;
use crate::news::models::NewsItem;
use crate::news::LOG_TARGET;
use crate::widget::WidgetCommand;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, instrument, warn};

pub const NEWS_TAG: &str = "news";
/// Fixed fetch size; also the cap on published headlines.
pub const NEWS_PAGE_SIZE: usize = 5;

/// Performs the single feed read and converts it to headlines.
///
/// Never fails: any error is logged and yields an empty list.
#[instrument(skip(api))]
pub async fn load_headlines(api: &dyn NewsApiContract, tag: &str, per_page: usize) -> Vec<NewsItem> {
    let per_page = per_page.min(NEWS_PAGE_SIZE);
    match api.fetch_articles(tag, per_page).await {
        Ok(records) => {
            if records.len() > per_page {
                debug!(target: LOG_TARGET, "Feed returned {} records, keeping the first {}.", records.len(), per_page);
            }
            let items: Vec<NewsItem> = records.into_iter().take(per_page).map(NewsItem::from).collect();
            info!(target: LOG_TARGET, "Loaded {} headlines for tag '{}'.", items.len(), tag);
            items
        }
        Err(e) => {
            warn!(target: LOG_TARGET, "News feed unavailable, leaving it empty: {}", e);
            Vec::new()
        }
    }
}

/// Runs `load_headlines` off the widget loop and posts the result once.
///
/// A pending fetch does not keep the command channel open.
pub fn spawn_news_loader(
    api: Arc<dyn NewsApiContract>,
    tag: String,
    per_page: usize,
    command_tx: mpsc::WeakSender<WidgetCommand>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let items = load_headlines(api.as_ref(), &tag, per_page).await;
        let delivered = match command_tx.upgrade() {
            Some(tx) => tx.send(WidgetCommand::NewsLoaded(items)).await.is_ok(),
            None => false,
        };
        if !delivered {
            debug!(target: LOG_TARGET, "Widget shut down before headlines arrived.");
        }
    })
}
