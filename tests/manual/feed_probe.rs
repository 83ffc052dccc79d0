//! Probe the news feed endpoint
//!
//! A diagnostic utility that performs one live feed read and prints what the
//! widget would show.
//! Run with: cargo run --bin feed_probe -- [--endpoint https://dev.to/api/articles] [--tag news] [--per-page 5] [--json]

use clap::Parser;
use lost_sounds::news::{NewsApiContract, NewsClient, NewsItem, DEFAULT_NEWS_ENDPOINT, NEWS_PAGE_SIZE, NEWS_TAG};
use std::error::Error;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Articles endpoint
    #[arg(short, long, default_value = DEFAULT_NEWS_ENDPOINT)]
    endpoint: String,

    /// Tag to filter articles by
    #[arg(short, long, default_value = NEWS_TAG)]
    tag: String,

    /// Number of articles to request
    #[arg(short, long, default_value_t = NEWS_PAGE_SIZE)]
    per_page: usize,

    /// Print the headlines as JSON instead of text
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let client = NewsClient::new(&args.endpoint)?;
    eprintln!("Requesting {}", client.articles_url(&args.tag, args.per_page));

    match client.fetch_articles(&args.tag, args.per_page).await {
        Ok(records) => {
            let items: Vec<NewsItem> = records.into_iter().map(NewsItem::from).collect();
            if args.json {
                println!("{}", serde_json::to_string_pretty(&items)?);
                return Ok(());
            }
            println!("✅ Received {} articles", items.len());
            for item in items {
                println!("  * {} - {} ({})", item.title, item.author, item.published_label);
                println!("    {}", item.url);
            }
        }
        Err(e) => {
            println!("❌ Feed request failed: {}", e);
            println!("  - Check the endpoint URL and your network connection");
            return Err(e.into());
        }
    }

    Ok(())
}
