use crate::tracing_setup::tracing_init;
use asynctrack::{AsyncTracker, OperationState, Scope, TrackerConfig};
use futures_signals::signal::SignalExt;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, info, warn};

mod tracing_setup;

#[derive(Debug, Clone)]
struct Book {
    title: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_init();

    info!("==========================================");
    warn!("A. Loading the reading list succeeds");

    let scope = Scope::new();
    let tracker: AsyncTracker<Vec<Book>, String> = AsyncTracker::new(&scope);
    let watcher = watch(&tracker);

    let handle = tracker.run(fetch_reading_list(Duration::from_millis(200), true))?;
    info!("  Main | is_loading: {}", tracker.is_loading());
    let books = handle.await?;
    let titles: Vec<&str> = books.iter().map(|book| book.title.as_str()).collect();
    info!("  Main | run returned: {}", titles.join(", "));
    wait_until_settled(&tracker).await;
    info!("  Main | final state: {:?}", tracker.state());

    warn!("B. Loading the reading list fails");
    let result = tracker.run(fetch_reading_list(Duration::from_millis(100), false))?.await;
    info!("  Main | run returned: {:?}", result);
    info!("  Main | is_error: {}, error: {:?}", tracker.is_error(), tracker.error());

    warn!("C. reset and set_data");
    tracker.reset();
    info!("  Main | after reset: {:?}", tracker.state());
    tracker.set_data(vec![Book {
        title: "Cached".to_string(),
    }]);
    info!("  Main | after set_data: {:?}", tracker.state());
    watcher.abort();

    info!("==========================================");
    warn!("D. Keeping the cached list visible while reloading");

    let tracker: AsyncTracker<Vec<Book>, String> = AsyncTracker::with_config(
        &scope,
        OperationState::with_data(vec![Book {
            title: "Cached".to_string(),
        }]),
        TrackerConfig::new().retain_data_while_pending(),
    );
    let handle = tracker.run(fetch_reading_list(Duration::from_millis(100), true))?;
    info!("  Main | pending with data: {:?}", tracker.data());
    handle.await?;
    info!("  Main | reloaded: {:?}", tracker.data());

    scope.end();
    info!("  Main | Finish");
    Ok(())
}

fn watch(tracker: &AsyncTracker<Vec<Book>, String>) -> tokio::task::JoinHandle<()> {
    let signal = tracker.to_signal();
    tokio::spawn(signal.for_each(|state| {
        debug!("Watcher | status: {:?}, data: {:?}", state.status, state.data);
        async {}
    }))
}

async fn wait_until_settled(tracker: &AsyncTracker<Vec<Book>, String>) {
    tracker
        .to_signal()
        .map(|state| state.is_settled())
        .wait_for(true)
        .await;
}

async fn fetch_reading_list(latency: Duration, ok: bool) -> Result<Vec<Book>, String> {
    debug!(" Worker | fetching reading list");
    sleep(latency).await;
    if ok {
        Ok(vec![
            Book {
                title: "The Way of Kings".to_string(),
            },
            Book {
                title: "Voice of War".to_string(),
            },
        ])
    } else {
        Err("Please re-authenticate.".to_string())
    }
}
