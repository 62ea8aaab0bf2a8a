use crate::tracing_setup::tracing_init;
use asynctrack::{AsyncTracker, Scope, TrackerStreamExt};
use futures::StreamExt;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, info, warn};

mod tracing_setup;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_init();

    info!("==========================================");
    warn!("A. A newer search supersedes an older, slower one");

    let scope = Scope::new();
    let tracker: AsyncTracker<String, String> = AsyncTracker::new(&scope);

    let slow = tracker.run(search("vo", Duration::from_millis(300)))?;
    let fast = tracker.run(search("voice", Duration::from_millis(100)))?;

    info!("  Main | fast search returned: {:?}", fast.await);
    info!("  Main | state: {:?}", tracker.state());
    info!("  Main | slow search returned: {:?}", slow.await);
    info!("  Main | state is unchanged: {:?}", tracker.state());

    info!("==========================================");
    warn!("B. The screen goes away while a request is in flight");

    let screen = Scope::new();
    let guard = screen.drop_guard();
    let tracker: AsyncTracker<String, String> = AsyncTracker::new(&screen);

    let states = tracker.to_stream().until_settled();
    let printer = tokio::spawn(states.for_each(|state| {
        debug!("Watcher | {:?}", state);
        async {}
    }));

    let handle = tracker.run(search("way of kings", Duration::from_millis(200)))?;
    sleep(Duration::from_millis(50)).await;
    drop(guard);
    info!("  Main | screen live: {}", tracker.is_live());

    info!("  Main | run still returned: {:?}", handle.await);
    info!("  Main | state after teardown: {:?}", tracker.state());
    printer.abort();

    scope.end();
    info!("  Main | Finish");
    Ok(())
}

async fn search(query: &'static str, latency: Duration) -> Result<String, String> {
    debug!(" Worker | searching for {query:?}");
    sleep(latency).await;
    Ok(format!("results for {query:?}"))
}
