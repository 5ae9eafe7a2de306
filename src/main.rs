//! Ponia swap widget demo
//!
//! Drives one simulated swap through the orchestrator with mock connectors,
//! logging every state transition a UI layer would render.

use ponia_swap::mocks::{MockBridgeAdapter, MockSessionConnector};
use ponia_swap::{load_config, SwapWidgetBuilder, TokenSymbol};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	dotenvy::dotenv().ok();

	let settings = load_config().unwrap_or_default();
	ponia_swap::init_tracing(&settings);

	let widget = SwapWidgetBuilder::new()
		.with_settings(settings)
		.with_session_connector(MockSessionConnector::connected_evm())
		.with_adapter(MockBridgeAdapter::quoting(99_850_000))
		.with_destination_query("chain=1")
		.start()?;

	// Log snapshots the way a UI would render them
	let mut state_rx = widget.subscribe();
	let watcher = tokio::spawn(async move {
		while state_rx.changed().await.is_ok() {
			let snapshot = state_rx.borrow().clone();
			info!(
				"stage={:?} progress={}% error={:?}",
				snapshot.stage, snapshot.progress_percent, snapshot.error
			);
		}
	});

	widget.set_source_chain(137)?;
	widget.set_token(TokenSymbol::Usdc)?;
	widget.set_amount("100")?;

	let outcome = widget.confirm().await?;
	info!(
		"Swap confirmed: {} -> {}, tx {}, estimated output {}",
		outcome.source_chain, outcome.destination_chain, outcome.tx_hash,
		outcome.estimated_output
	);

	drop(widget);
	let _ = watcher.await;
	Ok(())
}
