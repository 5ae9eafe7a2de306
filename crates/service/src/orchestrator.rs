//! Execution orchestrator
//!
//! Drives one widget instance through Select -> Processing -> Success, or
//! back to Select on any failure. Every step of an attempt runs strictly in
//! order: wallet address, order build, quote fetch, submission. Exactly one
//! attempt may be in flight; state changes are published on a watch channel
//! any UI layer can subscribe to.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::Utc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};
use uuid::Uuid;

use ponia_config::Settings;
use ponia_types::{
	describe_chain, AggregatorRuntimeConfig, BridgeAdapter, ChainDescriptor, ExecutionStage,
	SwapError, SwapOutcome, SwapResult, SwapSelection, TokenSymbol, WidgetState,
};
use ponia_wallet::WalletAdapter;

use crate::selection::SelectionState;

/// Cosmetic progress ticker for the processing stage
///
/// Advances on a fixed interval regardless of real completion and never
/// reaches the cap before genuine confirmation. Dropping the guard aborts
/// the task, so the timer is cleared on success and failure alike.
struct ProgressTicker {
	handle: JoinHandle<()>,
}

impl ProgressTicker {
	fn spawn(state: watch::Sender<WidgetState>, tick: Duration, cap: u8) -> Self {
		let handle = tokio::spawn(async move {
			let mut interval = tokio::time::interval(tick);
			interval.tick().await;
			loop {
				interval.tick().await;
				state.send_modify(|snapshot| {
					if snapshot.stage == ExecutionStage::Processing
						&& snapshot.progress_percent < cap
					{
						snapshot.progress_percent =
							snapshot.progress_percent.saturating_add(3).min(cap);
					}
				});
			}
		});
		Self { handle }
	}
}

impl Drop for ProgressTicker {
	fn drop(&mut self) {
		self.handle.abort();
	}
}

/// State machine for one swap widget instance
///
/// Owns the selection and the published state exclusively; nothing else
/// writes them. Multiple instances can coexist on a page without
/// interference.
#[derive(Debug)]
pub struct SwapOrchestrator {
	selection: Mutex<SelectionState>,
	wallet: WalletAdapter,
	adapter: Arc<dyn BridgeAdapter>,
	settings: Settings,
	state: watch::Sender<WidgetState>,
	attempt_guard: tokio::sync::Mutex<()>,
}

impl SwapOrchestrator {
	pub fn new(
		destination_chain_id: u64,
		wallet: WalletAdapter,
		adapter: Arc<dyn BridgeAdapter>,
		settings: Settings,
	) -> SwapResult<Self> {
		// Launching against an unknown destination is a configuration error
		describe_chain(destination_chain_id)?;
		let selection = SelectionState::new(destination_chain_id)?;
		let (state, _) = watch::channel(WidgetState::default());

		Ok(Self {
			selection: Mutex::new(selection),
			wallet,
			adapter,
			settings,
			state,
			attempt_guard: tokio::sync::Mutex::new(()),
		})
	}

	/// Subscribe to state snapshots; the receiver always holds the latest
	pub fn subscribe(&self) -> watch::Receiver<WidgetState> {
		self.state.subscribe()
	}

	/// Current state snapshot
	pub fn state(&self) -> WidgetState {
		self.state.borrow().clone()
	}

	/// Current selection snapshot
	pub fn selection(&self) -> SwapSelection {
		self.selection.lock().expect("selection lock").selection().clone()
	}

	pub fn selectable_source_chains(&self) -> Vec<&'static ChainDescriptor> {
		self.selection
			.lock()
			.expect("selection lock")
			.selectable_source_chains()
	}

	pub fn selectable_tokens(&self) -> Vec<(TokenSymbol, bool)> {
		self.selection
			.lock()
			.expect("selection lock")
			.selectable_tokens()
	}

	pub fn set_source_chain(&self, chain_id: u64) -> SwapResult<()> {
		self.guard_interactive()?;
		self.selection
			.lock()
			.expect("selection lock")
			.set_source_chain(chain_id)
	}

	pub fn set_token(&self, token: TokenSymbol) -> SwapResult<()> {
		self.guard_interactive()?;
		self.selection
			.lock()
			.expect("selection lock")
			.set_token(token)
	}

	pub fn set_amount(&self, amount: impl Into<String>) -> SwapResult<()> {
		self.guard_interactive()?;
		self.selection
			.lock()
			.expect("selection lock")
			.set_amount(amount);
		Ok(())
	}

	/// Return a finished widget to the selection stage
	pub fn reset(&self) {
		if self.state.borrow().stage == ExecutionStage::Processing {
			return;
		}
		self.state.send_replace(WidgetState::default());
	}

	/// Run one swap attempt to completion.
	///
	/// Any error is caught here: logged, surfaced as a transient message on
	/// the Select snapshot, and returned. Partial progress (a fetched quote,
	/// a running ticker) is discarded; the widget is immediately usable for
	/// a fresh attempt.
	pub async fn confirm(&self) -> SwapResult<SwapOutcome> {
		let _guard = self
			.attempt_guard
			.try_lock()
			.map_err(|_| SwapError::AttemptInFlight)?;

		let attempt_id = Uuid::new_v4();
		let result = self.run_attempt(attempt_id).await;

		match &result {
			Ok(outcome) => {
				info!(
					"Swap attempt {} confirmed: {} -> {} ({})",
					attempt_id, outcome.source_chain, outcome.destination_chain, outcome.tx_hash
				);
				let outcome = outcome.clone();
				self.state.send_modify(|snapshot| {
					snapshot.stage = ExecutionStage::Success;
					snapshot.progress_percent = 100;
					snapshot.error = None;
					snapshot.outcome = Some(outcome);
				});
			},
			Err(error) => {
				warn!("Swap attempt {} failed: {}", attempt_id, error);
				let message = error.to_string();
				self.state.send_modify(|snapshot| {
					*snapshot = WidgetState::default();
					snapshot.error = Some(message);
				});
			},
		}

		result
	}

	async fn run_attempt(&self, attempt_id: Uuid) -> SwapResult<SwapOutcome> {
		let selection = self.selection();
		let source = describe_chain(selection.source_chain_id)?;
		let destination = describe_chain(selection.destination_chain_id)?;

		debug!(
			"Starting swap attempt {}: {} {} from {} to {}",
			attempt_id, selection.amount, selection.token, source.name, destination.name
		);

		self.state.send_modify(|snapshot| {
			*snapshot = WidgetState::default();
			snapshot.stage = ExecutionStage::Processing;
		});

		// Aborted on every exit path when the guard drops
		let _ticker = ProgressTicker::spawn(
			self.state.clone(),
			Duration::from_millis(self.settings.widget.progress_tick_ms),
			self.settings.widget.progress_cap_percent,
		);

		// (a) Wallet address first: no network call happens without one
		let sender = self.wallet.connected_address(source).await?;

		// (b) Assemble the order with fees and per-family addresses
		let request = crate::params::build_order_request(&selection, &sender, &self.settings)?;
		self.state.send_modify(|snapshot| {
			snapshot.platform_fee = Some(request.platform_fee);
		});

		// (c) One quote per attempt, never retried
		let runtime = AggregatorRuntimeConfig {
			endpoint: self.settings.aggregator.endpoint.clone(),
			headers: self.settings.aggregator.headers.clone(),
		};
		let quote = self.adapter.create_order(&request, &runtime).await?;

		self.state.send_modify(|snapshot| {
			snapshot.estimated_output = Some(quote.estimated_output);
			snapshot.fulfillment_delay_secs = Some(quote.fulfillment_delay_secs);
		});

		// (d) Submission only after the quote; Success only after the hash
		let tx_hash = self.wallet.submit_transaction(source, &quote.tx).await?;

		Ok(SwapOutcome {
			attempt_id,
			source_chain: source.name.clone(),
			destination_chain: destination.name.clone(),
			tx_hash,
			estimated_output: quote.estimated_output,
			fulfillment_delay_secs: quote.fulfillment_delay_secs,
			completed_at: Utc::now(),
		})
	}

	fn guard_interactive(&self) -> SwapResult<()> {
		if self.state.borrow().stage == ExecutionStage::Processing {
			return Err(SwapError::AttemptInFlight);
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use async_trait::async_trait;
	use ponia_types::{
		AggregatorError, AggregatorResult, ChainFamily, EvmTransaction, OrderQuote,
		OrderRequest, RawAmount, SessionConnector, TxDescriptor, TxHash, WalletResult,
	};
	use std::sync::atomic::{AtomicUsize, Ordering};

	#[derive(Debug, Default)]
	struct FakeSession {
		evm_address: Option<String>,
		reject_submission: bool,
		submissions: AtomicUsize,
	}

	#[async_trait]
	impl SessionConnector for FakeSession {
		async fn address(&self, family: ChainFamily) -> WalletResult<Option<String>> {
			Ok(match family {
				ChainFamily::Evm => self.evm_address.clone(),
				_ => None,
			})
		}

		async fn send_evm_transaction(
			&self,
			_chain_id: u64,
			_tx: &EvmTransaction,
		) -> WalletResult<TxHash> {
			self.submissions.fetch_add(1, Ordering::SeqCst);
			if self.reject_submission {
				return Err(ponia_types::WalletError::UserRejected);
			}
			Ok(TxHash::from("0xabc"))
		}
	}

	#[derive(Debug)]
	struct FakeAdapter {
		fail_with_status: Option<u16>,
		delay: Option<Duration>,
		calls: AtomicUsize,
	}

	impl FakeAdapter {
		fn ok() -> Self {
			Self {
				fail_with_status: None,
				delay: None,
				calls: AtomicUsize::new(0),
			}
		}

		fn failing(status: u16) -> Self {
			Self {
				fail_with_status: Some(status),
				delay: None,
				calls: AtomicUsize::new(0),
			}
		}
	}

	#[async_trait]
	impl BridgeAdapter for FakeAdapter {
		fn id(&self) -> &str {
			"fake-v1"
		}

		async fn create_order(
			&self,
			_request: &OrderRequest,
			_config: &AggregatorRuntimeConfig,
		) -> AggregatorResult<OrderQuote> {
			self.calls.fetch_add(1, Ordering::SeqCst);
			if let Some(delay) = self.delay {
				tokio::time::sleep(delay).await;
			}
			if let Some(status) = self.fail_with_status {
				return Err(AggregatorError::HttpStatus {
					status,
					body: "{\"errorMessage\":\"boom\"}".to_string(),
				});
			}
			Ok(OrderQuote {
				estimated_output: RawAmount::new(99_850_000),
				fulfillment_delay_secs: 12,
				tx: TxDescriptor::Evm(EvmTransaction {
					to: "0x663DC15D3C1aC63ff12E45Ab68FeA3F0a883C251".to_string(),
					data: "0xdeadbeef".to_string(),
					value: "0".to_string(),
					gas_limit: Some(300_000),
				}),
			})
		}

		async fn health_check(
			&self,
			_config: &AggregatorRuntimeConfig,
		) -> AggregatorResult<bool> {
			Ok(true)
		}
	}

	fn connected_session() -> Arc<FakeSession> {
		Arc::new(FakeSession {
			evm_address: Some("0x742d35cc6634c0532925a3b8d2a27f79c5a85b03".to_string()),
			..Default::default()
		})
	}

	fn orchestrator(
		session: Arc<FakeSession>,
		adapter: Arc<FakeAdapter>,
	) -> SwapOrchestrator {
		let orchestrator = SwapOrchestrator::new(
			1,
			WalletAdapter::new(session),
			adapter,
			Settings::default(),
		)
		.unwrap();
		orchestrator.set_source_chain(137).unwrap();
		orchestrator.set_token(TokenSymbol::Usdc).unwrap();
		orchestrator.set_amount("100").unwrap();
		orchestrator
	}

	#[tokio::test]
	async fn test_successful_swap_reaches_success_with_hash() {
		let session = connected_session();
		let adapter = Arc::new(FakeAdapter::ok());
		let orchestrator = orchestrator(session.clone(), adapter.clone());
		let mut receiver = orchestrator.subscribe();

		let outcome = orchestrator.confirm().await.unwrap();

		assert_eq!(outcome.tx_hash.as_str(), "0xabc");
		assert_eq!(outcome.source_chain, "Polygon");
		assert_eq!(outcome.destination_chain, "Ethereum");

		let state = receiver.borrow_and_update().clone();
		assert_eq!(state.stage, ExecutionStage::Success);
		assert_eq!(state.progress_percent, 100);
		assert_eq!(state.platform_fee, Some(RawAmount::new(1_500_000)));
		assert_eq!(state.estimated_output, Some(RawAmount::new(99_850_000)));
		assert_eq!(state.outcome.unwrap().tx_hash.as_str(), "0xabc");
		assert_eq!(adapter.calls.load(Ordering::SeqCst), 1);
		assert_eq!(session.submissions.load(Ordering::SeqCst), 1);
	}

	#[tokio::test]
	async fn test_aggregator_failure_recovers_to_select() {
		let session = connected_session();
		let adapter = Arc::new(FakeAdapter::failing(500));
		let orchestrator = orchestrator(session.clone(), adapter.clone());

		let err = orchestrator.confirm().await.unwrap_err();
		assert!(matches!(err, SwapError::Aggregator(_)));

		let state = orchestrator.state();
		assert_eq!(state.stage, ExecutionStage::Select);
		assert!(state.error.as_deref().unwrap().contains("500"));
		assert!(state.is_confirm_enabled());
		// The submission step was never reached
		assert_eq!(session.submissions.load(Ordering::SeqCst), 0);

		// The widget is immediately usable for another attempt
		assert!(orchestrator.set_amount("50").is_ok());
	}

	#[tokio::test]
	async fn test_no_wallet_never_calls_aggregator() {
		let session = Arc::new(FakeSession::default());
		let adapter = Arc::new(FakeAdapter::ok());
		let orchestrator = orchestrator(session, adapter.clone());

		let err = orchestrator.confirm().await.unwrap_err();
		assert!(matches!(
			err,
			SwapError::Wallet(ponia_types::WalletError::NotConnected { .. })
		));
		assert_eq!(adapter.calls.load(Ordering::SeqCst), 0);
		assert_eq!(orchestrator.state().stage, ExecutionStage::Select);
	}

	#[tokio::test]
	async fn test_invalid_amount_aborts_before_quote() {
		let orchestrator = orchestrator(connected_session(), Arc::new(FakeAdapter::ok()));
		orchestrator.set_amount("abc").unwrap();

		let err = orchestrator.confirm().await.unwrap_err();
		assert!(matches!(err, SwapError::InvalidAmount(_)));
		assert_eq!(orchestrator.state().stage, ExecutionStage::Select);
	}

	#[tokio::test]
	async fn test_user_rejection_recovers_to_select() {
		let session = Arc::new(FakeSession {
			evm_address: Some("0x742d35cc6634c0532925a3b8d2a27f79c5a85b03".to_string()),
			reject_submission: true,
			..Default::default()
		});
		let orchestrator = orchestrator(session, Arc::new(FakeAdapter::ok()));

		let err = orchestrator.confirm().await.unwrap_err();
		assert!(matches!(
			err,
			SwapError::Wallet(ponia_types::WalletError::UserRejected)
		));
		assert_eq!(orchestrator.state().stage, ExecutionStage::Select);
		assert!(orchestrator.state().error.is_some());
	}

	#[tokio::test]
	async fn test_second_confirm_while_processing_is_rejected() {
		let adapter = Arc::new(FakeAdapter {
			fail_with_status: None,
			delay: Some(Duration::from_millis(200)),
			calls: AtomicUsize::new(0),
		});
		let orchestrator = Arc::new(orchestrator(connected_session(), adapter));

		let first = {
			let orchestrator = Arc::clone(&orchestrator);
			tokio::spawn(async move { orchestrator.confirm().await })
		};
		tokio::time::sleep(Duration::from_millis(50)).await;

		// Confirm control is disabled while an attempt is in flight
		assert!(matches!(
			orchestrator.confirm().await.unwrap_err(),
			SwapError::AttemptInFlight
		));
		assert!(matches!(
			orchestrator.set_amount("1").unwrap_err(),
			SwapError::AttemptInFlight
		));

		first.await.unwrap().unwrap();
		assert_eq!(orchestrator.state().stage, ExecutionStage::Success);
	}

	#[tokio::test]
	async fn test_progress_stays_below_cap_until_confirmation() {
		let adapter = Arc::new(FakeAdapter {
			fail_with_status: None,
			delay: Some(Duration::from_millis(150)),
			calls: AtomicUsize::new(0),
		});
		let mut settings = Settings::default();
		settings.widget.progress_tick_ms = 10;
		let orchestrator = SwapOrchestrator::new(
			1,
			WalletAdapter::new(connected_session()),
			adapter,
			settings,
		)
		.unwrap();
		orchestrator.set_source_chain(137).unwrap();
		orchestrator.set_token(TokenSymbol::Usdc).unwrap();
		orchestrator.set_amount("100").unwrap();

		let orchestrator = Arc::new(orchestrator);
		let attempt = {
			let orchestrator = Arc::clone(&orchestrator);
			tokio::spawn(async move { orchestrator.confirm().await })
		};
		tokio::time::sleep(Duration::from_millis(80)).await;

		let state = orchestrator.state();
		assert_eq!(state.stage, ExecutionStage::Processing);
		assert!(state.progress_percent > 0);
		assert!(state.progress_percent <= 95);

		attempt.await.unwrap().unwrap();
		assert_eq!(orchestrator.state().progress_percent, 100);
	}

	#[tokio::test]
	async fn test_reset_returns_success_to_select() {
		let orchestrator = orchestrator(connected_session(), Arc::new(FakeAdapter::ok()));
		orchestrator.confirm().await.unwrap();
		assert_eq!(orchestrator.state().stage, ExecutionStage::Success);

		orchestrator.reset();
		let state = orchestrator.state();
		assert_eq!(state.stage, ExecutionStage::Select);
		assert!(state.outcome.is_none());
		assert_eq!(state.progress_percent, 0);
	}
}
