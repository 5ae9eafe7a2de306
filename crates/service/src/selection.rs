//! Selection state owned by one widget instance
//!
//! The destination chain is fixed at construction; the source chain and
//! token move with user input. Switching the source chain re-checks the
//! token and coerces it to one the new route can carry.

use tracing::debug;

use ponia_types::{
	available_tokens, describe_chain, describe_token, supported_chains, ChainDescriptor,
	SwapError, SwapResult, SwapSelection, TokenSymbol,
};

/// Mutable selection for one widget session
#[derive(Debug, Clone)]
pub struct SelectionState {
	selection: SwapSelection,
}

impl SelectionState {
	/// Create the initial selection for the given destination chain.
	///
	/// The source defaults to the first supported chain that is not the
	/// destination; an unknown destination is a configuration error.
	pub fn new(destination_chain_id: u64) -> SwapResult<Self> {
		describe_chain(destination_chain_id)?;

		let source = supported_chains()
			.iter()
			.find(|chain| chain.chain_id != destination_chain_id)
			.ok_or(SwapError::Registry(
				ponia_types::RegistryError::UnknownChain {
					chain_id: destination_chain_id,
				},
			))?;

		let mut state = Self {
			selection: SwapSelection::new(
				source.chain_id,
				destination_chain_id,
				TokenSymbol::Native,
			),
		};
		state.coerce_token();
		Ok(state)
	}

	pub fn selection(&self) -> &SwapSelection {
		&self.selection
	}

	/// Source chains offered to the user: every supported chain except the
	/// destination
	pub fn selectable_source_chains(&self) -> Vec<&'static ChainDescriptor> {
		supported_chains()
			.iter()
			.filter(|chain| chain.chain_id != self.selection.destination_chain_id)
			.collect()
	}

	/// Token entries with their enablement on the current source chain
	pub fn selectable_tokens(&self) -> Vec<(TokenSymbol, bool)> {
		let available = available_tokens(self.selection.source_chain_id);
		TokenSymbol::FALLBACK_ORDER
			.iter()
			.map(|symbol| (*symbol, available.contains(symbol)))
			.collect()
	}

	pub fn set_source_chain(&mut self, chain_id: u64) -> SwapResult<()> {
		describe_chain(chain_id)?;
		if chain_id == self.selection.destination_chain_id {
			// The destination is never offered as a source
			return Err(SwapError::Registry(
				ponia_types::RegistryError::UnknownChain { chain_id },
			));
		}
		self.selection.source_chain_id = chain_id;
		self.coerce_token();
		Ok(())
	}

	pub fn set_token(&mut self, token: TokenSymbol) -> SwapResult<()> {
		let descriptor = describe_token(token)?;
		if !descriptor.is_available_on(self.selection.source_chain_id) {
			return Err(SwapError::UnsupportedTokenRoute {
				token,
				chain_id: self.selection.source_chain_id,
			});
		}
		self.selection.token = token;
		Ok(())
	}

	pub fn set_amount(&mut self, amount: impl Into<String>) {
		// Stored as typed; validated when the order is built
		self.selection.amount = amount.into();
	}

	/// Keep the token invariant: the selected token must exist on both ends
	/// of the route. Falls back native -> usdc -> usdt; native exists on
	/// every supported chain, so the fallback always lands.
	fn coerce_token(&mut self) {
		let source = self.selection.source_chain_id;
		let destination = self.selection.destination_chain_id;

		let usable = |symbol: TokenSymbol| {
			describe_token(symbol)
				.map(|token| {
					token.is_available_on(source) && token.is_available_on(destination)
				})
				.unwrap_or(false)
		};

		if usable(self.selection.token) {
			return;
		}

		for symbol in TokenSymbol::FALLBACK_ORDER {
			if usable(symbol) {
				debug!(
					"Coercing token {} -> {} for route {} -> {}",
					self.selection.token, symbol, source, destination
				);
				self.selection.token = symbol;
				return;
			}
		}
	}
}
