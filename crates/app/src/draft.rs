//! Client-owned draft of an order being composed.

use std::mem;

use thiserror::Error;
use tracing::debug;

use vitrine_client::{ApiError, OrderClient};
use vitrine_core::{CreateOrderRequest, Order, OrderLine, Product};

/// Rejected draft operation: the draft is not in a state that allows it.
///
/// The draft is left exactly as it was.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid draft state: {reason}")]
pub struct InvalidDraftState {
    reason: &'static str,
}

impl InvalidDraftState {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// Failure of [`OrderDraft::submit`].
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SubmitError {
    #[error(transparent)]
    Draft(#[from] InvalidDraftState),

    #[error(transparent)]
    Api(#[from] ApiError),
}

/// One editable line of the draft.
///
/// `product_id` starts unselected; `quantity` is at least 1 at all times.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftLine {
    pub product_id: Option<i64>,
    pub quantity: u32,
}

impl DraftLine {
    fn empty() -> Self {
        Self {
            product_id: None,
            quantity: 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
enum DraftState {
    #[default]
    Closed,
    Open(Vec<DraftLine>),
    Submitting(Vec<DraftLine>),
}

/// Order draft state machine: `Closed → Open → (Submitting → Closed) |
/// Closed`.
///
/// Exists only between "start composing" and "submit or cancel". While
/// open it holds at least one line — removing the last line is rejected
/// rather than leaving an empty draft. Pricing is resolved against a
/// catalog snapshot at submission time; the order service remains the
/// price and stock authority.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OrderDraft {
    state: DraftState,
}

impl OrderDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, DraftState::Open(_))
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.state, DraftState::Submitting(_))
    }

    /// The draft's lines; empty when no draft is open.
    pub fn lines(&self) -> &[DraftLine] {
        match &self.state {
            DraftState::Closed => &[],
            DraftState::Open(lines) | DraftState::Submitting(lines) => lines,
        }
    }

    /// Start composing. The new draft has exactly one empty line.
    pub fn open(&mut self) -> Result<(), InvalidDraftState> {
        match self.state {
            DraftState::Closed => {
                self.state = DraftState::Open(vec![DraftLine::empty()]);
                Ok(())
            }
            _ => Err(InvalidDraftState::new("a draft is already open")),
        }
    }

    /// Append an empty line.
    pub fn add_line(&mut self) -> Result<(), InvalidDraftState> {
        self.open_lines()?.push(DraftLine::empty());
        Ok(())
    }

    /// Remove the line at `index`. Removing the only remaining line is
    /// rejected: an open draft never has zero lines.
    pub fn remove_line(&mut self, index: usize) -> Result<(), InvalidDraftState> {
        let lines = self.open_lines()?;
        if index >= lines.len() {
            return Err(InvalidDraftState::new("no line at that index"));
        }
        if lines.len() == 1 {
            return Err(InvalidDraftState::new("a draft keeps at least one line"));
        }
        lines.remove(index);
        Ok(())
    }

    pub fn set_product(&mut self, index: usize, product_id: i64) -> Result<(), InvalidDraftState> {
        self.line_mut(index)?.product_id = Some(product_id);
        Ok(())
    }

    pub fn set_quantity(&mut self, index: usize, quantity: u32) -> Result<(), InvalidDraftState> {
        if quantity == 0 {
            return Err(InvalidDraftState::new("quantity is at least 1"));
        }
        self.line_mut(index)?.quantity = quantity;
        Ok(())
    }

    /// Discard the draft. Local only; an already in-flight submit is not
    /// aborted.
    pub fn cancel(&mut self) -> Result<(), InvalidDraftState> {
        match self.state {
            DraftState::Open(_) => {
                self.state = DraftState::Closed;
                Ok(())
            }
            _ => Err(InvalidDraftState::new("no open draft to cancel")),
        }
    }

    /// Map the draft to the wire payload, resolving each line's price from
    /// the catalog snapshot.
    ///
    /// A line whose product is missing from the snapshot (or still
    /// unselected, sent as product id 0) resolves to price 0 rather than
    /// failing: the order service holds price authority and may override.
    pub fn payload(&self, catalog: &[Product]) -> Result<CreateOrderRequest, InvalidDraftState> {
        match &self.state {
            DraftState::Open(lines) | DraftState::Submitting(lines) => Ok(CreateOrderRequest {
                lines: lines.iter().map(|line| price_line(line, catalog)).collect(),
            }),
            DraftState::Closed => Err(InvalidDraftState::new("no open draft")),
        }
    }

    /// Submit the draft: `Open → Submitting`, then `Closed` on success (the
    /// caller should refresh its order list) or back to `Open` with every
    /// line intact on failure, so the user can correct and resubmit.
    pub async fn submit(
        &mut self,
        orders: &OrderClient,
        catalog: &[Product],
    ) -> Result<Order, SubmitError> {
        let lines = match mem::take(&mut self.state) {
            DraftState::Open(lines) => lines,
            other => {
                self.state = other;
                return Err(InvalidDraftState::new("submit requires an open draft").into());
            }
        };
        let payload = CreateOrderRequest {
            lines: lines.iter().map(|line| price_line(line, catalog)).collect(),
        };
        self.state = DraftState::Submitting(lines);
        debug!(lines = payload.lines.len(), "submitting order");

        match orders.create(&payload).await {
            Ok(order) => {
                self.state = DraftState::Closed;
                Ok(order)
            }
            Err(error) => {
                if let DraftState::Submitting(lines) = mem::take(&mut self.state) {
                    self.state = DraftState::Open(lines);
                }
                Err(error.into())
            }
        }
    }

    fn open_lines(&mut self) -> Result<&mut Vec<DraftLine>, InvalidDraftState> {
        match &mut self.state {
            DraftState::Open(lines) => Ok(lines),
            _ => Err(InvalidDraftState::new("no open draft")),
        }
    }

    fn line_mut(&mut self, index: usize) -> Result<&mut DraftLine, InvalidDraftState> {
        self.open_lines()?
            .get_mut(index)
            .ok_or(InvalidDraftState::new("no line at that index"))
    }
}

fn price_line(line: &DraftLine, catalog: &[Product]) -> OrderLine {
    let product_id = line.product_id.unwrap_or(0);
    let price = catalog
        .iter()
        .find(|product| product.id == product_id)
        .map(|product| product.price)
        .unwrap_or(0.0);

    OrderLine {
        product_id,
        quantity: line.quantity,
        price,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use url::Url;
    use vitrine_auth::TokenStore;
    use vitrine_client::Dispatcher;

    fn product(id: i64, price: f64, stock: i64) -> Product {
        Product {
            id,
            name: format!("produit-{id}"),
            description: String::new(),
            price,
            stock,
        }
    }

    fn open_draft() -> OrderDraft {
        let mut draft = OrderDraft::new();
        draft.open().unwrap();
        draft
    }

    #[test]
    fn open_starts_with_one_empty_line() {
        let draft = open_draft();
        assert!(draft.is_open());
        assert_eq!(draft.lines(), &[DraftLine { product_id: None, quantity: 1 }]);
    }

    #[test]
    fn removing_a_line_shifts_later_lines_down() {
        let mut draft = open_draft();
        draft.set_product(0, 1).unwrap();
        draft.add_line().unwrap();
        draft.set_product(1, 2).unwrap();

        draft.remove_line(0).unwrap();

        assert_eq!(draft.lines().len(), 1);
        assert_eq!(draft.lines()[0].product_id, Some(2));
    }

    #[test]
    fn removing_the_only_line_is_rejected_and_the_draft_is_unchanged() {
        let mut draft = open_draft();
        draft.set_product(0, 7).unwrap();
        let before = draft.clone();

        assert!(draft.remove_line(0).is_err());
        assert_eq!(draft, before);
    }

    #[test]
    fn edits_are_rejected_while_closed() {
        let mut draft = OrderDraft::new();
        assert!(draft.add_line().is_err());
        assert!(draft.remove_line(0).is_err());
        assert!(draft.set_product(0, 1).is_err());
        assert!(draft.cancel().is_err());
    }

    #[test]
    fn zero_quantity_is_rejected() {
        let mut draft = open_draft();
        assert!(draft.set_quantity(0, 0).is_err());
        assert_eq!(draft.lines()[0].quantity, 1);
    }

    #[test]
    fn reopening_an_open_draft_is_rejected() {
        let mut draft = open_draft();
        draft.set_product(0, 3).unwrap();
        assert!(draft.open().is_err());
        assert_eq!(draft.lines()[0].product_id, Some(3));
    }

    #[test]
    fn cancel_discards_the_lines() {
        let mut draft = open_draft();
        draft.add_line().unwrap();
        draft.cancel().unwrap();
        assert!(!draft.is_open());
        assert!(draft.lines().is_empty());
    }

    #[test]
    fn payload_resolves_prices_from_the_snapshot() {
        let catalog = vec![product(1, 9.99, 5)];
        let mut draft = open_draft();
        draft.set_product(0, 1).unwrap();
        draft.set_quantity(0, 2).unwrap();

        let payload = draft.payload(&catalog).unwrap();
        assert_eq!(
            payload.lines,
            vec![OrderLine { product_id: 1, quantity: 2, price: 9.99 }]
        );
    }

    #[test]
    fn unknown_product_resolves_to_price_zero() {
        // Current behavior inherited from the reference client: a line whose
        // product is not in the snapshot ships with prix = 0 and the order
        // service decides what to do with it.
        let catalog = vec![product(1, 9.99, 5)];
        let mut draft = open_draft();
        draft.set_product(0, 42).unwrap();

        let payload = draft.payload(&catalog).unwrap();
        assert_eq!(payload.lines[0].product_id, 42);
        assert_eq!(payload.lines[0].price, 0.0);
    }

    #[test]
    fn unselected_product_ships_as_id_zero() {
        let draft = open_draft();
        let payload = draft.payload(&[]).unwrap();
        assert_eq!(payload.lines[0].product_id, 0);
        assert_eq!(payload.lines[0].price, 0.0);
    }

    #[tokio::test]
    async fn failed_submit_reopens_the_draft_with_all_lines_intact() {
        // Nothing listens on this port, so create() fails with Unreachable.
        let orders = OrderClient::new(Dispatcher::new(
            Url::parse("http://127.0.0.1:9").unwrap(),
            TokenStore::new(),
        ));
        let catalog = vec![product(1, 9.99, 5)];

        let mut draft = open_draft();
        draft.set_product(0, 1).unwrap();
        draft.set_quantity(0, 2).unwrap();
        let lines_before = draft.lines().to_vec();

        let error = draft.submit(&orders, &catalog).await.unwrap_err();
        assert!(matches!(error, SubmitError::Api(ApiError::Unreachable(_))));
        assert!(draft.is_open());
        assert_eq!(draft.lines(), lines_before.as_slice());

        // The user can resubmit without re-entering anything.
        let error = draft.submit(&orders, &catalog).await.unwrap_err();
        assert!(matches!(error, SubmitError::Api(ApiError::Unreachable(_))));
        assert!(draft.is_open());
    }

    #[tokio::test]
    async fn submit_on_a_closed_draft_is_rejected_without_a_network_call() {
        let orders = OrderClient::new(Dispatcher::new(
            Url::parse("http://127.0.0.1:9").unwrap(),
            TokenStore::new(),
        ));

        let mut draft = OrderDraft::new();
        let error = draft.submit(&orders, &[]).await.unwrap_err();
        assert!(matches!(error, SubmitError::Draft(_)));
        assert!(!draft.is_open());
    }

    proptest! {
        #[test]
        fn an_open_draft_never_drops_to_zero_lines(ops in proptest::collection::vec(0usize..3, 0..40)) {
            let mut draft = open_draft();
            for op in ops {
                match op {
                    0 => { let _ = draft.add_line(); }
                    1 => { let _ = draft.remove_line(0); }
                    _ => { let _ = draft.remove_line(draft.lines().len().saturating_sub(1)); }
                }
                prop_assert!(!draft.lines().is_empty());
            }
        }
    }
}
