//! Conversions from wire types to domain types for trades.

use super::wire::TradeResponse;
use super::Trade;

impl From<TradeResponse> for Trade {
    fn from(t: TradeResponse) -> Self {
        Self {
            id: t.id,
            account_id: t.account_id,
            contract_id: t.contract_id,
            timestamp: t.creation_timestamp,
            price: t.price,
            profit_and_loss: t.profit_and_loss,
            fees: t.fees,
            side: t.side,
            size: t.size,
            voided: t.voided,
            order_id: t.order_id,
        }
    }
}
