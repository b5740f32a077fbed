//! # Order Sink Boundary
//!
//! Where a composed order leaves the system.
//!
//! Delivery is fire-and-forget: the sink accepts the request and no
//! acknowledgment is consumed. Orders leave the system as `wa.me` deep
//! links opened in the visitor's browser; a library crate cannot own a
//! window, so the shipped implementation emits the link for the host
//! shell to open.

use tracing::info;

use warung_core::order::OrderRequest;

/// The outbound message channel for composed orders.
pub trait OrderSink {
    /// Hands off a composed order. Fire-and-forget.
    fn deliver(&mut self, order: &OrderRequest);
}

/// Delivers orders as WhatsApp deep links.
///
/// Builds `https://wa.me/<destination>?text=<encoded message>` and logs
/// it at info level; the host shell watches for these and opens them.
#[derive(Debug, Clone, Copy, Default)]
pub struct WhatsAppLink;

impl OrderSink for WhatsAppLink {
    fn deliver(&mut self, order: &OrderRequest) {
        let url = order.whatsapp_url();
        info!(destination = %order.destination, %url, "order handed to WhatsApp link sink");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whatsapp_link_accepts_orders() {
        let mut sink = WhatsAppLink;
        let order = OrderRequest {
            destination: "6285707808522".to_string(),
            message: "Halo".to_string(),
        };
        // Fire-and-forget: must not panic, returns nothing
        sink.deliver(&order);
    }
}
