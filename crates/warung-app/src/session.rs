//! # Session
//!
//! The event-driven heart of the storefront: owns the application state
//! and turns user intents into state transitions.
//!
//! ## Event Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Session Event Flow                            │
//! │                                                                     │
//! │  Renderer (external)          Session                State          │
//! │  ───────────────────          ───────                ─────          │
//! │                                                                     │
//! │  click "Tambah" ──────────► AddToCart(id) ─────────► cart.add       │
//! │  click "+" ───────────────► Increase(id) ──────────► qty += 1       │
//! │  click "−" ───────────────► Decrease(id) ──────────► qty -= 1/del   │
//! │  click trash ─────────────► Remove(id) ────────────► line deleted   │
//! │  click product card ──────► ShowDetail(id) ────────► overlay        │
//! │  click cart button ───────► OpenCart ──────────────► overlay        │
//! │  click close / backdrop ──► Dismiss ───────────────► overlay        │
//! │  click "Checkout" ────────► Checkout(info) ────────► compose+clear  │
//! │                                                                     │
//! │  Every mutation is followed by a synchronous re-render through      │
//! │  the ViewRenderer boundary before the next event is processed.      │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Single-threaded and cooperative: each event runs to completion
//! (including its re-render) before the next one; the catalog fetch is
//! the only suspending operation and happens once at startup.

use tracing::{debug, info, warn};

use warung_core::order::compose_order;
use warung_core::types::{CustomerInfo, Product};

use crate::catalog::CatalogClient;
use crate::error::AppError;
use crate::notify::Notice;
use crate::sink::OrderSink;
use crate::state::{CartState, CatalogState, Config};
use crate::view::{Overlay, ViewRenderer, ViewState};

/// Toast shown when the catalog fetch fails.
const CATALOG_FETCH_FAILED: &str = "Gagal memuat produk. Silakan coba lagi nanti.";

/// Toast shown after a successful checkout hand-off.
const ORDER_SENT: &str = "Pesanan berhasil dikirim via WhatsApp";

// =============================================================================
// UI Events
// =============================================================================

/// A user intent, emitted by the rendering layer.
///
/// State transitions are decoupled from the renderer's event wiring:
/// whatever the widgets look like, they speak to the session only
/// through this enum.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// Add one unit of a catalog product to the cart.
    AddToCart(u64),
    /// Increment an existing cart line.
    Increase(u64),
    /// Decrement an existing cart line (removes it at quantity 1).
    Decrease(u64),
    /// Delete a cart line.
    Remove(u64),
    /// Open the product-detail overlay.
    ShowDetail(u64),
    /// Open the cart / checkout overlay.
    OpenCart,
    /// Close whatever overlay is open.
    Dismiss,
    /// Submit the order with the form contents as typed.
    Checkout(CustomerInfo),
}

// =============================================================================
// Session
// =============================================================================

/// One visitor session: catalog, cart, checkout form and overlay state,
/// wired to a renderer and an order sink.
///
/// Initialization is defined as empty cart, empty catalog, customer form
/// at the configured defaults. There is no teardown; the session ends
/// with the page lifetime.
pub struct Session<R: ViewRenderer, S: OrderSink> {
    config: Config,
    catalog: CatalogState,
    cart: CartState,
    customer: CustomerInfo,
    overlay: Overlay,
    renderer: R,
    sink: S,
}

impl<R: ViewRenderer, S: OrderSink> Session<R, S> {
    /// Creates a fresh session.
    pub fn new(config: Config, renderer: R, sink: S) -> Self {
        let customer = config.customer_defaults.clone();
        Session {
            config,
            catalog: CatalogState::new(),
            cart: CartState::new(),
            customer,
            overlay: Overlay::None,
            renderer,
            sink,
        }
    }

    // -------------------------------------------------------------------------
    // Startup
    // -------------------------------------------------------------------------

    /// Runs the one-shot catalog fetch and installs the result.
    ///
    /// Two terminal outcomes, consumed exactly once at startup:
    /// - success: catalog populated, product grid rendered
    /// - failure: error toast, catalog stays empty, UI continuable
    ///
    /// Fails closed; there is no automatic retry.
    pub async fn load_catalog(&mut self, client: &CatalogClient) -> Result<usize, AppError> {
        match client.fetch().await {
            Ok(products) => {
                info!(count = products.len(), "catalog loaded");
                let count = products.len();
                self.install_catalog(products);
                Ok(count)
            }
            Err(err) => {
                warn!(error = %err, "catalog fetch failed; product list stays empty");
                self.renderer.notify(&Notice::error(CATALOG_FETCH_FAILED));
                self.render();
                Err(err.into())
            }
        }
    }

    /// Installs an already-fetched catalog and renders the grid.
    ///
    /// Split out of [`load_catalog`](Self::load_catalog) so a host that
    /// fetches products itself can inject them.
    pub fn install_catalog(&mut self, products: Vec<Product>) {
        self.catalog.populate(products);
        self.render();
    }

    // -------------------------------------------------------------------------
    // Event Dispatch
    // -------------------------------------------------------------------------

    /// Processes one user intent to completion, re-render included.
    pub fn dispatch(&mut self, event: UiEvent) {
        debug!(?event, "dispatch");

        match event {
            UiEvent::AddToCart(id) => self.add_to_cart(id),
            UiEvent::Increase(id) => {
                self.cart.with_cart_mut(|cart| cart.increase(id));
                self.render();
            }
            UiEvent::Decrease(id) => {
                self.cart.with_cart_mut(|cart| cart.decrease(id));
                self.render();
            }
            UiEvent::Remove(id) => {
                self.cart.with_cart_mut(|cart| cart.remove(id));
                self.render();
            }
            UiEvent::ShowDetail(id) => self.show_detail(id),
            UiEvent::OpenCart => {
                self.overlay = Overlay::Cart;
                self.render();
            }
            UiEvent::Dismiss => {
                self.overlay = Overlay::None;
                self.render();
            }
            UiEvent::Checkout(info) => self.checkout(info),
        }
    }

    /// Adds a catalog product to the cart and confirms with a toast.
    ///
    /// An id the catalog does not know is a silent no-op; it cannot
    /// happen while catalog and cart stay consistent within a session.
    fn add_to_cart(&mut self, product_id: u64) {
        let Some(product) = self.catalog.get(product_id).cloned() else {
            debug!(product_id, "add_to_cart for unknown product, ignoring");
            return;
        };

        self.cart.with_cart_mut(|cart| cart.add(&product));
        self.renderer
            .notify(&Notice::info(format!("{} ditambahkan ke keranjang", product.title)));
        self.render();
    }

    /// Opens the detail overlay for a known product; unknown ids are
    /// ignored.
    fn show_detail(&mut self, product_id: u64) {
        if self.catalog.get(product_id).is_none() {
            debug!(product_id, "show_detail for unknown product, ignoring");
            return;
        }
        self.overlay = Overlay::ProductDetail(product_id);
        self.render();
    }

    // -------------------------------------------------------------------------
    // Checkout
    // -------------------------------------------------------------------------

    /// Validates the form, composes the order and hands it to the sink.
    ///
    /// On a validation failure the specific message is shown and the
    /// cart and form (the values as typed) stay untouched. On success
    /// the cart is cleared, the form resets to the configured defaults
    /// and the cart overlay closes.
    fn checkout(&mut self, info: CustomerInfo) {
        self.customer = info;

        let rate = self.config.exchange_rate;
        let customer = self.customer.clone();
        let result = self
            .cart
            .with_cart(|cart| compose_order(&customer, cart, rate));

        match result {
            Err(err) => {
                debug!(error = %err, "checkout rejected");
                self.renderer.notify(&Notice::error(err.user_message()));
            }
            Ok(order) => {
                info!(destination = %order.destination, "order composed, delivering");
                self.sink.deliver(&order);

                self.cart.with_cart_mut(|cart| cart.clear());
                self.customer = self.config.customer_defaults.clone();
                self.overlay = Overlay::None;

                self.renderer.notify(&Notice::info(ORDER_SENT));
                self.render();
            }
        }
    }

    // -------------------------------------------------------------------------
    // Rendering
    // -------------------------------------------------------------------------

    /// Rebuilds the full view snapshot and hands it to the renderer.
    /// Called after every state mutation; derived totals are always
    /// recomputed, never carried over from the previous frame.
    fn render(&mut self) {
        let view = ViewState {
            products: self.catalog.products().to_vec(),
            cart: self.cart.view(self.config.exchange_rate),
            overlay: self.overlay,
        };
        self.renderer.render(&view);
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    /// The shared cart handle.
    pub fn cart(&self) -> &CartState {
        &self.cart
    }

    /// The catalog snapshot.
    pub fn catalog(&self) -> &CatalogState {
        &self.catalog
    }

    /// The checkout form as currently held.
    pub fn customer(&self) -> &CustomerInfo {
        &self.customer
    }

    /// The overlay currently open.
    pub fn overlay(&self) -> Overlay {
        self.overlay
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
