//! # Warung Session Layer
//!
//! Everything around the pure core: application state, event dispatch,
//! the one-shot catalog fetch and the external boundaries.
//!
//! ## Module Organization
//! ```text
//! warung_app/
//! ├── lib.rs          ◄─── You are here (exports & tracing setup)
//! ├── session.rs      ◄─── UiEvent enum + dispatch
//! ├── catalog.rs      ◄─── One-shot catalog fetch (reqwest)
//! ├── notify.rs       ◄─── Transient notification channel
//! ├── view.rs         ◄─── ViewRenderer boundary + ViewState snapshot
//! ├── sink.rs         ◄─── OrderSink boundary (WhatsApp link)
//! ├── state/
//! │   ├── cart.rs     ◄─── CartState + display snapshots
//! │   ├── catalog.rs  ◄─── Catalog snapshot
//! │   └── config.rs   ◄─── Configuration
//! └── error.rs        ◄─── AppError for session entry points
//! ```
//!
//! ## Typical Wiring
//! ```rust,no_run
//! use warung_app::catalog::CatalogClient;
//! use warung_app::session::{Session, UiEvent};
//! use warung_app::sink::WhatsAppLink;
//! use warung_app::state::Config;
//! # use warung_app::view::{ViewRenderer, ViewState};
//! # use warung_app::notify::Notice;
//! # struct MyRenderer;
//! # impl ViewRenderer for MyRenderer {
//! #     fn render(&mut self, _: &ViewState) {}
//! #     fn notify(&mut self, _: &Notice) {}
//! # }
//!
//! # async fn run() -> Result<(), warung_app::error::AppError> {
//! warung_app::init_tracing();
//!
//! let config = Config::from_env();
//! let client = CatalogClient::new(config.catalog_url.clone());
//! let mut session = Session::new(config, MyRenderer, WhatsAppLink);
//!
//! // One-shot startup fetch, then the event loop takes over
//! let _ = session.load_catalog(&client).await;
//! session.dispatch(UiEvent::AddToCart(1));
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod error;
pub mod notify;
pub mod session;
pub mod sink;
pub mod state;
pub mod view;

use tracing_subscriber::EnvFilter;

pub use error::{AppError, ErrorCode};
pub use notify::{Notice, Severity};
pub use session::{Session, UiEvent};
pub use sink::{OrderSink, WhatsAppLink};
pub use state::{CartState, CatalogState, Config};
pub use view::{Overlay, ViewRenderer, ViewState};

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - show debug messages
/// - `RUST_LOG=warung=trace` - trace for warung crates only
/// - Default: INFO, with debug for the warung crates
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,warung=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
