//! Philosophy Hub - a server-rendered site about philosophers and philosophies.
//!
//! # Architecture
//!
//! - **Catalog**: Fixed philosophy catalog and philosopher list, built once at startup
//! - **Context**: Per-request timestamp, device class and last visited philosopher
//! - **Routes**: One handler per page, plus the 404 fallback
//! - **Render**: HTML pages using maud (compile-time templates)
//! - **Error**: Typed handler errors; faults become the 500 page
//!
//! # State
//!
//! The only persisted state is the `lastPhilosopher` cookie held by the
//! client. There is no server-side session store.

pub mod catalog;
pub mod config;
pub mod context;
pub mod error;
pub mod render;
pub mod routes;
pub mod state;

pub use config::Config;
pub use routes::router;
pub use state::AppState;
