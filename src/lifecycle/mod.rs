//! Process lifecycle.
//!
//! # Data Flow
//! ```text
//! console `stop`
//!     → Shutdown::trigger
//!     → broadcast to subscribers
//!     → serve loop returns → main exits 0
//! ```

pub mod shutdown;

pub use shutdown::Shutdown;
