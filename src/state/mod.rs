//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `nav`) as plain structs with pure
//! transition methods; components hold them in `RwSignal` contexts and call
//! the transitions inside `update`. Keeping transitions pure lets the state
//! machines run under native tests.

pub mod auth;
pub mod nav;
