//! Hamiltonian module
//!
//! Creates the many-body Hamiltonian of a chain of electrons confined in a quantum wire.
//!
//! Each electron occupies one site of the chain and is restricted to the three lowest states of its
//! local confining potential, so a chain of `N` sites lives in a space of dimension `3^N`. The
//! Hamiltonian has two components:
//! - `confinement`: the single-site operator `t h_1`, expanded onto every site
//! - `interaction`: a diagonal two-site operator coupling neighbouring sites, expanded onto every
//!   neighbouring pair `(i, i + 1)` and summed
//!
//! Local operators are padded out to the full space by an implementation of `OperatorExpansion`,
//! which places identities on the sites to either side of those the operator acts on.
//!
//! A Hamiltonian is constructed through the `HamiltonianBuilder` as
//!
//! ```ignore
//! HamiltonianBuilder::new()
//!     .with_sites(number_of_electrons)
//!     .with_confinement(t)
//!     .with_interaction(v)
//!     .build()?;
//! ```
//!
//! The full matrix is dense and of dimension `3^N`, so only short chains are tractable.

mod expansion;
/// Assembly of the many-body operator
pub mod global;
mod local;
mod spectrum;

pub use expansion::{OperatorExpansion, TensorExpander};
pub use global::*;
pub use local::{first_excited_state, pair_interaction, single_site, LOCAL_DIMENSION};
pub use spectrum::Spectrum;
