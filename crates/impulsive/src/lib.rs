//! Deterministic transfer approximations: Hohmann estimates and synodic alignment scoring.
//!
//! Everything in this crate is a pure function of its inputs. Randomness is
//! confined to the scoring crate so the physics core can be regression-tested
//! for bit-identical output.

pub mod alignment;
pub mod transfers;
