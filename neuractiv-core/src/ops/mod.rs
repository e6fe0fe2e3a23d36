//! # Operations Module (`ops`)
//!
//! Central hub for the elementwise transforms provided by NeurActiv.
//! Operations are grouped into submodules by functionality.
//!
//! ## Structure:
//!
//! - **`_op` Functions:** Each operation has a core function (named `xxx_op`)
//!   that performs the forward computation on a borrowed slice and returns a
//!   freshly allocated output vector of the same length.
//! - **Validation first:** Operations with constrained parameters validate
//!   them and return a [`crate::error::NeurActivError`] before any element is
//!   read.
//!
//! ## Key Submodules:
//!
//! - [`activation`]: Elementwise activation functions (CELU, Hardsigmoid, ...).

pub mod activation;
