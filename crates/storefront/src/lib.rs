//! Velvet Bean Storefront library.
//!
//! This crate provides the storefront state stores as a library: the
//! in-memory product catalog, the cart store, and the session/identity
//! store, together with the on-device storage they persist through. View
//! layers (the CLI, a future web frontend) consume these stores and render
//! whatever they return.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;
