//! Company directory service library
//!
//! This crate implements a small web service that fronts a company-directory
//! backend: it proxies the paginated company listing, resolves each company's
//! logo through a secondary lookup endpoint, and composes a page view with
//! navigable page links.
//!
//! The two interesting pieces are [`pagination`], the windowed page-number
//! math behind the navigation bar, and [`logo_cache`], the concurrent
//! batched logo resolution with placeholder fallback. The rest of the crate
//! is the service plumbing around them.

pub mod config;
pub mod errors;
pub mod logo_cache;
pub mod models;
pub mod pagination;
pub mod services;
pub mod utils;
pub mod web;
