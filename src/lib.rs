//! Personal portfolio website for Felipe Kreulich.
//!
//! A single-page Dioxus fullstack app: server-side rendering behind axum,
//! client-side hydration in WASM. The interactive core is three small units
//! of client state:
//! - a dark/light theme store persisted to localStorage
//! - an EN/PT language store backed by a static translation catalog
//! - a scroll-activity tracker driving the section navigation

// Deny truly dangerous patterns (these will fail the build)
#![deny(unsafe_code)]
#![deny(unused_must_use)]

// Dioxus UI app (shared between server SSR and WASM client)
pub mod app;

// Translation catalog (shared)
pub mod i18n;

// Site links (compile-time, shared) and server settings (runtime, server only)
pub mod config;
