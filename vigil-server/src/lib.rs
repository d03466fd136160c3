//! Vigil Mock Status Server
//!
//! A deliberately trivial status endpoint used to exercise the vigil
//! poller. Each `GET /status` draws a random job status and answers with
//! the exact code/payload pairing the poller expects in the wild:
//! 200 `completed`, 202 `pending`, 500 `error`.
//!
//! The router is exported so tests can serve it on an ephemeral port.

pub mod api;
