//! # Rdio Integration Module
//!
//! Client for the Rdio RPC API covering the operations this tool needs:
//! artist search, per-artist track sampling, and playlist management, plus
//! the out-of-band authorization handshake that unlocks the mutating calls.
//!
//! ## Organization
//!
//! - [`session`] - The [`session::RdioSession`] handle: credentials, the HTTP
//!   client, the generic RPC call shape, and the interactive authorization
//!   gate. One session is constructed per run and passed by reference into
//!   every phase that talks to Rdio.
//! - [`catalog`] - Artist search and track lookups. Misses (no matching
//!   artist, no tracks) are ordinary empty results, never errors.
//! - [`playlist`] - List, delete, create, and append-to playlists.
//!
//! ## RPC shape
//!
//! Every call is a form-encoded POST of `method=<name>` plus the method's
//! parameters, authenticated with the consumer key and, once authorized, a
//! bearer access token. Responses arrive in a
//! [`crate::types::RpcEnvelope`]: a `status` field, an optional typed
//! `result`, and an optional `message`. Authorization failure surfaces as
//! `status == "error"`, not as a transport fault.
//!
//! ## Authorization
//!
//! The handshake is deliberately blocking and single-threaded: request an
//! authorization URL, send the user there, wait on the terminal for the
//! verification code, exchange it for an access token. There is no timeout;
//! only the remote service rejects bad codes.

pub mod catalog;
pub mod playlist;
pub mod session;

pub use session::RdioSession;
