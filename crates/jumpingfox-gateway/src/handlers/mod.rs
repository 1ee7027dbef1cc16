//! HTTP handlers for the demo API surface.
//!
//! Every handler records itself in the request counter before doing any
//! work, including before validation, so rejected requests still show up in
//! the metrics a rate-limit test run inspects afterwards. Labels interpolate
//! path parameters (`GET /api/fox/42`), matching what gateway-side policies
//! key on.

pub mod fox;
pub mod jump;
