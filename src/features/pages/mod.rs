//! Read-only pages of the promotion site.
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/` | Main page |
//! | GET | `/participants` | Confirmed registrations |
//! | GET | `/training-rejected` | Static rejection page |

pub mod dtos;
pub mod handlers;
pub mod routes;
