//! Road-damage reports: submission, listing, triage, and public stats.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | POST | `/api/reports` | Yes | Submit a report (multipart with photo) |
//! | GET | `/api/reports` | Yes | List all reports, newest first |
//! | PATCH | `/api/reports/{id}/status` | Yes | Update status/priority |
//! | DELETE | `/api/reports/{id}` | Yes | Hard-delete a report |
//! | GET | `/api/stats` | No | Aggregate counts for the landing page |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::ReportService;
