//! # Repository Module
//!
//! Database repository implementations for Stock Tally.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern                                   │
//! │                                                                         │
//! │  ScanHandler (via LookupPort)                                          │
//! │       │                                                                 │
//! │       │  db.products().find_name_by_code("8412345678905")              │
//! │       ▼                                                                 │
//! │  ProductRepository                                                     │
//! │  ├── find_name_by_code(&self, code)                                    │
//! │  └── count(&self)                                                      │
//! │       │                                                                 │
//! │       │  SQL Query                                                      │
//! │       ▼                                                                 │
//! │  PostgreSQL product catalog                                            │
//! │                                                                         │
//! │  The SQL is isolated in one place, and the core only ever sees         │
//! │  the LookupPort trait.                                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`product::ProductRepository`] - the code → name lookup

pub mod product;
