//! Behavioural tests for parameter grids
//!
//! Tests are organized by topic:
//! - `ordering` - Enumeration order across nesting and unions
//! - `indexing` - Random access agrees with iteration
//! - `validation` - Malformed specs are rejected at construction
//! - `builder_dsl` - Grids built in code behave like parsed ones
//! - `properties` - Property tests over generated grids

mod ordering;
