// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

pub mod detail;
pub mod filter;
pub mod model;
pub mod state;

pub use detail::*;
pub use filter::*;
pub use model::*;
pub use state::*;
