// Domain layer - data-shaping core and record models
pub mod aggregate;
pub mod meter;
pub mod pagination;
pub mod period;
pub mod reading;
