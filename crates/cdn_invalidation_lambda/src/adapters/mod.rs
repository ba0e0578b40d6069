pub mod cloudfront;
pub mod invalidation;
