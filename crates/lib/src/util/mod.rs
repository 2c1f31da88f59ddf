#[cfg(test)]
pub mod testutil;
