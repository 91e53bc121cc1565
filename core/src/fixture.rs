use anyhow::{Result, anyhow};
use std::fmt::Debug;

/// Reference value computed once before timing starts. Everything a
/// benchmark decodes inside its loop is checked against it.
#[derive(Debug, Clone)]
pub struct Expected<T> {
    value: T,
}

impl<T: Debug> Expected<T> {
    pub fn new(value: T) -> Self {
        Self { value }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn verify<O>(&self, observed: &O) -> Result<()>
    where
        O: PartialEq<T> + Debug,
    {
        if observed == &self.value {
            Ok(())
        } else {
            Err(anyhow!("decoded {:?} instead of {:?}", observed, self.value))
        }
    }
}
