/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Process environment lookups that tests can replace with a fixed set of variables.

use std::collections::HashMap;
use std::env::VarError;
use std::sync::Arc;

/// Source of environment variables for [`SdkConfig::from_env`](crate::SdkConfig::from_env).
///
/// [`Env::real`] reads the process environment. [`Env::from_slice`] serves a fixed set of
/// variables and never touches the process, so tests can run in parallel.
#[derive(Clone, Debug)]
pub struct Env(Arc<Vars>);

#[derive(Debug)]
enum Vars {
    Process,
    Fixed(HashMap<String, String>),
}

impl Env {
    /// Looks up `key`, failing with [`VarError::NotPresent`] when it is unset.
    pub fn get(&self, key: &str) -> Result<String, VarError> {
        match self.0.as_ref() {
            Vars::Process => std::env::var(key),
            Vars::Fixed(vars) => vars.get(key).cloned().ok_or(VarError::NotPresent),
        }
    }

    /// An environment holding exactly `vars`.
    ///
    /// ```rust
    /// use aws_types::os_shim_internal::Env;
    /// let env = Env::from_slice(&[("AWS_REGION", "us-west-2")]);
    /// assert_eq!(env.get("AWS_REGION").unwrap(), "us-west-2");
    /// assert!(env.get("AWS_DEFAULT_REGION").is_err());
    /// ```
    pub fn from_slice(vars: &[(&str, &str)]) -> Self {
        let vars = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        Self(Arc::new(Vars::Fixed(vars)))
    }

    /// The environment of the current process.
    pub fn real() -> Self {
        Self(Arc::new(Vars::Process))
    }
}

#[cfg(test)]
mod test {
    use crate::os_shim_internal::Env;
    use std::env::VarError;

    #[test]
    fn fixed_vars_are_isolated() {
        let env = Env::from_slice(&[("AWS_ENDPOINT_URL", "http://localhost:4566")]);
        assert_eq!(env.get("AWS_ENDPOINT_URL").unwrap(), "http://localhost:4566");
        assert_eq!(env.get("PATH").expect_err("not in the fixed set"), VarError::NotPresent);
    }
}
