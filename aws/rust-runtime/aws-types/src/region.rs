/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Region type and the environment region provider.

use crate::os_shim_internal::Env;
use std::borrow::Cow;
use std::fmt::{self, Display, Formatter};

/// The region to send requests to.
///
/// The region MUST be specified on a request unless an explicit endpoint URL is configured.
/// It may be configured globally through [`SdkConfig`](crate::SdkConfig) or on a per-client
/// basis.
///
/// See http://docs.aws.amazon.com/general/latest/gr/rande.html for
/// information on AWS regions.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Region(
    // Regions are almost always known statically. However, as an escape hatch for when they
    // are not, allow for an owned region
    Cow<'static, str>,
);

impl AsRef<str> for Region {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for Region {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Region {
    /// Creates a new `Region` from the given string.
    pub fn new(region: impl Into<Cow<'static, str>>) -> Self {
        Self(region.into())
    }

    /// Const function that creates a new `Region` from a static str.
    pub const fn from_static(region: &'static str) -> Self {
        Self(Cow::Borrowed(region))
    }
}

/// Provide a [`Region`] to use with AWS requests.
pub trait ProvideRegion: Send + Sync + fmt::Debug {
    /// Returns the region, if this provider knows it.
    fn region(&self) -> Option<Region>;
}

/// Loads a region from `AWS_REGION`, falling back to `AWS_DEFAULT_REGION`.
///
/// Empty values are treated as unset.
#[derive(Debug, Clone)]
pub struct EnvironmentProvider {
    env: Env,
}

impl EnvironmentProvider {
    /// Creates a provider that reads from `env`.
    pub fn new(env: Env) -> Self {
        EnvironmentProvider { env }
    }
}

impl ProvideRegion for EnvironmentProvider {
    fn region(&self) -> Option<Region> {
        ["AWS_REGION", "AWS_DEFAULT_REGION"]
            .iter()
            .filter_map(|key| self.env.get(key).ok())
            .find(|value| !value.is_empty())
            .map(Region::new)
    }
}

#[cfg(test)]
mod test {
    use super::{EnvironmentProvider, ProvideRegion, Region};
    use crate::os_shim_internal::Env;

    #[test]
    fn load_from_env() {
        let env = Env::from_slice(&[("AWS_REGION", "us-east-1")]);
        assert_eq!(
            EnvironmentProvider::new(env).region(),
            Some(Region::new("us-east-1"))
        );
    }

    #[test]
    fn aws_region_takes_precedence() {
        let env = Env::from_slice(&[
            ("AWS_REGION", "us-east-1"),
            ("AWS_DEFAULT_REGION", "us-east-2"),
        ]);
        assert_eq!(
            EnvironmentProvider::new(env).region(),
            Some(Region::new("us-east-1"))
        );
    }

    #[test]
    fn falls_back_to_default_region() {
        let env = Env::from_slice(&[("AWS_REGION", ""), ("AWS_DEFAULT_REGION", "eu-west-1")]);
        assert_eq!(
            EnvironmentProvider::new(env).region(),
            Some(Region::from_static("eu-west-1"))
        );
    }
}
