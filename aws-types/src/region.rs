/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::os_shim_internal::Env;
use std::borrow::Cow;
use std::fmt::{Display, Formatter};

/// The region to send requests to.
///
/// See <http://docs.aws.amazon.com/general/latest/gr/rande.html> for the list of regions.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Region(Cow<'static, str>);

impl AsRef<str> for Region {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for Region {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Region {
    pub fn new(region: impl Into<Cow<'static, str>>) -> Self {
        Self(region.into())
    }

    pub const fn from_static(region: &'static str) -> Self {
        Self(Cow::Borrowed(region))
    }
}

/// Source of a region, consulted once when a service `Config` is built
pub trait ProvideRegion: Send + Sync {
    fn region(&self) -> Option<Region>;
}

impl ProvideRegion for Region {
    fn region(&self) -> Option<Region> {
        Some(self.clone())
    }
}

impl<'a> ProvideRegion for &'a Region {
    fn region(&self) -> Option<Region> {
        Some((*self).clone())
    }
}

impl ProvideRegion for Option<Region> {
    fn region(&self) -> Option<Region> {
        self.clone()
    }
}

/// Loads the region from `AWS_REGION`, falling back to `AWS_DEFAULT_REGION`
#[derive(Debug, Default)]
pub struct EnvironmentProvider {
    env: Env,
}

impl EnvironmentProvider {
    pub fn new() -> Self {
        EnvironmentProvider { env: Env::real() }
    }

    pub fn new_with_env(env: Env) -> Self {
        EnvironmentProvider { env }
    }
}

impl ProvideRegion for EnvironmentProvider {
    fn region(&self) -> Option<Region> {
        self.env
            .get("AWS_REGION")
            .or_else(|_| self.env.get("AWS_DEFAULT_REGION"))
            .ok()
            .filter(|region| !region.trim().is_empty())
            .map(Region::new)
    }
}

/// The region provider used when a `Config` is built without an explicit region
pub fn default_provider() -> impl ProvideRegion {
    EnvironmentProvider::new()
}

#[cfg(test)]
mod test {
    use crate::os_shim_internal::Env;
    use crate::region::{EnvironmentProvider, ProvideRegion, Region};

    #[test]
    fn aws_region_takes_precedence() {
        let provider = EnvironmentProvider::new_with_env(Env::from_slice(&[
            ("AWS_REGION", "us-west-2"),
            ("AWS_DEFAULT_REGION", "us-east-1"),
        ]));
        assert_eq!(provider.region(), Some(Region::new("us-west-2")));
    }

    #[test]
    fn falls_back_to_default_region() {
        let provider =
            EnvironmentProvider::new_with_env(Env::from_slice(&[("AWS_DEFAULT_REGION", "eu-west-1")]));
        assert_eq!(provider.region(), Some(Region::from_static("eu-west-1")));
    }

    #[test]
    fn no_region_configured() {
        let provider = EnvironmentProvider::new_with_env(Env::from_slice(&[("AWS_REGION", "")]));
        assert_eq!(provider.region(), None);
        assert_eq!(None::<Region>.region(), None);
    }
}
