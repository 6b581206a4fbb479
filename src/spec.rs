use crate::configs::{BrowserFamily, DeviceType, Engine, OperatingSystem, RiskLevel, StrategyKind};

/// Default bounded-history capacity for the avoid-recent strategy.
pub const DEFAULT_HISTORY_WINDOW: usize = 100;
/// Default retry budget for the avoid-recent strategy.
pub const DEFAULT_RETRY_BUDGET: u32 = 10;

/// Randomization behavior of one generation call.
///
/// Seed non-negativity is enforced by the type: seeds are `u64`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RandomSpec {
    /// Fixed seed for reproducible output.
    pub seed: Option<u64>,
    /// Capacity of the avoid-recent history tracker.
    pub history_window: usize,
    /// How many uniform draws the avoid-recent strategy retries before
    /// falling back to an unconstrained draw.
    pub retry_budget: u32,
    /// Disables recency tracking entirely when false.
    pub enable_history: bool,
}

impl Default for RandomSpec {
    fn default() -> Self {
        Self {
            seed: None,
            history_window: DEFAULT_HISTORY_WINDOW,
            retry_budget: DEFAULT_RETRY_BUDGET,
            enable_history: true,
        }
    }
}

impl RandomSpec {
    /// A spec that reproduces the same output for the same constraints.
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    /// A seed is set, so output is reproducible.
    pub fn is_deterministic(&self) -> bool {
        self.seed.is_some()
    }
}

/// Immutable description of what the caller wants generated.
///
/// Build via [`GenerationSpec::builder`]:
///
/// ```
/// use ua_forge::{BrowserFamily, DeviceType, GenerationSpec};
///
/// let spec = GenerationSpec::builder()
///     .browser(BrowserFamily::Chrome)
///     .device(DeviceType::Desktop)
///     .build();
/// assert_eq!(spec.browser, Some(BrowserFamily::Chrome));
/// ```
///
/// Cross-field consistency is checked by the validator, not the builder.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationSpec {
    /// Restrict to one browser family.
    pub browser: Option<BrowserFamily>,
    /// Restrict to one rendering engine.
    pub engine: Option<Engine>,
    /// Target operating system.
    pub os: Option<OperatingSystem>,
    /// Target device class. Defaults to desktop during generation.
    pub device: Option<DeviceType>,
    /// Inclusive version lower bound. Mutually exclusive with `version_exact`.
    pub version_min: Option<u32>,
    /// Inclusive version upper bound. Mutually exclusive with `version_exact`.
    pub version_max: Option<u32>,
    /// Exact major version.
    pub version_exact: Option<u32>,
    /// Release channel: stable, beta, dev or canary.
    pub channel: Option<String>,
    /// Locale to render verbatim, e.g. `en-US`.
    pub locale: Option<String>,
    /// CPU architecture to render verbatim, e.g. `x86_64`.
    pub arch: Option<String>,
    /// Free-form tags. Must be non-empty strings.
    pub tags: Vec<String>,
    /// Restrict to templates of one risk classification.
    pub risk_level: Option<RiskLevel>,
    /// Seeding, history and retry configuration.
    pub random: Option<RandomSpec>,
    /// Template selection strategy.
    pub strategy: StrategyKind,
}

impl GenerationSpec {
    /// Start building a spec.
    pub fn builder() -> GenerationSpecBuilder {
        GenerationSpecBuilder::default()
    }

    /// No constraint field is set.
    pub fn is_empty(&self) -> bool {
        self.browser.is_none()
            && self.engine.is_none()
            && self.os.is_none()
            && self.device.is_none()
            && self.version_min.is_none()
            && self.version_max.is_none()
            && self.version_exact.is_none()
            && self.risk_level.is_none()
            && self.tags.is_empty()
    }

    /// The seed embedded in the random spec, if any.
    pub fn seed(&self) -> Option<u64> {
        self.random.as_ref().and_then(|r| r.seed)
    }
}

/// Fluent builder for [`GenerationSpec`].
///
/// Accumulates fields; `build` freezes them into the immutable spec.
#[derive(Debug, Clone, Default)]
pub struct GenerationSpecBuilder {
    spec: GenerationSpec,
}

impl GenerationSpecBuilder {
    /// Restrict to one browser family.
    pub fn browser(mut self, browser: BrowserFamily) -> Self {
        self.spec.browser = Some(browser);
        self
    }

    /// Restrict to one rendering engine.
    pub fn engine(mut self, engine: Engine) -> Self {
        self.spec.engine = Some(engine);
        self
    }

    /// Target operating system.
    pub fn os(mut self, os: OperatingSystem) -> Self {
        self.spec.os = Some(os);
        self
    }

    /// Target device class.
    pub fn device(mut self, device: DeviceType) -> Self {
        self.spec.device = Some(device);
        self
    }

    /// Inclusive version lower bound.
    pub fn version_min(mut self, min: u32) -> Self {
        self.spec.version_min = Some(min);
        self
    }

    /// Inclusive version upper bound.
    pub fn version_max(mut self, max: u32) -> Self {
        self.spec.version_max = Some(max);
        self
    }

    /// Exact major version.
    pub fn version_exact(mut self, version: u32) -> Self {
        self.spec.version_exact = Some(version);
        self
    }

    /// Release channel: stable, beta, dev or canary.
    pub fn channel(mut self, channel: impl Into<String>) -> Self {
        self.spec.channel = Some(channel.into());
        self
    }

    /// Locale to render verbatim.
    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.spec.locale = Some(locale.into());
        self
    }

    /// CPU architecture to render verbatim.
    pub fn arch(mut self, arch: impl Into<String>) -> Self {
        self.spec.arch = Some(arch.into());
        self
    }

    /// Append one tag.
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.spec.tags.push(tag.into());
        self
    }

    /// Replace the tag list.
    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.spec.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Restrict to templates of one risk classification.
    pub fn risk_level(mut self, risk: RiskLevel) -> Self {
        self.spec.risk_level = Some(risk);
        self
    }

    /// Set the full randomization config.
    pub fn random(mut self, random: RandomSpec) -> Self {
        self.spec.random = Some(random);
        self
    }

    /// Shorthand for a seeded default [`RandomSpec`].
    pub fn seed(mut self, seed: u64) -> Self {
        let mut random = self.spec.random.take().unwrap_or_default();
        random.seed = Some(seed);
        self.spec.random = Some(random);
        self
    }

    /// Template selection strategy.
    pub fn strategy(mut self, strategy: StrategyKind) -> Self {
        self.spec.strategy = strategy;
        self
    }

    /// Freeze and return the immutable spec.
    pub fn build(self) -> GenerationSpec {
        self.spec
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_accumulates_fields() {
        let spec = GenerationSpec::builder()
            .browser(BrowserFamily::Firefox)
            .os(OperatingSystem::Linux)
            .device(DeviceType::Desktop)
            .version_min(110)
            .version_max(120)
            .channel("beta")
            .locale("de-DE")
            .arch("x86_64")
            .tag("ci")
            .risk_level(RiskLevel::Low)
            .strategy(StrategyKind::Uniform)
            .build();

        assert_eq!(spec.browser, Some(BrowserFamily::Firefox));
        assert_eq!(spec.os, Some(OperatingSystem::Linux));
        assert_eq!(spec.version_min, Some(110));
        assert_eq!(spec.version_max, Some(120));
        assert_eq!(spec.channel.as_deref(), Some("beta"));
        assert_eq!(spec.locale.as_deref(), Some("de-DE"));
        assert_eq!(spec.arch.as_deref(), Some("x86_64"));
        assert_eq!(spec.tags, vec!["ci".to_string()]);
        assert_eq!(spec.strategy, StrategyKind::Uniform);
        assert!(!spec.is_empty());
    }

    #[test]
    fn default_spec_is_empty() {
        assert!(GenerationSpec::default().is_empty());
    }

    #[test]
    fn seed_shorthand_keeps_random_defaults() {
        let spec = GenerationSpec::builder().seed(42).build();
        let random = spec.random.expect("random spec set");
        assert_eq!(random.seed, Some(42));
        assert_eq!(random.history_window, DEFAULT_HISTORY_WINDOW);
        assert_eq!(random.retry_budget, DEFAULT_RETRY_BUDGET);
        assert!(random.enable_history);
        assert!(random.is_deterministic());
    }

    #[test]
    fn random_spec_defaults() {
        let random = RandomSpec::default();
        assert_eq!(random.history_window, 100);
        assert_eq!(random.retry_budget, 10);
        assert!(random.enable_history);
        assert!(!random.is_deterministic());
    }
}
