//! Deterministic, constraint-driven user-agent string generation.
//!
//! The engine turns a partially specified [`GenerationSpec`] into one
//! rendered user-agent string: validate the spec, narrow the template
//! registry through the filter chain, select one template with the spec's
//! strategy, resolve a version, sample locale/architecture/model attributes
//! from weighted catalogs, and fill the template's placeholders.
//!
//! Passing a seed reproduces the exact same output for the same spec:
//!
//! ```
//! use ua_forge::{BrowserFamily, DeviceType, GenerationSpec, OperatingSystem};
//!
//! let spec = GenerationSpec::builder()
//!     .browser(BrowserFamily::Chrome)
//!     .device(DeviceType::Desktop)
//!     .os(OperatingSystem::Windows)
//!     .version_exact(120)
//!     .build();
//!
//! let ua = ua_forge::generate(Some(&spec), Some(12345)).unwrap();
//! assert!(ua.starts_with("Mozilla/5.0 (Windows NT"));
//! assert!(ua.contains("Chrome/120"));
//! assert_eq!(ua, ua_forge::generate(Some(&spec), Some(12345)).unwrap());
//! ```
//!
//! Every call owns its random generator instance, so seeded calls from
//! different threads never interfere with one another. The generator struct
//! itself carries the round-robin cursor and the avoid-recent history and is
//! not synchronized; share it across threads behind a lock if needed.

/// Domain enums shared across the engine.
pub mod configs;
/// Mobile-token detection over rendered strings.
pub mod detect;
/// Typed error surface.
pub mod errors;
/// Composable template filters.
pub mod filters;
/// Bounded recency tracking.
pub mod history;
/// Version and attribute pickers.
pub mod pickers;
/// Static capability descriptors and weighted catalogs.
pub mod profiles;
/// Placeholder rendering.
pub mod render;
/// Constraint model and builder.
pub mod spec;
/// Template selection strategies.
pub mod strategies;
/// Spec validation.
pub mod validation;

use std::collections::HashMap;

use log::{debug, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::filters::{CompositeFilter, TemplateFilter};
use crate::profiles::browsers::{all_templates, BrowserTemplate};
use crate::strategies::{
    uniform_select, weighted_select, AvoidRecentStrategy, RoundRobinStrategy,
};

pub use crate::configs::{
    BrowserFamily, DeviceType, Engine, OperatingSystem, RiskLevel, StrategyKind,
};
pub use crate::detect::{is_mobile_user_agent, mobile_token};
pub use crate::errors::{SpecError, UaError};
pub use crate::history::HistoryTracker;
pub use crate::spec::{GenerationSpec, GenerationSpecBuilder, RandomSpec};
pub use crate::validation::validate_spec;

/// The user-agent generation engine.
///
/// Owns the cross-call state of the stateful strategies: the round-robin
/// cursor and the avoid-recent history. Weighted and uniform generation is
/// stateless, so the [`generate`] free function covers those without keeping
/// a generator around.
#[derive(Debug, Clone)]
pub struct UserAgentGenerator {
    round_robin: RoundRobinStrategy,
    avoid_recent: AvoidRecentStrategy,
}

impl Default for UserAgentGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl UserAgentGenerator {
    /// Engine with default strategy state.
    pub fn new() -> Self {
        Self {
            round_robin: RoundRobinStrategy::new(),
            avoid_recent: AvoidRecentStrategy::default(),
        }
    }

    /// Engine whose avoid-recent history uses the given random defaults.
    pub fn with_random_defaults(random: &RandomSpec) -> Self {
        Self {
            round_robin: RoundRobinStrategy::new(),
            avoid_recent: AvoidRecentStrategy::new(random.history_window, random.retry_budget),
        }
    }

    /// Generate one user-agent string.
    ///
    /// An explicit `seed` argument wins over a seed embedded in the spec's
    /// [`RandomSpec`]. Without either, process entropy is used.
    pub fn generate(
        &mut self,
        spec: Option<&GenerationSpec>,
        seed: Option<u64>,
    ) -> Result<String, UaError> {
        let default_spec = GenerationSpec::default();
        let spec = spec.unwrap_or(&default_spec);

        validate_spec(spec)?;

        let seed = seed.or_else(|| spec.seed());
        let mut rng = seeded_rng(seed);

        let candidates = filter_candidates(spec)?;
        let template = self.select_template(spec, &candidates, &mut rng);
        debug!(
            "selected template {} via {}",
            template.browser.label(),
            spec.strategy.as_str()
        );

        let device = spec.device.unwrap_or_default();
        let os = resolve_os(template, device, spec);
        let version = pickers::pick_version(template, spec, &mut rng)?;
        let context = build_context(template, device, os, version, spec, &mut rng);

        Ok(render::render(template, device, os, &context))
    }

    /// Rewind the round-robin cursor and forget the avoid-recent history.
    pub fn reset(&mut self) {
        self.round_robin.reset();
        self.avoid_recent.clear_history();
    }

    fn select_template<'a>(
        &mut self,
        spec: &GenerationSpec,
        candidates: &[&'a BrowserTemplate],
        rng: &mut StdRng,
    ) -> &'a BrowserTemplate {
        match spec.strategy {
            StrategyKind::Weighted => weighted_select(candidates, rng),
            StrategyKind::Uniform => uniform_select(candidates, rng),
            StrategyKind::RoundRobin => self.round_robin.select(candidates),
            StrategyKind::AvoidRecent => {
                // A spec-supplied window resizes the tracker; without one the
                // capacity set at construction stands.
                let random = match &spec.random {
                    Some(random) => {
                        if random.history_window != self.avoid_recent.history_capacity() {
                            self.avoid_recent.set_history_capacity(random.history_window);
                        }
                        random.clone()
                    }
                    None => RandomSpec::default(),
                };
                self.avoid_recent.select_with(
                    candidates,
                    random.retry_budget,
                    random.enable_history,
                    rng,
                )
            }
        }
    }
}

/// Generate one user-agent string with a fresh engine.
///
/// Covers the stateless strategies directly; round-robin and avoid-recent
/// callers should hold a [`UserAgentGenerator`] so state survives between
/// calls.
pub fn generate(spec: Option<&GenerationSpec>, seed: Option<u64>) -> Result<String, UaError> {
    UserAgentGenerator::new().generate(spec, seed)
}

/// One generator per call: seeded determinism without cross-call or
/// cross-thread interference.
fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    }
}

fn filter_candidates(spec: &GenerationSpec) -> Result<Vec<&'static BrowserTemplate>, UaError> {
    let mut filters = Vec::new();

    if let Some(browser) = spec.browser {
        filters.push(TemplateFilter::Browser(vec![browser]));
    }
    if let Some(device) = spec.device {
        filters.push(TemplateFilter::Device(vec![device]));
    }
    if let Some(os) = spec.os {
        filters.push(TemplateFilter::os(vec![os], spec.device));
    }
    if let Some(engine) = spec.engine {
        filters.push(TemplateFilter::Engine(vec![engine]));
    }
    if spec.version_min.is_some() || spec.version_max.is_some() {
        filters.push(TemplateFilter::VersionRange {
            min: spec.version_min,
            max: spec.version_max,
        });
    }
    if let Some(risk) = spec.risk_level {
        filters.push(TemplateFilter::Risk(vec![risk]));
    }

    let candidates = CompositeFilter::new(filters).filter(&all_templates());
    if candidates.is_empty() {
        return Err(UaError::NoCandidate {
            reason: describe_constraints(spec),
        });
    }
    Ok(candidates)
}

fn describe_constraints(spec: &GenerationSpec) -> String {
    let mut parts = Vec::new();
    if let Some(browser) = spec.browser {
        parts.push(format!("browser={}", browser.as_str()));
    }
    if let Some(engine) = spec.engine {
        parts.push(format!("engine={}", engine.as_str()));
    }
    if let Some(os) = spec.os {
        parts.push(format!("os={}", os.as_str()));
    }
    if let Some(device) = spec.device {
        parts.push(format!("device={}", device.as_str()));
    }
    if let Some(min) = spec.version_min {
        parts.push(format!("version_min={min}"));
    }
    if let Some(max) = spec.version_max {
        parts.push(format!("version_max={max}"));
    }
    if let Some(risk) = spec.risk_level {
        parts.push(format!("risk={}", risk.as_str()));
    }

    if parts.is_empty() {
        "empty registry".to_string()
    } else {
        parts.join(" ")
    }
}

fn resolve_os(
    template: &BrowserTemplate,
    device: DeviceType,
    spec: &GenerationSpec,
) -> OperatingSystem {
    if let Some(os) = spec.os {
        return os;
    }

    match template.supported_os(device).first() {
        Some(os) => *os,
        None => {
            // Known gap: a template with no OS for this device falls back to
            // Windows, which can render a string inconsistent with the
            // template's declared capabilities. Unreachable with the shipped
            // registry, where every device class has at least one OS.
            warn!(
                "{} supports no OS on {}; defaulting to Windows",
                template.browser.label(),
                device.as_str()
            );
            OperatingSystem::Windows
        }
    }
}

fn build_context(
    template: &BrowserTemplate,
    device: DeviceType,
    os: OperatingSystem,
    version: u32,
    spec: &GenerationSpec,
    rng: &mut StdRng,
) -> HashMap<&'static str, String> {
    let mut context = HashMap::from([
        ("version", version.to_string()),
        ("locale", pickers::pick_locale(spec, rng)),
        ("arch", pickers::pick_arch(device, spec, rng)),
        ("engine_version", template.engine_version(version)),
    ]);

    if device.is_mobile() {
        context.insert("model", pickers::pick_model(os, rng));
    }

    context.insert("os_version", pickers::pick_os_version(os, rng));
    context
}
