use crate::errors::SpecError;
use crate::spec::{GenerationSpec, RandomSpec};

/// Version fields above this are rejected. Anti-overflow guard, not a real
/// browser limit.
pub const MAX_VERSION: u32 = 999;
/// Largest accepted avoid-recent history window.
pub const MAX_HISTORY_WINDOW: usize = 10_000;
/// Largest accepted avoid-recent retry budget.
pub const MAX_RETRY_BUDGET: u32 = 100;

/// Release channels a spec may request.
static VALID_CHANNELS: phf::Set<&'static str> = phf::phf_set! {
    "stable", "beta", "dev", "canary",
};

/// Architectures a spec may request.
static VALID_ARCHES: phf::Set<&'static str> = phf::phf_set! {
    "x86_64", "x64", "ARM", "ARM64", "WOW64", "i686",
};

/// Validate a spec, returning the first violated rule.
///
/// Pure function of its input; runs before any sampling so an invalid spec
/// never produces a partial result.
pub fn validate_spec(spec: &GenerationSpec) -> Result<(), SpecError> {
    if let (Some(min), Some(max)) = (spec.version_min, spec.version_max) {
        if min > max {
            return Err(SpecError::InvalidVersionRange { min, max });
        }
    }

    if spec.version_exact.is_some() && (spec.version_min.is_some() || spec.version_max.is_some()) {
        return Err(SpecError::VersionExactConflict);
    }

    if let Some(min) = spec.version_min {
        if min < 1 {
            return Err(SpecError::InvalidVersionMin(min));
        }
    }
    if let Some(max) = spec.version_max {
        if max < 1 {
            return Err(SpecError::InvalidVersionMax(max));
        }
    }
    if let Some(exact) = spec.version_exact {
        if exact < 1 {
            return Err(SpecError::InvalidVersionExact(exact));
        }
    }

    if let Some(min) = spec.version_min {
        if min > MAX_VERSION {
            return Err(SpecError::VersionTooHigh {
                field: "version_min",
                value: min,
            });
        }
    }
    if let Some(max) = spec.version_max {
        if max > MAX_VERSION {
            return Err(SpecError::VersionTooHigh {
                field: "version_max",
                value: max,
            });
        }
    }
    if let Some(exact) = spec.version_exact {
        if exact > MAX_VERSION {
            return Err(SpecError::VersionTooHigh {
                field: "version_exact",
                value: exact,
            });
        }
    }

    if let Some(channel) = &spec.channel {
        if !VALID_CHANNELS.contains(channel.as_str()) {
            return Err(SpecError::InvalidChannel(channel.clone()));
        }
    }

    if let Some(arch) = &spec.arch {
        if !VALID_ARCHES.contains(arch.as_str()) {
            return Err(SpecError::InvalidArch(arch.clone()));
        }
    }

    if let Some(locale) = &spec.locale {
        if !is_valid_locale(locale) {
            return Err(SpecError::InvalidLocale(locale.clone()));
        }
    }

    for tag in &spec.tags {
        if tag.trim().is_empty() {
            return Err(SpecError::InvalidTag(tag.clone()));
        }
    }

    if let Some(random) = &spec.random {
        validate_random_spec(random)?;
    }

    Ok(())
}

fn validate_random_spec(random: &RandomSpec) -> Result<(), SpecError> {
    if random.history_window < 1 || random.history_window > MAX_HISTORY_WINDOW {
        return Err(SpecError::InvalidHistoryWindow(random.history_window));
    }
    if random.retry_budget > MAX_RETRY_BUDGET {
        return Err(SpecError::InvalidRetryBudget(random.retry_budget));
    }
    Ok(())
}

/// Locale shape check: 2-5 lowercase letters, optionally `-` plus 2-5
/// uppercase letters. Rejects control characters and oversized input, which
/// also guards the free-text field against injection.
pub fn is_valid_locale(locale: &str) -> bool {
    let bytes = locale.as_bytes();
    let mut i = 0;
    while i < bytes.len() && bytes[i].is_ascii_lowercase() {
        i += 1;
    }
    if !(2..=5).contains(&i) {
        return false;
    }
    if i == bytes.len() {
        return true;
    }
    if bytes[i] != b'-' {
        return false;
    }
    let region_start = i + 1;
    let mut j = region_start;
    while j < bytes.len() && bytes[j].is_ascii_uppercase() {
        j += 1;
    }
    j == bytes.len() && (2..=5).contains(&(j - region_start))
}
