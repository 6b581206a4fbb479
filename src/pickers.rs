use rand::Rng;

use crate::configs::{DeviceType, OperatingSystem};
use crate::errors::UaError;
use crate::profiles::browsers::BrowserTemplate;
use crate::profiles::catalogs::{
    sample_weighted, ANDROID_MODELS, DESKTOP_ARCHES, IOS_MODELS, LOCALES, MOBILE_ARCHES,
};
use crate::spec::GenerationSpec;

/// Resolve a concrete major version for the selected template.
///
/// Exact requests are checked against the template bounds; range requests
/// default missing bounds to the template's own and are validated before a
/// uniform draw; with neither, the stable version is returned.
pub fn pick_version<R: Rng + ?Sized>(
    template: &BrowserTemplate,
    spec: &GenerationSpec,
    rng: &mut R,
) -> Result<u32, UaError> {
    if let Some(exact) = spec.version_exact {
        if exact < template.min_version || exact > template.max_version {
            return Err(UaError::VersionOutOfRange {
                version: exact,
                min: template.min_version,
                max: template.max_version,
            });
        }
        return Ok(exact);
    }

    if spec.version_min.is_some() || spec.version_max.is_some() {
        let min = spec.version_min.unwrap_or(template.min_version);
        let max = spec.version_max.unwrap_or(template.max_version);

        if min < template.min_version {
            return Err(UaError::VersionBelowMinimum {
                requested: min,
                supported: template.min_version,
            });
        }
        if max > template.max_version {
            return Err(UaError::VersionAboveMaximum {
                requested: max,
                supported: template.max_version,
            });
        }

        return Ok(rng.random_range(min..=max));
    }

    Ok(template.stable_version)
}

/// Version draw biased toward the top of the range.
///
/// Linear-increasing weights (oldest 1, newest `count`) give an expected
/// value strictly above the range midpoint. Falls back to `max` if rounding
/// exhausts the walk.
pub fn pick_version_weighted_recent<R: Rng + ?Sized>(min: u32, max: u32, rng: &mut R) -> u32 {
    if min >= max {
        return max;
    }

    let count = (max - min + 1) as u64;
    let total = count * (count + 1) / 2;
    let draw = rng.random_range(1..=total);

    let mut cumulative = 0u64;
    for offset in 0..count {
        cumulative += offset + 1;
        if draw <= cumulative {
            return min + offset as u32;
        }
    }

    max
}

/// Locale for the rendering context. A spec-supplied locale wins over the
/// weighted catalog.
pub fn pick_locale<R: Rng + ?Sized>(spec: &GenerationSpec, rng: &mut R) -> String {
    match &spec.locale {
        Some(locale) => locale.clone(),
        None => sample_weighted(&LOCALES, rng).to_owned(),
    }
}

/// CPU architecture for the rendering context. Desktop and mobile device
/// classes sample different weight tables.
pub fn pick_arch<R: Rng + ?Sized>(
    device: DeviceType,
    spec: &GenerationSpec,
    rng: &mut R,
) -> String {
    if let Some(arch) = &spec.arch {
        return arch.clone();
    }

    let catalog: &'static [_] = if device.is_mobile() {
        &MOBILE_ARCHES
    } else {
        &DESKTOP_ARCHES
    };
    sample_weighted(catalog, rng).to_owned()
}

/// Device model for the rendering context, keyed by OS.
pub fn pick_model<R: Rng + ?Sized>(os: OperatingSystem, rng: &mut R) -> String {
    match os {
        OperatingSystem::Android => sample_weighted(&ANDROID_MODELS, rng).to_owned(),
        OperatingSystem::Ios => sample_weighted(&IOS_MODELS, rng).to_owned(),
        _ => "Unknown".to_owned(),
    }
}

/// Plausible OS version string for the rendering context.
pub fn pick_os_version<R: Rng + ?Sized>(os: OperatingSystem, rng: &mut R) -> String {
    match os {
        OperatingSystem::Windows => if rng.random_bool(0.5) { "10.0" } else { "11.0" }.to_owned(),
        OperatingSystem::MacOs => format!("14.{}", rng.random_range(0..=5)),
        OperatingSystem::Linux => format!("5.{}", rng.random_range(10..=19)),
        OperatingSystem::Android => rng.random_range(10..=14).to_string(),
        OperatingSystem::Ios => format!("17.{}", rng.random_range(0..=4)),
        OperatingSystem::ChromeOs => rng.random_range(120..=145).to_string(),
    }
}
