//! Static weighted catalogs sampled independently of browser choice.
//!
//! Weights in each catalog are documented to sum to 1.0 within rounding
//! tolerance; the test suite checks this, the samplers do not.

use rand::Rng;

/// One catalog row: value plus sampling weight.
pub type WeightedEntry = (&'static str, f64);

/// Locales by observed traffic share. OS and device independent.
pub static LOCALES: [WeightedEntry; 13] = [
    ("en-US", 0.54),
    ("zh-CN", 0.19),
    ("es-ES", 0.06),
    ("en-GB", 0.05),
    ("fr-FR", 0.03),
    ("de-DE", 0.03),
    ("ja-JP", 0.02),
    ("pt-BR", 0.02),
    ("ru-RU", 0.02),
    ("ko-KR", 0.01),
    ("it-IT", 0.01),
    ("ar-SA", 0.01),
    ("hi-IN", 0.01),
];

/// CPU architectures seen on desktop platforms.
pub static DESKTOP_ARCHES: [WeightedEntry; 5] = [
    ("x86_64", 0.60),
    ("x64", 0.25),
    ("ARM64", 0.12),
    ("WOW64", 0.02),
    ("i686", 0.01),
];

/// CPU architectures seen on mobile platforms.
pub static MOBILE_ARCHES: [WeightedEntry; 2] = [("ARM64", 0.85), ("ARM", 0.15)];

/// Popular Android device models.
pub static ANDROID_MODELS: [WeightedEntry; 16] = [
    ("SM-G998B", 0.15),      // Samsung Galaxy S21 Ultra
    ("SM-A525F", 0.12),      // Samsung Galaxy A52
    ("Pixel 7 Pro", 0.10),   // Google Pixel 7 Pro
    ("SM-S918B", 0.09),      // Samsung Galaxy S23 Ultra
    ("Pixel 8", 0.08),       // Google Pixel 8
    ("SM-A546B", 0.07),      // Samsung Galaxy A54
    ("OnePlus 11", 0.06),    // OnePlus 11
    ("Xiaomi 13", 0.06),     // Xiaomi 13
    ("SM-M336B", 0.05),      // Samsung Galaxy M33
    ("Redmi Note 12", 0.05), // Redmi Note 12
    ("POCO X5 Pro", 0.04),   // POCO X5 Pro
    ("Moto G Power", 0.03),  // Motorola Moto G Power
    ("Nokia G50", 0.03),     // Nokia G50
    ("Oppo Find X5", 0.03),  // Oppo Find X5
    ("Vivo V27", 0.02),      // Vivo V27
    ("Realme GT 2", 0.02),   // Realme GT 2
];

/// Popular iOS device models.
pub static IOS_MODELS: [WeightedEntry; 10] = [
    ("iPhone15,3", 0.20), // iPhone 14 Pro Max
    ("iPhone15,2", 0.18), // iPhone 14 Pro
    ("iPhone14,3", 0.15), // iPhone 13 Pro Max
    ("iPhone14,2", 0.12), // iPhone 13 Pro
    ("iPhone14,5", 0.10), // iPhone 13
    ("iPhone13,4", 0.08), // iPhone 12 Pro Max
    ("iPhone13,3", 0.07), // iPhone 12 Pro
    ("iPhone13,2", 0.05), // iPhone 12
    ("iPhone12,1", 0.03), // iPhone 11
    ("iPhone11,8", 0.02), // iPhone XR
];

/// Draw one entry by cumulative weight.
///
/// Walks the catalog accumulating weight and returns the first entry whose
/// cumulative weight reaches the draw. Falls back to the first entry if
/// floating-point rounding exhausts the walk, so a non-empty catalog always
/// yields a value.
pub fn sample_weighted<R: Rng + ?Sized>(entries: &'static [WeightedEntry], rng: &mut R) -> &'static str {
    let total: f64 = entries.iter().map(|(_, w)| w).sum();
    if total <= 0.0 {
        return entries[0].0;
    }

    let draw = rng.random_range(0.0..total);
    let mut cumulative = 0.0;
    for &(value, weight) in entries {
        cumulative += weight;
        if draw <= cumulative {
            return value;
        }
    }

    entries[0].0
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn assert_sums_to_one(entries: &[WeightedEntry], name: &str) {
        let total: f64 = entries.iter().map(|(_, w)| w).sum();
        assert!(
            (total - 1.0).abs() < 0.01,
            "{name} weights sum to {total}, expected ~1.0"
        );
    }

    #[test]
    fn catalog_weights_sum_to_one() {
        assert_sums_to_one(&LOCALES, "locale");
        assert_sums_to_one(&DESKTOP_ARCHES, "desktop arch");
        assert_sums_to_one(&MOBILE_ARCHES, "mobile arch");
        assert_sums_to_one(&ANDROID_MODELS, "android model");
        assert_sums_to_one(&IOS_MODELS, "ios model");
    }

    #[test]
    fn sampling_is_deterministic_per_seed() {
        let a = sample_weighted(&LOCALES, &mut StdRng::seed_from_u64(99));
        let b = sample_weighted(&LOCALES, &mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[test]
    fn sampling_stays_within_the_catalog() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..200 {
            let value = sample_weighted(&IOS_MODELS, &mut rng);
            assert!(IOS_MODELS.iter().any(|(v, _)| *v == value));
        }
    }

    #[test]
    fn heavy_entries_dominate() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut hits = 0;
        for _ in 0..500 {
            if sample_weighted(&LOCALES, &mut rng) == "en-US" {
                hits += 1;
            }
        }
        // en-US carries 54% of the weight; 500 draws land far above the
        // 1/13 a uniform catalog would give.
        assert!(hits > 150, "en-US drawn only {hits} times in 500");
    }
}
