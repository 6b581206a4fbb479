use crate::configs::{BrowserFamily, DeviceType, Engine, OperatingSystem, RiskLevel};

/// Immutable capability descriptor of one browser family.
///
/// Holds the version bounds, market-share weight and risk classification;
/// the per-device OS support and per-OS template strings are closed matches
/// keyed on the family. Invariant: `min_version <= stable_version <=
/// max_version` for every registry entry.
#[derive(Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BrowserTemplate {
    /// The browser family this descriptor simulates.
    pub browser: BrowserFamily,
    /// Rendering engine of the family.
    pub engine: Engine,
    /// Current stable major version.
    pub stable_version: u32,
    /// Oldest major version still generated.
    pub min_version: u32,
    /// Newest major version generated.
    pub max_version: u32,
    /// Market share in percent, used by the weighted strategy.
    pub market_share: f64,
    /// Bot-detection risk classification.
    pub risk_level: RiskLevel,
}

/// The fixed template registry, ordered by family.
///
/// Registry order is caller-visible: the round-robin strategy cycles it and
/// filters preserve it.
pub static BROWSER_TEMPLATES: [BrowserTemplate; 4] = [
    BrowserTemplate {
        browser: BrowserFamily::Chrome,
        engine: Engine::Blink,
        stable_version: 145,
        min_version: 90,
        max_version: 145,
        market_share: 64.0,
        risk_level: RiskLevel::Low,
    },
    BrowserTemplate {
        browser: BrowserFamily::Firefox,
        engine: Engine::Gecko,
        stable_version: 147,
        min_version: 100,
        max_version: 147,
        market_share: 3.0,
        risk_level: RiskLevel::Low,
    },
    BrowserTemplate {
        browser: BrowserFamily::Safari,
        engine: Engine::WebKit,
        stable_version: 26,
        min_version: 14,
        max_version: 26,
        market_share: 20.0,
        risk_level: RiskLevel::Low,
    },
    BrowserTemplate {
        browser: BrowserFamily::Edge,
        engine: Engine::Blink,
        stable_version: 144,
        min_version: 90,
        max_version: 144,
        market_share: 5.0,
        risk_level: RiskLevel::Low,
    },
];

/// All registry entries in registry order.
pub fn all_templates() -> Vec<&'static BrowserTemplate> {
    BROWSER_TEMPLATES.iter().collect()
}

/// The registry entry for a family.
pub fn template_for_family(family: BrowserFamily) -> &'static BrowserTemplate {
    // The registry carries exactly one entry per family.
    BROWSER_TEMPLATES
        .iter()
        .find(|t| t.browser == family)
        .unwrap_or(&BROWSER_TEMPLATES[0])
}

impl BrowserTemplate {
    /// Device classes this family ships on.
    pub fn supported_devices(&self) -> &'static [DeviceType] {
        &[DeviceType::Desktop, DeviceType::Mobile, DeviceType::Tablet]
    }

    /// Operating systems supported on the given device class.
    pub fn supported_os(&self, device: DeviceType) -> &'static [OperatingSystem] {
        match (self.browser, device) {
            (BrowserFamily::Chrome, DeviceType::Desktop) => &[
                OperatingSystem::Windows,
                OperatingSystem::MacOs,
                OperatingSystem::Linux,
                OperatingSystem::ChromeOs,
            ],
            (BrowserFamily::Chrome, _) => &[OperatingSystem::Android, OperatingSystem::Ios],
            (BrowserFamily::Firefox, DeviceType::Desktop) => &[
                OperatingSystem::Windows,
                OperatingSystem::MacOs,
                OperatingSystem::Linux,
            ],
            (BrowserFamily::Firefox, _) => &[OperatingSystem::Android, OperatingSystem::Ios],
            (BrowserFamily::Safari, DeviceType::Desktop) => &[OperatingSystem::MacOs],
            (BrowserFamily::Safari, _) => &[OperatingSystem::Ios],
            (BrowserFamily::Edge, DeviceType::Desktop) => {
                &[OperatingSystem::Windows, OperatingSystem::MacOs]
            }
            (BrowserFamily::Edge, _) => &[OperatingSystem::Android, OperatingSystem::Ios],
        }
    }

    /// The family ships on this device class.
    pub fn supports_device(&self, device: DeviceType) -> bool {
        self.supported_devices().contains(&device)
    }

    /// The family ships this OS on this device class.
    pub fn supports_os(&self, device: DeviceType, os: OperatingSystem) -> bool {
        self.supports_device(device) && self.supported_os(device).contains(&os)
    }

    /// Desktop template string for an OS. Empty when the OS has no desktop
    /// template, which renders to an empty string rather than failing.
    pub fn desktop_template(&self, os: OperatingSystem) -> &'static str {
        match (self.browser, os) {
            (BrowserFamily::Chrome, OperatingSystem::Windows) => {
                "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/{version}.0.0.0 Safari/537.36"
            }
            (BrowserFamily::Chrome, OperatingSystem::MacOs) => {
                "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/{version}.0.0.0 Safari/537.36"
            }
            (BrowserFamily::Chrome, OperatingSystem::Linux) => {
                "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/{version}.0.0.0 Safari/537.36"
            }
            (BrowserFamily::Chrome, OperatingSystem::ChromeOs) => {
                "Mozilla/5.0 (X11; CrOS x86_64 14541.0.0) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/{version}.0.0.0 Safari/537.36"
            }
            (BrowserFamily::Firefox, OperatingSystem::Windows) => {
                "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:{version}.0) Gecko/20100101 Firefox/{version}.0"
            }
            (BrowserFamily::Firefox, OperatingSystem::MacOs) => {
                "Mozilla/5.0 (Macintosh; Intel Mac OS X 10.15; rv:{version}.0) Gecko/20100101 Firefox/{version}.0"
            }
            (BrowserFamily::Firefox, OperatingSystem::Linux) => {
                "Mozilla/5.0 (X11; Linux x86_64; rv:{version}.0) Gecko/20100101 Firefox/{version}.0"
            }
            (BrowserFamily::Safari, OperatingSystem::MacOs) => {
                "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/{version}.0 Safari/605.1.15"
            }
            (BrowserFamily::Edge, OperatingSystem::Windows) => {
                "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/{version}.0.0.0 Safari/537.36 Edg/{version}.0.0.0"
            }
            (BrowserFamily::Edge, OperatingSystem::MacOs) => {
                "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/{version}.0.0.0 Safari/537.36 Edg/{version}.0.0.0"
            }
            _ => "",
        }
    }

    /// Mobile template string for an OS. Empty when the OS has no mobile
    /// template.
    pub fn mobile_template(&self, os: OperatingSystem) -> &'static str {
        match (self.browser, os) {
            (BrowserFamily::Chrome, OperatingSystem::Android) => {
                "Mozilla/5.0 (Linux; Android {os_version}; {model}) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/{version}.0.0.0 Mobile Safari/537.36"
            }
            (BrowserFamily::Chrome, OperatingSystem::Ios) => {
                "Mozilla/5.0 (iPhone; CPU iPhone OS {os_version} like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) CriOS/{version}.0.0.0 Mobile/15E148 Safari/604.1"
            }
            (BrowserFamily::Firefox, OperatingSystem::Android) => {
                "Mozilla/5.0 (Android {os_version}; Mobile; rv:{version}.0) Gecko/{version}.0 Firefox/{version}.0"
            }
            (BrowserFamily::Firefox, OperatingSystem::Ios) => {
                "Mozilla/5.0 (iPhone; CPU iPhone OS {os_version} like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) FxiOS/{version}.0 Mobile/15E148 Safari/605.1.15"
            }
            (BrowserFamily::Safari, OperatingSystem::Ios) => {
                "Mozilla/5.0 (iPhone; CPU iPhone OS {os_version} like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/{version}.0 Mobile/15E148 Safari/604.1"
            }
            (BrowserFamily::Edge, OperatingSystem::Android) => {
                "Mozilla/5.0 (Linux; Android {os_version}; {model}) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/{version}.0.0.0 Mobile Safari/537.36 EdgA/{version}.0.0.0"
            }
            (BrowserFamily::Edge, OperatingSystem::Ios) => {
                "Mozilla/5.0 (iPhone; CPU iPhone OS {os_version} like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/15.0 EdgiOS/{version}.0.0.0 Mobile/15E148 Safari/604.1"
            }
            _ => "",
        }
    }

    /// Template string for a device class and OS.
    pub fn template_for(&self, device: DeviceType, os: OperatingSystem) -> &'static str {
        if device.is_mobile() {
            self.mobile_template(os)
        } else {
            self.desktop_template(os)
        }
    }

    /// Engine version string for a browser major version.
    pub fn engine_version(&self, browser_version: u32) -> String {
        match self.engine {
            // Blink and Gecko majors track the browser major.
            Engine::Blink | Engine::Gecko => browser_version.to_string(),
            // The WebKit build string moves rarely.
            Engine::WebKit => "605.1.15".to_string(),
        }
    }

    /// Tags attached to this template.
    pub fn tags(&self) -> [&'static str; 2] {
        ["browser", self.browser.as_str()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_version_bounds_hold() {
        for template in &BROWSER_TEMPLATES {
            assert!(
                template.min_version <= template.stable_version
                    && template.stable_version <= template.max_version,
                "{} violates min <= stable <= max",
                template.browser.label()
            );
        }
    }

    #[test]
    fn registry_weights_are_percentages() {
        for template in &BROWSER_TEMPLATES {
            assert!((0.0..=100.0).contains(&template.market_share));
        }
    }

    #[test]
    fn every_supported_os_has_a_template() {
        // A supported OS without a template string renders empty output;
        // the registry must not ship such a combination.
        for template in &BROWSER_TEMPLATES {
            for &device in template.supported_devices() {
                for &os in template.supported_os(device) {
                    assert!(
                        !template.template_for(device, os).is_empty(),
                        "{} has no {} template for {}",
                        template.browser.label(),
                        device.as_str(),
                        os.label()
                    );
                }
            }
        }
    }

    #[test]
    fn safari_never_supports_windows() {
        let safari = template_for_family(BrowserFamily::Safari);
        assert!(!safari.supports_os(DeviceType::Desktop, OperatingSystem::Windows));
        assert_eq!(safari.desktop_template(OperatingSystem::Windows), "");
    }

    #[test]
    fn engine_versions() {
        assert_eq!(
            template_for_family(BrowserFamily::Chrome).engine_version(120),
            "120"
        );
        assert_eq!(
            template_for_family(BrowserFamily::Safari).engine_version(17),
            "605.1.15"
        );
    }

    #[test]
    fn template_tags_carry_family() {
        assert_eq!(
            template_for_family(BrowserFamily::Edge).tags(),
            ["browser", "edge"]
        );
    }
}
