/// The browser families with a capability descriptor in the registry.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BrowserFamily {
    /// Google Chrome.
    Chrome,
    /// Mozilla Firefox.
    Firefox,
    /// Apple Safari.
    Safari,
    /// Microsoft Edge.
    Edge,
}

impl BrowserFamily {
    /// Lowercase tag used for history keys and template tags.
    pub fn as_str(&self) -> &'static str {
        match self {
            BrowserFamily::Chrome => "chrome",
            BrowserFamily::Firefox => "firefox",
            BrowserFamily::Safari => "safari",
            BrowserFamily::Edge => "edge",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            BrowserFamily::Chrome => "Chrome",
            BrowserFamily::Firefox => "Firefox",
            BrowserFamily::Safari => "Safari",
            BrowserFamily::Edge => "Edge",
        }
    }
}

/// Rendering engines.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Engine {
    /// Blink (Chrome, Edge).
    Blink,
    /// Gecko (Firefox).
    Gecko,
    /// WebKit (Safari).
    WebKit,
}

impl Engine {
    /// Lowercase tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            Engine::Blink => "blink",
            Engine::Gecko => "gecko",
            Engine::WebKit => "webkit",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Engine::Blink => "Blink",
            Engine::Gecko => "Gecko",
            Engine::WebKit => "WebKit",
        }
    }
}

/// Operating systems the templates can target.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OperatingSystem {
    /// Windows.
    Windows,
    /// macOS.
    MacOs,
    /// Linux.
    Linux,
    /// ChromeOS.
    ChromeOs,
    /// Android.
    Android,
    /// iOS.
    Ios,
}

impl OperatingSystem {
    /// Lowercase tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            OperatingSystem::Windows => "windows",
            OperatingSystem::MacOs => "macos",
            OperatingSystem::Linux => "linux",
            OperatingSystem::ChromeOs => "chromeos",
            OperatingSystem::Android => "android",
            OperatingSystem::Ios => "ios",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            OperatingSystem::Windows => "Windows",
            OperatingSystem::MacOs => "macOS",
            OperatingSystem::Linux => "Linux",
            OperatingSystem::ChromeOs => "ChromeOS",
            OperatingSystem::Android => "Android",
            OperatingSystem::Ios => "iOS",
        }
    }

    /// OS ships on handheld hardware.
    pub fn is_mobile(&self) -> bool {
        matches!(self, OperatingSystem::Android | OperatingSystem::Ios)
    }
}

/// The device class a user-agent string claims to come from.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Default, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DeviceType {
    #[default]
    /// Desktop.
    Desktop,
    /// Mobile phone.
    Mobile,
    /// Tablet.
    Tablet,
}

impl DeviceType {
    /// Lowercase tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceType::Desktop => "desktop",
            DeviceType::Mobile => "mobile",
            DeviceType::Tablet => "tablet",
        }
    }

    /// Mobile and tablet share the mobile template branch.
    pub fn is_mobile(&self) -> bool {
        matches!(self, DeviceType::Mobile | DeviceType::Tablet)
    }
}

/// Bot-detection risk classification of a template.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RiskLevel {
    /// Low detection probability.
    Low,
    /// Medium detection probability.
    Medium,
    /// High detection probability.
    High,
}

impl RiskLevel {
    /// Lowercase tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }

    /// Numeric score for comparisons.
    pub fn score(&self) -> u8 {
        match self {
            RiskLevel::Low => 1,
            RiskLevel::Medium => 2,
            RiskLevel::High => 3,
        }
    }
}

/// How one template is selected from the filtered candidate list.
#[derive(PartialEq, Eq, Clone, Copy, Default, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StrategyKind {
    #[default]
    /// Cumulative-distribution sampling over market-share weights.
    Weighted,
    /// Every candidate has equal probability.
    Uniform,
    /// Cycle through candidates in registry order.
    RoundRobin,
    /// Uniform draws that retry around recently selected candidates.
    AvoidRecent,
}

impl StrategyKind {
    /// Lowercase tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            StrategyKind::Weighted => "weighted",
            StrategyKind::Uniform => "uniform",
            StrategyKind::RoundRobin => "round-robin",
            StrategyKind::AvoidRecent => "avoid-recent",
        }
    }
}
