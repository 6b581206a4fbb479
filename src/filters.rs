use crate::configs::{BrowserFamily, DeviceType, Engine, OperatingSystem, RiskLevel};
use crate::profiles::browsers::BrowserTemplate;

/// One composable predicate over the template registry.
///
/// Filters never mutate the registry; composing them produces a new filtered
/// view. A closed enum keeps the filter set exhaustively testable.
#[derive(Debug, Clone, PartialEq)]
pub enum TemplateFilter {
    /// Template family is in the allowed set.
    Browser(Vec<BrowserFamily>),
    /// Template supports any of the allowed device classes.
    Device(Vec<DeviceType>),
    /// Template supports any of the allowed operating systems on a device.
    Os {
        /// The allowed operating systems.
        allowed: Vec<OperatingSystem>,
        /// Device class the OS support is checked against.
        device: DeviceType,
    },
    /// Template engine is in the allowed set.
    Engine(Vec<Engine>),
    /// Template version interval overlaps the requested interval. An absent
    /// bound always matches on that side.
    VersionRange {
        /// Requested inclusive minimum.
        min: Option<u32>,
        /// Requested inclusive maximum.
        max: Option<u32>,
    },
    /// Template risk classification is in the allowed set.
    Risk(Vec<RiskLevel>),
}

impl TemplateFilter {
    /// An OS filter. Defaults the device to desktop when unspecified;
    /// callers targeting mobile must pass the actual device for correctness.
    pub fn os(allowed: Vec<OperatingSystem>, device: Option<DeviceType>) -> Self {
        TemplateFilter::Os {
            allowed,
            device: device.unwrap_or_default(),
        }
    }

    /// The template passes this filter.
    pub fn matches(&self, template: &BrowserTemplate) -> bool {
        match self {
            TemplateFilter::Browser(allowed) => allowed.contains(&template.browser),
            TemplateFilter::Device(allowed) => allowed
                .iter()
                .any(|device| template.supports_device(*device)),
            TemplateFilter::Os { allowed, device } => allowed
                .iter()
                .any(|os| template.supported_os(*device).contains(os)),
            TemplateFilter::Engine(allowed) => allowed.contains(&template.engine),
            TemplateFilter::VersionRange { min, max } => {
                min.unwrap_or(template.min_version) <= template.max_version
                    && max.unwrap_or(template.max_version) >= template.min_version
            }
            TemplateFilter::Risk(allowed) => allowed.contains(&template.risk_level),
        }
    }
}

/// How a composite combines its filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterMode {
    #[default]
    /// Every filter must match.
    All,
    /// At least one filter must match.
    Any,
}

/// Ordered filter list applied with AND or OR semantics.
#[derive(Debug, Clone, Default)]
pub struct CompositeFilter {
    filters: Vec<TemplateFilter>,
    mode: FilterMode,
}

impl CompositeFilter {
    /// AND composite over the given filters.
    pub fn new(filters: Vec<TemplateFilter>) -> Self {
        Self {
            filters,
            mode: FilterMode::All,
        }
    }

    /// Composite with explicit combination semantics.
    pub fn with_mode(filters: Vec<TemplateFilter>, mode: FilterMode) -> Self {
        Self { filters, mode }
    }

    /// No filters are attached, so everything matches.
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// The template passes the composite.
    pub fn matches(&self, template: &BrowserTemplate) -> bool {
        if self.filters.is_empty() {
            return true;
        }

        match self.mode {
            FilterMode::All => self.filters.iter().all(|f| f.matches(template)),
            FilterMode::Any => self.filters.iter().any(|f| f.matches(template)),
        }
    }

    /// Filtered view of the given templates, preserving order.
    pub fn filter<'a>(
        &self,
        templates: &[&'a BrowserTemplate],
    ) -> Vec<&'a BrowserTemplate> {
        templates
            .iter()
            .copied()
            .filter(|t| self.matches(t))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profiles::browsers::all_templates;

    #[test]
    fn browser_filter_narrows_to_family() {
        let composite =
            CompositeFilter::new(vec![TemplateFilter::Browser(vec![BrowserFamily::Firefox])]);
        let result = composite.filter(&all_templates());
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].browser, BrowserFamily::Firefox);
    }

    #[test]
    fn os_filter_defaults_to_desktop() {
        // Safari on desktop only ships macOS; a Windows OS filter excludes it.
        let composite = CompositeFilter::new(vec![TemplateFilter::os(
            vec![OperatingSystem::Windows],
            None,
        )]);
        let result = composite.filter(&all_templates());
        assert!(result.iter().all(|t| t.browser != BrowserFamily::Safari));
        assert_eq!(result.len(), 3);
    }

    #[test]
    fn safari_on_windows_filters_to_nothing() {
        let composite = CompositeFilter::new(vec![
            TemplateFilter::Browser(vec![BrowserFamily::Safari]),
            TemplateFilter::os(vec![OperatingSystem::Windows], None),
        ]);
        assert!(composite.filter(&all_templates()).is_empty());
    }

    #[test]
    fn version_range_uses_overlap_semantics() {
        // Safari tops out at 26; a 100.. window overlaps only the Blink and
        // Gecko families.
        let composite = CompositeFilter::new(vec![TemplateFilter::VersionRange {
            min: Some(100),
            max: None,
        }]);
        let result = composite.filter(&all_templates());
        assert_eq!(result.len(), 3);
        assert!(result.iter().all(|t| t.browser != BrowserFamily::Safari));

        // No bound on either side matches everything.
        let open = CompositeFilter::new(vec![TemplateFilter::VersionRange {
            min: None,
            max: None,
        }]);
        assert_eq!(open.filter(&all_templates()).len(), 4);
    }

    #[test]
    fn engine_filter() {
        let composite = CompositeFilter::new(vec![TemplateFilter::Engine(vec![Engine::Blink])]);
        let result = composite.filter(&all_templates());
        assert_eq!(result.len(), 2);
        assert!(result.iter().all(|t| t.engine == Engine::Blink));
    }

    #[test]
    fn risk_filter() {
        let composite = CompositeFilter::new(vec![TemplateFilter::Risk(vec![RiskLevel::High])]);
        assert!(composite.filter(&all_templates()).is_empty());
    }

    #[test]
    fn empty_composite_matches_everything() {
        let composite = CompositeFilter::default();
        assert_eq!(composite.filter(&all_templates()).len(), 4);
        assert!(composite.is_empty());
    }

    #[test]
    fn any_mode_unions_filters() {
        let composite = CompositeFilter::with_mode(
            vec![
                TemplateFilter::Browser(vec![BrowserFamily::Safari]),
                TemplateFilter::Engine(vec![Engine::Gecko]),
            ],
            FilterMode::Any,
        );
        let result = composite.filter(&all_templates());
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn filtering_preserves_registry_order() {
        let composite = CompositeFilter::new(vec![TemplateFilter::Engine(vec![Engine::Blink])]);
        let result = composite.filter(&all_templates());
        assert_eq!(result[0].browser, BrowserFamily::Chrome);
        assert_eq!(result[1].browser, BrowserFamily::Edge);
    }
}
