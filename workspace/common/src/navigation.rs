//! Side navigation menu of the farmer portal.

/// One entry of the side menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub path: &'static str,
    /// Font Awesome classes
    pub icon: &'static str,
}

impl NavItem {
    /// Only an exact path match counts; `/harvest/2024` does not mark
    /// `/harvest` active.
    pub fn is_active(&self, current_path: &str) -> bool {
        is_active(current_path, self.path)
    }
}

pub const FARMER_HOME: &str = "/farmerhome";
pub const WEATHER_REPORT: &str = "/weatherreport";
pub const REPORT_DISEASE: &str = "/reportdisease";
pub const USE_CHEMICAL: &str = "/usechemical";
pub const USE_MACHINE: &str = "/usemachine";
pub const IRRIGATION: &str = "/irrigation";
pub const HARVEST: &str = "/harvest";
pub const STORAGE: &str = "/storage";

pub const NAV_ITEMS: [NavItem; 8] = [
    NavItem { label: "Home", path: FARMER_HOME, icon: "fas fa-home" },
    NavItem { label: "Weather Report", path: WEATHER_REPORT, icon: "fas fa-cloud" },
    NavItem { label: "Report Diseases", path: REPORT_DISEASE, icon: "fas fa-virus" },
    NavItem { label: "Use Chemicals", path: USE_CHEMICAL, icon: "fas fa-flask" },
    NavItem { label: "Use Machines", path: USE_MACHINE, icon: "fas fa-cogs" },
    NavItem { label: "Irrigation", path: IRRIGATION, icon: "fas fa-tint" },
    NavItem { label: "Harvest", path: HARVEST, icon: "fas fa-tractor" },
    NavItem { label: "Storage", path: STORAGE, icon: "fas fa-warehouse" },
];

pub fn is_active(current_path: &str, item_path: &str) -> bool {
    current_path == item_path
}

/// The menu entry for `current_path`, if it is one of ours.
pub fn active_item(current_path: &str) -> Option<&'static NavItem> {
    NAV_ITEMS.iter().find(|item| item.is_active(current_path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_path_is_active() {
        assert!(is_active("/weatherreport", WEATHER_REPORT));
        assert_eq!(active_item("/storage").map(|i| i.label), Some("Storage"));
    }

    #[test]
    fn child_and_sibling_paths_are_not_active() {
        assert!(!is_active("/harvest/2024", HARVEST));
        assert!(!is_active("/harvest/", HARVEST));
        assert!(!is_active("/", FARMER_HOME));
        assert!(active_item("/farmerhome/settings").is_none());
    }

    #[test]
    fn at_most_one_item_is_active() {
        for item in NAV_ITEMS {
            let active = NAV_ITEMS.iter().filter(|i| i.is_active(item.path)).count();
            assert_eq!(active, 1, "path {}", item.path);
        }
    }
}
