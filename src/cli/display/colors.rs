//! Color theme for CLI output

use comfy_table::Color as TableColor;

/// Color theme for terminal output
#[derive(Debug, Clone)]
pub struct ColorTheme {
    pub success: TableColor,
    pub warning: TableColor,
    pub error: TableColor,
    pub info: TableColor,
}

impl Default for ColorTheme {
    fn default() -> Self {
        Self {
            success: TableColor::Green,
            warning: TableColor::Yellow,
            error: TableColor::Red,
            info: TableColor::Cyan,
        }
    }
}

impl ColorTheme {
    /// Get color for a volume lifecycle status, `None` leaves the cell unstyled
    pub fn get_status_color(&self, status: &str) -> Option<TableColor> {
        match status {
            "available" => Some(self.success),
            "inUse" => Some(self.info),
            "creating" | "deleting" | "extending" | "attaching" | "detaching" => {
                Some(self.warning)
            }
            s if s.starts_with("error") => Some(self.error),
            _ => None,
        }
    }
}
