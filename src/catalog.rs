//! Static category configuration shared by every input and output path.
//!
//! The website renders a fixed set of vehicle categories; their display
//! metadata lives here rather than in an external config file so that the
//! converter, the template generator, and the front-end stay in lockstep.

/// Column header naming the vehicle model.
pub const MODEL_COLUMN: &str = "Model";
/// Column header naming the variant description.
pub const VARIANT_COLUMN: &str = "Variant";
/// Column header naming the raw price-range text.
pub const PRICE_COLUMN: &str = "2026 Price Range (SRP)";

/// Header row shared by the CSV templates and the workbook sheets.
pub const COLUMNS: [&str; 3] = [MODEL_COLUMN, VARIANT_COLUMN, PRICE_COLUMN];

/// Display metadata for one vehicle category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryDescriptor {
    /// Worksheet name in the workbook; also the CSV file stem.
    pub source_key: &'static str,
    /// Slug used by the front-end to key the category.
    pub id: &'static str,
    pub name: &'static str,
    pub subtitle: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
}

impl CategoryDescriptor {
    /// File name of this category's CSV source inside the template directory.
    pub fn csv_file_name(&self) -> String {
        format!("{}.csv", self.source_key)
    }
}

/// Every category the website displays, in display order.
pub const CATEGORIES: [CategoryDescriptor; 4] = [
    CategoryDescriptor {
        source_key: "Passenger Vehicles",
        id: "passenger",
        name: "Passenger Vehicles",
        subtitle: "Personal & Family",
        icon: "👨‍👩‍👧‍👦",
        description: "Personal & Family vehicles for everyday comfort",
    },
    CategoryDescriptor {
        source_key: "Light Commercial",
        id: "light-commercial",
        name: "Light Commercial Vehicles",
        subtitle: "Small Business",
        icon: "🏪",
        description: "Small Business solutions for efficient operations",
    },
    CategoryDescriptor {
        source_key: "Medium Duty Trucks",
        id: "medium-duty",
        name: "Light to Medium Duty Trucks",
        subtitle: "N-Series & F-Series",
        icon: "🚛",
        description: "N-Series & F-Series for versatile hauling",
    },
    CategoryDescriptor {
        source_key: "Heavy Duty GIGA",
        id: "heavy-duty",
        name: "Heavy Duty & Special Purpose",
        subtitle: "GIGA",
        icon: "💪",
        description: "GIGA series for demanding operations",
    },
];
