use serde::{Deserialize, Serialize};

/// One undirected road of a topology description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Road {
    pub from: String,
    pub to: String,
    pub miles: u32,
}

impl Road {
    pub fn new(from: impl Into<String>, to: impl Into<String>, miles: u32) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            miles,
        }
    }
}

/// The fixed 5-city reference network on the Palouse.
///
/// Registration order follows first appearance: Pullman, Moscow, Colfax,
/// Lewiston, Spokane.
pub fn reference_network() -> Vec<Road> {
    vec![
        Road::new("Pullman", "Moscow", 8),
        Road::new("Pullman", "Colfax", 17),
        Road::new("Pullman", "Lewiston", 30),
        Road::new("Moscow", "Lewiston", 32),
        Road::new("Moscow", "Spokane", 85),
        Road::new("Colfax", "Spokane", 50),
    ]
}
