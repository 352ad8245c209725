use serde::Serialize;
use utoipa::ToSchema;

/// Fixed service catalog. Prices and names are snapshotted onto each
/// appointment at submission time, so editing this table never rewrites
/// history.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Package {
    #[schema(value_type = String)]
    pub id: &'static str,
    #[schema(value_type = String)]
    pub name: &'static str,
    pub price: i64,
    #[schema(value_type = Vec<String>)]
    pub features: &'static [&'static str],
}

pub const PACKAGES: [Package; 2] = [
    Package {
        id: "basic",
        name: "Basic Detail",
        price: 45,
        features: &[
            "Exterior wash & dry",
            "Tire shine",
            "Interior vacuum",
            "Windows inside & out",
        ],
    },
    Package {
        id: "ultimate",
        name: "Ultimate Detail",
        price: 60,
        features: &[
            "Foam cannon hand wash",
            "Clay bar & spray sealant",
            "Interior deep clean & shampoo",
            "Trim & tire dressing + windows",
        ],
    },
];

pub fn find_package(id: &str) -> Option<&'static Package> {
    PACKAGES.iter().find(|p| p.id == id)
}
